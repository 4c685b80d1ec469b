//! Route configuration for the recipe API.
//!
//! # Routes
//!
//! | Method | Path | Handler | Description |
//! |--------|------|---------|-------------|
//! | GET | /recipes | `list_recipes` | List recipes (optional `?name=` filter) |
//! | POST | /recipes | `create_recipe` | Create a recipe with ingredients |
//! | GET | /recipes/{id} | `get_recipe` | Retrieve one recipe |
//! | PUT | /recipes/{id} | `full_update_recipe` | Replace name, description, ingredients |
//! | PATCH | /recipes/{id} | `partial_update_recipe` | Update supplied fields only |
//! | DELETE | /recipes/{id} | `delete_recipe` | Delete recipe and ingredients |
//! | GET | /health | `health_check` | Health check endpoint |

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use crate::api::handlers::{
    create_recipe, delete_recipe, full_update_recipe, get_recipe, list_recipes,
    partial_update_recipe,
};
use crate::infrastructure::dependencies::AppDependencies;
use crate::infrastructure::store::RecipeStore;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status ("healthy" or "unhealthy").
    pub status: String,
    /// Service version.
    pub version: String,
}

/// GET /health - Health check endpoint.
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(response))
}

/// Creates the Axum router with all API routes.
///
/// # Arguments
///
/// * `dependencies` - The application dependencies (configuration, store)
///
/// # Example
///
/// ```rust,ignore
/// use cookbook::api::routes::create_router;
/// use cookbook::infrastructure::{AppConfig, AppDependencies, SqliteRecipeStore};
///
/// async fn start() -> Result<(), Box<dyn std::error::Error>> {
///     let store = SqliteRecipeStore::connect("sqlite:cookbook.db?mode=rwc").await?;
///     let router = create_router(AppDependencies::new(AppConfig::default(), store));
///
///     let listener = tokio::net::TcpListener::bind("0.0.0.0:8081").await?;
///     axum::serve(listener, router).await?;
///     Ok(())
/// }
/// ```
pub fn create_router<S: RecipeStore>(dependencies: AppDependencies<S>) -> Router {
    Router::new()
        // Recipe collection
        .route("/recipes", get(list_recipes::<S>).post(create_recipe::<S>))
        // Recipe detail
        .route(
            "/recipes/{id}",
            get(get_recipe::<S>)
                .put(full_update_recipe::<S>)
                .patch(partial_update_recipe::<S>)
                .delete(delete_recipe::<S>),
        )
        // Health check
        .route("/health", get(health_check))
        .layer(create_cors_layer())
        .with_state(dependencies)
}

/// Creates the CORS layer configuration.
///
/// In production, origins should be restricted to specific domains.
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

// =============================================================================
// Tests
// =============================================================================
