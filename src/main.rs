//! Recipe Catalog Application Entry Point

use cookbook::api::routes::create_router;
use cookbook::infrastructure::{AppConfig, AppDependencies, SqliteRecipeStore};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cookbook=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Recipe Catalog...");

    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => {
            tracing::info!(
                "Configuration loaded: host={}, port={}",
                config.app_host,
                config.app_port
            );
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            tracing::info!("Using default configuration");
            AppConfig::default()
        }
    };

    let bind_address = format!("{}:{}", config.app_host, config.app_port);

    // Open the store (creates the database and schema if missing)
    let store = match SqliteRecipeStore::connect(&config.database_url).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open recipe store: {e}");
            return;
        }
    };

    tracing::info!("Recipe store ready at {}", config.database_url);

    // Create dependencies container
    let deps = AppDependencies::new(config, store);

    // Create router with middleware
    let app = create_router(deps).layer(TraceLayer::new_for_http());

    // Start server
    let listener = TcpListener::bind(&bind_address).await.unwrap();
    tracing::info!("Recipe Catalog started on http://{bind_address}");
    tracing::info!("Available endpoints:");
    tracing::info!("  GET    /recipes       - List recipes (?name= filters)");
    tracing::info!("  POST   /recipes       - Create recipe");
    tracing::info!("  GET    /recipes/:id   - Retrieve recipe");
    tracing::info!("  PUT    /recipes/:id   - Full update");
    tracing::info!("  PATCH  /recipes/:id   - Partial update");
    tracing::info!("  DELETE /recipes/:id   - Delete recipe");
    tracing::info!("  GET    /health        - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    tracing::info!("Recipe Catalog stopped");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    tracing::info!("Shutdown signal received");
}
