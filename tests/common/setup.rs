//! Test application setup.

use std::sync::Arc;

use axum::Router;
use cookbook::api::routes::create_router;
use cookbook::infrastructure::{AppConfig, AppDependencies, SqliteRecipeStore};

/// An in-process application instance with direct store access.
///
/// The store handle allows tests to arrange state and inspect effects
/// without going through the HTTP surface.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<SqliteRecipeStore>,
}

/// Builds the router against a fresh in-memory store.
pub async fn spawn_app() -> TestApp {
    let store = Arc::new(
        SqliteRecipeStore::in_memory()
            .await
            .expect("in-memory store"),
    );
    let dependencies = AppDependencies::from_arc(AppConfig::default(), Arc::clone(&store));

    TestApp {
        router: create_router(dependencies),
        store,
    }
}
