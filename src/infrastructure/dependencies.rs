//! Dependency container for the recipe catalog.
//!
//! `AppDependencies` holds everything the HTTP layer needs: configuration
//! and the recipe store. It is generic over the store port so tests can run
//! against lightweight store implementations, and cheap to clone (the store
//! is shared behind an `Arc`).

use std::fmt;
use std::sync::Arc;

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::store::RecipeStore;

/// Application dependency container.
///
/// # Thread Safety
///
/// The store is wrapped in `Arc` and required to be `Send + Sync`, making
/// the container safe to share across request handlers.
pub struct AppDependencies<S> {
    /// Application configuration.
    config: AppConfig,
    /// The recipe store.
    store: Arc<S>,
}

impl<S: RecipeStore> AppDependencies<S> {
    /// Creates a new container, taking ownership of the store.
    #[must_use]
    pub fn new(config: AppConfig, store: S) -> Self {
        Self {
            config,
            store: Arc::new(store),
        }
    }

    /// Creates a container from an already-shared store.
    #[must_use]
    pub const fn from_arc(config: AppConfig, store: Arc<S>) -> Self {
        Self { config, store }
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns a reference to the recipe store.
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Returns the database URL from configuration.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.config.database_url
    }

    /// Returns the application host from configuration.
    #[must_use]
    pub fn app_host(&self) -> &str {
        &self.config.app_host
    }

    /// Returns the application port from configuration.
    #[must_use]
    pub const fn app_port(&self) -> u16 {
        self.config.app_port
    }
}

// Manual Clone: the store itself need not be Clone, only the Arc is cloned.
impl<S> Clone for AppDependencies<S> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> fmt::Debug for AppDependencies<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AppDependencies")
            .field("config", &self.config)
            .field("store", &"<RecipeStore>")
            .finish()
    }
}
