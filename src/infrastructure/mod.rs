//! Infrastructure layer: persistence, configuration, and wiring.

pub mod config;
pub mod dependencies;
pub mod sqlite;
pub mod store;

pub use config::{AppConfig, ConfigError};
pub use dependencies::AppDependencies;
pub use sqlite::SqliteRecipeStore;
pub use store::{NewRecipe, RecipeChanges, RecipeStore, StoreError};
