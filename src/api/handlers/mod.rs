//! HTTP handlers for the recipe resource.

pub mod recipe;

pub use recipe::{
    ListRecipesParams, create_recipe, delete_recipe, full_update_recipe, get_recipe, list_recipes,
    partial_update_recipe,
};
