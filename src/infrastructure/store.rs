//! The recipe store port.
//!
//! `RecipeStore` is the seam between the HTTP resource layer and whatever
//! persistence engine backs the catalog. Handlers and tests depend on this
//! trait only; [`crate::infrastructure::SqliteRecipeStore`] is the shipped
//! adapter.
//!
//! All composite operations are transactional at the adapter level:
//! creating a recipe with its ingredients, and replacing a recipe's
//! ingredient set during update, either complete fully or leave no trace.

use std::future::Future;

use thiserror::Error;

use crate::domain::recipe::{Ingredient, Recipe};
use crate::domain::value_objects::{IngredientId, RecipeId};

// =============================================================================
// StoreError
// =============================================================================

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced recipe does not exist.
    #[error("Recipe with id '{id}' not found")]
    RecipeNotFound {
        /// The identifier that failed to resolve.
        id: RecipeId,
    },

    /// The underlying database reported a failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Creates a `RecipeNotFound` error for the given identifier.
    #[must_use]
    pub const fn recipe_not_found(id: RecipeId) -> Self {
        Self::RecipeNotFound { id }
    }

    /// Returns `true` if this error is a missing-recipe error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::RecipeNotFound { .. })
    }
}

// =============================================================================
// Input Records
// =============================================================================

/// Input record for creating a recipe together with its ingredients.
///
/// The store itself accepts an empty ingredient list; the non-empty
/// constraint is a request-validation rule enforced before the store is
/// reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    /// The recipe name.
    pub name: String,
    /// The recipe description.
    pub description: String,
    /// Ingredient names, created in the given order.
    pub ingredients: Vec<String>,
}

impl NewRecipe {
    /// Creates a new draft recipe.
    #[must_use]
    pub const fn new(name: String, description: String, ingredients: Vec<String>) -> Self {
        Self {
            name,
            description,
            ingredients,
        }
    }
}

/// Field changes for a recipe update.
///
/// `None` fields are left untouched. A `Some` ingredient list triggers the
/// destructive replace: every existing ingredient of the recipe is deleted
/// and the new set is created with fresh identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeChanges {
    /// Replacement name, if supplied.
    pub name: Option<String>,
    /// Replacement description, if supplied.
    pub description: Option<String>,
    /// Replacement ingredient names, if supplied.
    pub ingredients: Option<Vec<String>>,
}

impl From<NewRecipe> for RecipeChanges {
    /// A full update supplies every field, so a complete draft converts
    /// into an all-`Some` change set.
    fn from(draft: NewRecipe) -> Self {
        Self {
            name: Some(draft.name),
            description: Some(draft.description),
            ingredients: Some(draft.ingredients),
        }
    }
}

// =============================================================================
// RecipeStore
// =============================================================================

/// Durable CRUD for recipes and their ingredients, with referential
/// integrity.
///
/// Implementations must guarantee:
///
/// - identifiers are assigned in ascending order and never reused;
/// - deleting a recipe cascade-deletes its ingredients;
/// - `create_recipe` and `update_recipe` are atomic;
/// - the name filter is a case-sensitive, unanchored substring match;
/// - listed recipes are ordered by ascending id, as are each recipe's
///   ingredients.
pub trait RecipeStore: Send + Sync + 'static {
    /// Creates a recipe and its ingredients in one transaction.
    fn create_recipe(
        &self,
        draft: NewRecipe,
    ) -> impl Future<Output = Result<Recipe, StoreError>> + Send;

    /// Creates a single ingredient bound to an existing recipe.
    ///
    /// Fails with [`StoreError::RecipeNotFound`] when the recipe is absent.
    fn create_ingredient(
        &self,
        recipe_id: RecipeId,
        name: &str,
    ) -> impl Future<Output = Result<Ingredient, StoreError>> + Send;

    /// Lists recipes, optionally filtered by a name substring.
    fn list_recipes(
        &self,
        name_filter: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Recipe>, StoreError>> + Send;

    /// Fetches one recipe with its ingredients.
    fn get_recipe(&self, id: RecipeId)
    -> impl Future<Output = Result<Recipe, StoreError>> + Send;

    /// Applies field changes, replacing the ingredient set when supplied.
    fn update_recipe(
        &self,
        id: RecipeId,
        changes: RecipeChanges,
    ) -> impl Future<Output = Result<Recipe, StoreError>> + Send;

    /// Deletes a recipe and, atomically, all its ingredients.
    fn delete_recipe(&self, id: RecipeId) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Deletes every ingredient owned by the recipe (the replace step).
    fn delete_ingredients_of_recipe(
        &self,
        id: RecipeId,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Returns whether an ingredient with the given id exists.
    fn ingredient_exists(
        &self,
        id: IngredientId,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;
}
