//! Recipe and ingredient entities.
//!
//! A `Recipe` exclusively owns its `Ingredient`s: an ingredient always
//! references exactly one recipe and cannot outlive it. Ingredients are
//! kept in creation order (ascending id), which is the order the API
//! renders them in.

use std::fmt;

use crate::domain::value_objects::{IngredientId, RecipeId};

/// An ingredient belonging to exactly one recipe.
///
/// Ingredient names are not unique: two recipes (or even one recipe) may
/// carry identically named ingredients as distinct records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    /// Store-assigned identifier, never reused.
    pub id: IngredientId,
    /// The ingredient name.
    pub name: String,
    /// The owning recipe.
    pub recipe_id: RecipeId,
}

impl Ingredient {
    /// Creates an ingredient record.
    #[must_use]
    pub const fn new(id: IngredientId, name: String, recipe_id: RecipeId) -> Self {
        Self {
            id,
            name,
            recipe_id,
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.name)
    }
}

/// A recipe with its owned ingredients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// Store-assigned identifier, immutable for the lifetime of the record.
    pub id: RecipeId,
    /// The recipe name.
    pub name: String,
    /// A free-form description.
    pub description: String,
    /// Owned ingredients in creation order (ascending id).
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Creates a recipe record.
    #[must_use]
    pub const fn new(
        id: RecipeId,
        name: String,
        description: String,
        ingredients: Vec<Ingredient>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            ingredients,
        }
    }

    /// Returns the ingredient names in creation order.
    #[must_use]
    pub fn ingredient_names(&self) -> Vec<&str> {
        self.ingredients
            .iter()
            .map(|ingredient| ingredient.name.as_str())
            .collect()
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.name)
    }
}
