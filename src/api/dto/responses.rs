//! Response DTOs for the recipe API.
//!
//! # Example JSON
//!
//! ```json
//! {
//!     "id": 1,
//!     "name": "Basic vanilla cake",
//!     "description": "Bla bla bla",
//!     "ingredients": [{"name": "eggs"}, {"name": "sugar"}]
//! }
//! ```

use serde::Serialize;

/// An ingredient as rendered in responses.
///
/// Only the name is exposed; ingredient identifiers are internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientResponse {
    /// The ingredient name.
    pub name: String,
}

/// A recipe as rendered in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeResponse {
    /// The store-assigned recipe identifier.
    pub id: i64,
    /// The recipe name.
    pub name: String,
    /// The recipe description.
    pub description: String,
    /// Owned ingredients in creation order.
    pub ingredients: Vec<IngredientResponse>,
}
