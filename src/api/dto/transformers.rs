//! Pure transformations from domain entities to response DTOs.

use crate::api::dto::responses::{IngredientResponse, RecipeResponse};
use crate::domain::recipe::Recipe;

/// Maps a recipe entity onto its response shape.
///
/// Ingredients keep their store iteration order (ascending id).
#[must_use]
pub fn recipe_to_response(recipe: &Recipe) -> RecipeResponse {
    RecipeResponse {
        id: recipe.id.value(),
        name: recipe.name.clone(),
        description: recipe.description.clone(),
        ingredients: recipe
            .ingredients
            .iter()
            .map(|ingredient| IngredientResponse {
                name: ingredient.name.clone(),
            })
            .collect(),
    }
}

/// Maps a sequence of recipes, preserving order.
#[must_use]
pub fn recipes_to_responses(recipes: &[Recipe]) -> Vec<RecipeResponse> {
    recipes.iter().map(recipe_to_response).collect()
}
