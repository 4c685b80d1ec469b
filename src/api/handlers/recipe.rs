//! Recipe resource handlers.
//!
//! Each handler is stateless between calls and follows the same pipeline:
//! resolve the target (where there is one), validate the payload through
//! the DTO layer, execute the store operation, and transform the result.
//!
//! Update semantics: when a payload supplies `ingredients`, the store
//! performs a destructive replace (all prior ingredients deleted, the new
//! set created with fresh ids) rather than a merge. A payload without the
//! key leaves ingredients untouched; that path exists on partial update
//! only, since full update requires the key.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::api::dto::requests::{validate_create_payload, validate_partial_payload};
use crate::api::dto::responses::RecipeResponse;
use crate::api::dto::transformers::{recipe_to_response, recipes_to_responses};
use crate::api::errors::ApiError;
use crate::domain::value_objects::RecipeId;
use crate::infrastructure::dependencies::AppDependencies;
use crate::infrastructure::store::{RecipeChanges, RecipeStore};

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListRecipesParams {
    /// Case-sensitive substring to filter recipe names by.
    pub name: Option<String>,
}

/// GET /recipes - List recipes, optionally filtered by name substring.
///
/// # Response
///
/// - `200 OK` - Recipes ordered by ascending id (empty list when nothing
///   matches)
pub async fn list_recipes<S: RecipeStore>(
    State(dependencies): State<AppDependencies<S>>,
    Query(params): Query<ListRecipesParams>,
) -> Result<Json<Vec<RecipeResponse>>, ApiError> {
    // An empty filter value means "no filter", same as an absent parameter.
    let filter = params.name.as_deref().filter(|needle| !needle.is_empty());
    let recipes = dependencies.store().list_recipes(filter).await?;
    Ok(Json(recipes_to_responses(&recipes)))
}

/// GET /recipes/{id} - Retrieve one recipe.
///
/// # Response
///
/// - `200 OK` - Recipe found
/// - `404 Not Found` - No recipe under that id
pub async fn get_recipe<S: RecipeStore>(
    State(dependencies): State<AppDependencies<S>>,
    Path(id): Path<String>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let id = resolve_recipe_id(&id)?;
    let recipe = dependencies.store().get_recipe(id).await?;
    Ok(Json(recipe_to_response(&recipe)))
}

/// POST /recipes - Create a recipe with its ingredients.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Basic vanilla cake",
///     "description": "Bla bla bla",
///     "ingredients": [{"name": "eggs"}, {"name": "sugar"}]
/// }
/// ```
///
/// # Response
///
/// - `201 Created` - Recipe stored, id assigned
/// - `400 Bad Request` - Field-keyed validation errors
pub async fn create_recipe<S: RecipeStore>(
    State(dependencies): State<AppDependencies<S>>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<RecipeResponse>), ApiError> {
    let draft = validate_create_payload(&payload)?;
    let recipe = dependencies.store().create_recipe(draft).await?;
    Ok((StatusCode::CREATED, Json(recipe_to_response(&recipe))))
}

/// PUT /recipes/{id} - Fully update a recipe.
///
/// The payload contract matches create: every field required, ingredients
/// non-empty. The existing ingredient set is replaced wholesale.
///
/// # Response
///
/// - `200 OK` - Recipe updated
/// - `400 Bad Request` - Field-keyed validation errors
/// - `404 Not Found` - No recipe under that id
pub async fn full_update_recipe<S: RecipeStore>(
    State(dependencies): State<AppDependencies<S>>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let id = resolve_recipe_id(&id)?;
    // Object resolution comes first: a missing id is 404 even when the
    // payload would also fail validation.
    dependencies.store().get_recipe(id).await?;

    let draft = validate_create_payload(&payload)?;
    let recipe = dependencies
        .store()
        .update_recipe(id, RecipeChanges::from(draft))
        .await?;
    Ok(Json(recipe_to_response(&recipe)))
}

/// PATCH /recipes/{id} - Partially update a recipe.
///
/// Any subset of `name`, `description`, `ingredients` may be supplied;
/// omitted fields are left unchanged. A supplied ingredient list replaces
/// the existing set.
///
/// # Response
///
/// - `200 OK` - Recipe updated
/// - `400 Bad Request` - A supplied field is malformed
/// - `404 Not Found` - No recipe under that id
pub async fn partial_update_recipe<S: RecipeStore>(
    State(dependencies): State<AppDependencies<S>>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let id = resolve_recipe_id(&id)?;
    dependencies.store().get_recipe(id).await?;

    let changes = validate_partial_payload(&payload)?;
    let recipe = dependencies.store().update_recipe(id, changes).await?;
    Ok(Json(recipe_to_response(&recipe)))
}

/// DELETE /recipes/{id} - Delete a recipe and its ingredients.
///
/// # Response
///
/// - `204 No Content` - Recipe and owned ingredients removed
/// - `404 Not Found` - No recipe under that id
pub async fn delete_recipe<S: RecipeStore>(
    State(dependencies): State<AppDependencies<S>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = resolve_recipe_id(&id)?;
    dependencies.store().delete_recipe(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Parses a path segment into a recipe id.
///
/// Unresolvable ids behave like missing ones.
fn resolve_recipe_id(raw: &str) -> Result<RecipeId, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}
