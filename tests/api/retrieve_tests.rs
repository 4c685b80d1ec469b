//! Integration tests for GET /recipes/{id}.

use crate::common::*;
use axum::http::StatusCode;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test]
async fn retrieve_existing_recipe() {
    let app = spawn_app().await;
    let recipe = sample_recipe(&app.store, "Pizza", "Round and flat").await;
    sample_ingredient(&app.store, &recipe, "dough").await;
    sample_ingredient(&app.store, &recipe, "cheese").await;

    let (status, body) = get(&app.router, &format!("/recipes/{}", recipe.id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": recipe.id.value(),
            "name": "Pizza",
            "description": "Round and flat",
            "ingredients": [{"name": "dough"}, {"name": "cheese"}]
        })
    );
}

#[rstest]
#[tokio::test]
async fn retrieve_missing_recipe_returns_404() {
    let app = spawn_app().await;

    let (status, body) = get(&app.router, "/recipes/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_not_found_body(&body);
}

#[rstest]
#[tokio::test]
async fn non_numeric_id_behaves_like_missing() {
    let app = spawn_app().await;
    sample_recipe(&app.store, "Pizza", "Round").await;

    let (status, body) = get(&app.router, "/recipes/pizza").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_not_found_body(&body);
}
