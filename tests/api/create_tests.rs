//! Integration tests for POST /recipes.

use std::collections::HashSet;

use crate::common::*;
use axum::http::StatusCode;
use cookbook::domain::value_objects::RecipeId;
use cookbook::infrastructure::RecipeStore;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test]
async fn create_recipe_stores_all_ingredients() {
    let app = spawn_app().await;
    let payload = json!({
        "name": "Basic vanilla cake",
        "description": "Bla bla bla",
        "ingredients": [{"name": "eggs"}, {"name": "sugar"}, {"name": "more stuff"}]
    });

    let (status, body) = post_json(&app.router, "/recipes", &payload).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Basic vanilla cake");
    assert_eq!(body["description"], "Bla bla bla");

    let recipe = app
        .store
        .get_recipe(RecipeId::new(body["id"].as_i64().expect("assigned id")))
        .await
        .unwrap();
    let stored: HashSet<&str> = recipe.ingredient_names().into_iter().collect();
    let expected: HashSet<&str> = ["eggs", "sugar", "more stuff"].into_iter().collect();
    assert_eq!(stored, expected);
}

#[rstest]
#[tokio::test]
async fn create_without_ingredients_key_fails() {
    let app = spawn_app().await;
    let payload = json!({
        "name": "Basic vanilla cake",
        "description": "Bla bla bla"
    });

    let (status, body) = post_json(&app.router, "/recipes", &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"ingredients": ["You have to specify ingredients for your recipe"]})
    );
}

#[rstest]
#[tokio::test]
async fn create_with_empty_ingredient_list_fails() {
    let app = spawn_app().await;
    let payload = json!({
        "name": "Basic vanilla cake",
        "description": "Bla bla bla",
        "ingredients": []
    });

    let (status, body) = post_json(&app.router, "/recipes", &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"ingredients": ["This list may not be empty."]}));
}

#[rstest]
#[case("name")]
#[case("description")]
#[tokio::test]
async fn create_without_required_text_field_fails(#[case] field: &str) {
    let app = spawn_app().await;
    let mut payload = json!({
        "name": "Cake",
        "description": "Sweet",
        "ingredients": [{"name": "vanilla"}]
    });
    payload.as_object_mut().unwrap().remove(field);

    let (status, body) = post_json(&app.router, "/recipes", &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body[field], json!(["This field is required."]));
}

#[rstest]
#[tokio::test]
async fn create_with_non_string_name_fails() {
    let app = spawn_app().await;
    let payload = json!({
        "name": 42,
        "description": "Sweet",
        "ingredients": [{"name": "vanilla"}]
    });

    let (status, body) = post_json(&app.router, "/recipes", &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"name": ["Not a valid string."]}));
}

#[rstest]
#[tokio::test]
async fn rejected_create_mutates_nothing() {
    let app = spawn_app().await;
    let payload = json!({
        "name": "Cake",
        "description": "Sweet",
        "ingredients": []
    });

    let (status, _) = post_json(&app.router, "/recipes", &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(app.store.list_recipes(None).await.unwrap().is_empty());
}

#[rstest]
#[tokio::test]
async fn created_recipes_get_ascending_ids() {
    let app = spawn_app().await;
    let payload = |name: &str| {
        json!({
            "name": name,
            "description": "Some description",
            "ingredients": [{"name": "stuff"}]
        })
    };

    let (_, first) = post_json(&app.router, "/recipes", &payload("First")).await;
    let (_, second) = post_json(&app.router, "/recipes", &payload("Second")).await;

    assert!(first["id"].as_i64().unwrap() < second["id"].as_i64().unwrap());
}
