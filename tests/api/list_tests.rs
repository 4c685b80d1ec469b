//! Integration tests for GET /recipes.

use crate::common::*;
use axum::http::StatusCode;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn retrieve_recipes_returns_all_ordered_by_id() {
    let app = spawn_app().await;
    let recipe1 = sample_recipe(&app.store, "Basic vanilla cake", "Some description").await;
    sample_ingredient(&app.store, &recipe1, "eggs").await;
    sample_ingredient(&app.store, &recipe1, "sugar").await;
    sample_ingredient(&app.store, &recipe1, "more stuff").await;
    let recipe2 = sample_recipe(&app.store, "Pumpkin pancakes", "Some description").await;
    sample_ingredient(&app.store, &recipe2, "eggs").await;
    sample_ingredient(&app.store, &recipe2, "flour").await;
    sample_ingredient(&app.store, &recipe2, "milk").await;
    sample_ingredient(&app.store, &recipe2, "more stuff").await;
    sample_recipe(&app.store, "No food at all", "Some description").await;

    let (status, body) = get(&app.router, "/recipes").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        recipe_names(&body),
        vec!["Basic vanilla cake", "Pumpkin pancakes", "No food at all"]
    );

    let recipes = body.as_array().unwrap();
    assert_eq!(recipes[0]["id"].as_i64().unwrap(), recipe1.id.value());
    assert_eq!(
        ingredient_names(&recipes[0]),
        vec!["eggs", "sugar", "more stuff"]
    );
    assert_eq!(
        ingredient_names(&recipes[1]),
        vec!["eggs", "flour", "milk", "more stuff"]
    );
    assert!(ingredient_names(&recipes[2]).is_empty());
}

#[rstest]
#[tokio::test]
async fn retrieve_recipes_filtered_by_name_substring() {
    let app = spawn_app().await;
    let pizza = sample_recipe(&app.store, "Pizza", "Some description").await;
    sample_ingredient(&app.store, &pizza, "dough").await;
    sample_ingredient(&app.store, &pizza, "cheese").await;
    sample_ingredient(&app.store, &pizza, "tomato").await;
    let cake = sample_recipe(&app.store, "Cake", "Some description").await;
    sample_ingredient(&app.store, &cake, "vanilla").await;
    let cancha = sample_recipe(&app.store, "Pizza de Cancha", "Some description").await;
    sample_ingredient(&app.store, &cancha, "dough").await;
    sample_ingredient(&app.store, &cancha, "tomato").await;

    let (status, body) = get(&app.router, "/recipes?name=Pi").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(recipe_names(&body), vec!["Pizza", "Pizza de Cancha"]);
}

#[rstest]
#[tokio::test]
async fn filter_is_case_sensitive() {
    let app = spawn_app().await;
    sample_recipe(&app.store, "Pizza", "Some description").await;

    let (status, body) = get(&app.router, "/recipes?name=pi").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[rstest]
#[tokio::test]
async fn filter_without_match_returns_empty_list() {
    let app = spawn_app().await;
    sample_recipe(&app.store, "Pizza", "Some description").await;

    let (status, body) = get(&app.router, "/recipes?name=Sushi").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[rstest]
#[tokio::test]
async fn empty_filter_value_lists_everything() {
    let app = spawn_app().await;
    sample_recipe(&app.store, "Pizza", "Some description").await;
    sample_recipe(&app.store, "Cake", "Some description").await;

    let (status, body) = get(&app.router, "/recipes?name=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(recipe_names(&body), vec!["Pizza", "Cake"]);
}

#[rstest]
#[tokio::test]
async fn empty_catalog_lists_nothing() {
    let app = spawn_app().await;

    let (status, body) = get(&app.router, "/recipes").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}
