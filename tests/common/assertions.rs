//! Assertion helpers over JSON response bodies.

use serde_json::{Value, json};

/// Extracts the recipe names from a list response, in order.
pub fn recipe_names(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("recipe array")
        .iter()
        .map(|recipe| recipe["name"].as_str().expect("recipe name").to_string())
        .collect()
}

/// Extracts the ingredient names from a recipe object, in order.
pub fn ingredient_names(recipe: &Value) -> Vec<String> {
    recipe["ingredients"]
        .as_array()
        .expect("ingredients array")
        .iter()
        .map(|ingredient| {
            ingredient["name"]
                .as_str()
                .expect("ingredient name")
                .to_string()
        })
        .collect()
}

/// Asserts the canonical not-found body.
pub fn assert_not_found_body(body: &Value) {
    assert_eq!(body, &json!({"detail": "Not found."}));
}
