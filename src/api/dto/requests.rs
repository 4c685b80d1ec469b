//! Request payload validation.
//!
//! The recipe payload is parsed from a raw JSON value rather than a typed
//! `Deserialize` struct so that shape problems (wrong types, missing keys)
//! surface as field-keyed validation errors instead of transport-level
//! rejections.
//!
//! # Input Contract
//!
//! ```json
//! {
//!     "name": "Basic vanilla cake",
//!     "description": "Bla bla bla",
//!     "ingredients": [{"name": "eggs"}, {"name": "sugar"}]
//! }
//! ```
//!
//! Create and full update require every field and a non-empty ingredient
//! list. Partial update accepts any subset; omitted fields are left
//! unchanged. An explicitly empty `ingredients` list is rejected in every
//! mode: an empty list is not the same request as omitting the key, and
//! only the latter means "do not touch ingredients".

use serde_json::{Map, Value};

use crate::api::errors::ValidationErrors;
use crate::infrastructure::store::{NewRecipe, RecipeChanges};

const REQUIRED: &str = "This field is required.";
const NOT_NULL: &str = "This field may not be null.";
const BLANK: &str = "This field may not be blank.";
const NOT_A_STRING: &str = "Not a valid string.";
const NOT_A_LIST: &str = "Not a valid list.";
const EMPTY_LIST: &str = "This list may not be empty.";
const NOT_A_DICT: &str = "Invalid data. Expected a dictionary.";
const INGREDIENTS_REQUIRED: &str = "You have to specify ingredients for your recipe";

// =============================================================================
// Entry Points
// =============================================================================

/// Validates a create (or full-update) payload.
///
/// `name`, `description`, and a non-empty `ingredients` list are all
/// required.
///
/// # Errors
///
/// Returns the accumulated field-keyed messages when any constraint is
/// violated; the caller rejects the request without touching the store.
pub fn validate_create_payload(payload: &Value) -> Result<NewRecipe, ValidationErrors> {
    let object = require_object(payload)?;

    let mut errors = ValidationErrors::new();
    let name = validate_text_field(object, "name", true, &mut errors);
    let description = validate_text_field(object, "description", true, &mut errors);
    let ingredients = validate_ingredients_field(object, true, &mut errors);

    match (name, description, ingredients) {
        (Some(name), Some(description), Some(ingredients)) if errors.is_empty() => {
            Ok(NewRecipe::new(name, description, ingredients))
        }
        _ => Err(errors),
    }
}

/// Validates a partial-update payload.
///
/// Any subset of the fields may be supplied; omitted fields translate to
/// `None` changes. Supplied fields are held to the same constraints as on
/// create.
///
/// # Errors
///
/// Returns the accumulated field-keyed messages when a supplied field is
/// malformed.
pub fn validate_partial_payload(payload: &Value) -> Result<RecipeChanges, ValidationErrors> {
    let object = require_object(payload)?;

    let mut errors = ValidationErrors::new();
    let name = validate_text_field(object, "name", false, &mut errors);
    let description = validate_text_field(object, "description", false, &mut errors);
    let ingredients = validate_ingredients_field(object, false, &mut errors);

    if errors.is_empty() {
        Ok(RecipeChanges {
            name,
            description,
            ingredients,
        })
    } else {
        Err(errors)
    }
}

// =============================================================================
// Field Validators
// =============================================================================

fn require_object(payload: &Value) -> Result<&Map<String, Value>, ValidationErrors> {
    payload.as_object().ok_or_else(|| {
        let mut errors = ValidationErrors::new();
        errors.add("non_field_errors", NOT_A_DICT);
        errors
    })
}

fn validate_text_field(
    object: &Map<String, Value>,
    field: &str,
    required: bool,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match object.get(field) {
        None => {
            if required {
                errors.add(field, REQUIRED);
            }
            None
        }
        Some(Value::Null) => {
            errors.add(field, NOT_NULL);
            None
        }
        Some(Value::String(text)) => {
            if text.trim().is_empty() {
                errors.add(field, BLANK);
                None
            } else {
                Some(text.clone())
            }
        }
        Some(_) => {
            errors.add(field, NOT_A_STRING);
            None
        }
    }
}

fn validate_ingredients_field(
    object: &Map<String, Value>,
    required: bool,
    errors: &mut ValidationErrors,
) -> Option<Vec<String>> {
    match object.get("ingredients") {
        None => {
            if required {
                errors.add("ingredients", INGREDIENTS_REQUIRED);
            }
            None
        }
        Some(Value::Null) => {
            errors.add("ingredients", NOT_NULL);
            None
        }
        Some(Value::Array(items)) => {
            if items.is_empty() {
                errors.add("ingredients", EMPTY_LIST);
                return None;
            }

            let mut names = Vec::with_capacity(items.len());
            let mut valid = true;
            for item in items {
                match item_name(item) {
                    Ok(name) => names.push(name),
                    Err(message) => {
                        errors.add("ingredients", message);
                        valid = false;
                    }
                }
            }
            valid.then_some(names)
        }
        Some(_) => {
            errors.add("ingredients", NOT_A_LIST);
            None
        }
    }
}

fn item_name(item: &Value) -> Result<String, &'static str> {
    let Some(object) = item.as_object() else {
        return Err(NOT_A_DICT);
    };
    match object.get("name") {
        None => Err(REQUIRED),
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.clone()),
        Some(Value::String(_)) => Err(BLANK),
        Some(_) => Err(NOT_A_STRING),
    }
}

// =============================================================================
// Tests
// =============================================================================
