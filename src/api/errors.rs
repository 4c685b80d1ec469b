//! API error types and their HTTP mapping.
//!
//! Two failure classes exist: a referenced recipe is absent (`NotFound`,
//! 404 with a `{"detail": "Not found."}` body) or the payload violates a
//! request constraint (`Validation`, 400 whose body is the field-to-messages
//! map itself, e.g. `{"ingredients": ["You have to specify ingredients for
//! your recipe"]}`). Store failures that are neither surface as 500 without
//! leaking database detail. Either way no state has been mutated by the
//! failed request.

use std::collections::BTreeMap;
use std::fmt;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::infrastructure::store::StoreError;

// =============================================================================
// ValidationErrors
// =============================================================================

/// An accumulating map from field name to the messages raised against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    /// Creates an empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Returns `true` when no messages have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the messages recorded against a field, if any.
    #[must_use]
    pub fn messages_for(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
            .collect();
        write!(formatter, "{}", rendered.join("; "))
    }
}

// =============================================================================
// ApiError
// =============================================================================

/// Errors surfaced to API callers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The referenced recipe does not exist (or the id did not resolve).
    #[error("Not found.")]
    NotFound,

    /// The payload violated a request constraint.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// An unexpected infrastructure failure.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Creates a validation error carrying a single field message.
    #[must_use]
    pub fn validation_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(field, message);
        Self::Validation(errors)
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the HTTP status this error maps to.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::RecipeNotFound { .. } => Self::NotFound,
            StoreError::Database(source) => {
                tracing::error!("Store failure: {source}");
                Self::Internal(source.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::NotFound => (status, Json(json!({ "detail": "Not found." }))).into_response(),
            Self::Validation(errors) => (status, Json(errors)).into_response(),
            Self::Internal(message) => {
                (status, Json(json!({ "detail": message }))).into_response()
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
