//! Identifier value objects.
//!
//! Provides strongly-typed identifiers for recipes and ingredients. Both
//! wrap the store-assigned integer key; the newtypes exist to prevent
//! accidental mixing of the two identifier spaces.
//!
//! Identifiers are assigned by the store in ascending order and are never
//! reused, so they double as a stable creation-order sort key.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A unique identifier for a recipe.
///
/// # Examples
///
/// ```rust
/// use cookbook::domain::value_objects::RecipeId;
///
/// let id = RecipeId::new(42);
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(i64);

impl RecipeId {
    /// Creates a `RecipeId` from a raw integer key.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer key.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for RecipeId {
    type Err = ParseIntError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value.parse::<i64>().map(Self)
    }
}

impl From<i64> for RecipeId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A unique identifier for an ingredient.
///
/// Ingredient identifiers are observable through the store only: the API
/// renders ingredients by name. They still matter behaviorally, because
/// replacing a recipe's ingredients invalidates the old identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(i64);

impl IngredientId {
    /// Creates an `IngredientId` from a raw integer key.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer key.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for IngredientId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for IngredientId {
    type Err = ParseIntError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value.parse::<i64>().map(Self)
    }
}

impl From<i64> for IngredientId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
