//! Domain layer for the recipe catalog.
//!
//! Contains the entities (`Recipe`, `Ingredient`) and their identifier
//! value objects. The domain layer has no persistence or HTTP concerns;
//! mapping to the store schema and to wire payloads happens in the
//! infrastructure and API layers respectively.

pub mod recipe;
pub mod value_objects;
