//! Recipe Catalog Application
//!
//! A small backend for managing recipes and their ingredients over an HTTP
//! API. Each recipe owns an ordered set of named ingredients; the API offers
//! the usual create/read/update/delete operations plus a case-sensitive
//! substring filter on recipe name.
//!
//! # Architecture
//!
//! The application follows a layered (onion) layout:
//!
//! - **Domain Layer**: entities and identifier value objects
//! - **Infrastructure Layer**: the store port, its SQLite adapter,
//!   configuration, and the dependency container
//! - **API Layer**: HTTP handlers, DTOs, validation, routes
//!
//! # Update Semantics
//!
//! Updating a recipe's ingredients is a destructive replace, not a merge:
//! all prior ingredients are deleted and the payload set is created fresh,
//! inside one transaction. Replaced ingredient identifiers are invalidated
//! and never reassigned.

pub mod api;
pub mod domain;
pub mod infrastructure;
