//! Data transfer objects for the recipe API.
//!
//! `requests` validates inbound payloads into store input records,
//! `responses` defines the outbound JSON shapes, and `transformers` maps
//! domain entities onto them.

pub mod requests;
pub mod responses;
pub mod transformers;
