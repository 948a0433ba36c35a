//! cinegraph-core: Shared domain types and JSON codecs for the movie graph.
//!
//! This crate provides the types passed between the graph client and its
//! callers:
//! - `Movie`, `Person`, `Roles` for the movie graph
//! - The keyed-map JSON codec that writes a movie's cast as an object
//!   keyed by person name

pub mod json;
pub mod types;

pub use types::{Movie, Person, Roles};
