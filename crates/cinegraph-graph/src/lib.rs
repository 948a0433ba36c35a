//! cinegraph-graph: Neo4j client for the movie graph.
//!
//! All graph reads and writes flow through this crate. Reads go through the
//! fluent fetch specs in [`fetch`], which expose one/first/all semantics
//! with absence as `Ok(None)` rather than an error.

pub mod client;
pub mod fetch;
pub mod mutations;
pub mod queries;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use fetch::{QuerySpec, RecordFetchSpec};
