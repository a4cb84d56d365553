#![deny(
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
)]
//! Foundation types for building hierarchical 2-hop distance indexes over large sparse graphs.
//!
//! This crate owns everything the index pipeline consumes but does not itself construct: the
//! unweighted [`Graph`] store, ingestion of edge-list dumps ([`io`]), breadth-first traversal and
//! diameter bounds ([`traversal`]), the shared [`IndexError`] type, and logging bootstrap.

pub mod errors;
pub mod graph;
pub mod io;
pub mod logging;
pub mod traversal;

pub use errors::IndexError;
pub use graph::{
    Graph,
    VertexId,
    Weight,
};

#[cfg(test)]
mod tests;
