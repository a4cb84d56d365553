#![deny(
    // Strict on purpose: anything we decide is acceptable gets an inline allow, which leaves a
    // marker for reviewers to take a second look.
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
)]

//! # h2h-index – hierarchical 2-hop distance index for road networks
//!
//! Builds an index over a large sparse, unweighted graph so that shortest-path distances between
//! arbitrary vertex pairs can be answered from two short label arrays instead of a traversal.
//!
//! ## Pipeline overview
//! 1. Elimination ([`elimination`]) – repeatedly remove a minimum-degree vertex from a weighted
//!    working copy of the graph, recording its bag and relaxing every pair of its neighbors
//!    through it so that distances among the remaining vertices are preserved.
//! 2. Forest ([`tree`]) – link every bag to the bag of its earliest-eliminated neighbor.
//! 3. Chains ([`ancestors`]) – the path of bag centers from each forest root down to each bag.
//! 4. Labels ([`h2h`]) – for every vertex, positions of its bag members in its chain and exact
//!    distances to every ancestor, computed top-down from already finished ancestors.
//!
//! [`pipeline::build_index`] runs all four stages. Built indexes answer
//! [`H2HIndex::distance`] queries and can be saved with [`persist::write_index`].
//!
//! All stages are annotated with [`tracing`] spans so that callers can observe progress and timing.

pub mod ancestors;
pub mod elimination;
pub mod h2h;
pub mod persist;
pub mod pipeline;
pub mod stats;
pub mod tree;

pub use ancestors::AncestorChains;
pub use elimination::{
    Bag,
    Elimination,
    Eliminator,
};
pub use h2h::{
    H2HIndex,
    VertexLabel,
};
pub use pipeline::{
    build_index,
    IndexBuild,
};
pub use stats::IndexStats;
pub use tree::EliminationTree;

#[cfg(test)]
mod tests;
