//! Distance-preserving vertex elimination.
//!
//! Vertices are removed from a weighted working copy of the graph one at a time. Before a vertex
//! `v` goes, every pair of its neighbors `(u, w)` is relaxed through it: the edge `u - w` gets
//! weight `min(weight(u, w), weight(v, u) + weight(v, w))`, inserting it if absent. Shortest-path
//! distances among the surviving vertices are therefore unchanged by each removal. This is
//! strictly stronger than plain triangulation, which only adds connectivity, and is what makes
//! the H2H distance arrays exact.
//!
//! Each step records a [`Bag`]: the eliminated vertex followed by its neighbors at that moment,
//! with the edge weights to them. The bags, the step ranks (phi), and the fill-in count form the
//! [`Elimination`] consumed by the tree and index builders.

/// Incremental elimination driver
mod eliminator;
/// Strategies for choosing the next vertex to eliminate
mod heuristic;
/// The weighted working graph H
mod working;

pub use eliminator::{
    eliminate,
    Bag,
    Elimination,
    Eliminator,
    Rank,
};
pub use heuristic::{
    EliminationHeuristic,
    MinDegree,
};
pub use working::{
    Relaxation,
    WorkingGraph,
};
