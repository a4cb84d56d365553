//! Error type shared by graph loading and index construction.

use thiserror::Error;

use crate::graph::VertexId;

/// Errors raised while loading a graph or constructing and querying its distance index.
///
/// `InconsistentIndex` and `MissingAncestor` signal defects in elimination or forest
/// construction; they abort the build instead of producing a silently wrong index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A data line that is not two integer vertex ids.
    #[error("line {line}: cannot parse `{content}` as an edge")]
    MalformedInput {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },

    /// Labels of `vertex` do not line up with its bag or ancestor chain.
    #[error("bag member {member} of vertex {vertex} is not in its ancestor chain")]
    InconsistentIndex {
        /// Vertex whose label is inconsistent.
        vertex: VertexId,
        /// Bag member that could not be placed.
        member: VertexId,
    },

    /// A parent or ancestor that has no bag, chain or label of its own.
    #[error("vertex {vertex} references parent {parent} which has no bag")]
    MissingAncestor {
        /// Vertex holding the reference.
        vertex: VertexId,
        /// The unknown parent or ancestor.
        parent: VertexId,
    },

    /// An operation that needs at least one vertex got an empty graph.
    #[error("graph has no vertices")]
    EmptyGraph,

    /// A vertex id that is not in the graph or index.
    #[error("vertex {0} is not in the graph")]
    UnknownVertex(VertexId),

    /// The heuristic stopped proposing vertices before the working graph was empty.
    #[error("elimination ordering exhausted with {remaining} vertices left")]
    IncompleteElimination {
        /// Vertices still in the working graph.
        remaining: usize,
    },

    /// Reading an input file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
