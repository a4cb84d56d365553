use h2h_core::VertexId;

use super::working::WorkingGraph;

/// Trait for determining the order in which vertices are eliminated.
///
/// Implementations pick the next vertex to remove from the working graph during elimination.
pub trait EliminationHeuristic {
    /// Returns the next vertex to eliminate based on the current working graph.
    ///
    /// Should only be called after the previously returned vertex (if any) has been eliminated.
    fn next_elimination(&mut self, working: &WorkingGraph) -> Option<VertexId>;
}

/// Any iterator of vertex ids is a fixed, precomputed ordering that ignores the working graph.
impl<I> EliminationHeuristic for I
where
    I: Iterator<Item = VertexId>,
{
    fn next_elimination(&mut self, _working: &WorkingGraph) -> Option<VertexId> {
        self.next()
    }
}

/// Greedy minimum-degree ordering: the vertex with the fewest neighbors in H, smallest id on
/// ties.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinDegree;

impl EliminationHeuristic for MinDegree {
    fn next_elimination(&mut self, working: &WorkingGraph) -> Option<VertexId> {
        working.min_degree_vertex()
    }
}
