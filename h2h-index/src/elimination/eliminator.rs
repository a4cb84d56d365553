use std::collections::HashMap;

use h2h_core::{
    Graph,
    IndexError,
    VertexId,
    Weight,
};
use itertools::Itertools;
use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    debug,
    instrument,
    trace,
};

use super::heuristic::{
    EliminationHeuristic,
    MinDegree,
};
use super::working::{
    Relaxation,
    WorkingGraph,
};

/// 1-based elimination step at which a vertex was removed (phi).
pub type Rank = usize;

/// A vertex together with its working-graph neighbors at the moment it was eliminated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bag {
    /// The eliminated vertex.
    pub center: VertexId,
    /// `center` followed by its neighbors in H, in ascending id order.
    pub members: Vec<VertexId>,
    /// Parallel to `members`: `0` for the center, otherwise the H-weight to that neighbor.
    pub lambda: Vec<Weight>,
}

impl Bag {
    /// Number of members, the center included.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false; every bag holds at least its center.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members other than the center.
    pub fn neighbors(&self) -> &[VertexId] {
        &self.members[1..]
    }
}

/// Immutable result of a completed elimination pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Elimination {
    /// Bags in elimination order; the bag of the vertex with rank `r` is at index `r - 1`.
    bags: Vec<Bag>,
    /// Vertex -> phi.
    ranks: HashMap<VertexId, Rank>,
    /// Number of edges inserted between previously non-adjacent neighbors.
    fill_in: usize,
}

impl Elimination {
    /// Elimination holding exactly `bags`, ranked in the given order, without checking that
    /// they cover every vertex they mention.
    #[cfg(test)]
    pub(crate) fn from_bags(bags: Vec<Bag>) -> Self {
        let ranks = bags.iter().enumerate().map(|(i, bag)| (bag.center, i + 1)).collect();
        Self { bags, ranks, fill_in: 0 }
    }

    /// Bags in elimination order.
    pub fn bags(&self) -> &[Bag] {
        &self.bags
    }

    /// Bag whose center is `v`.
    pub fn bag(&self, v: VertexId) -> Option<&Bag> {
        self.ranks.get(&v).map(|&r| &self.bags[r - 1])
    }

    /// Elimination rank of `v`.
    pub fn phi(&self, v: VertexId) -> Option<Rank> {
        self.ranks.get(&v).copied()
    }

    /// Vertices in the order they were eliminated.
    pub fn order(&self) -> impl DoubleEndedIterator<Item = VertexId> + ExactSizeIterator + '_ {
        self.bags.iter().map(|bag| bag.center)
    }

    /// Number of bags, equal to the number of vertices.
    pub fn len(&self) -> usize {
        self.bags.len()
    }

    /// True for the elimination of an empty graph.
    pub fn is_empty(&self) -> bool {
        self.bags.is_empty()
    }

    /// Number of fill-in edges created during the pass.
    pub const fn fill_in(&self) -> usize {
        self.fill_in
    }

    /// Size of the largest bag.
    pub fn max_bag_size(&self) -> usize {
        self.bags.iter().map(Bag::len).max().unwrap_or(0)
    }
}

/// Drives distance-preserving elimination over an owned working graph.
///
/// Elimination is resumable: `eliminate_to` stops at any step boundary and a later call carries
/// on from there, which is how callers abort long runs. The working graph is dropped once the
/// pass is turned into an [`Elimination`].
///
/// Type parameters:
/// - `H`: heuristic choosing the next vertex to eliminate
pub struct Eliminator<H>
where
    H: EliminationHeuristic,
{
    /// The shrinking weighted graph H.
    working: WorkingGraph,
    /// Chooses the next vertex given the current state of `working`.
    heuristic: H,
    /// Bags recorded so far, in elimination order.
    bags: Vec<Bag>,
    /// Vertex -> phi for every eliminated vertex.
    ranks: HashMap<VertexId, Rank>,
    /// Fill-in edges created so far.
    fill_in: usize,
}

impl<H> Eliminator<H>
where
    H: EliminationHeuristic,
{
    /// Start an elimination of `graph`, which is copied and left untouched.
    pub fn new(graph: &Graph, heuristic: H) -> Self {
        Self {
            working: WorkingGraph::from_graph(graph),
            heuristic,
            bags: Vec::with_capacity(graph.vertex_count()),
            ranks: HashMap::with_capacity(graph.vertex_count()),
            fill_in: 0,
        }
    }

    /// Number of vertices eliminated so far.
    pub fn steps(&self) -> usize {
        self.bags.len()
    }

    /// True once the working graph is empty.
    pub fn is_complete(&self) -> bool {
        self.working.is_empty()
    }

    /// The working graph in its current state.
    pub const fn working_graph(&self) -> &WorkingGraph {
        &self.working
    }

    /// Eliminates `v`, recording its bag and relaxing every pair of its neighbors through it.
    ///
    /// This is the core operation: after it returns, shortest-path distances between the
    /// remaining vertices of H are the same as before `v` was removed.
    pub fn eliminate(&mut self, v: VertexId) -> Result<&Bag, IndexError> {
        let neighbors = self.working.remove(v).ok_or(IndexError::UnknownVertex(v))?;
        let rank = self.bags.len() + 1;

        let mut inserted = 0;
        for ((&u, &weight_u), (&w, &weight_w)) in neighbors.iter().tuple_combinations() {
            if self.working.relax(u, w, weight_u + weight_w) == Relaxation::Inserted {
                inserted += 1;
            }
        }
        self.fill_in += inserted;
        trace!(vertex = v, rank, degree = neighbors.len(), fill_in = inserted, "eliminated vertex");

        let members = std::iter::once(v).chain(neighbors.keys().copied()).collect();
        let lambda = std::iter::once(0).chain(neighbors.values().copied()).collect();
        self.ranks.insert(v, rank);
        self.bags.push(Bag { center: v, members, lambda });
        Ok(&self.bags[rank - 1])
    }

    /// Eliminates vertices chosen by the heuristic until `step` vertices are gone or H is empty.
    pub fn eliminate_to(&mut self, step: usize) -> Result<&mut Self, IndexError> {
        self.eliminate_to_with_progress(step, |_| {})
    }

    /// Like `eliminate_to`, calling `progress_callback` with the step count after every
    /// elimination.
    pub fn eliminate_to_with_progress<F>(&mut self, step: usize, mut progress_callback: F) -> Result<&mut Self, IndexError>
    where
        F: FnMut(usize),
    {
        while self.steps() < step && !self.is_complete() {
            let next = self
                .heuristic
                .next_elimination(&self.working)
                .ok_or(IndexError::IncompleteElimination { remaining: self.working.len() })?;
            self.eliminate(next)?;
            progress_callback(self.steps());
        }
        Ok(self)
    }

    /// Runs the pass to completion and returns the recorded bags and ranks.
    #[instrument(skip(self), fields(remaining = self.working.len()))]
    pub fn finish(mut self) -> Result<Elimination, IndexError> {
        self.eliminate_to(usize::MAX)?;
        debug!(bags = self.bags.len(), fill_in = self.fill_in, "elimination complete");
        Ok(Elimination { bags: self.bags, ranks: self.ranks, fill_in: self.fill_in })
    }
}

/// Eliminates every vertex of `graph` in minimum-degree order.
#[instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn eliminate(graph: &Graph) -> Result<Elimination, IndexError> {
    Eliminator::new(graph, MinDegree).finish()
}
