use std::collections::{
    BTreeMap,
    BTreeSet,
    HashMap,
};

use h2h_core::{
    Graph,
    VertexId,
    Weight,
};

/// Outcome of relaxing a neighbor pair through an eliminated vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relaxation {
    /// The pair was not adjacent; a fill-in edge was created.
    Inserted,
    /// The pair was adjacent with a larger weight, which was lowered.
    Shortened,
    /// The existing weight was already no larger than the candidate.
    Unchanged,
}

/// The weighted working graph H consumed by elimination.
///
/// Starts as a copy of the input graph with unit weights and shrinks by one vertex per
/// elimination step. Weights are kept symmetric, and an ordered `(degree, id)` index makes the
/// minimum-degree lookup logarithmic.
#[derive(Clone, Debug, Default)]
pub struct WorkingGraph {
    /// Vertex -> neighbor -> weight. Neighbor maps iterate in ascending id order.
    adjacency: HashMap<VertexId, BTreeMap<VertexId, Weight>>,
    /// Every remaining vertex keyed by its current degree.
    by_degree: BTreeSet<(usize, VertexId)>,
}

impl WorkingGraph {
    /// Copy `graph` into a working graph with every edge weight set to 1.
    pub fn from_graph(graph: &Graph) -> Self {
        let adjacency: HashMap<_, BTreeMap<_, _>> = graph
            .vertices()
            .map(|v| (v, graph.neighbors(v).unwrap_or_default().iter().map(|&n| (n, 1)).collect()))
            .collect();
        let by_degree = adjacency.iter().map(|(&v, n)| (n.len(), v)).collect();
        Self { adjacency, by_degree }
    }

    /// Neighbors of `v` with their weights, in ascending id order.
    pub fn neighbors(&self, v: VertexId) -> Option<&BTreeMap<VertexId, Weight>> {
        self.adjacency.get(&v)
    }

    /// Weight of the edge `u - w`, if present.
    pub fn weight(&self, u: VertexId, w: VertexId) -> Option<Weight> {
        self.adjacency.get(&u).and_then(|n| n.get(&w)).copied()
    }

    /// Current degree of `v`.
    pub fn degree(&self, v: VertexId) -> Option<usize> {
        self.adjacency.get(&v).map(BTreeMap::len)
    }

    /// Whether `v` is still present.
    pub fn contains(&self, v: VertexId) -> bool {
        self.adjacency.contains_key(&v)
    }

    /// Remaining vertex count.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// True once every vertex has been eliminated.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Remaining vertices in ascending id order.
    pub fn vertices(&self) -> Vec<VertexId> {
        let mut vertices: Vec<_> = self.adjacency.keys().copied().collect();
        vertices.sort_unstable();
        vertices
    }

    /// Vertex with the smallest current degree, smallest id on ties.
    pub fn min_degree_vertex(&self) -> Option<VertexId> {
        self.by_degree.first().map(|&(_, v)| v)
    }

    /// Lower the weight of `u - w` to `candidate`, inserting the edge if it does not exist.
    ///
    /// Both directions are updated together so H stays symmetric.
    pub(super) fn relax(&mut self, u: VertexId, w: VertexId, candidate: Weight) -> Relaxation {
        let outcome = match self.weight(u, w) {
            None => Relaxation::Inserted,
            Some(existing) if candidate < existing => Relaxation::Shortened,
            Some(_) => return Relaxation::Unchanged,
        };

        if outcome == Relaxation::Inserted {
            self.reindex(u, |d| d + 1);
            self.reindex(w, |d| d + 1);
        }
        if let Some(n) = self.adjacency.get_mut(&u) {
            n.insert(w, candidate);
        }
        if let Some(n) = self.adjacency.get_mut(&w) {
            n.insert(u, candidate);
        }
        outcome
    }

    /// Remove `v` and all incident edges, returning its neighbor map.
    pub(super) fn remove(&mut self, v: VertexId) -> Option<BTreeMap<VertexId, Weight>> {
        let neighbors = self.adjacency.remove(&v)?;
        self.by_degree.remove(&(neighbors.len(), v));
        for &n in neighbors.keys() {
            self.reindex(n, |d| d - 1);
            if let Some(adj) = self.adjacency.get_mut(&n) {
                adj.remove(&v);
            }
        }
        Some(neighbors)
    }

    /// Move `v` within the degree index. Must run before its adjacency changes.
    fn reindex(&mut self, v: VertexId, update: impl Fn(usize) -> usize) {
        if let Some(degree) = self.degree(v) {
            self.by_degree.remove(&(degree, v));
            self.by_degree.insert((update(degree), v));
        }
    }
}
