//! Adjacency-list store for unweighted, undirected graphs.

use std::collections::{
    BTreeMap,
    BTreeSet,
    HashSet,
};

use tracing::warn;

/// Integer vertex identifier as it appears in the input edge list.
pub type VertexId = u64;

/// Positive path length. Input edges have weight 1; contraction produces sums of hop counts.
pub type Weight = u64;

/// Undirected graph stored as vertex id -> neighbor ids, with both directions of every edge
/// present.
///
/// Vertices iterate in ascending id order so that everything derived from a `Graph` is
/// deterministic. Every vertex referenced as a neighbor is also a key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    /// Vertex -> neighbors in insertion order.
    adjacency: BTreeMap<VertexId, Vec<VertexId>>,
    /// Every edge once, as `edge_key(u, v)`.
    edges: HashSet<(VertexId, VertexId)>,
}

/// Normalized key for an undirected edge.
const fn edge_key(u: VertexId, v: VertexId) -> (VertexId, VertexId) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

impl Graph {
    /// Empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an edge list, dropping exact duplicate edges and self-loops.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Build a graph from an adjacency mapping that may list each edge in one or both
    /// directions. Neighbors that are not keys become vertices.
    pub fn from_adjacency(adjacency: &BTreeMap<VertexId, Vec<VertexId>>) -> Self {
        let mut graph = Self::new();
        for (&u, neighbors) in adjacency {
            graph.add_vertex(u);
            for &v in neighbors {
                graph.add_edge(u, v);
            }
        }
        graph
    }

    /// Add an isolated vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, v: VertexId) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.adjacency.insert(v, Vec::new());
        true
    }

    /// Add the undirected edge `u - v`, creating either endpoint on demand.
    ///
    /// Returns `false` without modifying the graph when the edge already exists or `u == v`.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        if u == v {
            warn!(vertex = u, "ignoring self-loop");
            self.add_vertex(u);
            return false;
        }
        if !self.edges.insert(edge_key(u, v)) {
            return false;
        }
        self.adjacency.entry(u).or_default().push(v);
        self.adjacency.entry(v).or_default().push(u);
        true
    }

    /// Neighbors of `v`, or `None` if `v` is not a vertex.
    pub fn neighbors(&self, v: VertexId) -> Option<&[VertexId]> {
        self.adjacency.get(&v).map(Vec::as_slice)
    }

    /// Whether `v` is a vertex.
    pub fn has_vertex(&self, v: VertexId) -> bool {
        self.adjacency.contains_key(&v)
    }

    /// Whether `u - v` is an edge, in either orientation.
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.edges.contains(&edge_key(u, v))
    }

    /// Number of neighbors of `v`.
    pub fn degree(&self, v: VertexId) -> Option<usize> {
        self.adjacency.get(&v).map(Vec::len)
    }

    /// Vertex ids in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Each undirected edge once, as `(smaller, larger)`, in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&u, neighbors)| neighbors.iter().filter(move |&&v| u < v).map(move |&v| (u, v)))
    }

    /// Smallest vertex id.
    pub fn first_vertex(&self) -> Option<VertexId> {
        self.adjacency.keys().next().copied()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Minimum-degree vertex of the subgraph induced by `view`, ties broken by smallest id.
    ///
    /// Degrees only count neighbors inside `view`; ids in `view` that are not vertices of the
    /// graph are ignored.
    pub fn min_degree_vertex(&self, view: &BTreeSet<VertexId>) -> Option<VertexId> {
        let mut best: Option<(usize, VertexId)> = None;
        for &v in view {
            let Some(neighbors) = self.adjacency.get(&v) else { continue };
            let degree = neighbors.iter().filter(|n| view.contains(n)).count();
            if best.map_or(true, |(d, _)| degree < d) {
                best = Some((degree, v));
            }
        }
        best.map(|(_, v)| v)
    }
}
