//! Breadth-first traversal and diameter bounds, used to report graph statistics.

use std::collections::hash_map::Entry;
use std::collections::{
    HashMap,
    VecDeque,
};

use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use tracing::{
    debug,
    instrument,
};

use crate::errors::IndexError;
use crate::graph::{
    Graph,
    VertexId,
    Weight,
};

/// Outcome of a breadth-first search.
///
/// Vertices not reachable from the source are absent from `distances`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Traversal {
    /// Vertices in the order they were dequeued.
    pub order: Vec<VertexId>,
    /// Hop count from the source to every discovered vertex.
    pub distances: HashMap<VertexId, Weight>,
}

impl Traversal {
    /// Largest finite distance reached.
    pub fn eccentricity(&self) -> Weight {
        self.distances.values().copied().max().unwrap_or(0)
    }

    /// A vertex at maximal distance; the earliest one visited if several tie.
    pub fn farthest(&self) -> Option<VertexId> {
        let ecc = self.eccentricity();
        self.order.iter().copied().find(|v| self.distances.get(v) == Some(&ecc))
    }
}

/// Breadth-first search from `source`, stopping once `target` (if any) is dequeued.
pub fn bfs(graph: &Graph, source: VertexId, target: Option<VertexId>) -> Result<Traversal, IndexError> {
    if graph.is_empty() {
        return Err(IndexError::EmptyGraph);
    }
    if !graph.has_vertex(source) {
        return Err(IndexError::UnknownVertex(source));
    }

    let mut traversal = Traversal::default();
    let mut queue = VecDeque::from([source]);
    traversal.distances.insert(source, 0);

    while let Some(vertex) = queue.pop_front() {
        traversal.order.push(vertex);
        if target == Some(vertex) {
            break;
        }

        let next = traversal.distances[&vertex] + 1;
        for &neighbor in graph.neighbors(vertex).unwrap_or_default() {
            if let Entry::Vacant(e) = traversal.distances.entry(neighbor) {
                e.insert(next);
                queue.push_back(neighbor);
            }
        }
    }

    Ok(traversal)
}

/// Lower and upper diameter bounds from `samples` random BFS sources (drawn with replacement).
///
/// Returns `(max_ecc, 2 * max_ecc)`; the upper bound only holds within a connected component.
#[instrument(skip(graph, rng), fields(vertices = graph.vertex_count()))]
pub fn estimate_diameter<R: Rng>(graph: &Graph, samples: usize, rng: &mut R) -> Result<(Weight, Weight), IndexError> {
    let vertices: Vec<VertexId> = graph.vertices().collect();
    if vertices.is_empty() {
        return Err(IndexError::EmptyGraph);
    }

    let sources: Vec<VertexId> = (0..samples).filter_map(|_| vertices.choose(&mut *rng).copied()).collect();
    let max_ecc = max_eccentricity(graph, &sources)?;
    debug!(samples, max_ecc, "estimated diameter");
    Ok((max_ecc, 2 * max_ecc))
}

/// Exact eccentricity maximum over the first `sample_size` vertices in id order.
///
/// Equals the diameter of a connected graph when `sample_size >= vertex_count`.
#[instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn sampled_diameter(graph: &Graph, sample_size: usize) -> Result<Weight, IndexError> {
    if graph.is_empty() {
        return Err(IndexError::EmptyGraph);
    }
    let sources: Vec<VertexId> = graph.vertices().take(sample_size).collect();
    max_eccentricity(graph, &sources)
}

/// Double-sweep lower bound: BFS from the first vertex, then from a farthest vertex `u`.
///
/// Returns `u` together with its eccentricity.
#[instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn double_sweep(graph: &Graph) -> Result<(VertexId, Weight), IndexError> {
    let start = graph.first_vertex().ok_or(IndexError::EmptyGraph)?;
    let first = bfs(graph, start, None)?;
    let far = first.farthest().unwrap_or(start);
    let second = bfs(graph, far, None)?;
    Ok((far, second.eccentricity()))
}

/// BFS from every source in parallel and keep the largest eccentricity.
fn max_eccentricity(graph: &Graph, sources: &[VertexId]) -> Result<Weight, IndexError> {
    sources
        .par_iter()
        .map(|&s| bfs(graph, s, None).map(|t| t.eccentricity()))
        .try_reduce(|| 0, |a, b| Ok(a.max(b)))
}
