use std::collections::HashMap;

use h2h_core::{
    Graph,
    VertexId,
    Weight,
};
use petgraph::algo::dijkstra;
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::EdgeRef;
use rand::rngs::StdRng;
use rand::Rng;
use rstest::*;

use crate::elimination::WorkingGraph;

mod persist_test;
mod pipeline_test;
mod tree_test;

#[fixture]
pub fn path4() -> Graph {
    Graph::from_edges([(1, 2), (2, 3), (3, 4)])
}

/// Star centred on 0 with leaves 1..=5.
#[fixture]
pub fn star() -> Graph {
    Graph::from_edges((1..=5).map(|leaf| (0, leaf)))
}

#[fixture]
pub fn clique4() -> Graph {
    Graph::from_edges([(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)])
}

#[fixture]
pub fn five_cycle() -> Graph {
    Graph::from_edges((1..=5).map(|i| (i, i % 5 + 1)))
}

/// `rows x cols` grid, vertex `r * cols + c`.
pub fn grid(rows: VertexId, cols: VertexId) -> Graph {
    let mut graph = Graph::new();
    for r in 0..rows {
        for c in 0..cols {
            let v = r * cols + c;
            if c + 1 < cols {
                graph.add_edge(v, v + 1);
            }
            if r + 1 < rows {
                graph.add_edge(v, v + cols);
            }
        }
    }
    graph
}

#[fixture]
pub fn petersen() -> Graph {
    let outer = (0..5).map(|i| (i, (i + 1) % 5));
    let spokes = (0..5).map(|i| (i, i + 5));
    let inner = (0..5).map(|i| (i + 5, (i + 2) % 5 + 5));
    Graph::from_edges(outer.chain(spokes).chain(inner))
}

/// A triangle and a separate edge.
#[fixture]
pub fn split_graph() -> Graph {
    Graph::from_edges([(1, 2), (2, 3), (3, 1), (10, 11)])
}

/// Erdős–Rényi graph on `0..n` with edge probability `p`.
pub fn random_graph(rng: &mut StdRng, n: VertexId, p: f64) -> Graph {
    let mut graph = Graph::new();
    for v in 0..n {
        graph.add_vertex(v);
    }
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(p) {
                graph.add_edge(u, v);
            }
        }
    }
    graph
}

/// Shortest hop counts from `source` in the original graph.
pub fn oracle_distances(graph: &Graph, source: VertexId) -> HashMap<VertexId, Weight> {
    let mut g = UnGraphMap::<VertexId, Weight>::new();
    for v in graph.vertices() {
        g.add_node(v);
    }
    for (u, v) in graph.edges() {
        g.add_edge(u, v, 1);
    }
    dijkstra(&g, source, None, |e| *e.weight())
}

/// Weighted shortest paths from `source` through what is left of the working graph.
pub fn working_distances(working: &WorkingGraph, source: VertexId) -> HashMap<VertexId, Weight> {
    let mut g = UnGraphMap::<VertexId, Weight>::new();
    for v in working.vertices() {
        g.add_node(v);
        for (&n, &w) in working.neighbors(v).unwrap() {
            if v < n {
                g.add_edge(v, n, w);
            }
        }
    }
    dijkstra(&g, source, None, |e| *e.weight())
}
