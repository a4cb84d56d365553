use rstest::*;

use crate::graph::{
    Graph,
    VertexId,
};

mod io_test;

/// Cycle `1 - 2 - ... - n - 1`.
pub fn cycle(n: VertexId) -> Graph {
    Graph::from_edges((1..=n).map(|i| (i, i % n + 1)))
}

#[fixture]
pub fn five_cycle() -> Graph {
    cycle(5)
}

#[fixture]
pub fn path4() -> Graph {
    Graph::from_edges([(1, 2), (2, 3), (3, 4)])
}

/// Two disjoint components: a triangle and an edge.
#[fixture]
pub fn split_graph() -> Graph {
    Graph::from_edges([(1, 2), (2, 3), (3, 1), (10, 11)])
}
