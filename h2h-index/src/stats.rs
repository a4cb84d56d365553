//! Summary statistics of a built decomposition and index.

use std::fmt;

use serde::Serialize;

use crate::elimination::Elimination;
use crate::h2h::H2HIndex;
use crate::tree::EliminationTree;

/// Size and shape of a decomposition and its labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Vertices in the input graph.
    pub vertices: usize,
    /// Bags recorded by elimination, one per vertex.
    pub bags: usize,
    /// Trees in the elimination forest.
    pub roots: usize,
    /// Fill-in edges created during elimination.
    pub fill_in: usize,
    /// Longest ancestor chain.
    pub tree_depth: usize,
    /// Largest bag, center included.
    pub max_bag_size: usize,
    /// `max_bag_size - 1`, or 0 for an empty decomposition.
    pub treewidth: usize,
    /// Longest distance array.
    pub max_label_len: usize,
    /// Total number of distance entries across all labels.
    pub label_entries: usize,
}

impl IndexStats {
    /// Collect statistics from the pipeline's outputs.
    pub fn collect(elimination: &Elimination, tree: &EliminationTree, index: &H2HIndex) -> Self {
        let max_bag_size = elimination.max_bag_size();
        Self {
            vertices: index.len(),
            bags: elimination.len(),
            roots: tree.roots().len(),
            fill_in: elimination.fill_in(),
            tree_depth: index.labels().iter().map(|l| l.anc.len()).max().unwrap_or(0),
            max_bag_size,
            treewidth: max_bag_size.saturating_sub(1),
            max_label_len: index.max_label_len(),
            label_entries: index.labels().iter().map(|l| l.dis.len()).sum(),
        }
    }
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "H2H index over {} vertices", self.vertices)?;
        writeln!(f, "bags: {} in {} tree(s)", self.bags, self.roots)?;
        writeln!(f, "fill-in edges: {}", self.fill_in)?;
        writeln!(f, "tree depth: {}", self.tree_depth)?;
        writeln!(f, "max bag size: {} (treewidth {})", self.max_bag_size, self.treewidth)?;
        write!(f, "max label length: {} ({} entries total)", self.max_label_len, self.label_entries)
    }
}
