//! End-to-end construction of an H2H index from a graph.
//!
//! Stages run strictly one after another, each consuming the previous stage's output:
//! 1. Elimination ([`Eliminator`]) – minimum-degree, distance-preserving vertex elimination.
//! 2. Forest ([`EliminationTree::build`]) – parent links between bags.
//! 3. Chains ([`AncestorChains::build`]) – root-to-vertex paths.
//! 4. Labels ([`H2HIndex::build`]) – `pos` and `dis` arrays.

use h2h_core::traversal::{
    bfs,
    double_sweep,
    estimate_diameter,
    sampled_diameter,
};
use h2h_core::{
    Graph,
    IndexError,
    VertexId,
    Weight,
};
use rand::Rng;
use tracing::{
    info,
    instrument,
};

use crate::ancestors::AncestorChains;
use crate::elimination::{
    Elimination,
    Eliminator,
    MinDegree,
};
use crate::h2h::H2HIndex;
use crate::stats::IndexStats;
use crate::tree::EliminationTree;

/// Intermediate and final products of a pipeline run.
#[derive(Clone, Debug)]
pub struct IndexBuild {
    /// Bags, ranks and fill-in.
    pub elimination: Elimination,
    /// Parent links between bags.
    pub tree: EliminationTree,
    /// Root-to-vertex chains.
    pub chains: AncestorChains,
    /// The queryable labels.
    pub index: H2HIndex,
}

impl IndexBuild {
    /// Statistics over this build.
    pub fn stats(&self) -> IndexStats {
        IndexStats::collect(&self.elimination, &self.tree, &self.index)
    }
}

/// Build the index of `graph` with minimum-degree elimination.
pub fn build_index(graph: &Graph) -> Result<IndexBuild, IndexError> {
    build_index_with_progress(graph, |_| {})
}

/// Like [`build_index`], calling `progress_callback` with the step count after every
/// elimination.
#[instrument(skip(graph, progress_callback), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn build_index_with_progress<F>(graph: &Graph, progress_callback: F) -> Result<IndexBuild, IndexError>
where
    F: FnMut(usize),
{
    let mut eliminator = Eliminator::new(graph, MinDegree);
    eliminator.eliminate_to_with_progress(graph.vertex_count(), progress_callback)?;
    let elimination = eliminator.finish()?;

    let tree = EliminationTree::build(&elimination)?;
    let chains = AncestorChains::build(&elimination, &tree)?;
    let index = H2HIndex::build(&elimination, &tree, &chains)?;
    Ok(IndexBuild { elimination, tree, chains, index })
}

/// Which graph statistics to compute before indexing.
#[derive(Clone, Debug, Default)]
pub struct ReportOptions {
    /// BFS start; the graph's first vertex when unset.
    pub start: Option<VertexId>,
    /// Random sources for the single-sweep diameter bound; 0 skips it.
    pub diameter_samples: usize,
    /// Sources for the sampled exact diameter; 0 skips it.
    pub exact_samples: usize,
}

/// Graph statistics gathered by [`report_graph`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphReport {
    /// Vertices reached by the BFS from the start vertex.
    pub bfs_size: usize,
    /// `(lower, upper)` diameter bound from random sources.
    pub diameter_bounds: Option<(Weight, Weight)>,
    /// Double-sweep lower bound.
    pub double_sweep: Weight,
    /// Largest eccentricity over the sampled sources.
    pub sampled_diameter: Option<Weight>,
}

/// Compute the traversal statistics requested by `options`.
#[instrument(skip(graph, rng))]
pub fn report_graph<R: Rng>(graph: &Graph, options: &ReportOptions, rng: &mut R) -> Result<GraphReport, IndexError> {
    let start = options.start.or_else(|| graph.first_vertex()).ok_or(IndexError::EmptyGraph)?;
    let bfs_size = bfs(graph, start, None)?.order.len();
    info!(start, bfs_size, "BFS traversal");

    let diameter_bounds = match options.diameter_samples {
        0 => None,
        k => Some(estimate_diameter(graph, k, rng)?),
    };
    let (_, sweep) = double_sweep(graph)?;
    let sampled = match options.exact_samples {
        0 => None,
        k => Some(sampled_diameter(graph, k)?),
    };
    info!(?diameter_bounds, double_sweep = sweep, sampled_diameter = ?sampled, "diameter");

    Ok(GraphReport { bfs_size, diameter_bounds, double_sweep: sweep, sampled_diameter: sampled })
}
