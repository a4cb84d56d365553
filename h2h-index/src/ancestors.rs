//! Root-to-vertex ancestor chains over the elimination forest.

use std::collections::HashMap;

use h2h_core::{
    IndexError,
    VertexId,
};
use tracing::instrument;

use crate::elimination::Elimination;
use crate::tree::EliminationTree;

/// For every bag, the bag centers on the path from its forest root down to itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AncestorChains {
    /// Vertex -> `[root, ..., parent, vertex]`.
    chains: HashMap<VertexId, Vec<VertexId>>,
}

impl AncestorChains {
    /// Build every chain iteratively, parents before children.
    ///
    /// Vertices are visited in reverse elimination order. A parent is eliminated after its
    /// child, so its chain already exists when the child extends it by one element.
    #[instrument(skip(elimination, tree), fields(bags = elimination.len()))]
    pub fn build(elimination: &Elimination, tree: &EliminationTree) -> Result<Self, IndexError> {
        let mut chains: HashMap<VertexId, Vec<VertexId>> = HashMap::with_capacity(elimination.len());

        for v in elimination.order().rev() {
            let mut chain = match tree.parent(v) {
                Some(p) => {
                    let parent_chain =
                        chains.get(&p).ok_or(IndexError::MissingAncestor { vertex: v, parent: p })?;
                    let mut chain = Vec::with_capacity(parent_chain.len() + 1);
                    chain.extend_from_slice(parent_chain);
                    chain
                },
                None => Vec::with_capacity(1),
            };
            chain.push(v);
            chains.insert(v, chain);
        }

        Ok(Self { chains })
    }

    /// Chain ending at `v`.
    pub fn get(&self, v: VertexId) -> Option<&[VertexId]> {
        self.chains.get(&v).map(Vec::as_slice)
    }

    /// Length of the longest chain, i.e. the forest's depth.
    pub fn max_depth(&self) -> usize {
        self.chains.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of chains, one per bag.
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// True for the chains of an empty graph.
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}
