//! The elimination forest over bags.
//!
//! Each bag is linked to the bag of its earliest-eliminated other member. Every other member of
//! a bag is still present in the working graph when its center is eliminated, so a parent always
//! has a strictly larger rank than its child: following parents terminates, and the
//! last-eliminated vertex of each component is a root.

use std::collections::HashMap;

use h2h_core::{
    IndexError,
    VertexId,
};
use petgraph::dot::{
    Config,
    Dot,
};
use petgraph::graphmap::DiGraphMap;
use tracing::{
    debug,
    instrument,
};

use crate::elimination::Elimination;

/// Parent links between bags, keyed by bag center.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EliminationTree {
    /// Bag center -> parent bag center; `None` for roots.
    parent: HashMap<VertexId, Option<VertexId>>,
    /// Roots in elimination order.
    roots: Vec<VertexId>,
}

impl EliminationTree {
    /// Derive parent links from the bags and ranks of an elimination.
    ///
    /// Fails with `MissingAncestor` if a bag member has no bag of its own.
    #[instrument(skip(elimination), fields(bags = elimination.len()))]
    pub fn build(elimination: &Elimination) -> Result<Self, IndexError> {
        let mut parent = HashMap::with_capacity(elimination.len());
        let mut roots = Vec::new();

        for bag in elimination.bags() {
            let mut best: Option<(usize, VertexId)> = None;
            for &member in bag.neighbors() {
                let rank = elimination
                    .phi(member)
                    .ok_or(IndexError::MissingAncestor { vertex: bag.center, parent: member })?;
                if best.map_or(true, |(r, _)| rank < r) {
                    best = Some((rank, member));
                }
            }

            let p = best.map(|(_, member)| member);
            if p.is_none() {
                roots.push(bag.center);
            }
            parent.insert(bag.center, p);
        }

        debug!(roots = roots.len(), "built elimination forest");
        Ok(Self { parent, roots })
    }

    /// Parent of `v`, or `None` if `v` is a root or not in the forest.
    pub fn parent(&self, v: VertexId) -> Option<VertexId> {
        self.parent.get(&v).copied().flatten()
    }

    /// Whether `v` has a bag in this forest.
    pub fn contains(&self, v: VertexId) -> bool {
        self.parent.contains_key(&v)
    }

    /// Forest roots in elimination order.
    pub fn roots(&self) -> &[VertexId] {
        &self.roots
    }

    /// Number of bags.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// True for the forest of an empty graph.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Depth of `v`, counting the root as depth 1.
    ///
    /// Walks at most one step per bag, so a corrupted parent map cannot loop forever; `None` if
    /// `v` is unknown or the walk does not reach a root.
    pub fn depth(&self, v: VertexId) -> Option<usize> {
        if !self.contains(v) {
            return None;
        }
        let mut depth = 1;
        let mut current = v;
        while let Some(p) = self.parent(current) {
            depth += 1;
            if depth > self.len() {
                return None;
            }
            current = p;
        }
        Some(depth)
    }

    /// Render the forest as Graphviz DOT, edges pointing from child to parent.
    pub fn to_dot(&self) -> String {
        let mut links: Vec<_> = self.parent.iter().map(|(&child, &p)| (child, p)).collect();
        links.sort_unstable();

        let mut graph = DiGraphMap::<VertexId, &str>::new();
        for (child, p) in links {
            graph.add_node(child);
            if let Some(p) = p {
                graph.add_edge(child, p, "");
            }
        }
        format!("{}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
    }
}
