//! Hierarchical 2-hop (H2H) labels and the distance queries they answer.
//!
//! Every vertex `v` with ancestor chain `A = anc[v]` (root first, `v` last) stores two arrays:
//! - `pos[v]`, parallel to its bag, giving the index in `A` of each bag member;
//! - `dis[v]`, parallel to `A`, giving the exact shortest-path distance from `v` to each
//!   ancestor.
//!
//! `dis` comes from a top-down dynamic program. Any shortest path from `v` to an ancestor
//! `A[i]` leaves `v` through one of its bag members `x_j`, at cost `lambda[j]`, and `x_j` is
//! itself an ancestor of `v`. Whichever of `x_j` and `A[i]` is deeper already holds the distance
//! between the two:
//! - `dis[x_j][i]` when `pos[v][j] > i` (`A[i]` is above `x_j`);
//! - `dis[A[i]][pos[v][j]]` otherwise.
//!
//! A query for `(s, t)` takes their lowest common ancestor `c` in the forest; every `s`-`t` path
//! passes through a member of `c`'s bag, so the distance is the minimum over `p` in `pos[c]` of
//! `dis[s][p] + dis[t][p]`.

use std::collections::HashMap;

use h2h_core::{
    IndexError,
    VertexId,
    Weight,
};
use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    info,
    instrument,
    warn,
};

use crate::ancestors::AncestorChains;
use crate::elimination::{
    Elimination,
    Rank,
};
use crate::tree::EliminationTree;

/// Distance recorded when no path through any bag member is known.
pub const UNREACHABLE: Weight = Weight::MAX;

/// Everything the index stores for one vertex.
///
/// A sequence of these, in elimination order, is sufficient to answer queries without
/// re-running elimination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexLabel {
    /// The vertex (and bag center) this label belongs to.
    pub vertex: VertexId,
    /// Elimination rank.
    pub phi: Rank,
    /// Parent bag center in the elimination forest.
    pub parent: Option<VertexId>,
    /// `vertex` followed by its neighbors at elimination time.
    pub bag: Vec<VertexId>,
    /// Parallel to `bag`: weight from `vertex` to each member.
    pub lambda: Vec<Weight>,
    /// Ancestor chain, root first, ending with `vertex`.
    pub anc: Vec<VertexId>,
    /// Parallel to `bag`: index of each member within `anc`.
    pub pos: Vec<usize>,
    /// Parallel to `anc`: shortest-path distance to each ancestor.
    pub dis: Vec<Weight>,
}

/// The queryable H2H index: one [`VertexLabel`] per vertex.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<VertexLabel>", into = "Vec<VertexLabel>")]
pub struct H2HIndex {
    /// Labels in elimination order.
    labels: Vec<VertexLabel>,
    /// Vertex -> index into `labels`.
    lookup: HashMap<VertexId, usize>,
}

/// Index of every bag member within the member's own ancestor chain `anc`.
fn bag_positions(vertex: VertexId, bag: &[VertexId], anc: &[VertexId]) -> Result<Vec<usize>, IndexError> {
    bag.iter()
        .map(|&member| {
            anc.iter()
                .position(|&a| a == member)
                .ok_or(IndexError::InconsistentIndex { vertex, member })
        })
        .collect()
}

impl H2HIndex {
    /// Compute `pos` and `dis` for every vertex, ancestors before descendants.
    #[instrument(skip_all, fields(bags = elimination.len()))]
    pub fn build(
        elimination: &Elimination,
        tree: &EliminationTree,
        chains: &AncestorChains,
    ) -> Result<Self, IndexError> {
        let mut positions: HashMap<VertexId, Vec<usize>> = HashMap::with_capacity(elimination.len());
        let mut distances: HashMap<VertexId, Vec<Weight>> = HashMap::with_capacity(elimination.len());

        for bag in elimination.bags().iter().rev() {
            let v = bag.center;
            let anc = chains.get(v).ok_or(IndexError::MissingAncestor {
                vertex: v,
                parent: tree.parent(v).unwrap_or(v),
            })?;
            let pos = bag_positions(v, &bag.members, anc)?;

            let mut dis = vec![UNREACHABLE; anc.len()];
            dis[anc.len() - 1] = 0;
            for (i, &ancestor) in anc.iter().enumerate().take(anc.len() - 1) {
                let mut best = UNREACHABLE;
                for j in 1..bag.len() {
                    let member = bag.members[j];
                    let through = if pos[j] > i {
                        distances.get(&member).and_then(|d| d.get(i))
                    } else {
                        distances.get(&ancestor).and_then(|d| d.get(pos[j]))
                    };
                    match through {
                        Some(&d) if d != UNREACHABLE => best = best.min(bag.lambda[j].saturating_add(d)),
                        _ => warn!(vertex = v, member, ancestor, "no known distance through bag member"),
                    }
                }
                dis[i] = best;
            }

            positions.insert(v, pos);
            distances.insert(v, dis);
        }

        let labels = elimination
            .bags()
            .iter()
            .enumerate()
            .map(|(idx, bag)| {
                let v = bag.center;
                let missing = || IndexError::InconsistentIndex { vertex: v, member: v };
                Ok(VertexLabel {
                    vertex: v,
                    phi: idx + 1,
                    parent: tree.parent(v),
                    bag: bag.members.clone(),
                    lambda: bag.lambda.clone(),
                    anc: chains.get(v).ok_or_else(missing)?.to_vec(),
                    pos: positions.remove(&v).ok_or_else(missing)?,
                    dis: distances.remove(&v).ok_or_else(missing)?,
                })
            })
            .collect::<Result<Vec<_>, IndexError>>()?;

        let index = Self::from_labels(labels);
        info!(labels = index.len(), max_label_len = index.max_label_len(), "built H2H index");
        Ok(index)
    }

    /// Wrap labels that are already known to be consistent.
    fn from_labels(labels: Vec<VertexLabel>) -> Self {
        let lookup = labels.iter().enumerate().map(|(i, l)| (l.vertex, i)).collect();
        Self { labels, lookup }
    }

    /// Label of `v`.
    pub fn label(&self, v: VertexId) -> Option<&VertexLabel> {
        self.lookup.get(&v).map(|&i| &self.labels[i])
    }

    /// All labels in elimination order.
    pub fn labels(&self) -> &[VertexLabel] {
        &self.labels
    }

    /// Number of labelled vertices.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True for the index of an empty graph.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Longest `dis` array, equal to the forest depth.
    pub fn max_label_len(&self) -> usize {
        self.labels.iter().map(|l| l.dis.len()).max().unwrap_or(0)
    }

    /// Lowest common ancestor of `s` and `t`, `None` if they lie in different trees.
    pub fn lca(&self, s: VertexId, t: VertexId) -> Result<Option<VertexId>, IndexError> {
        let ls = self.label(s).ok_or(IndexError::UnknownVertex(s))?;
        let lt = self.label(t).ok_or(IndexError::UnknownVertex(t))?;
        let common = ls.anc.iter().zip(&lt.anc).take_while(|(a, b)| a == b).count();
        Ok(common.checked_sub(1).map(|i| ls.anc[i]))
    }

    /// Shortest-path distance between `s` and `t`, `None` if they are disconnected.
    pub fn distance(&self, s: VertexId, t: VertexId) -> Result<Option<Weight>, IndexError> {
        let Some(lca) = self.lca(s, t)? else { return Ok(None) };
        if s == t {
            return Ok(Some(0));
        }

        let ls = self.label(s).ok_or(IndexError::UnknownVertex(s))?;
        let lt = self.label(t).ok_or(IndexError::UnknownVertex(t))?;
        let lc = self
            .label(lca)
            .ok_or(IndexError::InconsistentIndex { vertex: s, member: lca })?;

        let best = lc
            .pos
            .iter()
            .filter_map(|&p| {
                let (&ds, &dt) = (ls.dis.get(p)?, lt.dis.get(p)?);
                ds.checked_add(dt).filter(|&d| d != UNREACHABLE)
            })
            .min();
        Ok(best)
    }
}

impl From<H2HIndex> for Vec<VertexLabel> {
    fn from(index: H2HIndex) -> Self {
        index.labels
    }
}

impl TryFrom<Vec<VertexLabel>> for H2HIndex {
    type Error = IndexError;

    /// Rebuild an index from stored labels, checking that their arrays line up.
    fn try_from(labels: Vec<VertexLabel>) -> Result<Self, Self::Error> {
        let index = Self::from_labels(labels);
        for label in &index.labels {
            let v = label.vertex;
            let shape_ok = label.bag.first() == Some(&v)
                && label.anc.last() == Some(&v)
                && label.lambda.len() == label.bag.len()
                && label.pos.len() == label.bag.len()
                && label.dis.len() == label.anc.len();
            if !shape_ok {
                return Err(IndexError::InconsistentIndex { vertex: v, member: v });
            }
            if let Some(&member) = label.anc.iter().find(|a| !index.lookup.contains_key(a)) {
                return Err(IndexError::MissingAncestor { vertex: v, parent: member });
            }
            for (&member, &p) in label.bag.iter().zip(&label.pos) {
                if label.anc.get(p) != Some(&member) {
                    return Err(IndexError::InconsistentIndex { vertex: v, member });
                }
            }
        }
        Ok(index)
    }
}
