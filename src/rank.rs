use std::hash::Hash;

use ordermap::OrderMap;
use petgraph::algo::dijkstra;
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::reduce::CoveringGraph;

/// How layers are derived from the covering relation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankRule {
    /// `1 + max_m d(m, n)` with `d` the shortest distance from each minimal
    /// element `m`. Reproduces the historic layout; see [`assign_ranks`].
    #[default]
    ShortestFromEachMinimal,
    /// `1 +` the longest path from any minimal element. Strictly increasing
    /// along every covering edge.
    LongestPath,
}

pub fn assign_ranks_with<E>(covering: &CoveringGraph<E>, rule: RankRule) -> OrderMap<E, usize>
where
    E: Eq + Hash + Clone,
{
    match rule {
        RankRule::ShortestFromEachMinimal => assign_ranks(covering),
        RankRule::LongestPath => assign_longest_path_ranks(covering),
    }
}

/// Assigns every element its layer in the Hasse diagram.
///
/// Minimal elements (in-degree 0) get rank 1. Any other element `n` gets
/// `1 + max_m d(m, n)`, where `d` is the *shortest* path length from a
/// minimal element `m` that reaches `n`.
///
/// This is a maximum of per-source shortest distances, not a longest path.
/// Along an edge `x -> y` it usually increases, but not always: with covers
/// `m -> a -> x -> y` and `m -> b -> y`, both `x` and `y` land on layer 3.
/// Use [`assign_longest_path_ranks`] when strict layering matters.
///
/// The map lists elements in the graph's element order.
pub fn assign_ranks<E>(covering: &CoveringGraph<E>) -> OrderMap<E, usize>
where
    E: Eq + Hash + Clone,
{
    let graph = covering.as_graph();
    let g = graph.to_digraph();
    let mut rank = vec![1usize; graph.len()];

    let minimal: Vec<usize> = (0..graph.len()).filter(|&v| graph.pred_of(v).is_empty()).collect();
    for &m in &minimal {
        let dist = dijkstra(&g, NodeIndex::new(m), None, |_| 1usize);
        for (node, d) in dist {
            let r = &mut rank[node.index()];
            *r = (*r).max(d + 1);
        }
    }
    debug!(
        minimal = minimal.len(),
        layers = rank.iter().copied().max().unwrap_or(0),
        "assigned ranks"
    );

    graph.elements().cloned().zip(rank).collect()
}

/// Layers by longest path from any minimal element, minimal elements on 1.
pub fn assign_longest_path_ranks<E>(covering: &CoveringGraph<E>) -> OrderMap<E, usize>
where
    E: Eq + Hash + Clone,
{
    let graph = covering.as_graph();
    let mut rank = vec![1usize; graph.len()];
    for u in covering.topo_order() {
        for &v in graph.succ_of(u) {
            rank[v] = rank[v].max(rank[u] + 1);
        }
    }
    debug!(layers = rank.iter().copied().max().unwrap_or(0), "assigned longest-path ranks");

    graph.elements().cloned().zip(rank).collect()
}
