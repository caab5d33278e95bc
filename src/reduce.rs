use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::hash::Hash;

use petgraph::algo::{has_path_connecting, toposort, DfsSpace};
use petgraph::graph::NodeIndex;
use tracing::debug;

use crate::error::OrderError;
use crate::graph::RelationGraph;

/// The covering relation of a partial order: no self-pairs, and no edge
/// `x -> z` for which some `y` sits strictly between `x` and `z`.
///
/// Only [`reduce`] produces one, so every `CoveringGraph` is acyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoveringGraph<E> {
    graph: RelationGraph<E>,
}

/// Turns a validated partial order into its covering relation.
///
/// Self-pairs are stripped first, giving the strict order. The result must
/// be acyclic, otherwise [`OrderError::NotADag`] names an element on a
/// cycle. Every remaining edge `u -> v` is then dropped if `v` is still
/// reachable from another successor of `u`.
///
/// The input is expected to have passed [`crate::validate::check`]; an
/// already reduced graph comes back unchanged.
pub fn reduce<E>(mut graph: RelationGraph<E>) -> Result<CoveringGraph<E>, OrderError<E>>
where
    E: Eq + Hash + Clone,
{
    let loops: Vec<E> = graph.elements().filter(|x| graph.has_edge(x, x)).cloned().collect();
    for x in &loops {
        graph.remove_edge(x, x)?;
    }

    let g = graph.to_digraph();
    if let Err(cycle) = toposort(&g, None) {
        return Err(OrderError::NotADag(graph.key(cycle.node_id().index()).clone()));
    }

    let mut space = DfsSpace::new(&g);
    let mut redundant = HashSet::new();
    for u in 0..graph.len() {
        let succ = graph.succ_of(u);
        for &v in succ {
            // An alternate route through another successor makes u -> v implied.
            let implied = succ.iter().any(|&w| {
                w != v && has_path_connecting(&g, NodeIndex::new(w), NodeIndex::new(v), Some(&mut space))
            });
            if implied {
                redundant.insert((u, v));
            }
        }
    }
    graph.retain_links(|u, v| !redundant.contains(&(u, v)));

    debug!(
        self_pairs = loops.len(),
        removed = redundant.len(),
        covering = graph.edge_count(),
        "reduced to covering relation"
    );
    Ok(CoveringGraph { graph })
}

impl<E> CoveringGraph<E> {
    pub fn as_graph(&self) -> &RelationGraph<E> {
        &self.graph
    }

    pub fn into_graph(self) -> RelationGraph<E> {
        self.graph
    }

    /// One topological order of the elements: every covering edge points
    /// forward. Ties go to the element that appeared first.
    pub fn linear_extension(&self) -> Vec<&E> {
        self.topo_order().into_iter().map(|u| self.graph.key(u)).collect()
    }

    /// Kahn's algorithm over element indices, smallest index first.
    pub(crate) fn topo_order(&self) -> Vec<usize> {
        let n = self.graph.len();
        let mut in_degree: Vec<usize> = (0..n).map(|v| self.graph.pred_of(v).len()).collect();
        let mut ready: BinaryHeap<Reverse<usize>> =
            (0..n).filter(|&v| in_degree[v] == 0).map(Reverse).collect();
        let mut out = Vec::with_capacity(n);
        while let Some(Reverse(u)) = ready.pop() {
            out.push(u);
            for &v in self.graph.succ_of(u) {
                in_degree[v] -= 1;
                if in_degree[v] == 0 {
                    ready.push(Reverse(v));
                }
            }
        }
        debug_assert_eq!(out.len(), n, "covering graph is acyclic");
        out
    }

    /// Every pair of distinct elements neither of which lies above the
    /// other, listed once with the earlier-appearing element first.
    pub fn incomparable_pairs(&self) -> Vec<(&E, &E)> {
        let n = self.graph.len();
        let g = self.graph.to_digraph();
        let mut space = DfsSpace::new(&g);
        let mut out = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (NodeIndex::new(i), NodeIndex::new(j));
                let i_to_j = has_path_connecting(&g, a, b, Some(&mut space));
                let j_to_i = has_path_connecting(&g, b, a, Some(&mut space));
                if !i_to_j && !j_to_i {
                    out.push((self.graph.key(i), self.graph.key(j)));
                }
            }
        }
        out
    }
}

impl<E> AsRef<RelationGraph<E>> for CoveringGraph<E> {
    fn as_ref(&self) -> &RelationGraph<E> {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use proptest::prelude::*;

    fn pairs<E: Clone>(g: &RelationGraph<E>) -> Vec<(E, E)> {
        g.edges().map(|(a, b)| (a.clone(), b.clone())).collect()
    }

    fn strict(g: &RelationGraph<u32>) -> RelationGraph<u32> {
        let mut s = g.clone();
        for x in g.elements() {
            if s.has_edge(x, x) {
                s.remove_edge(x, x).unwrap();
            }
        }
        s
    }

    #[test]
    fn total_order_reduces_to_a_path() {
        let g = RelationGraph::build(1..=10u32, |x, y| x <= y);
        let h = reduce(g).unwrap();
        let expected: Vec<(u32, u32)> = (1..10).map(|i| (i, i + 1)).collect();
        assert_eq!(pairs(h.as_graph()), expected);
    }

    #[test]
    fn divisibility_covers_by_prime_steps() {
        let g = RelationGraph::build(1..=10u32, |x, y| y % x == 0);
        let h = reduce(g).unwrap();
        let expected = vec![
            (1, 2),
            (1, 3),
            (1, 5),
            (1, 7),
            (2, 4),
            (2, 6),
            (2, 10),
            (3, 6),
            (3, 9),
            (4, 8),
            (5, 10),
        ];
        assert_eq!(pairs(h.as_graph()), expected);
        assert!(h.as_graph().elements().all(|x| !h.as_graph().has_edge(x, x)));
    }

    #[test]
    fn reduction_is_idempotent() {
        let g = RelationGraph::build(1..=12u32, |x, y| y % x == 0);
        let once = reduce(g).unwrap();
        let twice = reduce(once.clone().into_graph()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn cycles_are_rejected() {
        let g = RelationGraph::from_pairs(vec![1, 2, 3], vec![(1, 2), (2, 3), (3, 1)]).unwrap();
        let err = reduce(g).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotADag);
    }

    #[test]
    fn empty_graph_reduces_to_empty() {
        let h = reduce(RelationGraph::<u32>::new()).unwrap();
        assert!(h.as_graph().is_empty());
        assert!(h.linear_extension().is_empty());
        assert!(h.incomparable_pairs().is_empty());
    }

    #[test]
    fn linear_extension_respects_covers() {
        let g = RelationGraph::build(vec![9u32, 3, 1, 6, 2], |x, y| y % x == 0);
        let h = reduce(g).unwrap();
        let order: Vec<u32> = h.linear_extension().into_iter().copied().collect();
        assert_eq!(order, vec![1, 3, 9, 2, 6]);
    }

    #[test]
    fn incomparable_pairs_of_divisibility() {
        let g = RelationGraph::build(vec![1u32, 2, 3, 4], |x, y| y % x == 0);
        let h = reduce(g).unwrap();
        let amb: Vec<(u32, u32)> = h.incomparable_pairs().into_iter().map(|(a, b)| (*a, *b)).collect();
        assert_eq!(amb, vec![(2, 3), (3, 4)]);
    }

    fn arbitrary_order() -> impl Strategy<Value = RelationGraph<u32>> {
        // Divisibility restricted to a random subset is always a partial order.
        proptest::collection::btree_set(1u32..40, 0..12)
            .prop_map(|dom| RelationGraph::build(dom, |x, y| y % x == 0))
    }

    proptest! {
        #[test]
        fn closure_round_trips(g in arbitrary_order()) {
            let s = strict(&g);
            let h = reduce(g.clone()).unwrap();
            for a in g.elements() {
                for b in g.elements() {
                    let before = a == b || s.reaches(a, b);
                    prop_assert_eq!(h.as_graph().reaches(a, b), before);
                }
            }
        }

        #[test]
        fn covers_have_nothing_between(g in arbitrary_order()) {
            let h = reduce(g.clone()).unwrap();
            for (x, z) in h.as_graph().edges() {
                prop_assert!(g.elements().all(|y| y == x || y == z || !(g.has_edge(x, y) && g.has_edge(y, z))));
            }
        }
    }
}
