//! Minimal, maximal, smallest and largest elements.
//!
//! Degrees are taken in whichever graph is passed. On the reflexive relation
//! every element has a self-pair, so nothing is minimal or maximal there;
//! pass the covering graph for the usual order-theoretic answers.

use std::hash::Hash;

use crate::graph::RelationGraph;

/// Elements with nothing below them (in-degree 0), in element order.
pub fn minimal<E: Eq + Hash + Clone>(graph: &RelationGraph<E>) -> Vec<&E> {
    graph.elements().filter(|x| graph.in_degree(x) == 0).collect()
}

/// Elements with nothing above them (out-degree 0), in element order.
pub fn maximal<E: Eq + Hash + Clone>(graph: &RelationGraph<E>) -> Vec<&E> {
    graph.elements().filter(|x| graph.out_degree(x) == 0).collect()
}

/// The unique minimal element of a weakly connected graph.
pub fn smallest<E: Eq + Hash + Clone>(graph: &RelationGraph<E>) -> Option<&E> {
    unique(minimal(graph), graph)
}

/// The unique maximal element of a weakly connected graph.
pub fn largest<E: Eq + Hash + Clone>(graph: &RelationGraph<E>) -> Option<&E> {
    unique(maximal(graph), graph)
}

fn unique<'a, E: Eq + Hash + Clone>(found: Vec<&'a E>, graph: &RelationGraph<E>) -> Option<&'a E> {
    match found.as_slice() {
        [only] if graph.is_weakly_connected() => Some(*only),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce::reduce;

    #[test]
    fn divisibility_extremes() {
        let h = reduce(RelationGraph::build(1..=10u32, |x, y| y % x == 0)).unwrap();
        let g = h.as_graph();
        assert_eq!(minimal(g), vec![&1]);
        assert_eq!(maximal(g), vec![&6, &7, &8, &9, &10]);
        assert_eq!(smallest(g), Some(&1));
        assert_eq!(largest(g), None);
    }

    #[test]
    fn reflexive_graph_has_no_extremes() {
        let g = RelationGraph::build(1..=4u32, |x, y| x <= y);
        assert!(minimal(&g).is_empty());
        assert!(maximal(&g).is_empty());
        assert_eq!(smallest(&g), None);
    }

    #[test]
    fn disconnected_singletons_are_not_unique_extremes() {
        // 3 sits apart from the chain 1 -> 2, so it is minimal too.
        let g = RelationGraph::from_pairs(vec![1u32, 2, 3], vec![(1, 2)]).unwrap();
        assert_eq!(minimal(&g), vec![&1, &3]);
        assert_eq!(smallest(&g), None);

        // One element alone is both smallest and largest.
        let g = RelationGraph::from_pairs(vec!["x"], Vec::new()).unwrap();
        assert_eq!(smallest(&g), Some(&"x"));
        assert_eq!(largest(&g), Some(&"x"));
    }

    #[test]
    fn empty_graph_has_nothing() {
        let g = RelationGraph::<u32>::new();
        assert!(minimal(&g).is_empty());
        assert!(maximal(&g).is_empty());
        assert_eq!(smallest(&g), None);
        assert_eq!(largest(&g), None);
    }
}
