use std::fmt::Debug;
use std::hash::Hash;

use ordermap::OrderMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::OrderError;
use crate::extremal;
use crate::graph::RelationGraph;
use crate::rank::{assign_ranks_with, RankRule};
use crate::reduce::{reduce, CoveringGraph};
use crate::validate;

/// A validated partial order reduced to its covering relation, with a layer
/// for every element. This is what a renderer consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasseDiagram<E> {
    covering: CoveringGraph<E>,
    ranks: OrderMap<E, usize>,
}

/// Extremal elements of the covering relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtremalReport<'a, E> {
    pub minimal: Vec<&'a E>,
    pub maximal: Vec<&'a E>,
    pub smallest: Option<&'a E>,
    pub largest: Option<&'a E>,
}

/// Renderer hand-off: elements, covering edges and layers.
#[derive(Serialize)]
struct DiagramView<'a, E> {
    elements: Vec<&'a E>,
    edges: Vec<(&'a E, &'a E)>,
    ranks: Vec<(&'a E, usize)>,
}

impl<E> HasseDiagram<E>
where
    E: Eq + Hash + Clone + Debug,
{
    /// Builds the relation over `domain`, checks it is a partial order and
    /// derives the diagram with the historic layering.
    pub fn derive<I, F>(domain: I, relation: F) -> Result<Self, OrderError<E>>
    where
        I: IntoIterator<Item = E>,
        F: FnMut(&E, &E) -> bool,
    {
        Self::from_relation(RelationGraph::build(domain, relation), RankRule::default())
    }

    /// Validation, reduction and ranking, in that order. A relation that
    /// fails validation is never reduced.
    pub fn from_relation(graph: RelationGraph<E>, rule: RankRule) -> Result<Self, OrderError<E>> {
        validate::check(&graph)?;
        let covering = reduce(graph)?;
        let ranks = assign_ranks_with(&covering, rule);
        debug!(
            elements = covering.as_graph().len(),
            covers = covering.as_graph().edge_count(),
            ?rule,
            "derived hasse diagram"
        );
        Ok(HasseDiagram { covering, ranks })
    }

    pub fn rank(&self, e: &E) -> Option<usize> {
        self.ranks.get(e).copied()
    }
}

impl<E> HasseDiagram<E> {
    pub fn covering(&self) -> &CoveringGraph<E> {
        &self.covering
    }

    pub fn ranks(&self) -> &OrderMap<E, usize> {
        &self.ranks
    }

    /// Elements grouped by rank, lowest layer first.
    pub fn layers(&self) -> Vec<Vec<&E>> {
        let depth = self.ranks.values().copied().max().unwrap_or(0);
        let mut layers = vec![Vec::new(); depth];
        for (e, &r) in &self.ranks {
            layers[r - 1].push(e);
        }
        layers
    }

    pub fn into_parts(self) -> (CoveringGraph<E>, OrderMap<E, usize>) {
        (self.covering, self.ranks)
    }
}

impl<E: Eq + Hash + Clone> HasseDiagram<E> {
    pub fn extremal(&self) -> ExtremalReport<'_, E> {
        let g = self.covering.as_graph();
        ExtremalReport {
            minimal: extremal::minimal(g),
            maximal: extremal::maximal(g),
            smallest: extremal::smallest(g),
            largest: extremal::largest(g),
        }
    }
}

impl<E: Serialize> Serialize for HasseDiagram<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let g = self.covering.as_graph();
        DiagramView {
            elements: g.elements().collect(),
            edges: g.edges().collect(),
            ranks: self.ranks.iter().map(|(e, &r)| (e, r)).collect(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn divisibility_diagram() {
        let d = HasseDiagram::derive(1..=10u32, |x, y| y % x == 0).unwrap();
        assert_eq!(d.rank(&8), Some(4));
        assert_eq!(d.rank(&11), None);
        assert_eq!(
            d.layers(),
            vec![vec![&1], vec![&2, &3, &5, &7], vec![&4, &6, &9, &10], vec![&8]]
        );
        let report = d.extremal();
        assert_eq!(report.minimal, vec![&1]);
        assert_eq!(report.largest, None);
    }

    #[test]
    fn invalid_relation_stops_the_pipeline() {
        let err = HasseDiagram::derive(1..=3, |x: &i32, y: &i32| x < y).unwrap_err();
        assert_eq!(err, OrderError::NotReflexive(1));

        let graph = RelationGraph::from_pairs(1..=3, vec![(1, 1), (2, 2), (3, 3), (1, 2), (2, 1)]).unwrap();
        let err = HasseDiagram::from_relation(graph, RankRule::LongestPath).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotAntisymmetric);
    }

    #[test]
    fn serializes_for_the_renderer() {
        let d = HasseDiagram::derive(vec![1u32, 2, 3], |x, y| x <= y).unwrap();
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(
            v,
            json!({
                "elements": [1, 2, 3],
                "edges": [[1, 2], [2, 3]],
                "ranks": [[1, 1], [2, 2], [3, 3]],
            })
        );
        let r = serde_json::to_value(d.extremal()).unwrap();
        assert_eq!(
            r,
            json!({ "minimal": [1], "maximal": [3], "smallest": 1, "largest": 3 })
        );
    }

    #[test]
    fn empty_domain_gives_empty_diagram() {
        let d = HasseDiagram::derive(Vec::<u32>::new(), |_, _| true).unwrap();
        assert!(d.layers().is_empty());
        let report = d.extremal();
        assert!(report.minimal.is_empty() && report.maximal.is_empty());
        assert_eq!(report.smallest, None);
        assert_eq!(report.largest, None);
    }
}
