//! Certifies that a relation is a partial order.
//!
//! The three laws are checked in priority order, each over every element
//! before the next law starts, so the kind of failure reported never depends
//! on element order; only the particular witness does. The graph is only
//! read.

use std::hash::Hash;

use tracing::{debug, warn};

use crate::error::OrderError;
use crate::graph::RelationGraph;

/// Returns `Ok(())` if `graph` is reflexive, antisymmetric and transitive,
/// otherwise the first counterexample found.
pub fn check<E>(graph: &RelationGraph<E>) -> Result<(), OrderError<E>>
where
    E: Eq + Hash + Clone + std::fmt::Debug,
{
    debug!(elements = graph.len(), edges = graph.edge_count(), "checking partial order");
    let result = check_reflexive(graph)
        .and_then(|()| check_antisymmetric(graph))
        .and_then(|()| check_transitive(graph));
    match &result {
        Ok(()) => debug!("partial order confirmed"),
        Err(e) => warn!(kind = %e.kind(), "{e}"),
    }
    result
}

/// Every element must be related to itself.
pub fn check_reflexive<E: Eq + Hash + Clone>(graph: &RelationGraph<E>) -> Result<(), OrderError<E>> {
    match (0..graph.len()).find(|&x| !graph.has_link(x, x)) {
        Some(x) => Err(OrderError::NotReflexive(graph.key(x).clone())),
        None => Ok(()),
    }
}

/// No two distinct elements may be related both ways.
pub fn check_antisymmetric<E: Eq + Hash + Clone>(
    graph: &RelationGraph<E>,
) -> Result<(), OrderError<E>> {
    for x in 0..graph.len() {
        for &y in graph.succ_of(x) {
            if x != y && graph.has_link(y, x) {
                return Err(OrderError::NotAntisymmetric(graph.key(x).clone(), graph.key(y).clone()));
            }
        }
    }
    Ok(())
}

/// Whenever `x -> y` and `y -> z`, also `x -> z`.
pub fn check_transitive<E: Eq + Hash + Clone>(graph: &RelationGraph<E>) -> Result<(), OrderError<E>> {
    for x in 0..graph.len() {
        for &y in graph.succ_of(x) {
            for &z in graph.succ_of(y) {
                if !graph.has_link(x, z) {
                    return Err(OrderError::NotTransitive(
                        graph.key(x).clone(),
                        graph.key(y).clone(),
                        graph.key(z).clone(),
                    ));
                }
            }
        }
    }
    Ok(())
}
