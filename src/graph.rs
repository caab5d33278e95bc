use std::hash::Hash;

use ordermap::OrderMap;
use petgraph::algo::{connected_components, has_path_connecting};
use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::OrderError;

/// A finite set of elements together with a binary relation over them,
/// stored as a directed graph.
///
/// Elements keep their order of first appearance, and every scan in this
/// crate walks them in that order, so diagnostics are reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationGraph<E> {
    /// Stable order-of-appearance: element -> idx
    idx: OrderMap<E, usize>,
    /// Reverse index: idx -> element
    keys: Vec<E>,
    /// Out-neighbours, in insertion order
    succ: Vec<Vec<usize>>,
    /// In-neighbours, in insertion order
    pred: Vec<Vec<usize>>,
}

impl<E> Default for RelationGraph<E> {
    fn default() -> Self {
        Self { idx: OrderMap::new(), keys: Vec::new(), succ: Vec::new(), pred: Vec::new() }
    }
}

impl<E: Eq + Hash + Clone> RelationGraph<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates `relation` on every ordered pair of `domain × domain`,
    /// self-pairs included, and adds an edge wherever it holds.
    ///
    /// Every domain element becomes a node even when it has no edges.
    /// Repeated domain elements are kept once.
    pub fn build<I, F>(domain: I, mut relation: F) -> Self
    where
        I: IntoIterator<Item = E>,
        F: FnMut(&E, &E) -> bool,
    {
        let mut g = RelationGraph::new();
        for e in domain {
            g.add_key(e);
        }
        let n = g.keys.len();
        for u in 0..n {
            for v in 0..n {
                if relation(&g.keys[u], &g.keys[v]) {
                    g.link(u, v);
                }
            }
        }
        g
    }

    /// Builds the graph from an explicit list of related pairs.
    ///
    /// Fails with [`OrderError::UnknownElement`] on the first pair that
    /// mentions something outside `domain`.
    pub fn from_pairs<I, P>(domain: I, pairs: P) -> Result<Self, OrderError<E>>
    where
        I: IntoIterator<Item = E>,
        P: IntoIterator<Item = (E, E)>,
    {
        let mut g = RelationGraph::new();
        for e in domain {
            g.add_key(e);
        }
        for (a, b) in pairs {
            g.add_edge(&a, &b)?;
        }
        Ok(g)
    }

    fn add_key(&mut self, k: E) -> usize {
        if let Some(&i) = self.idx.get(&k) {
            return i;
        }
        let i = self.keys.len();
        self.idx.insert(k.clone(), i);
        self.keys.push(k);
        self.succ.push(Vec::new());
        self.pred.push(Vec::new());
        i
    }

    fn link(&mut self, u: usize, v: usize) -> bool {
        if self.succ[u].contains(&v) {
            return false;
        }
        self.succ[u].push(v);
        self.pred[v].push(u);
        true
    }

    /// Adds an isolated element. Returns `false` if it was already present.
    pub fn add_element(&mut self, e: E) -> bool {
        let before = self.keys.len();
        self.add_key(e);
        self.keys.len() != before
    }

    /// Adds the pair `(a, b)` to the relation. Returns `false` if it was
    /// already present; the relation is a set, not a multiset.
    pub fn add_edge(&mut self, a: &E, b: &E) -> Result<bool, OrderError<E>> {
        let u = self.require(a)?;
        let v = self.require(b)?;
        Ok(self.link(u, v))
    }

    pub fn remove_edge(&mut self, a: &E, b: &E) -> Result<(), OrderError<E>> {
        let not_found = || OrderError::EdgeNotFound(a.clone(), b.clone());
        let (u, v) = match (self.index_of(a), self.index_of(b)) {
            (Some(u), Some(v)) => (u, v),
            _ => return Err(not_found()),
        };
        let pos = self.succ[u].iter().position(|&w| w == v).ok_or_else(not_found)?;
        self.succ[u].remove(pos);
        self.pred[v].retain(|&w| w != u);
        Ok(())
    }

    pub fn contains(&self, e: &E) -> bool {
        self.idx.contains_key(e)
    }

    pub fn has_edge(&self, a: &E, b: &E) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(u), Some(v)) => self.succ[u].contains(&v),
            _ => false,
        }
    }

    /// Out-neighbours of `a`; empty when `a` is not an element.
    pub fn neighbors<'a>(&'a self, a: &E) -> impl Iterator<Item = &'a E> + 'a {
        let succ: &[usize] = match self.index_of(a) {
            Some(u) => &self.succ[u],
            None => &[],
        };
        succ.iter().map(move |&v| &self.keys[v])
    }

    /// In-neighbours of `a`; empty when `a` is not an element.
    pub fn predecessors<'a>(&'a self, a: &E) -> impl Iterator<Item = &'a E> + 'a {
        let pred: &[usize] = match self.index_of(a) {
            Some(v) => &self.pred[v],
            None => &[],
        };
        pred.iter().map(move |&u| &self.keys[u])
    }

    pub fn in_degree(&self, a: &E) -> usize {
        self.index_of(a).map_or(0, |v| self.pred[v].len())
    }

    pub fn out_degree(&self, a: &E) -> usize {
        self.index_of(a).map_or(0, |u| self.succ[u].len())
    }

    /// True when a directed path leads from `a` to `b`. Every element
    /// reaches itself.
    pub fn reaches(&self, a: &E, b: &E) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(u), Some(v)) => {
                let g = self.to_digraph();
                has_path_connecting(&g, NodeIndex::new(u), NodeIndex::new(v), None)
            }
            _ => false,
        }
    }

    /// True when the graph has exactly one component once edge direction
    /// is ignored. The empty graph is not connected.
    pub fn is_weakly_connected(&self) -> bool {
        connected_components(&self.to_digraph()) == 1
    }

    pub(crate) fn index_of(&self, e: &E) -> Option<usize> {
        self.idx.get(e).copied()
    }

    fn require(&self, e: &E) -> Result<usize, OrderError<E>> {
        self.index_of(e).ok_or_else(|| OrderError::UnknownElement(e.clone()))
    }
}

impl<E> RelationGraph<E> {
    /// Elements in order of first appearance.
    pub fn elements(&self) -> impl ExactSizeIterator<Item = &E> + '_ {
        self.keys.iter()
    }

    /// All related pairs, grouped by source in element order.
    pub fn edges(&self) -> impl Iterator<Item = (&E, &E)> + '_ {
        self.succ
            .iter()
            .enumerate()
            .flat_map(move |(u, vs)| vs.iter().map(move |&v| (&self.keys[u], &self.keys[v])))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.succ.iter().map(Vec::len).sum()
    }

    pub(crate) fn key(&self, i: usize) -> &E {
        &self.keys[i]
    }

    pub(crate) fn succ_of(&self, u: usize) -> &[usize] {
        &self.succ[u]
    }

    pub(crate) fn pred_of(&self, v: usize) -> &[usize] {
        &self.pred[v]
    }

    pub(crate) fn has_link(&self, u: usize, v: usize) -> bool {
        self.succ[u].contains(&v)
    }

    /// Keeps only the links for which `keep(u, v)` holds.
    pub(crate) fn retain_links<F>(&mut self, mut keep: F)
    where
        F: FnMut(usize, usize) -> bool,
    {
        for u in 0..self.succ.len() {
            self.succ[u].retain(|&v| keep(u, v));
        }
        for p in &mut self.pred {
            p.clear();
        }
        for (u, vs) in self.succ.iter().enumerate() {
            for &v in vs {
                self.pred[v].push(u);
            }
        }
    }

    /// Mirrors the graph into petgraph; node `i` is element `i`.
    pub(crate) fn to_digraph(&self) -> DiGraph<(), ()> {
        let mut g: DiGraph<(), ()> = DiGraph::with_capacity(self.len(), self.edge_count());
        for _ in 0..self.len() {
            g.add_node(());
        }
        for (u, vs) in self.succ.iter().enumerate() {
            for &v in vs {
                g.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
            }
        }
        g
    }
}
