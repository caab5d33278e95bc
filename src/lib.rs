//! # hasse_order
//!
//! Checks that a relation over a finite set is a partial order and derives
//! what is needed to draw its Hasse diagram.
//!
//! A [`RelationGraph`] is built from a domain and a predicate. Validation
//! certifies reflexivity, antisymmetry and transitivity, or returns the first
//! counterexample. Reduction strips self-pairs and keeps only covering edges,
//! and ranking assigns each element a layer. Extremal queries work on any
//! graph in the pipeline.
//!
//! ```
//! use hasse_order::{extremal, HasseDiagram};
//!
//! let d = HasseDiagram::derive(1..=10u32, |x, y| y % x == 0).unwrap();
//! let g = d.covering().as_graph();
//! assert_eq!(extremal::smallest(g), Some(&1));
//! assert_eq!(extremal::maximal(g), vec![&6, &7, &8, &9, &10]);
//! ```
pub mod config;
mod diagram;
mod error;
pub mod extremal;
mod graph;
pub mod logging;
pub mod rank;
mod reduce;
pub mod validate;

pub use diagram::{ExtremalReport, HasseDiagram};
pub use error::{ErrorKind, OrderError};
pub use graph::RelationGraph;
pub use rank::{assign_ranks, RankRule};
pub use reduce::{reduce, CoveringGraph};
