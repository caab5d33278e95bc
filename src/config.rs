//! The JSON document the `hasse` binary reads from stdin.
//!
//! ```json
//! { "domain": [1, 2, 3, 4], "relation": "divides", "rank_rule": "longest_path" }
//! ```
//!
//! Every field is optional. An empty document means the integers 1 to 10
//! under divisibility.

use serde::{Deserialize, Serialize};

use crate::error::OrderError;
use crate::graph::RelationGraph;
use crate::logging::LogLevel;
use crate::rank::RankRule;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub domain: Vec<i64>,
    pub relation: Relation,
    pub rank_rule: RankRule,
    pub log_level: LogLevel,
}

/// A relation over integers: one of the named ones, or an explicit list
/// of related pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Divides,
    LessThanEq,
    GreaterThanEq,
    Pairs(Vec<(i64, i64)>),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            domain: (1..=10).collect(),
            relation: Relation::Divides,
            rank_rule: RankRule::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Parses a config document; blank input yields the defaults.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        if s.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_json::from_str(s)
    }

    /// Builds the relation graph over the configured domain.
    pub fn relation_graph(&self) -> Result<RelationGraph<i64>, OrderError<i64>> {
        let domain = self.domain.iter().copied();
        match &self.relation {
            Relation::Divides => Ok(RelationGraph::build(domain, |&x, &y| divides(x, y))),
            Relation::LessThanEq => Ok(RelationGraph::build(domain, |x, y| x <= y)),
            Relation::GreaterThanEq => Ok(RelationGraph::build(domain, |x, y| x >= y)),
            Relation::Pairs(pairs) => RelationGraph::from_pairs(domain, pairs.iter().copied()),
        }
    }
}

/// `x | y`. Zero divides only zero.
pub fn divides(x: i64, y: i64) -> bool {
    match y.checked_rem(x) {
        Some(r) => r == 0,
        // x == 0, or i64::MIN % -1
        None => x != 0 || y == 0,
    }
}
