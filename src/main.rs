use std::io::{self, Read};

use anyhow::{Context, Result};
use hasse_order::config::Config;
use hasse_order::{logging, HasseDiagram};
use serde_json::json;
use tracing::info;

fn main() -> Result<()> {
    // Read the whole config document from stdin (blank means defaults)
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
    let config = Config::from_json(&buf).context("invalid config document")?;
    logging::init(config.log_level);

    let graph = config.relation_graph()?;
    info!(elements = graph.len(), pairs = graph.edge_count(), "built relation");

    let diagram = HasseDiagram::from_relation(graph, config.rank_rule)?;
    info!(layers = diagram.layers().len(), "partial order confirmed");

    let out = json!({
        "diagram": diagram,
        "extremal": diagram.extremal(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
