//! Route command handler for computing least-cost paths in a graph file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use wayfarer_lib::{plan_route, Graph, NodeId, RouteSummary};

use crate::output::{render, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone, Args)]
pub struct RouteCommandArgs {
    /// JSON graph file of the form `{"edges": [{"from", "to", "cost"}]}`.
    #[arg(long)]
    pub graph: PathBuf,
    /// Starting node.
    #[arg(long = "from")]
    pub from: NodeId,
    /// Destination node.
    #[arg(long = "to")]
    pub to: NodeId,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Run the route command and return the rendered output.
pub fn handle_route(args: &RouteCommandArgs) -> Result<String> {
    let graph = Graph::from_path(&args.graph)
        .with_context(|| format!("failed to load graph from {}", args.graph.display()))?;
    info!(nodes = graph.node_count(), "graph loaded");

    let result = plan_route(&graph, args.from, args.to)?;
    let summary = RouteSummary::from_result(&result);
    render(args.format, &summary, RouteSummary::render_plain)
}
