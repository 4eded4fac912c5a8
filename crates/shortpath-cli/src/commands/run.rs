//! Run command handler: project every selected algorithm onto the targets.

use anyhow::{Context, Result};

use shortpath_lib::{
    compute_shortest_paths, Algorithm, DistanceSummary, Graph, NodeId, PathResult,
};

use shortpath_cli::output::{format_json, format_run_text, OutputFormat};

/// Arguments for the run command.
#[derive(Debug, Clone)]
pub struct RunCommandArgs {
    /// Source node for every algorithm.
    pub source: NodeId,
    /// Algorithms to run, in order.
    pub algorithms: Vec<Algorithm>,
    /// Nodes whose distances are reported.
    pub targets: Vec<NodeId>,
}

/// Handle the run subcommand.
pub fn handle_run_command(graph: &Graph, args: &RunCommandArgs, format: OutputFormat) -> Result<()> {
    let summaries: Vec<DistanceSummary> = args
        .algorithms
        .iter()
        .map(|&algorithm| {
            let result = PathResult {
                algorithm,
                source: args.source,
                distances: compute_shortest_paths(graph, args.source, algorithm),
            };
            DistanceSummary::from_result(&result, &args.targets)
        })
        .collect();

    match format {
        OutputFormat::Text => println!("{}", format_run_text(&summaries)),
        OutputFormat::Json => {
            let json = format_json(&summaries).context("failed to serialise run results")?;
            println!("{json}");
        }
    }

    Ok(())
}
