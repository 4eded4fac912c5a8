//! Distances command handler: dump every reached node for one algorithm.

use anyhow::{Context, Result};

use shortpath_lib::{compute_shortest_paths, Algorithm, Graph, NodeId, PathResult};

use shortpath_cli::output::{format_distances_text, format_json, OutputFormat};

/// Handle the distances subcommand.
pub fn handle_distances_command(
    graph: &Graph,
    source: NodeId,
    algorithm: Algorithm,
    format: OutputFormat,
) -> Result<()> {
    let result = PathResult {
        algorithm,
        source,
        distances: compute_shortest_paths(graph, source, algorithm),
    };

    match format {
        OutputFormat::Text => println!("{}", format_distances_text(&result)),
        OutputFormat::Json => {
            let json = format_json(&result).context("failed to serialise distances")?;
            println!("{json}");
        }
    }

    Ok(())
}
