use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::{parse_graph, Graph};

/// Environment variable that overrides the graph input location.
pub const INPUT_PATH_ENV: &str = "SHORTPATH_GRAPH_INPUT";

/// Default filename looked up in the working directory.
pub const DEFAULT_INPUT_FILENAME: &str = "graph-input.txt";

/// Resolve where the graph description should be read from.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `SHORTPATH_GRAPH_INPUT` environment variable.
/// 3. `graph-input.txt` in the current working directory.
///
/// The path is returned even if nothing exists there yet; [`load_graph`]
/// reports a missing file.
pub fn resolve_input_path(target: Option<&Path>) -> PathBuf {
    if let Some(explicit) = target {
        return explicit.to_path_buf();
    }

    if let Some(env_path) = env::var_os(INPUT_PATH_ENV) {
        debug!("using graph input from {INPUT_PATH_ENV}");
        return PathBuf::from(env_path);
    }

    PathBuf::from(DEFAULT_INPUT_FILENAME)
}

/// Read and parse the graph description at `path`.
pub fn load_graph(path: &Path) -> Result<Graph> {
    if !path.is_file() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let input = fs::read_to_string(path)?;
    let graph = parse_graph(&input)?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph from {}",
        path.display()
    );
    Ok(graph)
}
