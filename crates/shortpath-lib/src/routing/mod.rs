//! Algorithm selection and the shortest-path engine.
//!
//! This module provides:
//! - [`Algorithm`] - Supported shortest-path algorithms (DFS, naive and heap Dijkstra)
//! - [`PathResult`] - Distances produced by a single run
//! - [`compute_shortest_paths`] - Main entry point for running one algorithm
//! - [`ShortestPaths`] - Graph plus last result, with target projection
//!
//! # Strategy Pattern
//!
//! Each algorithm is wrapped in its own [`PathStrategy`] implementation and
//! [`select_strategy`] maps an [`Algorithm`] onto it, so the orchestration
//! below never matches on the algorithm itself.
//!
//! # Example
//!
//! ```
//! use shortpath_lib::{compute_shortest_paths, parse_graph, Algorithm};
//!
//! let graph = parse_graph("1\t2,5\t3,2\n2\t3,1\n3\n")?;
//! let distances = compute_shortest_paths(&graph, 1, Algorithm::DijkstraOptimized);
//! assert_eq!(distances[&3], 2);
//! # Ok::<(), shortpath_lib::Error>(())
//! ```

mod planner;

pub use planner::{
    select_strategy, DepthFirstStrategy, DijkstraOptimizedStrategy, DijkstraStrategy,
    PathStrategy,
};

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::output::{result_string, DEFAULT_TARGETS};
use crate::path::{Distance, DistanceMap};

/// Supported shortest-path algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum Algorithm {
    /// Recursive depth-first search with backtracking.
    #[serde(rename = "dfs")]
    DepthFirst,
    /// Dijkstra over a vector re-sorted on every extraction.
    #[serde(rename = "dijkstra")]
    Dijkstra,
    /// Dijkstra over a binary min-heap with lazy deletion.
    #[default]
    #[serde(rename = "dijkstra-optimized")]
    DijkstraOptimized,
}

impl Algorithm {
    /// Every algorithm, in the order the CLI runs them by default.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::DepthFirst,
        Algorithm::Dijkstra,
        Algorithm::DijkstraOptimized,
    ];

    /// Canonical name used on the command line and in output.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::DijkstraOptimized => "dijkstra-optimized",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            "dijkstra" | "dijkstra-naive" => Ok(Algorithm::Dijkstra),
            "dijkstra-optimized" | "dijkstra-heap" => Ok(Algorithm::DijkstraOptimized),
            other => Err(Error::UnsupportedAlgorithm {
                name: other.to_string(),
            }),
        }
    }
}

/// Distances computed by one algorithm run from one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub algorithm: Algorithm,
    pub source: NodeId,
    #[serde(serialize_with = "serialize_sorted")]
    pub distances: DistanceMap,
}

impl PathResult {
    /// Reached nodes and their distances in ascending node order.
    pub fn sorted(&self) -> Vec<(NodeId, Distance)> {
        let mut entries: Vec<_> = self.distances.iter().map(|(&n, &d)| (n, d)).collect();
        entries.sort_unstable_by_key(|&(node, _)| node);
        entries
    }
}

fn serialize_sorted<S: Serializer>(
    distances: &DistanceMap,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let ordered: BTreeMap<_, _> = distances.iter().collect();
    ordered.serialize(serializer)
}

/// Run `algorithm` from `source` and return a freshly allocated distance map.
pub fn compute_shortest_paths(graph: &Graph, source: NodeId, algorithm: Algorithm) -> DistanceMap {
    let strategy = select_strategy(algorithm);
    let distances = strategy.shortest_paths(graph, source);
    debug!(
        algorithm = %strategy.algorithm(),
        source,
        reached = distances.len(),
        "computed shortest paths"
    );
    distances
}

/// Graph paired with the result of its most recent query.
///
/// Every query computes a new map; only the latest one is retained so that
/// [`ShortestPaths::result_string`] has something to project.
#[derive(Debug, Clone, Default)]
pub struct ShortestPaths {
    graph: Graph,
    last: Option<PathResult>,
}

impl ShortestPaths {
    pub fn new(graph: Graph) -> Self {
        Self { graph, last: None }
    }

    /// Parse `input` and wrap the resulting graph.
    pub fn parse(input: &str) -> Result<Self> {
        Ok(Self::new(input.parse()?))
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Run `algorithm` from `source`, replacing the previous result.
    pub fn compute_shortest_paths(&mut self, source: NodeId, algorithm: Algorithm) -> &DistanceMap {
        let distances = compute_shortest_paths(&self.graph, source, algorithm);
        let result = self.last.insert(PathResult {
            algorithm,
            source,
            distances,
        });
        &result.distances
    }

    /// Same as [`ShortestPaths::compute_shortest_paths`] with the algorithm
    /// given by name. Unknown names leave the previous result untouched.
    pub fn compute_named(&mut self, source: NodeId, algorithm: &str) -> Result<&DistanceMap> {
        let algorithm = algorithm.parse::<Algorithm>()?;
        Ok(self.compute_shortest_paths(source, algorithm))
    }

    /// Result of the most recent query, if any.
    pub fn last_result(&self) -> Option<&PathResult> {
        self.last.as_ref()
    }

    /// Comma-separated distances of `targets` (or [`DEFAULT_TARGETS`]) in the
    /// most recent result. Before any query every target is unreached.
    pub fn result_string(&self, targets: Option<&[NodeId]>) -> String {
        let targets = targets.unwrap_or(&DEFAULT_TARGETS);
        match &self.last {
            Some(result) => result_string(&result.distances, targets),
            None => result_string(&DistanceMap::new(), targets),
        }
    }
}
