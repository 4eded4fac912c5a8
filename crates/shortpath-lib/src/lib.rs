//! shortpath library entry points.
//!
//! This crate parses a tab-separated adjacency description into a weighted
//! directed [`Graph`], runs one of three single-source shortest-path
//! algorithms over it, and projects the resulting distances onto a list of
//! target nodes. The CLI should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod graph;
pub mod heap;
pub mod output;
pub mod path;
pub mod routing;

pub use dataset::{load_graph, resolve_input_path};
pub use error::{Error, Result};
pub use graph::{parse_graph, Edge, Graph, NodeId, Weight};
pub use heap::MinHeap;
pub use output::{
    project, result_string, DistanceSummary, TargetDistance, DEFAULT_TARGETS, UNREACHED_DISTANCE,
};
pub use path::{Distance, DistanceMap};
pub use routing::{
    compute_shortest_paths, select_strategy, Algorithm, PathResult, PathStrategy, ShortestPaths,
};
