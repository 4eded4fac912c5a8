//! Shortest-path strategies implementing the Strategy pattern.
//!
//! This module provides the `PathStrategy` trait and one implementation per
//! [`Algorithm`]. `compute_shortest_paths` only ever talks to the trait.

use crate::graph::{Graph, NodeId};
use crate::path::{
    shortest_paths_dfs, shortest_paths_dijkstra, shortest_paths_dijkstra_optimized, DistanceMap,
};

use super::Algorithm;

/// Trait for single-source shortest-path strategies.
pub trait PathStrategy: Send + Sync {
    /// The algorithm identifier for this strategy.
    fn algorithm(&self) -> Algorithm;

    /// Compute distances from `source` to every node the strategy reaches.
    fn shortest_paths(&self, graph: &Graph, source: NodeId) -> DistanceMap;

    /// Whether the strategy is guaranteed to return true shortest distances
    /// in `O((V + E) log V)`.
    fn is_reference(&self) -> bool {
        false
    }
}

/// Backtracking depth-first search; see [`shortest_paths_dfs`].
#[derive(Debug, Clone, Default)]
pub struct DepthFirstStrategy;

impl PathStrategy for DepthFirstStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::DepthFirst
    }

    fn shortest_paths(&self, graph: &Graph, source: NodeId) -> DistanceMap {
        shortest_paths_dfs(graph, source)
    }
}

/// Dijkstra with a re-sorted vector queue; see [`shortest_paths_dijkstra`].
#[derive(Debug, Clone, Default)]
pub struct DijkstraStrategy;

impl PathStrategy for DijkstraStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    fn shortest_paths(&self, graph: &Graph, source: NodeId) -> DistanceMap {
        shortest_paths_dijkstra(graph, source)
    }
}

/// Heap-backed Dijkstra; see [`shortest_paths_dijkstra_optimized`].
#[derive(Debug, Clone, Default)]
pub struct DijkstraOptimizedStrategy;

impl PathStrategy for DijkstraOptimizedStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::DijkstraOptimized
    }

    fn shortest_paths(&self, graph: &Graph, source: NodeId) -> DistanceMap {
        shortest_paths_dijkstra_optimized(graph, source)
    }

    fn is_reference(&self) -> bool {
        true
    }
}

/// Select the strategy that implements `algorithm`.
pub fn select_strategy(algorithm: Algorithm) -> Box<dyn PathStrategy> {
    match algorithm {
        Algorithm::DepthFirst => Box::new(DepthFirstStrategy),
        Algorithm::Dijkstra => Box::new(DijkstraStrategy),
        Algorithm::DijkstraOptimized => Box::new(DijkstraOptimizedStrategy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_strategy_matches_algorithm() {
        for algorithm in Algorithm::ALL {
            assert_eq!(select_strategy(algorithm).algorithm(), algorithm);
        }
    }

    #[test]
    fn only_heap_dijkstra_is_reference() {
        assert!(!select_strategy(Algorithm::DepthFirst).is_reference());
        assert!(!select_strategy(Algorithm::Dijkstra).is_reference());
        assert!(select_strategy(Algorithm::DijkstraOptimized).is_reference());
    }
}
