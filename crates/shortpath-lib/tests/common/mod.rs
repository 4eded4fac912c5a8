#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;

use shortpath_lib::{load_graph, Edge, Graph, NodeId};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn sample_graph_path() -> PathBuf {
    fixtures_dir().join("sample_graph.txt")
}

pub fn sample_graph() -> Graph {
    load_graph(&sample_graph_path()).expect("load fixture sample_graph.txt")
}

/// Deterministic pseudo-random graph with cycles, parallel edges and
/// zero-weight edges. `seed` selects one member of the family.
pub fn generated_graph(seed: u64, nodes: u64, max_out_degree: u64) -> Graph {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = move |bound: u64| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) % bound
    };

    let mut adjacency: HashMap<NodeId, Vec<Edge>> = HashMap::new();
    for node in 1..=nodes {
        let degree = next(max_out_degree + 1);
        let edges = (0..degree)
            .map(|_| Edge::new(1 + next(nodes), next(12)))
            .collect();
        adjacency.insert(node, edges);
    }
    Graph::from_adjacency(adjacency)
}
