mod common;

use shortpath_lib::{
    compute_shortest_paths, project, result_string, Algorithm, DistanceMap, DistanceSummary,
    PathResult, DEFAULT_TARGETS, UNREACHED_DISTANCE,
};

use common::sample_graph;

fn fixture_result() -> PathResult {
    let graph = sample_graph();
    PathResult {
        algorithm: Algorithm::DijkstraOptimized,
        source: 1,
        distances: compute_shortest_paths(&graph, 1, Algorithm::DijkstraOptimized),
    }
}

#[test]
fn project_fills_gaps_with_sentinel() {
    let distances = DistanceMap::from([(1, 0), (3, 2)]);
    assert_eq!(
        project(&distances, &[3, 99, 1]),
        vec![2, UNREACHED_DISTANCE, 0]
    );
}

#[test]
fn project_keeps_caller_order_and_duplicates() {
    let distances = DistanceMap::from([(5, 9)]);
    assert_eq!(project(&distances, &[5, 5, 4]), vec![9, 9, UNREACHED_DISTANCE]);
}

#[test]
fn result_string_is_comma_joined_without_spaces() {
    let distances = DistanceMap::from([(7, 8), (37, 0)]);
    assert_eq!(result_string(&distances, &[7, 37, 59]), "8,0,1000000");
    assert_eq!(result_string(&distances, &[]), "");
}

#[test]
fn default_targets_are_stable() {
    assert_eq!(
        DEFAULT_TARGETS,
        [7, 37, 59, 82, 99, 115, 133, 165, 188, 197]
    );
    assert_eq!(UNREACHED_DISTANCE, 1_000_000);
}

#[test]
fn summary_marks_reached_targets() {
    let summary = DistanceSummary::from_result(&fixture_result(), &[7, 8, 1]);

    assert_eq!(summary.algorithm, Algorithm::DijkstraOptimized);
    assert_eq!(summary.source, 1);
    let flags: Vec<_> = summary
        .targets
        .iter()
        .map(|t| (t.node, t.distance, t.reached))
        .collect();
    assert_eq!(
        flags,
        vec![(7, 8, true), (8, UNREACHED_DISTANCE, false), (1, 0, true)]
    );
    assert_eq!(summary.to_result_string(), "8,1000000,0");
}

#[test]
fn summary_serializes_with_canonical_algorithm_name() {
    let summary = DistanceSummary::from_result(&fixture_result(), &[7]);
    let value = serde_json::to_value(&summary).expect("serialize summary");

    assert_eq!(value["algorithm"], "dijkstra-optimized");
    assert_eq!(value["source"], 1);
    assert_eq!(value["targets"][0]["node"], 7);
    assert_eq!(value["targets"][0]["distance"], 8);
    assert_eq!(value["targets"][0]["reached"], true);
}

#[test]
fn path_result_serializes_distances_in_node_order() {
    let result = fixture_result();
    let json = serde_json::to_string(&result).expect("serialize result");

    assert!(
        json.contains(r#""distances":{"1":0,"2":3,"3":1,"4":4,"5":5,"6":7,"7":8}"#),
        "{json}"
    );
    assert_eq!(
        result.sorted(),
        vec![(1, 0), (2, 3), (3, 1), (4, 4), (5, 5), (6, 7), (7, 8)]
    );
}
