//! Output formatting for shortest-path results.
//!
//! Text renderings mirror the plain driver output: one `result` line per
//! algorithm between two rule lines. JSON output serialises the library
//! summary types unchanged.

use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;

use shortpath_lib::{DistanceSummary, PathResult};

const HEADER_RULE: &str = "--------------graph------------";
const FOOTER_RULE: &str = "-------------------------------";

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Render one `result <algorithm> <distances>` line per summary.
pub fn format_run_text(summaries: &[DistanceSummary]) -> String {
    let mut buffer = String::new();
    let _ = writeln!(buffer, "{HEADER_RULE}");
    for summary in summaries {
        let _ = writeln!(
            buffer,
            "result {} {}",
            summary.algorithm,
            summary.to_result_string()
        );
    }
    buffer.push_str(FOOTER_RULE);
    buffer
}

/// Render every reached node as `<node>\t<distance>` in ascending node order.
pub fn format_distances_text(result: &PathResult) -> String {
    result
        .sorted()
        .iter()
        .map(|(node, distance)| format!("{node}\t{distance}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-print any serialisable value as JSON.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortpath_lib::{Algorithm, DistanceMap};

    fn result(algorithm: Algorithm) -> PathResult {
        PathResult {
            algorithm,
            source: 1,
            distances: DistanceMap::from([(3, 2), (1, 0), (2, 5)]),
        }
    }

    #[test]
    fn run_text_frames_results_with_rules() {
        let summaries: Vec<_> = [Algorithm::DepthFirst, Algorithm::DijkstraOptimized]
            .into_iter()
            .map(|algorithm| DistanceSummary::from_result(&result(algorithm), &[2, 3, 99]))
            .collect();

        let text = format_run_text(&summaries);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                HEADER_RULE,
                "result dfs 5,2,1000000",
                "result dijkstra-optimized 5,2,1000000",
                FOOTER_RULE,
            ]
        );
    }

    #[test]
    fn distances_text_is_sorted_by_node() {
        assert_eq!(
            format_distances_text(&result(Algorithm::Dijkstra)),
            "1\t0\n2\t5\n3\t2"
        );
    }

    #[test]
    fn json_uses_canonical_algorithm_names() {
        let json = format_json(&result(Algorithm::Dijkstra)).expect("serialize");
        assert!(json.contains("\"algorithm\": \"dijkstra\""), "{json}");
    }
}
