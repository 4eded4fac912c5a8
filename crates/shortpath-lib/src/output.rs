use serde::Serialize;

use crate::graph::NodeId;
use crate::path::{Distance, DistanceMap};
use crate::routing::{Algorithm, PathResult};

/// Placeholder distance reported for nodes no path reached.
pub const UNREACHED_DISTANCE: Distance = 1_000_000;

/// Target nodes reported when the caller does not supply its own list.
pub const DEFAULT_TARGETS: [NodeId; 10] = [7, 37, 59, 82, 99, 115, 133, 165, 188, 197];

/// Distances of `targets`, in order, with [`UNREACHED_DISTANCE`] for gaps.
pub fn project(distances: &DistanceMap, targets: &[NodeId]) -> Vec<Distance> {
    targets
        .iter()
        .map(|node| distances.get(node).copied().unwrap_or(UNREACHED_DISTANCE))
        .collect()
}

/// Render [`project`] as a comma-separated list without spaces.
pub fn result_string(distances: &DistanceMap, targets: &[NodeId]) -> String {
    project(distances, targets)
        .iter()
        .map(Distance::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Projected distance for a single target.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TargetDistance {
    pub node: NodeId,
    pub distance: Distance,
    pub reached: bool,
}

/// Structured projection of a [`PathResult`] that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DistanceSummary {
    pub algorithm: Algorithm,
    pub source: NodeId,
    pub targets: Vec<TargetDistance>,
}

impl DistanceSummary {
    /// Project `result` onto `targets`.
    pub fn from_result(result: &PathResult, targets: &[NodeId]) -> Self {
        let targets = targets
            .iter()
            .map(|&node| match result.distances.get(&node) {
                Some(&distance) => TargetDistance {
                    node,
                    distance,
                    reached: true,
                },
                None => TargetDistance {
                    node,
                    distance: UNREACHED_DISTANCE,
                    reached: false,
                },
            })
            .collect();

        Self {
            algorithm: result.algorithm,
            source: result.source,
            targets,
        }
    }

    /// Same rendering as [`result_string`].
    pub fn to_result_string(&self) -> String {
        self.targets
            .iter()
            .map(|target| target.distance.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}
