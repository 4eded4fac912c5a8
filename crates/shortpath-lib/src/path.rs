use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::graph::{Graph, NodeId};
use crate::heap::MinHeap;

/// Total edge weight along a path.
pub type Distance = u64;

/// Shortest known distance per reached node, produced by one run.
pub type DistanceMap = HashMap<NodeId, Distance>;

/// Recursive depth-first search with path-local cycle avoidance.
///
/// A node is re-recorded (and re-descended) every time a strictly cheaper
/// path to it is found, and a branch is abandoned as soon as it reaches a
/// node whose recorded distance is already `<=` the branch cost. Only the
/// active path is tracked for cycle avoidance, so a node can be visited many
/// times through different paths.
///
/// With non-negative weights this converges on the shortest distances, but it
/// enumerates simple paths and is exponential in the worst case. It is a
/// baseline to compare against, not a reference implementation. Recursion
/// depth equals the longest simple path explored.
pub fn shortest_paths_dfs(graph: &Graph, source: NodeId) -> DistanceMap {
    let mut distances = DistanceMap::new();
    let mut on_path = HashSet::from([source]);
    visit(graph, source, 0, &mut on_path, &mut distances);
    distances
}

fn visit(
    graph: &Graph,
    node: NodeId,
    cost: Distance,
    on_path: &mut HashSet<NodeId>,
    distances: &mut DistanceMap,
) {
    if distances.get(&node).is_some_and(|&best| best <= cost) {
        return;
    }

    distances.insert(node, cost);

    for edge in graph.edges_of(node) {
        if on_path.insert(edge.to) {
            visit(
                graph,
                edge.to,
                cost.saturating_add(edge.weight),
                on_path,
                distances,
            );
            on_path.remove(&edge.to);
        }
    }
}

/// Dijkstra's algorithm over a plain vector that is re-sorted before every
/// extraction.
///
/// Entries are never deduplicated: a node may sit in the queue several times
/// and every stale copy is skipped once the node has been settled. Each
/// extraction costs `O(n log n)` in the queue length.
pub fn shortest_paths_dijkstra(graph: &Graph, source: NodeId) -> DistanceMap {
    let mut distances = DistanceMap::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: Vec<(Distance, NodeId)> = vec![(0, source)];

    while !queue.is_empty() {
        // Stable sort keeps insertion order among equal costs.
        queue.sort_by_key(|&(cost, _)| cost);
        let (cost, node) = queue.remove(0);

        if !visited.insert(node) {
            continue;
        }
        distances.insert(node, cost);

        for edge in graph.edges_of(node) {
            if !visited.contains(&edge.to) {
                queue.push((cost.saturating_add(edge.weight), edge.to));
            }
        }
    }

    distances
}

/// Lazy-deletion Dijkstra backed by [`MinHeap`].
///
/// Tentative distances are tracked separately from finalized ones. Outdated
/// heap entries are discarded when popped instead of being removed in place.
pub fn shortest_paths_dijkstra_optimized(graph: &Graph, source: NodeId) -> DistanceMap {
    let mut distances = DistanceMap::new();
    let mut tentative: HashMap<NodeId, Distance> = HashMap::new();
    let mut heap = MinHeap::new(by_cost);

    tentative.insert(source, 0);
    heap.push(QueueEntry { cost: 0, node: source });

    while let Some(QueueEntry { cost, node }) = heap.pop() {
        if tentative.get(&node).is_some_and(|&best| best < cost) {
            continue;
        }
        if distances.contains_key(&node) {
            continue;
        }

        distances.insert(node, cost);

        for edge in graph.edges_of(node) {
            let next_cost = cost.saturating_add(edge.weight);
            let improves = tentative
                .get(&edge.to)
                .is_none_or(|&known| next_cost < known);
            if improves {
                tentative.insert(edge.to, next_cost);
                heap.push(QueueEntry {
                    cost: next_cost,
                    node: edge.to,
                });
            }
        }
    }

    distances
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    cost: Distance,
    node: NodeId,
}

fn by_cost(a: &QueueEntry, b: &QueueEntry) -> Ordering {
    a.cost.cmp(&b.cost)
}
