use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Numeric identifier for a graph node.
pub type NodeId = u64;

/// Non-negative weight carried by an edge.
pub type Weight = u64;

/// Directed, weighted edge within the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(to: NodeId, weight: Weight) -> Self {
        Self { to, weight }
    }
}

/// Immutable adjacency structure used by the shortest-path algorithms.
///
/// Nodes that only ever appear as edge targets have no entry of their own;
/// [`Graph::edges_of`] treats them the same as a listed node with no edges.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<NodeId, Vec<Edge>>>,
}

impl Graph {
    /// Build a graph from an already assembled adjacency map.
    pub fn from_adjacency(adjacency: HashMap<NodeId, Vec<Edge>>) -> Self {
        Self {
            adjacency: Arc::new(adjacency),
        }
    }

    /// Return the outgoing edges for a node, in input order.
    pub fn edges_of(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Alias for [`Graph::edges_of`].
    pub fn neighbours(&self, node: NodeId) -> &[Edge] {
        self.edges_of(node)
    }

    /// Whether the node had its own line in the input.
    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Number of explicitly listed nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges across all listed nodes.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Explicitly listed node identifiers in ascending order.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.adjacency.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }
}

impl FromStr for Graph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_graph(s)
    }
}

/// Parse a tab-separated adjacency description.
///
/// Each non-blank line starts with a node identifier followed by zero or more
/// `<to>,<weight>` fields. Empty fields (for example trailing tabs) are
/// ignored. Any other malformed field fails the whole parse with
/// [`Error::MalformedLine`] carrying the 1-based line number.
///
/// When the same node is listed twice, the later line replaces the earlier one.
pub fn parse_graph(input: &str) -> Result<Graph> {
    let mut adjacency: HashMap<NodeId, Vec<Edge>> = HashMap::new();

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let (node, edges) = parse_line(line, line_no)?;
        if adjacency.insert(node, edges).is_some() {
            warn!(node, line = line_no, "node listed more than once; keeping last entry");
        }
    }

    let graph = Graph::from_adjacency(adjacency);
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "parsed graph"
    );
    Ok(graph)
}

fn parse_line(line: &str, line_no: usize) -> Result<(NodeId, Vec<Edge>)> {
    let mut fields = line.split('\t');
    let node_field = fields.next().unwrap_or_default().trim();
    let node = node_field.parse::<NodeId>().map_err(|_| {
        Error::malformed(line_no, format!("invalid node identifier '{node_field}'"))
    })?;

    let edges = fields
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(|field| parse_edge(field, line_no))
        .collect::<Result<Vec<_>>>()?;

    Ok((node, edges))
}

fn parse_edge(field: &str, line_no: usize) -> Result<Edge> {
    let Some((to, weight)) = field.split_once(',') else {
        return Err(Error::malformed(
            line_no,
            format!("edge '{field}' is not of the form <to>,<weight>"),
        ));
    };

    let to = to
        .trim()
        .parse::<NodeId>()
        .map_err(|_| Error::malformed(line_no, format!("invalid edge target in '{field}'")))?;
    let weight = weight
        .trim()
        .parse::<Weight>()
        .map_err(|_| Error::malformed(line_no, format!("invalid edge weight in '{field}'")))?;

    Ok(Edge { to, weight })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tab_separated_lines() {
        let graph = parse_graph("1\t2,5\t3,2\n2\t3,1\n3\n").expect("valid graph");

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edges_of(1), &[Edge::new(2, 5), Edge::new(3, 2)]);
        assert_eq!(graph.edges_of(2), &[Edge::new(3, 1)]);
        assert!(graph.edges_of(3).is_empty());
    }

    #[test]
    fn unlisted_node_has_no_edges() {
        let graph = parse_graph("1\t2,1").expect("valid graph");
        assert!(!graph.contains(2));
        assert!(graph.edges_of(2).is_empty());
        assert!(graph.edges_of(99).is_empty());
    }

    #[test]
    fn trailing_tabs_and_crlf_are_ignored() {
        let graph = parse_graph("1\t2,5\t\t\r\n2\t\r\n").expect("valid graph");
        assert_eq!(graph.edges_of(1), &[Edge::new(2, 5)]);
        assert!(graph.contains(2));
        assert!(graph.edges_of(2).is_empty());
    }

    #[test]
    fn blank_lines_keep_line_numbers_accurate() {
        let err = parse_graph("\n1\t2,5\n\nx\t1,1\n").expect_err("bad node id");
        match err {
            Error::MalformedLine { line, .. } => assert_eq!(line, 4),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn later_line_replaces_earlier_one() {
        let graph = parse_graph("1\t2,5\n1\t3,7\n").expect("valid graph");
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edges_of(1), &[Edge::new(3, 7)]);
    }
}
