use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cost::MAX_CONVENIENCE;

/// Stable 0-based node identifier, assigned in source order.
pub type NodeIndex = usize;

/// Named campus location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    /// Latitude in decimal degrees. Display only, never used for routing.
    pub lat: f64,
    /// Longitude in decimal degrees. Display only, never used for routing.
    pub lng: f64,
}

impl Node {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
        }
    }
}

/// Adjacency entry. Every accepted connection is stored once per endpoint
/// with identical weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: NodeIndex,
    pub distance: u32,
    /// Always within `0..=MAX_CONVENIENCE`.
    pub convenience: u16,
}

impl Edge {
    /// Create an edge, coercing `convenience` into `0..=MAX_CONVENIENCE`.
    pub fn new(target: NodeIndex, distance: u32, convenience: i64) -> Self {
        Self {
            target,
            distance,
            convenience: convenience.clamp(0, MAX_CONVENIENCE) as u16,
        }
    }
}

/// Unvalidated connection row as read from the edge source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeRecord {
    /// 1-based source row (the header is row 1). Zero when not read from a file.
    pub row: usize,
    pub from: String,
    pub to: String,
    pub distance: String,
    pub convenience: String,
}

impl EdgeRecord {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        distance: impl Into<String>,
        convenience: impl Into<String>,
    ) -> Self {
        Self {
            row: 0,
            from: from.into(),
            to: to.into(),
            distance: distance.into(),
            convenience: convenience.into(),
        }
    }

    pub fn with_row(mut self, row: usize) -> Self {
        self.row = row;
        self
    }
}

/// Aggregate counts collected while building a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    pub nodes: usize,
    pub edges: usize,
    pub rejected_rows: usize,
    pub duplicate_names: usize,
}

/// Immutable campus graph: nodes, name lookup and adjacency lists.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    name_to_index: HashMap<String, NodeIndex>,
    adjacency: Vec<Vec<Edge>>,
    stats: LoadStats,
}

impl Graph {
    /// Number of nodes, including nodes without any incident edge.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of accepted undirected connections.
    pub fn edge_count(&self) -> usize {
        self.stats.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    /// Lookup a node name by index.
    pub fn node_name(&self, index: NodeIndex) -> Option<&str> {
        self.nodes.get(index).map(|node| node.name.as_str())
    }

    /// Lookup a node index by its case-sensitive name.
    pub fn index_by_name(&self, name: &str) -> Option<NodeIndex> {
        self.name_to_index.get(name).copied()
    }

    /// Return the incident edges of a node. Unknown indices have none.
    pub fn neighbours(&self, index: NodeIndex) -> &[Edge] {
        self.adjacency
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Node names most similar to `name`, best match first.
    pub fn fuzzy_node_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .name_to_index
            .keys()
            .map(|candidate| {
                let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
                (score, candidate.as_str())
            })
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }
}

const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Eq)]
enum RowRejection {
    MissingName,
    UnknownNode(String),
    InvalidDistance(String),
    InvalidConvenience(String),
}

impl fmt::Display for RowRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowRejection::MissingName => f.write_str("missing node name"),
            RowRejection::UnknownNode(name) => write!(f, "unknown node '{name}'"),
            RowRejection::InvalidDistance(value) => write!(f, "invalid distance '{value}'"),
            RowRejection::InvalidConvenience(value) => {
                write!(f, "invalid convenience '{value}'")
            }
        }
    }
}

/// Build a graph from the full node set and the full list of edge records.
///
/// Node indices follow the order of `nodes`. A repeated name keeps its index
/// but only the first occurrence is addressable by name. Records naming an
/// unknown node or carrying a malformed number are skipped and counted; they
/// never abort the build.
pub fn build_graph(nodes: Vec<Node>, records: &[EdgeRecord]) -> Graph {
    let mut stats = LoadStats {
        nodes: nodes.len(),
        ..LoadStats::default()
    };

    let mut name_to_index = HashMap::with_capacity(nodes.len());
    for (index, node) in nodes.iter().enumerate() {
        if let Some(&first) = name_to_index.get(&node.name) {
            warn!(name = %node.name, index, first, "duplicate node name");
            stats.duplicate_names += 1;
            continue;
        }
        name_to_index.insert(node.name.clone(), index);
    }

    let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); nodes.len()];
    for record in records {
        match resolve_record(&name_to_index, record) {
            Ok((from, to, distance, convenience)) => {
                adjacency[from].push(Edge::new(to, distance, convenience));
                adjacency[to].push(Edge::new(from, distance, convenience));
                stats.edges += 1;
            }
            Err(reason) => {
                warn!(
                    row = record.row,
                    from = %record.from,
                    to = %record.to,
                    %reason,
                    "skipping edge row"
                );
                stats.rejected_rows += 1;
            }
        }
    }

    debug!(
        nodes = stats.nodes,
        edges = stats.edges,
        rejected = stats.rejected_rows,
        "built graph"
    );

    Graph {
        nodes,
        name_to_index,
        adjacency,
        stats,
    }
}

fn resolve_record(
    name_to_index: &HashMap<String, NodeIndex>,
    record: &EdgeRecord,
) -> std::result::Result<(NodeIndex, NodeIndex, u32, i64), RowRejection> {
    let from_name = record.from.trim();
    let to_name = record.to.trim();
    if from_name.is_empty() || to_name.is_empty() {
        return Err(RowRejection::MissingName);
    }

    let distance = parse_distance(&record.distance)
        .ok_or_else(|| RowRejection::InvalidDistance(record.distance.clone()))?;
    let convenience = parse_convenience(&record.convenience)
        .ok_or_else(|| RowRejection::InvalidConvenience(record.convenience.clone()))?;

    let from = *name_to_index
        .get(from_name)
        .ok_or_else(|| RowRejection::UnknownNode(from_name.to_string()))?;
    let to = *name_to_index
        .get(to_name)
        .ok_or_else(|| RowRejection::UnknownNode(to_name.to_string()))?;

    Ok((from, to, distance, convenience))
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Distances are plain non-negative integers.
fn parse_distance(raw: &str) -> Option<u32> {
    let value = raw.trim();
    if !is_digits(value) {
        return None;
    }
    value.parse().ok()
}

/// Convenience scores accept a leading minus sign so that out-of-range values
/// can be clamped rather than rejected.
fn parse_convenience(raw: &str) -> Option<i64> {
    let value = raw.trim();
    let digits = value.strip_prefix('-').unwrap_or(value);
    if !is_digits(digits) {
        return None;
    }
    match value.parse::<i64>() {
        Ok(parsed) => Some(parsed),
        // Overflowing digit strings are still numbers; saturate before clamping.
        Err(_) if value.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}
