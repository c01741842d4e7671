#![allow(dead_code)]

use std::path::PathBuf;

use flatssu_lib::{build_graph, DataSources, EdgeRecord, Graph, Node};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_sources() -> DataSources {
    let dir = fixtures_dir();
    DataSources::new(dir.join("campus_nodes.json"), dir.join("campus_edges.csv"))
}

/// Build a graph from `(from, to, distance, convenience)` tuples over nodes
/// named in `names` order.
pub fn graph_from(names: &[&str], edges: &[(&str, &str, &str, &str)]) -> Graph {
    let nodes = names
        .iter()
        .enumerate()
        .map(|(i, name)| Node::new(*name, 0.0, i as f64))
        .collect();
    let records: Vec<EdgeRecord> = edges
        .iter()
        .enumerate()
        .map(|(i, (from, to, d, c))| EdgeRecord::new(*from, *to, *d, *c).with_row(i + 2))
        .collect();
    build_graph(nodes, &records)
}
