//! FlatSSU library entry points.
//!
//! This crate loads the campus node and edge sources into an in-memory graph
//! and computes shortest or most convenient routes between nodes. Higher-level
//! consumers (the CLI and its host adapter) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod config;
pub mod cost;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod path;
pub mod routing;

pub use config::DataSources;
pub use cost::{edge_cost, RoutingMode, CONVENIENCE_PENALTY, MAX_CONVENIENCE};
pub use dataset::{
    load_edge_records, load_edge_records_from_reader, load_graph, load_nodes,
    load_nodes_from_reader, try_load_graph,
};
pub use error::{Error, Result};
pub use graph::{build_graph, Edge, EdgeRecord, Graph, LoadStats, Node, NodeIndex};
pub use path::{path_cost, shortest_path};
pub use routing::{PathEngine, RoutePlan};
