//! Location of the node and edge sources.
//!
//! # Environment Variables
//!
//! - `FLATSSU_NODES_PATH`: node source (default: `flatssu_nodes.json`)
//! - `FLATSSU_EDGES_PATH`: edge source (default: `node_connect.csv`)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default file name of the node source.
pub const DEFAULT_NODES_FILE: &str = "flatssu_nodes.json";

/// Default file name of the edge source.
pub const DEFAULT_EDGES_FILE: &str = "node_connect.csv";

/// Environment variable overriding the node source path.
pub const NODES_PATH_ENV: &str = "FLATSSU_NODES_PATH";

/// Environment variable overriding the edge source path.
pub const EDGES_PATH_ENV: &str = "FLATSSU_EDGES_PATH";

/// Paths of the two files a graph is loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSources {
    pub nodes: PathBuf,
    pub edges: PathBuf,
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            nodes: PathBuf::from(DEFAULT_NODES_FILE),
            edges: PathBuf::from(DEFAULT_EDGES_FILE),
        }
    }
}

impl DataSources {
    pub fn new(nodes: impl Into<PathBuf>, edges: impl Into<PathBuf>) -> Self {
        Self {
            nodes: nodes.into(),
            edges: edges.into(),
        }
    }

    /// Default file names resolved under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            nodes: dir.join(DEFAULT_NODES_FILE),
            edges: dir.join(DEFAULT_EDGES_FILE),
        }
    }

    /// Replace each path whose environment variable is set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(nodes) = std::env::var_os(NODES_PATH_ENV) {
            self.nodes = PathBuf::from(nodes);
        }
        if let Some(edges) = std::env::var_os(EDGES_PATH_ENV) {
            self.edges = PathBuf::from(edges);
        }
        self
    }
}
