use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the FlatSSU library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The node source could not be found at the resolved path.
    #[error("node source not found at {path}")]
    NodeSourceMissing { path: PathBuf },

    /// The edge source could not be found at the resolved path.
    #[error("edge source not found at {path}")]
    EdgeSourceMissing { path: PathBuf },

    /// The node source was readable but did not contain valid node records.
    #[error("invalid node source: {message}")]
    NodeSource { message: String },

    /// The edge source could not be read as comma-separated rows.
    #[error("invalid edge source: {message}")]
    EdgeSource { message: String },

    /// Raised when a query references a node index outside the loaded graph.
    #[error("node index {index} is out of range (graph has {node_count} nodes)")]
    NodeIndexOutOfRange { index: usize, node_count: usize },

    /// Raised when a node name could not be found in the loaded graph.
    #[error("unknown node name: {name}{}", format_suggestions(.suggestions))]
    UnknownNode {
        name: String,
        suggestions: Vec<String>,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
