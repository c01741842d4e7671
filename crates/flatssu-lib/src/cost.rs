use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::Edge;

/// Upper bound of the convenience score. Scores are clamped into
/// `0..=MAX_CONVENIENCE` when edges are built.
pub const MAX_CONVENIENCE: i64 = 600;

/// Cost added per unit of missing convenience in [`RoutingMode::Convenient`].
pub const CONVENIENCE_PENALTY: u64 = 5;

/// Cost policies supported by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingMode {
    /// Raw edge distance.
    Shortest,
    /// Distance plus a penalty for every point of convenience below the maximum.
    Convenient,
}

impl fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RoutingMode::Shortest => "shortest",
            RoutingMode::Convenient => "convenient",
        };
        f.write_str(value)
    }
}

/// Scalar routing weight of `edge` under `mode`.
///
/// Never negative: the convenience score is clamped at construction, so the
/// penalty term is at most `MAX_CONVENIENCE * CONVENIENCE_PENALTY`.
pub fn edge_cost(edge: &Edge, mode: RoutingMode) -> u64 {
    let distance = u64::from(edge.distance);
    match mode {
        RoutingMode::Shortest => distance,
        RoutingMode::Convenient => {
            let missing = MAX_CONVENIENCE as u64 - u64::from(edge.convenience);
            distance + missing * CONVENIENCE_PENALTY
        }
    }
}
