//! Output formatting for routes and load statistics.

use clap::ValueEnum;
use serde::Serialize;

use flatssu_lib::{LoadStats, RoutePlan};

/// Separator placed between node names of a rendered path.
pub const PATH_SEPARATOR: &str = " -> ";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Join node names with [`PATH_SEPARATOR`].
pub fn format_path(names: &[String]) -> String {
    names.join(PATH_SEPARATOR)
}

/// Render a route plan in text format.
pub fn render_route_text(plan: &RoutePlan, start_name: &str, goal_name: &str) -> String {
    if !plan.is_found() {
        return format!(
            "No {} route between {} and {}.",
            plan.mode, start_name, goal_name
        );
    }

    let mut lines = vec![
        format!("Route ({}): {}", plan.mode, format_path(&plan.names)),
        format!("Hops: {}", plan.hop_count()),
    ];
    if let Some(cost) = plan.cost {
        lines.push(format!("Cost: {cost}"));
    }
    lines.join("\n")
}

/// Render load statistics in text format.
pub fn render_stats_text(stats: &LoadStats) -> String {
    format!(
        "nodes: {}\nedges: {}\nrejected rows: {}\nduplicate names: {}",
        stats.nodes, stats.edges, stats.rejected_rows, stats.duplicate_names
    )
}

/// Render any serializable value as pretty JSON.
pub fn render_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
