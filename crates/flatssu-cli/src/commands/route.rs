//! Route command handler for computing paths between campus locations.

use std::io::Write;

use anyhow::{Context, Result};

use flatssu_lib::PathEngine;

use super::ModeArg;
use crate::output::{render_json, render_route_text, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting node, as an index or a name.
    pub from: String,
    /// Destination node, as an index or a name.
    pub to: String,
    /// Cost policy.
    pub mode: ModeArg,
    /// Output format.
    pub format: OutputFormat,
}

/// Handle the route subcommand against an already loaded engine.
pub fn handle_route_command<W: Write>(
    engine: &PathEngine,
    args: &RouteCommandArgs,
    out: &mut W,
) -> Result<()> {
    let start = engine
        .resolve(&args.from)
        .with_context(|| format!("invalid start node '{}'", args.from))?;
    let goal = engine
        .resolve(&args.to)
        .with_context(|| format!("invalid destination node '{}'", args.to))?;

    let plan = engine.find_route(start, goal, args.mode.into())?;

    let rendered = match args.format {
        OutputFormat::Text => {
            let graph = engine.snapshot();
            render_route_text(
                &plan,
                graph.node_name(start).unwrap_or("<unknown>"),
                graph.node_name(goal).unwrap_or("<unknown>"),
            )
        }
        OutputFormat::Json => render_json(&plan)?,
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}
