//! Stats command handler reporting what the last load produced.

use std::io::Write;

use anyhow::Result;

use flatssu_lib::LoadStats;

use crate::output::{render_json, render_stats_text, OutputFormat};

/// Print load statistics in the requested format.
pub fn handle_stats_command<W: Write>(
    stats: &LoadStats,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_stats_text(stats),
        OutputFormat::Json => render_json(stats)?,
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}
