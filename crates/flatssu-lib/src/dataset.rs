//! Readers for the node (JSON) and edge (CSV) sources.
//!
//! The node source is a JSON array of `{ "name", "lat", "lng" }` objects whose
//! order defines node indices. The edge source is a comma-separated table with
//! a header row followed by `fromName, toName, distance, convenience` rows.

use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, error, info, warn};

use crate::config::DataSources;
use crate::error::{Error, Result};
use crate::graph::{build_graph, EdgeRecord, Graph, Node};

/// Load node records from a JSON file.
pub fn load_nodes(path: &Path) -> Result<Vec<Node>> {
    if !path.exists() {
        return Err(Error::NodeSourceMissing {
            path: path.to_path_buf(),
        });
    }
    let file = fs::File::open(path)?;
    let nodes = load_nodes_from_reader(BufReader::new(file))?;
    debug!(path = %path.display(), count = nodes.len(), "loaded node source");
    Ok(nodes)
}

/// Load node records from any JSON reader.
pub fn load_nodes_from_reader<R: Read>(reader: R) -> Result<Vec<Node>> {
    serde_json::from_reader(reader).map_err(|err| Error::NodeSource {
        message: err.to_string(),
    })
}

/// Load raw edge rows from a CSV file.
pub fn load_edge_records(path: &Path) -> Result<Vec<EdgeRecord>> {
    if !path.exists() {
        return Err(Error::EdgeSourceMissing {
            path: path.to_path_buf(),
        });
    }
    let file = fs::File::open(path)?;
    let records = load_edge_records_from_reader(file)?;
    debug!(path = %path.display(), count = records.len(), "loaded edge source");
    Ok(records)
}

/// Load raw edge rows from any CSV reader. The first row is always treated as
/// a header. Rows are not validated here; see [`build_graph`].
pub fn load_edge_records_from_reader<R: Read>(reader: R) -> Result<Vec<EdgeRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    csv_reader.headers().map_err(|err| Error::EdgeSource {
        message: format!("failed to read header row: {err}"),
    })?;

    let mut records = Vec::new();
    let mut last_row: usize = 1; // header is line 1
    for result in csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                let row = err
                    .position()
                    .map_or(last_row + 1, |pos| pos.line() as usize);
                last_row = row;
                // An unreadable row is kept as an empty record so that
                // `build_graph` counts it as rejected.
                warn!(row, error = %err, "unreadable edge row");
                records.push(EdgeRecord::default().with_row(row));
                continue;
            }
        };

        // Blank lines are skipped by the reader, so the physical line number
        // comes from the record position rather than a running count.
        let row = record
            .position()
            .map_or(last_row + 1, |pos| pos.line() as usize);
        last_row = row;
        let field = |i: usize| record.get(i).unwrap_or_default().to_string();
        records.push(EdgeRecord::new(field(0), field(1), field(2), field(3)).with_row(row));
    }

    Ok(records)
}

/// Load both sources and build a graph, propagating source-level failures.
pub fn try_load_graph(sources: &DataSources) -> Result<Graph> {
    let nodes = load_nodes(&sources.nodes)?;
    let records = load_edge_records(&sources.edges)?;
    Ok(build_graph(nodes, &records))
}

/// Load both sources and build a graph.
///
/// A missing or unreadable source is logged and yields an empty graph, so
/// later queries report "no route" instead of failing.
pub fn load_graph(sources: &DataSources) -> Graph {
    match try_load_graph(sources) {
        Ok(graph) => {
            let stats = graph.stats();
            info!(
                nodes = stats.nodes,
                edges = stats.edges,
                rejected = stats.rejected_rows,
                "graph loaded"
            );
            graph
        }
        Err(err) => {
            error!(
                nodes = %sources.nodes.display(),
                edges = %sources.edges.display(),
                error = %err,
                "failed to load graph; continuing with an empty graph"
            );
            Graph::default()
        }
    }
}
