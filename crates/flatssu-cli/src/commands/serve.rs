//! Host adapter: exposes `initGraph`, `findShortest` and `findConvenient` as a
//! JSON-lines protocol on stdin/stdout.
//!
//! Each request is one JSON object per line:
//!
//! ```text
//! {"op":"initGraph"}
//! {"op":"findShortest","start":0,"end":2}
//! {"op":"findConvenient","start":0,"end":2}
//! ```
//!
//! Each response is one JSON object per line, e.g.
//! `{"ok":true,"path":[0,1,2]}` or `{"ok":false,"error":"..."}`.

use std::io::{BufRead, Write};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use flatssu_lib::{LoadStats, NodeIndex, PathEngine, RoutingMode};

/// Request accepted by the host adapter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum HostRequest {
    /// Load (or reload) both sources.
    InitGraph,
    /// Shortest route by distance.
    FindShortest { start: i64, end: i64 },
    /// Most convenient route.
    FindConvenient { start: i64, end: i64 },
}

/// Response emitted for each request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<LoadStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<NodeIndex>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HostResponse {
    fn loaded(stats: LoadStats) -> Self {
        Self {
            ok: true,
            stats: Some(stats),
            path: None,
            error: None,
        }
    }

    fn path(path: Vec<NodeIndex>) -> Self {
        Self {
            ok: true,
            stats: None,
            path: Some(path),
            error: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            stats: None,
            path: None,
            error: Some(message.into()),
        }
    }
}

/// Execute one request against the engine.
pub fn handle_request(engine: &PathEngine, request: &HostRequest) -> HostResponse {
    match *request {
        HostRequest::InitGraph => HostResponse::loaded(engine.init_graph()),
        HostRequest::FindShortest { start, end } => {
            find(engine, start, end, RoutingMode::Shortest)
        }
        HostRequest::FindConvenient { start, end } => {
            find(engine, start, end, RoutingMode::Convenient)
        }
    }
}

fn find(engine: &PathEngine, start: i64, end: i64, mode: RoutingMode) -> HostResponse {
    let (Some(start), Some(end)) = (to_index(start), to_index(end)) else {
        return HostResponse::error(format!(
            "node indices must be non-negative (got {start}, {end})"
        ));
    };
    match engine.find_path(start, end, mode) {
        Ok(path) => HostResponse::path(path),
        Err(err) => HostResponse::error(err.to_string()),
    }
}

fn to_index(value: i64) -> Option<NodeIndex> {
    NodeIndex::try_from(value).ok()
}

/// Parse and execute one protocol line.
pub fn handle_line(engine: &PathEngine, line: &str) -> HostResponse {
    match serde_json::from_str::<HostRequest>(line) {
        Ok(request) => {
            debug!(?request, "host request");
            handle_request(engine, &request)
        }
        Err(err) => {
            warn!(error = %err, "malformed host request");
            HostResponse::error(format!("malformed request: {err}"))
        }
    }
}

/// Serve requests from `input` until end of input, one response per line.
///
/// Lines that are not valid UTF-8 or not valid requests get an error response;
/// only I/O failures end the session.
pub fn serve<R: BufRead, W: Write>(engine: &PathEngine, mut input: R, out: &mut W) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let response = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => handle_line(engine, line.trim()),
            Err(err) => {
                warn!(error = %err, "host request is not valid UTF-8");
                HostResponse::error(format!("request is not valid UTF-8: {err}"))
            }
        };
        writeln!(out, "{}", serde_json::to_string(&response)?)?;
        out.flush()?;
    }
    Ok(())
}
