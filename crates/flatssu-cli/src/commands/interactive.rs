//! Diagnostic prompt: reads a start and end index and prints the convenient
//! route as node names.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

use flatssu_lib::{NodeIndex, PathEngine};

use crate::output::format_path;

/// Prompt for two indices on `input` and print the convenient route to `out`.
///
/// Nothing is printed after the prompts when the destination is unreachable.
/// Indices may be given on one line or on separate lines.
pub fn handle_interactive<R: BufRead, W: Write>(
    engine: &PathEngine,
    input: R,
    out: &mut W,
) -> Result<()> {
    let graph = engine.snapshot();
    if graph.is_empty() {
        bail!("graph is empty; check the node and edge sources");
    }

    let mut tokens = Tokens::new(input);

    write!(out, "start idx : ")?;
    out.flush()?;
    let start = tokens.next_index().context("failed to read start index")?;

    write!(out, "end idx : ")?;
    out.flush()?;
    let goal = tokens.next_index().context("failed to read end index")?;

    let path = engine.find_convenient(start, goal)?;
    if !path.is_empty() {
        let names: Vec<String> = path
            .iter()
            .filter_map(|&index| graph.node_name(index))
            .map(str::to_string)
            .collect();
        writeln!(out, "{}", format_path(&names))?;
    }
    Ok(())
}

/// Whitespace separated tokens pulled lazily from a line reader.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn next_index(&mut self) -> Result<NodeIndex> {
        let Some(token) = self.next_token()? else {
            bail!("unexpected end of input");
        };
        token
            .parse::<NodeIndex>()
            .with_context(|| format!("'{token}' is not a valid node index"))
    }
}
