//! FlatSSU CLI library.
//!
//! This crate provides the subcommand handlers, output formatting and logging
//! setup behind the `flatssu` binary, including the JSON-lines host adapter.

pub mod commands;
pub mod logging;
pub mod output;
