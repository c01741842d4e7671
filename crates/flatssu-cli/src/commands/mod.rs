// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers, keeping the entry point focused on parsing and coordination.

pub mod interactive;
pub mod route;
pub mod serve;
pub mod stats;

use clap::ValueEnum;

use flatssu_lib::RoutingMode;

/// Routing mode as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ModeArg {
    /// Minimise raw distance.
    Shortest,
    /// Minimise distance plus the inconvenience penalty.
    #[default]
    Convenient,
}

impl From<ModeArg> for RoutingMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Shortest => RoutingMode::Shortest,
            ModeArg::Convenient => RoutingMode::Convenient,
        }
    }
}
