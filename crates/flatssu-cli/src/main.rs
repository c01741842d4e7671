use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use flatssu_cli::commands::interactive::handle_interactive;
use flatssu_cli::commands::route::{handle_route_command, RouteCommandArgs};
use flatssu_cli::commands::serve::serve;
use flatssu_cli::commands::stats::handle_stats_command;
use flatssu_cli::commands::ModeArg;
use flatssu_cli::logging::{init_logging, LogFormat};
use flatssu_cli::output::OutputFormat;
use flatssu_lib::{DataSources, PathEngine};

#[derive(Parser, Debug)]
#[command(author, version, about = "FlatSSU campus route engine")]
struct Cli {
    /// Directory holding flatssu_nodes.json and node_connect.csv.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Node source (JSON). Overrides --data-dir and FLATSSU_NODES_PATH.
    #[arg(long, global = true)]
    nodes: Option<PathBuf>,

    /// Edge source (CSV). Overrides --data-dir and FLATSSU_EDGES_PATH.
    #[arg(long, global = true)]
    edges: Option<PathBuf>,

    /// Log output format on stderr: text or json.
    #[arg(long, env = "LOG_FORMAT", default_value = "text", global = true)]
    log_format: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prompt for start and end indices and print the convenient route.
    Interactive,
    /// Compute a route between two nodes given by index or name.
    Route {
        /// Starting node index or name.
        #[arg(long = "from")]
        from: String,
        /// Destination node index or name.
        #[arg(long = "to")]
        to: String,
        /// Cost policy.
        #[arg(long, value_enum, default_value_t = ModeArg::Convenient)]
        mode: ModeArg,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Load both sources and report node, edge and rejected row counts.
    Stats {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Serve initGraph/findShortest/findConvenient as JSON lines on stdin/stdout.
    Serve,
}

impl Cli {
    fn sources(&self) -> DataSources {
        let mut sources = self
            .data_dir
            .as_deref()
            .map(DataSources::in_dir)
            .unwrap_or_default()
            .with_env_overrides();
        if let Some(nodes) = &self.nodes {
            sources.nodes = nodes.clone();
        }
        if let Some(edges) = &self.edges {
            sources.edges = edges.clone();
        }
        sources
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LogFormat::parse_lenient(&cli.log_format));

    let engine = PathEngine::new(cli.sources());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            engine.init_graph();
            handle_interactive(&engine, io::stdin().lock(), &mut out)
        }
        Command::Route {
            from,
            to,
            mode,
            format,
        } => {
            engine.init_graph();
            let args = RouteCommandArgs {
                from,
                to,
                mode,
                format,
            };
            handle_route_command(&engine, &args, &mut out)
        }
        Command::Stats { format } => {
            let stats = engine.init_graph();
            handle_stats_command(&stats, format, &mut out)
        }
        Command::Serve => serve(&engine, io::stdin().lock(), &mut out),
    }
}
