use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use shortpath_lib::{load_graph, resolve_input_path, Algorithm, NodeId, DEFAULT_TARGETS};

use shortpath_cli::output::OutputFormat;

mod commands;

use commands::distances::handle_distances_command;
use commands::run::{handle_run_command, RunCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Single-source shortest paths over a weighted digraph")]
struct Cli {
    /// Graph input file. Falls back to SHORTPATH_GRAPH_INPUT, then ./graph-input.txt.
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run algorithms and report distances to the target nodes (default).
    Run(RunArgs),
    /// Print the distance to every node reached by one algorithm.
    Distances(DistancesArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Source node.
    #[arg(long, default_value_t = 1)]
    source: NodeId,

    /// Algorithm to run; repeat to run several. Defaults to all of them.
    #[arg(long = "algorithm", value_parser = parse_algorithm)]
    algorithms: Vec<Algorithm>,

    /// Comma-separated target nodes. Defaults to the built-in target list.
    #[arg(long, value_delimiter = ',')]
    targets: Vec<NodeId>,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            source: 1,
            algorithms: Vec::new(),
            targets: Vec::new(),
        }
    }
}

impl RunArgs {
    fn into_command_args(self) -> RunCommandArgs {
        RunCommandArgs {
            source: self.source,
            algorithms: if self.algorithms.is_empty() {
                Algorithm::ALL.to_vec()
            } else {
                self.algorithms
            },
            targets: if self.targets.is_empty() {
                DEFAULT_TARGETS.to_vec()
            } else {
                self.targets
            },
        }
    }
}

#[derive(Args, Debug)]
struct DistancesArgs {
    /// Source node.
    #[arg(long, default_value_t = 1)]
    source: NodeId,

    /// Algorithm to run.
    #[arg(long, value_parser = parse_algorithm, default_value = "dijkstra-optimized")]
    algorithm: Algorithm,
}

fn parse_algorithm(value: &str) -> std::result::Result<Algorithm, String> {
    value.parse::<Algorithm>().map_err(|err| err.to_string())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let input_path = resolve_input_path(cli.input.as_deref());
    let graph = load_graph(&input_path)
        .with_context(|| format!("failed to load graph from {}", input_path.display()))?;

    match cli.command.unwrap_or(Command::Run(RunArgs::default())) {
        Command::Run(args) => handle_run_command(&graph, &args.into_command_args(), cli.format),
        Command::Distances(args) => {
            handle_distances_command(&graph, args.source, args.algorithm, cli.format)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
