use anyhow::Result;
use clap::{Parser, Subcommand};

use wayfarer_cli::commands::hints::{handle_hints, HintsCommandArgs};
use wayfarer_cli::commands::route::{handle_route, RouteCommandArgs};
use wayfarer_cli::logging::{init_tracing, LogFormat};

#[derive(Parser, Debug)]
#[command(author, version, about = "Least-cost routing and turn instruction utilities")]
struct Cli {
    /// Log output format written to stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    /// Log filter directive; overrides `RUST_LOG`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Turn a backtracked path of junction descriptors into spoken instructions.
    Hints(HintsCommandArgs),
    /// Compute the least-cost route between two nodes of a graph file.
    Route(RouteCommandArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format, cli.log_level.as_deref())?;

    let rendered = match cli.command {
        Command::Hints(args) => handle_hints(&args)?,
        Command::Route(args) => handle_route(&args)?,
    };
    print!("{rendered}");
    Ok(())
}
