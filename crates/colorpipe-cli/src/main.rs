//! colorpipe - LUT inspection CLI
//!
//! Reads LUT files the way the color pipeline ingests them and reports
//! what the pipeline would see.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "colorpipe")]
#[command(author, version, about = "LUT inspection for color transform pipelines")]
#[command(long_about = "
Inspect LUT files the way the color pipeline will ingest them.

Examples:
  colorpipe info grade.cube             # Show the LUT node a read produces
  colorpipe info grade.cube -v          # Include black/white grid corners
  colorpipe info grade.cube -n tetrahedral
  colorpipe formats                     # List registered LUT formats
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Display LUT node information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// List registered LUT formats
    Formats,
}

#[derive(Args)]
struct InfoArgs {
    /// LUT file to read
    input: PathBuf,

    /// Interpolation name to carry on the node
    #[arg(short = 'n', long, default_value = "linear")]
    interpolation: String,

    /// Request the inverse transform (formats without inverse support
    /// warn and return the forward transform)
    #[arg(long)]
    inverse: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Formats => commands::formats::run(),
    }
}
