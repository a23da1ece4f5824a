//! # pinion-cli
//!
//! Dependency analysis reporting for resolved artifact sets.
//!
//! This is the entry point for the `pinion` binary. It parses the command
//! line, sets up logging, and dispatches to the command handlers.

use clap::{Parser, Subcommand};
use pinion_core::PinionResult;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

mod commands;
mod output;

use commands::CommandContext;
use output::errors::ErrorFormatter;

/// Explain what dependency resolution did to your declared dependencies
#[derive(Parser)]
#[command(name = "pinion", version, about = "Post-resolution dependency analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report active and dropped dependency declarations
    Check {
        /// Manifest file with declared edges and the resolved set
        #[arg(short, long, default_value = "pinion.toml")]
        manifest: PathBuf,
    },
    /// Print every requirer chain leading to an artifact
    Explain {
        /// Artifact of interest, as a group:name coordinate
        artifact: String,
        /// Manifest file with declared edges and the resolved set
        #[arg(short, long, default_value = "pinion.toml")]
        manifest: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    info!("Starting pinion v{}", env!("CARGO_PKG_VERSION"));

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprint!("{}", ErrorFormatter::new().format_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn run_cli(cli: Cli) -> PinionResult<()> {
    let ctx = CommandContext::new();

    match cli.command {
        Commands::Check { manifest } => {
            info!("Checking declarations against {}", manifest.display());
            commands::check::execute(&manifest, &ctx)
        }
        Commands::Explain { artifact, manifest } => {
            info!("Explaining requirers of {}", artifact);
            commands::explain::execute(&artifact, &manifest, &ctx)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "pinion={level},pinion_core={level},pinion_analyzer={level},pinion_config={level}"
        ))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
