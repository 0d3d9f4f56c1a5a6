//! # Command Line Interface
//!
//! Provides the `generate` and `check` commands for the pool configuration
//! generator.

pub mod generate;
pub mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "poolforge")]
#[command(about = "Reverse-proxy pool configuration generator")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the input table and write the pool configuration JSON
    Generate {
        /// Input file with one 'fqdn port' record per line
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output JSON file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate the input table without writing any output
    Check {
        /// Input file with one 'fqdn port' record per line
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

/// Run CLI commands
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load .env file if it exists (optional - won't fail if missing).
    // Must happen before any config is read from the environment.
    if let Err(e) = dotenvy::dotenv() {
        if !e.to_string().contains("not found") {
            eprintln!("Warning: Error loading .env file: {}", e);
        }
    }

    initialise_logging(cli.verbose)?;

    let mut config = AppConfig::from_env();

    match cli.command {
        Commands::Generate { input, output } => {
            if let Some(path) = input {
                config.generator.input_file = path;
            }
            if let Some(path) = output {
                config.generator.output_file = path;
            }
        }
        Commands::Check { input } => {
            if let Some(path) = input {
                config.generator.input_file = path;
            }
            config.generator.check_only = true;
        }
    }

    config.validate()?;
    generate::run(&config)
}

fn initialise_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", default_level);
    }

    if tracing::subscriber::set_global_default(
        FmtSubscriber::builder().with_env_filter(EnvFilter::from_default_env()).finish(),
    )
    .is_err()
    {
        // Subscriber already set elsewhere (e.g. integration tests); ignore.
    }
    Ok(())
}
