//! Pitstop CLI - Monte Carlo Pit Strategy Simulator
//!
//! This is the operational entry point for the pit strategy simulator.
//!
//! # Commands
//!
//! - `pitstop search` - Risk-adjusted search over compound pairs and pit laps
//! - `pitstop evaluate --pit-lap <L> --first <C> --second <C>` - Evaluate one strategy
//! - `pitstop compare` - Evaluate the configured strategies side by side
//! - `pitstop check` - Validate and print the resolved configuration
//!
//! # Architecture
//!
//! As the **S**ervice layer of the workspace, this crate loads configuration,
//! initialises logging and orchestrates the core, engine and optimiser layers.
//!
//! Logs are written to stderr; reports (table or JSON) to stdout.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pitstop_core::types::{Compound, Strategy1Stop};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod report;

pub use error::{CliError, Result};

use commands::search::SearchOverrides;
use config::AppConfig;
use report::OutputFormat;

/// Monte Carlo pit strategy simulator CLI
#[derive(Parser)]
#[command(name = "pitstop")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "pitstop.toml")]
    config: PathBuf,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Log level for the pitstop crates (overridden by RUST_LOG)
    #[arg(long, global = true, env = "PITSTOP_LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search compound pairs and pit laps for the best risk-adjusted strategy
    Search {
        /// Monte Carlo trials per candidate
        #[arg(short = 'n', long)]
        trials: Option<usize>,

        /// Seed shared by every candidate
        #[arg(short, long)]
        seed: Option<u64>,

        /// Lowest pit lap searched
        #[arg(long)]
        lap_min: Option<u32>,

        /// Highest pit lap searched
        #[arg(long)]
        lap_max: Option<u32>,

        /// Risk-aversion coefficient (repeat for several passes)
        #[arg(short, long = "lambda")]
        lambda: Vec<f64>,

        /// Ranked strategies reported per lambda
        #[arg(short, long)]
        top: Option<usize>,

        /// Evaluate candidates on a single thread
        #[arg(long)]
        sequential: bool,
    },

    /// Evaluate a single one-stop strategy
    Evaluate {
        /// Lap at the end of which the car pits
        #[arg(short, long)]
        pit_lap: u32,

        /// Starting compound (S, M, H or soft, medium, hard)
        #[arg(long)]
        first: Compound,

        /// Compound fitted at the stop
        #[arg(long)]
        second: Compound,

        /// Monte Carlo trials
        #[arg(short = 'n', long)]
        trials: Option<usize>,

        /// Random seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Risk-aversion coefficient used for the reported score
        #[arg(short, long, default_value_t = 0.0)]
        lambda: f64,
    },

    /// Evaluate the configured strategies side by side
    Compare {
        /// Monte Carlo trials per strategy
        #[arg(short = 'n', long)]
        trials: Option<usize>,

        /// Seed shared by every strategy
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Check configuration
    Check,
}

fn init_tracing(verbose: bool, log_level: &str) {
    let level = if verbose { "debug" } else { log_level };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("pitstop={}", level)))
        .unwrap_or_else(|_| EnvFilter::new("pitstop=info"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing
    init_tracing(cli.verbose, &cli.log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = AppConfig::load_or_default(&cli.config)?.with_env_override();
    config.validate()?;
    debug!(config = ?cli.config, "configuration validated");

    match cli.command {
        Commands::Search {
            trials,
            seed,
            lap_min,
            lap_max,
            lambda,
            top,
            sequential,
        } => commands::search::run(
            &config,
            SearchOverrides {
                trials,
                seed,
                lap_min,
                lap_max,
                lambdas: lambda,
                top,
                sequential,
            },
            cli.format,
        ),
        Commands::Evaluate {
            pit_lap,
            first,
            second,
            trials,
            seed,
            lambda,
        } => commands::evaluate::run(
            &config,
            Strategy1Stop::new(pit_lap, first, second),
            trials,
            seed,
            lambda,
            cli.format,
        ),
        Commands::Compare { trials, seed } => {
            commands::compare::run(&config, trials, seed, cli.format)
        }
        Commands::Check => commands::check::run(&config, cli.format),
    }
}
