//! Command-line interface for tuning
//!
//! # Usage Examples
//!
//! ## Sampling
//! ```bash
//! # Ten trials as JSON lines, seed taken from the search space file
//! tuning sample --space space.yaml
//!
//! # Fixed seed, YAML output
//! tuning sample --space space.yaml --count 5 --seed 42 --format yaml
//!
//! # Continue the seed-42 stream after the first 5 trials
//! tuning sample --space space.yaml --count 5 --seed 42 --start-index 5
//! ```
//!
//! ## Validation
//! ```bash
//! tuning validate --space space.yaml
//! ```
//!
//! ## Search Space Format
//! ```yaml
//! seed: 42
//! parameters:
//!   alphas:    { type: weights, number: 3 }
//!   threshold: { type: float, low: 0.0, high: 1.0 }
//!   depth:     { type: int, low: 10 }
//!   optimizer: { type: choice, choices: [adam, sgd] }
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use clap::{Parser, Subcommand};
use std::io::BufWriter;
use tuning::{run_sample, run_validate, SampleArgs, SpaceArgs};

#[derive(Parser)]
#[command(name = "tuning")]
#[command(about = "Random parameter sampling for tuning experiments")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw trials from a search space
    Sample(SampleArgs),

    /// Check that every sampler in a search space is valid
    Validate(SpaceArgs),
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::Sample(args) => run_sample(&args, &mut out),
        Commands::Validate(args) => run_validate(&args, &mut out),
    }
}
