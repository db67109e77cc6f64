//! Tuning Library
//!
//! Random parameter sampling for (hyper-)parameter tuning experiments.
//!
//! # Features
//!
//! - Leaf samplers: uniform integers, uniform floats, discrete choices and
//!   Dirichlet weight vectors
//! - Composite samplers: named parameters sampled together, nestable
//! - Search spaces described in YAML
//! - Reproducible trial streams: the same seed yields the same trials, and a
//!   stream can be resumed from any index
//!
//! # Sampler Crates
//!
//! - `sample_core` - Sampled values, sampler configuration, search spaces
//! - `sample_generator` - Sampler implementations and the trial generator
//!
//! # CLI Usage
//!
//! ```bash
//! # Draw 20 trials as JSON lines
//! tuning sample --space space.yaml --count 20 --seed 42
//!
//! # Resume the same stream at trial 20
//! tuning sample --space space.yaml --count 20 --seed 42 --start-index 20
//!
//! # Check a search space without sampling
//! tuning validate --space space.yaml
//! ```

use clap::{Args, ValueEnum};
use std::path::PathBuf;

pub mod sample;

pub use sample::{run_sample, run_validate};

// Re-export sampler crates for convenience
pub use sample_core as types;
pub use sample_generator as samplers;

/// Search space location, shared by every command.
#[derive(Args, Clone, Debug)]
pub struct SpaceArgs {
    /// Path to search space YAML file
    #[arg(long, short = 's', env = "TUNING_SPACE")]
    pub space: PathBuf,
}

/// Arguments for drawing trials.
#[derive(Args, Clone, Debug)]
pub struct SampleArgs {
    #[command(flatten)]
    pub space: SpaceArgs,

    /// Number of trials to draw
    #[arg(long, short = 'n', default_value = "10")]
    pub count: u64,

    /// Random seed (same seed = same trials). Defaults to the search space seed,
    /// then to a random seed
    #[arg(long, env = "TUNING_SEED")]
    pub seed: Option<u64>,

    /// Index of the first trial, to resume an earlier stream
    #[arg(long, default_value = "0")]
    pub start_index: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// How trials are written to stdout.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// A single YAML sequence
    Yaml,
}
