//! Random parameter samplers for tuning experiments.
//!
//! Every sampler has a fixed configuration, checked at construction, and
//! draws a fresh value each time [`Sampler::sample`] is called with a
//! caller-supplied RNG. Samplers keep no state between draws, so a stream can
//! be restarted simply by sampling again from a re-seeded RNG.
//!
//! # Architecture
//!
//! ```text
//! SearchSpace (YAML)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  TrialGenerator  │
//! │                  │
//! │  - seed          │
//! │  - index         │
//! │  - composite ────┼──► RandomInt / RandomFloat / RandomChoice /
//! └────────┬─────────┘    RandomWeights / nested RandomComposite
//!          │
//!          ▼
//!    Trial { index, params }
//! ```
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use sample_generator::{RandomComposite, RandomFloat, RandomWeights, Sampler};
//!
//! let composite = RandomComposite::from_pairs([
//!     ("alphas", RandomWeights::new(3).unwrap().into()),
//!     ("threshold", RandomFloat::range(0.0, 1.0).unwrap().into()),
//! ])
//! .unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let params = composite.sample(&mut rng);
//! assert_eq!(params.len(), 2);
//! ```
//!
//! # Samplers
//!
//! - `int` - Uniform integers in a half-open range
//! - `float` - Uniform floats in a half-open range
//! - `choice` - Uniform selection from a fixed list
//! - `weights` - Weight vectors, uniform over the probability simplex
//! - `composite` - Named sub-samplers sampled together

pub mod error;
pub mod generator;
pub mod sampler;
pub mod samplers;

// Re-exports for convenience
pub use error::ConfigError;
pub use generator::{resolve_seed, GeneratorError, Trial, TrialGenerator, TrialIterator};
pub use sampler::{Sampler, Samples};
pub use samplers::{
    build_composite, build_sampler, AnySampler, RandomChoice, RandomComposite, RandomFloat, RandomInt,
    RandomWeights,
};
