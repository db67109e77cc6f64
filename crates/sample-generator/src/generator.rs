//! Trial generator producing reproducible parameter samples.

use crate::error::ConfigError;
use crate::sampler::Sampler;
use crate::samplers::{build_composite, RandomComposite};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sample_core::{SampledValue, SchemaError, SearchSpace};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Search space could not be loaded
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Search space describes an invalid sampler
    #[error("Invalid search space: {0}")]
    Config(#[from] ConfigError),
}

/// One sampled parameter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    /// Position of this trial in its stream
    pub index: u64,
    /// Parameter name to sampled value
    pub params: BTreeMap<String, SampledValue>,
}

impl Trial {
    /// Get a sampled parameter by name.
    pub fn get(&self, name: &str) -> Option<&SampledValue> {
        self.params.get(name)
    }
}

/// Generator that produces deterministic trials from a search space.
///
/// Each trial draws from its own RNG, seeded from the base seed and the trial
/// index. Trial `n` is therefore the same whether the stream was run from the
/// start or resumed with [`TrialGenerator::with_start_index`].
#[derive(Debug, Clone)]
pub struct TrialGenerator {
    /// Root sampler covering every parameter
    sampler: RandomComposite,
    /// Base seed for the stream
    seed: u64,
    /// Index of the next trial
    index: u64,
}

impl TrialGenerator {
    /// Create a trial generator for the given search space and seed.
    pub fn new(space: &SearchSpace, seed: u64) -> Result<Self, ConfigError> {
        let sampler = build_composite(&space.parameters)?;
        tracing::debug!(
            "Built trial generator with {} parameter(s), seed {}",
            sampler.len(),
            seed
        );
        Ok(Self::from_composite(sampler, seed))
    }

    /// Create a trial generator around an existing composite sampler.
    pub fn from_composite(sampler: RandomComposite, seed: u64) -> Self {
        Self {
            sampler,
            seed,
            index: 0,
        }
    }

    /// Load a search space file and create a trial generator.
    ///
    /// The seed is taken from `seed` if given, then from the file, and
    /// otherwise drawn at random. Use [`TrialGenerator::seed`] to recover it.
    pub fn from_file<P: AsRef<Path>>(path: P, seed: Option<u64>) -> Result<Self, GeneratorError> {
        let space = SearchSpace::from_file(path)?;
        let seed = resolve_seed(seed, &space);
        Ok(Self::new(&space, seed)?)
    }

    /// Set the index of the next trial.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        self
    }

    /// Compute the RNG seed for a specific trial index.
    ///
    /// This allows jumping to any index while maintaining determinism.
    fn seed_for_index(&self, index: u64) -> u64 {
        self.seed
            .wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15))
    }

    /// Get the base seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the index of the next trial.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Get the root sampler.
    pub fn sampler(&self) -> &RandomComposite {
        &self.sampler
    }

    /// Generate the trial at `index` without moving the stream.
    pub fn trial_at(&self, index: u64) -> Trial {
        let mut rng = StdRng::seed_from_u64(self.seed_for_index(index));
        Trial {
            index,
            params: self.sampler.sample(&mut rng),
        }
    }

    /// Generate the next trial.
    pub fn next_trial(&mut self) -> Trial {
        let trial = self.trial_at(self.index);
        tracing::trace!("Generated trial {}", trial.index);
        self.index = self.index.wrapping_add(1);
        trial
    }

    /// Generate the next `count` trials.
    ///
    /// Returns an iterator that lazily generates trials.
    pub fn trials(&mut self, count: u64) -> TrialIterator<'_> {
        TrialIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Pick the seed for a run: explicit, then the search space default, then random.
pub fn resolve_seed(explicit: Option<u64>, space: &SearchSpace) -> u64 {
    explicit
        .or(space.seed)
        .unwrap_or_else(rand::random::<u64>)
}

/// Iterator that lazily generates trials.
pub struct TrialIterator<'a> {
    generator: &'a mut TrialGenerator,
    remaining: u64,
}

impl Iterator for TrialIterator<'_> {
    type Item = Trial;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_trial())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TrialIterator<'_> {}
