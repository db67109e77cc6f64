//! Uniform selection from a fixed list of values.

use crate::error::ConfigError;
use crate::sampler::Sampler;
use rand::Rng;

/// Picks one of its choices uniformly at random, by index.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomChoice<T> {
    choices: Vec<T>,
}

impl<T: Clone> RandomChoice<T> {
    /// Create a choice sampler. The list must not be empty.
    pub fn new(choices: Vec<T>) -> Result<Self, ConfigError> {
        if choices.is_empty() {
            return Err(ConfigError::EmptyChoices);
        }
        Ok(Self { choices })
    }

    /// The values this sampler selects from.
    pub fn choices(&self) -> &[T] {
        &self.choices
    }

    /// Index of the next choice.
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.random_range(0..self.choices.len())
    }
}

impl<T: Clone> Sampler for RandomChoice<T> {
    type Output = T;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.choices[self.sample_index(rng)].clone()
    }
}
