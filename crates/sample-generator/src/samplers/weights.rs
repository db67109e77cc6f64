//! Weight vectors drawn from a flat Dirichlet distribution.
//!
//! A Dirichlet sample with every concentration equal to 1 is obtained by
//! drawing independent Exp(1) (= Gamma(1, 1)) variates and dividing each by
//! their sum. The result is uniform over the probability simplex.

use crate::error::ConfigError;
use crate::sampler::Sampler;
use rand::Rng;
use rand_distr::{Distribution, Exp1};

/// Tuples of `number` positive floats summing to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomWeights {
    number: usize,
}

impl RandomWeights {
    /// Create a weights sampler producing `number` weights per sample.
    pub fn new(number: usize) -> Result<Self, ConfigError> {
        if number == 0 {
            return Err(ConfigError::ZeroWeights);
        }
        Ok(Self { number })
    }

    /// Number of weights per sample.
    pub fn number(&self) -> usize {
        self.number
    }
}

impl Sampler for RandomWeights {
    type Output = Vec<f64>;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        let mut weights = Vec::with_capacity(self.number);
        loop {
            weights.clear();
            let mut total = 0.0;
            for _ in 0..self.number {
                let draw: f64 = Exp1.sample(&mut *rng);
                total += draw;
                weights.push(draw);
            }
            // All-zero draws cannot be normalized; redraw.
            if total > 0.0 && total.is_finite() {
                for w in &mut weights {
                    *w /= total;
                }
                return weights;
            }
        }
    }
}
