//! The sampler trait and its infinite stream adapter.

use rand::Rng;
use std::iter::FusedIterator;

/// Trait for drawing values from a fixed distribution.
pub trait Sampler {
    /// Type of each sampled value.
    type Output;

    /// Draw the next value using the given RNG.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Output;

    /// Infinite stream of values drawn from `rng`.
    ///
    /// Pass `&mut rng` to keep using the RNG after the stream is dropped.
    fn samples<R: Rng>(&self, rng: R) -> Samples<'_, Self, R>
    where
        Self: Sized,
    {
        Samples { sampler: self, rng }
    }
}

/// Iterator that never ends, yielding one sample per call.
#[derive(Debug)]
pub struct Samples<'a, S, R> {
    sampler: &'a S,
    rng: R,
}

impl<S: Sampler, R: Rng> Iterator for Samples<'_, S, R> {
    type Item = S::Output;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.sampler.sample(&mut self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<S: Sampler, R: Rng> FusedIterator for Samples<'_, S, R> {}
