//! Numeric samplers over half-open ranges.
//!
//! Both samplers follow the same bound convention: with `high` given the
//! domain is `[low, high)`, without it the domain is `[0, low)`.

use crate::error::ConfigError;
use crate::sampler::Sampler;
use rand::Rng;

/// Uniform integers from `low` (inclusive) to `high` (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomInt {
    low: i64,
    high: i64,
}

impl RandomInt {
    /// Create an integer sampler.
    ///
    /// Without `high` the sampler covers `[0, low)`.
    pub fn new(low: i64, high: Option<i64>) -> Result<Self, ConfigError> {
        let (low, high) = match high {
            Some(high) => (low, high),
            None => (0, low),
        };
        if low >= high {
            return Err(ConfigError::EmptyIntRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// Integers in `[0, high)`.
    pub fn below(high: i64) -> Result<Self, ConfigError> {
        Self::new(high, None)
    }

    /// Integers in `[low, high)`.
    pub fn range(low: i64, high: i64) -> Result<Self, ConfigError> {
        Self::new(low, Some(high))
    }

    /// Lower bound (inclusive).
    pub fn low(&self) -> i64 {
        self.low
    }

    /// Upper bound (exclusive).
    pub fn high(&self) -> i64 {
        self.high
    }
}

impl Sampler for RandomInt {
    type Output = i64;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.random_range(self.low..self.high)
    }
}

/// Uniform floats from `low` (inclusive) to `high` (exclusive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomFloat {
    low: f64,
    high: f64,
    span: f64,
}

impl RandomFloat {
    /// Create a float sampler.
    ///
    /// Without `high` the sampler covers `[0, low)`, so `low` must then be
    /// positive. An explicit `high` is always used as given.
    pub fn new(low: f64, high: Option<f64>) -> Result<Self, ConfigError> {
        let (low, high) = match high {
            Some(high) => (low, high),
            None => (0.0, low),
        };
        for bound in [low, high] {
            if !bound.is_finite() {
                return Err(ConfigError::NonFiniteBound(bound));
            }
        }
        if low >= high {
            return Err(ConfigError::EmptyFloatRange { low, high });
        }
        let span = high - low;
        if !span.is_finite() {
            return Err(ConfigError::UnboundedSpan { low, high });
        }
        Ok(Self { low, high, span })
    }

    /// Floats in `[0, high)`.
    pub fn below(high: f64) -> Result<Self, ConfigError> {
        Self::new(high, None)
    }

    /// Floats in `[low, high)`.
    pub fn range(low: f64, high: f64) -> Result<Self, ConfigError> {
        Self::new(low, Some(high))
    }

    /// Lower bound (inclusive).
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound (exclusive).
    pub fn high(&self) -> f64 {
        self.high
    }
}

impl Sampler for RandomFloat {
    type Output = f64;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // Rounding in the linear transform can land exactly on `high`.
        loop {
            let u: f64 = rng.random();
            let value = self.low + u * self.span;
            if value < self.high {
                return value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_int_below_never_leaves_range() {
        let sampler = RandomInt::new(10, None).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10_000 {
            let v = sampler.sample(&mut rng);
            assert!((0..10).contains(&v), "{v} outside [0, 10)");
        }
    }

    #[test]
    fn test_int_range() {
        let sampler = RandomInt::range(-3, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen = [false; 7];
        for v in sampler.samples(&mut rng).take(2_000) {
            assert!((-3..4).contains(&v));
            seen[(v + 3) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "every value should appear");
    }

    #[test]
    fn test_int_single_value_range() {
        let sampler = RandomInt::range(7, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        assert!(sampler.samples(&mut rng).take(50).all(|v| v == 7));
    }

    #[test]
    fn test_int_empty_ranges() {
        assert_eq!(
            RandomInt::range(5, 5),
            Err(ConfigError::EmptyIntRange { low: 5, high: 5 })
        );
        assert_eq!(
            RandomInt::range(6, 2),
            Err(ConfigError::EmptyIntRange { low: 6, high: 2 })
        );
        assert_eq!(
            RandomInt::below(0),
            Err(ConfigError::EmptyIntRange { low: 0, high: 0 })
        );
        assert!(RandomInt::below(-4).is_err());
    }

    #[test]
    fn test_int_bounds_accessors() {
        let sampler = RandomInt::below(10).unwrap();
        assert_eq!((sampler.low(), sampler.high()), (0, 10));
    }

    #[test]
    fn test_float_range() {
        let sampler = RandomFloat::range(-1.5, 2.5).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for v in sampler.samples(&mut rng).take(10_000) {
            assert!((-1.5..2.5).contains(&v), "{v} outside [-1.5, 2.5)");
        }
    }

    #[test]
    fn test_float_below() {
        let sampler = RandomFloat::below(10.0).unwrap();
        assert_eq!((sampler.low(), sampler.high()), (0.0, 10.0));

        let mut rng = StdRng::seed_from_u64(42);
        for v in sampler.samples(&mut rng).take(1_000) {
            assert!((0.0..10.0).contains(&v));
        }
    }

    #[test]
    fn test_float_explicit_zero_high_is_honoured() {
        let sampler = RandomFloat::new(-2.0, Some(0.0)).unwrap();
        assert_eq!((sampler.low(), sampler.high()), (-2.0, 0.0));
    }

    #[test]
    fn test_float_zero_without_high_is_rejected() {
        assert_eq!(
            RandomFloat::new(0.0, None),
            Err(ConfigError::EmptyFloatRange {
                low: 0.0,
                high: 0.0
            })
        );
        assert!(RandomFloat::below(-1.0).is_err());
    }

    #[test]
    fn test_float_invalid_bounds() {
        assert!(matches!(
            RandomFloat::range(f64::NAN, 1.0),
            Err(ConfigError::NonFiniteBound(_))
        ));
        assert_eq!(
            RandomFloat::range(0.0, f64::INFINITY),
            Err(ConfigError::NonFiniteBound(f64::INFINITY))
        );
        assert_eq!(
            RandomFloat::range(-f64::MAX, f64::MAX),
            Err(ConfigError::UnboundedSpan {
                low: -f64::MAX,
                high: f64::MAX
            })
        );
        assert!(RandomFloat::range(1.0, 1.0).is_err());
    }

    #[test]
    fn test_deterministic_generation() {
        let sampler = RandomFloat::range(0.0, 1.0).unwrap();

        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(sampler.sample(&mut rng1), sampler.sample(&mut rng2));
    }
}
