//! Composite sampler over named sub-samplers.

use super::AnySampler;
use crate::error::ConfigError;
use crate::sampler::Sampler;
use rand::Rng;
use sample_core::SampledValue;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Samples every named sub-sampler once per draw.
///
/// Sub-samplers are drawn independently, in name order, so a seeded RNG
/// reproduces the same mapping.
#[derive(Debug, Clone, Default)]
pub struct RandomComposite {
    parameters: BTreeMap<String, AnySampler>,
}

impl RandomComposite {
    /// Create a composite from a name to sampler mapping.
    pub fn new(parameters: BTreeMap<String, AnySampler>) -> Self {
        Self { parameters }
    }

    /// Create a composite from name/sampler pairs, rejecting duplicate names.
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, AnySampler)>,
        K: Into<String>,
    {
        let mut parameters = BTreeMap::new();
        for (name, sampler) in pairs {
            match parameters.entry(name.into()) {
                Entry::Occupied(entry) => {
                    return Err(ConfigError::DuplicateParameter(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(sampler);
                }
            }
        }
        Ok(Self { parameters })
    }

    /// Get a sub-sampler by name.
    pub fn get(&self, name: &str) -> Option<&AnySampler> {
        self.parameters.get(name)
    }

    /// Parameter names, in sampling order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys().map(|k| k.as_str())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Whether the composite has no parameters.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl Sampler for RandomComposite {
    type Output = BTreeMap<String, SampledValue>;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Output {
        self.parameters
            .iter()
            .map(|(name, sampler)| (name.clone(), sampler.sample(&mut *rng)))
            .collect()
    }
}
