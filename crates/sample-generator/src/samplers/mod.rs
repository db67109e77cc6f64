//! Sampler implementations for each distribution.
//!
//! This module provides the leaf samplers, the composite sampler and
//! [`AnySampler`], the type-erased form used inside composites and when
//! building samplers from a [`SamplerConfig`].

pub mod choice;
pub mod composite;
pub mod numeric;
pub mod weights;

pub use choice::RandomChoice;
pub use composite::RandomComposite;
pub use numeric::{RandomFloat, RandomInt};
pub use weights::RandomWeights;

use crate::error::ConfigError;
use crate::sampler::Sampler;
use rand::Rng;
use sample_core::{yaml_to_sampled_value, SampledValue, SamplerConfig};
use std::collections::BTreeMap;

/// Any sampler, with its output carried as a [`SampledValue`].
#[derive(Debug, Clone)]
pub enum AnySampler {
    Int(RandomInt),
    Float(RandomFloat),
    Choice(RandomChoice<SampledValue>),
    Weights(RandomWeights),
    Composite(RandomComposite),
}

impl AnySampler {
    /// Short name of the sampler kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Choice(_) => "choice",
            Self::Weights(_) => "weights",
            Self::Composite(_) => "composite",
        }
    }
}

impl Sampler for AnySampler {
    type Output = SampledValue;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SampledValue {
        match self {
            Self::Int(s) => SampledValue::Int(s.sample(rng)),
            Self::Float(s) => SampledValue::Float(s.sample(rng)),
            Self::Choice(s) => s.sample(rng),
            Self::Weights(s) => SampledValue::from(s.sample(rng)),
            Self::Composite(s) => SampledValue::Object(s.sample(rng)),
        }
    }
}

impl From<RandomInt> for AnySampler {
    fn from(s: RandomInt) -> Self {
        Self::Int(s)
    }
}

impl From<RandomFloat> for AnySampler {
    fn from(s: RandomFloat) -> Self {
        Self::Float(s)
    }
}

impl From<RandomChoice<SampledValue>> for AnySampler {
    fn from(s: RandomChoice<SampledValue>) -> Self {
        Self::Choice(s)
    }
}

impl From<RandomWeights> for AnySampler {
    fn from(s: RandomWeights) -> Self {
        Self::Weights(s)
    }
}

impl From<RandomComposite> for AnySampler {
    fn from(s: RandomComposite) -> Self {
        Self::Composite(s)
    }
}

impl TryFrom<&SamplerConfig> for AnySampler {
    type Error = ConfigError;

    fn try_from(config: &SamplerConfig) -> Result<Self, Self::Error> {
        build_sampler(config)
    }
}

/// Build a sampler from its configuration.
///
/// Errors inside a composite are reported with the parameter path.
pub fn build_sampler(config: &SamplerConfig) -> Result<AnySampler, ConfigError> {
    let sampler: AnySampler = match config {
        SamplerConfig::Int { low, high } => RandomInt::new(*low, *high)?.into(),

        SamplerConfig::Float { low, high } => RandomFloat::new(*low, *high)?.into(),

        SamplerConfig::Choice { choices } => {
            RandomChoice::new(choices.iter().map(yaml_to_sampled_value).collect())?.into()
        }

        SamplerConfig::Weights { number } => RandomWeights::new(*number)?.into(),

        SamplerConfig::Composite { parameters } => build_composite(parameters)?.into(),
    };
    tracing::trace!("Built {} sampler", config.kind());
    Ok(sampler)
}

/// Build a composite sampler from named configurations.
pub fn build_composite(
    parameters: &BTreeMap<String, SamplerConfig>,
) -> Result<RandomComposite, ConfigError> {
    let built = parameters
        .iter()
        .map(|(name, config)| {
            build_sampler(config)
                .map(|sampler| (name.clone(), sampler))
                .map_err(|e| e.in_parameter(name.as_str()))
        })
        .collect::<Result<BTreeMap<_, _>, _>>()?;
    Ok(RandomComposite::new(built))
}
