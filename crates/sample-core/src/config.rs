//! Declarative sampler configuration.
//!
//! A [`SamplerConfig`] describes a sampler without building it. Validation of
//! bounds and counts happens when `sample-generator` turns the configuration
//! into a sampler, so that a malformed search space fails before any value is
//! drawn.

use crate::value::SampledValue;
use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;
use std::collections::BTreeMap;

/// Sampler configuration for a parameter.
///
/// This enum defines the different types of samplers available for
/// producing parameter values. In YAML the variant is selected by `type`:
///
/// ```yaml
/// depth: { type: int, low: 2, high: 12 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SamplerConfig {
    /// Uniform integers in `[low, high)`, or `[0, low)` without `high`
    Int {
        /// Lower bound (inclusive), or the exclusive upper bound when `high` is absent
        low: i64,
        /// Upper bound (exclusive)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        high: Option<i64>,
    },

    /// Uniform floats in `[low, high)`, or `[0, low)` without `high`
    Float {
        /// Lower bound (inclusive), or the exclusive upper bound when `high` is absent
        low: f64,
        /// Upper bound (exclusive)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        high: Option<f64>,
    },

    /// Uniform selection from a fixed list of values
    Choice {
        /// Values to select from
        choices: Vec<YamlValue>,
    },

    /// Weight vectors drawn uniformly from the probability simplex
    Weights {
        /// Number of weights per sample
        number: usize,
    },

    /// Named sub-samplers sampled together
    Composite {
        /// Parameter name to sampler configuration
        parameters: BTreeMap<String, SamplerConfig>,
    },
}

impl SamplerConfig {
    /// Short name of the sampler kind, as written in YAML.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int { .. } => "int",
            Self::Float { .. } => "float",
            Self::Choice { .. } => "choice",
            Self::Weights { .. } => "weights",
            Self::Composite { .. } => "composite",
        }
    }

    /// Choice values converted to [`SampledValue`], if this is a choice sampler.
    pub fn choice_values(&self) -> Option<Vec<SampledValue>> {
        match self {
            Self::Choice { choices } => Some(choices.iter().map(yaml_to_sampled_value).collect()),
            _ => None,
        }
    }
}

/// Convert a YAML value to a SampledValue.
pub fn yaml_to_sampled_value(yaml: &YamlValue) -> SampledValue {
    match yaml {
        YamlValue::Null => SampledValue::Null,
        YamlValue::Bool(b) => SampledValue::Bool(*b),
        YamlValue::Number(n) => match n.as_i64() {
            Some(i) => SampledValue::Int(i),
            None => SampledValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        YamlValue::String(s) => SampledValue::String(s.clone()),
        YamlValue::Sequence(seq) => {
            SampledValue::Array(seq.iter().map(yaml_to_sampled_value).collect())
        }
        YamlValue::Mapping(map) => {
            let values: BTreeMap<String, SampledValue> = map
                .iter()
                .map(|(k, v)| (mapping_key(k), yaml_to_sampled_value(v)))
                .collect();
            SampledValue::Object(values)
        }
        YamlValue::Tagged(tagged) => yaml_to_sampled_value(&tagged.value),
    }
}

/// Render a YAML mapping key as an object key.
///
/// Non-scalar keys use the [`SampledValue`] display form, e.g. `(1, 2)`.
fn mapping_key(key: &YamlValue) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Bool(b) => b.to_string(),
        other => yaml_to_sampled_value(other).to_string(),
    }
}
