//! Value representation for sampled parameters.
//!
//! Leaf samplers have concrete output types (`i64`, `f64`, `Vec<f64>`, ...).
//! Once samplers are type-erased, for example inside a composite or when
//! built from a YAML search space, their outputs are carried as
//! [`SampledValue`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Dynamically-typed sampled value.
///
/// Serializes untagged, so a sample renders as plain JSON/YAML
/// (`{"alphas": [0.2, 0.8], "depth": 3}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampledValue {
    /// Null value (a `~` choice in YAML)
    Null,

    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// String value
    String(String),

    /// Ordered sequence of values (weights, list choices)
    Array(Vec<SampledValue>),

    /// Named values (composite samples, mapping choices)
    Object(BTreeMap<String, SampledValue>),
}

impl SampledValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    ///
    /// Integers are widened so that numeric choices can be read uniformly.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a slice of values.
    pub fn as_array(&self) -> Option<&[SampledValue]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Try to get this value as a weight vector.
    ///
    /// Returns `None` unless every element is a float.
    pub fn as_weights(&self) -> Option<Vec<f64>> {
        match self {
            Self::Array(values) => values
                .iter()
                .map(|v| match v {
                    Self::Float(f) => Some(*f),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }

    /// Try to get this value as a map of named values.
    pub fn as_object(&self) -> Option<&BTreeMap<String, SampledValue>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Get a named value from an object.
    pub fn get(&self, name: &str) -> Option<&SampledValue> {
        self.as_object().and_then(|map| map.get(name))
    }
}

impl fmt::Display for SampledValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Array(values) => {
                write!(f, "(")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, ")")
            }
            Self::Object(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for SampledValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for SampledValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for SampledValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<String> for SampledValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for SampledValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<Vec<f64>> for SampledValue {
    fn from(weights: Vec<f64>) -> Self {
        Self::Array(weights.into_iter().map(Self::Float).collect())
    }
}

impl From<BTreeMap<String, SampledValue>> for SampledValue {
    fn from(map: BTreeMap<String, SampledValue>) -> Self {
        Self::Object(map)
    }
}
