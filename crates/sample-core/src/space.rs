//! Search space definitions loaded from YAML.
//!
//! A search space names every parameter of a tuning run and the sampler that
//! produces it:
//!
//! ```yaml
//! version: 1
//! seed: 42
//! parameters:
//!   alphas:
//!     type: weights
//!     number: 3
//!   threshold:
//!     type: float
//!     low: 0.0
//!     high: 1.0
//! ```

use crate::config::SamplerConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Highest search space version understood by this crate.
pub const CURRENT_VERSION: u32 = 1;

/// Error type for search space operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading search space file
    #[error("Failed to read search space file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Version newer than this crate understands
    #[error("Unsupported search space version {0} (expected {})", CURRENT_VERSION)]
    UnsupportedVersion(u32),
}

fn default_version() -> u32 {
    CURRENT_VERSION
}

/// Named parameters of a tuning run.
///
/// Parameters are kept in a `BTreeMap` so that a seeded run visits them in
/// the same order every time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSpace {
    /// Search space version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Default seed for runs that do not provide one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Parameter name to sampler configuration
    #[serde(default)]
    pub parameters: BTreeMap<String, SamplerConfig>,
}

impl SearchSpace {
    /// Create a search space from parameters, without a default seed.
    pub fn new(parameters: BTreeMap<String, SamplerConfig>) -> Self {
        Self {
            version: CURRENT_VERSION,
            seed: None,
            parameters,
        }
    }

    /// Load a search space from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        tracing::debug!("Loading search space from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a search space from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let space: SearchSpace = serde_yaml::from_str(yaml)?;
        if space.version != CURRENT_VERSION {
            return Err(SchemaError::UnsupportedVersion(space.version));
        }
        if space.parameters.is_empty() {
            tracing::warn!("Search space defines no parameters; every sample will be empty");
        }
        tracing::debug!(
            "Parsed search space with {} parameter(s)",
            space.parameters.len()
        );
        Ok(space)
    }

    /// Serialize the search space back to YAML.
    pub fn to_yaml(&self) -> Result<String, SchemaError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Get a parameter's sampler configuration by name.
    pub fn get_parameter(&self, name: &str) -> Option<&SamplerConfig> {
        self.parameters.get(name)
    }

    /// Get all parameter names, in sampling order.
    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters.keys().map(|k| k.as_str()).collect()
    }

    /// The whole search space as a single composite sampler configuration.
    pub fn to_config(&self) -> SamplerConfig {
        SamplerConfig::Composite {
            parameters: self.parameters.clone(),
        }
    }
}
