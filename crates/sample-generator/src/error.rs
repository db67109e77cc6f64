//! Configuration errors raised when a sampler is constructed.

/// Error type for invalid sampler configuration.
///
/// Sampling itself cannot fail; every check happens in the constructors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Integer range contains no values
    #[error("Empty integer range [{low}, {high})")]
    EmptyIntRange { low: i64, high: i64 },

    /// Float range contains no values
    #[error("Empty float range [{low}, {high})")]
    EmptyFloatRange { low: f64, high: f64 },

    /// Float bound is NaN or infinite
    #[error("Float bound must be finite, got {0}")]
    NonFiniteBound(f64),

    /// Float range width overflows f64
    #[error("Float range [{low}, {high}) is too wide to sample")]
    UnboundedSpan { low: f64, high: f64 },

    /// Choice sampler without choices
    #[error("Choice sampler needs at least one choice")]
    EmptyChoices,

    /// Weights sampler with zero weights
    #[error("Weights sampler needs at least one weight")]
    ZeroWeights,

    /// Parameter name given twice to a composite
    #[error("Duplicate parameter: {0}")]
    DuplicateParameter(String),

    /// Error inside a named parameter of a composite
    #[error("Parameter '{name}': {source}")]
    InParameter {
        name: String,
        #[source]
        source: Box<ConfigError>,
    },
}

impl ConfigError {
    /// Wrap this error with the name of the parameter it occurred in.
    pub fn in_parameter(self, name: impl Into<String>) -> Self {
        Self::InParameter {
            name: name.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping parameter wrappers.
    pub fn root_cause(&self) -> &ConfigError {
        match self {
            Self::InParameter { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
