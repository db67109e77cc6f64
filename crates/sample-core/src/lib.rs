//! Core types for the tuning samplers.
//!
//! This crate provides the foundational types shared by the sampler
//! implementations and the `tuning` command-line tool:
//!
//! - [`SampledValue`] - Dynamically-typed value produced by a sampler
//! - [`SamplerConfig`] - Declarative sampler description loaded from YAML
//! - [`SearchSpace`] - Named parameters of a tuning run, loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! sample-core (this crate)
//!    │
//!    └─── sample-generator  (builds samplers from SamplerConfig)
//!              │
//!              └─── tuning  (CLI: sample / validate)
//! ```
//!
//! # Example
//!
//! ```rust
//! use sample_core::{SamplerConfig, SearchSpace};
//!
//! let space = SearchSpace::from_yaml(r#"
//! seed: 42
//! parameters:
//!   threshold:
//!     type: float
//!     low: 0.0
//!     high: 1.0
//!   alphas:
//!     type: weights
//!     number: 3
//! "#).unwrap();
//!
//! assert_eq!(space.parameter_names(), vec!["alphas", "threshold"]);
//! assert!(matches!(
//!     space.get_parameter("alphas"),
//!     Some(SamplerConfig::Weights { number: 3 })
//! ));
//! ```

pub mod config;
pub mod space;
pub mod value;

// Re-exports for convenience
pub use config::{yaml_to_sampled_value, SamplerConfig};
pub use space::{SchemaError, SearchSpace};
pub use value::SampledValue;
