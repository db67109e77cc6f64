//! Sampling integration tests.
//!
//! These tests load the fixture search space, build its samplers and check
//! that every trial stays inside the declared domains:
//! 1. Leaf samplers honour their half-open ranges and the simplex
//! 2. Composites keep their key set on every draw
//! 3. Seeded streams are reproducible and resumable

mod properties;
mod search_space;
