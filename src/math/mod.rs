//! Mathematical utilities for the synthesis pipeline

/// Seeded uniform random source over a configurable range
pub mod random;

pub use random::UniformSource;
