//! Example-based texture synthesis from a small exemplar image
//!
//! The system copies square neighbourhoods of exemplar pixels into output
//! positions chosen to minimise local dissimilarity. Three interchangeable
//! strategies fill the output: exhaustive search, coherence-accelerated
//! search over precomputed similarity groups, and patch stitching with
//! per-row minimum-error seam selection.

#![forbid(unsafe_code)]

/// Input/output operations, CLI and error handling
pub mod io;
/// Randomness utilities for initial placement
pub mod math;
/// Pixel containers and coordinate geometry
pub mod spatial;
/// Synthesis strategies, distance metric and coherence preprocessing
pub mod synthesis;

pub use io::error::{Result, SynthesisError};
