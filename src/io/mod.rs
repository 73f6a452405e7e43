//! Input/output: exemplar decoding, output encoding, CLI and errors

/// Command-line interface and single-file job runner
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types for synthesis operations
pub mod error;
/// Exemplar decoding into the pixel container
pub mod exemplar;
/// Output encoding from the resolved reference image
pub mod export;
/// Phase and row progress reporting
pub mod progress;
