//! Synthesis constants and runtime configuration defaults

/// Default neighbour radius `k`; the comparison window side is `2k + 1`
pub const DEFAULT_NEIGHBOR_RADIUS: usize = 5;

/// Default similarity threshold below which matches are skipped as
/// uninformative
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.02;

/// Default grouping bound for coherence preprocessing
pub const DEFAULT_COHERENCE_THRESHOLD: f32 = 0.1;

/// Multiplier applied to the similarity threshold for the early-exit bound
/// that ends the exemplar scan once a close-enough match is found
pub const GOOD_ENOUGH_FACTOR: f32 = 1.4;

/// Default output extent on both axes
pub const DEFAULT_OUTPUT_DIMENSION: usize = 256;

/// Default side length of square patches in patch mode
pub const DEFAULT_PATCH_SIZE: usize = 40;

/// Default overlap border between horizontally adjacent patches
pub const DEFAULT_BORDER_SIZE: usize = 10;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to derived output filenames
pub const OUTPUT_SUFFIX: &str = "_synth";

/// Fixed quality for JPEG-encoded output
pub const JPEG_QUALITY: u8 = 90;

// Progress bar display settings
/// Resolution of the progress bar position scale
pub const PROGRESS_SCALE: u64 = 1000;
