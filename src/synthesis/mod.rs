//! Texture synthesis core: distance metric, coherence preprocessing and the
//! candidate-selection strategies that fill the reference image

/// Coherence map construction and group lookup
pub mod coherence;
/// RGB pixel type and colour distance
pub mod color;
/// Neighbourhood block distance in two addressing modes
pub mod distance;
/// Patch placement with per-row seam selection
pub mod patch;
/// Noise prefill, brute-force and coherence-accelerated passes
pub mod pixel;
/// Orchestration of strategies over a configured run
pub mod synthesizer;
/// Four-quadrant fork-join parallel brute force
pub mod tiling;

use crate::spatial::Raster;

pub use color::Rgb;
pub use distance::{INCOMPARABLE, NeighborhoodMetric, TargetFrame};
pub use synthesizer::{GenerationMode, SynthesisConfig, Synthesizer};

/// Sentinel for reference cells and group ids that have not been assigned
pub const UNSET: i64 = -1;

/// Output-sized grid of flat exemplar offsets
///
/// The indirection layer between synthesised structure and actual colour:
/// each cell names the exemplar pixel that currently stands in for that
/// output position.
pub type ReferenceImage = Raster<i64>;

/// Progress callback fed a completion fraction in `[0, 1]` and a phase label
pub type ProgressFn<'a> = &'a mut dyn FnMut(f32, &str);
