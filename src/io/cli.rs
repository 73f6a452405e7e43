//! Command-line interface for exemplar-based texture synthesis

use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::io::configuration::{
    DEFAULT_BORDER_SIZE, DEFAULT_COHERENCE_THRESHOLD, DEFAULT_NEIGHBOR_RADIUS,
    DEFAULT_OUTPUT_DIMENSION, DEFAULT_PATCH_SIZE, DEFAULT_SEED, DEFAULT_SIMILARITY_THRESHOLD,
    OUTPUT_SUFFIX,
};
use crate::io::error::Result;
use crate::io::exemplar::load_exemplar;
use crate::io::export::export_reference;
use crate::io::progress::PhaseReporter;
use crate::spatial::Size;
use crate::synthesis::patch::PatchLayout;
use crate::synthesis::{GenerationMode, SynthesisConfig, Synthesizer};

/// Candidate-selection strategy as exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Exhaustive exemplar scan per output pixel
    BruteForce,
    /// Search restricted to precomputed similarity groups
    Coherence,
    /// Whole-patch placement with seam stitching
    Patch,
}

impl From<ModeArg> for GenerationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::BruteForce => Self::BruteForce,
            ModeArg::Coherence => Self::Coherence,
            ModeArg::Patch => Self::PatchBased,
        }
    }
}

#[derive(Parser)]
#[command(name = "texweave")]
#[command(
    author,
    version,
    about = "Synthesise a larger texture from a small exemplar image"
)]
/// Command-line arguments for the synthesis tool
pub struct Cli {
    /// Exemplar image to synthesise from
    #[arg(value_name = "EXEMPLAR")]
    pub input: PathBuf,

    /// Output image path (defaults to <exemplar stem>_synth.<ext>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_OUTPUT_DIMENSION)]
    pub width: usize,

    /// Output height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_OUTPUT_DIMENSION)]
    pub height: usize,

    /// Neighbour radius k; neighbourhoods span (2k+1)x(2k+1) pixels
    #[arg(short = 'k', long, default_value_t = DEFAULT_NEIGHBOR_RADIUS)]
    pub radius: usize,

    /// Skip matches whose distance falls at or below this threshold
    #[arg(short, long, default_value_t = DEFAULT_SIMILARITY_THRESHOLD)]
    pub similarity: f32,

    /// Candidate-selection strategy
    #[arg(short, long, value_enum, default_value_t = ModeArg::BruteForce)]
    pub mode: ModeArg,

    /// Group neighbourhoods closer than this during coherence preprocessing
    #[arg(short, long, default_value_t = DEFAULT_COHERENCE_THRESHOLD)]
    pub coherence: f32,

    /// Side length of square patches (patch mode)
    #[arg(long, default_value_t = DEFAULT_PATCH_SIZE)]
    pub patch_size: usize,

    /// Overlap border between adjacent patches (patch mode)
    #[arg(long, default_value_t = DEFAULT_BORDER_SIZE)]
    pub border_size: usize,

    /// Random seed for reproducible generation
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Synthesise output quadrants in parallel (brute force only)
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Assemble the synthesis configuration from the arguments
    pub fn config(&self) -> SynthesisConfig {
        SynthesisConfig {
            output_size: Size::new(self.width, self.height),
            neighbor_radius: self.radius,
            similarity_threshold: self.similarity,
            mode: self.mode.into(),
            coherence_threshold: self.coherence,
            patch: PatchLayout {
                patch_size: self.patch_size,
                border_size: self.border_size,
            },
            seed: self.seed,
            parallel: self.parallel,
        }
    }
}

/// Runs one synthesis job from parsed arguments
pub struct SynthesisJob {
    cli: Cli,
    reporter: Option<PhaseReporter>,
}

impl SynthesisJob {
    /// Create a job from CLI arguments
    pub fn new(cli: Cli) -> Self {
        let reporter = cli.should_show_progress().then(PhaseReporter::new);
        Self { cli, reporter }
    }

    /// Load the exemplar, run synthesis and export the result
    ///
    /// # Errors
    ///
    /// Returns an error if the exemplar cannot be decoded, the configuration
    /// is invalid for it, or the output cannot be encoded.
    pub fn run(&mut self) -> Result<()> {
        let exemplar = load_exemplar(&self.cli.input)?;
        let output_path = self
            .cli
            .output
            .clone()
            .unwrap_or_else(|| Self::derived_output_path(&self.cli.input));

        let mut synthesizer = Synthesizer::new(exemplar, self.cli.config())?;
        let reporter = &mut self.reporter;
        synthesizer.generate(&mut |fraction, phase| {
            if let Some(reporter) = reporter {
                reporter.update(fraction, phase);
            }
        });
        if let Some(reporter) = &self.reporter {
            reporter.finish();
        }

        export_reference(synthesizer.exemplar(), synthesizer.reference(), &output_path)
    }

    fn derived_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        input_path.parent().map_or_else(
            || PathBuf::from(&output_name),
            |parent| parent.join(&output_name),
        )
    }
}
