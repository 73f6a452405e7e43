//! Orchestration of a configured synthesis run
//!
//! Owns the exemplar, the configuration and the reference image, and walks
//! the run through its phases: noise prefill, optional coherence-map
//! construction, then the selected strategy. Configuration violations are
//! caught up front as errors; internal invariants stay debug assertions.

use crate::io::error::invalid_parameter;
use crate::math::UniformSource;
use crate::spatial::{Raster, Size};
use crate::synthesis::coherence::CoherenceMap;
use crate::synthesis::color::Rgb;
use crate::synthesis::distance::NeighborhoodMetric;
use crate::synthesis::patch::{PatchLayout, PatchOrigins, patch_pass};
use crate::synthesis::pixel::{brute_force_pass, coherence_pass, fill_with_noise};
use crate::synthesis::tiling::parallel_brute_force;
use crate::synthesis::{ProgressFn, ReferenceImage};

/// Candidate-selection strategy for a synthesis run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Exhaustive exemplar scan per output pixel
    BruteForce,
    /// Search restricted to precomputed similarity groups
    Coherence,
    /// Whole-patch placement with seam stitching
    PatchBased,
}

/// Parameters of a synthesis run
#[derive(Debug, Clone, Copy)]
pub struct SynthesisConfig {
    /// Output image extent
    pub output_size: Size,
    /// Neighbour radius `k`; the comparison window side is `2k + 1`
    pub neighbor_radius: usize,
    /// Distances at or below this are rejected as uninformative
    pub similarity_threshold: f32,
    /// Strategy selecting match candidates
    pub mode: GenerationMode,
    /// Grouping bound for coherence preprocessing (coherence mode only)
    pub coherence_threshold: f32,
    /// Patch and border extents (patch mode only)
    pub patch: PatchLayout,
    /// Seed for the initial random assignment
    pub seed: u64,
    /// Run brute force across four quadrant workers
    pub parallel: bool,
}

impl SynthesisConfig {
    /// Validate the configuration against an exemplar extent
    ///
    /// # Errors
    ///
    /// Returns an `InvalidParameter` error for an empty output or exemplar,
    /// negative thresholds, patch extents violating
    /// `border < patch < min(exemplar extents)` or exceeding the output, or
    /// a parallel run requested for a strategy other than brute force.
    pub fn validate(&self, exemplar_size: Size) -> crate::Result<()> {
        if exemplar_size.is_empty() {
            return Err(invalid_parameter(
                "exemplar",
                &format!("{}x{}", exemplar_size.width, exemplar_size.height),
                &"exemplar must contain at least one pixel",
            ));
        }
        if self.output_size.is_empty() {
            return Err(invalid_parameter(
                "output_size",
                &format!("{}x{}", self.output_size.width, self.output_size.height),
                &"output must contain at least one pixel",
            ));
        }
        if self.similarity_threshold < 0.0 {
            return Err(invalid_parameter(
                "similarity_threshold",
                &self.similarity_threshold,
                &"threshold must be non-negative",
            ));
        }
        if self.mode == GenerationMode::Coherence && self.coherence_threshold < 0.0 {
            return Err(invalid_parameter(
                "coherence_threshold",
                &self.coherence_threshold,
                &"threshold must be non-negative",
            ));
        }
        if self.parallel && self.mode != GenerationMode::BruteForce {
            return Err(invalid_parameter(
                "parallel",
                &"true",
                &"quadrant tiling is only defined for the brute-force strategy",
            ));
        }
        if self.mode == GenerationMode::PatchBased {
            let patch = self.patch.patch_size;
            let border = self.patch.border_size;
            if border >= patch {
                return Err(invalid_parameter(
                    "border_size",
                    &border,
                    &"border must be smaller than the patch",
                ));
            }
            if patch >= exemplar_size.width || patch >= exemplar_size.height {
                return Err(invalid_parameter(
                    "patch_size",
                    &patch,
                    &"patch must be smaller than both exemplar extents",
                ));
            }
            if patch > self.output_size.width || patch > self.output_size.height {
                return Err(invalid_parameter(
                    "patch_size",
                    &patch,
                    &"output must fit at least one patch",
                ));
            }
        }
        Ok(())
    }
}

/// A synthesis run over one exemplar
#[derive(Debug)]
pub struct Synthesizer {
    exemplar: Raster<Rgb>,
    config: SynthesisConfig,
    reference: ReferenceImage,
}

impl Synthesizer {
    /// Create a run from a loaded exemplar and validated parameters
    ///
    /// # Errors
    ///
    /// Returns the error from [`SynthesisConfig::validate`] when the
    /// configuration does not fit the exemplar.
    pub fn new(exemplar: Raster<Rgb>, config: SynthesisConfig) -> crate::Result<Self> {
        config.validate(exemplar.size())?;
        let initial = match config.mode {
            // patch placement overwrites regions wholesale; start from a
            // uniformly valid offset so unfilled cells still resolve
            GenerationMode::PatchBased => 0,
            _ => crate::synthesis::UNSET,
        };
        Ok(Self {
            exemplar,
            config,
            reference: Raster::filled(config.output_size, initial),
        })
    }

    /// The loaded exemplar pixels
    pub const fn exemplar(&self) -> &Raster<Rgb> {
        &self.exemplar
    }

    /// The current reference image
    pub const fn reference(&self) -> &ReferenceImage {
        &self.reference
    }

    /// The run's configuration
    pub const fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Run the configured strategy to completion
    ///
    /// On return every reference cell holds a valid exemplar offset. The
    /// progress callback receives `(fraction, phase)` at phase boundaries
    /// and once per completed output row in single-threaded synthesis.
    pub fn generate(&mut self, progress: ProgressFn<'_>) {
        match self.config.mode {
            GenerationMode::PatchBased => {
                let mut origins =
                    PatchOrigins::new(&self.exemplar, self.config.patch.patch_size, self.config.seed);
                patch_pass(
                    &mut self.reference,
                    &self.exemplar,
                    self.config.patch,
                    &mut origins,
                    progress,
                );
            }
            GenerationMode::BruteForce => {
                progress(0.0, "filling reference with noise");
                self.fill_noise();
                let metric = NeighborhoodMetric::new(
                    &self.exemplar,
                    self.config.neighbor_radius,
                    self.config.similarity_threshold,
                );
                if self.config.parallel {
                    let reference = std::mem::replace(
                        &mut self.reference,
                        Raster::filled(Size::new(0, 0), 0),
                    );
                    self.reference = parallel_brute_force(
                        reference,
                        &self.exemplar,
                        &metric,
                        self.config.similarity_threshold,
                        progress,
                    );
                } else {
                    brute_force_pass(
                        &mut self.reference,
                        &self.exemplar,
                        &metric,
                        self.config.similarity_threshold,
                        progress,
                    );
                }
            }
            GenerationMode::Coherence => {
                progress(0.0, "filling reference with noise");
                self.fill_noise();
                let metric = NeighborhoodMetric::new(
                    &self.exemplar,
                    self.config.neighbor_radius,
                    self.config.similarity_threshold,
                );
                progress(0.0, "building coherence map");
                let map = CoherenceMap::build(
                    &self.exemplar,
                    &metric,
                    self.config.coherence_threshold,
                    progress,
                );
                coherence_pass(
                    &mut self.reference,
                    &self.exemplar,
                    &metric,
                    &map,
                    progress,
                );
            }
        }

        debug_assert!(self.reference.iter().all(|&offset| offset >= 0));
    }

    fn fill_noise(&mut self) {
        let mut source = UniformSource::new(self.config.seed, 0.0, self.exemplar.len() as f64);
        fill_with_noise(&mut self.reference, &mut source);
    }
}
