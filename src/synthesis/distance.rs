//! Normalised block distance between two square pixel neighbourhoods
//!
//! The metric compares a candidate neighbourhood read directly from the
//! exemplar against a target neighbourhood addressed in one of two frames:
//! the exemplar itself (coherence preprocessing) or the output, resolved
//! through the reference image's indirection with toroidal wrapping. Only
//! the causal half of the window is visited (rows above the centre plus the
//! left part of the centre row); the centre pixel is always skipped.

use crate::spatial::{Point, Raster};
use crate::synthesis::ReferenceImage;
use crate::synthesis::color::Rgb;

/// Sentinel distance for incomparable or uninformative window pairs
pub const INCOMPARABLE: f32 = f32::MAX;

/// Addressing frame for the target neighbourhood
#[derive(Debug, Clone, Copy)]
pub enum TargetFrame<'a> {
    /// Target pixels read directly from the exemplar; out-of-bounds
    /// positions are excluded from the sum and the pair count
    Exemplar,
    /// Target coordinates wrapped into the output size and resolved through
    /// the reference image to actual exemplar pixels
    Output {
        /// Current reference image for the output being synthesised
        reference: &'a ReferenceImage,
    },
}

/// Block distance evaluator for a fixed neighbour radius and threshold
#[derive(Debug, Clone, Copy)]
pub struct NeighborhoodMetric<'a> {
    exemplar: &'a Raster<Rgb>,
    radius: i32,
    similarity_threshold: f32,
}

impl<'a> NeighborhoodMetric<'a> {
    /// Create a metric over `exemplar` with window side `2 * radius + 1`
    pub const fn new(exemplar: &'a Raster<Rgb>, radius: usize, similarity_threshold: f32) -> Self {
        Self {
            exemplar,
            radius: radius as i32,
            similarity_threshold,
        }
    }

    /// The configured neighbour radius
    pub const fn radius(&self) -> i32 {
        self.radius
    }

    /// Contributing pair count of a complete, unclipped half window
    ///
    /// `(2k+1)(k+1) - (k+1)`: the causal half of the window without its
    /// centre pixel.
    pub const fn expected_pairs(&self) -> u32 {
        let k = self.radius;
        ((2 * k + 1) * (k + 1) - (k + 1)) as u32
    }

    /// Normalised distance between the neighbourhoods centred on
    /// `candidate` (exemplar frame) and `target` (per `frame`)
    ///
    /// Returns [`INCOMPARABLE`] when the window is clipped (fewer
    /// contributing pairs than a full half window), when the radius admits
    /// no pairs at all, or when the result is at or below the similarity
    /// threshold and therefore too similar to be informative.
    pub fn block_distance(&self, candidate: Point, target: Point, frame: TargetFrame<'_>) -> f32 {
        let k = self.radius;
        let mut sum = 0.0f32;
        let mut pairs = 0u32;

        for dy in -k..=0 {
            let dx_end = if dy == 0 { -1 } else { k };
            for dx in -k..=dx_end {
                let Some(candidate_pixel) = self.exemplar.at(candidate.offset(dx, dy)) else {
                    continue;
                };
                let Some(target_pixel) = self.resolve_target(target.offset(dx, dy), frame) else {
                    continue;
                };
                sum += candidate_pixel.distance_squared(target_pixel);
                pairs += 1;
            }
        }

        if pairs == 0 || pairs != self.expected_pairs() {
            return INCOMPARABLE;
        }
        let normalized = sum / pairs as f32;
        if normalized <= self.similarity_threshold {
            // near-duplicate matches make the result noisy
            INCOMPARABLE
        } else {
            normalized
        }
    }

    fn resolve_target(&self, point: Point, frame: TargetFrame<'_>) -> Option<Rgb> {
        match frame {
            TargetFrame::Exemplar => self.exemplar.at(point).copied(),
            TargetFrame::Output { reference } => {
                let wrapped = reference.size().wrap(point);
                let offset = reference.at(wrapped).copied()?;
                debug_assert!(offset >= 0);
                self.exemplar.cell(offset as usize)
            }
        }
    }
}
