//! Patch-based synthesis with per-row minimum-error seam selection
//!
//! Places whole exemplar sub-rectangles left-to-right instead of resolving
//! single pixels. Adjacent patches overlap by a fixed border; within the
//! border, each output row keeps the previously placed content up to the
//! column where the candidate patch matches it best, and takes the
//! candidate from that seam column onwards. Patches tile horizontally only;
//! stacked patch rows are committed without a vertical seam.

use crate::math::UniformSource;
use crate::spatial::Raster;
use crate::synthesis::color::Rgb;
use crate::synthesis::{ProgressFn, ReferenceImage};

/// Patch and overlap extents for the patch-based strategy
#[derive(Debug, Clone, Copy)]
pub struct PatchLayout {
    /// Side length of each square patch in pixels
    pub patch_size: usize,
    /// Width of the overlap border between horizontally adjacent patches
    pub border_size: usize,
}

impl PatchLayout {
    /// Horizontal distance between consecutive patch origins
    pub const fn stride(self) -> usize {
        self.patch_size - self.border_size
    }
}

/// Uniform samplers over valid patch origins inside the exemplar
///
/// One range-bound source per axis; origin components are drawn
/// independently.
#[derive(Debug)]
pub struct PatchOrigins {
    width_source: UniformSource,
    height_source: UniformSource,
}

impl PatchOrigins {
    /// Create origin samplers for an exemplar and patch size
    ///
    /// `patch_size` must be below both exemplar extents; checked in debug
    /// builds only.
    pub fn new(exemplar: &Raster<Rgb>, patch_size: usize, seed: u64) -> Self {
        let size = exemplar.size();
        debug_assert!(patch_size < size.width && patch_size < size.height);
        Self {
            width_source: UniformSource::new(seed, 0.0, (size.width - patch_size) as f64),
            height_source: UniformSource::new(seed.wrapping_add(1), 0.0, (size.height - patch_size) as f64),
        }
    }

    fn sample(&mut self) -> (usize, usize) {
        (
            self.width_source.sample_index(),
            self.height_source.sample_index(),
        )
    }
}

/// Fill the reference image by tiling patches across the output width
///
/// The caller must have validated `border < patch < min(exemplar extents)`
/// and an output at least one patch tall and wide; those preconditions are
/// only debug-checked here. The first patch is copied verbatim into the
/// output's top-left corner; every later patch is stitched along its border.
pub fn patch_pass(
    reference: &mut ReferenceImage,
    exemplar: &Raster<Rgb>,
    layout: PatchLayout,
    origins: &mut PatchOrigins,
    progress: ProgressFn<'_>,
) {
    let output_size = reference.size();
    let exemplar_size = exemplar.size();
    let patch = layout.patch_size;
    let border = layout.border_size;
    debug_assert!(border < patch);
    debug_assert!(patch < exemplar_size.width && patch < exemplar_size.height);
    debug_assert!(patch <= output_size.width && patch <= output_size.height);

    // first patch: a random exemplar sub-rectangle copied verbatim
    progress(0.0, "placing first patch");
    let (origin_x, origin_y) = origins.sample();
    for row in 0..patch {
        for col in 0..patch {
            let output_offset = row * output_size.width + col;
            let input_offset = (origin_y + row) * exemplar_size.width + (origin_x + col);
            reference.set(output_offset, input_offset as i64);
        }
    }

    let patch_count = output_size.width / layout.stride();
    for index in 1..patch_count {
        let width_from = index * layout.stride();
        if width_from + patch > output_size.width {
            break;
        }
        let (origin_x, origin_y) = origins.sample();

        // commit the non-border columns immediately; remember border pairs
        let mut border_output = Vec::with_capacity(patch * border);
        let mut border_input = Vec::with_capacity(patch * border);
        for row in 0..patch {
            for col in width_from..width_from + patch {
                let input_x = origin_x + col - width_from;
                let input_y = origin_y + row;
                debug_assert!(input_x < exemplar_size.width);
                debug_assert!(input_y < exemplar_size.height);
                let output_offset = row * output_size.width + col;
                let input_offset = input_y * exemplar_size.width + input_x;
                if col - width_from < border {
                    border_output.push(output_offset);
                    border_input.push(input_offset);
                } else {
                    reference.set(output_offset, input_offset as i64);
                }
            }
        }
        debug_assert!(border_output.len() == patch * border);

        // per output row, the single best seam column within the border
        for row in 0..patch {
            let mut seam_col = 0;
            let mut seam_distance = f32::MAX;
            for col in 0..border {
                let Some(distance) = border_pair_distance(
                    reference,
                    exemplar,
                    &border_output,
                    &border_input,
                    row * border + col,
                ) else {
                    continue;
                };
                if distance < seam_distance {
                    seam_distance = distance;
                    seam_col = col;
                }
            }
            for col in seam_col..border {
                let pair = row * border + col;
                if let (Some(&output_offset), Some(&input_offset)) =
                    (border_output.get(pair), border_input.get(pair))
                {
                    reference.set(output_offset, input_offset as i64);
                }
            }
        }

        progress(index as f32 / patch_count as f32, "stitching patches");
    }
    progress(1.0, "stitching patches");
}

// Colour distance between a border candidate and the content already placed
// at the same output cell.
fn border_pair_distance(
    reference: &ReferenceImage,
    exemplar: &Raster<Rgb>,
    border_output: &[usize],
    border_input: &[usize],
    pair: usize,
) -> Option<f32> {
    let output_offset = *border_output.get(pair)?;
    let input_offset = *border_input.get(pair)?;
    let candidate = exemplar.cell(input_offset)?;
    let placed_offset = reference.cell(output_offset)?;
    debug_assert!(placed_offset >= 0);
    let placed = exemplar.cell(placed_offset as usize)?;
    Some(candidate.distance_squared(placed))
}
