//! Per-pixel synthesis passes over the reference image
//!
//! Both pixel strategies start from a reference image prefilled with uniform
//! random exemplar offsets, so every exemplar-to-output comparison sees a
//! well-defined colour even before a slot is resolved. Candidates only ever
//! replace the prior value; a pixel with no comparable candidate keeps its
//! noise assignment.

use crate::io::configuration::GOOD_ENOUGH_FACTOR;
use crate::math::UniformSource;
use crate::spatial::{Point, Raster, Region};
use crate::synthesis::coherence::CoherenceMap;
use crate::synthesis::color::Rgb;
use crate::synthesis::distance::{INCOMPARABLE, NeighborhoodMetric, TargetFrame};
use crate::synthesis::{ProgressFn, ReferenceImage};

/// Prefill every reference cell with a uniform random exemplar offset
pub fn fill_with_noise(reference: &mut ReferenceImage, source: &mut UniformSource) {
    for offset in 0..reference.len() {
        reference.set(offset, source.sample_index() as i64);
    }
}

/// Best exemplar offset for one output position by exhaustive scan
///
/// Scans every exemplar position in row-major order and keeps the strict
/// minimum exemplar-to-output distance; ties stay with the first candidate
/// found. The scan stops early once the minimum reaches the good-enough
/// bound derived from the similarity threshold. `None` when no candidate
/// window is comparable.
pub fn best_exemplar_match(
    metric: &NeighborhoodMetric<'_>,
    exemplar: &Raster<Rgb>,
    reference: &ReferenceImage,
    target: Point,
    good_enough: f32,
) -> Option<usize> {
    let exemplar_size = exemplar.size();
    let frame = TargetFrame::Output { reference };
    let mut best_offset = None;
    let mut best_distance = INCOMPARABLE;

    'scan: for y in 0..exemplar_size.height {
        for x in 0..exemplar_size.width {
            let candidate = Point::new(x as i32, y as i32);
            let distance = metric.block_distance(candidate, target, frame);
            if distance < best_distance {
                best_distance = distance;
                best_offset = Some(exemplar_size.offset_of(candidate));
                if best_distance <= good_enough {
                    break 'scan;
                }
            }
        }
    }

    best_offset
}

/// Good-enough early-exit bound for a similarity threshold
pub fn good_enough_distance(similarity_threshold: f32) -> f32 {
    similarity_threshold * GOOD_ENOUGH_FACTOR
}

/// Brute-force synthesis over the whole output, row by row
pub fn brute_force_pass(
    reference: &mut ReferenceImage,
    exemplar: &Raster<Rgb>,
    metric: &NeighborhoodMetric<'_>,
    similarity_threshold: f32,
    progress: ProgressFn<'_>,
) {
    let output_size = reference.size();
    let good_enough = good_enough_distance(similarity_threshold);

    for y in 0..output_size.height {
        for x in 0..output_size.width {
            let target = Point::new(x as i32, y as i32);
            let best = best_exemplar_match(metric, exemplar, reference, target, good_enough);
            if let Some(offset) = best {
                reference.set_at(target, offset as i64);
            }
        }
        progress(
            y as f32 / output_size.height as f32,
            "filling output image",
        );
    }
}

/// Brute-force synthesis restricted to one output region
///
/// Reads target neighbourhoods from `snapshot` only, so callers may run
/// several disjoint regions concurrently against one pre-pass snapshot.
/// Returns `(offset, value)` updates for the region's cells.
pub fn brute_force_region(
    snapshot: &ReferenceImage,
    exemplar: &Raster<Rgb>,
    metric: &NeighborhoodMetric<'_>,
    similarity_threshold: f32,
    region: Region,
) -> Vec<(usize, i64)> {
    let output_size = snapshot.size();
    let good_enough = good_enough_distance(similarity_threshold);
    let mut updates = Vec::with_capacity(region.len());

    for y in region.min.y..=region.max.y {
        for x in region.min.x..=region.max.x {
            let target = Point::new(x, y);
            let best = best_exemplar_match(metric, exemplar, snapshot, target, good_enough);
            if let Some(offset) = best {
                updates.push((output_size.offset_of(target), offset as i64));
            }
        }
    }

    updates
}

/// Coherence-accelerated synthesis over the whole output
///
/// For each output pixel, every non-centre offset in the full window is
/// wrapped toroidally into the output; the group of that neighbour's
/// current exemplar offset supplies the match candidates. Depends on the
/// coherence map having been built for the same exemplar and radius.
pub fn coherence_pass(
    reference: &mut ReferenceImage,
    exemplar: &Raster<Rgb>,
    metric: &NeighborhoodMetric<'_>,
    map: &CoherenceMap,
    progress: ProgressFn<'_>,
) {
    let output_size = reference.size();
    let exemplar_size = exemplar.size();
    let k = metric.radius();

    for y in 0..output_size.height {
        for x in 0..output_size.width {
            let target = Point::new(x as i32, y as i32);
            let mut best_distance = INCOMPARABLE;
            let mut best_offset = None;

            for dy in -k..=k {
                for dx in -k..=k {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let neighbour = output_size.wrap(target.offset(dx, dy));
                    let Some(&neighbour_offset) = reference.at(neighbour) else {
                        continue;
                    };
                    debug_assert!(neighbour_offset >= 0);
                    let Some(group) = map.group_of(neighbour_offset as usize) else {
                        continue;
                    };
                    for &member in map.members_of(group) {
                        let candidate = exemplar_size.point_at(member);
                        let distance = metric.block_distance(
                            candidate,
                            target,
                            TargetFrame::Output { reference },
                        );
                        if distance < best_distance {
                            best_distance = distance;
                            best_offset = Some(member);
                        }
                    }
                }
            }

            if let Some(offset) = best_offset {
                reference.set_at(target, offset as i64);
            }
        }
        progress(
            y as f32 / output_size.height as f32,
            "filling output image",
        );
    }
}
