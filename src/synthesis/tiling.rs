//! Fork-join quadrant tiling for parallel brute-force synthesis
//!
//! The output rectangle is statically split into four quadrants of roughly
//! equal size, each synthesised by its own worker. Workers read target
//! neighbourhoods from an immutable pre-fork snapshot of the noise-filled
//! reference, so no worker ever observes another quadrant's in-flight
//! writes; results land in disjoint cells of a lock-guarded raster that is
//! unwrapped once every worker has joined. Only the brute-force strategy is
//! safe here: the coherence strategy reads freshly written neighbour cells
//! and must stay single-threaded.

use std::thread;

use crate::spatial::{Point, Raster, Region, SharedRaster, Size};
use crate::synthesis::color::Rgb;
use crate::synthesis::distance::NeighborhoodMetric;
use crate::synthesis::pixel::brute_force_region;
use crate::synthesis::{ProgressFn, ReferenceImage};

/// Split an output size into four quadrants
///
/// Quadrants partition the full rectangle: every cell belongs to exactly
/// one. Degenerate (empty) quadrants appear when an extent is 1.
pub fn split_quadrants(size: Size) -> [Region; 4] {
    let mid_x = (size.width / 2) as i32;
    let mid_y = (size.height / 2) as i32;
    let right = size.width as i32 - 1;
    let bottom = size.height as i32 - 1;

    [
        Region::new(Point::new(0, 0), Point::new(mid_x - 1, mid_y - 1)),
        Region::new(Point::new(mid_x, 0), Point::new(right, mid_y - 1)),
        Region::new(Point::new(0, mid_y), Point::new(mid_x - 1, bottom)),
        Region::new(Point::new(mid_x, mid_y), Point::new(right, bottom)),
    ]
}

/// Brute-force synthesis with one worker per output quadrant
///
/// Consumes the noise-filled reference image and returns the synthesised
/// one. The progress callback fires at phase boundaries only; quadrants
/// proceed independently, so no per-row ordering is guaranteed.
pub fn parallel_brute_force(
    reference: ReferenceImage,
    exemplar: &Raster<Rgb>,
    metric: &NeighborhoodMetric<'_>,
    similarity_threshold: f32,
    progress: ProgressFn<'_>,
) -> ReferenceImage {
    progress(0.0, "synthesising quadrants");
    let snapshot = reference.clone();
    let shared = SharedRaster::new(reference);
    let quadrants = split_quadrants(snapshot.size());

    thread::scope(|scope| {
        for quadrant in quadrants {
            if quadrant.is_empty() {
                continue;
            }
            let snapshot = &snapshot;
            let shared = &shared;
            scope.spawn(move || {
                let updates = brute_force_region(
                    snapshot,
                    exemplar,
                    metric,
                    similarity_threshold,
                    quadrant,
                );
                for (offset, value) in updates {
                    shared.set(offset, value);
                }
            });
        }
    });

    progress(1.0, "synthesising quadrants");
    shared.into_inner()
}
