//! Clustering of near-duplicate exemplar neighbourhoods
//!
//! A one-time preprocessing pass over the exemplar groups practically
//! identical neighbourhoods so the coherence-accelerated strategy only
//! examines group members instead of the whole exemplar. Group ids are
//! exemplar offsets; the first pixel processed for a group becomes its
//! representative and first member.

use bitvec::vec::BitVec;

use crate::spatial::{Point, Raster};
use crate::synthesis::color::Rgb;
use crate::synthesis::distance::{NeighborhoodMetric, TargetFrame};
use crate::synthesis::{ProgressFn, UNSET};

/// Precomputed similarity groups over the exemplar interior
#[derive(Debug, Clone)]
pub struct CoherenceMap {
    /// Representative offset per exemplar offset, [`UNSET`] outside the
    /// interior margin
    group_ids: Vec<i64>,
    /// Member offsets per representative, empty for non-representatives
    members: Vec<Vec<usize>>,
}

impl CoherenceMap {
    /// Cluster interior exemplar neighbourhoods below `coherence_threshold`
    ///
    /// Scans interior pixels (margin = neighbour radius) in row-major order.
    /// Each still-ungrouped pixel seeds a group and absorbs every later
    /// ungrouped interior pixel whose exemplar-to-exemplar block distance is
    /// strictly below the threshold. A grouped pixel is never reconsidered
    /// as a candidate, so the interior ends up partitioned exactly.
    pub fn build(
        exemplar: &Raster<Rgb>,
        metric: &NeighborhoodMetric<'_>,
        coherence_threshold: f32,
        progress: ProgressFn<'_>,
    ) -> Self {
        progress(0.0, "initialising similarity groups");
        let cell_count = exemplar.len();
        let mut group_ids = vec![UNSET; cell_count];
        let mut members: Vec<Vec<usize>> = vec![Vec::new(); cell_count];
        let mut grouped: BitVec = BitVec::repeat(false, cell_count);

        let size = exemplar.size();
        let k = metric.radius() as usize;
        if size.width <= 2 * k || size.height <= 2 * k {
            return Self { group_ids, members };
        }
        let interior_x = k..size.width - k;
        let interior_y = k..size.height - k;

        progress(0.0, "building coherence groups");
        for seed_y in interior_y.clone() {
            for seed_x in interior_x.clone() {
                let seed_offset = seed_y * size.width + seed_x;
                if grouped.get(seed_offset).is_some_and(|bit| *bit) {
                    continue;
                }
                grouped.set(seed_offset, true);
                if let Some(id) = group_ids.get_mut(seed_offset) {
                    *id = seed_offset as i64;
                }
                if let Some(group) = members.get_mut(seed_offset) {
                    group.push(seed_offset);
                }
                let seed = Point::new(seed_x as i32, seed_y as i32);

                // candidates strictly after the seed in row-major order
                for candidate_y in seed_y..interior_y.end {
                    let x_start = if candidate_y == seed_y {
                        seed_x + 1
                    } else {
                        interior_x.start
                    };
                    for candidate_x in x_start..interior_x.end {
                        let candidate_offset = candidate_y * size.width + candidate_x;
                        if grouped.get(candidate_offset).is_some_and(|bit| *bit) {
                            continue;
                        }
                        let candidate = Point::new(candidate_x as i32, candidate_y as i32);
                        let distance =
                            metric.block_distance(candidate, seed, TargetFrame::Exemplar);
                        if distance < coherence_threshold {
                            grouped.set(candidate_offset, true);
                            if let Some(id) = group_ids.get_mut(candidate_offset) {
                                *id = seed_offset as i64;
                            }
                            if let Some(group) = members.get_mut(seed_offset) {
                                group.push(candidate_offset);
                            }
                        }
                    }
                }
            }
            progress(
                seed_y as f32 / size.height as f32,
                "building coherence groups",
            );
        }

        Self { group_ids, members }
    }

    /// Representative offset of the group containing `offset`, if grouped
    pub fn group_of(&self, offset: usize) -> Option<usize> {
        match self.group_ids.get(offset).copied() {
            Some(id) if id != UNSET => Some(id as usize),
            _ => None,
        }
    }

    /// Member offsets of the group led by `representative`
    pub fn members_of(&self, representative: usize) -> &[usize] {
        self.members
            .get(representative)
            .map_or(&[], Vec::as_slice)
    }

    /// Number of non-empty groups
    pub fn group_count(&self) -> usize {
        self.members.iter().filter(|group| !group.is_empty()).count()
    }
}
