//! Tests for coherence-group construction over the exemplar interior

use texweave::spatial::{Raster, Size};
use texweave::synthesis::coherence::CoherenceMap;
use texweave::synthesis::{NeighborhoodMetric, Rgb};

fn noisy_ramp(size: Size, scale: f32) -> texweave::Result<Raster<Rgb>> {
    let cells = (0..size.len())
        .map(|offset| {
            let level = offset as f32 * scale;
            Rgb::new(level, level, level)
        })
        .collect();
    Raster::from_cells(size, cells)
}

fn silent() -> impl FnMut(f32, &str) {
    |_, _| {}
}

#[test]
fn test_interior_offsets_partition_into_groups() -> texweave::Result<()> {
    let size = Size::new(5, 5);
    let exemplar = noisy_ramp(size, 0.03)?;
    let metric = NeighborhoodMetric::new(&exemplar, 1, 0.0);
    let mut progress = silent();
    let map = CoherenceMap::build(&exemplar, &metric, 0.002, &mut progress);

    let interior: Vec<usize> = (1..4)
        .flat_map(|y| (1..4).map(move |x| y * 5 + x))
        .collect();

    let mut seen = Vec::new();
    for &offset in &interior {
        if let Some(representative) = map.group_of(offset) {
            if representative == offset {
                seen.extend_from_slice(map.members_of(offset));
            }
        }
    }
    seen.sort_unstable();
    assert_eq!(seen, interior);

    // every member resolves back to its representative
    for &offset in &interior {
        let representative = map.group_of(offset);
        assert!(representative.is_some());
        if let Some(rep) = representative {
            assert!(map.members_of(rep).contains(&offset));
        }
    }
    Ok(())
}

#[test]
fn test_near_identical_neighbourhoods_share_one_group() -> texweave::Result<()> {
    let size = Size::new(5, 5);
    // per-pixel differences far below the grouping bound
    let exemplar = noisy_ramp(size, 1e-4)?;
    let metric = NeighborhoodMetric::new(&exemplar, 1, 0.0);
    let mut progress = silent();
    let map = CoherenceMap::build(&exemplar, &metric, 1.0, &mut progress);

    assert_eq!(map.group_count(), 1);
    // the first interior pixel (1, 1) leads the single group
    let representative = 6;
    assert_eq!(map.members_of(representative).len(), 9);
    assert_eq!(map.group_of(3 * 5 + 3), Some(representative));
    Ok(())
}

#[test]
fn test_exterior_offsets_stay_ungrouped() -> texweave::Result<()> {
    let size = Size::new(5, 5);
    let exemplar = noisy_ramp(size, 0.03)?;
    let metric = NeighborhoodMetric::new(&exemplar, 1, 0.0);
    let mut progress = silent();
    let map = CoherenceMap::build(&exemplar, &metric, 0.01, &mut progress);

    for offset in [0usize, 4, 20, 24, 2, 10] {
        assert_eq!(map.group_of(offset), None);
    }
    Ok(())
}

#[test]
fn test_exemplar_smaller_than_window_yields_no_groups() {
    let exemplar = Raster::filled(Size::new(3, 3), Rgb::default());
    let metric = NeighborhoodMetric::new(&exemplar, 2, 0.0);
    let mut progress = silent();
    let map = CoherenceMap::build(&exemplar, &metric, 0.5, &mut progress);
    assert_eq!(map.group_count(), 0);
}
