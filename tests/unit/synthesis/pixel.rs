//! Tests for noise prefill and the per-pixel synthesis passes

use texweave::math::UniformSource;
use texweave::spatial::{Raster, Size};
use texweave::synthesis::coherence::CoherenceMap;
use texweave::synthesis::pixel::{
    brute_force_pass, coherence_pass, fill_with_noise, good_enough_distance,
};
use texweave::synthesis::{NeighborhoodMetric, Rgb};

fn greyscale_ramp(size: Size) -> texweave::Result<Raster<Rgb>> {
    let cells = (0..size.len())
        .map(|offset| {
            let level = offset as f32 / size.len() as f32;
            Rgb::new(level, level, level)
        })
        .collect();
    Raster::from_cells(size, cells)
}

fn silent() -> impl FnMut(f32, &str) {
    |_, _| {}
}

#[test]
fn test_noise_prefill_stays_in_exemplar_range() {
    let mut reference = Raster::filled(Size::new(8, 8), -1i64);
    let mut source = UniformSource::new(42, 0.0, 16.0);
    fill_with_noise(&mut reference, &mut source);
    assert!(reference.iter().all(|&offset| (0..16).contains(&offset)));
}

#[test]
fn test_noise_prefill_is_seed_deterministic() {
    let mut first = Raster::filled(Size::new(6, 6), -1i64);
    let mut second = Raster::filled(Size::new(6, 6), -1i64);
    let mut source_a = UniformSource::new(9, 0.0, 25.0);
    let mut source_b = UniformSource::new(9, 0.0, 25.0);
    fill_with_noise(&mut first, &mut source_a);
    fill_with_noise(&mut second, &mut source_b);
    assert_eq!(first, second);
}

#[test]
fn test_good_enough_bound_scales_threshold() {
    assert!((good_enough_distance(0.02) - 0.028).abs() < 1e-6);
}

#[test]
fn test_brute_force_resolves_every_cell() -> texweave::Result<()> {
    let exemplar = greyscale_ramp(Size::new(6, 6))?;
    let metric = NeighborhoodMetric::new(&exemplar, 1, 0.0);
    let mut reference = Raster::filled(Size::new(5, 5), -1i64);
    let mut source = UniformSource::new(11, 0.0, exemplar.len() as f64);
    fill_with_noise(&mut reference, &mut source);

    let mut progress = silent();
    brute_force_pass(&mut reference, &exemplar, &metric, 0.0, &mut progress);
    assert!(
        reference
            .iter()
            .all(|&offset| (0..exemplar.len() as i64).contains(&offset))
    );
    Ok(())
}

#[test]
fn test_brute_force_is_deterministic() -> texweave::Result<()> {
    let exemplar = greyscale_ramp(Size::new(6, 6))?;
    let metric = NeighborhoodMetric::new(&exemplar, 1, 0.0);
    let mut runs = Vec::new();
    for _ in 0..2 {
        let mut reference = Raster::filled(Size::new(5, 5), -1i64);
        let mut source = UniformSource::new(123, 0.0, exemplar.len() as f64);
        fill_with_noise(&mut reference, &mut source);
        let mut progress = silent();
        brute_force_pass(&mut reference, &exemplar, &metric, 0.0, &mut progress);
        runs.push(reference);
    }
    assert_eq!(runs.first(), runs.last());
    Ok(())
}

#[test]
fn test_coherence_pass_resolves_every_cell() -> texweave::Result<()> {
    let exemplar = greyscale_ramp(Size::new(7, 7))?;
    let metric = NeighborhoodMetric::new(&exemplar, 1, 0.0);
    let mut progress = silent();
    let map = CoherenceMap::build(&exemplar, &metric, 0.05, &mut progress);

    let mut reference = Raster::filled(Size::new(6, 6), -1i64);
    let mut source = UniformSource::new(77, 0.0, exemplar.len() as f64);
    fill_with_noise(&mut reference, &mut source);

    coherence_pass(&mut reference, &exemplar, &metric, &map, &mut progress);
    assert!(
        reference
            .iter()
            .all(|&offset| (0..exemplar.len() as i64).contains(&offset))
    );
    Ok(())
}

#[test]
fn test_progress_reports_each_row() -> texweave::Result<()> {
    let exemplar = greyscale_ramp(Size::new(6, 6))?;
    let metric = NeighborhoodMetric::new(&exemplar, 1, 0.0);
    let mut reference = Raster::filled(Size::new(4, 3), -1i64);
    let mut source = UniformSource::new(5, 0.0, exemplar.len() as f64);
    fill_with_noise(&mut reference, &mut source);

    let mut rows = 0usize;
    let mut progress = |_fraction: f32, phase: &str| {
        if phase == "filling output image" {
            rows += 1;
        }
    };
    brute_force_pass(&mut reference, &exemplar, &metric, 0.0, &mut progress);
    assert_eq!(rows, 3);
    Ok(())
}
