//! Tests for the lock-guarded raster variant

use std::thread;

use texweave::spatial::{Point, Raster, SharedRaster, Size};

#[test]
fn test_shared_set_and_read() {
    let shared = SharedRaster::new(Raster::filled(Size::new(2, 2), 0i64));
    shared.set(3, 11);
    assert_eq!(shared.cell(3), Some(11));
    assert_eq!(shared.at(Point::new(1, 1)), Some(11));
}

#[test]
fn test_into_inner_recovers_all_writes() {
    let shared = SharedRaster::new(Raster::filled(Size::new(4, 1), 0i64));
    for offset in 0..4 {
        shared.set(offset, offset as i64 * 10);
    }
    let raster = shared.into_inner();
    assert_eq!(raster.as_slice(), &[0, 10, 20, 30]);
}

#[test]
fn test_disjoint_concurrent_writes() {
    let shared = SharedRaster::new(Raster::filled(Size::new(8, 8), -1i64));
    thread::scope(|scope| {
        let shared = &shared;
        for worker in 0..4i64 {
            scope.spawn(move || {
                for slot in 0..16i64 {
                    shared.set((worker * 16 + slot) as usize, worker);
                }
            });
        }
    });
    let raster = shared.into_inner();
    assert!(raster.iter().all(|&cell| cell >= 0));
    assert_eq!(raster.cell(0), Some(0));
    assert_eq!(raster.cell(63), Some(3));
}
