//! Tests for the bounds-checked raster container

use texweave::spatial::{Point, Raster, Size};

#[test]
fn test_filled_raster_has_uniform_cells() {
    let raster = Raster::filled(Size::new(3, 2), 7i64);
    assert_eq!(raster.len(), 6);
    assert!(raster.iter().all(|&cell| cell == 7));
}

#[test]
fn test_offset_and_point_addressing_agree() -> texweave::Result<()> {
    let size = Size::new(4, 3);
    let raster = Raster::from_cells(size, (0..12i64).collect())?;
    for offset in 0..raster.len() {
        let point = size.point_at(offset);
        assert_eq!(raster.get(offset), raster.at(point));
        assert_eq!(
            raster.at(point),
            raster.at_xy(point.x as usize, point.y as usize)
        );
    }
    Ok(())
}

#[test]
fn test_out_of_bounds_point_is_none() {
    let raster = Raster::filled(Size::new(2, 2), 0i64);
    assert!(raster.at(Point::new(-1, 0)).is_none());
    assert!(raster.at(Point::new(2, 0)).is_none());
    assert!(raster.at(Point::new(0, 2)).is_none());
}

#[test]
fn test_set_and_read_back() {
    let mut raster = Raster::filled(Size::new(3, 3), 0i64);
    raster.set(4, 9);
    raster.set_at(Point::new(2, 2), 5);
    assert_eq!(raster.cell(4), Some(9));
    assert_eq!(raster.at(Point::new(2, 2)), Some(&5));
}

#[test]
fn test_from_cells_rejects_size_mismatch() {
    let result = Raster::from_cells(Size::new(2, 2), vec![1i64, 2, 3]);
    assert!(result.is_err());
}

#[test]
fn test_as_slice_is_row_major() -> texweave::Result<()> {
    let raster = Raster::from_cells(Size::new(2, 2), vec![1i64, 2, 3, 4])?;
    assert_eq!(raster.as_slice(), &[1, 2, 3, 4]);
    assert_eq!(raster.at(Point::new(0, 1)), Some(&3));
    Ok(())
}
