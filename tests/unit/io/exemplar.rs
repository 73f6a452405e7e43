//! Tests for exemplar decoding

use image::{ImageBuffer, Rgb as ImageRgb};

use texweave::SynthesisError;
use texweave::io::exemplar::load_exemplar;

#[test]
fn test_missing_file_reports_load_error() {
    let result = load_exemplar("does/not/exist.png");
    assert!(matches!(result, Err(SynthesisError::ImageLoad { .. })));
}

#[test]
fn test_decodes_rgb_png_to_unit_range() -> texweave::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("exemplar.png");

    let img: ImageBuffer<ImageRgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(3, 2, |x, y| ImageRgb([(x * 60) as u8, (y * 100) as u8, 255]));
    img.save(&path)?;

    let exemplar = load_exemplar(&path)?;
    assert_eq!(exemplar.size().width, 3);
    assert_eq!(exemplar.size().height, 2);

    let first = exemplar.cell(0).ok_or_else(|| {
        texweave::io::error::computation_error("test lookup", &"missing pixel")
    })?;
    assert!((first.r - 0.0).abs() < 1e-6);
    assert!((first.b - 1.0).abs() < 1e-6);

    let last = exemplar.cell(5).ok_or_else(|| {
        texweave::io::error::computation_error("test lookup", &"missing pixel")
    })?;
    assert!((last.r - 120.0 / 255.0).abs() < 1e-6);
    assert!((last.g - 100.0 / 255.0).abs() < 1e-6);
    Ok(())
}
