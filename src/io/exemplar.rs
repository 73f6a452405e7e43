//! Exemplar decoding into the pixel container
//!
//! The exemplar is decoded once into unit-range RGB floats and never
//! mutated afterwards. Sources that are not plain three-channel RGB are
//! rejected rather than silently converted.

use std::path::Path;

use crate::io::error::SynthesisError;
use crate::spatial::{Raster, Size};
use crate::synthesis::color::Rgb;

/// Decode an exemplar image file into a pixel raster
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or is not a valid image
/// - The image does not carry exactly three colour channels
/// - The decoded sample count is inconsistent with the reported size
pub fn load_exemplar<P: AsRef<Path>>(path: P) -> crate::Result<Raster<Rgb>> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| SynthesisError::ImageLoad {
        path: path_buf,
        source: e,
    })?;

    let channels = img.color().channel_count();
    if channels != 3 {
        return Err(SynthesisError::InvalidSourceData {
            reason: format!("expected 3 colour channels, found {channels}"),
        });
    }

    let rgb = img.to_rgb8();
    let size = Size::new(rgb.width() as usize, rgb.height() as usize);
    let pixels: Vec<Rgb> = rgb
        .pixels()
        .map(|pixel| {
            let image::Rgb([r, g, b]) = *pixel;
            Rgb::from_bytes(r, g, b)
        })
        .collect();

    Raster::from_cells(size, pixels)
}
