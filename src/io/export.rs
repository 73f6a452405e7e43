//! Output encoding from the fully resolved reference image
//!
//! Every reference cell is dereferenced to its exemplar pixel, scaled back
//! to 8-bit channels by truncation and encoded. JPEG outputs use a fixed
//! quality setting; other formats go through extension-based encoding.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageBuffer, ImageEncoder};

use crate::io::configuration::JPEG_QUALITY;
use crate::io::error::SynthesisError;
use crate::spatial::Raster;
use crate::synthesis::color::Rgb;
use crate::synthesis::ReferenceImage;

/// Resolve the reference image against the exemplar into raw RGB bytes
///
/// # Errors
///
/// Returns an `InvalidExemplarOffset` error if any cell holds an offset
/// outside the exemplar (including the unset sentinel).
pub fn resolve_to_bytes(
    exemplar: &Raster<Rgb>,
    reference: &ReferenceImage,
) -> crate::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(reference.len() * 3);
    for &offset in reference.iter() {
        let pixel = usize::try_from(offset)
            .ok()
            .and_then(|offset| exemplar.cell(offset))
            .ok_or(SynthesisError::InvalidExemplarOffset {
                offset,
                exemplar_len: exemplar.len(),
            })?;
        buffer.extend_from_slice(&pixel.to_bytes());
    }
    Ok(buffer)
}

/// Encode the resolved reference image to an output file
///
/// # Errors
///
/// Returns an error if:
/// - A reference cell holds an offset outside the exemplar
/// - The output file cannot be created
/// - Encoding fails
pub fn export_reference<P: AsRef<Path>>(
    exemplar: &Raster<Rgb>,
    reference: &ReferenceImage,
    output_path: P,
) -> crate::Result<()> {
    let path = output_path.as_ref();
    let buffer = resolve_to_bytes(exemplar, reference)?;
    let size = reference.size();
    let width = size.width as u32;
    let height = size.height as u32;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    if matches!(extension.as_deref(), Some("jpg" | "jpeg")) {
        let file = File::create(path).map_err(|e| SynthesisError::FileSystem {
            path: path.to_path_buf(),
            operation: "create output file",
            source: e,
        })?;
        let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), JPEG_QUALITY);
        encoder
            .write_image(&buffer, width, height, ExtendedColorType::Rgb8)
            .map_err(|e| SynthesisError::ImageExport {
                path: path.to_path_buf(),
                source: e,
            })?;
        return Ok(());
    }

    let img: Option<ImageBuffer<image::Rgb<u8>, Vec<u8>>> =
        ImageBuffer::from_raw(width, height, buffer);
    let img = img.ok_or_else(|| {
        crate::io::error::computation_error("output assembly", &"buffer size mismatch")
    })?;
    img.save(path).map_err(|e| SynthesisError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
