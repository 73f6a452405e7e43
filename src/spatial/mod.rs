//! Spatial data structures shared by every synthesis strategy
//!
//! This module contains the coordinate and container primitives:
//! - Signed points, unsigned sizes and toroidal wrapping
//! - The bounds-checked 2D raster used for exemplar and reference data
//! - A lock-guarded raster variant for concurrent strategies

/// Points, sizes, regions and coordinate conversions
pub mod geometry;
/// Flat, dimension-indexed pixel container
pub mod raster;
/// Reader/writer-locked raster for concurrent access
pub mod shared;

pub use geometry::{Point, Region, Size};
pub use raster::Raster;
pub use shared::SharedRaster;
