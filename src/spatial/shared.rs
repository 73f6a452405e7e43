//! Reader/writer-locked raster for strategies that write concurrently
//!
//! The single-owner [`Raster`] covers every single-threaded strategy; the
//! parallel tiling driver instead writes its disjoint quadrant results
//! through this guard. The choice between the two is made by the caller at
//! construction time rather than by a build flag.

use std::sync::{PoisonError, RwLock};

use crate::spatial::geometry::Point;
use crate::spatial::raster::Raster;

/// A raster behind an `RwLock`, shareable across scoped worker threads
#[derive(Debug)]
pub struct SharedRaster<T> {
    inner: RwLock<Raster<T>>,
}

impl<T: Copy> SharedRaster<T> {
    /// Wrap an owned raster for shared access
    pub const fn new(raster: Raster<T>) -> Self {
        Self {
            inner: RwLock::new(raster),
        }
    }

    /// Copy of the cell at a flat offset, taken under a read lock
    pub fn cell(&self, offset: usize) -> Option<T> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .cell(offset)
    }

    /// Copy of the cell at a point, taken under a read lock
    pub fn at(&self, point: Point) -> Option<T> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .at(point)
            .copied()
    }

    /// Overwrite the cell at a flat offset under a write lock
    pub fn set(&self, offset: usize, value: T) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set(offset, value);
    }

    /// Recover the owned raster once all workers have joined
    pub fn into_inner(self) -> Raster<T> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
