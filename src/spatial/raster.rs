//! Flat, dimension-indexed cell container with bounds-checked addressing
//!
//! Backs both the RGB exemplar image and the integer reference image. Cells
//! are addressable three ways: by flat row-major offset, by `(x, y)` pair,
//! or by [`Point`]. Out-of-bounds point access yields `None` rather than
//! panicking, which keeps neighbourhood clipping branch-free at call sites.

use ndarray::Array2;

use crate::spatial::geometry::{Point, Size};

/// Row-major 2D cell container of fixed size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster<T> {
    cells: Array2<T>,
    size: Size,
}

impl<T: Clone> Raster<T> {
    /// Create a raster with every cell set to `value`
    pub fn filled(size: Size, value: T) -> Self {
        Self {
            cells: Array2::from_elem((size.height, size.width), value),
            size,
        }
    }

    /// Create a raster from row-major cell data
    ///
    /// # Errors
    ///
    /// Returns a computation error when `cells.len() != size.len()`.
    pub fn from_cells(size: Size, cells: Vec<T>) -> crate::Result<Self> {
        let cells = Array2::from_shape_vec((size.height, size.width), cells).map_err(|e| {
            crate::io::error::computation_error("raster construction", &e.to_string())
        })?;
        Ok(Self { cells, size })
    }
}

impl<T> Raster<T> {
    /// The raster's extent
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Total cell count
    pub const fn len(&self) -> usize {
        self.size.len()
    }

    /// Whether the raster holds no cells
    pub const fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Cell at a flat row-major offset
    pub fn get(&self, offset: usize) -> Option<&T> {
        self.cells.as_slice().and_then(|cells| cells.get(offset))
    }

    /// Cell at a point, `None` when the point is out of bounds
    pub fn at(&self, point: Point) -> Option<&T> {
        if self.size.contains(point) {
            self.cells.get((point.y as usize, point.x as usize))
        } else {
            None
        }
    }

    /// Cell at an `(x, y)` pair, `None` when out of bounds
    pub fn at_xy(&self, x: usize, y: usize) -> Option<&T> {
        self.cells.get((y, x))
    }

    /// Overwrite the cell at a flat offset
    ///
    /// The offset must be below [`Self::len`]; silently ignored otherwise
    /// (checked in debug builds).
    pub fn set(&mut self, offset: usize, value: T) {
        debug_assert!(offset < self.len());
        if let Some(cell) = self
            .cells
            .as_slice_mut()
            .and_then(|cells| cells.get_mut(offset))
        {
            *cell = value;
        }
    }

    /// Overwrite the cell at a point
    ///
    /// The point must be in bounds; silently ignored otherwise (checked in
    /// debug builds).
    pub fn set_at(&mut self, point: Point, value: T) {
        debug_assert!(self.size.contains(point));
        if let Some(cell) = self.cells.get_mut((point.y as usize, point.x as usize)) {
            *cell = value;
        }
    }

    /// Row-major view over all cells
    pub fn as_slice(&self) -> &[T] {
        self.cells.as_slice().unwrap_or(&[])
    }

    /// Iterate over cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }
}

impl<T: Copy> Raster<T> {
    /// Copy of the cell at a flat offset
    ///
    /// The offset must be below [`Self::len`]; checked in debug builds.
    pub fn cell(&self, offset: usize) -> Option<T> {
        debug_assert!(offset < self.len());
        self.get(offset).copied()
    }
}
