//! Coordinate primitives: signed points, unsigned sizes, toroidal wrapping
//!
//! Neighbourhood iteration regularly steps outside image bounds, so points
//! are signed while sizes stay unsigned. Conversions between flat offsets
//! and points assume row-major layout throughout the crate.

/// A signed 2D coordinate
///
/// May hold negative components during neighbourhood iteration before
/// clipping or wrapping resolves it against a concrete [`Size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    /// Horizontal component
    pub x: i32,
    /// Vertical component
    pub y: i32,
}

impl Point {
    /// Create a point from components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by a signed delta
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A non-negative 2D extent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
}

impl Size {
    /// Create a size from width and height
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total cell count
    pub const fn len(self) -> usize {
        self.width * self.height
    }

    /// Whether either extent is zero
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Whether a point lies inside `[0,width) x [0,height)`
    pub const fn contains(self, point: Point) -> bool {
        point.x >= 0
            && (point.x as usize) < self.width
            && point.y >= 0
            && (point.y as usize) < self.height
    }

    /// Row-major flat offset of an in-bounds point
    ///
    /// The point must satisfy [`Self::contains`]; checked in debug builds only.
    pub const fn offset_of(self, point: Point) -> usize {
        debug_assert!(self.contains(point));
        point.y as usize * self.width + point.x as usize
    }

    /// Point corresponding to a row-major flat offset
    ///
    /// The offset must be below [`Self::len`]; checked in debug builds only.
    pub const fn point_at(self, offset: usize) -> Point {
        debug_assert!(offset < self.len());
        Point {
            x: (offset % self.width) as i32,
            y: (offset / self.width) as i32,
        }
    }

    /// Wrap a point toroidally into this size
    ///
    /// Negative and overflowing components wrap modulo width/height; a point
    /// already in range maps to itself.
    pub const fn wrap(self, point: Point) -> Point {
        Point {
            x: wrap_value(point.x, self.width),
            y: wrap_value(point.y, self.height),
        }
    }
}

/// Wrap a single coordinate into `[0, extent)`
pub const fn wrap_value(value: i32, extent: usize) -> i32 {
    debug_assert!(extent > 0);
    let extent = extent as i32;
    ((value % extent) + extent) % extent
}

/// Axis-aligned rectangle of cells, inclusive on both corners
///
/// Used by the tiling driver to describe output quadrants. An empty region
/// has `max` strictly below `min` on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Minimum corner (inclusive)
    pub min: Point,
    /// Maximum corner (inclusive)
    pub max: Point,
}

impl Region {
    /// Create a region from inclusive corners
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Whether the region covers no cells
    pub const fn is_empty(self) -> bool {
        self.max.x < self.min.x || self.max.y < self.min.y
    }

    /// Number of covered cells
    pub const fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.max.x - self.min.x + 1) as usize * (self.max.y - self.min.y + 1) as usize
        }
    }

    /// Whether a point falls inside the region
    pub const fn contains(self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}
