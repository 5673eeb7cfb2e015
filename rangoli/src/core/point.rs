//! Coordinate, displacement and shape types for toroidal grids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg};

/// Grid dimensions in cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    /// Number of rows
    pub height: usize,
    /// Number of columns
    pub width: usize,
}

impl Shape {
    /// Create a new shape
    #[inline]
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }

    /// Does this shape have no cells?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Is the coordinate inside the grid?
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// Row-major flat index of a coordinate
    #[inline]
    pub fn index(&self, coord: GridCoord) -> usize {
        coord.row * self.width + coord.col
    }

    /// Coordinate for a row-major flat index
    #[inline]
    pub fn coord(&self, index: usize) -> GridCoord {
        GridCoord::new(index / self.width, index % self.width)
    }

    /// Iterate over every coordinate in row-major order
    pub fn coords(&self) -> impl Iterator<Item = GridCoord> + use<> {
        let shape = *self;
        (0..shape.cell_count()).map(move |i| shape.coord(i))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// Grid coordinates (row, column) on a bounded grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// Row index (0 = top)
    pub row: usize,
    /// Column index (0 = left)
    pub col: usize,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Apply a displacement on a torus of the given shape.
    ///
    /// Uses Euclidean remainder, so the result is never negative and any
    /// displacement magnitude is accepted.
    #[inline]
    pub fn wrapping_offset(self, d: Displacement, shape: Shape) -> GridCoord {
        GridCoord::new(
            wrap(self.row, d.dy, shape.height),
            wrap(self.col, d.dx, shape.width),
        )
    }

    /// The 4 toroidal neighbors (up, down, left, right)
    #[inline]
    pub fn neighbors_4(self, shape: Shape) -> [GridCoord; 4] {
        [
            self.wrapping_offset(Displacement::UP, shape),
            self.wrapping_offset(Displacement::DOWN, shape),
            self.wrapping_offset(Displacement::LEFT, shape),
            self.wrapping_offset(Displacement::RIGHT, shape),
        ]
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[inline]
fn wrap(index: usize, delta: i64, len: usize) -> usize {
    let len = len as i64;
    (index as i64 + delta.rem_euclid(len)).rem_euclid(len) as usize
}

/// Intended motion in rows (`dy`) and columns (`dx`).
///
/// Interpreted modulo the grid dimensions, so the sign and magnitude are
/// unrestricted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Displacement {
    /// Row change (positive = down)
    pub dy: i64,
    /// Column change (positive = right)
    pub dx: i64,
}

impl Displacement {
    /// No motion
    pub const ZERO: Displacement = Displacement { dy: 0, dx: 0 };
    /// One row up
    pub const UP: Displacement = Displacement { dy: -1, dx: 0 };
    /// One row down
    pub const DOWN: Displacement = Displacement { dy: 1, dx: 0 };
    /// One column left
    pub const LEFT: Displacement = Displacement { dy: 0, dx: -1 };
    /// One column right
    pub const RIGHT: Displacement = Displacement { dy: 0, dx: 1 };

    /// Create a new displacement
    #[inline]
    pub fn new(dy: i64, dx: i64) -> Self {
        Self { dy, dx }
    }

    /// Is this the zero displacement?
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.dy == 0 && self.dx == 0
    }
}

impl Add for Displacement {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Displacement::new(self.dy + other.dy, self.dx + other.dx)
    }
}

impl Neg for Displacement {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Displacement::new(-self.dy, -self.dx)
    }
}
