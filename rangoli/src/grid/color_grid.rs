//! Static color map of the world.

use std::collections::BTreeSet;
use std::fmt;

use crate::core::{Color, GridCoord, Shape};
use crate::error::{LocalizationError, Result};

/// Immutable rectangular grid of color labels.
///
/// Ground truth of the world, fixed for a whole filtering session.
/// Stored row-major in a flat vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorGrid {
    shape: Shape,
    cells: Vec<Color>,
}

impl ColorGrid {
    /// Build a grid from rows of labels.
    ///
    /// Fails with `InvalidDimensions` when there are no rows, the first row
    /// is empty, or any row length differs from the first.
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self> {
        let shape = checked_shape(&rows)?;
        let cells = rows.into_iter().flatten().collect();
        Ok(Self { shape, cells })
    }

    /// Parse the textual world format: one row per non-blank line, one cell
    /// per non-whitespace character.
    ///
    /// ```text
    /// r g g
    /// g g r
    /// ```
    ///
    /// Separating spaces are optional, so `rgg` and `r g g` are the same row.
    pub fn parse(text: &str) -> Result<Self> {
        let rows = text
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(Color)
                    .collect::<Vec<_>>()
            })
            .filter(|row| !row.is_empty())
            .collect();
        Self::from_rows(rows)
    }

    /// Grid dimensions
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of rows
    #[inline]
    pub fn height(&self) -> usize {
        self.shape.height
    }

    /// Number of columns
    #[inline]
    pub fn width(&self) -> usize {
        self.shape.width
    }

    /// Color at a coordinate (None if outside the grid)
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<Color> {
        self.shape
            .contains(coord)
            .then(|| self.cells[self.shape.index(coord)])
    }

    /// Row-major cell labels
    #[inline]
    pub fn as_slice(&self) -> &[Color] {
        &self.cells
    }

    /// Iterate over (coordinate, color) in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, Color)> + '_ {
        self.shape.coords().zip(self.cells.iter().copied())
    }

    /// Number of cells painted with `color`
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    /// Distinct labels present in the world, sorted
    pub fn colors(&self) -> Vec<Color> {
        self.cells
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl fmt::Display for ColorGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.shape.width) {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Validate that `rows` is a non-empty rectangle and return its shape.
pub(crate) fn checked_shape<T>(rows: &[Vec<T>]) -> Result<Shape> {
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);
    if height == 0 || width == 0 {
        return Err(LocalizationError::InvalidDimensions { height, width });
    }
    if let Some(ragged) = rows.iter().find(|r| r.len() != width) {
        return Err(LocalizationError::InvalidDimensions {
            height,
            width: ragged.len(),
        });
    }
    Ok(Shape::new(height, width))
}
