//! Probability distribution over grid cells.

use std::fmt;

use super::color_grid::checked_shape;
use crate::core::{GridCoord, Shape};
use crate::error::{LocalizationError, Result};

/// Default tolerance for [`BeliefGrid::is_normalized`]
pub const SUM_TOLERANCE: f64 = 1e-6;

/// The robot's belief: one non-negative probability per cell.
///
/// Belief grids are values. Every filter update returns a new grid and
/// leaves its input untouched, which is why there are no public mutators.
#[derive(Clone, Debug, PartialEq)]
pub struct BeliefGrid {
    shape: Shape,
    cells: Vec<f64>,
}

impl BeliefGrid {
    /// Build a grid from rows of weights.
    ///
    /// Entries must be finite and non-negative. The rows are NOT normalized;
    /// pass the result through [`crate::filter::normalize`] if needed.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let shape = checked_shape(&rows)?;
        let cells: Vec<f64> = rows.into_iter().flatten().collect();
        if let Some(&bad) = cells.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(LocalizationError::invalid_parameter(
                "belief",
                bad,
                "must be finite and non-negative",
            ));
        }
        Ok(Self { shape, cells })
    }

    /// Point mass at `coord`.
    pub fn one_hot(shape: Shape, coord: GridCoord) -> Result<Self> {
        if shape.is_empty() || !shape.contains(coord) {
            return Err(LocalizationError::InvalidDimensions {
                height: shape.height,
                width: shape.width,
            });
        }
        let mut cells = vec![0.0; shape.cell_count()];
        cells[shape.index(coord)] = 1.0;
        Ok(Self { shape, cells })
    }

    /// Assemble from already validated parts.
    pub(crate) fn from_parts(shape: Shape, cells: Vec<f64>) -> Self {
        debug_assert_eq!(shape.cell_count(), cells.len());
        Self { shape, cells }
    }

    /// Grid dimensions
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Probability at a coordinate (None if outside the grid)
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<f64> {
        self.shape
            .contains(coord)
            .then(|| self.cells[self.shape.index(coord)])
    }

    /// Row-major probabilities
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.cells
    }

    /// Iterate over (coordinate, probability) in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, f64)> + '_ {
        self.shape.coords().zip(self.cells.iter().copied())
    }

    /// Sum of all cells
    pub fn total(&self) -> f64 {
        self.cells.iter().sum()
    }

    /// Does the grid sum to 1.0 within `tolerance`?
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.total() - 1.0).abs() <= tolerance
    }

    /// Most probable cell; ties resolve to the first in row-major order.
    pub fn most_likely(&self) -> GridCoord {
        let mut best = 0;
        for (i, &p) in self.cells.iter().enumerate() {
            if p > self.cells[best] {
                best = i;
            }
        }
        self.shape.coord(best)
    }

    /// Highest cell probability
    pub fn max_probability(&self) -> f64 {
        self.cells.iter().copied().fold(0.0, f64::max)
    }

    /// Shannon entropy in nats (0 for a point mass, ln(H·W) when uniform)
    pub fn entropy(&self) -> f64 {
        -self
            .cells
            .iter()
            .filter(|&&p| p > 0.0)
            .map(|&p| p * p.ln())
            .sum::<f64>()
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.cells
            .chunks(self.shape.width)
            .map(<[f64]>::to_vec)
            .collect()
    }
}

impl fmt::Display for BeliefGrid {
    /// One row per line. Precision defaults to 3 decimals (`{:.5}` overrides).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        for row in self.cells.chunks(self.shape.width) {
            let line: Vec<String> = row.iter().map(|p| format!("{p:.precision$}")).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
