//! Shared numeric primitives: normalization and toroidal blur.

use crate::core::Shape;
use crate::error::{LocalizationError, Result};
use crate::grid::BeliefGrid;

/// Smallest total mass that can be normalized.
///
/// Anything below the smallest normal `f64` is treated as zero; dividing by
/// a subnormal would overflow to infinity.
const MIN_TOTAL: f64 = f64::MIN_POSITIVE;

/// Scale a grid so its cells sum to 1.0.
///
/// Fails with `DegenerateDistribution` when the total is zero, subnormal or
/// not finite.
pub fn normalize(grid: &BeliefGrid) -> Result<BeliefGrid> {
    normalize_cells(grid.shape(), grid.as_slice().to_vec())
}

/// In-place normalization of freshly computed cells.
pub(crate) fn normalize_cells(shape: Shape, mut cells: Vec<f64>) -> Result<BeliefGrid> {
    let total: f64 = cells.iter().sum();
    if !total.is_finite() || total < MIN_TOTAL {
        return Err(LocalizationError::DegenerateDistribution { total });
    }
    for p in &mut cells {
        *p /= total;
    }
    Ok(BeliefGrid::from_parts(shape, cells))
}

/// Diffuse a fraction of every cell's mass to its four toroidal neighbors.
///
/// ```text
/// new[c] = (1 - k) * old[c] + (k / 4) * (old[up] + old[down] + old[left] + old[right])
/// ```
///
/// With `k = 0` the output equals the normalized input. On grids only one
/// cell high or wide a neighbor can be the cell itself (or two neighbors can
/// coincide); it is still counted once per direction, which keeps the
/// operation mass-preserving. The result is renormalized to absorb
/// floating-point drift.
///
/// Fails with `InvalidParameter` unless `0 <= coefficient <= 1`.
pub fn blur(grid: &BeliefGrid, coefficient: f64) -> Result<BeliefGrid> {
    check_blurring(coefficient)?;

    if coefficient == 0.0 {
        return normalize(grid);
    }

    let shape = grid.shape();
    let old = grid.as_slice();

    let keep = 1.0 - coefficient;
    let spread = coefficient / 4.0;
    let cells = shape
        .coords()
        .map(|coord| {
            let neighbors: f64 = coord
                .neighbors_4(shape)
                .iter()
                .map(|&n| old[shape.index(n)])
                .sum();
            keep * old[shape.index(coord)] + spread * neighbors
        })
        .collect();

    normalize_cells(shape, cells)
}

pub(crate) fn check_blurring(coefficient: f64) -> Result<()> {
    if (0.0..=1.0).contains(&coefficient) {
        Ok(())
    } else {
        Err(LocalizationError::invalid_parameter(
            "blurring",
            coefficient,
            "must be within [0, 1]",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridCoord;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_scales_to_one() {
        let grid = BeliefGrid::from_rows(vec![vec![1.0, 3.0], vec![0.0, 4.0]]).unwrap();
        let n = normalize(&grid).unwrap();
        assert_eq!(n.to_rows(), vec![vec![0.125, 0.375], vec![0.0, 0.5]]);
    }

    #[test]
    fn test_normalize_rejects_zero_mass() {
        let grid = BeliefGrid::from_rows(vec![vec![0.0, 0.0]]).unwrap();
        assert_eq!(
            normalize(&grid),
            Err(LocalizationError::DegenerateDistribution { total: 0.0 })
        );
    }

    #[test]
    fn test_normalize_rejects_overflowing_mass() {
        let grid = BeliefGrid::from_rows(vec![vec![f64::MAX, f64::MAX]]).unwrap();
        assert!(matches!(
            normalize(&grid),
            Err(LocalizationError::DegenerateDistribution { .. })
        ));
    }

    #[test]
    fn test_blur_zero_is_identity() {
        let grid = BeliefGrid::from_rows(vec![vec![0.1, 0.2], vec![0.3, 0.4]]).unwrap();
        let blurred = blur(&grid, 0.0).unwrap();
        for (a, b) in blurred.as_slice().iter().zip(grid.as_slice()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_blur_spreads_to_four_neighbors() {
        let shape = Shape::new(3, 3);
        let grid = BeliefGrid::one_hot(shape, GridCoord::new(1, 1)).unwrap();
        let b = blur(&grid, 0.2).unwrap();

        assert_relative_eq!(b.get(GridCoord::new(1, 1)).unwrap(), 0.8, epsilon = 1e-12);
        for n in [(0, 1), (2, 1), (1, 0), (1, 2)] {
            assert_relative_eq!(b.get(GridCoord::new(n.0, n.1)).unwrap(), 0.05, epsilon = 1e-12);
        }
        for corner in [(0, 0), (0, 2), (2, 0), (2, 2)] {
            assert_eq!(b.get(GridCoord::new(corner.0, corner.1)), Some(0.0));
        }
    }

    #[test]
    fn test_blur_wraps_at_edges() {
        let shape = Shape::new(3, 4);
        let grid = BeliefGrid::one_hot(shape, GridCoord::new(0, 0)).unwrap();
        let b = blur(&grid, 1.0).unwrap();

        assert_eq!(b.get(GridCoord::new(0, 0)), Some(0.0));
        assert_relative_eq!(b.get(GridCoord::new(2, 0)).unwrap(), 0.25);
        assert_relative_eq!(b.get(GridCoord::new(0, 3)).unwrap(), 0.25);
        assert_relative_eq!(b.total(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_blur_single_row_grid() {
        // Up and down neighbors of a 1-high grid are the cell itself
        let shape = Shape::new(1, 3);
        let grid = BeliefGrid::one_hot(shape, GridCoord::new(0, 1)).unwrap();
        let b = blur(&grid, 0.4).unwrap();

        assert_relative_eq!(b.get(GridCoord::new(0, 1)).unwrap(), 0.6 + 0.2, epsilon = 1e-12);
        assert_relative_eq!(b.get(GridCoord::new(0, 0)).unwrap(), 0.1, epsilon = 1e-12);
        assert_relative_eq!(b.get(GridCoord::new(0, 2)).unwrap(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_blur_rejects_out_of_range() {
        let grid = BeliefGrid::from_rows(vec![vec![1.0]]).unwrap();
        for k in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                blur(&grid, k),
                Err(LocalizationError::InvalidParameter { name: "blurring", .. })
            ));
        }
    }
}
