//! Motion (prediction) update on a toroidal grid.

use crate::core::Displacement;
use crate::error::{LocalizationError, Result};
use crate::grid::BeliefGrid;

use super::primitives::{blur, check_blurring};

/// Noiseless wraparound translation by `displacement`.
///
/// Translation by a constant is a permutation of the cells, so each
/// destination receives mass from exactly one source and the total is
/// preserved exactly.
pub fn shift(displacement: Displacement, beliefs: &BeliefGrid) -> Result<BeliefGrid> {
    let shape = beliefs.shape();
    if shape.is_empty() {
        return Err(LocalizationError::InvalidDimensions {
            height: shape.height,
            width: shape.width,
        });
    }
    if displacement.is_zero() {
        return Ok(beliefs.clone());
    }

    let mut shifted = vec![0.0; shape.cell_count()];
    for (coord, p) in beliefs.iter() {
        let dest = coord.wrapping_offset(displacement, shape);
        shifted[shape.index(dest)] += p;
    }
    Ok(BeliefGrid::from_parts(shape, shifted))
}

/// Move the belief by the intended `displacement`, then blur.
///
/// Stage one is [`shift`]; stage two is [`blur`] with the `blurring`
/// coefficient, whose output (already normalized) is returned as is.
///
/// # Errors
/// - `InvalidParameter` if `blurring` is outside `[0, 1]`
/// - `InvalidDimensions` if `beliefs` has no cells
/// - `DegenerateDistribution` if `beliefs` carries no mass
pub fn move_beliefs(
    displacement: Displacement,
    beliefs: &BeliefGrid,
    blurring: f64,
) -> Result<BeliefGrid> {
    check_blurring(blurring)?;
    let shifted = shift(displacement, beliefs)?;
    let moved = blur(&shifted, blurring)?;
    log::trace!(
        "Moved by ({}, {}) with blurring {blurring}: most likely {}",
        displacement.dy,
        displacement.dx,
        moved.most_likely()
    );
    Ok(moved)
}
