//! Initialization and the sensor (measurement) update.

use crate::core::Color;
use crate::error::{LocalizationError, Result};
use crate::grid::{BeliefGrid, ColorGrid};

use super::primitives::normalize_cells;

/// Uniform belief over every cell of `world`.
///
/// Each cell receives `1 / (H·W)`. Fails with `InvalidDimensions` for an
/// empty grid rather than dividing by zero.
pub fn initialize_beliefs(world: &ColorGrid) -> Result<BeliefGrid> {
    let shape = world.shape();
    if shape.is_empty() {
        return Err(LocalizationError::InvalidDimensions {
            height: shape.height,
            width: shape.width,
        });
    }

    let per_cell = 1.0 / shape.cell_count() as f64;
    log::trace!("Uniform belief over {shape} grid: {per_cell:.6} per cell");
    Ok(BeliefGrid::from_parts(
        shape,
        vec![per_cell; shape.cell_count()],
    ))
}

/// Bayesian measurement update under the hit/miss model.
///
/// Every cell whose world color equals `observed` is weighted by `p_hit`,
/// every other cell by `p_miss`, and the result is normalized. Only the
/// ratio `p_hit / p_miss` matters.
///
/// # Errors
/// - `DimensionMismatch` if `beliefs` and `world` differ in shape
/// - `InvalidParameter` if a weight is negative or not finite
/// - `DegenerateDistribution` if the weighted mass is zero (e.g. both
///   weights are zero, or all remaining mass sits on cells weighted zero)
pub fn sense(
    observed: Color,
    world: &ColorGrid,
    beliefs: &BeliefGrid,
    p_hit: f64,
    p_miss: f64,
) -> Result<BeliefGrid> {
    if world.shape() != beliefs.shape() {
        return Err(LocalizationError::DimensionMismatch {
            expected: world.shape(),
            actual: beliefs.shape(),
        });
    }
    check_weight("p_hit", p_hit)?;
    check_weight("p_miss", p_miss)?;

    // Only the ratio matters; the larger weight becomes 1.
    let scale = p_hit.max(p_miss);
    let (p_hit, p_miss) = if scale > 0.0 {
        (p_hit / scale, p_miss / scale)
    } else {
        (p_hit, p_miss)
    };

    let weighted: Vec<f64> = world
        .as_slice()
        .iter()
        .zip(beliefs.as_slice())
        .map(|(&color, &p)| if color == observed { p * p_hit } else { p * p_miss })
        .collect();

    let updated = normalize_cells(world.shape(), weighted)?;
    log::trace!(
        "Sensed '{observed}': most likely {} (p={:.4})",
        updated.most_likely(),
        updated.max_probability()
    );
    Ok(updated)
}

pub(crate) fn check_weight(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LocalizationError::invalid_parameter(
            name,
            value,
            "must be finite and non-negative",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridCoord;
    use approx::assert_relative_eq;

    fn two_by_two() -> ColorGrid {
        ColorGrid::parse("r g\ng g").unwrap()
    }

    #[test]
    fn test_initialize_uniform() {
        let world = ColorGrid::parse("rgb\nggg").unwrap();
        let beliefs = initialize_beliefs(&world).unwrap();

        assert_eq!(beliefs.shape(), world.shape());
        for (_, p) in beliefs.iter() {
            assert_relative_eq!(p, 1.0 / 6.0);
        }
        assert_relative_eq!(beliefs.total(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sense_perfect_sensor_is_one_hot() {
        let world = two_by_two();
        let beliefs = initialize_beliefs(&world).unwrap();
        let updated = sense(Color::RED, &world, &beliefs, 1.0, 0.0).unwrap();

        assert_eq!(updated.to_rows(), vec![vec![1.0, 0.0], vec![0.0, 0.0]]);
    }

    #[test]
    fn test_sense_ratio_weighting() {
        let world = two_by_two();
        let beliefs = initialize_beliefs(&world).unwrap();
        let updated = sense(Color::RED, &world, &beliefs, 3.0, 1.0).unwrap();

        // 3 : 1 : 1 : 1
        assert_relative_eq!(updated.get(GridCoord::new(0, 0)).unwrap(), 0.5);
        assert_relative_eq!(updated.get(GridCoord::new(1, 1)).unwrap(), 1.0 / 6.0);
    }

    #[test]
    fn test_sense_tiny_weights_match_unit_scale() {
        let world = two_by_two();
        let beliefs = initialize_beliefs(&world).unwrap();
        let tiny = sense(Color::RED, &world, &beliefs, 3e-308, 1e-308).unwrap();
        let unit = sense(Color::RED, &world, &beliefs, 3.0, 1.0).unwrap();

        for ((_, a), (_, b)) in tiny.iter().zip(unit.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sense_leaves_input_untouched() {
        let world = two_by_two();
        let beliefs = initialize_beliefs(&world).unwrap();
        let before = beliefs.clone();
        let _ = sense(Color::GREEN, &world, &beliefs, 5.0, 1.0).unwrap();
        assert_eq!(beliefs, before);
    }

    #[test]
    fn test_sense_dimension_mismatch() {
        let world = two_by_two();
        let beliefs = BeliefGrid::from_rows(vec![vec![0.5, 0.5]]).unwrap();
        assert!(matches!(
            sense(Color::RED, &world, &beliefs, 1.0, 1.0),
            Err(LocalizationError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_sense_rejects_negative_weight() {
        let world = two_by_two();
        let beliefs = initialize_beliefs(&world).unwrap();
        assert!(matches!(
            sense(Color::RED, &world, &beliefs, -1.0, 1.0),
            Err(LocalizationError::InvalidParameter { name: "p_hit", .. })
        ));
        assert!(matches!(
            sense(Color::RED, &world, &beliefs, 1.0, f64::INFINITY),
            Err(LocalizationError::InvalidParameter { name: "p_miss", .. })
        ));
    }

    #[test]
    fn test_sense_degenerate() {
        let world = two_by_two();
        let beliefs = initialize_beliefs(&world).unwrap();
        assert_eq!(
            sense(Color::RED, &world, &beliefs, 0.0, 0.0),
            Err(LocalizationError::DegenerateDistribution { total: 0.0 })
        );

        // All mass on the red cell, then a perfect sensor reports green
        let certain = sense(Color::RED, &world, &beliefs, 1.0, 0.0).unwrap();
        assert!(matches!(
            sense(Color::GREEN, &world, &certain, 1.0, 0.0),
            Err(LocalizationError::DegenerateDistribution { .. })
        ));
    }
}
