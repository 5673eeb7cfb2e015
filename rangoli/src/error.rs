//! Error types for Rangoli

use crate::core::Shape;

/// Result type alias
pub type Result<T> = std::result::Result<T, LocalizationError>;

/// Errors raised by the filter entry points.
///
/// These are input errors, not transient faults: every variant is detected
/// synchronously and no partial result is ever produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocalizationError {
    /// Grid is empty or its rows have different lengths
    #[error("Invalid grid dimensions: {height}x{width}")]
    InvalidDimensions {
        /// Number of rows
        height: usize,
        /// Length of the offending (or first) row
        width: usize,
    },

    /// Color grid and belief grid shapes differ
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Shape of the color grid
        expected: Shape,
        /// Shape of the belief grid
        actual: Shape,
    },

    /// Normalization divisor is zero (or not finite)
    #[error("Degenerate distribution: total mass {total}")]
    DegenerateDistribution {
        /// Sum of all cells before normalization
        total: f64,
    },

    /// A noise parameter is out of range
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Rejected value
        value: f64,
        /// Constraint that was violated
        reason: &'static str,
    },
}

impl LocalizationError {
    pub(crate) fn invalid_parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        LocalizationError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
