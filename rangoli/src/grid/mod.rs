//! Grid storage for the world map and the belief distribution.
//!
//! Both grids use a flat row-major layout:
//!
//! ```text
//! rows:   [c00 c01 c02]      storage: [c00 c01 c02 c10 c11 c12]
//!         [c10 c11 c12]                 index = row * width + col
//! ```
//!
//! - [`ColorGrid`]: immutable color labels (ground truth)
//! - [`BeliefGrid`]: probability per cell (robot knowledge)

mod belief;
mod color_grid;

pub use belief::{BeliefGrid, SUM_TOLERANCE};
pub use color_grid::ColorGrid;
