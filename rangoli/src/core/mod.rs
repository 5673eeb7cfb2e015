//! Core value types for the Rangoli library.
//!
//! Grids are addressed by (row, column) with row 0 at the top. Both axes wrap
//! around, so the world is a torus:
//!
//! ```text
//!        col 0   col 1   col 2
//!       ┌───────┬───────┬───────┐
//! row 0 │       │   ▲   │       │   moving up from row 0
//!       ├───────┼───────┼───────┤   re-enters at the last row,
//! row 1 │   ◀   │   ●   │   ▶   │   moving right from the last
//!       ├───────┼───────┼───────┤   column re-enters at col 0
//! row 2 │       │   ▼   │       │
//!       └───────┴───────┴───────┘
//! ```
//!
//! - [`Color`]: discrete color label painted on a cell
//! - [`GridCoord`]: cell indices
//! - [`Displacement`]: intended motion `(dy, dx)`, any sign and magnitude
//! - [`Shape`]: grid dimensions and row-major index arithmetic

mod color;
mod point;

pub use color::{Color, ParseColorError};
pub use point::{Displacement, GridCoord, Shape};
