//! Operation modes built on top of the pure filter.
//!
//! - [`Localizer`]: sequential sense/move session over a known map

mod localizer;

pub use localizer::{Estimate, Localizer, Step};
