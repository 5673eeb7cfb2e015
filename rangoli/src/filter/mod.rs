//! The histogram filter: three pure entry points and their primitives.
//!
//! # Update Cycle
//!
//! ```text
//!   ColorGrid ──▶ initialize_beliefs ──▶ BeliefGrid₀
//!                                            │
//!                  ┌─────────────────────────┘
//!                  ▼
//!          ┌───────────────┐   observed color, p_hit, p_miss
//!          │     sense     │◀── (weight, then normalize)
//!          └───────┬───────┘
//!                  ▼
//!          ┌───────────────┐   displacement, blurring
//!          │ move_beliefs  │◀── (shift, then blur)
//!          └───────┬───────┘
//!                  │
//!                  └──▶ BeliefGrid₁ ──▶ sense ──▶ ...
//! ```
//!
//! Every function takes its inputs by reference and returns a new
//! [`BeliefGrid`](crate::grid::BeliefGrid); nothing is mutated. Independent
//! sessions can therefore run on separate threads without coordination.
//!
//! All outputs sum to 1.0 (within floating-point tolerance). Errors are
//! reported through [`LocalizationError`](crate::error::LocalizationError)
//! and never as NaN-filled grids.

mod motion;
mod primitives;
mod sensor;

pub use motion::{move_beliefs, shift};
pub use primitives::{blur, normalize};
pub use sensor::{initialize_beliefs, sense};

pub(crate) use primitives::check_blurring;
pub(crate) use sensor::check_weight;
