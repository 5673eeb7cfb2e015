//! # Rangoli
//!
//! Discrete Bayesian histogram filter for robot localization on a colored,
//! wraparound grid.
//!
//! ## Overview
//!
//! The robot lives on a finite grid whose cells are painted with discrete
//! colors. It cannot see its position, only the (noisy) color under it, and
//! it knows how it intended to move. Rangoli keeps a probability for every
//! cell and updates it with three pure functions:
//!
//! - **initialize_beliefs** - Uniform prior over all cells
//! - **sense** - Re-weight by a color reading (hit/miss noise model)
//! - **move_beliefs** - Wraparound shift by the intended motion, then blur
//!
//! ## Quick Start
//!
//! ```rust
//! use rangoli::{Color, ColorGrid, Displacement, GridCoord};
//! use rangoli::filter::{initialize_beliefs, move_beliefs, sense};
//!
//! let world = ColorGrid::parse("r g g\ng g g")?;
//! let beliefs = initialize_beliefs(&world)?;
//!
//! let beliefs = sense(Color::RED, &world, &beliefs, 1.0, 0.0)?;
//! let beliefs = move_beliefs(Displacement::new(1, 1), &beliefs, 0.0)?;
//!
//! assert_eq!(beliefs.most_likely(), GridCoord::new(1, 1));
//! # Ok::<(), rangoli::LocalizationError>(())
//! ```
//!
//! For a stateful session use [`Localizer`]; for scripted runs use
//! [`io::Scenario`]; for a simulated robot with noisy sensing and slipping
//! wheels use [`sim::Simulation`].
//!
//! ## Coordinate System
//!
//! - Row 0 is the top row, column 0 the left column
//! - `dy > 0` moves down, `dx > 0` moves right
//! - Both axes wrap: the grid is a torus

#![warn(missing_docs)]

// Core value types
pub mod core;

// Color map and belief storage
pub mod grid;

// Pure filter operations
pub mod filter;

// Noise parameters
pub mod config;

// Filtering sessions
pub mod modes;

// Simulated robot
pub mod sim;

// Scenario files
pub mod io;

mod error;

// Re-export commonly used types
pub use self::core::{Color, Displacement, GridCoord, Shape};

pub use error::{LocalizationError, Result};

pub use grid::{BeliefGrid, ColorGrid};

pub use config::{ConfigLoadError, FilterConfig, MotionNoise, SensorModel};

pub use modes::{Estimate, Localizer, Step};
