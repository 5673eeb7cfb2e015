//! Filter configuration loading for Rangoli.
//!
//! Noise parameters live in a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rangoli::config::FilterConfig;
//!
//! // Load from default path (configs/filter.yaml)
//! let config = FilterConfig::load_default()?;
//!
//! // Or use built-in defaults (no file needed)
//! let config = FilterConfig::default();
//! config.validate()?;
//! ```
//!
//! ## Example YAML
//!
//! ```yaml
//! sensor:
//!   p_hit: 3.0      # weight for matching cells
//!   p_miss: 1.0     # weight for non-matching cells
//! motion:
//!   blurring: 0.12  # fraction diffused to neighbors per move
//! ```

mod defaults;
mod error;
mod filter;

pub use error::ConfigLoadError;
pub use filter::{FilterConfig, MotionNoise, SensorModel};
