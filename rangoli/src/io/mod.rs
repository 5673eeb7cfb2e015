//! Scripted runs loaded from disk.
//!
//! - **Scenario parsing**: YAML world + filter parameters + step sequence
//!
//! ```rust,ignore
//! use rangoli::io::Scenario;
//! use std::path::Path;
//!
//! let scenario = Scenario::load(Path::new("scenarios/corridor.yaml"))?;
//! let outcome = scenario.run()?;
//! println!("{}", outcome.localizer.beliefs());
//! ```

pub mod scenario;

pub use scenario::{Scenario, ScenarioError, ScenarioOutcome};
