//! Scenario YAML parsing for scripted localization runs.
//!
//! A scenario defines:
//! - The world, as text rows of color labels
//! - Filter noise parameters (optional, defaults apply)
//! - The sequence of sense/move steps
//! - Optionally, the cell the run is expected to end on
//!
//! ```yaml
//! name: corridor
//! world: |
//!   g g r g g
//! filter:
//!   sensor: { p_hit: 5.0, p_miss: 1.0 }
//!   motion: { blurring: 0.0 }
//! steps:
//!   - { type: sense, color: r }
//!   - { type: move, dx: 1 }
//!   - { type: sense, color: g }
//! expected: { row: 0, col: 3 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::FilterConfig;
use crate::core::GridCoord;
use crate::error::LocalizationError;
use crate::grid::ColorGrid;
use crate::modes::{Estimate, Localizer, Step};

/// Errors from loading or running a scenario
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// File could not be read
    #[error("Failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    /// YAML is malformed or has the wrong structure
    #[error("Failed to parse scenario: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// World text or filter parameters rejected
    #[error("Invalid scenario: {0}")]
    Invalid(#[source] LocalizationError),

    /// A step failed while running
    #[error("Step {index} failed: {source}")]
    Step {
        /// Zero-based step index
        index: usize,
        /// Underlying filter error
        #[source]
        source: LocalizationError,
    },
}

/// A localization scenario loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    /// Human-readable scenario name
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: String,

    /// World rows, one line per row (see [`ColorGrid::parse`])
    pub world: String,

    /// Noise parameters
    #[serde(default)]
    pub filter: FilterConfig,

    /// Sense/move sequence
    #[serde(default)]
    pub steps: Vec<Step>,

    /// Cell the final estimate should land on
    #[serde(default)]
    pub expected: Option<GridCoord>,
}

/// Outcome of [`Scenario::run`]
#[derive(Clone, Debug)]
pub struct ScenarioOutcome {
    /// Localizer state after the last step
    pub localizer: Localizer,
    /// Final estimate
    pub estimate: Estimate,
    /// Whether the estimate matches `expected` (None when not specified)
    pub matches_expected: Option<bool>,
}

impl Scenario {
    /// Load a scenario from a YAML file
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ScenarioError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse the world text
    pub fn color_grid(&self) -> Result<ColorGrid, ScenarioError> {
        ColorGrid::parse(&self.world).map_err(ScenarioError::Invalid)
    }

    /// Run every step from a uniform prior
    pub fn run(&self) -> Result<ScenarioOutcome, ScenarioError> {
        let mut localizer = Localizer::new(self.color_grid()?, self.filter.clone())
            .map_err(ScenarioError::Invalid)?;

        for (index, &step) in self.steps.iter().enumerate() {
            localizer
                .step(step)
                .map_err(|source| ScenarioError::Step { index, source })?;
        }

        let estimate = localizer.estimate();
        let matches_expected = self.expected.map(|coord| coord == estimate.coord);
        log::info!(
            "Scenario '{}': {} steps, estimate {} (p={:.4})",
            self.name,
            self.steps.len(),
            estimate.coord,
            estimate.probability
        );

        Ok(ScenarioOutcome {
            localizer,
            estimate,
            matches_expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    const CORRIDOR: &str = r#"
name: corridor
world: |
  g g r g g
filter:
  sensor: { p_hit: 5.0, p_miss: 1.0 }
  motion: { blurring: 0.0 }
steps:
  - { type: sense, color: r }
  - { type: move, dx: 1 }
  - { type: sense, color: g }
expected: { row: 0, col: 3 }
"#;

    #[test]
    fn test_parse_scenario() {
        let scenario = Scenario::from_yaml(CORRIDOR).unwrap();
        assert_eq!(scenario.name, "corridor");
        assert_eq!(scenario.steps.len(), 3);
        assert_eq!(scenario.steps[0], Step::Sense { color: Color::RED });
        assert_eq!(scenario.filter.sensor.p_hit, 5.0);
        assert_eq!(scenario.color_grid().unwrap().width(), 5);
    }

    #[test]
    fn test_run_scenario() {
        let outcome = Scenario::from_yaml(CORRIDOR).unwrap().run().unwrap();
        assert_eq!(outcome.estimate.coord, GridCoord::new(0, 3));
        assert_eq!(outcome.matches_expected, Some(true));
        assert_eq!(outcome.localizer.steps_taken(), 3);
    }

    #[test]
    fn test_defaults_when_omitted() {
        let scenario = Scenario::from_yaml("name: bare\nworld: rg\n").unwrap();
        assert_eq!(scenario.filter, FilterConfig::default());
        assert!(scenario.steps.is_empty());
        assert_eq!(scenario.run().unwrap().matches_expected, None);
    }

    #[test]
    fn test_invalid_world() {
        let scenario = Scenario::from_yaml("name: ragged\nworld: \"rg\\nr\"\n").unwrap();
        assert!(matches!(
            scenario.run(),
            Err(ScenarioError::Invalid(LocalizationError::InvalidDimensions { .. }))
        ));
    }

    #[test]
    fn test_failing_step_reports_index() {
        let yaml = r#"
name: contradiction
world: rg
filter: { sensor: { p_hit: 1.0, p_miss: 0.0 } }
steps:
  - { type: sense, color: r }
  - { type: sense, color: g }
"#;
        let err = Scenario::from_yaml(yaml).unwrap().run().unwrap_err();
        assert!(matches!(err, ScenarioError::Step { index: 1, .. }));
    }
}
