//! Filter noise parameters and YAML loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::error::ConfigLoadError;
use crate::error::{LocalizationError, Result};
use crate::filter::{check_blurring, check_weight};

/// Hit/miss sensor model.
///
/// Weights are relative likelihoods and need not sum to 1. A reading is
/// `p_hit / p_miss` times more likely to be correct than wrong.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorModel {
    /// Weight for cells whose color matches the reading.
    /// Default: 3.0
    #[serde(default = "defaults::p_hit")]
    pub p_hit: f64,

    /// Weight for cells whose color differs from the reading.
    /// Default: 1.0
    #[serde(default = "defaults::p_miss")]
    pub p_miss: f64,
}

impl Default for SensorModel {
    fn default() -> Self {
        Self {
            p_hit: defaults::p_hit(),
            p_miss: defaults::p_miss(),
        }
    }
}

impl SensorModel {
    /// Create a sensor model from raw weights
    pub fn new(p_hit: f64, p_miss: f64) -> Self {
        Self { p_hit, p_miss }
    }

    /// Probability that a single reading is wrong, `p_miss / (p_hit + p_miss)`.
    pub fn error_probability(&self) -> f64 {
        let total = self.p_hit + self.p_miss;
        if total > 0.0 { self.p_miss / total } else { 0.0 }
    }
}

/// Motion uncertainty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionNoise {
    /// Fraction of each cell's mass diffused to its 4 neighbors after a move.
    ///
    /// 0.0 = noiseless motion. Must lie in [0, 1].
    /// Default: 0.12
    #[serde(default = "defaults::blurring")]
    pub blurring: f64,
}

impl Default for MotionNoise {
    fn default() -> Self {
        Self {
            blurring: defaults::blurring(),
        }
    }
}

/// Full filter configuration loaded from YAML
///
/// # Example
///
/// ```yaml
/// sensor:
///   p_hit: 3.0
///   p_miss: 1.0
/// motion:
///   blurring: 0.12
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Sensor noise
    #[serde(default)]
    pub sensor: SensorModel,

    /// Motion noise
    #[serde(default)]
    pub motion: MotionNoise,
}

impl FilterConfig {
    /// Create a config from raw parameters
    pub fn new(p_hit: f64, p_miss: f64, blurring: f64) -> Self {
        Self {
            sensor: SensorModel::new(p_hit, p_miss),
            motion: MotionNoise { blurring },
        }
    }

    /// Noiseless motion and a perfect sensor
    pub fn exact() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/filter.yaml)
    pub fn load_default() -> std::result::Result<Self, ConfigLoadError> {
        let path = Path::new("configs/filter.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Check every parameter ahead of running the filter.
    ///
    /// Applies the same rules the entry points enforce, plus the rejection
    /// of `p_hit = p_miss = 0` which would make every sensor update
    /// degenerate.
    pub fn validate(&self) -> Result<()> {
        check_weight("p_hit", self.sensor.p_hit)?;
        check_weight("p_miss", self.sensor.p_miss)?;
        if self.sensor.p_hit == 0.0 && self.sensor.p_miss == 0.0 {
            return Err(LocalizationError::DegenerateDistribution { total: 0.0 });
        }
        check_blurring(self.motion.blurring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FilterConfig::default();
        assert_eq!(config.sensor.p_hit, 3.0);
        assert_eq!(config.sensor.p_miss, 1.0);
        assert_eq!(config.motion.blurring, 0.12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = FilterConfig::new(5.0, 0.5, 0.2);
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = FilterConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = FilterConfig::from_yaml("sensor:\n  p_hit: 9.0\n").unwrap();
        assert_eq!(config.sensor.p_hit, 9.0);
        assert_eq!(config.sensor.p_miss, 1.0);
        assert_eq!(config.motion.blurring, 0.12);
    }

    #[test]
    fn test_parse_error() {
        let err = FilterConfig::from_yaml("sensor: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(matches!(
            FilterConfig::new(-1.0, 1.0, 0.1).validate(),
            Err(LocalizationError::InvalidParameter { name: "p_hit", .. })
        ));
        assert!(matches!(
            FilterConfig::new(0.0, 0.0, 0.1).validate(),
            Err(LocalizationError::DegenerateDistribution { .. })
        ));
        assert!(matches!(
            FilterConfig::new(1.0, 1.0, 2.0).validate(),
            Err(LocalizationError::InvalidParameter { name: "blurring", .. })
        ));
        assert!(FilterConfig::exact().validate().is_ok());
    }

    #[test]
    fn test_error_probability() {
        assert_eq!(SensorModel::new(3.0, 1.0).error_probability(), 0.25);
        assert_eq!(SensorModel::new(1.0, 0.0).error_probability(), 0.0);
    }
}
