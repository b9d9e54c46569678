//! Evaluator configuration.
//!
//! Every field defaults to the fixed constants of the gate formulas, so an
//! empty config file behaves exactly like no config at all.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::gate::Thresholds;
use crate::limits::{DEFAULT_DECAY_RATE, DEFAULT_DELTA_U};

/// Errors that can occur when loading a config.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: String, reason: String },
}

/// Tunables for a `GateEvaluator`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    /// Decay rate used when a request does not carry its own
    pub decay_rate: f64,

    /// Energy normalisation term in the beta formula
    pub delta_u: f64,

    /// Stability thresholds
    pub thresholds: Thresholds,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            decay_rate: DEFAULT_DECAY_RATE,
            delta_u: DEFAULT_DELTA_U,
            thresholds: Thresholds::default(),
        }
    }
}

impl GateConfig {
    /// Parse a config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserialises to unit, not a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: GateConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Reject values that would turn every evaluation into NaN or infinity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_finite("decay_rate", self.decay_rate)?;
        check_finite("delta_u", self.delta_u)?;
        check_finite("thresholds.beta", self.thresholds.beta)?;
        check_finite("thresholds.divergence", self.thresholds.divergence)?;

        if self.delta_u == 0.0 {
            return Err(ConfigError::Invalid {
                field: "delta_u".to_string(),
                reason: "must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}

fn check_finite(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field: field.to_string(),
            reason: format!("must be finite, got {}", value),
        })
    }
}
