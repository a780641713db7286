use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Speed engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedConfig {
    /// Fraction of the longest log2 gaps dropped before averaging.
    pub trim_fraction: f64,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self { trim_fraction: 0.10 }
    }
}

impl SpeedConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.trim_fraction) {
            return Err(ConfigError::Invalid {
                field: "speed.trim_fraction",
                reason: format!("{} is outside [0, 1)", self.trim_fraction),
            });
        }
        Ok(())
    }
}
