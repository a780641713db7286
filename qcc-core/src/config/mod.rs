pub mod agreement_config;
pub mod logging_config;
pub mod pattern_config;
pub mod reporting_config;
pub mod speed_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use agreement_config::{AgreementConfig, AgreementMetric};
pub use logging_config::LoggingConfig;
pub use pattern_config::PatternConfig;
pub use reporting_config::ReportingConfig;
pub use speed_config::SpeedConfig;

/// Top-level configuration aggregating all engine configs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QccConfig {
    pub speed: SpeedConfig,
    pub patterns: PatternConfig,
    pub agreement: AgreementConfig,
    pub reporting: ReportingConfig,
    pub logging: LoggingConfig,
}

impl QccConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read and parse a TOML file, then validate it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.speed.validate()?;
        self.patterns.validate()?;
        self.agreement.validate()?;
        Ok(())
    }
}

pub(crate) fn check_unit_interval(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("{value} is outside [0, 1]"),
        });
    }
    Ok(())
}
