use serde::{Deserialize, Serialize};

/// Which report sections the analyzer assembles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportingConfig {
    pub include_speed: bool,
    pub include_patterns: bool,
    pub include_agreement: bool,
    pub include_prevalence: bool,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            include_speed: true,
            include_patterns: true,
            include_agreement: true,
            include_prevalence: true,
        }
    }
}
