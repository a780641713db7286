use serde::{Deserialize, Serialize};

use super::check_unit_interval;
use crate::errors::ConfigError;

/// Whole-sequence pattern heuristics.
///
/// The fixed-window scan is not configurable; its window is always 12.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    pub long_run_threshold: usize,
    pub alternation_ratio_threshold: f64,
    pub alternation_min_length: usize,
    pub ngram_repeat_threshold: usize,
    pub ngram_min: usize,
    pub ngram_max: usize,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            long_run_threshold: 10,
            alternation_ratio_threshold: 0.9,
            alternation_min_length: 10,
            ngram_repeat_threshold: 5,
            ngram_min: 3,
            ngram_max: 5,
        }
    }
}

impl PatternConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit_interval(
            "patterns.alternation_ratio_threshold",
            self.alternation_ratio_threshold,
        )?;
        if self.ngram_min == 0 || self.ngram_min > self.ngram_max {
            return Err(ConfigError::Invalid {
                field: "patterns.ngram_min",
                reason: format!(
                    "need 1 <= ngram_min <= ngram_max, got {}..={}",
                    self.ngram_min, self.ngram_max
                ),
            });
        }
        Ok(())
    }
}
