//! Pattern signal output, shared between the strategy trait and its implementations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::tag_value::TagValue;

/// Longest contiguous run of one value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LongestRun {
    pub value: Option<TagValue>,
    pub length: usize,
}

/// Adjacent value changes over `n - 1` transitions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Alternations {
    pub switches: usize,
    pub ratio: f64,
}

/// One tripped heuristic, in the order the heuristics are evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PatternFlag {
    LongRun { value: TagValue, length: usize },
    HighAlternation { switches: usize, ratio: f64 },
    RepeatedNgrams { ngrams: BTreeMap<String, usize> },
}

/// Whole-sequence pattern signals for one tagger on one characteristic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PatternSignals {
    pub patterns_found: bool,
    pub sequence_length: usize,
    pub longest_run: LongestRun,
    pub alternations: Alternations,
    pub top_repeats: BTreeMap<String, usize>,
    pub runs_summary: Vec<PatternFlag>,
}

impl PatternSignals {
    /// Signals for a sequence too short to analyze.
    pub fn empty(sequence_length: usize) -> Self {
        Self {
            sequence_length,
            ..Self::default()
        }
    }
}
