//! Report assembly: composes the engines into serializable reports.
//!
//! Rendering (CSV, HTML, files) is left to callers; every report derives
//! `Serialize`.

pub mod characteristic_reliability;
pub mod pattern_detection;
pub mod summary;
pub mod tag_report;
pub mod tagger_performance;

use std::collections::BTreeSet;

use qcc_core::{
    Characteristic, Dataset, PatternSignalsStrategy, QccConfig, QccResult, TaggingSpeedStrategy,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::patterns::SimpleSequencePatterns;
use crate::speed::LogTrimTaggingSpeed;

pub use characteristic_reliability::{characteristic_reliability, CharacteristicReliability};
pub use pattern_detection::{
    CharacteristicPatterns, PatternDetectionReport, PatternEntry, PatternRow, Perspective,
};
pub use summary::{dataset_summary, DatasetSummary};
pub use tag_report::{
    alpha_for_item, build_tag_report, count_taggers_for, count_yes_no, group_by_comment,
    group_by_comment_and_characteristic, taggers_who_touched_comment, TagReportRow,
};
pub use tagger_performance::{tagger_performance, CharacteristicPerformance, TaggerPerformance};

/// Everything one analyzer run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    pub summary: DatasetSummary,
    pub characteristics: Vec<CharacteristicReliability>,
    pub taggers: Vec<TaggerPerformance>,
    pub tag_report: Vec<TagReportRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_detection: Option<PatternDetectionReport>,
}

impl QualityReport {
    pub fn to_json(&self) -> QccResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// End-to-end quality analysis over a [`Dataset`].
pub struct QualityAnalyzer {
    config: QccConfig,
    speed: Box<dyn TaggingSpeedStrategy>,
    patterns: Box<dyn PatternSignalsStrategy>,
}

impl QualityAnalyzer {
    /// Create with default configuration and strategies.
    pub fn new() -> Self {
        let config = QccConfig::default();
        Self {
            speed: Box::new(LogTrimTaggingSpeed::with_config(&config.speed)),
            patterns: Box::new(SimpleSequencePatterns::with_config(config.patterns.clone())),
            config,
        }
    }

    /// Create with a validated configuration and the default strategies built from it.
    pub fn with_config(config: QccConfig) -> QccResult<Self> {
        config.validate()?;
        Ok(Self {
            speed: Box::new(LogTrimTaggingSpeed::with_config(&config.speed)),
            patterns: Box::new(SimpleSequencePatterns::with_config(config.patterns.clone())),
            config,
        })
    }

    pub fn with_speed_strategy(mut self, strategy: Box<dyn TaggingSpeedStrategy>) -> Self {
        self.speed = strategy;
        self
    }

    pub fn with_pattern_strategy(mut self, strategy: Box<dyn PatternSignalsStrategy>) -> Self {
        self.patterns = strategy;
        self
    }

    pub fn config(&self) -> &QccConfig {
        &self.config
    }

    /// Run every configured report over `dataset`.
    pub fn run(&self, dataset: &Dataset) -> QualityReport {
        let taggers = dataset.taggers();
        let characteristics = characteristics_for(dataset);
        info!(
            assignments = dataset.assignments.len(),
            taggers = taggers.len(),
            characteristics = characteristics.len(),
            speed_strategy = self.speed.name(),
            pattern_strategy = self.patterns.name(),
            "quality analysis started"
        );

        // Step 1: Dataset summary
        let summary = dataset_summary(dataset, &taggers, self.speed.as_ref());

        // Step 2: Characteristic reliability
        let reliability: Vec<CharacteristicReliability> = characteristics
            .iter()
            .map(|c| characteristic_reliability(&dataset.assignments, c, &self.config))
            .collect();

        // Step 3: Tagger performance
        let performance = tagger_performance(
            &taggers,
            &characteristics,
            self.speed.as_ref(),
            self.patterns.as_ref(),
            &self.config,
        );

        // Step 4: Tag report
        let tag_report = build_tag_report(&dataset.assignments);

        // Step 5: Pattern detection
        let pattern_detection = self
            .config
            .reporting
            .include_patterns
            .then(|| PatternDetectionReport::build(&taggers, &characteristics));

        info!(
            flagged_characteristics = reliability.iter().filter(|r| r.below_min_agreement).count(),
            tag_rows = tag_report.len(),
            "quality analysis complete"
        );

        QualityReport {
            summary,
            characteristics: reliability,
            taggers: performance,
            tag_report,
            pattern_detection,
        }
    }
}

impl Default for QualityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Declared characteristics, or ones derived from assignment ids when none are declared.
fn characteristics_for(dataset: &Dataset) -> Vec<Characteristic> {
    if !dataset.characteristics.is_empty() {
        return dataset.characteristics.clone();
    }
    let ids: BTreeSet<&str> = dataset
        .assignments
        .iter()
        .map(|a| a.characteristic_id())
        .collect();
    if !ids.is_empty() {
        warn!(count = ids.len(), "no characteristics declared, deriving from assignments");
    }
    ids.into_iter()
        .filter_map(|id| Characteristic::new(id, id).ok())
        .collect()
}
