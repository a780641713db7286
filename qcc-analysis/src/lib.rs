//! # qcc-analysis
//!
//! Metrics engine for the QCC crowd-labeling quality tool.
//! Contains the latest-label resolver, the agreement, speed and pattern
//! engines, and the report assembly layer that composes them.
//!
//! Every engine is a pure function over borrowed, immutable input.

pub mod agreement;
pub mod patterns;
pub mod reports;
pub mod resolver;
pub mod speed;

pub use agreement::{
    agreement_matrix, cohens_kappa, krippendorffs_alpha, pairwise_percent_agreement,
    per_tagger_agreement, percent_agreement, LatestLabelCohensKappa, LatestLabelPercentAgreement,
};
pub use patterns::{scan_windows, SimpleSequencePatterns, WindowScan, WINDOW_LENGTH};
pub use reports::{QualityAnalyzer, QualityReport};
pub use resolver::{latest_events, resolve_latest, ResolvedLabels};
pub use speed::LogTrimTaggingSpeed;
