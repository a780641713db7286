//! # qcc-core
//!
//! Foundation crate for the QCC crowd-labeling quality engine.
//! Defines the domain types, traits, errors, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod traits;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::QccConfig;
pub use errors::{ConfigError, QccError, QccErrorCode, QccResult, ValidationError};
pub use traits::{AgreementStrategy, PatternSignalsStrategy, TaggingSpeedStrategy};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::{
    Alternations, Characteristic, Comment, Dataset, LongestRun, PatternFlag, PatternSignals, Prompt,
    Tag, TagAssignment, TagValue, Tagger,
};
