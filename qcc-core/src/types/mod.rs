//! Domain types for crowd-labeling data.
//!
//! All types are plain values; the engines in `qcc-analysis` never mutate them.

pub mod characteristic;
pub mod collections;
pub mod comment;
pub mod dataset;
pub mod prompt;
pub mod signals;
pub mod tag;
pub mod tag_assignment;
pub mod tag_value;
pub mod tagger;

pub use characteristic::Characteristic;
pub use comment::Comment;
pub use dataset::Dataset;
pub use prompt::Prompt;
pub use signals::{Alternations, LongestRun, PatternFlag, PatternSignals};
pub use tag::Tag;
pub use tag_assignment::TagAssignment;
pub use tag_value::TagValue;
pub use tagger::Tagger;
