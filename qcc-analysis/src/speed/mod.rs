//! Speed engine: robust mean time between tags, in log2 seconds.

mod log_trim;
mod summary;

pub use log_trim::{log2_to_seconds, log_intervals, trimmed_mean, LogTrimTaggingSpeed};
pub use summary::{speed_summary, SpeedSummary, TaggerSpeed};
