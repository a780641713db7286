//! Log2 interval estimator with top-tail trimming.
//!
//! Gaps are averaged in log2 space so a handful of long breaks (overnight,
//! lunch) cannot dominate the estimate; the longest tail is then dropped
//! outright before averaging.

use chrono::TimeDelta;
use qcc_core::config::SpeedConfig;
use qcc_core::{TagAssignment, TaggingSpeedStrategy, Tagger};

/// Positive gaps between consecutive events, as `log2(seconds)`, in time order.
pub fn log_intervals(events: &[TagAssignment]) -> Vec<f64> {
    if events.len() < 2 {
        return Vec::new();
    }
    let mut timestamps: Vec<_> = events.iter().map(TagAssignment::timestamp).collect();
    timestamps.sort_unstable();

    timestamps
        .windows(2)
        .map(|pair| gap_seconds(pair[1] - pair[0]))
        .filter(|gap| *gap > 0.0)
        .map(f64::log2)
        .collect()
}

/// Gap in seconds at microsecond precision. Whole seconds past the
/// microsecond range.
fn gap_seconds(gap: TimeDelta) -> f64 {
    gap.num_microseconds()
        .map_or(gap.num_seconds() as f64, |micros| micros as f64 / 1_000_000.0)
}

/// Mean after dropping the highest `floor(n * trim_fraction)` values.
///
/// At least one value is always kept. `0.0` for empty input.
pub fn trimmed_mean(mut values: Vec<f64>, trim_fraction: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = values.len();
    let drop = (n as f64 * trim_fraction).floor() as usize;
    let keep = n.saturating_sub(drop).max(1);

    values[..keep].iter().sum::<f64>() / keep as f64
}

/// `2^mean_log2`.
pub fn log2_to_seconds(mean_log2: f64) -> f64 {
    mean_log2.exp2()
}

/// Default [`TaggingSpeedStrategy`]: trimmed mean of log2 gaps.
#[derive(Debug, Clone)]
pub struct LogTrimTaggingSpeed {
    trim_fraction: f64,
}

impl LogTrimTaggingSpeed {
    pub fn new() -> Self {
        Self::with_config(&SpeedConfig::default())
    }

    pub fn with_config(config: &SpeedConfig) -> Self {
        Self {
            trim_fraction: config.trim_fraction,
        }
    }

    pub fn trim_fraction(&self) -> f64 {
        self.trim_fraction
    }

    /// Trimmed mean log2 gap plus the number of positive gaps it was taken over.
    pub fn estimate(&self, tagger: &Tagger) -> (f64, usize) {
        let intervals = log_intervals(tagger.events());
        let count = intervals.len();
        (trimmed_mean(intervals, self.trim_fraction), count)
    }
}

impl Default for LogTrimTaggingSpeed {
    fn default() -> Self {
        Self::new()
    }
}

impl TaggingSpeedStrategy for LogTrimTaggingSpeed {
    fn name(&self) -> &'static str {
        "log_trim"
    }

    fn speed_log2(&self, tagger: &Tagger) -> f64 {
        self.estimate(tagger).0
    }

    fn seconds_per_tag(&self, tagger: &Tagger) -> f64 {
        match self.estimate(tagger) {
            (_, 0) => 0.0,
            (mean_log2, _) => log2_to_seconds(mean_log2),
        }
    }
}
