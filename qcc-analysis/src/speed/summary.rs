//! Speed distribution across taggers.

use std::collections::BTreeMap;

use qcc_core::{TaggingSpeedStrategy, Tagger};
use serde::Serialize;
use statrs::statistics::{Data, Distribution, Max, Median, Min};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaggerSpeed {
    pub speed_log2: f64,
    pub seconds_per_tag: f64,
}

/// Per-tagger speeds plus distribution statistics over `seconds_per_tag`.
///
/// Taggers with fewer than two events are left out. Statistics only use
/// positive `seconds_per_tag` values and are all `0.0` when there are none.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpeedSummary {
    pub taggers_with_speed: usize,
    pub per_tagger: BTreeMap<String, TaggerSpeed>,
    pub mean_seconds_per_tag: f64,
    pub median_seconds_per_tag: f64,
    pub min_seconds_per_tag: f64,
    pub max_seconds_per_tag: f64,
}

pub fn speed_summary(taggers: &[Tagger], strategy: &dyn TaggingSpeedStrategy) -> SpeedSummary {
    let per_tagger: BTreeMap<String, TaggerSpeed> = taggers
        .iter()
        .filter(|t| t.events().len() >= 2)
        .map(|t| {
            let speed = TaggerSpeed {
                speed_log2: strategy.speed_log2(t),
                seconds_per_tag: strategy.seconds_per_tag(t),
            };
            (t.id.clone(), speed)
        })
        .collect();

    let samples: Vec<f64> = per_tagger
        .values()
        .map(|s| s.seconds_per_tag)
        .filter(|s| *s > 0.0 && s.is_finite())
        .collect();

    if samples.is_empty() {
        return SpeedSummary {
            taggers_with_speed: per_tagger.len(),
            per_tagger,
            ..SpeedSummary::default()
        };
    }

    let data = Data::new(samples);
    SpeedSummary {
        taggers_with_speed: per_tagger.len(),
        mean_seconds_per_tag: data.mean().unwrap_or(0.0),
        median_seconds_per_tag: data.median(),
        min_seconds_per_tag: data.min(),
        max_seconds_per_tag: data.max(),
        per_tagger,
    }
}
