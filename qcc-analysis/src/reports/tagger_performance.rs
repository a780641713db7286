//! Per-tagger performance: speed, patterns, and agreement with peers.

use std::collections::BTreeMap;

use qcc_core::config::QccConfig;
use qcc_core::{
    Characteristic, PatternSignals, PatternSignalsStrategy, TaggingSpeedStrategy, Tagger,
};
use rayon::prelude::*;
use serde::Serialize;

use crate::agreement::{per_tagger_agreement, TaggerAgreement};
use crate::patterns::{
    binary_stream, known_pattern_counts, scan_windows, sequence_string, WindowScan,
};
use crate::speed::TaggerSpeed;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacteristicPerformance {
    pub num_assignments: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signals: Option<PatternSignals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows: Option<WindowScan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known_patterns: Option<BTreeMap<String, usize>>,
    /// Absent when the tagger shares no resolved comment with anyone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreement: Option<TaggerAgreement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggerPerformance {
    pub tagger_id: String,
    pub num_assignments: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<TaggerSpeed>,
    pub characteristics: BTreeMap<String, CharacteristicPerformance>,
}

/// One entry per tagger, in input order. Taggers are evaluated in parallel.
pub fn tagger_performance(
    taggers: &[Tagger],
    characteristics: &[Characteristic],
    speed: &dyn TaggingSpeedStrategy,
    patterns: &dyn PatternSignalsStrategy,
    config: &QccConfig,
) -> Vec<TaggerPerformance> {
    let reporting = &config.reporting;
    let methods: Vec<_> = config.agreement.pairwise_methods().collect();

    let agreement: BTreeMap<&str, BTreeMap<String, TaggerAgreement>> =
        if reporting.include_agreement && !methods.is_empty() {
            characteristics
                .par_iter()
                .map(|c| (c.id.as_str(), per_tagger_agreement(taggers, &c.id, &methods)))
                .collect()
        } else {
            BTreeMap::new()
        };

    taggers
        .par_iter()
        .map(|tagger| {
            let per_characteristic = characteristics
                .iter()
                .filter_map(|characteristic| {
                    let num_assignments = tagger.events_for(&characteristic.id).count();
                    if num_assignments == 0 {
                        return None;
                    }

                    let (signals, windows, known_patterns) = if reporting.include_patterns {
                        let stream = binary_stream(tagger.events_for(&characteristic.id));
                        let sequence = sequence_string(&stream);
                        (
                            Some(patterns.analyze(tagger, characteristic)),
                            Some(scan_windows(&sequence)),
                            Some(known_pattern_counts(&sequence)),
                        )
                    } else {
                        (None, None, None)
                    };

                    let tagger_agreement = agreement
                        .get(characteristic.id.as_str())
                        .and_then(|by_tagger| by_tagger.get(&tagger.id))
                        .cloned();

                    Some((
                        characteristic.id.clone(),
                        CharacteristicPerformance {
                            num_assignments,
                            signals,
                            windows,
                            known_patterns,
                            agreement: tagger_agreement,
                        },
                    ))
                })
                .collect();

            TaggerPerformance {
                tagger_id: tagger.id.clone(),
                num_assignments: tagger.events().len(),
                speed: reporting.include_speed.then(|| TaggerSpeed {
                    speed_log2: speed.speed_log2(tagger),
                    seconds_per_tag: speed.seconds_per_tag(tagger),
                }),
                characteristics: per_characteristic,
            }
        })
        .collect()
}
