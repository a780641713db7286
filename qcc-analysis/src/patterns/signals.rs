//! Whole-sequence heuristics: longest run, alternation ratio, repeated n-grams.

use std::collections::BTreeMap;

use qcc_core::config::PatternConfig;
use qcc_core::{
    Alternations, Characteristic, FxHashMap, LongestRun, PatternFlag, PatternSignals,
    PatternSignalsStrategy, TagValue, Tagger,
};
use tracing::debug;

use super::sequence::{binary_stream, sequence_string};

/// Default [`PatternSignalsStrategy`].
#[derive(Debug, Clone)]
pub struct SimpleSequencePatterns {
    config: PatternConfig,
}

impl SimpleSequencePatterns {
    pub fn new() -> Self {
        Self {
            config: PatternConfig::default(),
        }
    }

    pub fn with_config(config: PatternConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// Analyze a `Y`/`N` sequence. Other characters are treated as opaque symbols.
    pub fn analyze_sequence(&self, sequence: &str) -> PatternSignals {
        let symbols: Vec<char> = sequence.chars().collect();
        let n = symbols.len();
        if n == 0 {
            return PatternSignals::empty(0);
        }

        let longest_run = longest_run(&symbols);
        let alternations = alternations(&symbols);
        let top_repeats = self.repeated_ngrams(&symbols);

        let mut runs_summary = Vec::new();
        if longest_run.length >= self.config.long_run_threshold {
            if let Some(value) = longest_run.value {
                runs_summary.push(PatternFlag::LongRun {
                    value,
                    length: longest_run.length,
                });
            }
        }
        if n >= self.config.alternation_min_length
            && alternations.ratio >= self.config.alternation_ratio_threshold
        {
            runs_summary.push(PatternFlag::HighAlternation {
                switches: alternations.switches,
                ratio: alternations.ratio,
            });
        }
        if !top_repeats.is_empty() {
            runs_summary.push(PatternFlag::RepeatedNgrams {
                ngrams: top_repeats.clone(),
            });
        }

        PatternSignals {
            patterns_found: !runs_summary.is_empty(),
            sequence_length: n,
            longest_run,
            alternations,
            top_repeats,
            runs_summary,
        }
    }

    /// N-grams for every configured N occurring at least the repeat threshold.
    fn repeated_ngrams(&self, symbols: &[char]) -> BTreeMap<String, usize> {
        let mut repeats = BTreeMap::new();
        for size in self.config.ngram_min..=self.config.ngram_max {
            if size == 0 || size > symbols.len() {
                continue;
            }
            let mut counts: FxHashMap<String, usize> = FxHashMap::default();
            for window in symbols.windows(size) {
                *counts.entry(window.iter().collect()).or_default() += 1;
            }
            for (gram, count) in counts {
                if count >= self.config.ngram_repeat_threshold {
                    let best = repeats.entry(gram).or_insert(0);
                    *best = (*best).max(count);
                }
            }
        }
        repeats
    }
}

impl Default for SimpleSequencePatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternSignalsStrategy for SimpleSequencePatterns {
    fn name(&self) -> &'static str {
        "simple_sequence_patterns"
    }

    fn analyze(&self, tagger: &Tagger, characteristic: &Characteristic) -> PatternSignals {
        let stream = binary_stream(tagger.events_for(&characteristic.id));
        let signals = self.analyze_sequence(&sequence_string(&stream));
        debug!(
            tagger_id = %tagger.id,
            characteristic_id = %characteristic.id,
            sequence_length = signals.sequence_length,
            flags = signals.runs_summary.len(),
            "pattern signals"
        );
        signals
    }
}

fn longest_run(symbols: &[char]) -> LongestRun {
    let mut best: Option<(char, usize)> = None;
    let mut current: Option<(char, usize)> = None;

    for &symbol in symbols {
        current = match current {
            Some((prev, len)) if prev == symbol => Some((prev, len + 1)),
            _ => Some((symbol, 1)),
        };
        if let Some((symbol, len)) = current {
            if best.map_or(true, |(_, best_len)| len > best_len) {
                best = Some((symbol, len));
            }
        }
    }

    match best {
        Some((symbol, length)) => LongestRun {
            value: symbol_value(symbol),
            length,
        },
        None => LongestRun::default(),
    }
}

fn alternations(symbols: &[char]) -> Alternations {
    if symbols.len() < 2 {
        return Alternations::default();
    }
    let switches = symbols.windows(2).filter(|w| w[0] != w[1]).count();
    Alternations {
        switches,
        ratio: switches as f64 / (symbols.len() - 1) as f64,
    }
}

fn symbol_value(symbol: char) -> Option<TagValue> {
    match symbol {
        'Y' => Some(TagValue::Yes),
        'N' => Some(TagValue::No),
        _ => None,
    }
}
