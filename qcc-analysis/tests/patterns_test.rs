//! Pattern engine: sequence signals and the window scan over tagger streams.

use chrono::{DateTime, Duration, TimeZone, Utc};
use qcc_analysis::patterns::{binary_stream, known_pattern_counts, scan_windows, sequence_string};
use qcc_analysis::SimpleSequencePatterns;
use qcc_core::{
    Characteristic, PatternFlag, PatternSignalsStrategy, TagAssignment, TagValue, Tagger,
};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
}

fn tagger_with(values: &[TagValue]) -> Tagger {
    let events = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let timestamp = t0() + Duration::seconds(i as i64);
            TagAssignment::new("t1", format!("c{i}"), "ch1", *v, timestamp).unwrap()
        })
        .collect();
    Tagger::with_events("t1", events)
}

fn ch1() -> Characteristic {
    Characteristic::new("ch1", "Relevant").unwrap()
}

fn from_symbols(sequence: &str) -> Vec<TagValue> {
    sequence
        .chars()
        .map(|c| if c == 'Y' { TagValue::Yes } else { TagValue::No })
        .collect()
}

// ---- Signals ----

#[test]
fn long_yes_run_is_flagged() {
    let tagger = tagger_with(&[TagValue::Yes; 12]);
    let signals = SimpleSequencePatterns::new().analyze(&tagger, &ch1());

    assert!(signals.patterns_found);
    assert_eq!(signals.sequence_length, 12);
    assert_eq!(signals.longest_run.value, Some(TagValue::Yes));
    assert_eq!(signals.longest_run.length, 12);
    assert!(matches!(
        signals.runs_summary[0],
        PatternFlag::LongRun { value: TagValue::Yes, length: 12 }
    ));
}

#[test]
fn alternating_stream_is_flagged() {
    let tagger = tagger_with(&from_symbols("YNYNYNYNYNYN"));
    let signals = SimpleSequencePatterns::new().analyze(&tagger, &ch1());

    assert!(signals.alternations.ratio >= 0.9);
    assert_eq!(signals.alternations.switches, 11);
    assert!(signals.patterns_found);
    assert!(signals
        .runs_summary
        .iter()
        .any(|f| matches!(f, PatternFlag::HighAlternation { .. })));
}

#[test]
fn repeated_trigram_is_flagged() {
    let tagger = tagger_with(&from_symbols(&"YNY".repeat(6)));
    let signals = SimpleSequencePatterns::new().analyze(&tagger, &ch1());

    assert!(signals.top_repeats.get("YNY").copied().unwrap_or(0) >= 5);
    assert!(signals.patterns_found);
}

#[test]
fn two_tags_are_not_a_pattern() {
    let tagger = tagger_with(&[TagValue::Yes, TagValue::No]);
    let signals = SimpleSequencePatterns::new().analyze(&tagger, &ch1());

    assert!(!signals.patterns_found);
    assert!(signals.runs_summary.is_empty());
    assert_eq!(signals.sequence_length, 2);
}

#[test]
fn non_binary_values_are_ignored() {
    let mut values = vec![TagValue::Yes; 12];
    values[3] = TagValue::NotApplicable;
    values[7] = TagValue::Skip;
    let tagger = tagger_with(&values);
    let signals = SimpleSequencePatterns::new().analyze(&tagger, &ch1());

    assert_eq!(signals.sequence_length, 10);
    assert_eq!(signals.longest_run.length, 10);
}

#[test]
fn other_characteristics_do_not_leak() {
    let tagger = tagger_with(&[TagValue::Yes; 12]);
    let other = Characteristic::new("ch2", "Other").unwrap();
    let signals = SimpleSequencePatterns::new().analyze(&tagger, &other);

    assert_eq!(signals.sequence_length, 0);
    assert!(!signals.patterns_found);
}

// ---- Stream ----

#[test]
fn stream_is_time_ordered() {
    let late =
        TagAssignment::new("t1", "c1", "ch1", TagValue::No, t0() + Duration::seconds(10)).unwrap();
    let early = TagAssignment::new("t1", "c2", "ch1", TagValue::Yes, t0()).unwrap();
    let events = vec![late, early];
    let stream = binary_stream(&events);
    assert_eq!(sequence_string(&stream), "YN");
}

// ---- Windows ----

#[test]
fn window_scan_over_tagger_stream() {
    let tagger = tagger_with(&[TagValue::Yes; 12]);
    let stream = binary_stream(tagger.events());
    let scan = scan_windows(&sequence_string(&stream));

    assert!(scan.pattern_detected());
    assert!(scan.patterns.contains("YYYY"));
    assert_eq!(scan.coverage_pct, 100.0);
    assert_eq!(scan.patterns_at(11), vec!["YYYY".to_string()]);
}

#[test]
fn window_scan_alternating() {
    let scan = scan_windows("YNYNYNYNYNYN");
    assert_eq!(scan.windows.len(), 1);
    assert_eq!(scan.windows[0].pattern, "YNYN");
}

#[test]
fn window_scan_random_like_sequence_has_no_hits() {
    let scan = scan_windows("YNNYYYNYNNNYYNYY");
    assert!(!scan.pattern_detected());
    assert_eq!(scan.covered_positions, 0);
    assert!(scan.patterns_at(0).is_empty());
}

#[test]
fn known_patterns_are_counted_without_overlap() {
    let counts = known_pattern_counts("YYYYNYN");
    assert_eq!(counts["YY"], 2);
    assert_eq!(counts["YNY"], 1);
    assert_eq!(counts["NN"], 0);
    assert_eq!(counts.len(), 7);
}
