//! Speed engine: log2 gaps, trimming, seconds per tag, summary.

use chrono::{DateTime, Duration, TimeZone, Utc};
use qcc_analysis::speed::{log_intervals, speed_summary, LogTrimTaggingSpeed};
use qcc_core::config::SpeedConfig;
use qcc_core::{TagAssignment, TagValue, TaggingSpeedStrategy, Tagger};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
}

fn tagger_at(id: &str, offsets: &[i64]) -> Tagger {
    let events = offsets
        .iter()
        .enumerate()
        .map(|(i, secs)| {
            let timestamp = t0() + Duration::seconds(*secs);
            TagAssignment::new(id, format!("c{i}"), "ch1", TagValue::Yes, timestamp).unwrap()
        })
        .collect();
    Tagger::with_events(id, events)
}

#[test]
fn nonzero_for_uneven_gaps() {
    let speed = LogTrimTaggingSpeed::new();
    let t = tagger_at("t1", &[0, 2, 5]);
    assert!(speed.speed_log2(&t) > 0.0);
    assert!(speed.seconds_per_tag(&t) > 0.0);
}

#[test]
fn one_second_gap_is_one_second_per_tag() {
    let speed = LogTrimTaggingSpeed::new();
    let t = tagger_at("t1", &[0, 1]);
    assert_eq!(log_intervals(t.events()), vec![0.0]);
    assert_eq!(speed.speed_log2(&t), 0.0);
    assert_eq!(speed.seconds_per_tag(&t), 1.0);
}

#[test]
fn insufficient_data_is_zero() {
    let speed = LogTrimTaggingSpeed::new();
    for t in [tagger_at("t0", &[]), tagger_at("t1", &[0])] {
        assert!(log_intervals(t.events()).is_empty());
        assert_eq!(speed.speed_log2(&t), 0.0);
        assert_eq!(speed.seconds_per_tag(&t), 0.0);
    }
}

#[test]
fn long_break_is_trimmed() {
    // Nine 4s gaps then one 1024s gap.
    let mut offsets: Vec<i64> = (0..10).map(|i| i * 4).collect();
    offsets.push(36 + 1024);
    let t = tagger_at("t1", &offsets);

    let speed = LogTrimTaggingSpeed::new();
    assert_eq!(speed.speed_log2(&t), 2.0);
    assert_eq!(speed.seconds_per_tag(&t), 4.0);
}

#[test]
fn zero_and_negative_gaps_are_dropped() {
    // Unsorted input with a duplicate timestamp.
    let t = tagger_at("t1", &[8, 0, 0, 4]);
    let intervals = log_intervals(t.events());
    assert_eq!(intervals, vec![2.0, 2.0]);
}

#[test]
fn sub_millisecond_gap_is_kept() {
    let events = vec![
        TagAssignment::new("t1", "c0", "ch1", TagValue::Yes, t0()).unwrap(),
        TagAssignment::new("t1", "c1", "ch1", TagValue::No, t0() + Duration::microseconds(500))
            .unwrap(),
    ];
    let t = Tagger::with_events("t1", events);

    assert_eq!(log_intervals(t.events()).len(), 1);
    let speed = LogTrimTaggingSpeed::new();
    assert!((speed.speed_log2(&t) - 0.0005f64.log2()).abs() < 1e-9);
    assert!((speed.seconds_per_tag(&t) - 0.0005).abs() < 1e-12);
}

#[test]
fn all_simultaneous_events_are_insufficient() {
    let t = tagger_at("t1", &[5, 5, 5]);
    let speed = LogTrimTaggingSpeed::new();
    assert_eq!(speed.speed_log2(&t), 0.0);
    assert_eq!(speed.seconds_per_tag(&t), 0.0);
}

#[test]
fn zero_trim_keeps_outlier() {
    let mut offsets: Vec<i64> = (0..10).map(|i| i * 4).collect();
    offsets.push(36 + 1024);
    let t = tagger_at("t1", &offsets);

    let speed = LogTrimTaggingSpeed::with_config(&SpeedConfig { trim_fraction: 0.0 });
    assert_eq!(speed.speed_log2(&t), 2.8);
}

#[test]
fn speed_is_idempotent() {
    let t = tagger_at("t1", &[0, 3, 10, 11, 40, 41]);
    let speed = LogTrimTaggingSpeed::default();
    assert_eq!(speed.speed_log2(&t), speed.speed_log2(&t));
}

#[test]
fn summary_over_taggers() {
    let taggers = vec![
        tagger_at("fast", &[0, 2, 4]),
        tagger_at("slow", &[0, 8, 16]),
        tagger_at("mid", &[0, 4, 8]),
        tagger_at("single", &[0]),
    ];
    let summary = speed_summary(&taggers, &LogTrimTaggingSpeed::new());

    assert_eq!(summary.taggers_with_speed, 3);
    assert!(!summary.per_tagger.contains_key("single"));
    assert_eq!(summary.per_tagger["fast"].seconds_per_tag, 2.0);
    assert_eq!(summary.min_seconds_per_tag, 2.0);
    assert_eq!(summary.max_seconds_per_tag, 8.0);
    assert!((summary.median_seconds_per_tag - 4.0).abs() < 1e-9);
    assert!((summary.mean_seconds_per_tag - 14.0 / 3.0).abs() < 1e-9);
}

#[test]
fn summary_empty_is_zeroed() {
    let summary = speed_summary(&[], &LogTrimTaggingSpeed::new());
    assert_eq!(summary.taggers_with_speed, 0);
    assert_eq!(summary.mean_seconds_per_tag, 0.0);
    assert_eq!(summary.median_seconds_per_tag, 0.0);
}
