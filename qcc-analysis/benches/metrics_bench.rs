//! Metric engine benchmarks.
//!
//! Synthetic crowd of 50 taggers over 400 comments with mostly-agreeing labels.

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use qcc_analysis::agreement::{agreement_matrix, krippendorffs_alpha};
use qcc_analysis::{scan_windows, SimpleSequencePatterns};
use qcc_core::{TagAssignment, TagValue};

fn make_assignments(taggers: usize, comments: usize) -> Vec<TagAssignment> {
    let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let mut out = Vec::with_capacity(taggers * comments / 4);
    for t in 0..taggers {
        for c in (t % 4..comments).step_by(4) {
            let value = if (c + t) % 7 == 0 { TagValue::No } else { TagValue::Yes };
            let ts = base + Duration::seconds((t * comments + c) as i64 * 3);
            let assignment = TagAssignment::new(format!("t{t}"), format!("c{c}"), "ch1", value, ts);
            out.push(assignment.unwrap());
        }
    }
    out
}

fn bench_alpha(c: &mut Criterion) {
    let assignments = make_assignments(50, 400);
    c.bench_function("krippendorffs_alpha_50x400", |b| {
        b.iter(|| krippendorffs_alpha(black_box(&assignments), "ch1"));
    });
}

fn bench_matrix(c: &mut Criterion) {
    let assignments = make_assignments(50, 400);
    c.bench_function("agreement_matrix_50x400", |b| {
        b.iter(|| agreement_matrix(black_box(&assignments), "ch1"));
    });
}

fn bench_windows(c: &mut Criterion) {
    let sequence: String = (0..5_000)
        .map(|i| if i % 13 == 0 || i % 5 == 0 { 'N' } else { 'Y' })
        .collect();
    c.bench_function("scan_windows_5k", |b| {
        b.iter(|| scan_windows(black_box(&sequence)));
    });
}

fn bench_signals(c: &mut Criterion) {
    let sequence: String = "YNNYNYYN".repeat(625);
    let patterns = SimpleSequencePatterns::new();
    c.bench_function("sequence_signals_5k", |b| {
        b.iter(|| patterns.analyze_sequence(black_box(&sequence)));
    });
}

criterion_group!(benches, bench_alpha, bench_matrix, bench_windows, bench_signals);
criterion_main!(benches);
