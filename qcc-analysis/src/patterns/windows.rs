//! Fixed-window repeating-pattern scan.
//!
//! Pass one looks for windows that are a period-4 pattern repeated three
//! times. Each hit, in hit order, is then collapsed to a single sentinel
//! symbol at its recorded start, so every collapse shifts the spans after it.
//! Pass two looks for period-3 patterns repeated four times over the
//! collapsed sequence, skipping any window that contains a sentinel.
//!
//! Period-3 starts are positions in the collapsed sequence and are applied
//! to the original positions unchanged. Reports keyed on these positions
//! depend on that shift.

use std::collections::BTreeSet;

use serde::Serialize;

/// Length of every scanned window.
pub const WINDOW_LENGTH: usize = 12;

const CONSUMED: u8 = b'#';

/// One hit: the window starting at `start` is `pattern` repeated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternWindow {
    pub start: usize,
    pub pattern: String,
}

impl PatternWindow {
    pub fn covers(&self, position: usize) -> bool {
        (self.start..self.start + WINDOW_LENGTH).contains(&position)
    }
}

/// Result of scanning one sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WindowScan {
    /// Period-4 hits in scan order, then period-3 hits in scan order.
    pub windows: Vec<PatternWindow>,
    pub patterns: BTreeSet<String>,
    pub eligible_positions: usize,
    pub covered_positions: usize,
    /// `covered / eligible * 100`, rounded to 2 decimals.
    pub coverage_pct: f64,
}

impl WindowScan {
    pub fn pattern_detected(&self) -> bool {
        !self.windows.is_empty()
    }

    /// Distinct patterns of every window covering `position`, sorted.
    pub fn patterns_at(&self, position: usize) -> Vec<String> {
        self.windows
            .iter()
            .filter(|w| w.covers(position))
            .map(|w| w.pattern.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Scan a `Y`/`N` sequence for period-4 then period-3 repeating windows.
pub fn scan_windows(sequence: &str) -> WindowScan {
    let mut symbols: Vec<u8> = sequence.bytes().collect();
    let eligible_positions = symbols.len();

    let track_4 = scan_period(&symbols, 4);
    for window in &track_4 {
        let start = window.start.min(symbols.len());
        let end = (window.start + WINDOW_LENGTH).min(symbols.len());
        symbols.splice(start..end, [CONSUMED]);
    }
    let track_3 = scan_period(&symbols, 3);

    let windows: Vec<PatternWindow> = track_4.into_iter().chain(track_3).collect();

    let mut covered = vec![false; eligible_positions];
    for window in &windows {
        let end = (window.start + WINDOW_LENGTH).min(eligible_positions);
        for slot in covered.iter_mut().take(end).skip(window.start) {
            *slot = true;
        }
    }
    let covered_positions = covered.iter().filter(|c| **c).count();
    let coverage_pct = if eligible_positions == 0 {
        0.0
    } else {
        (covered_positions as f64 / eligible_positions as f64 * 100.0 * 100.0).round() / 100.0
    };

    WindowScan {
        patterns: windows.iter().map(|w| w.pattern.clone()).collect(),
        windows,
        eligible_positions,
        covered_positions,
        coverage_pct,
    }
}

/// Advance by one on a miss and by a full window on a hit.
fn scan_period(symbols: &[u8], period: usize) -> Vec<PatternWindow> {
    let mut hits = Vec::new();
    let mut start = 0;

    while start + WINDOW_LENGTH <= symbols.len() {
        let window = &symbols[start..start + WINDOW_LENGTH];
        if window.contains(&CONSUMED) {
            start += WINDOW_LENGTH;
            continue;
        }

        let head = &window[..period];
        if window.chunks(period).all(|chunk| chunk == head) {
            hits.push(PatternWindow {
                start,
                pattern: String::from_utf8_lossy(head).into_owned(),
            });
            start += WINDOW_LENGTH;
        } else {
            start += 1;
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_twelve() {
        let scan = scan_windows("YYYYYYYYYYYY");
        assert_eq!(
            scan.windows,
            vec![PatternWindow {
                start: 0,
                pattern: "YYYY".to_string()
            }]
        );
        assert_eq!(scan.coverage_pct, 100.0);
    }

    #[test]
    fn test_period_three_found_after_period_four_miss() {
        let scan = scan_windows("YNNYNNYNNYNN");
        assert_eq!(scan.windows.len(), 1);
        assert_eq!(scan.windows[0].pattern, "YNN");
    }

    fn found(scan: &WindowScan) -> Vec<(usize, &str)> {
        scan.windows.iter().map(|w| (w.start, w.pattern.as_str())).collect()
    }

    #[test]
    fn test_collapsed_span_hides_trailing_period_three() {
        // After the collapse only 13 symbols remain and every window holds the sentinel.
        let sequence = format!("{}{}", "Y".repeat(12), "YNN".repeat(4));
        let scan = scan_windows(&sequence);
        assert_eq!(found(&scan), vec![(0, "YYYY")]);
        assert_eq!(scan.covered_positions, 12);
    }

    #[test]
    fn test_period_three_start_is_in_collapsed_positions() {
        // "YNN#" + "YNN"*8: the period-3 hit sits at 12 in the collapsed sequence.
        let sequence = format!("YNN{}{}", "Y".repeat(12), "YNN".repeat(8));
        let scan = scan_windows(&sequence);
        assert_eq!(found(&scan), vec![(3, "YYYY"), (12, "NYN")]);
        assert_eq!(scan.patterns_at(13), vec!["NYN".to_string(), "YYYY".to_string()]);
        assert_eq!(scan.covered_positions, 21);
        assert_eq!(scan.eligible_positions, 39);
    }

    #[test]
    fn test_later_period_four_hits_collapse_shifted_spans() {
        // The second collapse removes [12, 24) of the 37 symbols left by the
        // first, eating into the YNN tail; the remaining tail is too short.
        let sequence = format!("{}{}{}", "Y".repeat(12), "N".repeat(12), "YNN".repeat(8));
        let scan = scan_windows(&sequence);
        assert_eq!(found(&scan), vec![(0, "YYYY"), (12, "NNNN")]);
        assert_eq!(scan.covered_positions, 24);
    }

    #[test]
    fn test_short_sequence_has_no_windows() {
        let scan = scan_windows("YNYNYNYNYNY");
        assert!(!scan.pattern_detected());
        assert_eq!(scan.coverage_pct, 0.0);
        assert_eq!(scan.eligible_positions, 11);
    }

    #[test]
    fn test_coverage_rounds_to_two_decimals() {
        // 12 covered out of 13.
        let scan = scan_windows("YYYYYYYYYYYYN");
        assert_eq!(scan.covered_positions, 12);
        assert_eq!(scan.coverage_pct, 92.31);
    }
}
