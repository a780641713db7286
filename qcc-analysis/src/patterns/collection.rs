//! Short named patterns counted in tagger reports.

use std::collections::BTreeMap;

pub const TWO_LENGTH_PATTERNS: [&str; 2] = ["YY", "NN"];
pub const THREE_LENGTH_PATTERNS: [&str; 2] = ["YNY", "NYN"];
pub const FOUR_LENGTH_PATTERNS: [&str; 3] = ["YNYN", "YNNY", "NYYN"];

/// Every known pattern, shortest first.
pub const KNOWN_PATTERNS: [&str; 7] = ["YY", "NN", "YNY", "NYN", "YNYN", "YNNY", "NYYN"];

/// Non-overlapping left-to-right occurrences of `pattern` in `sequence`.
pub fn count_non_overlapping(pattern: &str, sequence: &str) -> usize {
    if pattern.is_empty() {
        return 0;
    }
    sequence.matches(pattern).count()
}

pub fn known_pattern_counts(sequence: &str) -> BTreeMap<String, usize> {
    KNOWN_PATTERNS
        .iter()
        .map(|p| (p.to_string(), count_non_overlapping(p, sequence)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_patterns_cover_each_length_group() {
        let grouped: Vec<&str> = TWO_LENGTH_PATTERNS
            .iter()
            .chain(&THREE_LENGTH_PATTERNS)
            .chain(&FOUR_LENGTH_PATTERNS)
            .copied()
            .collect();
        assert_eq!(grouped, KNOWN_PATTERNS.to_vec());
    }

    #[test]
    fn test_counts_do_not_overlap() {
        assert_eq!(count_non_overlapping("YY", "YYYYY"), 2);
        assert_eq!(count_non_overlapping("YNY", "YNYNY"), 1);
        assert_eq!(count_non_overlapping("", "YNYNY"), 0);
    }

    #[test]
    fn test_known_pattern_counts() {
        let counts = known_pattern_counts("YNYNNYYN");
        assert_eq!(counts["YNYN"], 1);
        assert_eq!(counts["NYYN"], 1);
        assert_eq!(counts["YY"], 1);
        assert_eq!(counts["NN"], 1);
        assert_eq!(counts.len(), 7);
    }
}
