//! Percent agreement, pairwise and over the whole tagger population.

use qcc_core::{TagAssignment, TagValue, Tagger};

use crate::resolver::resolve_latest;

/// Share of equal pairs. `0.0` when there are no pairs.
pub fn percent_from_pairs(pairs: &[(TagValue, TagValue)]) -> f64 {
    if pairs.is_empty() {
        return 0.0;
    }
    let agreed = pairs.iter().filter(|(a, b)| a == b).count();
    agreed as f64 / pairs.len() as f64
}

/// Percent agreement between two taggers on their latest labels.
///
/// Only comments both taggers resolved a non-NA label for are compared.
pub fn pairwise_percent_agreement(a: &Tagger, b: &Tagger, characteristic_id: &str) -> f64 {
    let labels = resolve_latest(a.events().iter().chain(b.events()), characteristic_id);
    percent_from_pairs(&labels.overlap(&a.id, &b.id))
}

/// Agreeing unordered rater pairs over all rater pairs, summed across comments.
pub fn percent_agreement(assignments: &[TagAssignment], characteristic_id: &str) -> f64 {
    let labels = resolve_latest(assignments, characteristic_id);

    let mut agreed = 0usize;
    let mut total = 0usize;
    for raters in labels.matrix.values() {
        let values: Vec<TagValue> = raters.values().copied().collect();
        for (i, left) in values.iter().enumerate() {
            for right in &values[i + 1..] {
                total += 1;
                if left == right {
                    agreed += 1;
                }
            }
        }
    }

    if total == 0 {
        return 0.0;
    }
    agreed as f64 / total as f64
}
