//! Two-rater Cohen's kappa.

use qcc_core::{FxHashMap, TagValue, Tagger};

use crate::resolver::resolve_latest;

/// Kappa from overlapping label pairs `(rater_a, rater_b)`.
///
/// Expected agreement comes from each rater's marginal distribution over the
/// overlap. When expected agreement is 1 the statistic is undefined; the
/// result is then `1.0` for perfect observed agreement and `0.0` otherwise.
/// Not clamped: worse-than-chance pairs come out negative.
pub fn kappa_from_pairs(pairs: &[(TagValue, TagValue)]) -> f64 {
    if pairs.is_empty() {
        return 0.0;
    }
    let n = pairs.len() as f64;

    let mut agreed = 0usize;
    let mut marginal_a: FxHashMap<TagValue, usize> = FxHashMap::default();
    let mut marginal_b: FxHashMap<TagValue, usize> = FxHashMap::default();
    for (a, b) in pairs {
        if a == b {
            agreed += 1;
        }
        *marginal_a.entry(*a).or_default() += 1;
        *marginal_b.entry(*b).or_default() += 1;
    }

    let p_o = agreed as f64 / n;
    let p_e: f64 = marginal_a
        .iter()
        .map(|(value, count_a)| {
            let count_b = marginal_b.get(value).copied().unwrap_or(0);
            (*count_a as f64 / n) * (count_b as f64 / n)
        })
        .sum();

    if (1.0 - p_e).abs() < f64::EPSILON {
        return if agreed == pairs.len() { 1.0 } else { 0.0 };
    }
    (p_o - p_e) / (1.0 - p_e)
}

/// Cohen's kappa between two taggers on their latest labels.
pub fn cohens_kappa(a: &Tagger, b: &Tagger, characteristic_id: &str) -> f64 {
    let labels = resolve_latest(a.events().iter().chain(b.events()), characteristic_id);
    kappa_from_pairs(&labels.overlap(&a.id, &b.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    use qcc_core::TagValue::{No, Yes};

    #[test]
    fn test_textbook_kappa() {
        // 20 YES/YES, 5 YES/NO, 10 NO/YES, 15 NO/NO: p_o = 0.7, p_e = 0.5.
        let mut pairs = Vec::new();
        pairs.extend(std::iter::repeat((Yes, Yes)).take(20));
        pairs.extend(std::iter::repeat((Yes, No)).take(5));
        pairs.extend(std::iter::repeat((No, Yes)).take(10));
        pairs.extend(std::iter::repeat((No, No)).take(15));
        assert!((kappa_from_pairs(&pairs) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_expected_agreement() {
        assert_eq!(kappa_from_pairs(&[(Yes, Yes), (Yes, Yes)]), 1.0);
        assert_eq!(kappa_from_pairs(&[]), 0.0);
    }

    #[test]
    fn test_systematic_disagreement_is_negative() {
        let pairs = [(Yes, No), (No, Yes)];
        assert_eq!(kappa_from_pairs(&pairs), -1.0);
    }
}
