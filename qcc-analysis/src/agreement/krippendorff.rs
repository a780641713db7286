//! Krippendorff's alpha, nominal scale.
//!
//! Units are comments; raters are taggers; values are resolved labels.
//! Only units with at least two resolved raters are pairable.

use std::collections::BTreeMap;

use qcc_core::{TagAssignment, TagValue};
use tracing::debug;

use crate::resolver::{resolve_latest, ResolvedLabels};

/// Symmetric coincidence counts over the pairable units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoincidenceMatrix {
    /// `cells[c][k]`: ordered rater pairs on a unit labeled `(c, k)`.
    pub cells: BTreeMap<TagValue, BTreeMap<TagValue, usize>>,
    /// Resolved label instances per category across pairable units.
    pub marginals: BTreeMap<TagValue, usize>,
    /// Total ordered pairs, `Σ m_u (m_u - 1)`.
    pub pairable: usize,
    /// Units with at least two raters.
    pub units: usize,
}

impl CoincidenceMatrix {
    pub fn from_labels(labels: &ResolvedLabels) -> Self {
        let mut matrix = Self::default();

        for raters in labels.matrix.values() {
            let values: Vec<TagValue> = raters.values().copied().collect();
            let m_u = values.len();
            if m_u < 2 {
                continue;
            }
            matrix.units += 1;
            matrix.pairable += m_u * (m_u - 1);

            for value in &values {
                *matrix.marginals.entry(*value).or_default() += 1;
            }
            for (i, left) in values.iter().enumerate() {
                for right in &values[i + 1..] {
                    *matrix.cells.entry(*left).or_default().entry(*right).or_default() += 1;
                    *matrix.cells.entry(*right).or_default().entry(*left).or_default() += 1;
                }
            }
        }

        matrix
    }

    pub fn cell(&self, c: TagValue, k: TagValue) -> usize {
        self.cells
            .get(&c)
            .and_then(|row| row.get(&k))
            .copied()
            .unwrap_or(0)
    }

    fn off_diagonal(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|(c, row)| row.iter().filter(move |(k, _)| *k != c))
            .map(|(_, count)| *count)
            .sum()
    }

    pub fn observed_disagreement(&self) -> f64 {
        if self.pairable == 0 {
            return 0.0;
        }
        self.off_diagonal() as f64 / self.pairable as f64
    }

    pub fn expected_disagreement(&self) -> f64 {
        if self.pairable <= 1 {
            return 0.0;
        }
        let n = self.pairable as f64;
        let sum_sq: f64 = self.marginals.values().map(|c| (*c as f64).powi(2)).sum();
        (n * n - sum_sq) / (n * (n - 1.0))
    }

    /// Alpha floored at 0 and rounded to 3 decimals; `None` with no pairable unit.
    pub fn alpha(&self) -> Option<f64> {
        if self.units == 0 {
            return None;
        }
        let d_o = self.observed_disagreement();
        let d_e = self.expected_disagreement();

        let alpha = if d_e == 0.0 {
            if d_o == 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            ((d_e - d_o) / d_e).max(0.0)
        };

        Some(round3(alpha))
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Krippendorff's alpha for one characteristic over latest labels.
pub fn krippendorffs_alpha<'a, I>(assignments: I, characteristic_id: &str) -> Option<f64>
where
    I: IntoIterator<Item = &'a TagAssignment>,
{
    let labels = resolve_latest(assignments, characteristic_id);
    let matrix = CoincidenceMatrix::from_labels(&labels);
    let alpha = matrix.alpha();
    debug!(
        characteristic_id,
        units = matrix.units,
        pairable = matrix.pairable,
        categories = labels.categories.len(),
        ?alpha,
        "krippendorff alpha"
    );
    alpha
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(units: &[&[(&str, TagValue)]]) -> ResolvedLabels {
        let mut resolved = ResolvedLabels::default();
        for (i, raters) in units.iter().enumerate() {
            let row = resolved.matrix.entry(format!("u{i}")).or_default();
            for (rater, value) in raters.iter() {
                row.insert(rater.to_string(), *value);
                resolved.categories.insert(*value);
            }
        }
        resolved
    }

    #[test]
    fn test_coincidences_are_symmetric_and_counted_both_ways() {
        let resolved = labels(&[&[
            ("a", TagValue::Yes),
            ("b", TagValue::Yes),
            ("c", TagValue::No),
        ]]);
        let m = CoincidenceMatrix::from_labels(&resolved);
        assert_eq!(m.pairable, 6);
        assert_eq!(m.cell(TagValue::Yes, TagValue::No), 2);
        assert_eq!(m.cell(TagValue::No, TagValue::Yes), 2);
        assert_eq!(m.cell(TagValue::Yes, TagValue::Yes), 2);
        assert_eq!(m.marginals[&TagValue::Yes], 2);
        assert_eq!(m.marginals[&TagValue::No], 1);
    }

    #[test]
    fn test_single_rater_units_are_not_pairable() {
        let resolved = labels(&[&[("a", TagValue::Yes)], &[("b", TagValue::No)]]);
        let m = CoincidenceMatrix::from_labels(&resolved);
        assert_eq!(m.units, 0);
        assert_eq!(m.alpha(), None);
    }

    #[test]
    fn test_expected_disagreement_formula() {
        let resolved = labels(&[
            &[("a", TagValue::Yes), ("b", TagValue::Yes), ("c", TagValue::No)],
            &[("a", TagValue::No), ("b", TagValue::No), ("c", TagValue::No)],
        ]);
        let m = CoincidenceMatrix::from_labels(&resolved);
        assert_eq!(m.pairable, 12);
        assert!((m.observed_disagreement() - 4.0 / 12.0).abs() < 1e-12);
        assert!((m.expected_disagreement() - 124.0 / 132.0).abs() < 1e-12);
        assert_eq!(m.alpha(), Some(0.645));
    }
}
