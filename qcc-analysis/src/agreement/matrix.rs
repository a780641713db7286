//! Full pairwise percent-agreement matrix.

use std::collections::{BTreeMap, BTreeSet};

use qcc_core::TagAssignment;

use super::percent::percent_from_pairs;
use crate::resolver::resolve_latest;

/// `tagger_id -> tagger_id -> percent agreement`.
pub type AgreementMatrix = BTreeMap<String, BTreeMap<String, f64>>;

/// Symmetric matrix with a diagonal of `1.0`.
///
/// Rows cover every tagger with any event for the characteristic, including
/// taggers whose only events are NA; their off-diagonal cells are `0.0`.
pub fn agreement_matrix(assignments: &[TagAssignment], characteristic_id: &str) -> AgreementMatrix {
    let taggers: BTreeSet<&str> = assignments
        .iter()
        .filter(|a| a.characteristic_id() == characteristic_id)
        .map(TagAssignment::tagger_id)
        .collect();
    let labels = resolve_latest(assignments, characteristic_id);

    let mut matrix: AgreementMatrix = taggers
        .iter()
        .map(|id| {
            let mut row = BTreeMap::new();
            row.insert(id.to_string(), 1.0);
            (id.to_string(), row)
        })
        .collect();

    let ordered: Vec<&str> = taggers.into_iter().collect();
    for (i, a) in ordered.iter().enumerate() {
        for b in &ordered[i + 1..] {
            let score = percent_from_pairs(&labels.overlap(a, b));
            if let Some(row) = matrix.get_mut(*a) {
                row.insert(b.to_string(), score);
            }
            if let Some(row) = matrix.get_mut(*b) {
                row.insert(a.to_string(), score);
            }
        }
    }

    matrix
}
