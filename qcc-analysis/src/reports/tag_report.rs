//! Per (comment, characteristic) tag counts and item-level alpha.

use std::collections::{BTreeMap, BTreeSet};

use qcc_core::{TagAssignment, TagValue};
use serde::Serialize;

use crate::agreement::krippendorffs_alpha;
use crate::resolver::latest_events;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagReportRow {
    pub comment_id: String,
    pub characteristic_id: String,
    pub num_taggers_could_set: usize,
    pub num_yes: usize,
    pub num_no: usize,
    pub krippendorffs_alpha: Option<f64>,
    /// Reserved for a downstream quality score; never set here.
    pub tag_quality: Option<f64>,
}

pub fn group_by_comment(assignments: &[TagAssignment]) -> BTreeMap<&str, Vec<&TagAssignment>> {
    let mut groups: BTreeMap<&str, Vec<&TagAssignment>> = BTreeMap::new();
    for assignment in assignments {
        groups.entry(assignment.comment_id()).or_default().push(assignment);
    }
    groups
}

pub fn group_by_comment_and_characteristic(
    assignments: &[TagAssignment],
) -> BTreeMap<(&str, &str), Vec<&TagAssignment>> {
    let mut groups: BTreeMap<(&str, &str), Vec<&TagAssignment>> = BTreeMap::new();
    for assignment in assignments {
        groups
            .entry((assignment.comment_id(), assignment.characteristic_id()))
            .or_default()
            .push(assignment);
    }
    groups
}

pub fn taggers_who_touched_comment<'a>(assignments: &[&'a TagAssignment]) -> BTreeSet<&'a str> {
    assignments.iter().map(|a| a.tagger_id()).collect()
}

/// `(#YES, #NO)`; other values are ignored.
pub fn count_yes_no(assignments: &[&TagAssignment]) -> (usize, usize) {
    assignments.iter().fold((0, 0), |(yes, no), a| match a.value() {
        TagValue::Yes => (yes + 1, no),
        TagValue::No => (yes, no + 1),
        _ => (yes, no),
    })
}

/// Distinct taggers who tagged `characteristic_id` on `comment_id`.
pub fn count_taggers_for(
    assignments: &[TagAssignment],
    comment_id: &str,
    characteristic_id: &str,
) -> usize {
    assignments
        .iter()
        .filter(|a| a.comment_id() == comment_id && a.characteristic_id() == characteristic_id)
        .map(TagAssignment::tagger_id)
        .collect::<BTreeSet<_>>()
        .len()
}

/// Alpha for a single item; `None` when fewer than two taggers touched it.
pub fn alpha_for_item(assignments: &[&TagAssignment], characteristic_id: &str) -> Option<f64> {
    if taggers_who_touched_comment(assignments).len() < 2 {
        return None;
    }
    krippendorffs_alpha(assignments.iter().copied(), characteristic_id)
}

/// One row per (comment, characteristic), ordered by comment then characteristic.
///
/// YES/NO counts use each tagger's latest label only.
pub fn build_tag_report(assignments: &[TagAssignment]) -> Vec<TagReportRow> {
    group_by_comment_and_characteristic(assignments)
        .into_iter()
        .map(|((comment_id, characteristic_id), group)| {
            let resolved = latest_events(group.iter().copied(), characteristic_id);
            let (num_yes, num_no) = count_yes_no(&resolved);
            TagReportRow {
                comment_id: comment_id.to_string(),
                characteristic_id: characteristic_id.to_string(),
                num_taggers_could_set: taggers_who_touched_comment(&group).len(),
                num_yes,
                num_no,
                krippendorffs_alpha: alpha_for_item(&group, characteristic_id),
                tag_quality: None,
            }
        })
        .collect()
}
