//! Dataset-wide totals.

use std::collections::{BTreeMap, BTreeSet};

use qcc_core::{Dataset, TagValue, TaggingSpeedStrategy, Tagger};
use serde::Serialize;

use crate::speed::{speed_summary, SpeedSummary};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub total_assignments: usize,
    pub total_comments: usize,
    pub total_taggers: usize,
    pub total_characteristics: usize,
    pub total_prompts: usize,
    pub assignments_by_value: BTreeMap<TagValue, usize>,
    pub assignments_by_characteristic: BTreeMap<String, usize>,
    pub assignments_per_comment: BTreeMap<String, usize>,
    pub tagger_activity: BTreeMap<String, usize>,
    pub comments_without_tags: Vec<String>,
    pub average_tags_per_comment: f64,
    pub characteristic_labels: BTreeMap<String, String>,
    pub speed: SpeedSummary,
}

/// Summarize `dataset`.
///
/// When the dataset carries no comment records, comments are the distinct
/// comment ids seen in assignments.
pub fn dataset_summary(
    dataset: &Dataset,
    taggers: &[Tagger],
    speed: &dyn TaggingSpeedStrategy,
) -> DatasetSummary {
    let assignments = &dataset.assignments;

    let mut assignments_by_value: BTreeMap<TagValue, usize> = BTreeMap::new();
    let mut assignments_by_characteristic: BTreeMap<String, usize> = BTreeMap::new();
    let mut tagged: BTreeMap<&str, usize> = BTreeMap::new();
    for assignment in assignments {
        *assignments_by_value.entry(assignment.value()).or_default() += 1;
        *assignments_by_characteristic
            .entry(assignment.characteristic_id().to_string())
            .or_default() += 1;
        *tagged.entry(assignment.comment_id()).or_default() += 1;
    }

    let comment_ids: BTreeSet<&str> = if dataset.comments.is_empty() {
        tagged.keys().copied().collect()
    } else {
        dataset.comments.iter().map(|c| c.id.as_str()).collect()
    };
    let assignments_per_comment: BTreeMap<String, usize> = comment_ids
        .iter()
        .map(|id| (id.to_string(), tagged.get(id).copied().unwrap_or(0)))
        .collect();
    let comments_without_tags = assignments_per_comment
        .iter()
        .filter(|(_, count)| **count == 0)
        .map(|(id, _)| id.clone())
        .collect();

    let total_comments = comment_ids.len();
    let average_tags_per_comment = if total_comments == 0 {
        0.0
    } else {
        assignments.len() as f64 / total_comments as f64
    };

    DatasetSummary {
        total_assignments: assignments.len(),
        total_comments,
        total_taggers: taggers.len(),
        total_characteristics: dataset.characteristics.len(),
        total_prompts: dataset.prompts.len(),
        assignments_by_value,
        assignments_by_characteristic,
        assignments_per_comment,
        tagger_activity: taggers
            .iter()
            .map(|t| (t.id.clone(), t.events().len()))
            .collect(),
        comments_without_tags,
        average_tags_per_comment,
        characteristic_labels: dataset
            .characteristics
            .iter()
            .map(|c| (c.id.clone(), c.name.clone()))
            .collect(),
        speed: speed_summary(taggers, speed),
    }
}
