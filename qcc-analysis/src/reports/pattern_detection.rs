//! Per-event pattern detection from two perspectives.
//!
//! Windows are scanned per (tagger, assignment id) and never cross an
//! assignment boundary. Events without an assignment id are not reported.
//!
//! Horizontal: each assignment's YES/NO stream across characteristics.
//! Vertical: each assignment's stream within one characteristic.

use chrono::{DateTime, Utc};
use qcc_core::{Characteristic, FxHashMap, TagAssignment, Tagger};
use serde::Serialize;

use crate::patterns::{binary_stream, scan_windows, sequence_string};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Perspective {
    Horizontal,
    Vertical,
}

/// One eligible event and the window patterns covering it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternEntry {
    pub tagger_id: String,
    pub assignment_id: String,
    pub comment_id: String,
    pub characteristic_id: String,
    pub prompt_id: Option<String>,
    pub team_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub patterns: Vec<String>,
    pub pattern_detected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacteristicPatterns {
    pub characteristic_id: String,
    pub entries: Vec<PatternEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PatternDetectionReport {
    pub horizontal: Vec<PatternEntry>,
    /// Characteristics without any eligible event are omitted.
    pub vertical: Vec<CharacteristicPatterns>,
}

/// Flat row for tabular export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternRow {
    pub perspective: Perspective,
    #[serde(flatten)]
    pub entry: PatternEntry,
}

impl PatternDetectionReport {
    pub fn build(taggers: &[Tagger], characteristics: &[Characteristic]) -> Self {
        let horizontal = taggers
            .iter()
            .flat_map(|tagger| group_by_assignment(tagger.events()))
            .flat_map(|(assignment_id, events)| {
                entries_for(assignment_id, &binary_stream(events))
            })
            .collect();

        let vertical = characteristics
            .iter()
            .filter_map(|characteristic| {
                let entries: Vec<PatternEntry> = taggers
                    .iter()
                    .flat_map(|tagger| group_by_assignment(tagger.events_for(&characteristic.id)))
                    .flat_map(|(assignment_id, events)| {
                        entries_for(assignment_id, &binary_stream(events))
                    })
                    .collect();
                (!entries.is_empty()).then(|| CharacteristicPatterns {
                    characteristic_id: characteristic.id.clone(),
                    entries,
                })
            })
            .collect();

        Self {
            horizontal,
            vertical,
        }
    }

    /// Horizontal rows first, then vertical rows in characteristic order.
    pub fn rows(&self) -> Vec<PatternRow> {
        let horizontal = self.horizontal.iter().map(|entry| PatternRow {
            perspective: Perspective::Horizontal,
            entry: entry.clone(),
        });
        let vertical = self.vertical.iter().flat_map(|group| {
            group.entries.iter().map(|entry| PatternRow {
                perspective: Perspective::Vertical,
                entry: entry.clone(),
            })
        });
        horizontal.chain(vertical).collect()
    }

    pub fn detected_count(&self) -> usize {
        self.rows().iter().filter(|r| r.entry.pattern_detected).count()
    }
}

/// Events grouped by assignment id, groups in first-seen order.
fn group_by_assignment<'a, I>(events: I) -> Vec<(&'a str, Vec<&'a TagAssignment>)>
where
    I: IntoIterator<Item = &'a TagAssignment>,
{
    let mut slots: FxHashMap<&str, usize> = FxHashMap::default();
    let mut groups: Vec<(&str, Vec<&TagAssignment>)> = Vec::new();
    for event in events {
        let Some(assignment_id) = event.event_id() else {
            continue;
        };
        let slot = *slots.entry(assignment_id).or_insert_with(|| {
            groups.push((assignment_id, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(event);
    }
    groups
}

fn entries_for(assignment_id: &str, stream: &[&TagAssignment]) -> Vec<PatternEntry> {
    let scan = scan_windows(&sequence_string(stream));
    stream
        .iter()
        .enumerate()
        .map(|(position, event)| {
            let patterns = scan.patterns_at(position);
            PatternEntry {
                tagger_id: event.tagger_id().to_string(),
                assignment_id: assignment_id.to_string(),
                comment_id: event.comment_id().to_string(),
                characteristic_id: event.characteristic_id().to_string(),
                prompt_id: event.prompt_id().map(str::to_string),
                team_id: event.team_id().map(str::to_string),
                timestamp: event.timestamp(),
                pattern_detected: !patterns.is_empty(),
                patterns,
            }
        })
        .collect()
}
