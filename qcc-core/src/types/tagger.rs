//! Tagger: a crowd worker and the events attributed to them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::tag_assignment::TagAssignment;

/// A tagger aggregate.
///
/// Events are kept in the order they were supplied. Engines sort by timestamp
/// themselves and never rely on this order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tagger {
    pub id: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    events: Vec<TagAssignment>,
}

impl Tagger {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            meta: BTreeMap::new(),
            events: Vec::new(),
        }
    }

    pub fn with_events(id: impl Into<String>, events: Vec<TagAssignment>) -> Self {
        Self {
            id: id.into(),
            meta: BTreeMap::new(),
            events,
        }
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.meta.insert(key.into(), value);
        self
    }

    pub fn push(&mut self, event: TagAssignment) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[TagAssignment] {
        &self.events
    }

    /// Events for one characteristic, in stored order.
    pub fn events_for<'a>(
        &'a self,
        characteristic_id: &'a str,
    ) -> impl Iterator<Item = &'a TagAssignment> + 'a {
        self.events
            .iter()
            .filter(move |e| e.characteristic_id() == characteristic_id)
    }

    /// Build one tagger per distinct `tagger_id`, sorted by id.
    pub fn group_by_tagger(assignments: &[TagAssignment]) -> Vec<Tagger> {
        let mut grouped: BTreeMap<&str, Vec<TagAssignment>> = BTreeMap::new();
        for assignment in assignments {
            grouped
                .entry(assignment.tagger_id())
                .or_default()
                .push(assignment.clone());
        }
        grouped
            .into_iter()
            .map(|(id, events)| Tagger::with_events(id, events))
            .collect()
    }
}
