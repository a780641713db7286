use std::collections::{BTreeMap, BTreeSet};

use qcc_core::{TagAssignment, TagValue};

/// One resolved label per (comment, tagger) for one characteristic.
///
/// Ephemeral: rebuilt from raw events on every computation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedLabels {
    /// Distinct resolved values.
    pub categories: BTreeSet<TagValue>,
    /// `comment_id -> tagger_id -> value`.
    pub matrix: BTreeMap<String, BTreeMap<String, TagValue>>,
}

impl ResolvedLabels {
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Number of comments with at least one resolved label.
    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn label(&self, comment_id: &str, tagger_id: &str) -> Option<TagValue> {
        self.matrix.get(comment_id)?.get(tagger_id).copied()
    }

    /// Every tagger with at least one resolved label.
    pub fn taggers(&self) -> BTreeSet<&str> {
        self.matrix
            .values()
            .flat_map(|raters| raters.keys().map(String::as_str))
            .collect()
    }

    /// Label pairs on comments both taggers resolved, in comment order.
    pub fn overlap(&self, a: &str, b: &str) -> Vec<(TagValue, TagValue)> {
        self.matrix
            .values()
            .filter_map(|raters| Some((*raters.get(a)?, *raters.get(b)?)))
            .collect()
    }
}

/// Winning event per `(comment_id, tagger_id)`.
///
/// Later timestamps win. On an exact timestamp tie the candidate replaces the
/// incumbent when the candidate's tagger id sorts after the incumbent's value
/// string. Legacy rule, kept as-is for output compatibility.
fn select_latest<'a, I>(
    events: I,
    characteristic_id: &str,
) -> BTreeMap<(&'a str, &'a str), &'a TagAssignment>
where
    I: IntoIterator<Item = &'a TagAssignment>,
{
    let mut latest: BTreeMap<(&'a str, &'a str), &'a TagAssignment> = BTreeMap::new();

    for event in events {
        if event.characteristic_id() != characteristic_id || event.value().is_not_applicable() {
            continue;
        }
        let key = (event.comment_id(), event.tagger_id());
        let keep_incumbent = latest
            .get(&key)
            .is_some_and(|incumbent| !replaces(event, incumbent));
        if !keep_incumbent {
            latest.insert(key, event);
        }
    }

    latest
}

fn replaces(candidate: &TagAssignment, incumbent: &TagAssignment) -> bool {
    if candidate.timestamp() != incumbent.timestamp() {
        return candidate.timestamp() > incumbent.timestamp();
    }
    candidate.tagger_id() > incumbent.value().as_str()
}

/// Resolve `events` for one characteristic into a label matrix.
///
/// NA events never participate. Events for other characteristics are ignored.
pub fn resolve_latest<'a, I>(events: I, characteristic_id: &str) -> ResolvedLabels
where
    I: IntoIterator<Item = &'a TagAssignment>,
{
    let mut resolved = ResolvedLabels::default();
    for ((comment_id, tagger_id), event) in select_latest(events, characteristic_id) {
        resolved.categories.insert(event.value());
        resolved
            .matrix
            .entry(comment_id.to_string())
            .or_default()
            .insert(tagger_id.to_string(), event.value());
    }
    resolved
}

/// The winning events themselves, ordered by (comment, tagger).
pub fn latest_events<'a, I>(events: I, characteristic_id: &str) -> Vec<&'a TagAssignment>
where
    I: IntoIterator<Item = &'a TagAssignment>,
{
    select_latest(events, characteristic_id).into_values().collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn ev(tagger: &str, comment: &str, value: TagValue, secs: u32) -> TagAssignment {
        let ts = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, secs).unwrap();
        TagAssignment::new(tagger, comment, "ch1", value, ts).unwrap()
    }

    #[test]
    fn test_latest_timestamp_wins() {
        let events = vec![
            ev("a", "u1", TagValue::No, 5),
            ev("a", "u1", TagValue::Yes, 1),
        ];
        let labels = resolve_latest(&events, "ch1");
        assert_eq!(labels.label("u1", "a"), Some(TagValue::No));
    }

    #[test]
    fn test_tie_compares_tagger_id_against_incumbent_value() {
        // "t1" > "NO", so the later-seen YES replaces the incumbent.
        let events = vec![
            ev("t1", "u1", TagValue::No, 0),
            ev("t1", "u1", TagValue::Yes, 0),
        ];
        assert_eq!(resolve_latest(&events, "ch1").label("u1", "t1"), Some(TagValue::Yes));

        // "A" < "NO", so the incumbent stays.
        let events = vec![ev("A", "u1", TagValue::No, 0), ev("A", "u1", TagValue::Yes, 0)];
        assert_eq!(resolve_latest(&events, "ch1").label("u1", "A"), Some(TagValue::No));
    }

    #[test]
    fn test_na_never_resolves() {
        let events = vec![
            ev("a", "u1", TagValue::Yes, 0),
            ev("a", "u1", TagValue::NotApplicable, 9),
        ];
        let labels = resolve_latest(&events, "ch1");
        assert_eq!(labels.label("u1", "a"), Some(TagValue::Yes));
        assert_eq!(labels.categories.len(), 1);
    }

    #[test]
    fn test_overlap_only_shared_comments() {
        let events = vec![
            ev("a", "u1", TagValue::Yes, 0),
            ev("b", "u1", TagValue::No, 1),
            ev("a", "u2", TagValue::Yes, 2),
        ];
        let labels = resolve_latest(&events, "ch1");
        assert_eq!(labels.overlap("a", "b"), vec![(TagValue::Yes, TagValue::No)]);
        assert_eq!(labels.taggers().len(), 2);
    }

    #[test]
    fn test_latest_events_ordered_by_comment_then_tagger() {
        let events = vec![
            ev("b", "u2", TagValue::No, 0),
            ev("a", "u2", TagValue::Yes, 1),
            ev("a", "u1", TagValue::Yes, 2),
        ];
        let winners: Vec<_> = latest_events(&events, "ch1")
            .into_iter()
            .map(|e| (e.comment_id(), e.tagger_id()))
            .collect();
        assert_eq!(winners, vec![("u1", "a"), ("u2", "a"), ("u2", "b")]);
    }
}
