//! Comment: the text unit being labeled.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::tag_assignment::TagAssignment;
use crate::errors::ValidationError;

/// A labeled comment.
///
/// The comment does not own its assignments. Lookups take the shared
/// assignment slice and filter by `comment_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawComment")]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub prompt_id: String,
}

#[derive(Deserialize)]
struct RawComment {
    id: String,
    text: String,
    prompt_id: String,
}

impl TryFrom<RawComment> for Comment {
    type Error = ValidationError;

    fn try_from(raw: RawComment) -> Result<Self, Self::Error> {
        Comment::new(raw.id, raw.text, raw.prompt_id)
    }
}

impl Comment {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        prompt_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let comment = Self {
            id: id.into(),
            text: text.into(),
            prompt_id: prompt_id.into(),
        };
        ValidationError::require_non_empty("Comment", "id", &comment.id)?;
        ValidationError::require_non_empty("Comment", "text", &comment.text)?;
        ValidationError::require_non_empty("Comment", "prompt_id", &comment.prompt_id)?;
        Ok(comment)
    }

    pub fn assignments<'a>(
        &'a self,
        assignments: &'a [TagAssignment],
    ) -> impl Iterator<Item = &'a TagAssignment> + 'a {
        assignments.iter().filter(move |a| a.comment_id() == self.id)
    }

    /// Taggers who tagged this comment for any characteristic.
    pub fn unique_taggers_all<'a>(&self, assignments: &'a [TagAssignment]) -> BTreeSet<&'a str> {
        assignments
            .iter()
            .filter(|a| a.comment_id() == self.id)
            .map(TagAssignment::tagger_id)
            .collect()
    }

    pub fn unique_taggers_for<'a>(
        &self,
        assignments: &'a [TagAssignment],
        characteristic_id: &str,
    ) -> BTreeSet<&'a str> {
        assignments
            .iter()
            .filter(|a| a.comment_id() == self.id && a.characteristic_id() == characteristic_id)
            .map(TagAssignment::tagger_id)
            .collect()
    }
}
