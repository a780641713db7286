//! TagAssignment: one decision by one tagger about one (comment, characteristic) pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::tag_value::TagValue;
use crate::errors::ValidationError;

/// A single, immutable tag assignment.
///
/// `tagger_id`, `comment_id` and `characteristic_id` are guaranteed non-empty.
/// Construction and deserialization both go through [`TagAssignment::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTagAssignment")]
pub struct TagAssignment {
    tagger_id: String,
    comment_id: String,
    characteristic_id: String,
    value: TagValue,
    timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    question_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    questionnaire_id: Option<String>,
}

impl TagAssignment {
    pub fn new(
        tagger_id: impl Into<String>,
        comment_id: impl Into<String>,
        characteristic_id: impl Into<String>,
        value: TagValue,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let tagger_id = tagger_id.into();
        let comment_id = comment_id.into();
        let characteristic_id = characteristic_id.into();

        ValidationError::require_non_empty("TagAssignment", "tagger_id", &tagger_id)?;
        ValidationError::require_non_empty("TagAssignment", "comment_id", &comment_id)?;
        ValidationError::require_non_empty(
            "TagAssignment",
            "characteristic_id",
            &characteristic_id,
        )?;

        Ok(Self {
            tagger_id,
            comment_id,
            characteristic_id,
            value,
            timestamp,
            event_id: None,
            prompt_id: None,
            team_id: None,
            question_id: None,
            questionnaire_id: None,
        })
    }

    pub fn with_event_id(mut self, id: impl Into<String>) -> Self {
        self.event_id = Some(id.into());
        self
    }

    pub fn with_prompt_id(mut self, id: impl Into<String>) -> Self {
        self.prompt_id = Some(id.into());
        self
    }

    pub fn with_team_id(mut self, id: impl Into<String>) -> Self {
        self.team_id = Some(id.into());
        self
    }

    pub fn with_question_id(mut self, id: impl Into<String>) -> Self {
        self.question_id = Some(id.into());
        self
    }

    pub fn with_questionnaire_id(mut self, id: impl Into<String>) -> Self {
        self.questionnaire_id = Some(id.into());
        self
    }

    pub fn tagger_id(&self) -> &str {
        &self.tagger_id
    }

    pub fn comment_id(&self) -> &str {
        &self.comment_id
    }

    pub fn characteristic_id(&self) -> &str {
        &self.characteristic_id
    }

    pub fn value(&self) -> TagValue {
        self.value
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn event_id(&self) -> Option<&str> {
        self.event_id.as_deref()
    }

    pub fn prompt_id(&self) -> Option<&str> {
        self.prompt_id.as_deref()
    }

    pub fn team_id(&self) -> Option<&str> {
        self.team_id.as_deref()
    }

    pub fn question_id(&self) -> Option<&str> {
        self.question_id.as_deref()
    }

    pub fn questionnaire_id(&self) -> Option<&str> {
        self.questionnaire_id.as_deref()
    }
}

/// Unvalidated wire shape. Only used as the `try_from` source.
#[derive(Deserialize)]
struct RawTagAssignment {
    tagger_id: String,
    comment_id: String,
    characteristic_id: String,
    value: TagValue,
    timestamp: DateTime<Utc>,
    #[serde(default, alias = "assignment_id")]
    event_id: Option<String>,
    #[serde(default)]
    prompt_id: Option<String>,
    #[serde(default)]
    team_id: Option<String>,
    #[serde(default)]
    question_id: Option<String>,
    #[serde(default)]
    questionnaire_id: Option<String>,
}

impl TryFrom<RawTagAssignment> for TagAssignment {
    type Error = ValidationError;

    fn try_from(raw: RawTagAssignment) -> Result<Self, Self::Error> {
        let mut assignment = TagAssignment::new(
            raw.tagger_id,
            raw.comment_id,
            raw.characteristic_id,
            raw.value,
            raw.timestamp,
        )?;
        assignment.event_id = raw.event_id;
        assignment.prompt_id = raw.prompt_id;
        assignment.team_id = raw.team_id;
        assignment.question_id = raw.question_id;
        assignment.questionnaire_id = raw.questionnaire_id;
        Ok(assignment)
    }
}
