//! Dataset: the in-memory bundle handed over by ingestion.

use serde::{Deserialize, Serialize};

use super::{Characteristic, Comment, Prompt, TagAssignment, Tagger};
use crate::errors::QccResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub assignments: Vec<TagAssignment>,
    #[serde(default)]
    pub characteristics: Vec<Characteristic>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub prompts: Vec<Prompt>,
}

impl Dataset {
    pub fn new(assignments: Vec<TagAssignment>, characteristics: Vec<Characteristic>) -> Self {
        Self {
            assignments,
            characteristics,
            ..Self::default()
        }
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_prompts(mut self, prompts: Vec<Prompt>) -> Self {
        self.prompts = prompts;
        self
    }

    /// Parse a JSON document. Every assignment is validated on the way in.
    pub fn from_json(json: &str) -> QccResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Per-tagger aggregates, sorted by tagger id.
    pub fn taggers(&self) -> Vec<Tagger> {
        Tagger::group_by_tagger(&self.assignments)
    }

    pub fn characteristic(&self, id: &str) -> Option<&Characteristic> {
        self.characteristics.iter().find(|c| c.id == id)
    }
}
