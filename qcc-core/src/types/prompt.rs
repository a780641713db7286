use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// A prompt grouping a set of comments for tagging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPrompt")]
pub struct Prompt {
    pub id: String,
    pub text: String,
    pub comment_ids: Vec<String>,
}

#[derive(Deserialize)]
struct RawPrompt {
    id: String,
    text: String,
    #[serde(default)]
    comment_ids: Vec<String>,
}

impl TryFrom<RawPrompt> for Prompt {
    type Error = ValidationError;

    fn try_from(raw: RawPrompt) -> Result<Self, Self::Error> {
        Ok(Prompt::new(raw.id, raw.text)?.with_comment_ids(raw.comment_ids))
    }
}

impl Prompt {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Result<Self, ValidationError> {
        let prompt = Self {
            id: id.into(),
            text: text.into(),
            comment_ids: Vec::new(),
        };
        ValidationError::require_non_empty("Prompt", "id", &prompt.id)?;
        ValidationError::require_non_empty("Prompt", "text", &prompt.text)?;
        Ok(prompt)
    }

    pub fn with_comment_ids(mut self, ids: Vec<String>) -> Self {
        self.comment_ids = ids;
        self
    }
}
