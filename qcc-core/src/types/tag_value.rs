//! TagValue: the closed set of answers a tagger can give.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Possible values for a tag assignment.
///
/// Ordering follows declaration order and is only used for deterministic
/// map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TagValue {
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "NO")]
    No,
    /// Not applicable. Never participates in agreement computations.
    #[serde(rename = "NA", alias = "NOT_APPLICABLE")]
    NotApplicable,
    #[serde(rename = "UNCERTAIN")]
    Uncertain,
    #[serde(rename = "SKIP")]
    Skip,
}

impl TagValue {
    /// Every value, in declaration order. Default characteristic domain.
    pub const ALL: [TagValue; 5] = [
        TagValue::Yes,
        TagValue::No,
        TagValue::NotApplicable,
        TagValue::Uncertain,
        TagValue::Skip,
    ];

    /// Canonical string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "YES",
            Self::No => "NO",
            Self::NotApplicable => "NA",
            Self::Uncertain => "UNCERTAIN",
            Self::Skip => "SKIP",
        }
    }

    /// `Y`/`N` for the binary alphabet used by pattern detection.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Self::Yes => Some('Y'),
            Self::No => Some('N'),
            _ => None,
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Yes | Self::No)
    }

    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Self::NotApplicable)
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagValue {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "YES" => Ok(Self::Yes),
            "NO" => Ok(Self::No),
            "NA" | "NOT_APPLICABLE" => Ok(Self::NotApplicable),
            "UNCERTAIN" => Ok(Self::Uncertain),
            "SKIP" => Ok(Self::Skip),
            _ => Err(ValidationError::UnknownTagValue {
                value: s.to_string(),
            }),
        }
    }
}
