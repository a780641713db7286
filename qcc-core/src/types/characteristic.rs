//! Characteristic: the labeled dimension being evaluated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::collections::FxHashSet;
use super::tag_assignment::TagAssignment;
use super::tag_value::TagValue;
use crate::errors::ValidationError;

fn default_domain() -> Vec<TagValue> {
    TagValue::ALL.to_vec()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCharacteristic")]
pub struct Characteristic {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub domain: Vec<TagValue>,
}

#[derive(Deserialize)]
struct RawCharacteristic {
    id: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default = "default_domain")]
    domain: Vec<TagValue>,
}

impl TryFrom<RawCharacteristic> for Characteristic {
    type Error = ValidationError;

    fn try_from(raw: RawCharacteristic) -> Result<Self, Self::Error> {
        let mut characteristic = Characteristic::new(raw.id, raw.name)?.with_domain(raw.domain);
        characteristic.description = raw.description;
        Ok(characteristic)
    }
}

impl Characteristic {
    /// A characteristic accepting every [`TagValue`].
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        ValidationError::require_non_empty("Characteristic", "id", &id)?;
        Ok(Self {
            id,
            name: name.into(),
            description: None,
            domain: default_domain(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Restrict the allowed values. An empty domain falls back to all values.
    pub fn with_domain(mut self, domain: Vec<TagValue>) -> Self {
        self.domain = if domain.is_empty() {
            default_domain()
        } else {
            domain
        };
        self
    }

    pub fn accepts(&self, value: TagValue) -> bool {
        self.domain.contains(&value)
    }

    pub fn num_unique_taggers(&self, assignments: &[TagAssignment]) -> usize {
        assignments
            .iter()
            .filter(|a| a.characteristic_id() == self.id)
            .map(TagAssignment::tagger_id)
            .collect::<FxHashSet<_>>()
            .len()
    }

    /// Share of each domain value among this characteristic's assignments.
    ///
    /// Every domain value is present in the result; all zeros when there are
    /// no assignments. Values outside the domain count toward the total only.
    pub fn prevalence(&self, assignments: &[TagAssignment]) -> BTreeMap<TagValue, f64> {
        let mut counts: BTreeMap<TagValue, usize> =
            self.domain.iter().map(|v| (*v, 0)).collect();
        let mut total = 0usize;

        for assignment in assignments.iter().filter(|a| a.characteristic_id() == self.id) {
            total += 1;
            if let Some(count) = counts.get_mut(&assignment.value()) {
                *count += 1;
            }
        }

        counts
            .into_iter()
            .map(|(value, count)| {
                let share = if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64
                };
                (value, share)
            })
            .collect()
    }
}
