//! Tag: a value bound to a characteristic, checked against its domain.

use serde::Serialize;

use super::characteristic::Characteristic;
use super::tag_value::TagValue;
use crate::errors::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
    characteristic: Characteristic,
    value: TagValue,
}

impl Tag {
    pub fn new(characteristic: Characteristic, value: TagValue) -> Result<Self, ValidationError> {
        if !characteristic.accepts(value) {
            return Err(ValidationError::ValueOutsideDomain {
                value: value.to_string(),
                characteristic: characteristic.name.clone(),
            });
        }
        Ok(Self {
            characteristic,
            value,
        })
    }

    pub fn characteristic(&self) -> &Characteristic {
        &self.characteristic
    }

    pub fn value(&self) -> TagValue {
        self.value
    }
}
