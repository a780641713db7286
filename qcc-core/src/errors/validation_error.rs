//! Construction-time invariant violations for domain types.

use super::error_code::{self, QccErrorCode};

/// Raised when a domain value is built from data that breaks its invariants.
///
/// These are ingestion-layer bugs, not runtime conditions: the engine never
/// recovers from them and never substitutes a default label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{entity}: {field} cannot be empty")]
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("unknown tag value: {value:?}")]
    UnknownTagValue { value: String },

    #[error("value '{value}' is not in characteristic '{characteristic}' domain")]
    ValueOutsideDomain {
        value: String,
        characteristic: String,
    },
}

impl ValidationError {
    /// Fail with `EmptyField` when `value` is empty.
    pub fn require_non_empty(
        entity: &'static str,
        field: &'static str,
        value: &str,
    ) -> Result<(), Self> {
        if value.is_empty() {
            return Err(Self::EmptyField { entity, field });
        }
        Ok(())
    }
}

impl QccErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyField { .. } => error_code::EMPTY_FIELD,
            Self::UnknownTagValue { .. } => error_code::UNKNOWN_TAG_VALUE,
            Self::ValueOutsideDomain { .. } => error_code::VALUE_OUTSIDE_DOMAIN,
        }
    }
}
