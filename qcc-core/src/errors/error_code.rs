//! Stable error codes shared by every QCC error type.

/// Implemented by every error enum so callers can branch on a stable string
/// instead of matching variants across crate boundaries.
pub trait QccErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const EMPTY_FIELD: &str = "VALIDATION_EMPTY_FIELD";
pub const UNKNOWN_TAG_VALUE: &str = "VALIDATION_UNKNOWN_TAG_VALUE";
pub const VALUE_OUTSIDE_DOMAIN: &str = "VALIDATION_VALUE_OUTSIDE_DOMAIN";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE_ERROR";
pub const CONFIG_IO: &str = "CONFIG_IO_ERROR";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const SERIALIZATION: &str = "SERIALIZATION_ERROR";
