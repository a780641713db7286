//! Configuration loading and validation errors.

use super::error_code::{self, QccErrorCode};

/// Errors that can occur while loading or validating a [`crate::QccConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read config at {path}: {message}")]
    Io { path: String, message: String },

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl QccErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => error_code::CONFIG_PARSE,
            Self::Io { .. } => error_code::CONFIG_IO,
            Self::Invalid { .. } => error_code::CONFIG_INVALID,
        }
    }
}
