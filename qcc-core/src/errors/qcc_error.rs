use super::error_code::{self, QccErrorCode};
use super::{ConfigError, ValidationError};

/// Top-level error type for the QCC engine.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum QccError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl QccErrorCode for QccError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION,
        }
    }
}

/// Convenience type alias.
pub type QccResult<T> = Result<T, QccError>;
