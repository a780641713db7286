//! Error types for the QCC engine.
//!
//! Insufficient data is not an error anywhere in the engine; it is reported
//! through sentinel returns (`0.0`, `None`). These types cover construction
//! failures and configuration problems only.

pub mod config_error;
pub mod error_code;
pub mod qcc_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::QccErrorCode;
pub use qcc_error::{QccError, QccResult};
pub use validation_error::ValidationError;
