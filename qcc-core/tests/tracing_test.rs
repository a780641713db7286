//! Subscriber installation.

use qcc_core::config::LoggingConfig;
use qcc_core::tracing::{init_tracing, LOG_ENV_VAR};

#[test]
fn init_is_idempotent() {
    let config = LoggingConfig {
        level: "debug".to_string(),
        json: true,
    };
    init_tracing(&config);
    // A global subscriber now exists, so a second install is refused.
    assert!(!init_tracing(&LoggingConfig::default()));
    assert_eq!(LOG_ENV_VAR, "QCC_LOG");
}
