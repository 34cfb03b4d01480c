use myc_wallet_common::logging::{
    self, sanitize_for_logging, sanitize_sensitive, LogConfig, LogLevel,
};
use myc_wallet_common::types::SensitiveString;
use serde_json::json;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

fn setup() {
    INIT_LOGGER.call_once(|| {
        let config = LogConfig {
            level: LogLevel::Error,
            log_file: None,
            include_timestamps: false,
            include_source_location: false,
            max_file_size: 1024 * 1024,
            console_logging: false,
        };
        let _ = logging::init(&config);
    });
}

#[test]
fn test_init_is_idempotent() {
    setup();
    assert!(logging::init(&LogConfig::default()).is_ok());
    assert!(logging::init(&LogConfig::default()).is_ok());
}

#[test]
fn test_log_helpers_do_not_panic() {
    setup();
    logging::log_core(LogLevel::Debug, "core event", None);
    logging::log_selection(LogLevel::Debug, "selection event", Some(json!({ "n": 1 })));
    logging::log_network(LogLevel::Debug, "network event", None);
    logging::log_transaction(LogLevel::Debug, "transaction event", None);
    logging::log_ui(LogLevel::Debug, "ui event", None);
    logging::set_log_level(LogLevel::Error);
}

#[test]
fn test_sanitize_truncates_long_values() {
    let txid = "ab".repeat(32);
    let sanitized = sanitize_for_logging(&txid);

    assert_eq!(sanitized, "abab...abab");
    assert!(sanitized.len() < txid.len());
}

#[test]
fn test_sanitize_hides_short_values_entirely() {
    assert_eq!(sanitize_for_logging("secret"), "*****");
    assert_eq!(sanitize_for_logging(""), "");
}

#[test]
fn test_sanitize_sensitive_keeps_only_the_length() {
    let secret = SensitiveString::new("correct horse battery staple");
    let sanitized = sanitize_sensitive(&secret);

    assert!(!sanitized.contains("horse"));
    assert!(sanitized.contains("28"));
}
