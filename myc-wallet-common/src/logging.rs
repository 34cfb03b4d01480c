//! Logging infrastructure for the MYC wallet
//!
//! Structured logging over the `log` facade with an `env_logger` backend:
//! - never logs passphrases or key material
//! - sanitizes potentially sensitive values (addresses, transaction ids)
//! - categorizes events by context
//!
//! # Usage
//!
//! ```
//! use myc_wallet_common::logging::{self, LogConfig, LogLevel};
//! use serde_json::json;
//!
//! logging::init(&LogConfig::default()).expect("failed to initialize logging");
//! logging::log_selection(LogLevel::Debug, "preview", Some(json!({ "inputs": 2 })));
//! ```

use chrono::Local;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write as IoWrite;
use std::sync::Once;

use crate::types::SensitiveString;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Log context categories for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogContext {
    /// Core wallet plumbing
    Core,
    /// Coin selection
    Selection,
    /// Calls into the wallet engine and node
    Network,
    /// Transaction assembly and submission
    Transaction,
    /// UI-driven state transitions
    Ui,
}

/// Configuration for the logging system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default log level for all contexts
    pub level: LogLevel,
    /// Path to log file (None for console-only)
    pub log_file: Option<String>,
    /// Whether to include timestamps in log messages
    pub include_timestamps: bool,
    /// Whether to include source location in log messages
    pub include_source_location: bool,
    /// Maximum log file size in bytes before rotation
    pub max_file_size: usize,
    /// Whether to log to console
    pub console_logging: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            log_file: None,
            include_timestamps: true,
            include_source_location: false,
            max_file_size: 10 * 1024 * 1024, // 10MB
            console_logging: true,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

// Ensure logging is only initialized once
static LOGGING_INIT: Once = Once::new();

/// Initialize the logging system with the given configuration.
///
/// Safe to call multiple times; only the first call installs the logger,
/// subsequent calls return Ok. Tests rely on this.
pub fn init(config: &LogConfig) -> Result<(), String> {
    let mut result = Ok(());

    let include_timestamps = config.include_timestamps;
    let include_source_location = config.include_source_location;
    let log_file = config.log_file.clone();
    let level = config.level;

    LOGGING_INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(level.into());

        builder.format(move |buf, record| {
            if include_timestamps {
                write!(buf, "{} ", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))?;
            }
            if include_source_location {
                write!(
                    buf,
                    "[{}:{}] ",
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0)
                )?;
            }
            writeln!(buf, "[{}] {}", record.level(), record.args())
        });

        if let Some(file_path) = &log_file {
            match OpenOptions::new().create(true).append(true).open(file_path) {
                Ok(file) => {
                    builder.target(env_logger::Target::Pipe(Box::new(file)));
                }
                Err(e) => {
                    result = Err(format!("Failed to open log file {}: {}", file_path, e));
                    return;
                }
            }
        }

        if let Err(e) = builder.try_init() {
            // Another logger beat us to it; that is fine in test runs.
            if !e.to_string().contains("already been initialized") {
                result = Err(e.to_string());
            }
        }
    });

    result
}

/// Update the log level dynamically.
pub fn set_log_level(level: LogLevel) {
    log::set_max_level(level.into());
}

/// Sanitize a potentially sensitive string for logging by truncating the
/// middle. Addresses and transaction ids go through here before they reach a
/// log line.
pub fn sanitize_for_logging(input: &str) -> String {
    let len = input.len();
    if len == 0 {
        return String::new();
    }
    if len <= 8 {
        return "*****".to_string();
    }
    format!("{}...{}", &input[0..4], &input[len - 4..len])
}

/// Sanitize a SensitiveString for logging. Only the length survives.
pub fn sanitize_sensitive(input: &SensitiveString) -> String {
    format!("[REDACTED, length={}]", input.len())
}

fn log_with_context(
    level: LogLevel,
    context: LogContext,
    message: &str,
    params: Option<serde_json::Value>,
) {
    let level: log::Level = level.into();
    match params {
        Some(params) => log::log!(level, "[{:?}] {} {}", context, message, params),
        None => log::log!(level, "[{:?}] {}", context, message),
    }
}

/// Log a core wallet event.
pub fn log_core(level: LogLevel, message: &str, params: Option<serde_json::Value>) {
    log_with_context(level, LogContext::Core, message, params);
}

/// Log a coin-selection event.
pub fn log_selection(level: LogLevel, message: &str, params: Option<serde_json::Value>) {
    log_with_context(level, LogContext::Selection, message, params);
}

/// Log a network event.
pub fn log_network(level: LogLevel, message: &str, params: Option<serde_json::Value>) {
    log_with_context(level, LogContext::Network, message, params);
}

/// Log a transaction event.
pub fn log_transaction(level: LogLevel, message: &str, params: Option<serde_json::Value>) {
    log_with_context(level, LogContext::Transaction, message, params);
}

/// Log a UI-driven state transition.
pub fn log_ui(level: LogLevel, message: &str, params: Option<serde_json::Value>) {
    log_with_context(level, LogContext::Ui, message, params);
}
