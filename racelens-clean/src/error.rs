//! Error types for the RaceLens cleaner.
//!
//! Cleaning and diagnostics never fail: unparseable or missing values resolve
//! to `None` instead. `CleanError` only covers the fallible edges around the
//! core, namely configuration, JSON (de)serialization and logging setup.

use thiserror::Error;

/// The main error type for the cleaner crate.
#[derive(Error, Debug)]
pub enum CleanError {
    /// A configuration value is out of its accepted range.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error from JSON serialization/deserialization of records or reports.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The tracing subscriber could not be installed.
    #[error("Logging initialization failed: {0}")]
    LoggingInit(String),
}

/// A type alias for `Result<T, CleanError>`.
///
/// # Examples
///
/// ```rust
/// use racelens_clean::error::Result;
/// use racelens_clean::config::CleanerConfig;
///
/// fn load() -> Result<CleanerConfig> {
///     CleanerConfig::from_json(r#"{"currency_ceiling": 5000000.0}"#)
/// }
/// # assert!(load().is_ok());
/// ```
pub type Result<T> = std::result::Result<T, CleanError>;

impl CleanError {
    /// Creates a new configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a new logging initialization error.
    pub fn logging_init(message: impl Into<String>) -> Self {
        Self::LoggingInit(message.into())
    }
}
