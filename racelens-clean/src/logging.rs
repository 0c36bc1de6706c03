//! Logging utilities and configuration for the cleaner.
//!
//! Cleaning itself only emits `tracing` events. Installing a subscriber is
//! left to the caller; [`setup::init_logging`] covers the common case.

use tracing::Level;

/// Controls how chatty the cleaner is while it works.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Base log level for cleaner components
    pub base_level: Level,
    /// Whether to log every cleaned row at debug level
    pub log_row_details: bool,
    /// Whether to log dataset-level summaries (row counts, duplicates)
    pub log_data_operations: bool,
    /// Maximum length for raw values quoted in log output
    pub max_field_length: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            base_level: Level::INFO,
            log_row_details: false,
            log_data_operations: true,
            max_field_length: 256,
        }
    }
}

impl LogConfig {
    /// Creates a verbose configuration suitable for debugging.
    pub fn verbose() -> Self {
        Self {
            base_level: Level::DEBUG,
            log_row_details: true,
            log_data_operations: true,
            max_field_length: 1024,
        }
    }

    /// Creates a minimal configuration for production with lowest overhead.
    pub fn production() -> Self {
        Self {
            base_level: Level::WARN,
            log_row_details: false,
            log_data_operations: false,
            max_field_length: 128,
        }
    }

    /// Returns true when events at `level` pass `base_level`.
    pub fn allows(&self, level: Level) -> bool {
        // tracing orders levels by verbosity: TRACE is the greatest.
        self.base_level >= level
    }
}

/// Macro for conditional per-row logging.
///
/// Emits at debug level, so nothing is formatted unless `log_row_details` is
/// set and `base_level` is at least `DEBUG`.
#[macro_export]
macro_rules! log_row {
    ($config:expr, $($arg:tt)*) => {
        if $config.log_row_details && $config.allows(tracing::Level::DEBUG) {
            tracing::debug!($($arg)*);
        }
    };
}

/// Macro for conditional dataset-level logging.
///
/// Emits at info level when `log_data_operations` is set and `base_level` is
/// at least `INFO`.
#[macro_export]
macro_rules! log_data_op {
    ($config:expr, $($arg:tt)*) => {
        if $config.log_data_operations && $config.allows(tracing::Level::INFO) {
            tracing::info!($($arg)*);
        }
    };
}

/// Truncates a string to at most `max_length` bytes, on a char boundary.
pub fn truncate_field(value: &str, max_length: usize) -> String {
    if value.len() <= max_length {
        return value.to_string();
    }
    let mut end = max_length;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...(truncated)", &value[..end])
}

/// Utilities for installing a `tracing-subscriber` for the cleaner.
pub mod setup {
    use crate::error::{CleanError, Result};
    use tracing::Level;

    /// Configuration for the process-wide subscriber.
    #[derive(Debug, Clone)]
    pub struct LoggingConfig {
        /// Log level for the application
        pub level: Level,
        /// Log level for `racelens_clean` targets specifically
        pub crate_level: Level,
        /// Whether to use JSON output format
        pub json_format: bool,
        /// Environment filter override
        pub env_filter: Option<String>,
    }

    impl Default for LoggingConfig {
        fn default() -> Self {
            Self {
                level: Level::INFO,
                crate_level: Level::INFO,
                json_format: false,
                env_filter: None,
            }
        }
    }

    impl LoggingConfig {
        /// Creates a configuration for production use.
        pub fn production() -> Self {
            Self {
                level: Level::WARN,
                crate_level: Level::WARN,
                json_format: true,
                env_filter: None,
            }
        }

        /// Creates a configuration for development use.
        pub fn development() -> Self {
            Self {
                level: Level::DEBUG,
                crate_level: Level::DEBUG,
                json_format: false,
                env_filter: None,
            }
        }

        /// Sets the log level for the application.
        pub fn with_level(mut self, level: Level) -> Self {
            self.level = level;
            self
        }

        /// Sets the log level for cleaner components.
        pub fn with_crate_level(mut self, level: Level) -> Self {
            self.crate_level = level;
            self
        }

        /// Sets whether to use JSON output format.
        pub fn with_json_format(mut self, enabled: bool) -> Self {
            self.json_format = enabled;
            self
        }

        /// Sets a custom environment filter.
        pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
            self.env_filter = Some(filter.into());
            self
        }

        /// Builds the environment filter string.
        pub fn env_filter(&self) -> String {
            if let Some(ref filter) = self.env_filter {
                filter.clone()
            } else {
                format!(
                    "{},racelens_clean={}",
                    self.level.as_str().to_lowercase(),
                    self.crate_level.as_str().to_lowercase()
                )
            }
        }
    }

    /// Installs a global subscriber. `RUST_LOG` takes precedence over the
    /// configured filter.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use racelens_clean::logging::setup::{LoggingConfig, init_logging};
    ///
    /// init_logging(LoggingConfig::development().with_json_format(true)).unwrap();
    /// ```
    pub fn init_logging(config: LoggingConfig) -> Result<()> {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.env_filter()));

        let fmt_layer = if config.json_format {
            tracing_subscriber::fmt::layer().json().boxed()
        } else {
            tracing_subscriber::fmt::layer().boxed()
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| CleanError::logging_init(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::setup::LoggingConfig;
    use super::*;

    #[test]
    fn test_log_config_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.base_level, Level::INFO);
        assert!(!config.log_row_details);
        assert!(config.log_data_operations);
        assert_eq!(config.max_field_length, 256);
    }

    #[test]
    fn test_log_config_presets() {
        let verbose = LogConfig::verbose();
        assert_eq!(verbose.base_level, Level::DEBUG);
        assert!(verbose.log_row_details);
        assert_eq!(verbose.max_field_length, 1024);

        let production = LogConfig::production();
        assert_eq!(production.base_level, Level::WARN);
        assert!(!production.log_row_details);
        assert!(!production.log_data_operations);
        assert_eq!(production.max_field_length, 128);
    }

    #[test]
    fn test_base_level_gating() {
        let default = LogConfig::default();
        assert!(default.allows(Level::INFO));
        assert!(default.allows(Level::WARN));
        assert!(!default.allows(Level::DEBUG));

        assert!(LogConfig::verbose().allows(Level::DEBUG));
        assert!(!LogConfig::verbose().allows(Level::TRACE));

        let production = LogConfig::production();
        assert!(production.allows(Level::ERROR));
        assert!(!production.allows(Level::INFO));
    }

    #[test]
    fn test_truncate_field() {
        assert_eq!(truncate_field("hello", 10), "hello");

        let long_text = "this is a very long text that should be truncated";
        assert_eq!(truncate_field(long_text, 10), "this is a ...(truncated)");

        // "é" is two bytes; cutting at byte 1 would split it.
        assert_eq!(truncate_field("é$1", 1), "...(truncated)");
    }

    #[test]
    fn test_env_filter_string() {
        assert_eq!(LoggingConfig::default().env_filter(), "info,racelens_clean=info");
        assert_eq!(
            LoggingConfig::production().env_filter(),
            "warn,racelens_clean=warn"
        );
        let custom = LoggingConfig::default().with_env_filter("racelens_clean=trace");
        assert_eq!(custom.env_filter(), "racelens_clean=trace");
        let mixed = LoggingConfig::default()
            .with_level(Level::ERROR)
            .with_crate_level(Level::DEBUG);
        assert_eq!(mixed.env_filter(), "error,racelens_clean=debug");
    }
}
