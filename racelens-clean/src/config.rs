//! Cleaner configuration.

use crate::error::{CleanError, Result};
use crate::logging::LogConfig;
use serde::{Deserialize, Serialize};

/// Purse sizes above this are almost certainly data-entry errors.
pub const DEFAULT_CURRENCY_CEILING: f64 = 1e9;

/// Knobs for the `*_with_config` cleaning functions.
///
/// The plain functions (`clean_currency`, `clean_row`, `clean_data`) use
/// [`CleanerConfig::default`]. Thresholds here only decide when a warning is
/// logged; they never change the cleaned value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Parsed currency above this value triggers an "implausibly large" warning
    pub currency_ceiling: f64,
    /// Whether negative parsed currency triggers a warning
    pub warn_on_negative_currency: bool,
    /// Logging behaviour while cleaning
    #[serde(skip)]
    pub log: LogConfig,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            currency_ceiling: DEFAULT_CURRENCY_CEILING,
            warn_on_negative_currency: true,
            log: LogConfig::default(),
        }
    }
}

impl CleanerConfig {
    /// Default thresholds with per-row debug logging switched on.
    pub fn verbose() -> Self {
        Self {
            log: LogConfig::verbose(),
            ..Self::default()
        }
    }

    /// Default thresholds with the quietest logging.
    pub fn production() -> Self {
        Self {
            log: LogConfig::production(),
            ..Self::default()
        }
    }

    /// Sets the currency warning ceiling.
    pub fn with_currency_ceiling(mut self, ceiling: f64) -> Self {
        self.currency_ceiling = ceiling;
        self
    }

    /// Sets whether negative currency values are warned about.
    pub fn with_warn_on_negative_currency(mut self, enabled: bool) -> Self {
        self.warn_on_negative_currency = enabled;
        self
    }

    /// Sets the logging behaviour.
    pub fn with_log(mut self, log: LogConfig) -> Self {
        self.log = log;
        self
    }

    /// Checks that the thresholds are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.currency_ceiling.is_finite() || self.currency_ceiling <= 0.0 {
            return Err(CleanError::configuration(format!(
                "currency_ceiling must be a positive finite number, got {}",
                self.currency_ceiling
            )));
        }
        Ok(())
    }

    /// Parses and validates a configuration from JSON. Missing fields keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
