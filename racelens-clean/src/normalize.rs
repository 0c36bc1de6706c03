//! Value-level normalizers.
//!
//! Each function is total: missing or unparseable input yields `None`, never
//! an error. Currency parsing additionally reports suspicious values through
//! `tracing::warn!`, which callers must not treat as a failure.

use crate::config::CleanerConfig;
use crate::logging::truncate_field;
use crate::value::Value;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;

/// Text values treated as "no data" after trimming. Matching is exact and
/// case-sensitive.
pub const MISSING_TOKENS: &[&str] = &[
    "NA", "N/A", "n/a", "NULL", "null", "None", ".", "-", "\u{2014}", "",
];

static DISTANCE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+-]?[0-9]+(?:\.[0-9]+)?").unwrap());

/// Returns true if `value` carries no data.
///
/// Null is missing; text is missing when its trimmed form is empty or one of
/// [`MISSING_TOKENS`]. Numbers are never missing.
///
/// ```rust
/// use racelens_clean::normalize::is_missing;
/// use racelens_clean::value::Value;
///
/// assert!(is_missing(&Value::Null));
/// assert!(is_missing(&Value::from("  N/A ")));
/// assert!(!is_missing(&Value::from("na")));
/// assert!(!is_missing(&Value::Int(0)));
/// ```
pub fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Text(s) => MISSING_TOKENS.contains(&s.trim()),
        Value::Int(_) | Value::Float(_) => false,
    }
}

/// Extracts the first signed decimal number from a distance such as `"4.32F"`.
///
/// Unit suffixes are discarded. With several numeric runs (`"4-5F"`) the
/// first one wins. Floats are scanned in positional notation, so a cleaned
/// distance always parses back to itself.
pub fn clean_distance(value: &Value) -> Option<f64> {
    if is_missing(value) {
        return None;
    }
    let text = distance_text(value);
    DISTANCE_NUMBER
        .find(&text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Text scanned for a distance. `f64`'s `Display` never uses an exponent.
fn distance_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Text(s) => Cow::Borrowed(s),
        Value::Float(f) => Cow::Owned(f.to_string()),
        other => Cow::Owned(other.text_form()),
    }
}

/// Why a currency value was flagged.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrencyWarning {
    /// Parsed fine but below zero.
    Negative { value: f64 },
    /// Parsed fine but above the configured ceiling.
    ImplausiblyLarge { value: f64, ceiling: f64 },
    /// Could not be parsed as a number after stripping `$` and `,`.
    Unparseable { raw: String },
}

impl fmt::Display for CurrencyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyWarning::Negative { value } => {
                write!(f, "Negative currency value: {value}")
            }
            CurrencyWarning::ImplausiblyLarge { value, ceiling } => {
                write!(f, "Extremely large currency value: {value} (ceiling {ceiling})")
            }
            CurrencyWarning::Unparseable { raw } => {
                write!(f, "Cannot parse currency value: {raw}")
            }
        }
    }
}

/// Result of parsing one currency cell, with any warning it raised.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyOutcome {
    /// The parsed amount, or `None` if missing or unparseable.
    pub value: Option<f64>,
    /// Set when the cell deserves a diagnostic warning.
    pub warning: Option<CurrencyWarning>,
}

impl CurrencyOutcome {
    fn clean(value: Option<f64>) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    fn checked(amount: f64, config: &CleanerConfig) -> Self {
        let warning = if amount < 0.0 {
            config
                .warn_on_negative_currency
                .then_some(CurrencyWarning::Negative { value: amount })
        } else if amount > config.currency_ceiling {
            Some(CurrencyWarning::ImplausiblyLarge {
                value: amount,
                ceiling: config.currency_ceiling,
            })
        } else {
            None
        };
        Self {
            value: Some(amount),
            warning,
        }
    }
}

/// Parses a currency cell without logging.
///
/// Numbers are taken as `f64` directly. Text has every `$` and `,` removed
/// and is trimmed before parsing. Either way the amount is range-checked
/// against `config`, but never altered.
pub fn parse_currency(value: &Value, config: &CleanerConfig) -> CurrencyOutcome {
    if is_missing(value) {
        return CurrencyOutcome::clean(None);
    }
    let raw = match value {
        Value::Int(i) => return CurrencyOutcome::checked(*i as f64, config),
        Value::Float(f) => return CurrencyOutcome::checked(*f, config),
        Value::Text(s) => s,
        Value::Null => return CurrencyOutcome::clean(None),
    };

    let stripped: String = raw.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    let cleaned = stripped.trim();
    if cleaned.is_empty() {
        return CurrencyOutcome::clean(None);
    }

    match cleaned.parse::<f64>() {
        Ok(amount) => CurrencyOutcome::checked(amount, config),
        Err(_) => CurrencyOutcome {
            value: None,
            warning: Some(CurrencyWarning::Unparseable { raw: raw.clone() }),
        },
    }
}

/// Parses a currency cell such as `"$4,500.00"` with the default config.
///
/// ```rust
/// use racelens_clean::normalize::clean_currency;
/// use racelens_clean::value::Value;
///
/// assert_eq!(clean_currency(&Value::from("$4,500.00")), Some(4500.0));
/// assert_eq!(clean_currency(&Value::Int(1000)), Some(1000.0));
/// assert_eq!(clean_currency(&Value::from("NA")), None);
/// ```
pub fn clean_currency(value: &Value) -> Option<f64> {
    clean_currency_with_config(value, &CleanerConfig::default())
}

/// Parses a currency cell, logging a warning for suspicious values.
pub fn clean_currency_with_config(value: &Value, config: &CleanerConfig) -> Option<f64> {
    let outcome = parse_currency(value, config);
    if let Some(warning) = &outcome.warning {
        let raw = truncate_field(&value.text_form(), config.log.max_field_length);
        tracing::warn!(raw = %raw, "{warning}");
    }
    outcome.value
}

/// Trims a cell's text form, mapping missing values to `None`.
///
/// Numbers are coerced to text (`Int(10)` becomes `"10"`).
pub fn tidy_string(value: &Value) -> Option<String> {
    if is_missing(value) {
        return None;
    }
    Some(value.text_form().trim().to_string())
}
