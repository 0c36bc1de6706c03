//! Row-level cleaning: canonical column names plus per-field normalization.

use crate::config::CleanerConfig;
use crate::normalize::{clean_currency_with_config, clean_distance, tidy_string};
use crate::value::{Record, Value};
use crate::{log_data_op, log_row};

/// Raw source column names and the canonical names they become.
pub const COLUMN_RENAMES: &[(&str, &str)] = &[
    ("Distance", "distance"),
    ("Purse", "purse"),
    ("Field_size", "field_size"),
    ("Earnings", "earnings"),
    ("Final Odds", "final_odds"),
];

/// Canonical column parsed as a distance.
pub const DISTANCE_COLUMN: &str = "distance";

/// Canonical columns parsed as currency.
pub const CURRENCY_COLUMNS: &[&str] = &["purse", "earnings"];

/// Cleans one row with the default configuration.
///
/// ```rust
/// use racelens_clean::record;
/// use racelens_clean::transform::clean_row;
/// use racelens_clean::value::Value;
///
/// let row = record! { "Distance" => "6F", "Horse" => "  Secretariat " };
/// let cleaned = clean_row(&row);
/// assert_eq!(cleaned["distance"], Value::Float(6.0));
/// assert_eq!(cleaned["Horse"], Value::from("Secretariat"));
/// assert!(row.contains_key("Distance"));
/// ```
pub fn clean_row(row: &Record) -> Record {
    clean_row_with_config(row, &CleanerConfig::default())
}

/// Cleans one row, returning a new record and leaving `row` untouched.
///
/// Steps run in this order:
/// 1. raw column names in [`COLUMN_RENAMES`] move to their canonical key,
/// 2. `distance` goes through [`clean_distance`],
/// 3. `purse` and `earnings` go through currency parsing,
/// 4. every value still holding text is tidied.
///
/// Anything else passes through unchanged.
pub fn clean_row_with_config(row: &Record, config: &CleanerConfig) -> Record {
    let mut out = row.clone();

    for (raw, canonical) in COLUMN_RENAMES {
        if let Some(value) = out.shift_remove(*raw) {
            out.insert((*canonical).to_string(), value);
        }
    }

    if let Some(value) = out.get_mut(DISTANCE_COLUMN) {
        *value = clean_distance(value).into();
    }

    for column in CURRENCY_COLUMNS {
        if let Some(value) = out.get_mut(*column) {
            *value = clean_currency_with_config(value, config).into();
        }
    }

    for value in out.values_mut() {
        if let Value::Text(_) = value {
            *value = tidy_string(value).into();
        }
    }

    log_row!(config.log, columns = out.len(), "cleaned row");
    out
}

/// Cleans every row with the default configuration.
pub fn clean_data(rows: &[Record]) -> Vec<Record> {
    clean_data_with_config(rows, &CleanerConfig::default())
}

/// Cleans every row in order. The output always has the input's length.
pub fn clean_data_with_config(rows: &[Record], config: &CleanerConfig) -> Vec<Record> {
    let cleaned: Vec<Record> = rows
        .iter()
        .map(|row| clean_row_with_config(row, config))
        .collect();
    log_data_op!(config.log, rows = cleaned.len(), "cleaned dataset");
    cleaned
}
