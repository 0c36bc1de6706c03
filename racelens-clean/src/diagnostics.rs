//! Dataset-level data-quality diagnostics.
//!
//! These work on any snapshot of rows, raw or cleaned, and never modify them.

use crate::error::Result;
use crate::normalize::is_missing;
use crate::value::{ExactKey, Record};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Counts missing values per column.
///
/// The columns reported are exactly the keys of the first row, in that row's
/// order. Columns that only show up in later rows are not counted. A row
/// lacking one of the first row's columns counts as missing for it.
///
/// ```rust
/// use racelens_clean::diagnostics::find_missing;
/// use racelens_clean::record;
/// use racelens_clean::value::Value;
///
/// let rows = vec![
///     record! { "a" => Value::Null, "b" => 1 },
///     record! { "a" => 2, "b" => "NA" },
/// ];
/// let missing = find_missing(&rows);
/// assert_eq!(missing["a"], 1);
/// assert_eq!(missing["b"], 1);
/// ```
pub fn find_missing(rows: &[Record]) -> IndexMap<String, usize> {
    let Some(first) = rows.first() else {
        return IndexMap::new();
    };

    let mut missing: IndexMap<String, usize> =
        first.keys().map(|column| (column.clone(), 0)).collect();

    for row in rows {
        for (column, count) in missing.iter_mut() {
            if row.get(column).map_or(true, is_missing) {
                *count += 1;
            }
        }
    }

    tracing::debug!(
        rows = rows.len(),
        columns = missing.len(),
        "counted missing values"
    );
    missing
}

/// Canonical, order-independent form of a row for exact comparison.
///
/// `None` when the row holds a `NaN`, since such a row equals nothing.
fn row_key(row: &Record) -> Option<Vec<(&str, ExactKey)>> {
    let mut key = row
        .iter()
        .map(|(column, value)| value.exact_key().map(|k| (column.as_str(), k)))
        .collect::<Option<Vec<_>>>()?;
    key.sort_unstable_by(|a, b| a.0.cmp(b.0));
    Some(key)
}

/// Returns every row that exactly repeats an earlier one.
///
/// Rows are equal when they have the same columns with equal values, in any
/// column order. The first occurrence is never returned; each later
/// occurrence is, in input order.
pub fn find_duplicates(rows: &[Record]) -> Vec<Record> {
    let mut seen = HashSet::with_capacity(rows.len());
    let mut duplicates = Vec::new();

    for row in rows {
        let Some(key) = row_key(row) else {
            continue;
        };
        if !seen.insert(key) {
            duplicates.push(row.clone());
        }
    }

    tracing::debug!(
        rows = rows.len(),
        duplicates = duplicates.len(),
        "scanned for duplicate rows"
    );
    duplicates
}

/// Summary of a dataset's quality, ready to serialize as a validation summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    /// Number of rows inspected
    pub row_count: usize,
    /// Number of columns in the first row
    pub column_count: usize,
    /// Missing-value count per first-row column
    pub missing: IndexMap<String, usize>,
    /// Number of rows repeating an earlier row
    pub duplicate_count: usize,
}

impl QualityReport {
    /// Builds the report from a snapshot of rows.
    pub fn from_rows(rows: &[Record]) -> Self {
        let missing = find_missing(rows);
        Self {
            row_count: rows.len(),
            column_count: missing.len(),
            duplicate_count: find_duplicates(rows).len(),
            missing,
        }
    }

    /// Fraction of rows that are duplicates, `0.0` for an empty dataset.
    pub fn duplicate_ratio(&self) -> f64 {
        if self.row_count == 0 {
            0.0
        } else {
            self.duplicate_count as f64 / self.row_count as f64
        }
    }

    /// Total missing cells over all reported columns.
    pub fn total_missing(&self) -> usize {
        self.missing.values().sum()
    }

    /// Columns with at least one missing value, in report order.
    pub fn columns_with_missing(&self) -> Vec<&str> {
        self.missing
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(column, _)| column.as_str())
            .collect()
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a report previously written with [`QualityReport::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for QualityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Rows: {}  Columns: {}  Duplicates: {} ({:.1}%)",
            self.row_count,
            self.column_count,
            self.duplicate_count,
            self.duplicate_ratio() * 100.0
        )?;
        for (column, count) in &self.missing {
            writeln!(f, "  {column}: {count} missing")?;
        }
        Ok(())
    }
}
