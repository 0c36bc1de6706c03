//! Loosely-typed scalar values and the records built from them.
//!
//! Raw tabular sources hand the cleaner rows whose cells can be text, integer,
//! floating point or absent. [`Value`] models exactly those four shapes and
//! [`Record`] keeps a row's columns in insertion order.
//!
//! Numbers compare by numeric value across representations, so `Int(1)`
//! equals `Float(1.0)`. Floats follow IEEE equality: `NaN` equals nothing.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One raw or cleaned data row: column name to value, in insertion order.
///
/// Equality between records ignores column order.
pub type Record = IndexMap<String, Value>;

/// A single cell value.
///
/// Serializes untagged, so JSON `null`, strings, integers and floats map
/// directly onto the variants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// No data at all.
    #[default]
    Null,
    /// An integer cell.
    Int(i64),
    /// A floating point cell.
    Float(f64),
    /// A text cell, untrimmed.
    Text(String),
}

impl Value {
    /// Returns true for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Renders the value's text form.
    ///
    /// Null prints as `None`, integers in decimal, and floats keep a
    /// fractional part (`4.0`, `4.32`). Very small or large floats switch to
    /// exponent notation (`1e-5`).
    pub fn text_form(&self) -> String {
        self.to_string()
    }

    /// Hashable stand-in used for exact duplicate detection.
    ///
    /// Returns `None` for `NaN`, which can never equal another value.
    pub(crate) fn exact_key(&self) -> Option<ExactKey> {
        Some(match self {
            Value::Null => ExactKey::Null,
            Value::Text(s) => ExactKey::Text(s.clone()),
            Value::Int(i) => ExactKey::Int(*i),
            Value::Float(f) => {
                if f.is_nan() {
                    return None;
                }
                match integral_f64(*f) {
                    Some(i) => ExactKey::Int(i),
                    None => ExactKey::Float(f.to_bits()),
                }
            }
        })
    }
}

/// Returns `f` as an `i64` when it is integral and exactly representable.
fn integral_f64(f: f64) -> Option<i64> {
    // 2^63 itself is out of range, hence the strict upper bound.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f) {
        Some(f as i64)
    } else {
        None
    }
}

/// Equality-preserving key for a [`Value`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum ExactKey {
    Null,
    Int(i64),
    Float(u64),
    Text(String),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => {
                integral_f64(*f) == Some(*i)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "None"),
            Value::Int(i) => write!(f, "{i}"),
            // Debug keeps the trailing ".0" on integral floats.
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Builds a [`Record`] from `key => value` pairs.
///
/// ```rust
/// use racelens_clean::{record, value::Value};
///
/// let row = record! { "id" => 1, "name" => "A", "odds" => Value::Null };
/// assert_eq!(row.len(), 3);
/// assert_eq!(row["name"], Value::from("A"));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::value::Record::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut row = $crate::value::Record::new();
        $(row.insert(::std::string::String::from($key), $crate::value::Value::from($value));)+
        row
    }};
}
