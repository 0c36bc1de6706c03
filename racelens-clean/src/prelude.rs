//! Prelude for commonly used types and functions in racelens-clean.

pub use crate::config::CleanerConfig;
pub use crate::diagnostics::{find_duplicates, find_missing, QualityReport};
pub use crate::error::{CleanError, Result};
pub use crate::logging::LogConfig;
pub use crate::normalize::{clean_currency, clean_distance, is_missing, tidy_string};
pub use crate::transform::{clean_data, clean_row};
pub use crate::value::{Record, Value};
