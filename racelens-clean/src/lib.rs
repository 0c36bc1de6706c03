//! # RaceLens row cleaner
//!
//! A row-oriented cleaner for loosely-typed horse-racing data. Rows arrive as
//! ordered column-to-value maps with text, numbers and assorted missingness
//! markers mixed together; the cleaner renames columns to their canonical
//! form, parses distances and currency amounts, tidies strings and reports
//! data-quality diagnostics.
//!
//! ## Quick Start
//!
//! ```rust
//! use racelens_clean::prelude::*;
//! use racelens_clean::record;
//!
//! let rows = vec![
//!     record! {
//!         "Distance" => "4.32F",
//!         "Purse" => "$4,500.00",
//!         "Earnings" => "1000",
//!         "Field_size" => "10",
//!         "Final Odds" => "2.5",
//!         "SomeCol" => "   ",
//!     },
//!     record! {
//!         "Distance" => "5.0F",
//!         "Purse" => "NA",
//!         "Earnings" => "",
//!         "Field_size" => "8",
//!         "Final Odds" => "3.1",
//!         "SomeCol" => "Horse",
//!     },
//! ];
//!
//! let cleaned = clean_data(&rows);
//! assert_eq!(cleaned[0]["distance"], Value::Float(4.32));
//! assert_eq!(cleaned[0]["purse"], Value::Float(4500.0));
//! assert_eq!(cleaned[0]["SomeCol"], Value::Null);
//!
//! let missing = find_missing(&cleaned);
//! assert_eq!(missing["purse"], 1);
//! assert!(find_duplicates(&cleaned).is_empty());
//! ```
//!
//! ## Behaviour
//!
//! Every cleaning and diagnostics function is total. Missing or unparseable
//! cells become `Value::Null` rather than errors, and inputs are never
//! modified. Suspicious currency amounts (negative, above one billion, or
//! unparseable) are reported through `tracing::warn!`; install a subscriber
//! (see [`logging::setup`]) to see them.
//!
//! ## Architecture
//!
//! - **`value`**: the `Value` scalar and the `Record` row type
//! - **`normalize`**: missingness test and per-value parsers
//! - **`transform`**: column renames and whole-row cleaning
//! - **`diagnostics`**: missing counts, duplicate detection, quality reports
//! - **`config`**: warning thresholds and logging knobs
//! - **`logging`**: log configuration and subscriber setup

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod prelude;
pub mod transform;
pub mod value;
