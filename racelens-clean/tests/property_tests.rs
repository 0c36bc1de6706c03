//! Property-based tests for the cleaner.
//!
//! Generated rows mix text, integers, floats and nulls under both raw and
//! canonical column names. Integers and floats span their whole finite range,
//! with extra weight on tiny and huge magnitudes.

use proptest::prelude::*;
use racelens_clean::diagnostics::{find_duplicates, find_missing};
use racelens_clean::normalize::{is_missing, tidy_string, MISSING_TOKENS};
use racelens_clean::transform::{clean_data, clean_row};
use racelens_clean::value::{Record, Value};

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<i64>().prop_map(Value::Int),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(Value::Float),
        prop::sample::select(vec![
            1e-5,
            -2.5e-9,
            1.2345678901234567e19,
            f64::MAX,
            f64::MIN_POSITIVE,
        ])
        .prop_map(Value::Float),
        // No letters besides the furlong marker, so no "inf"/"nan" spellings.
        "[ 0-9$,.F-]{0,10}".prop_map(Value::Text),
        prop::sample::select(MISSING_TOKENS).prop_map(|t| Value::from(t)),
    ]
}

fn canonical_row_strategy() -> impl Strategy<Value = Record> {
    let columns = prop::sample::subsequence(
        vec!["distance", "purse", "earnings", "field_size", "final_odds", "horse"],
        0..=6,
    );
    columns.prop_flat_map(|cols| {
        prop::collection::vec(value_strategy(), cols.len()).prop_map(move |values| {
            cols.iter()
                .map(|c| c.to_string())
                .zip(values)
                .collect::<Record>()
        })
    })
}

fn raw_row_strategy() -> impl Strategy<Value = Record> {
    let columns = prop::sample::subsequence(
        vec!["Distance", "Purse", "Earnings", "Field_size", "Final Odds", "Horse"],
        0..=6,
    );
    columns.prop_flat_map(|cols| {
        prop::collection::vec(value_strategy(), cols.len()).prop_map(move |values| {
            cols.iter()
                .map(|c| c.to_string())
                .zip(values)
                .collect::<Record>()
        })
    })
}

proptest! {
    #[test]
    fn prop_is_missing_matches_trimmed_tokens(s in "\\PC{0,12}") {
        let trimmed = s.trim();
        let expected = trimmed.is_empty() || MISSING_TOKENS.contains(&trimmed);
        prop_assert_eq!(is_missing(&Value::Text(s.clone())), expected);
    }

    #[test]
    fn prop_numbers_never_missing(i in any::<i64>(), f in any::<f64>()) {
        prop_assert!(!is_missing(&Value::Int(i)));
        prop_assert!(!is_missing(&Value::Float(f)));
    }

    #[test]
    fn prop_tidy_string_is_trimmed_or_none(s in "\\PC{0,12}") {
        match tidy_string(&Value::Text(s.clone())) {
            Some(t) => {
                prop_assert_eq!(t.as_str(), s.trim());
                prop_assert!(!is_missing(&Value::Text(t.clone())));
            }
            None => prop_assert!(is_missing(&Value::Text(s))),
        }
    }

    #[test]
    fn prop_clean_row_fixed_point_on_canonical_rows(row in canonical_row_strategy()) {
        let once = clean_row(&row);
        let twice = clean_row(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_clean_row_leaves_no_raw_names_or_untrimmed_text(row in raw_row_strategy()) {
        let cleaned = clean_row(&row);
        prop_assert_eq!(cleaned.len(), row.len());
        for (key, value) in &cleaned {
            prop_assert!(!["Distance", "Purse", "Earnings", "Field_size", "Final Odds"]
                .contains(&key.as_str()));
            if let Value::Text(s) = value {
                prop_assert_eq!(s.as_str(), s.trim());
                prop_assert!(!is_missing(value));
            }
        }
    }

    #[test]
    fn prop_clean_data_preserves_length(rows in prop::collection::vec(raw_row_strategy(), 0..20)) {
        let cleaned = clean_data(&rows);
        prop_assert_eq!(cleaned.len(), rows.len());
        for (raw, clean) in rows.iter().zip(&cleaned) {
            prop_assert_eq!(&clean_row(raw), clean);
        }
    }

    #[test]
    fn prop_missing_counts_bounded(rows in prop::collection::vec(canonical_row_strategy(), 0..20)) {
        let missing = find_missing(&rows);
        match rows.first() {
            None => prop_assert!(missing.is_empty()),
            Some(first) => {
                prop_assert_eq!(missing.len(), first.len());
                for count in missing.values() {
                    prop_assert!(*count <= rows.len());
                }
            }
        }
    }

    #[test]
    fn prop_duplicates_match_quadratic_definition(
        rows in prop::collection::vec(canonical_row_strategy(), 0..15)
    ) {
        let expected: Vec<Record> = rows
            .iter()
            .enumerate()
            .filter(|(i, row)| rows[..*i].iter().any(|earlier| earlier == *row))
            .map(|(_, row)| row.clone())
            .collect();
        prop_assert_eq!(find_duplicates(&rows), expected);
    }
}
