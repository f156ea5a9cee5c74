//! Row-level quality checks.
//!
//! This module handles the fixed-rule checks that need no column resolution:
//! - Mandatory fields: required columns must not be null
//! - Negative values: listed numeric columns must not be negative
//!
//! Both return only the offending rows, prefixed with their original
//! `row_index` and followed by a per-row count column.

use crate::dataset::{flagged_rows, unique_columns};
use crate::{DataSet, DataValue, Result};
use indicators_core::{Comparison, Operator};
use tracing::debug;

/// Name of the count column added by [`check_mandatory_fields`].
pub const MISSING_COUNT: &str = "missing_count";

/// Name of the count column added by [`check_negative_values`].
pub const NEGATIVE_COUNT: &str = "negative_count";

/// Returns the rows where at least one required column is null, with a
/// `missing_count` of null required fields per row.
///
/// # Errors
///
/// Returns [`crate::ValidationError::MissingColumn`] if a required column is
/// not part of the dataset, and [`crate::ValidationError::ColumnConflict`] if
/// the dataset already has a `row_index` or `missing_count` column.
pub fn check_mandatory_fields<S: AsRef<str>>(
    dataset: &DataSet,
    required_columns: &[S],
) -> Result<DataSet> {
    dataset.require_columns(required_columns)?;
    let required = unique_columns(required_columns);

    let selected: Vec<_> = (0..dataset.len())
        .filter_map(|idx| {
            let missing = required
                .iter()
                .filter(|col| dataset.value(idx, col).is_null())
                .count();
            (missing > 0).then(|| {
                (
                    idx,
                    vec![(MISSING_COUNT.to_string(), DataValue::Int(missing as i64))],
                )
            })
        })
        .collect();

    debug!(
        "Mandatory fields check: {} of {} row(s) incomplete",
        selected.len(),
        dataset.len()
    );
    flagged_rows(dataset, selected, &[MISSING_COUNT.to_string()])
}

/// Returns the rows with at least one negative value among `numeric_columns`.
///
/// Adds a `<col>_negative_flag` (0/1) column per checked column and a
/// `negative_count`. Cells that cannot be cast to a number are never
/// negative.
///
/// # Errors
///
/// Returns [`crate::ValidationError::MissingColumn`] if a listed column is not
/// part of the dataset, and [`crate::ValidationError::ColumnConflict`] if an
/// added column name is already taken.
pub fn check_negative_values<S: AsRef<str>>(
    dataset: &DataSet,
    numeric_columns: &[S],
) -> Result<DataSet> {
    dataset.require_columns(numeric_columns)?;
    let columns = unique_columns(numeric_columns);

    let non_negative = Comparison::Single(Operator::Ge, 0.0);
    let flag_columns: Vec<String> = columns
        .iter()
        .map(|col| format!("{}_negative_flag", col))
        .collect();

    let selected: Vec<_> = (0..dataset.len())
        .filter_map(|idx| {
            let flags: Vec<i64> = columns
                .iter()
                .map(|col| i64::from(non_negative.is_violated_by(dataset.value(idx, col))))
                .collect();
            let count: i64 = flags.iter().sum();
            if count == 0 {
                return None;
            }

            let mut added: Vec<(String, DataValue)> = flag_columns
                .iter()
                .cloned()
                .zip(flags.into_iter().map(DataValue::Int))
                .collect();
            added.push((NEGATIVE_COUNT.to_string(), DataValue::Int(count)));
            Some((idx, added))
        })
        .collect();

    debug!(
        "Negative values check: {} of {} row(s) flagged",
        selected.len(),
        dataset.len()
    );

    let mut extra = flag_columns;
    extra.push(NEGATIVE_COUNT.to_string());
    flagged_rows(dataset, selected, &extra)
}
