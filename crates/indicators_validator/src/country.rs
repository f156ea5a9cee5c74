//! ISO 3166-1 alpha-2 country code checks.

use crate::dataset::{ensure_new_columns, unique_columns};
use crate::flags::{INVALID, VALID, flag_column, tally_flags};
use crate::{DataSet, DataValue, Result};
use isocountry::CountryCode;
use tracing::debug;

/// Returns true when `code`, uppercased, is an assigned ISO 3166-1 alpha-2 code.
///
/// Surrounding whitespace is not trimmed.
pub fn is_country_code(code: &str) -> bool {
    CountryCode::for_alpha2(&code.to_uppercase()).is_ok()
}

/// Validates a country code column.
///
/// Returns every row with a `<col>_valid_flag` column holding `"Valid"` or
/// `"Invalid"`. Lowercase codes are accepted. Nulls, numbers and unknown codes
/// are `"Invalid"`.
///
/// # Errors
///
/// Returns [`crate::ValidationError::MissingColumn`] if the column is absent,
/// and [`crate::ValidationError::ColumnConflict`] if `<col>_valid_flag`
/// already exists.
pub fn check_country_codes(dataset: &DataSet, country_column: &str) -> Result<DataSet> {
    dataset.require_columns(&[country_column])?;
    let flag_col = flag_column(country_column);
    ensure_new_columns(dataset, [flag_col.as_str()])?;

    let mut columns = dataset.columns().to_vec();
    columns.push(flag_col.clone());
    let mut output = DataSet::with_columns(columns, Vec::new());
    let mut invalid = 0usize;

    for row in dataset.rows() {
        let valid = matches!(
            row.get(country_column),
            Some(DataValue::String(code)) if is_country_code(code)
        );
        if !valid {
            invalid += 1;
        }
        let mut row = row.clone();
        row.insert(
            flag_col.clone(),
            DataValue::from(if valid { VALID } else { INVALID }),
        );
        output.add_row(row);
    }

    debug!(
        "Country code check on '{}': {} invalid code(s) in {} row(s)",
        country_column,
        invalid,
        dataset.len()
    );
    Ok(output)
}

/// Counts Valid/Invalid country codes per group.
///
/// Output columns are `group_by`, then `column`, `valid_flag` and `count`.
///
/// # Errors
///
/// As [`check_country_codes`], plus [`crate::ValidationError::MissingColumn`]
/// for an absent group column and [`crate::ValidationError::ColumnConflict`]
/// for a group column named `column`, `valid_flag` or `count`.
pub fn summarize_country_codes<G: AsRef<str>>(
    dataset: &DataSet,
    country_column: &str,
    group_by: &[G],
) -> Result<DataSet> {
    dataset.require_columns(group_by)?;
    let flagged = check_country_codes(dataset, country_column)?;
    tally_flags(
        &flagged,
        &unique_columns(group_by),
        &[(country_column, flag_column(country_column))],
    )
}
