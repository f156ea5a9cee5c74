//! Date plausibility checks.
//!
//! Flags dates earlier than a fixed floor or later than the validation day.

use crate::dataset::{ensure_new_columns, unique_columns};
use crate::flags::{INVALID, VALID, flag_column, tally_flags};
use crate::{DataSet, DataValue, Result};
use chrono::{Local, NaiveDate};
use tracing::debug;

/// Inclusive range of plausible dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Earliest plausible date
    pub min: NaiveDate,
    /// Latest plausible date
    pub max: NaiveDate,
}

impl DateRange {
    /// Creates a range from explicit bounds.
    pub fn new(min: NaiveDate, max: NaiveDate) -> Self {
        Self { min, max }
    }

    /// Earliest date accepted by the default range: 1900-01-01.
    pub fn default_floor() -> NaiveDate {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Replaces the lower bound.
    pub fn with_min(mut self, min: NaiveDate) -> Self {
        self.min = min;
        self
    }

    /// Replaces the upper bound.
    pub fn with_max(mut self, max: NaiveDate) -> Self {
        self.max = max;
        self
    }

    /// Returns true when `date` lies within the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.min && date <= self.max
    }
}

/// 1900-01-01 up to today, by the local clock.
impl Default for DateRange {
    fn default() -> Self {
        Self {
            min: Self::default_floor(),
            max: Local::now().date_naive(),
        }
    }
}

/// Validates date columns against `range`.
///
/// Returns every row. Each listed column is replaced by its parsed date
/// (null when unparseable), and a `<col>_valid_flag` column holds `"Valid"`
/// or `"Invalid"`. Unparseable cells are not flagged. A column listed twice
/// is checked once.
///
/// # Errors
///
/// Returns [`crate::ValidationError::MissingColumn`] if a listed column is not
/// part of the dataset, and [`crate::ValidationError::ColumnConflict`] if a
/// `<col>_valid_flag` column already exists.
pub fn check_date_range<S: AsRef<str>>(
    dataset: &DataSet,
    date_columns: &[S],
    range: DateRange,
) -> Result<DataSet> {
    dataset.require_columns(date_columns)?;
    let columns = unique_columns(date_columns);
    let flags: Vec<String> = columns.iter().map(|col| flag_column(col)).collect();
    ensure_new_columns(dataset, flags.iter().map(String::as_str))?;

    let mut output = DataSet::with_columns(
        dataset
            .columns()
            .iter()
            .cloned()
            .chain(flags.iter().cloned())
            .collect(),
        Vec::new(),
    );
    let mut invalid = 0usize;

    for row in dataset.rows() {
        let mut row = row.clone();
        for (col, flag_col) in columns.iter().zip(&flags) {
            let parsed = row.get(*col).and_then(DataValue::as_date);
            let flag = match parsed {
                Some(date) if !range.contains(date) => {
                    invalid += 1;
                    INVALID
                }
                _ => VALID,
            };
            row.insert(col.to_string(), DataValue::from(parsed));
            row.insert(flag_col.clone(), DataValue::from(flag));
        }
        output.add_row(row);
    }

    debug!(
        "Date range check: {} invalid date(s) in {} row(s)",
        invalid,
        dataset.len()
    );
    Ok(output)
}

/// Counts Valid/Invalid date flags per group.
///
/// Runs [`check_date_range`] and tallies each date column's flags. Output
/// columns are `group_by`, then `column`, `valid_flag` and `count`, with
/// groups in first-seen order.
///
/// # Errors
///
/// As [`check_date_range`], plus [`crate::ValidationError::MissingColumn`] for
/// an absent group column and [`crate::ValidationError::ColumnConflict`] for a
/// group column named `column`, `valid_flag` or `count`.
pub fn summarize_date_flags<S: AsRef<str>, G: AsRef<str>>(
    dataset: &DataSet,
    date_columns: &[S],
    group_by: &[G],
    range: DateRange,
) -> Result<DataSet> {
    dataset.require_columns(group_by)?;
    let flagged = check_date_range(dataset, date_columns, range)?;
    let checked: Vec<(&str, String)> = unique_columns(date_columns)
        .into_iter()
        .map(|col| (col, flag_column(col)))
        .collect();
    tally_flags(&flagged, &unique_columns(group_by), &checked)
}
