//! Dataset representation for validation.
//!
//! A `DataSet` is an already-loaded table: an ordered list of column names
//! plus rows keyed by column name. Row order defines the `row_index` used in
//! every report.

use crate::{Result, ValidationError};
use indicators_core::DataValue;
use std::collections::{BTreeSet, HashMap};

/// A single row of data.
pub type DataRow = HashMap<String, DataValue>;

static NULL: DataValue = DataValue::Null;

/// A dataset containing multiple rows.
///
/// Column order is explicit so that "first matching column" lookups are
/// deterministic. Cells absent from a row read as null.
///
/// # Example
///
/// ```rust
/// use indicators_validator::{DataSet, DataValue};
///
/// let dataset = DataSet::from_columns(vec![
///     ("province", vec!["Kabul".into(), "Herat".into()]),
///     ("water_per_person", vec![12.into(), 18.into()]),
/// ]);
///
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.value(1, "water_per_person"), &DataValue::Int(18));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSet {
    columns: Vec<String>,
    rows: Vec<DataRow>,
}

impl DataSet {
    /// Creates a new empty dataset.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a dataset from rows.
    ///
    /// Columns are the union of all row keys, sorted by name.
    pub fn from_rows(rows: Vec<DataRow>) -> Self {
        let columns: BTreeSet<&String> = rows.iter().flat_map(|row| row.keys()).collect();
        let columns = columns.into_iter().cloned().collect();
        Self { columns, rows }
    }

    /// Creates a dataset with an explicit column order.
    ///
    /// Row keys missing from `columns` are appended in sorted order.
    pub fn with_columns(columns: Vec<String>, rows: Vec<DataRow>) -> Self {
        let mut dataset = Self {
            columns,
            rows: Vec::with_capacity(rows.len()),
        };
        for row in rows {
            dataset.add_row(row);
        }
        dataset
    }

    /// Creates a dataset from named columns, keeping their order.
    ///
    /// Shorter columns are padded with nulls.
    pub fn from_columns<S: Into<String>>(columns: Vec<(S, Vec<DataValue>)>) -> Self {
        let height = columns.iter().map(|(_, values)| values.len()).max().unwrap_or(0);
        let mut names = Vec::with_capacity(columns.len());
        let mut rows = vec![DataRow::new(); height];

        for (name, values) in columns {
            let name = name.into();
            for (row, value) in rows.iter_mut().zip(values) {
                row.insert(name.clone(), value);
            }
            names.push(name);
        }

        Self {
            columns: names,
            rows,
        }
    }

    /// Returns the number of rows in the dataset.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the column names, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns true if `column` is one of the dataset's columns.
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Fails with [`ValidationError::MissingColumn`] for the first absent column.
    pub fn require_columns<S: AsRef<str>>(&self, columns: &[S]) -> Result<()> {
        for column in columns {
            let column: &str = column.as_ref();
            if !self.has_column(column) {
                return Err(ValidationError::missing_column(column));
            }
        }
        Ok(())
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &DataRow> {
        self.rows.iter()
    }

    /// Gets a specific row by index.
    pub fn get_row(&self, index: usize) -> Option<&DataRow> {
        self.rows.get(index)
    }

    /// Returns the cell at `row`/`column`, or null when absent.
    pub fn value(&self, row: usize, column: &str) -> &DataValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&NULL)
    }

    /// Returns every cell of a column, in row order.
    pub fn column_values<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a DataValue> {
        self.rows
            .iter()
            .map(move |row| row.get(column).unwrap_or(&NULL))
    }

    /// Adds a row to the dataset, registering any new column names.
    pub fn add_row(&mut self, row: DataRow) {
        let mut new_columns: Vec<&String> = row
            .keys()
            .filter(|key| !self.columns.contains(*key))
            .collect();
        new_columns.sort();
        self.columns.extend(new_columns.into_iter().cloned());
        self.rows.push(row);
    }
}

impl FromIterator<DataRow> for DataSet {
    fn from_iter<T: IntoIterator<Item = DataRow>>(iter: T) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}

/// Fails with [`ValidationError::ColumnConflict`] if any of `added` is
/// already a column of `dataset` or appears twice.
pub(crate) fn ensure_new_columns<'a>(
    dataset: &DataSet,
    added: impl IntoIterator<Item = &'a str>,
) -> Result<()> {
    let mut seen = BTreeSet::new();
    for column in added {
        if dataset.has_column(column) || !seen.insert(column) {
            return Err(ValidationError::column_conflict(column));
        }
    }
    Ok(())
}

/// Caller-listed column names, first occurrence kept.
pub(crate) fn unique_columns<S: AsRef<str>>(columns: &[S]) -> Vec<&str> {
    let mut seen = BTreeSet::new();
    columns
        .iter()
        .map(AsRef::as_ref)
        .filter(|column| seen.insert(*column))
        .collect()
}

/// Builds the output of a companion check: `row_index`, the input columns,
/// then `extra` columns, for the selected rows only.
///
/// # Errors
///
/// Returns [`ValidationError::ColumnConflict`] when `row_index` or an `extra`
/// column would shadow an input column.
pub(crate) fn flagged_rows(
    dataset: &DataSet,
    selected: impl IntoIterator<Item = (usize, Vec<(String, DataValue)>)>,
    extra: &[String],
) -> Result<DataSet> {
    ensure_new_columns(
        dataset,
        std::iter::once(ROW_INDEX).chain(extra.iter().map(String::as_str)),
    )?;

    let mut columns = Vec::with_capacity(dataset.columns.len() + extra.len() + 1);
    columns.push(ROW_INDEX.to_string());
    columns.extend(dataset.columns.iter().cloned());
    columns.extend(extra.iter().cloned());

    let rows = selected
        .into_iter()
        .map(|(idx, added)| {
            let mut row = dataset.rows[idx].clone();
            row.insert(ROW_INDEX.to_string(), DataValue::Int(idx as i64));
            row.extend(added);
            row
        })
        .collect();

    Ok(DataSet { columns, rows })
}

/// Name of the original-row-index column added by companion checks.
pub const ROW_INDEX: &str = "row_index";
