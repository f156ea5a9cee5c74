//! Valid/Invalid flag columns and their per-group tallies.

use crate::{DataSet, DataValue, Result, ValidationError};

/// Flag value for cells that pass a check.
pub const VALID: &str = "Valid";

/// Flag value for cells that fail a check.
pub const INVALID: &str = "Invalid";

/// Summary column naming the checked input column.
pub const CHECKED_COLUMN: &str = "column";

/// Summary column holding the flag value.
pub const FLAG: &str = "valid_flag";

/// Summary column holding the number of rows.
pub const COUNT: &str = "count";

/// Name of the flag column added for `column`.
pub fn flag_column(column: &str) -> String {
    format!("{}_valid_flag", column)
}

/// Counts Valid/Invalid flags per group.
///
/// `checked` pairs each input column with its flag column in `flagged`.
/// Output columns are `group_by`, then `column`, `valid_flag` and `count`.
/// Groups appear in first-seen order; within a group, checked columns keep
/// their order and `Valid` precedes `Invalid`. Zero counts are omitted.
pub(crate) fn tally_flags(
    flagged: &DataSet,
    group_by: &[&str],
    checked: &[(&str, String)],
) -> Result<DataSet> {
    if let Some(reserved) = group_by
        .iter()
        .find(|c| [CHECKED_COLUMN, FLAG, COUNT].contains(*c))
    {
        return Err(ValidationError::column_conflict(*reserved));
    }

    let invalid = DataValue::from(INVALID);
    let mut groups: Vec<(Vec<DataValue>, Vec<[i64; 2]>)> = Vec::new();

    for row in 0..flagged.len() {
        let key: Vec<DataValue> = group_by
            .iter()
            .map(|col| flagged.value(row, col).clone())
            .collect();
        let pos = match groups.iter().position(|(k, _)| *k == key) {
            Some(pos) => pos,
            None => {
                groups.push((key, vec![[0, 0]; checked.len()]));
                groups.len() - 1
            }
        };
        for (counts, (_, flag_col)) in groups[pos].1.iter_mut().zip(checked) {
            let slot = usize::from(flagged.value(row, flag_col) == &invalid);
            counts[slot] += 1;
        }
    }

    let columns: Vec<String> = group_by
        .iter()
        .map(|c| c.to_string())
        .chain([CHECKED_COLUMN, FLAG, COUNT].map(String::from))
        .collect();
    let mut summary = DataSet::with_columns(columns, Vec::new());

    for (key, counts) in &groups {
        for ((source, _), pair) in checked.iter().zip(counts) {
            for (flag, count) in [VALID, INVALID].into_iter().zip(pair) {
                if *count == 0 {
                    continue;
                }
                let mut row: crate::DataRow = group_by
                    .iter()
                    .map(|c| c.to_string())
                    .zip(key.iter().cloned())
                    .collect();
                row.insert(CHECKED_COLUMN.to_string(), DataValue::from(*source));
                row.insert(FLAG.to_string(), DataValue::from(flag));
                row.insert(COUNT.to_string(), DataValue::Int(*count));
                summary.add_row(row);
            }
        }
    }

    Ok(summary)
}
