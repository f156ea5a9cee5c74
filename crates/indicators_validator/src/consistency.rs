//! Cross-field consistency checks.
//!
//! Detects rows where a "reached" figure exceeds its "targeted" counterpart.

use crate::dataset::flagged_rows;
use crate::{DataSet, DataValue, Result, ValidationError};
use indicators_core::{Comparison, Operator};
use tracing::debug;

/// Name of the count column added by [`check_reached_vs_targeted`].
pub const INCONSISTENCY_COUNT: &str = "inconsistency_count";

/// Infers reached/targeted columns by name, in dataset column order.
///
/// A column is "reached" if its lowercased name contains `reached`, and
/// "targeted" if it contains `target`.
pub fn infer_column_pairs(dataset: &DataSet) -> (Vec<String>, Vec<String>) {
    let matching = |needle: &str| -> Vec<String> {
        dataset
            .columns()
            .iter()
            .filter(|c| c.to_lowercase().contains(needle))
            .cloned()
            .collect()
    };
    (matching("reached"), matching("target"))
}

/// Returns the rows where reached exceeds targeted for at least one pair.
///
/// Pairs are formed positionally from `reached_columns` and
/// `targeted_columns`; a side left as `None` or empty is inferred with
/// [`infer_column_pairs`]. Adds a boolean `reached_gt_targeted_<i>` column per
/// pair (1-based) and an `inconsistency_count`. Pairs where either cell
/// cannot be cast to a number are not flagged.
///
/// # Errors
///
/// - [`ValidationError::UnresolvedColumnPairs`] when no columns are given or inferred
/// - [`ValidationError::ColumnPairMismatch`] when the two lists differ in length
/// - [`ValidationError::MissingColumn`] when a named column is absent
/// - [`ValidationError::ColumnConflict`] when an added column name is taken
pub fn check_reached_vs_targeted(
    dataset: &DataSet,
    reached_columns: Option<&[String]>,
    targeted_columns: Option<&[String]>,
) -> Result<DataSet> {
    let (inferred_reached, inferred_targeted) = infer_column_pairs(dataset);
    let reached = reached_columns
        .filter(|cols| !cols.is_empty())
        .unwrap_or(&inferred_reached);
    let targeted = targeted_columns
        .filter(|cols| !cols.is_empty())
        .unwrap_or(&inferred_targeted);

    if reached.is_empty() || targeted.is_empty() {
        return Err(ValidationError::UnresolvedColumnPairs);
    }
    if reached.len() != targeted.len() {
        return Err(ValidationError::pair_mismatch(reached.len(), targeted.len()));
    }
    dataset.require_columns(reached)?;
    dataset.require_columns(targeted)?;

    let flag_columns: Vec<String> = (1..=reached.len())
        .map(|i| format!("reached_gt_targeted_{}", i))
        .collect();

    let selected: Vec<_> = (0..dataset.len())
        .filter_map(|idx| {
            let flags: Vec<bool> = reached
                .iter()
                .zip(targeted)
                .map(|(r, t)| {
                    dataset.value(idx, t).as_number().is_some_and(|target| {
                        Comparison::Single(Operator::Le, target)
                            .is_violated_by(dataset.value(idx, r))
                    })
                })
                .collect();
            let count = flags.iter().filter(|f| **f).count();
            if count == 0 {
                return None;
            }

            let mut added: Vec<(String, DataValue)> = flag_columns
                .iter()
                .cloned()
                .zip(flags.into_iter().map(DataValue::Bool))
                .collect();
            added.push((INCONSISTENCY_COUNT.to_string(), DataValue::Int(count as i64)));
            Some((idx, added))
        })
        .collect();

    debug!(
        "Reached vs targeted check over {} pair(s): {} row(s) inconsistent",
        reached.len(),
        selected.len()
    );

    let mut extra = flag_columns;
    extra.push(INCONSISTENCY_COUNT.to_string());
    flagged_rows(dataset, selected, &extra)
}
