//! Rule evaluation.
//!
//! Applies a single numeric or categorical rule to one resolved column and
//! produces a per-row violation mask.

use crate::{DataSet, Result};
use indicators_core::{CategoricalRule, DataValue, NumericRule, Operator, Threshold};

/// Evaluates a numeric comparison over `column`.
///
/// Returns the violation mask (one entry per row) and the rule label. Cells
/// that cannot be cast to a number are never flagged.
///
/// # Errors
///
/// Returns [`indicators_core::RuleError::MalformedThreshold`] when the
/// threshold shape does not fit the operator.
pub fn evaluate_numeric(
    dataset: &DataSet,
    column: &str,
    operator: Operator,
    threshold: &Threshold,
) -> Result<(Vec<bool>, String)> {
    let rule = NumericRule::new(column, operator, threshold.clone());
    evaluate_numeric_rule(dataset, column, &rule)
}

/// Evaluates a numeric rule against the already-resolved `column`.
pub fn evaluate_numeric_rule(
    dataset: &DataSet,
    column: &str,
    rule: &NumericRule,
) -> Result<(Vec<bool>, String)> {
    let comparison = rule.comparison()?;
    let mask = dataset
        .column_values(column)
        .map(|value| comparison.is_violated_by(value))
        .collect();
    Ok((mask, comparison.label()))
}

/// Evaluates a raw-value membership test over `column`.
///
/// Nulls are flagged unless `allowed` contains null.
pub fn evaluate_categorical(dataset: &DataSet, column: &str, allowed: &[DataValue]) -> Vec<bool> {
    dataset
        .column_values(column)
        .map(|value| !allowed.contains(value))
        .collect()
}

/// Evaluates a categorical rule against the already-resolved `column`.
pub fn evaluate_categorical_rule(
    dataset: &DataSet,
    column: &str,
    rule: &CategoricalRule,
) -> Vec<bool> {
    dataset
        .column_values(column)
        .map(|value| rule.is_violated_by(value))
        .collect()
}
