//! Main validation engine.
//!
//! This module provides the `IndicatorValidator` that resolves every rule of a
//! standard against a dataset, evaluates it, and collects the violations into
//! one table.

use crate::evaluator::{evaluate_categorical_rule, evaluate_numeric_rule};
use crate::{ColumnResolver, DataSet, Result};
use indicators_core::{ColumnAliasMap, Standard, ValidationContext, ViolationRecord, ViolationTable};
use std::time::Instant;
use tracing::{debug, info};

/// Validation engine for indicator standards.
///
/// Rules are independent: each is resolved and evaluated on its own, and a
/// row failing several rules yields one record per failed rule. Rules whose
/// column cannot be resolved are skipped and listed in
/// [`ViolationTable::unresolved_rules`].
///
/// # Example
///
/// ```rust
/// use indicators_validator::{DataSet, IndicatorValidator};
/// use indicators_core::{Standard, ValidationContext};
///
/// let dataset = DataSet::from_columns(vec![
///     ("province", vec!["Kabul".into(), "Herat".into(), "Balkh".into()]),
///     ("water_per_person", vec![12.into(), 18.into(), 10.into()]),
/// ]);
///
/// let validator = IndicatorValidator::new();
/// let table = validator
///     .validate(&dataset, &Standard::Sphere, &ValidationContext::new())
///     .expect("built-in standards are well-formed");
///
/// assert_eq!(table.row_indices(), vec![0, 2]);
/// for record in &table {
///     println!("row {}: {} {}", record.row_index, record.column, record.rule);
/// }
/// ```
#[derive(Debug, Default)]
pub struct IndicatorValidator;

impl IndicatorValidator {
    /// Creates a new indicator validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates a dataset against a standard.
    ///
    /// Numeric rules are evaluated before categorical rules, each in bundle
    /// order; records within a rule follow row order.
    ///
    /// # Errors
    ///
    /// Fails on the first resolved numeric rule whose threshold does not fit
    /// its operator. Unresolved rules never raise.
    pub fn validate(
        &self,
        dataset: &DataSet,
        standard: &Standard,
        context: &ValidationContext,
    ) -> Result<ViolationTable> {
        let start = Instant::now();
        let config = standard.config();
        let resolver = ColumnResolver::new(dataset.columns());
        let mut table = ViolationTable::new();

        let resolve = |canonical: &str| {
            resolver.resolve(canonical, &context.column_aliases, &context.synonyms)
        };

        for rule in &config.numeric {
            let Some(column) = resolve(&rule.column) else {
                debug!("Skipping numeric rule on '{}': column not found", rule.column);
                table.unresolved_rules.push(rule.column.clone());
                continue;
            };
            let (mask, label) = evaluate_numeric_rule(dataset, column, rule)?;
            collect(&mut table, dataset, column, &rule.description, &label, &mask);
            table.stats.rules_evaluated += 1;
        }

        for rule in &config.categorical {
            let Some(column) = resolve(&rule.column) else {
                debug!(
                    "Skipping categorical rule on '{}': column not found",
                    rule.column
                );
                table.unresolved_rules.push(rule.column.clone());
                continue;
            };
            let mask = evaluate_categorical_rule(dataset, column, rule);
            collect(
                &mut table,
                dataset,
                column,
                &rule.description,
                indicators_core::CategoricalRule::LABEL,
                &mask,
            );
            table.stats.rules_evaluated += 1;
        }

        table.stats.rows_scanned = dataset.len();
        table.stats.rules_skipped = table.unresolved_rules.len();
        table.stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            "Validated {} row(s) against {}: {} violation(s), {} rule(s) skipped",
            dataset.len(),
            standard,
            table.len(),
            table.stats.rules_skipped
        );

        Ok(table)
    }
}

/// Appends one record per flagged row.
fn collect(
    table: &mut ViolationTable,
    dataset: &DataSet,
    column: &str,
    description: &str,
    label: &str,
    mask: &[bool],
) {
    let records = mask
        .iter()
        .enumerate()
        .filter(|(_, flagged)| **flagged)
        .map(|(row_index, _)| ViolationRecord {
            row_index,
            column: column.to_string(),
            description: description.to_string(),
            rule: label.to_string(),
            value: dataset.value(row_index, column).clone(),
        });
    table.records.extend(records);
}

/// Validates `dataset` against a standard selected by name or given as a
/// custom bundle, with optional column aliases and the built-in synonyms.
///
/// # Example
///
/// ```rust
/// use indicators_validator::{validate, DataSet};
/// use indicators_core::ColumnAliasMap;
///
/// let dataset = DataSet::from_columns(vec![("ipc", vec![3.into(), 6.into(), 2.into()])]);
/// let table = validate(&dataset, "ipc", &ColumnAliasMap::new()).unwrap();
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.records[0].row_index, 1);
/// assert_eq!(table.records[0].column, "ipc");
/// ```
pub fn validate(
    dataset: &DataSet,
    standards: impl Into<Standard>,
    column_aliases: &ColumnAliasMap,
) -> Result<ViolationTable> {
    let context = ValidationContext::new().with_aliases(column_aliases.clone());
    IndicatorValidator::new().validate(dataset, &standards.into(), &context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DataValue, ValidationError};
    use indicators_core::{Operator, StandardsBuilder, StandardsConfig, SynonymTable};
    use pretty_assertions::assert_eq;

    fn sphere_dataset() -> DataSet {
        DataSet::from_columns(vec![
            ("province", vec!["Kabul".into(), "Herat".into(), "Balkh".into()]),
            ("water_per_person", vec![12.into(), 18.into(), 10.into()]),
            ("coverage", vec![95.into(), 105.into(), (-2).into()]),
            ("sex", vec!["male".into(), "female".into(), "other".into()]),
            ("cmr_per_10k", vec![0.8.into(), 1.2.into(), 0.5.into()]),
        ])
    }

    #[test]
    fn test_sphere_full_run() {
        let table = validate(&sphere_dataset(), "sphere", &ColumnAliasMap::new()).unwrap();

        let summary: Vec<(usize, &str, &str)> = table
            .iter()
            .map(|r| (r.row_index, r.column.as_str(), r.rule.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (0, "water_per_person", "< 15"),
                (2, "water_per_person", "< 15"),
                (1, "coverage", "not in [0, 100]"),
                (2, "coverage", "not in [0, 100]"),
                (1, "cmr_per_10k", "> 1"),
                (2, "sex", "not in"),
            ]
        );
        assert!(table.unresolved_rules.is_empty());
        assert_eq!(table.stats.rules_evaluated, 4);
        assert_eq!(table.records[0].value, DataValue::Int(12));
        assert_eq!(
            table.records[0].description,
            "Sphere: min 15L of safe water per person per day"
        );
    }

    #[test]
    fn test_unresolved_rules_are_listed() {
        let dataset = DataSet::from_columns(vec![("fcs", vec![120.into()])]);
        let table = validate(&dataset, "ipc", &ColumnAliasMap::new()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.unresolved_rules, ["coverage_percent", "ipc_phase"]);
        assert_eq!(table.stats.rules_skipped, 2);
    }

    #[test]
    fn test_empty_standard_yields_empty_table() {
        let table = validate(&sphere_dataset(), "unknown", &ColumnAliasMap::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns().len(), 5);
    }

    #[test]
    fn test_malformed_rule_on_unresolved_column_is_skipped() {
        let config = StandardsConfig {
            numeric: vec![indicators_core::NumericRule::new(
                "not_there",
                Operator::BetweenInclusive,
                5.0,
            )],
            categorical: vec![],
        };
        let table = validate(&sphere_dataset(), config, &ColumnAliasMap::new()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_malformed_rule_on_resolved_column_fails() {
        let config = StandardsConfig {
            numeric: vec![indicators_core::NumericRule::new(
                "coverage_percent",
                Operator::Le,
                (0.0, 100.0),
            )],
            categorical: vec![],
        };
        let err = validate(&sphere_dataset(), config, &ColumnAliasMap::new()).unwrap_err();
        assert!(matches!(err, ValidationError::Rule(_)));
    }

    #[test]
    fn test_custom_synonyms() {
        let dataset = DataSet::from_columns(vec![("hh_water", vec![5.into()])]);
        let mut synonyms = SynonymTable::empty();
        synonyms.insert("water", ["hh_water"]);
        let config = StandardsBuilder::new()
            .numeric("water", Operator::Ge, 15.0, "min water")
            .build();

        let context = ValidationContext::new().with_synonyms(synonyms);
        let table = IndicatorValidator::new()
            .validate(&dataset, &Standard::Custom(config), &context)
            .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records[0].column, "hh_water");
    }
}
