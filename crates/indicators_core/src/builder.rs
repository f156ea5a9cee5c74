//! Builder pattern for creating standards bundles.
//!
//! This module provides an ergonomic builder for assembling custom
//! `StandardsConfig` values with a fluent API.

use crate::{CategoricalRule, DataValue, NumericRule, Operator, Standard, StandardsConfig};

/// Builder for creating a `StandardsConfig`.
///
/// # Example
///
/// ```rust
/// use indicators_core::{Operator, Standard, StandardsBuilder};
///
/// let config = StandardsBuilder::new()
///     .extend(Standard::Sphere)
///     .numeric("age", Operator::Ge, 0.0, "Age cannot be negative")
///     .between("fcs", 0.0, 112.0, "FCS should be within [0, 112]")
///     .categorical("ipc_phase", [1, 2, 3, 4, 5], "IPC phase must be 1-5")
///     .build();
///
/// assert_eq!(config.numeric.len(), 5);
/// assert_eq!(config.categorical.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct StandardsBuilder {
    config: StandardsConfig,
}

impl StandardsBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every rule of an existing standard.
    pub fn extend(mut self, standard: impl Into<Standard>) -> Self {
        self.config = self.config.merge(standard.into().config());
        self
    }

    /// Adds a scalar numeric rule.
    pub fn numeric(
        mut self,
        column: impl Into<String>,
        operator: Operator,
        threshold: f64,
        description: impl Into<String>,
    ) -> Self {
        self.config
            .numeric
            .push(NumericRule::new(column, operator, threshold).with_description(description));
        self
    }

    /// Adds an inclusive range rule.
    pub fn between(
        mut self,
        column: impl Into<String>,
        low: f64,
        high: f64,
        description: impl Into<String>,
    ) -> Self {
        self.config.numeric.push(
            NumericRule::new(column, Operator::BetweenInclusive, (low, high))
                .with_description(description),
        );
        self
    }

    /// Adds a prebuilt numeric rule.
    pub fn numeric_rule(mut self, rule: NumericRule) -> Self {
        self.config.numeric.push(rule);
        self
    }

    /// Adds a categorical rule.
    pub fn categorical<I, V>(
        mut self,
        column: impl Into<String>,
        allowed: I,
        description: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<DataValue>,
    {
        self.config
            .categorical
            .push(CategoricalRule::new(column, allowed).with_description(description));
        self
    }

    /// Builds the bundle.
    pub fn build(self) -> StandardsConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Threshold;

    #[test]
    fn test_builder_keeps_order() {
        let config = StandardsBuilder::new()
            .numeric("a", Operator::Le, 1.0, "")
            .between("b", 0.0, 1.0, "")
            .numeric_rule(NumericRule::new("c", Operator::Ne, 0.0))
            .build();

        let columns: Vec<&str> = config.numeric.iter().map(|r| r.column.as_str()).collect();
        assert_eq!(columns, ["a", "b", "c"]);
        assert_eq!(config.numeric[1].threshold, Threshold::Bounds(vec![0.0, 1.0]));
    }

    #[test]
    fn test_extend_with_builtins() {
        let config = StandardsBuilder::new()
            .extend(Standard::Sphere)
            .extend(Standard::Ipc)
            .build();
        assert_eq!(config.numeric.len(), 5);
        assert_eq!(config.categorical.len(), 2);
    }
}
