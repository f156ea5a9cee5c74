//! Rule types for indicator standards.
//!
//! A standards bundle is made of two flat lists of independent, row-scoped
//! predicates: numeric rules (operator + threshold) and categorical rules
//! (allowed value sets).

use crate::{DataValue, RuleError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison operator of a numeric rule.
///
/// The operator states what a *valid* value satisfies; a row is flagged when
/// the comparison fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Operator {
    /// `>=`
    Ge,
    /// `<=`
    Le,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `between_inclusive`
    BetweenInclusive,
}

impl Operator {
    /// All supported operators, in declaration order.
    pub const ALL: [Operator; 7] = [
        Operator::Ge,
        Operator::Le,
        Operator::Lt,
        Operator::Gt,
        Operator::Eq,
        Operator::Ne,
        Operator::BetweenInclusive,
    ];

    /// Returns the operator's spelling in rule definitions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::BetweenInclusive => "between_inclusive",
        }
    }

    /// Returns the operator describing a violation of this one.
    ///
    /// `between_inclusive` has no single-operator inverse and returns `None`.
    pub fn inverse(&self) -> Option<&'static str> {
        match self {
            Operator::Ge => Some("<"),
            Operator::Le => Some(">"),
            Operator::Lt => Some(">="),
            Operator::Gt => Some("<="),
            Operator::Eq => Some("!="),
            Operator::Ne => Some("=="),
            Operator::BetweenInclusive => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str() == s.trim())
            .ok_or_else(|| RuleError::UnsupportedOperator(s.to_string()))
    }
}

impl TryFrom<String> for Operator {
    type Error = RuleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.as_str().to_string()
    }
}

/// Threshold of a numeric rule, as written in the bundle.
///
/// The shape is only checked against the operator when the rule is turned
/// into a [`Comparison`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Threshold {
    /// Single scalar bound
    Value(f64),
    /// List of bounds; `between_inclusive` expects exactly `[low, high]`
    Bounds(Vec<f64>),
}

impl From<f64> for Threshold {
    fn from(v: f64) -> Self {
        Threshold::Value(v)
    }
}

impl From<(f64, f64)> for Threshold {
    fn from((low, high): (f64, f64)) -> Self {
        Threshold::Bounds(vec![low, high])
    }
}

/// A numeric rule checked against every row of the resolved column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericRule {
    /// Canonical indicator name
    pub column: String,

    /// Comparison a valid value satisfies
    #[serde(rename = "op")]
    pub operator: Operator,

    /// Scalar bound, or `[low, high]` for `between_inclusive`
    pub threshold: Threshold,

    /// Human-readable description reported with each violation
    #[serde(default)]
    pub description: String,
}

impl NumericRule {
    /// Creates a numeric rule without a description.
    pub fn new(
        column: impl Into<String>,
        operator: Operator,
        threshold: impl Into<Threshold>,
    ) -> Self {
        Self {
            column: column.into(),
            operator,
            threshold: threshold.into(),
            description: String::new(),
        }
    }

    /// Sets the rule description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Checks the threshold shape against the operator.
    pub fn comparison(&self) -> Result<Comparison, RuleError> {
        match (self.operator, &self.threshold) {
            (Operator::BetweenInclusive, Threshold::Bounds(bounds)) => match bounds.as_slice() {
                [low, high] => Ok(Comparison::Between(*low, *high)),
                _ => Err(self.malformed(format!(
                    "expected a (low, high) pair, found {} value(s)",
                    bounds.len()
                ))),
            },
            (Operator::BetweenInclusive, Threshold::Value(v)) => Err(self.malformed(format!(
                "expected a (low, high) pair, found scalar {}",
                v
            ))),
            (op, Threshold::Value(v)) => Ok(Comparison::Single(op, *v)),
            (_, Threshold::Bounds(bounds)) => Err(self.malformed(format!(
                "expected a scalar, found a list of {} value(s)",
                bounds.len()
            ))),
        }
    }

    fn malformed(&self, message: String) -> RuleError {
        RuleError::malformed_threshold(&self.column, self.operator.as_str(), message)
    }
}

/// A validated numeric comparison: the cast-and-compare primitive shared by
/// numeric rules and the fixed companion checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparison {
    /// Single operator against a scalar; never `BetweenInclusive`
    Single(Operator, f64),
    /// Inclusive range `[low, high]`
    Between(f64, f64),
}

impl Comparison {
    /// Returns true when `value` violates the comparison.
    pub fn is_violated(&self, value: f64) -> bool {
        match *self {
            Comparison::Single(op, t) => match op {
                Operator::Ge => value < t,
                Operator::Le => value > t,
                Operator::Gt => value <= t,
                Operator::Lt => value >= t,
                Operator::Eq => value != t,
                Operator::Ne => value == t,
                Operator::BetweenInclusive => false,
            },
            Comparison::Between(low, high) => value < low || value > high,
        }
    }

    /// Best-effort variant of [`Comparison::is_violated`] on a raw cell.
    ///
    /// Cells that cannot be cast to a number never violate.
    pub fn is_violated_by(&self, value: &DataValue) -> bool {
        value.as_number().is_some_and(|n| self.is_violated(n))
    }

    /// Short label describing the violating condition (e.g. `"< 15"`).
    pub fn label(&self) -> String {
        match self {
            Comparison::Single(op, t) => match op.inverse() {
                Some(inv) => format!("{} {}", inv, t),
                None => format!("not {} {}", op, t),
            },
            Comparison::Between(low, high) => format!("not in [{}, {}]", low, high),
        }
    }
}

/// A categorical rule: the raw cell must be one of the allowed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalRule {
    /// Canonical indicator name
    pub column: String,

    /// Allowed raw values; include `null` to accept missing cells
    pub allowed: Vec<DataValue>,

    /// Human-readable description reported with each violation
    #[serde(default)]
    pub description: String,
}

impl CategoricalRule {
    /// Label reported for every categorical violation.
    pub const LABEL: &'static str = "not in";

    /// Creates a categorical rule without a description.
    pub fn new<I, V>(column: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<DataValue>,
    {
        Self {
            column: column.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
            description: String::new(),
        }
    }

    /// Sets the rule description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns true when `value` is not an allowed member.
    pub fn is_violated_by(&self, value: &DataValue) -> bool {
        !self.allowed.contains(value)
    }
}

/// A bundle of independent numeric and categorical rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardsConfig {
    /// Numeric rules, evaluated first
    #[serde(default)]
    pub numeric: Vec<NumericRule>,

    /// Categorical rules
    #[serde(default)]
    pub categorical: Vec<CategoricalRule>,
}

impl StandardsConfig {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the bundle holds no rules.
    pub fn is_empty(&self) -> bool {
        self.numeric.is_empty() && self.categorical.is_empty()
    }

    /// Total number of rules in the bundle.
    pub fn len(&self) -> usize {
        self.numeric.len() + self.categorical.len()
    }

    /// Appends every rule of `other` after this bundle's rules.
    pub fn merge(mut self, other: StandardsConfig) -> Self {
        self.numeric.extend(other.numeric);
        self.categorical.extend(other.categorical);
        self
    }

    /// Checks every numeric rule's threshold shape.
    ///
    /// Returns one error per malformed rule; an empty list means the bundle
    /// is well-formed. Validation itself only raises for rules whose column
    /// resolves, so this is the way to vet a bundle up front.
    pub fn check(&self) -> Vec<RuleError> {
        self.numeric
            .iter()
            .filter_map(|rule| rule.comparison().err())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_operator_parse() {
        assert_eq!(">=".parse::<Operator>().unwrap(), Operator::Ge);
        assert_eq!(
            "between_inclusive".parse::<Operator>().unwrap(),
            Operator::BetweenInclusive
        );
        assert_eq!(
            "=>".parse::<Operator>(),
            Err(RuleError::UnsupportedOperator("=>".to_string()))
        );
    }

    #[test]
    fn test_violation_conditions() {
        let ge = Comparison::Single(Operator::Ge, 15.0);
        assert!(ge.is_violated(12.0));
        assert!(!ge.is_violated(15.0));

        let le = Comparison::Single(Operator::Le, 1.0);
        assert!(le.is_violated(1.2));
        assert!(!le.is_violated(1.0));

        assert!(Comparison::Single(Operator::Gt, 0.0).is_violated(0.0));
        assert!(Comparison::Single(Operator::Lt, 5.0).is_violated(5.0));
        assert!(Comparison::Single(Operator::Eq, 1.0).is_violated(2.0));
        assert!(Comparison::Single(Operator::Ne, 1.0).is_violated(1.0));
    }

    #[test]
    fn test_between_is_inclusive() {
        let between = Comparison::Between(0.0, 100.0);
        assert!(!between.is_violated(0.0));
        assert!(!between.is_violated(100.0));
        assert!(between.is_violated(100.0001));
        assert!(between.is_violated(-2.0));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Comparison::Single(Operator::Ge, 15.0).label(), "< 15");
        assert_eq!(Comparison::Single(Operator::Le, 0.5).label(), "> 0.5");
        assert_eq!(Comparison::Between(0.0, 112.0).label(), "not in [0, 112]");
    }

    #[test]
    fn test_uncastable_never_violates() {
        let ge = Comparison::Single(Operator::Ge, 15.0);
        assert!(!ge.is_violated_by(&DataValue::from("unknown")));
        assert!(!ge.is_violated_by(&DataValue::Null));
        assert!(ge.is_violated_by(&DataValue::from("12")));
    }

    #[test]
    fn test_malformed_thresholds() {
        let rule = NumericRule::new("coverage_percent", Operator::BetweenInclusive, 100.0);
        assert!(matches!(
            rule.comparison(),
            Err(RuleError::MalformedThreshold { .. })
        ));

        let rule = NumericRule::new(
            "coverage_percent",
            Operator::BetweenInclusive,
            Threshold::Bounds(vec![0.0, 50.0, 100.0]),
        );
        assert!(rule.comparison().is_err());

        let rule = NumericRule::new("fcs", Operator::Ge, (0.0, 112.0));
        assert!(rule.comparison().is_err());
    }

    #[test]
    fn test_categorical_membership() {
        let rule = CategoricalRule::new("ipc_phase", [1, 2, 3, 4, 5]);
        assert!(!rule.is_violated_by(&DataValue::Int(3)));
        assert!(!rule.is_violated_by(&DataValue::Float(3.0)));
        assert!(rule.is_violated_by(&DataValue::Int(6)));
        assert!(rule.is_violated_by(&DataValue::Null));

        let rule = CategoricalRule::new("sex", [DataValue::from("male"), DataValue::Null]);
        assert!(!rule.is_violated_by(&DataValue::Null));
    }

    #[test]
    fn test_check_and_merge() {
        let a = StandardsConfig {
            numeric: vec![NumericRule::new("fcs", Operator::BetweenInclusive, 3.0)],
            categorical: vec![],
        };
        let b = StandardsConfig {
            numeric: vec![NumericRule::new("cmr", Operator::Le, 1.0)],
            categorical: vec![CategoricalRule::new("sex", ["male", "female"])],
        };

        let merged = a.merge(b);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.numeric[1].column, "cmr");
        assert_eq!(merged.check().len(), 1);
    }

    #[test]
    fn test_rule_serde_shape() {
        let rule: NumericRule = serde_json::from_str(
            r#"{"column": "coverage_percent", "op": "between_inclusive", "threshold": [0, 100]}"#,
        )
        .unwrap();
        assert_eq!(rule.threshold, Threshold::Bounds(vec![0.0, 100.0]));
        assert_eq!(rule.description, "");

        let err = serde_json::from_str::<NumericRule>(
            r#"{"column": "fcs", "op": "~=", "threshold": 1}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Unsupported operator"));
    }
}
