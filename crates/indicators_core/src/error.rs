//! Error types for rule definitions.
//!
//! Rule errors describe structurally invalid standards bundles. Data problems
//! (missing columns, uncastable cells) are never errors; they are reported or
//! skipped by the validator.

use thiserror::Error;

/// Result type for rule operations.
pub type Result<T> = std::result::Result<T, RuleError>;

/// Errors raised by malformed rules or standards selectors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuleError {
    /// Operator spelling not in the supported set
    #[error("Unsupported operator: '{0}'")]
    UnsupportedOperator(String),

    /// Threshold shape does not match the operator
    #[error("Malformed threshold for column '{column}' (operator {operator}): {message}")]
    MalformedThreshold {
        /// Canonical column of the offending rule
        column: String,
        /// Operator of the offending rule
        operator: String,
        /// What is wrong with the threshold
        message: String,
    },

    /// Standard name not in the built-in registry
    #[error("Unknown standard: '{0}' (expected one of: sphere, ipc)")]
    UnknownStandard(String),
}

impl RuleError {
    /// Creates a new malformed threshold error.
    pub fn malformed_threshold(
        column: impl Into<String>,
        operator: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedThreshold {
            column: column.into(),
            operator: operator.into(),
            message: message.into(),
        }
    }
}
