//! Error types for validation operations.

use indicators_core::RuleError;
use thiserror::Error;

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors that can occur during validation.
///
/// Only structurally invalid input raises; rows that break a rule are
/// reported as data, never as errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Malformed rule in the standards bundle
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// Column named by the caller is absent from the dataset
    #[error("Column '{0}' not found in dataset")]
    MissingColumn(String),

    /// Reached and targeted column lists cannot be paired
    #[error(
        "Reached and targeted columns must pair up: got {reached} reached and {targeted} targeted column(s)"
    )]
    ColumnPairMismatch { reached: usize, targeted: usize },

    /// Output column would shadow an existing or repeated column
    #[error("Output column '{0}' already exists in dataset")]
    ColumnConflict(String),

    /// No reached/targeted columns were given or inferred
    #[error(
        "Could not determine reached/targeted columns; provide them explicitly or use column names containing 'reached' and 'target'"
    )]
    UnresolvedColumnPairs,
}

impl ValidationError {
    /// Creates a new missing column error.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn(column.into())
    }

    /// Creates a new column conflict error.
    pub fn column_conflict(column: impl Into<String>) -> Self {
        Self::ColumnConflict(column.into())
    }

    /// Creates a new column pair mismatch error.
    pub fn pair_mismatch(reached: usize, targeted: usize) -> Self {
        Self::ColumnPairMismatch { reached, targeted }
    }
}
