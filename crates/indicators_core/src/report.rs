//! Violation records and the unified violations table.

use crate::DataValue;
use serde::{Deserialize, Serialize};

/// One rule failing for one dataset row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolationRecord {
    /// 0-based index of the offending row in the input dataset
    pub row_index: usize,

    /// Resolved (actual) column name
    pub column: String,

    /// Description of the failed rule
    pub description: String,

    /// Short label of the violating condition (e.g. `"< 15"`)
    pub rule: String,

    /// Raw value at the offending cell
    pub value: DataValue,
}

/// Statistics about a validation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationStats {
    /// Number of dataset rows scanned
    pub rows_scanned: usize,

    /// Number of rules whose column resolved and were evaluated
    pub rules_evaluated: usize,

    /// Number of rules skipped because their column did not resolve
    pub rules_skipped: usize,

    /// Validation duration in milliseconds
    pub duration_ms: u64,
}

/// Unified output of a standards validation run.
///
/// Records follow rule order (numeric rules, then categorical rules), and row
/// order within each rule. The schema in [`ViolationTable::COLUMNS`] holds
/// even when there are no records. Serialization covers records and
/// unresolved rules only, so identical runs serialize identically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViolationTable {
    /// Violation records
    pub records: Vec<ViolationRecord>,

    /// Canonical columns of rules skipped because they did not resolve
    pub unresolved_rules: Vec<String>,

    /// Run statistics
    #[serde(skip)]
    pub stats: ValidationStats,
}

impl ViolationTable {
    /// Output column schema, in order.
    pub const COLUMNS: [&'static str; 5] = ["row_index", "column", "description", "rule", "value"];

    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of violation records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when no violation was found.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the output column schema.
    pub fn columns(&self) -> &'static [&'static str] {
        &Self::COLUMNS
    }

    /// Returns an iterator over the records.
    pub fn iter(&self) -> impl Iterator<Item = &ViolationRecord> {
        self.records.iter()
    }

    /// Returns the records reported for an actual column.
    pub fn for_column<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a ViolationRecord> {
        self.records.iter().filter(move |r| r.column == column)
    }

    /// Sorted, deduplicated indices of rows with at least one violation.
    pub fn row_indices(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.records.iter().map(|r| r.row_index).collect();
        rows.sort_unstable();
        rows.dedup();
        rows
    }
}

/// Equality covers records and unresolved rules; timing stats are ignored.
impl PartialEq for ViolationTable {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records && self.unresolved_rules == other.unresolved_rules
    }
}

impl<'a> IntoIterator for &'a ViolationTable {
    type Item = &'a ViolationRecord;
    type IntoIter = std::slice::Iter<'a, ViolationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
