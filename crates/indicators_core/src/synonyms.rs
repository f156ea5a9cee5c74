//! Column aliases and synonyms used for column resolution.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Caller-supplied `canonical -> actual` column overrides.
pub type ColumnAliasMap = HashMap<String, String>;

/// Alternate spellings of canonical indicator names.
///
/// Consulted only when neither an alias nor a normalized exact match exists.
/// Synonyms are tried in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    /// Creates a table with no synonyms.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Creates the built-in synonym table.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        table.insert(
            "water_liters_per_person_per_day",
            ["water_per_person", "water_liters", "water_lppd", "waterppd"],
        );
        table.insert(
            "coverage_percent",
            ["coverage", "coverage_pct", "pct_coverage"],
        );
        table.insert("cmr_per_10k_per_day", ["cmr", "cmr_per_10k", "cmr10k"]);
        table.insert("ipc_phase", ["ipc", "phase"]);
        table.insert("sex", ["gender"]);
        table.insert("fcs", ["food_consumption_score"]);
        table
    }

    /// Appends synonyms for a canonical name, after any existing ones.
    pub fn insert<I, S>(&mut self, canonical: impl Into<String>, synonyms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(canonical.into())
            .or_default()
            .extend(synonyms.into_iter().map(Into::into));
    }

    /// Returns the synonyms registered for `canonical`.
    pub fn get(&self, canonical: &str) -> &[String] {
        self.entries
            .get(canonical)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of canonical names with synonyms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no synonyms are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_synonyms() {
        let table = SynonymTable::builtin();
        assert_eq!(table.len(), 6);
        assert_eq!(table.get("sex"), ["gender".to_string()]);
        assert!(table.get("province").is_empty());
    }

    #[test]
    fn test_insert_appends() {
        let mut table = SynonymTable::builtin();
        table.insert("sex", ["sex_of_respondent"]);
        assert_eq!(table.get("sex"), ["gender", "sex_of_respondent"]);
    }
}
