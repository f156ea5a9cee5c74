//! Column resolution.
//!
//! Maps a canonical indicator name, as used inside a rule, to the column that
//! actually holds it in a dataset. Resolution order:
//!
//! 1. explicit caller alias (exact, then normalized match)
//! 2. normalized match of the canonical name
//! 3. normalized match of each synonym, in table order
//!
//! Normalization lowercases and drops every character that is not a letter,
//! digit or underscore, so `"Coverage (%)"` and `"COVERAGE"` both match
//! `coverage`, while `"IPC_Phase"` matches `ipc_phase`.

use indicators_core::{ColumnAliasMap, SynonymTable};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static NON_KEY_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{Alphabetic}\p{N}_]").expect("static column-name pattern is valid")
});

/// Normalizes a column name for flexible comparison.
pub fn normalize_key(name: &str) -> String {
    NON_KEY_CHARS.replace_all(&name.to_lowercase(), "").into_owned()
}

/// Resolves canonical names against one dataset's columns.
///
/// Normalized names are computed once per dataset; lookups return the first
/// column, in dataset order, whose normalized name matches.
#[derive(Debug)]
pub struct ColumnResolver<'a> {
    columns: Vec<(&'a str, String)>,
}

impl<'a> ColumnResolver<'a> {
    /// Creates a resolver over the given column names.
    pub fn new<I>(columns: I) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        Self {
            columns: columns
                .into_iter()
                .map(|c| (c.as_str(), normalize_key(c)))
                .collect(),
        }
    }

    /// Returns the actual column for `canonical`, or `None` when nothing
    /// matches.
    pub fn resolve(
        &self,
        canonical: &str,
        aliases: &ColumnAliasMap,
        synonyms: &SynonymTable,
    ) -> Option<&'a str> {
        if let Some(alias) = aliases.get(canonical) {
            if let Some(actual) = self.exact(alias).or_else(|| self.normalized(alias)) {
                debug!("Resolved '{}' to '{}' via alias", canonical, actual);
                return Some(actual);
            }
            debug!(
                "Alias '{}' for '{}' not found in dataset, falling back",
                alias, canonical
            );
        }

        if let Some(actual) = self.normalized(canonical) {
            debug!("Resolved '{}' to '{}'", canonical, actual);
            return Some(actual);
        }

        let found = synonyms
            .get(canonical)
            .iter()
            .find_map(|synonym| self.normalized(synonym));
        if let Some(actual) = found {
            debug!("Resolved '{}' to '{}' via synonym", canonical, actual);
        }
        found
    }

    fn exact(&self, name: &str) -> Option<&'a str> {
        self.columns
            .iter()
            .find(|(actual, _)| *actual == name)
            .map(|(actual, _)| *actual)
    }

    fn normalized(&self, name: &str) -> Option<&'a str> {
        let key = normalize_key(name);
        self.columns
            .iter()
            .find(|(_, normalized)| *normalized == key)
            .map(|(actual, _)| *actual)
    }
}

/// One-shot resolution of `canonical` against `dataset_columns`.
pub fn resolve_column(
    dataset_columns: &[String],
    canonical: &str,
    aliases: &ColumnAliasMap,
    synonyms: &SynonymTable,
) -> Option<String> {
    ColumnResolver::new(dataset_columns)
        .resolve(canonical, aliases, synonyms)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("Water Per Person"), "waterperperson");
        assert_eq!(normalize_key("water_per_person"), "water_per_person");
        assert_eq!(normalize_key("WATER-PER-PERSON"), "waterperperson");
        assert_eq!(normalize_key("Coverage (%)"), "coverage");
        assert_eq!(normalize_key("Población_2024"), "población_2024");
    }

    #[test]
    fn test_exact_normalized_match() {
        let cols = columns(&["Province", "Coverage_Percent"]);
        let resolved = resolve_column(
            &cols,
            "coverage_percent",
            &ColumnAliasMap::new(),
            &SynonymTable::builtin(),
        );
        assert_eq!(resolved.as_deref(), Some("Coverage_Percent"));
    }

    #[test]
    fn test_synonym_match() {
        let cols = columns(&["province", "water_per_person"]);
        let resolved = resolve_column(
            &cols,
            "water_liters_per_person_per_day",
            &ColumnAliasMap::new(),
            &SynonymTable::builtin(),
        );
        assert_eq!(resolved.as_deref(), Some("water_per_person"));
    }

    #[test]
    fn test_alias_beats_canonical_and_synonym() {
        let cols = columns(&["coverage", "coverage_percent", "cov_2024"]);
        let aliases = ColumnAliasMap::from([(
            "coverage_percent".to_string(),
            "COV_2024".to_string(),
        )]);
        let resolved =
            resolve_column(&cols, "coverage_percent", &aliases, &SynonymTable::builtin());
        assert_eq!(resolved.as_deref(), Some("cov_2024"));
    }

    #[test]
    fn test_missing_alias_target_falls_back() {
        let cols = columns(&["gender"]);
        let aliases = ColumnAliasMap::from([("sex".to_string(), "respondent_sex".to_string())]);
        let resolved = resolve_column(&cols, "sex", &aliases, &SynonymTable::builtin());
        assert_eq!(resolved.as_deref(), Some("gender"));
    }

    #[test]
    fn test_first_match_wins() {
        let cols = columns(&["IPC Phase", "ipc_phase"]);
        let resolver = ColumnResolver::new(&cols);
        // "IPC Phase" normalizes to "ipcphase", so only the second matches
        assert_eq!(
            resolver.resolve("ipc_phase", &ColumnAliasMap::new(), &SynonymTable::empty()),
            Some("ipc_phase")
        );

        let cols = columns(&["Sex", "SEX"]);
        let resolver = ColumnResolver::new(&cols);
        assert_eq!(
            resolver.resolve("sex", &ColumnAliasMap::new(), &SynonymTable::empty()),
            Some("Sex")
        );
    }

    #[test]
    fn test_unresolved() {
        let cols = columns(&["province"]);
        assert_eq!(
            resolve_column(
                &cols,
                "fcs",
                &ColumnAliasMap::new(),
                &SynonymTable::builtin()
            ),
            None
        );
    }
}
