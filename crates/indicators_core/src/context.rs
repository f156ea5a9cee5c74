//! Per-run validation settings.

use crate::{ColumnAliasMap, SynonymTable};

/// Context for validation runs.
///
/// Carries the dataset-specific column aliases and the synonym table used
/// for column resolution.
///
/// # Example
///
/// ```rust
/// use indicators_core::ValidationContext;
///
/// let context = ValidationContext::new()
///     .with_alias("coverage_percent", "Coverage (%)")
///     .with_alias("sex", "respondent_sex");
///
/// assert_eq!(context.column_aliases.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    /// Explicit canonical-to-actual column overrides
    pub column_aliases: ColumnAliasMap,

    /// Synonym fallback table (built-in by default)
    pub synonyms: SynonymTable,
}

impl ValidationContext {
    /// Creates a context with no aliases and the built-in synonyms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single column alias.
    pub fn with_alias(mut self, canonical: impl Into<String>, actual: impl Into<String>) -> Self {
        self.column_aliases.insert(canonical.into(), actual.into());
        self
    }

    /// Adds every alias in `aliases`, replacing existing entries.
    pub fn with_aliases(mut self, aliases: ColumnAliasMap) -> Self {
        self.column_aliases.extend(aliases);
        self
    }

    /// Replaces the synonym table.
    pub fn with_synonyms(mut self, synonyms: SynonymTable) -> Self {
        self.synonyms = synonyms;
        self
    }
}
