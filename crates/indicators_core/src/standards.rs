//! Standards registry.
//!
//! Built-in bundles are compiled-in constants; custom bundles are passed
//! through untouched.

use crate::{CategoricalRule, NumericRule, Operator, RuleError, StandardsConfig};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Selects the rule bundle a validation run applies.
///
/// # Example
///
/// ```rust
/// use indicators_core::Standard;
///
/// let sphere = Standard::from_name("Sphere");
/// assert_eq!(sphere, Standard::Sphere);
/// assert_eq!(sphere.config().numeric.len(), 3);
///
/// // Unknown names resolve to an empty bundle rather than failing.
/// assert!(Standard::from_name("who").config().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Standard {
    /// Sphere minimum humanitarian standards
    Sphere,
    /// IPC food-security phase classification
    Ipc,
    /// Caller-supplied bundle
    Custom(StandardsConfig),
}

impl Standard {
    /// Names of the built-in standards.
    pub const BUILTIN_NAMES: [&'static str; 2] = ["sphere", "ipc"];

    /// Looks up a standard by name, case-insensitively.
    ///
    /// Unrecognized names yield an empty custom bundle so that validation
    /// reports no violations instead of failing.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!("Unknown standard '{}', no rules will be applied", name);
            Standard::Custom(StandardsConfig::default())
        })
    }

    /// Returns the rule bundle for this standard.
    pub fn config(&self) -> StandardsConfig {
        match self {
            Standard::Sphere => sphere(),
            Standard::Ipc => ipc(),
            Standard::Custom(config) => config.clone(),
        }
    }

    /// Returns the registry name, or `"custom"`.
    pub fn name(&self) -> &'static str {
        match self {
            Standard::Sphere => "sphere",
            Standard::Ipc => "ipc",
            Standard::Custom(_) => "custom",
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strict lookup: only built-in names parse.
impl FromStr for Standard {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sphere" => Ok(Standard::Sphere),
            "ipc" => Ok(Standard::Ipc),
            _ => Err(RuleError::UnknownStandard(s.to_string())),
        }
    }
}

impl From<&str> for Standard {
    fn from(name: &str) -> Self {
        Standard::from_name(name)
    }
}

impl From<StandardsConfig> for Standard {
    fn from(config: StandardsConfig) -> Self {
        Standard::Custom(config)
    }
}

/// Returns the bundle registered under `name`, or an empty bundle.
pub fn get_standard(name: &str) -> StandardsConfig {
    Standard::from_name(name).config()
}

fn coverage_rule() -> NumericRule {
    NumericRule::new("coverage_percent", Operator::BetweenInclusive, (0.0, 100.0))
        .with_description("Coverage should be between 0% and 100%")
}

fn sphere() -> StandardsConfig {
    StandardsConfig {
        numeric: vec![
            NumericRule::new("water_liters_per_person_per_day", Operator::Ge, 15.0)
                .with_description("Sphere: min 15L of safe water per person per day"),
            coverage_rule(),
            NumericRule::new("cmr_per_10k_per_day", Operator::Le, 1.0)
                .with_description("Sphere emergency threshold: CMR <= 1/10,000/day"),
        ],
        categorical: vec![
            CategoricalRule::new("sex", ["male", "female"])
                .with_description("Standardized sex categories"),
        ],
    }
}

fn ipc() -> StandardsConfig {
    StandardsConfig {
        numeric: vec![
            // Food Consumption Score, typical range 0-112
            NumericRule::new("fcs", Operator::BetweenInclusive, (0.0, 112.0))
                .with_description("FCS should be within [0, 112]"),
            coverage_rule(),
        ],
        categorical: vec![
            CategoricalRule::new("ipc_phase", [1, 2, 3, 4, 5])
                .with_description("IPC phase must be 1-5"),
        ],
    }
}
