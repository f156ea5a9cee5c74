//! Parser for custom indicator standards (YAML/TOML/JSON formats).
//!
//! This module loads caller-supplied standards bundles into the strongly-typed
//! `StandardsConfig` structure, so they can be validated against exactly like
//! the built-in Sphere and IPC bundles.
//!
//! # Example
//!
//! ```rust
//! use indicators_parser::parse_yaml;
//!
//! let yaml = r#"
//! numeric:
//!   - column: water_liters_per_person_per_day
//!     op: ">="
//!     threshold: 20
//!     description: Stricter camp water target
//! categorical:
//!   - column: shelter_type
//!     allowed: [tent, transitional, host_family]
//! "#;
//!
//! let config = parse_yaml(yaml).expect("Failed to parse standards");
//! assert_eq!(config.len(), 2);
//! ```

use indicators_core::StandardsConfig;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while parsing a standards bundle.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported standards file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Parse a standards bundle from a YAML string.
///
/// Unknown operators are rejected here; threshold shapes are only checked
/// by [`StandardsConfig::check`] or at validation time.
pub fn parse_yaml(content: &str) -> Result<StandardsConfig> {
    let config: StandardsConfig = serde_yaml_ng::from_str(content)?;
    Ok(config)
}

/// Parse a standards bundle from a TOML string.
///
/// # Example
///
/// ```rust
/// use indicators_parser::parse_toml;
///
/// let toml = r#"
/// [[numeric]]
/// column = "coverage_percent"
/// op = "between_inclusive"
/// threshold = [0, 100]
/// "#;
///
/// let config = parse_toml(toml).unwrap();
/// assert_eq!(config.numeric[0].column, "coverage_percent");
/// assert!(config.categorical.is_empty());
/// ```
pub fn parse_toml(content: &str) -> Result<StandardsConfig> {
    let config: StandardsConfig =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(config)
}

/// Parse a standards bundle from a JSON string.
pub fn parse_json(content: &str) -> Result<StandardsConfig> {
    let config: StandardsConfig = serde_json::from_str(content)?;
    Ok(config)
}

/// Parse a standards bundle from a string in the given format.
pub fn parse_str(content: &str, format: RulesFormat) -> Result<StandardsConfig> {
    match format {
        RulesFormat::Yaml => parse_yaml(content),
        RulesFormat::Toml => parse_toml(content),
        RulesFormat::Json => parse_json(content),
    }
}

/// Detect the standards format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `RulesFormat::Yaml`
/// * `.toml` → `RulesFormat::Toml`
/// * `.json` → `RulesFormat::Json`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<RulesFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(RulesFormat::Yaml),
        "toml" => Ok(RulesFormat::Toml),
        "json" => Ok(RulesFormat::Json),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a standards bundle from a file with automatic format detection.
///
/// # Example
///
/// ```no_run
/// use indicators_parser::parse_file;
/// use std::path::Path;
///
/// let config = parse_file(Path::new("standards/camp_wash.yml")).unwrap();
/// println!("Loaded {} rule(s)", config.len());
/// ```
pub fn parse_file(path: &Path) -> Result<StandardsConfig> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_str(&content, format)
}
