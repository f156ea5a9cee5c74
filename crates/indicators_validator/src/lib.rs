//! # Indicator Validator
//!
//! Validation engine for humanitarian indicator datasets. This crate checks an
//! already-loaded table against a standards bundle, including:
//!
//! - Column resolution (aliases, normalized names, synonyms)
//! - Numeric threshold rules and categorical membership rules
//! - Quality checks (mandatory fields, negative values, date ranges)
//! - Country code checks and per-group Valid/Invalid summaries
//! - Consistency checks (reached vs targeted)
//!
//! ## Example
//!
//! ```rust
//! use indicators_validator::{DataSet, IndicatorValidator};
//! use indicators_core::{Standard, ValidationContext};
//!
//! let dataset = DataSet::from_columns(vec![
//!     ("province", vec!["Kabul".into(), "Herat".into()]),
//!     ("water", vec![12.into(), 18.into()]),
//! ]);
//!
//! let context = ValidationContext::new()
//!     .with_alias("water_liters_per_person_per_day", "water");
//! let table = IndicatorValidator::new()
//!     .validate(&dataset, &Standard::Sphere, &context)
//!     .unwrap();
//!
//! for record in &table {
//!     println!("row {}: {} ({})", record.row_index, record.description, record.value);
//! }
//! ```

mod consistency;
mod country;
mod dataset;
mod dates;
mod engine;
mod error;
mod evaluator;
mod flags;
mod quality;
mod resolver;

pub use consistency::*;
pub use country::*;
pub use dataset::*;
pub use dates::*;
pub use engine::*;
pub use error::*;
pub use evaluator::*;
pub use flags::*;
pub use quality::*;
pub use resolver::*;

pub use indicators_core::DataValue;
