//! # Indicators Core
//!
//! Core data structures for validating humanitarian indicator datasets.
//!
//! This crate holds the declarative side of validation: the rules a dataset is
//! checked against and the records produced when a row breaks one.
//!
//! ## Key Concepts
//!
//! - **Standard**: a named bundle of rules (`Sphere`, `Ipc`) or a custom one
//! - **Rule**: a flat, row-scoped predicate, either numeric (operator +
//!   threshold) or categorical (allowed values)
//! - **Canonical column**: the indicator name used inside a rule, resolved
//!   against real dataset columns through aliases and synonyms
//! - **Violation record**: one rule failing for one dataset row
//!
//! ## Example
//!
//! ```rust
//! use indicators_core::{Comparison, Operator, Standard};
//!
//! let sphere = Standard::Sphere.config();
//! let water = &sphere.numeric[0];
//!
//! let comparison = water.comparison().expect("built-in rules are well-formed");
//! assert_eq!(comparison, Comparison::Single(Operator::Ge, 15.0));
//! assert!(comparison.is_violated(12.0));
//! assert_eq!(comparison.label(), "< 15");
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod report;
pub mod rules;
pub mod standards;
pub mod synonyms;
pub mod value;

pub use builder::*;
pub use context::*;
pub use error::*;
pub use report::*;
pub use rules::*;
pub use standards::*;
pub use synonyms::*;
pub use value::*;
