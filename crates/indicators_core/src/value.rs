//! Cell values for tabular indicator data.
//!
//! `DataValue` is shared by datasets, categorical rules (allowed values) and
//! violation records (offending values).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format accepted when casting string cells to dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single cell value.
///
/// Deserializes untagged, so `null`, `true`, `3`, `2.5` and `"male"` map to
/// the obvious variants. Dates serialize as ISO `YYYY-MM-DD` strings and are
/// never produced by deserialization; string cells are cast on demand with
/// [`DataValue::as_date`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    /// Null/missing value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
    /// Calendar date
    #[serde(skip_deserializing)]
    Date(NaiveDate),
}

impl DataValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            DataValue::Null => "null",
            DataValue::Bool(_) => "boolean",
            DataValue::Int(_) => "int64",
            DataValue::Float(_) => "float64",
            DataValue::String(_) => "string",
            DataValue::Date(_) => "date",
        }
    }

    /// Attempts to get this value as a string.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            DataValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Best-effort numeric cast.
    ///
    /// Integers, floats, booleans (as 1/0) and numeric strings cast; nulls,
    /// dates, NaN and non-numeric strings do not.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            DataValue::Int(i) => *i as f64,
            DataValue::Float(f) => *f,
            DataValue::Bool(b) => f64::from(u8::from(*b)),
            DataValue::String(s) => s.trim().parse::<f64>().ok()?,
            DataValue::Null | DataValue::Date(_) => return None,
        };
        (!n.is_nan()).then_some(n)
    }

    /// Best-effort date cast. Strings must be formatted as [`DATE_FORMAT`].
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            DataValue::Date(d) => Some(*d),
            DataValue::String(s) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok(),
            _ => None,
        }
    }
}

/// Raw-value equality used for categorical membership.
///
/// Integers and floats compare numerically; every other pairing requires the
/// same variant.
impl PartialEq for DataValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DataValue::Null, DataValue::Null) => true,
            (DataValue::Bool(a), DataValue::Bool(b)) => a == b,
            (DataValue::Int(a), DataValue::Int(b)) => a == b,
            (DataValue::Float(a), DataValue::Float(b)) => a == b,
            (DataValue::Int(a), DataValue::Float(b)) | (DataValue::Float(b), DataValue::Int(a)) => {
                (*a as f64) == *b
            }
            (DataValue::String(a), DataValue::String(b)) => a == b,
            (DataValue::Date(a), DataValue::Date(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Null => f.write_str("null"),
            DataValue::Bool(b) => write!(f, "{}", b),
            DataValue::Int(i) => write!(f, "{}", i),
            DataValue::Float(x) => write!(f, "{}", x),
            DataValue::String(s) => f.write_str(s),
            DataValue::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
        }
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::String(s)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::String(s.to_string())
    }
}

impl From<i64> for DataValue {
    fn from(i: i64) -> Self {
        DataValue::Int(i)
    }
}

impl From<i32> for DataValue {
    fn from(i: i32) -> Self {
        DataValue::Int(i64::from(i))
    }
}

impl From<f64> for DataValue {
    fn from(f: f64) -> Self {
        DataValue::Float(f)
    }
}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Bool(b)
    }
}

impl From<NaiveDate> for DataValue {
    fn from(d: NaiveDate) -> Self {
        DataValue::Date(d)
    }
}

impl<T: Into<DataValue>> From<Option<T>> for DataValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DataValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_cast() {
        assert_eq!(DataValue::Int(12).as_number(), Some(12.0));
        assert_eq!(DataValue::Float(0.5).as_number(), Some(0.5));
        assert_eq!(DataValue::Bool(true).as_number(), Some(1.0));
        assert_eq!(DataValue::from(" 18.5 ").as_number(), Some(18.5));
        assert_eq!(DataValue::from("n/a").as_number(), None);
        assert_eq!(DataValue::Float(f64::NAN).as_number(), None);
        assert_eq!(DataValue::Null.as_number(), None);
    }

    #[test]
    fn test_date_cast() {
        let expected = NaiveDate::from_ymd_opt(2023, 5, 10);
        assert_eq!(DataValue::from("2023-05-10").as_date(), expected);
        assert_eq!(DataValue::from("10/05/2023").as_date(), None);
        assert_eq!(DataValue::Int(20230510).as_date(), None);
    }

    #[test]
    fn test_cross_numeric_equality() {
        assert_eq!(DataValue::Int(3), DataValue::Float(3.0));
        assert_ne!(DataValue::Int(3), DataValue::from("3"));
        assert_ne!(DataValue::from("Male"), DataValue::from("male"));
        assert_eq!(DataValue::Null, DataValue::Null);
    }

    #[test]
    fn test_untagged_serde() {
        let values: Vec<DataValue> =
            serde_json::from_str(r#"[null, true, 3, 2.5, "female"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                DataValue::Null,
                DataValue::Bool(true),
                DataValue::Int(3),
                DataValue::Float(2.5),
                DataValue::from("female"),
            ]
        );
        assert!(matches!(values[2], DataValue::Int(_)));

        let date = DataValue::Date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(serde_json::to_string(&date).unwrap(), r#""2024-01-31""#);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(DataValue::from(None::<i64>), DataValue::Null);
        assert_eq!(DataValue::from(Some("Kabul")), DataValue::from("Kabul"));
    }
}
