//! Cell values with strict equality.
//!
//! Group membership is decided by comparing raw cell values, so the value
//! type pins down the comparison semantics: no numeric coercion, no
//! locale-aware text collation. `Int(3)` and `Float(3.0)` are different
//! values and break a group apart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell value, keyed by column id on each row.
///
/// Deserializes untagged, so a JSON record like
/// `{"boxCount": 3, "shippingMethod": "parcel"}` maps numbers to [`Int`]
/// (or [`Float`] when fractional) and strings to [`Text`].
///
/// [`Int`]: CellValue::Int
/// [`Float`]: CellValue::Float
/// [`Text`]: CellValue::Text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Absent or null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Text value.
    Text(String),
}

impl CellValue {
    /// Returns whether the value is null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the text content, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer content, if this is an integer value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for CellValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_equality_no_coercion() {
        assert_ne!(CellValue::Int(3), CellValue::Float(3.0));
        assert_ne!(CellValue::Text("3".into()), CellValue::Int(3));
        assert_ne!(CellValue::Bool(true), CellValue::Int(1));
        assert_eq!(CellValue::Int(3), CellValue::Int(3));
        assert_eq!(CellValue::Null, CellValue::Null);
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::Int(42).to_string(), "42");
        assert_eq!(CellValue::Text("parcel".into()).to_string(), "parcel");
        assert_eq!(CellValue::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(CellValue::from(3), CellValue::Int(3));
        assert_eq!(CellValue::from("x"), CellValue::Text("x".into()));
        assert_eq!(CellValue::from(true), CellValue::Bool(true));
    }

    #[test]
    fn test_deserialize_untagged() {
        let v: CellValue = serde_json::from_str("3").unwrap();
        assert_eq!(v, CellValue::Int(3));

        let v: CellValue = serde_json::from_str("3.5").unwrap();
        assert_eq!(v, CellValue::Float(3.5));

        let v: CellValue = serde_json::from_str("\"parcel\"").unwrap();
        assert_eq!(v, CellValue::Text("parcel".into()));

        let v: CellValue = serde_json::from_str("null").unwrap();
        assert_eq!(v, CellValue::Null);
    }

    #[test]
    fn test_accessors() {
        assert!(CellValue::Null.is_null());
        assert_eq!(CellValue::Int(7).as_int(), Some(7));
        assert_eq!(CellValue::Text("a".into()).as_text(), Some("a"));
        assert_eq!(CellValue::Int(7).as_text(), None);
    }
}
