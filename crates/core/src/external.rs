//! External (row/column) series representation
//!
//! This is the shape API clients submit and receive:
//!
//! ```text
//! {"name": "cpu", "columns": ["time", "value"], "points": [[1400000000, 0.5]]}
//! ```
//!
//! Values are a closed sum type. Numbers keep the decoded
//! [`serde_json::Number`] so the converter can still tell `3` from `3.0`
//! when choosing between integer and float storage.

use crate::error::ConversionError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;
use std::fmt;

/// A single value in an external row
#[derive(Debug, Clone, PartialEq)]
pub enum ExternalValue {
    /// JSON `null`
    Null,
    /// JSON boolean
    Bool(bool),
    /// JSON number, integer/float distinction preserved
    Number(Number),
    /// JSON string
    String(String),
}

impl ExternalValue {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            ExternalValue::Null => "Null",
            ExternalValue::Bool(_) => "Bool",
            ExternalValue::Number(_) => "Number",
            ExternalValue::String(_) => "String",
        }
    }

    /// Get the number if this is a Number value
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            ExternalValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, ExternalValue::Null)
    }
}

impl fmt::Display for ExternalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExternalValue::Null => f.write_str("null"),
            ExternalValue::Bool(b) => write!(f, "{}", b),
            ExternalValue::Number(n) => write!(f, "{}", n),
            ExternalValue::String(s) => write!(f, "{:?}", s),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl TryFrom<serde_json::Value> for ExternalValue {
    type Error = ConversionError;

    fn try_from(v: serde_json::Value) -> Result<Self, Self::Error> {
        match v {
            serde_json::Value::Null => Ok(ExternalValue::Null),
            serde_json::Value::Bool(b) => Ok(ExternalValue::Bool(b)),
            serde_json::Value::Number(n) => Ok(ExternalValue::Number(n)),
            serde_json::Value::String(s) => Ok(ExternalValue::String(s)),
            other @ serde_json::Value::Array(_) => Err(ConversionError::UnsupportedType {
                type_name: "Array",
                value: other.to_string(),
            }),
            other @ serde_json::Value::Object(_) => Err(ConversionError::UnsupportedType {
                type_name: "Object",
                value: other.to_string(),
            }),
        }
    }
}

impl From<ExternalValue> for serde_json::Value {
    fn from(v: ExternalValue) -> Self {
        match v {
            ExternalValue::Null => serde_json::Value::Null,
            ExternalValue::Bool(b) => serde_json::Value::Bool(b),
            ExternalValue::Number(n) => serde_json::Value::Number(n),
            ExternalValue::String(s) => serde_json::Value::String(s),
        }
    }
}

impl From<&str> for ExternalValue {
    fn from(s: &str) -> Self {
        ExternalValue::String(s.to_string())
    }
}

impl From<String> for ExternalValue {
    fn from(s: String) -> Self {
        ExternalValue::String(s)
    }
}

impl From<bool> for ExternalValue {
    fn from(b: bool) -> Self {
        ExternalValue::Bool(b)
    }
}

impl From<i64> for ExternalValue {
    fn from(i: i64) -> Self {
        ExternalValue::Number(i.into())
    }
}

impl From<u64> for ExternalValue {
    fn from(u: u64) -> Self {
        ExternalValue::Number(u.into())
    }
}

/// Non-finite floats have no JSON form and become `Null`.
impl From<f64> for ExternalValue {
    fn from(f: f64) -> Self {
        Number::from_f64(f)
            .map(ExternalValue::Number)
            .unwrap_or(ExternalValue::Null)
    }
}

impl From<()> for ExternalValue {
    fn from(_: ()) -> Self {
        ExternalValue::Null
    }
}

impl Serialize for ExternalValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ExternalValue::Null => serializer.serialize_unit(),
            ExternalValue::Bool(b) => serializer.serialize_bool(*b),
            ExternalValue::Number(n) => n.serialize(serializer),
            ExternalValue::String(s) => serializer.serialize_str(s),
        }
    }
}

/// Arrays and objects are rejected with [`ConversionError::UnsupportedType`].
impl<'de> Deserialize<'de> for ExternalValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json_value = serde_json::Value::deserialize(deserializer)?;
        ExternalValue::try_from(json_value).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Series
// ============================================================================

/// Anything that exposes a named series as ordered columns and rows
///
/// The HTTP layer may hand over its own request types; the converter only
/// needs these three accessors.
pub trait ApiSeries {
    /// Series name
    fn name(&self) -> &str;
    /// Ordered column names
    fn columns(&self) -> &[String];
    /// Rows, each aligned positionally with `columns`
    fn points(&self) -> &[Vec<ExternalValue>];
}

/// Owned external series, as decoded from a JSON request body
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExternalSeries {
    /// Series name
    pub name: String,
    /// Ordered column names
    pub columns: Vec<String>,
    /// Rows of values
    #[serde(default)]
    pub points: Vec<Vec<ExternalValue>>,
}

impl ExternalSeries {
    /// Create a series with the given columns and no rows
    pub fn new(name: impl Into<String>, columns: &[&str]) -> Self {
        ExternalSeries {
            name: name.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            points: Vec::new(),
        }
    }

    /// Append a row
    pub fn with_row(mut self, row: Vec<ExternalValue>) -> Self {
        self.points.push(row);
        self
    }
}

impl ApiSeries for ExternalSeries {
    fn name(&self) -> &str {
        &self.name
    }

    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn points(&self) -> &[Vec<ExternalValue>] {
        &self.points
    }
}
