//! Internal columnar series
//!
//! The unit exchanged with the storage and replication layer: a field list
//! with the reserved columns removed, and typed points aligned with it.
//!
//! ## Invariants
//!
//! - Every point has exactly `fields.len()` values
//! - Field names are unique
//! - Timestamps are microseconds since Unix epoch
//!
//! [`Series::new`] enforces the first two. Serializers treat a violation as a
//! contract breach and panic via [`Series::assert_point_shape`].

use crate::error::{ConversionError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Reserved column holding the point timestamp
pub const TIME_COLUMN: &str = "time";

/// Reserved column holding the point sequence number
pub const SEQUENCE_NUMBER_COLUMN: &str = "sequence_number";

/// Check whether a column name is reserved
#[inline]
pub fn is_reserved_column(name: &str) -> bool {
    name == TIME_COLUMN || name == SEQUENCE_NUMBER_COLUMN
}

/// A typed field value
///
/// Exactly one variant is set at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// UTF-8 string
    String(String),
    /// 64-bit signed integer
    Int64(i64),
    /// 64-bit float (IEEE-754)
    Double(f64),
    /// Boolean
    Bool(bool),
    /// Explicit null
    Null,
}

impl FieldValue {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::String(_) => "String",
            FieldValue::Int64(_) => "Int64",
            FieldValue::Double(_) => "Double",
            FieldValue::Bool(_) => "Bool",
            FieldValue::Null => "Null",
        }
    }

    /// Whether the value has an external representation
    ///
    /// Only NaN and infinite doubles do not.
    pub fn is_representable(&self) -> bool {
        match self {
            FieldValue::Double(f) => f.is_finite(),
            _ => true,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int64(i)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Double(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// A single point of an internal series
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Microseconds since epoch
    pub timestamp: Option<i64>,
    /// Orders points that share a timestamp
    pub sequence_number: Option<u64>,
    /// Values aligned with the series fields; `None` is an absent value
    pub values: Vec<Option<FieldValue>>,
}

impl Point {
    /// Create a point with the given values and no timestamp or sequence number
    pub fn new(values: Vec<Option<FieldValue>>) -> Self {
        Point {
            timestamp: None,
            sequence_number: None,
            values,
        }
    }

    /// Set the timestamp (microseconds)
    pub fn with_timestamp(mut self, micros: i64) -> Self {
        self.timestamp = Some(micros);
        self
    }

    /// Set the sequence number
    pub fn with_sequence_number(mut self, sequence_number: u64) -> Self {
        self.sequence_number = Some(sequence_number);
        self
    }
}

/// A named columnar series
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    /// Series name
    pub name: String,
    /// Field names, without `time` and `sequence_number`
    pub fields: Vec<String>,
    /// Points, each aligned with `fields`
    pub points: Vec<Point>,
}

impl Series {
    /// Create a series, validating field uniqueness and point shapes
    pub fn new(name: impl Into<String>, fields: Vec<String>, points: Vec<Point>) -> Result<Self> {
        if let Some(column) = first_duplicate(&fields) {
            return Err(ConversionError::DuplicateColumn {
                column: column.to_string(),
            });
        }
        let series = Series {
            name: name.into(),
            fields,
            points,
        };
        series.check_shape()?;
        Ok(series)
    }

    /// Verify every point has one value per field
    pub fn check_shape(&self) -> Result<()> {
        for point in &self.points {
            if point.values.len() != self.fields.len() {
                return Err(ConversionError::ShapeMismatch {
                    expected: self.fields.len(),
                    actual: point.values.len(),
                });
            }
        }
        Ok(())
    }

    /// Panic if `point` does not have one value per field
    ///
    /// The shape is guaranteed by construction, so a mismatch here is a bug
    /// upstream rather than bad client input.
    #[track_caller]
    pub fn assert_point_shape(&self, point: &Point) {
        assert_eq!(
            point.values.len(),
            self.fields.len(),
            "series {:?}: point has {} values for {} fields",
            self.name,
            point.values.len(),
            self.fields.len()
        );
    }

    /// Whether the `sequence_number` column is emitted for this series
    ///
    /// Decided once from the first point. A series with no points reports `true`.
    pub fn has_sequence_numbers(&self) -> bool {
        self.points
            .first()
            .map_or(true, |p| p.sequence_number.is_some())
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the series has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Return the first name that appears twice, if any
pub fn first_duplicate<S: AsRef<str>>(names: &[S]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(names.len());
    names
        .iter()
        .map(|name| name.as_ref())
        .find(|name| !seen.insert(*name))
}
