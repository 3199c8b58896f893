//! Egress through a generic value tree
//!
//! Builds `{name, columns, points}` records from internal series so a generic
//! encoder (normally `serde_json`) can write them. Column layout:
//!
//! ```text
//! ["time", ("sequence_number",) field...]
//! ```
//!
//! `sequence_number` is included when the first point of the series carries
//! one; the decision holds for every row of that series, and rows without a
//! sequence number report `0`. A missing timestamp also reports `0`.
//!
//! No ordering is imposed across series; use [`sort_serialized_series`] when
//! a deterministic order is needed.

use crate::diagnostics::{Diagnostics, Serialized};
use chronowire_core::{
    ExternalSeries, ExternalValue, FieldValue, Point, Series, TimePrecision,
    SEQUENCE_NUMBER_COLUMN, TIME_COLUMN,
};
use serde::{Deserialize, Serialize};

/// A scalar cell of a serialized row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Signed integer (timestamps, Int64 fields)
    Int(i64),
    /// Unsigned integer (sequence numbers)
    UInt(u64),
    /// Finite float
    Float(f64),
    /// Boolean
    Bool(bool),
    /// String
    String(String),
    /// Null, absent, or unrepresentable value
    Null,
}

impl From<Scalar> for ExternalValue {
    fn from(s: Scalar) -> Self {
        match s {
            Scalar::Int(i) => ExternalValue::from(i),
            Scalar::UInt(u) => ExternalValue::from(u),
            Scalar::Float(f) => ExternalValue::from(f),
            Scalar::Bool(b) => ExternalValue::Bool(b),
            Scalar::String(s) => ExternalValue::String(s),
            Scalar::Null => ExternalValue::Null,
        }
    }
}

/// A series in the external row/column layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedSeries {
    /// Series name
    pub name: String,
    /// `time`, optionally `sequence_number`, then the fields
    pub columns: Vec<String>,
    /// Rows aligned with `columns`
    pub points: Vec<Vec<Scalar>>,
}

/// Allows a serialized response to be fed back through ingest.
impl From<SerializedSeries> for ExternalSeries {
    fn from(s: SerializedSeries) -> Self {
        ExternalSeries {
            name: s.name,
            columns: s.columns,
            points: s
                .points
                .into_iter()
                .map(|row| row.into_iter().map(ExternalValue::from).collect())
                .collect(),
        }
    }
}

/// Convert internal series to the external row layout
///
/// Non-finite floats become [`Scalar::Null`] and raise one warning each.
///
/// # Panics
///
/// Panics if a point does not have one value per field.
pub fn serialize_series<'a, I>(
    series: I,
    precision: TimePrecision,
) -> Serialized<Vec<SerializedSeries>>
where
    I: IntoIterator<Item = &'a Series>,
{
    let mut diag = Diagnostics::default();
    let out = series
        .into_iter()
        .map(|s| serialize_one(s, precision, &mut diag))
        .collect();
    diag.finish(out)
}

/// Order serialized series by name
pub fn sort_serialized_series(series: &mut [SerializedSeries]) {
    series.sort_by(|a, b| a.name.cmp(&b.name));
}

fn serialize_one(
    series: &Series,
    precision: TimePrecision,
    diag: &mut Diagnostics,
) -> SerializedSeries {
    let include_sequence_number = series.has_sequence_numbers();

    let mut columns = Vec::with_capacity(series.fields.len() + 2);
    columns.push(TIME_COLUMN.to_string());
    if include_sequence_number {
        columns.push(SEQUENCE_NUMBER_COLUMN.to_string());
    }
    columns.extend(series.fields.iter().cloned());

    let points = series
        .points
        .iter()
        .map(|point| serialize_row(series, point, precision, include_sequence_number, diag))
        .collect();

    SerializedSeries {
        name: series.name.clone(),
        columns,
        points,
    }
}

fn serialize_row(
    series: &Series,
    point: &Point,
    precision: TimePrecision,
    include_sequence_number: bool,
    diag: &mut Diagnostics,
) -> Vec<Scalar> {
    series.assert_point_shape(point);

    let mut row = Vec::with_capacity(point.values.len() + 2);
    row.push(Scalar::Int(external_timestamp(point, precision)));
    if include_sequence_number {
        row.push(Scalar::UInt(point.sequence_number.unwrap_or(0)));
    }

    for (field, value) in series.fields.iter().zip(&point.values) {
        let scalar = match value {
            None | Some(FieldValue::Null) => Scalar::Null,
            Some(v) if !v.is_representable() => {
                diag.non_finite(&series.name, field);
                Scalar::Null
            }
            Some(FieldValue::String(s)) => Scalar::String(s.clone()),
            Some(FieldValue::Int64(i)) => Scalar::Int(*i),
            Some(FieldValue::Double(f)) => Scalar::Float(*f),
            Some(FieldValue::Bool(b)) => Scalar::Bool(*b),
        };
        row.push(scalar);
    }
    row
}

/// Point timestamp in the requested precision; a missing timestamp is 0.
pub(crate) fn external_timestamp(point: &Point, precision: TimePrecision) -> i64 {
    point
        .timestamp
        .map_or(0, |micros| precision.from_micros(micros))
}
