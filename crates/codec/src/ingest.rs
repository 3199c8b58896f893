//! Ingest conversion: external rows to internal columnar series
//!
//! ## Rules
//!
//! - Column names must be unique
//! - Every row has exactly one value per column
//! - `time` must be numeric; it is scaled to microseconds by the precision
//! - `sequence_number` must be numeric; it is stored as `u64`
//! - Other numbers are stored as `Int64` when they are exact integers that
//!   fit, otherwise as `Double`
//!
//! The reserved columns may appear at any position and are dropped from the
//! resulting field list. Conversion of one series either fully succeeds or
//! returns an error without producing anything.

use chronowire_core::{
    first_duplicate, is_reserved_column, ApiSeries, ConversionError, ExternalValue, FieldValue,
    Point, Result, Series, TimePrecision, SEQUENCE_NUMBER_COLUMN, TIME_COLUMN,
};
use serde_json::Number;
use tracing::debug;

/// Convert one external series to an internal series
///
/// # Errors
///
/// - `DuplicateColumn` if a column name repeats
/// - `ShapeMismatch` if a row length differs from the column count
/// - `Type` if `time` or `sequence_number` holds a non-numeric value
/// - `InvalidNumber` if a number can be read neither as integer nor float
pub fn convert_to_internal<S>(series: &S, precision: TimePrecision) -> Result<Series>
where
    S: ApiSeries + ?Sized,
{
    let columns = series.columns();
    if let Some(column) = first_duplicate(columns) {
        return Err(ConversionError::DuplicateColumn {
            column: column.to_string(),
        });
    }

    let field_count = columns.iter().filter(|c| !is_reserved_column(c)).count();
    let mut points = Vec::with_capacity(series.points().len());

    for row in series.points() {
        if row.len() != columns.len() {
            return Err(ConversionError::ShapeMismatch {
                expected: columns.len(),
                actual: row.len(),
            });
        }

        let mut point = Point::new(Vec::with_capacity(field_count));
        for (column, value) in columns.iter().zip(row) {
            match column.as_str() {
                TIME_COLUMN => {
                    let raw = integer_timestamp(reserved_number(TIME_COLUMN, value)?);
                    point.timestamp = Some(precision.to_micros(raw));
                }
                SEQUENCE_NUMBER_COLUMN => {
                    let n = reserved_number(SEQUENCE_NUMBER_COLUMN, value)?;
                    point.sequence_number = Some(sequence_number(n));
                }
                _ => point.values.push(Some(field_value(column, value)?)),
            }
        }
        points.push(point);
    }

    let fields = columns
        .iter()
        .filter(|c| !is_reserved_column(c))
        .cloned()
        .collect();

    debug!(
        series = series.name(),
        points = points.len(),
        "converted external series"
    );

    Ok(Series {
        name: series.name().to_string(),
        fields,
        points,
    })
}

/// Convert a batch of external series
///
/// Each series converts independently; a failure in one does not affect the
/// others.
pub fn convert_batch<'a, S, I>(series: I, precision: TimePrecision) -> Vec<Result<Series>>
where
    S: ApiSeries + 'a,
    I: IntoIterator<Item = &'a S>,
{
    series
        .into_iter()
        .map(|s| convert_to_internal(s, precision))
        .collect()
}

fn reserved_number<'v>(column: &str, value: &'v ExternalValue) -> Result<&'v Number> {
    value
        .as_number()
        .ok_or_else(|| ConversionError::wrong_type(column, "number", describe(value)))
}

/// Integer part of a timestamp; fractional input is truncated toward zero.
fn integer_timestamp(n: &Number) -> i64 {
    n.as_i64()
        .unwrap_or_else(|| n.as_f64().map_or(0, |f| f as i64))
}

/// Sequence numbers are unsigned; negative input saturates to 0.
fn sequence_number(n: &Number) -> u64 {
    n.as_u64()
        .unwrap_or_else(|| n.as_f64().map_or(0, |f| f as u64))
}

fn field_value(column: &str, value: &ExternalValue) -> Result<FieldValue> {
    match value {
        ExternalValue::String(s) => Ok(FieldValue::String(s.clone())),
        ExternalValue::Number(n) => number_value(column, n),
        ExternalValue::Bool(b) => Ok(FieldValue::Bool(*b)),
        ExternalValue::Null => Ok(FieldValue::Null),
    }
}

fn number_value(column: &str, n: &Number) -> Result<FieldValue> {
    if let Some(i) = n.as_i64() {
        return Ok(FieldValue::Int64(i));
    }
    n.as_f64()
        .map(FieldValue::Double)
        .ok_or_else(|| ConversionError::InvalidNumber {
            column: column.to_string(),
            value: n.to_string(),
        })
}

fn describe(value: &ExternalValue) -> String {
    format!("{} ({})", value.type_name(), value)
}
