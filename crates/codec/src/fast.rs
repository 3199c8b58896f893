//! Egress straight to JSON bytes
//!
//! Produces the same layout as [`crate::rows`] without building a value tree:
//!
//! ```text
//! [{"name":"cpu","columns":["time","v"],"points":[[1,0.500000],...]},...]
//! ```
//!
//! - Floats use fixed notation with six decimals
//! - Strings are quoted but not escaped (see [`JsonWriter::string`])
//! - Null, absent, and non-finite values are written as `null`; non-finite
//!   values also raise a warning
//! - When the caller declares exactly one series (`max_series == 1`) the
//!   surrounding array is omitted
//! - `max_series == 0` means no cap; otherwise at most `max_series` series are
//!   written

use crate::diagnostics::{Diagnostics, Serialized};
use crate::rows::external_timestamp;
use crate::writer::JsonWriter;
use chronowire_core::{CodecConfig, FieldValue, Point, Series, TimePrecision};
use tracing::trace;

/// Serialize series to JSON bytes
///
/// # Panics
///
/// Panics if a point does not have one value per field.
pub fn serialize_series_json<'a, I>(
    series: I,
    precision: TimePrecision,
    max_series: u64,
) -> Serialized<Vec<u8>>
where
    I: IntoIterator<Item = &'a Series>,
{
    let config = CodecConfig::default()
        .with_precision(precision)
        .with_max_series(max_series);
    serialize_series_json_with(&config, series)
}

/// Serialize series to JSON bytes using an explicit configuration
///
/// # Panics
///
/// Panics if a point does not have one value per field.
pub fn serialize_series_json_with<'a, I>(config: &CodecConfig, series: I) -> Serialized<Vec<u8>>
where
    I: IntoIterator<Item = &'a Series>,
{
    let mut w = JsonWriter::with_capacity(config.json_buffer_capacity);
    let mut diag = Diagnostics::default();
    let wrap = !config.single_series();

    if wrap {
        w.punct(b'[');
    }

    let mut first = true;
    let mut written = 0u64;
    for s in series {
        if config.series_cap_reached(written) {
            break;
        }
        w.separator(&mut first);
        write_series(&mut w, s, config.precision, &mut diag);
        written += 1;
    }

    if wrap {
        w.punct(b']');
    }

    trace!(series = written, bytes = w.len(), "serialized series json");
    diag.finish(w.into_bytes())
}

fn write_series(
    w: &mut JsonWriter,
    series: &Series,
    precision: TimePrecision,
    diag: &mut Diagnostics,
) {
    let include_sequence_number = series.has_sequence_numbers();

    w.raw("{\"name\":");
    w.string(&series.name);
    w.raw(",\"columns\":[\"time\"");
    if include_sequence_number {
        w.raw(",\"sequence_number\"");
    }
    for field in &series.fields {
        w.punct(b',');
        w.string(field);
    }
    w.raw("],\"points\":[");

    let mut first = true;
    for point in &series.points {
        w.separator(&mut first);
        write_point(w, series, point, precision, include_sequence_number, diag);
    }
    w.raw("]}");
}

fn write_point(
    w: &mut JsonWriter,
    series: &Series,
    point: &Point,
    precision: TimePrecision,
    include_sequence_number: bool,
    diag: &mut Diagnostics,
) {
    series.assert_point_shape(point);

    w.punct(b'[');
    w.int(external_timestamp(point, precision));
    if include_sequence_number {
        w.punct(b',');
        w.uint(point.sequence_number.unwrap_or(0));
    }

    for (field, value) in series.fields.iter().zip(&point.values) {
        w.punct(b',');
        match value {
            None | Some(FieldValue::Null) => w.null(),
            Some(FieldValue::Double(f)) if !f.is_finite() => {
                w.null();
                diag.non_finite(&series.name, field);
            }
            Some(FieldValue::Double(f)) => w.float(*f),
            Some(FieldValue::Int64(i)) => w.int(*i),
            Some(FieldValue::String(s)) => w.string(s),
            Some(FieldValue::Bool(b)) => w.bool(*b),
        }
    }
    w.punct(b']');
}
