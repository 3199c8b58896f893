//! Chronowire - series payload interchange for a time-series store
//!
//! Converts between the row/column series API clients submit and read, and
//! the columnar series exchanged with storage and replication.
//!
//! # Quick Start
//!
//! ```
//! use chronowire::{convert_to_internal, serialize_series_json, ExternalSeries, TimePrecision};
//!
//! let body = r#"{"name":"cpu","columns":["time","load"],"points":[[1000,0.5]]}"#;
//! let external: ExternalSeries = serde_json::from_str(body).unwrap();
//! let series = convert_to_internal(&external, TimePrecision::Millisecond).unwrap();
//!
//! let out = serialize_series_json([&series], TimePrecision::Millisecond, 0);
//! assert!(out.warnings.is_empty());
//! ```
//!
//! # Architecture
//!
//! - `chronowire-core`: data model, precision, errors, configuration
//! - `chronowire-codec`: ingest conversion and both egress paths

pub use chronowire_codec::*;
pub use chronowire_core::{
    ApiSeries, CodecConfig, ConversionError, ExternalSeries, ExternalValue, FieldValue, Point,
    Result, TimePrecision,
};
