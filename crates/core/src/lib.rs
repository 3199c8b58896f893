//! Core types for chronowire
//!
//! This crate defines the data model shared by ingest and egress:
//! - ExternalValue / ExternalSeries / ApiSeries: row/column series as API clients see it
//! - Series / Point / FieldValue: internal columnar series exchanged with storage
//! - TimePrecision: unit of the external `time` column
//! - ConversionError: error taxonomy for ingest
//! - CodecConfig: runtime parameters for egress

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod external;
pub mod precision;
pub mod series;

pub use config::{CodecConfig, DEFAULT_JSON_BUFFER_CAPACITY};
pub use error::{ConversionError, Result};
pub use external::{ApiSeries, ExternalSeries, ExternalValue};
pub use precision::TimePrecision;
pub use series::{
    first_duplicate, is_reserved_column, FieldValue, Point, Series, SEQUENCE_NUMBER_COLUMN,
    TIME_COLUMN,
};
