//! Series conversion for chronowire
//!
//! Two independent directions share the data model in `chronowire-core`:
//!
//! - **Ingest** ([`ingest`]): external row/column series → internal columnar [`Series`]
//! - **Egress** ([`rows`], [`fast`]): internal series → external layout, either as
//!   a value tree for a generic encoder or written directly as JSON bytes
//!
//! # Example
//!
//! ```
//! use chronowire_codec::{convert_to_internal, serialize_series_json};
//! use chronowire_core::{ExternalSeries, TimePrecision};
//!
//! let body = r#"{"name":"cpu","columns":["time","load"],"points":[[1400000000,0.5]]}"#;
//! let external: ExternalSeries = serde_json::from_str(body).unwrap();
//! let series = convert_to_internal(&external, TimePrecision::Second).unwrap();
//! assert_eq!(series.points[0].timestamp, Some(1_400_000_000_000_000));
//!
//! let out = serialize_series_json([&series], TimePrecision::Second, 1);
//! assert_eq!(
//!     String::from_utf8(out.output).unwrap(),
//!     r#"{"name":"cpu","columns":["time","load"],"points":[[1400000000,0.500000]]}"#
//! );
//! ```
//!
//! All functions are synchronous and pure apart from `tracing` events; they
//! share no state between calls.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod diagnostics;
pub mod fast;
pub mod ingest;
pub mod rows;
pub mod writer;

pub use chronowire_core::Series;
pub use diagnostics::{Serialized, Warning};
pub use fast::{serialize_series_json, serialize_series_json_with};
pub use ingest::{convert_batch, convert_to_internal};
pub use rows::{serialize_series, sort_serialized_series, Scalar, SerializedSeries};
pub use writer::JsonWriter;
