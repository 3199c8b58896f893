//! Codec configuration
//!
//! Runtime parameters for series egress. Loading and validating the
//! surrounding server configuration happens elsewhere; this struct is the
//! plain-value slice the codec consumes.

use crate::precision::TimePrecision;
use serde::{Deserialize, Serialize};

/// Default initial capacity of the fast-path JSON buffer (128 KiB)
pub const DEFAULT_JSON_BUFFER_CAPACITY: usize = 128 * 1024;

/// Parameters for serializing series into responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Unit of the `time` column (default: microseconds)
    pub precision: TimePrecision,

    /// Maximum number of series per response; 0 means unlimited.
    /// A value of 1 also drops the surrounding JSON array.
    pub max_series: u64,

    /// Initial capacity of the fast-path output buffer in bytes
    pub json_buffer_capacity: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            precision: TimePrecision::Microsecond,
            max_series: 0,
            json_buffer_capacity: DEFAULT_JSON_BUFFER_CAPACITY,
        }
    }
}

impl CodecConfig {
    /// Set the time precision
    pub fn with_precision(mut self, precision: TimePrecision) -> Self {
        self.precision = precision;
        self
    }

    /// Set the series cap
    pub fn with_max_series(mut self, max_series: u64) -> Self {
        self.max_series = max_series;
        self
    }

    /// Set the initial output buffer capacity
    pub fn with_buffer_capacity(mut self, bytes: usize) -> Self {
        self.json_buffer_capacity = bytes;
        self
    }

    /// Whether the caller declared exactly one series
    #[inline]
    pub fn single_series(&self) -> bool {
        self.max_series == 1
    }

    /// Whether `written` series already reach the cap
    #[inline]
    pub fn series_cap_reached(&self, written: u64) -> bool {
        self.max_series > 0 && written >= self.max_series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CodecConfig::default();
        assert_eq!(config.precision, TimePrecision::Microsecond);
        assert_eq!(config.max_series, 0);
        assert_eq!(config.json_buffer_capacity, 128 * 1024);
        assert!(!config.single_series());
    }

    #[test]
    fn test_builders() {
        let config = CodecConfig::default()
            .with_precision(TimePrecision::Second)
            .with_max_series(1)
            .with_buffer_capacity(64);
        assert_eq!(config.precision, TimePrecision::Second);
        assert!(config.single_series());
        assert_eq!(config.json_buffer_capacity, 64);
    }

    #[test]
    fn test_series_cap() {
        let unlimited = CodecConfig::default();
        assert!(!unlimited.series_cap_reached(u64::MAX));

        let capped = CodecConfig::default().with_max_series(2);
        assert!(!capped.series_cap_reached(1));
        assert!(capped.series_cap_reached(2));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: CodecConfig =
            serde_json::from_str(r#"{"precision":"ms","max_series":10}"#).unwrap();
        assert_eq!(config.precision, TimePrecision::Millisecond);
        assert_eq!(config.max_series, 10);
        assert_eq!(config.json_buffer_capacity, DEFAULT_JSON_BUFFER_CAPACITY);
    }
}
