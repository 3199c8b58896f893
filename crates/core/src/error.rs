//! Error types for series conversion
//!
//! Every variant is deterministic and caller-visible. A failed conversion
//! aborts only the series that triggered it; no partial series is produced.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Errors raised while converting external series payloads
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The same column name appears more than once
    #[error("duplicate column name: {column}")]
    DuplicateColumn {
        /// The repeated column name
        column: String,
    },

    /// A row does not have one value per column
    #[error("shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch {
        /// Number of columns
        expected: usize,
        /// Number of values in the offending row
        actual: usize,
    },

    /// A reserved column holds a value of the wrong type
    #[error("{column} field must be {expected} but is {actual}")]
    Type {
        /// Reserved column name (`time` or `sequence_number`)
        column: String,
        /// Expected type
        expected: &'static str,
        /// Type found in the payload
        actual: String,
    },

    /// A value has no mapping to the internal scalar union
    #[error("unsupported type {type_name} ({value})")]
    UnsupportedType {
        /// Dynamic type of the value
        type_name: &'static str,
        /// Rendered value, for diagnostics
        value: String,
    },

    /// A number could be read neither as an integer nor as a float
    #[error("invalid number in column {column}: {value}")]
    InvalidNumber {
        /// Column holding the number
        column: String,
        /// Textual form of the number
        value: String,
    },

    /// Unknown time precision name
    #[error("invalid time precision: {value}")]
    InvalidPrecision {
        /// Text that failed to parse
        value: String,
    },
}

impl ConversionError {
    /// Create a `Type` error for a reserved column
    pub fn wrong_type(
        column: impl Into<String>,
        expected: &'static str,
        actual: impl Into<String>,
    ) -> Self {
        ConversionError::Type {
            column: column.into(),
            expected,
            actual: actual.into(),
        }
    }
}
