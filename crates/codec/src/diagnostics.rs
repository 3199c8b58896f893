//! Non-fatal diagnostics raised during egress
//!
//! A read path must keep answering even when some stored values have no
//! external form. Those values degrade to `null`; each occurrence is logged
//! through `tracing` and returned to the caller alongside the output.

use std::fmt;
use tracing::warn;

/// A non-fatal condition found while serializing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A NaN or infinite float was written as `null`
    NonFiniteValue {
        /// Series the value belongs to
        series: String,
        /// Field the value belongs to
        field: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::NonFiniteValue { series, field } => {
                write!(f, "infinite or NaN value in {}.{}", series, field)
            }
        }
    }
}

/// Serializer output together with the warnings raised while producing it
#[derive(Debug, Clone, PartialEq)]
pub struct Serialized<T> {
    /// The serialized payload
    pub output: T,
    /// One entry per degraded value, in emission order
    pub warnings: Vec<Warning>,
}

impl<T> Serialized<T> {
    /// Whether any value was degraded
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Discard the warnings
    pub fn into_output(self) -> T {
        self.output
    }
}

/// Collects warnings for one serialization call
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub(crate) fn non_finite(&mut self, series: &str, field: &str) {
        warn!(series, field, "Infinite or NaN value encountered");
        self.warnings.push(Warning::NonFiniteValue {
            series: series.to_string(),
            field: field.to_string(),
        });
    }

    pub(crate) fn finish<T>(self, output: T) -> Serialized<T> {
        Serialized {
            output,
            warnings: self.warnings,
        }
    }
}
