//! Time precision of the external `time` column
//!
//! Internal timestamps are always microseconds since Unix epoch. Clients
//! choose the unit their `time` column is expressed in, and the same
//! precision must be used to read a series back out.
//!
//! ## Scale factors
//!
//! | Precision | Short form | Scale |
//! |-----------|------------|-------|
//! | Microsecond | `u` | ×1 |
//! | Millisecond | `ms` | ×1,000 |
//! | Second | `s` | ×1,000,000 |
//!
//! ```
//! use chronowire_core::TimePrecision;
//!
//! let p: TimePrecision = "ms".parse().unwrap();
//! assert_eq!(p.to_micros(1_000), 1_000_000);
//! assert_eq!(p.from_micros(1_999_999), 1_999);
//! ```

use crate::error::ConversionError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Unit of the external `time` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimePrecision {
    /// Microseconds, the native internal unit
    #[default]
    Microsecond,
    /// Milliseconds
    Millisecond,
    /// Seconds
    Second,
}

impl TimePrecision {
    /// Number of internal microseconds in one external unit
    #[inline]
    pub const fn scale(&self) -> i64 {
        match self {
            TimePrecision::Microsecond => 1,
            TimePrecision::Millisecond => 1_000,
            TimePrecision::Second => 1_000_000,
        }
    }

    /// Convert an external timestamp to internal microseconds
    ///
    /// Saturates at the `i64` bounds on overflow.
    #[inline]
    pub const fn to_micros(&self, external: i64) -> i64 {
        external.saturating_mul(self.scale())
    }

    /// Convert internal microseconds to an external timestamp (truncates)
    #[inline]
    pub const fn from_micros(&self, micros: i64) -> i64 {
        micros / self.scale()
    }

    /// Canonical short form, as accepted by [`FromStr`]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TimePrecision::Microsecond => "u",
            TimePrecision::Millisecond => "ms",
            TimePrecision::Second => "s",
        }
    }
}

impl fmt::Display for TimePrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimePrecision {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u" | "us" | "µs" | "micro" | "microsecond" | "microseconds" => {
                Ok(TimePrecision::Microsecond)
            }
            "m" | "ms" | "milli" | "millisecond" | "milliseconds" => {
                Ok(TimePrecision::Millisecond)
            }
            "s" | "sec" | "second" | "seconds" => Ok(TimePrecision::Second),
            _ => Err(ConversionError::InvalidPrecision {
                value: s.to_string(),
            }),
        }
    }
}

impl Serialize for TimePrecision {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TimePrecision {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_factors() {
        assert_eq!(TimePrecision::Microsecond.scale(), 1);
        assert_eq!(TimePrecision::Millisecond.scale(), 1_000);
        assert_eq!(TimePrecision::Second.scale(), 1_000_000);
    }

    #[test]
    fn test_default_is_microsecond() {
        assert_eq!(TimePrecision::default(), TimePrecision::Microsecond);
    }

    #[test]
    fn test_to_micros() {
        assert_eq!(TimePrecision::Microsecond.to_micros(42), 42);
        assert_eq!(TimePrecision::Millisecond.to_micros(1_000), 1_000_000);
        assert_eq!(TimePrecision::Second.to_micros(2), 2_000_000);
        assert_eq!(TimePrecision::Second.to_micros(-3), -3_000_000);
    }

    #[test]
    fn test_to_micros_saturates() {
        assert_eq!(TimePrecision::Second.to_micros(i64::MAX), i64::MAX);
        assert_eq!(TimePrecision::Millisecond.to_micros(i64::MIN), i64::MIN);
    }

    #[test]
    fn test_from_micros_truncates() {
        assert_eq!(TimePrecision::Microsecond.from_micros(1_234_567), 1_234_567);
        assert_eq!(TimePrecision::Millisecond.from_micros(1_234_567), 1_234);
        assert_eq!(TimePrecision::Second.from_micros(1_999_999), 1);
        // Integer division truncates toward zero
        assert_eq!(TimePrecision::Second.from_micros(-1_500_000), -1);
    }

    #[test]
    fn test_parse_short_forms() {
        assert_eq!("u".parse::<TimePrecision>().unwrap(), TimePrecision::Microsecond);
        assert_eq!("ms".parse::<TimePrecision>().unwrap(), TimePrecision::Millisecond);
        assert_eq!("m".parse::<TimePrecision>().unwrap(), TimePrecision::Millisecond);
        assert_eq!("s".parse::<TimePrecision>().unwrap(), TimePrecision::Second);
        assert_eq!(" Second ".parse::<TimePrecision>().unwrap(), TimePrecision::Second);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "h".parse::<TimePrecision>().unwrap_err();
        assert!(matches!(err, ConversionError::InvalidPrecision { ref value } if value == "h"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for p in [
            TimePrecision::Microsecond,
            TimePrecision::Millisecond,
            TimePrecision::Second,
        ] {
            assert_eq!(p.to_string().parse::<TimePrecision>().unwrap(), p);
        }
    }

    #[test]
    fn test_serde_uses_short_form() {
        let json = serde_json::to_string(&TimePrecision::Millisecond).unwrap();
        assert_eq!(json, "\"ms\"");
        let back: TimePrecision = serde_json::from_str("\"s\"").unwrap();
        assert_eq!(back, TimePrecision::Second);
        assert!(serde_json::from_str::<TimePrecision>("\"fortnight\"").is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn precision() -> impl Strategy<Value = TimePrecision> {
            prop_oneof![
                Just(TimePrecision::Microsecond),
                Just(TimePrecision::Millisecond),
                Just(TimePrecision::Second),
            ]
        }

        proptest! {
            #[test]
            fn scale_then_truncate_is_identity(
                p in precision(),
                t in -9_000_000_000_000i64..9_000_000_000_000i64,
            ) {
                prop_assert_eq!(p.from_micros(p.to_micros(t)), t);
            }

            #[test]
            fn from_micros_is_monotonic(p in precision(), a in any::<i64>(), b in any::<i64>()) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(p.from_micros(lo) <= p.from_micros(hi));
            }
        }
    }
}
