//! Non-finite values are logged through `tracing`
//!
//! The serializers return warnings to the caller and also emit one `warn`
//! event per degraded value. These tests install a capturing subscriber for
//! the duration of each call.

use std::io;
use std::sync::{Arc, Mutex};

use chronowire::{serialize_series, serialize_series_json, FieldValue, Point, Series, TimePrecision};
use tracing_subscriber::fmt::MakeWriter;

const MESSAGE: &str = "Infinite or NaN value encountered";

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, capture.contents())
}

fn series_with_nan() -> Series {
    Series::new(
        "cpu",
        vec!["load".to_string(), "temp".to_string()],
        vec![
            Point::new(vec![
                Some(FieldValue::Double(f64::NAN)),
                Some(FieldValue::Double(20.0)),
            ]),
            Point::new(vec![
                Some(FieldValue::Double(0.5)),
                Some(FieldValue::Double(f64::INFINITY)),
            ]),
        ],
    )
    .unwrap()
}

#[test]
fn test_rows_path_logs_each_non_finite_value() {
    let series = series_with_nan();
    let (out, logs) = with_captured_logs(|| serialize_series([&series], TimePrecision::Second));

    assert_eq!(out.warnings.len(), 2);
    assert_eq!(logs.matches(MESSAGE).count(), 2);
    assert!(logs.contains("WARN"));
    assert!(logs.contains("field=\"load\"") || logs.contains("field=load"));
}

#[test]
fn test_fast_path_logs_each_non_finite_value() {
    let series = series_with_nan();
    let (out, logs) =
        with_captured_logs(|| serialize_series_json([&series], TimePrecision::Second, 1));

    assert_eq!(out.warnings.len(), 2);
    assert_eq!(logs.matches(MESSAGE).count(), 2);
}

#[test]
fn test_finite_values_log_nothing_at_warn() {
    let series = Series::new(
        "cpu",
        vec!["load".to_string()],
        vec![Point::new(vec![Some(FieldValue::Double(1.5))])],
    )
    .unwrap();
    let (out, logs) =
        with_captured_logs(|| serialize_series_json([&series], TimePrecision::Second, 0));

    assert!(out.warnings.is_empty());
    assert!(!logs.contains("WARN"));
}
