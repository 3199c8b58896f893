//! Append-only JSON byte writer
//!
//! Low-level building block of the fast egress path. Punctuation is written
//! literally and scalars are formatted in place, without an intermediate
//! value tree.
//!
//! # String precondition
//!
//! [`JsonWriter::string`] quotes its input but does NOT escape it. Series
//! names, field names, and string values must not contain `"`, `\`, or
//! control characters, otherwise the output is not valid JSON. This keeps
//! the output byte-compatible with existing clients of the fast path.

use std::io::Write;

/// Growable JSON output buffer
#[derive(Debug, Default)]
pub struct JsonWriter {
    buf: Vec<u8>,
}

impl JsonWriter {
    /// Create a writer with `capacity` bytes preallocated
    pub fn with_capacity(capacity: usize) -> Self {
        JsonWriter {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Write a single punctuation byte such as `[`, `{`, `,`, `:`
    #[inline]
    pub fn punct(&mut self, b: u8) {
        self.buf.push(b);
    }

    /// Write pre-formatted JSON text verbatim
    #[inline]
    pub fn raw(&mut self, text: &str) {
        self.buf.extend_from_slice(text.as_bytes());
    }

    /// Write a comma unless this is the first element, then clear `first`
    #[inline]
    pub fn separator(&mut self, first: &mut bool) {
        if *first {
            *first = false;
        } else {
            self.buf.push(b',');
        }
    }

    /// Write `s` between double quotes, unescaped
    #[inline]
    pub fn string(&mut self, s: &str) {
        self.buf.reserve(s.len() + 2);
        self.buf.push(b'"');
        self.buf.extend_from_slice(s.as_bytes());
        self.buf.push(b'"');
    }

    /// Write a base-10 signed integer
    #[inline]
    pub fn int(&mut self, i: i64) {
        // Writing into a Vec cannot fail
        let _ = write!(self.buf, "{}", i);
    }

    /// Write a base-10 unsigned integer
    #[inline]
    pub fn uint(&mut self, u: u64) {
        let _ = write!(self.buf, "{}", u);
    }

    /// Write a float in fixed notation with exactly six decimals
    ///
    /// The caller must only pass finite values.
    #[inline]
    pub fn float(&mut self, f: f64) {
        debug_assert!(f.is_finite());
        let _ = write!(self.buf, "{:.6}", f);
    }

    /// Write `true` or `false`
    #[inline]
    pub fn bool(&mut self, b: bool) {
        self.raw(if b { "true" } else { "false" });
    }

    /// Write `null`
    #[inline]
    pub fn null(&mut self) {
        self.raw("null");
    }

    /// Bytes written so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// View the bytes written so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Hand the buffer to the caller
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
