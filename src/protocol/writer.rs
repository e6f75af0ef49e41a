use std::io::Write;

use crate::error::Result;
use crate::protocol::value::Datetime;

/// Default buffered bytes before the writer drains to its inner sink.
const DEFAULT_FLUSH_THRESHOLD: usize = 16 * 1024;

/// A buffered sink for parameter bytes.
///
/// Every typed write reports whether it pushed the buffer across the flush
/// threshold and drained it to the inner sink. Callers use that signal to
/// pace downstream I/O; the writer itself has no other notion of
/// backpressure.
#[derive(Debug)]
pub struct PacketWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
    flush_threshold: usize,
}

impl<W: Write> PacketWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_threshold(inner, DEFAULT_FLUSH_THRESHOLD)
    }

    pub fn with_threshold(inner: W, flush_threshold: usize) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            flush_threshold,
        }
    }

    /// Bytes written since the last flush.
    pub fn buffered(&self) -> &[u8] {
        &self.buf
    }

    fn settle(&mut self) -> Result<bool> {
        if self.buf.len() >= self.flush_threshold {
            self.inner.write_all(&self.buf)?;
            self.buf.clear();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn write_int8(&mut self, value: u8) -> Result<bool> {
        self.buf.push(value);
        self.settle()
    }

    fn push_int_lenenc(&mut self, value: u64) {
        if value < 251 {
            self.buf.push(value as u8);
        } else if value < (1 << 16) {
            self.buf.push(0xFC);
            self.buf.extend_from_slice(&(value as u16).to_le_bytes());
        } else if value < (1 << 24) {
            self.buf.push(0xFD);
            self.buf.extend_from_slice(&(value as u32).to_le_bytes()[..3]);
        } else {
            self.buf.push(0xFE);
            self.buf.extend_from_slice(&value.to_le_bytes());
        }
    }

    /// Length-encoded string known to be ASCII (numeric renderings).
    pub fn write_lenenc_str_ascii(&mut self, text: &str) -> Result<bool> {
        debug_assert!(text.is_ascii());
        self.write_lenenc_buffer(text.as_bytes())
    }

    pub fn write_lenenc_str(&mut self, text: &str) -> Result<bool> {
        self.write_lenenc_buffer(text.as_bytes())
    }

    pub fn write_lenenc_buffer(&mut self, bytes: &[u8]) -> Result<bool> {
        self.push_int_lenenc(bytes.len() as u64);
        self.buf.extend_from_slice(bytes);
        self.settle()
    }

    /// Binary DATETIME encoding: a length byte (0, 7 or 11) followed by that
    /// many component bytes.
    pub fn write_binary_datetime(&mut self, datetime: &Datetime) -> Result<bool> {
        if datetime.is_zero() {
            self.buf.push(0);
            return self.settle();
        }
        let len: u8 = if datetime.microsecond > 0 { 11 } else { 7 };
        self.buf.push(len);
        self.buf.extend_from_slice(&datetime.year.to_le_bytes());
        self.buf.push(datetime.month);
        self.buf.push(datetime.day);
        self.buf.push(datetime.hour);
        self.buf.push(datetime.minute);
        self.buf.push(datetime.second);
        if len == 11 {
            self.buf.extend_from_slice(&datetime.microsecond.to_le_bytes());
        }
        self.settle()
    }

    /// Drain any buffered bytes and return the inner sink.
    pub fn finish(mut self) -> Result<W> {
        self.inner.write_all(&self.buf)?;
        self.inner.flush()?;
        Ok(self.inner)
    }
}

// ============================================================================
// Tests
// ============================================================================
