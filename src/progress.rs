//! Shared progress tracking utilities.
//!
//! This module provides a `ProgressWriter` wrapper that tracks bytes written
//! and calls a callback function, enabling byte-based progress bars while the
//! script is being generated.

use std::io::Write;

/// A writer wrapper that tracks bytes written and calls a progress callback.
pub struct ProgressWriter<W: Write> {
    writer: W,
    callback: Box<dyn Fn(u64)>,
    bytes_written: u64,
}

impl<W: Write> ProgressWriter<W> {
    /// Create a new ProgressWriter wrapping the given writer.
    ///
    /// The callback will be called with the total bytes written so far
    /// after each successful write operation.
    pub fn new<F>(writer: W, callback: F) -> Self
    where
        F: Fn(u64) + 'static,
    {
        Self {
            writer,
            callback: Box::new(callback),
            bytes_written: 0,
        }
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Write for ProgressWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.writer.write(buf)?;
        self.bytes_written += n as u64;
        (self.callback)(self.bytes_written);
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}
