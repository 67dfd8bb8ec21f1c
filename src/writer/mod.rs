use std::io::{BufWriter, Write};

pub const WRITER_BUFFER_SIZE: usize = 256 * 1024;
pub const STMT_BUFFER_COUNT: usize = 100;

/// Counts reported by [`SqlWriter::finish`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteCounts {
    pub statements: u64,
    pub bytes: u64,
}

/// Buffered, line-oriented sink for SQL statements.
pub struct SqlWriter<W: Write> {
    writer: BufWriter<W>,
    pending: usize,
    max_stmt_buffer: usize,
    counts: WriteCounts,
}

impl<W: Write> SqlWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_flush_interval(inner, STMT_BUFFER_COUNT)
    }

    pub fn with_flush_interval(inner: W, max_stmt_buffer: usize) -> Self {
        Self {
            writer: BufWriter::with_capacity(WRITER_BUFFER_SIZE, inner),
            pending: 0,
            max_stmt_buffer: max_stmt_buffer.max(1),
            counts: WriteCounts::default(),
        }
    }

    pub fn write_statement(&mut self, stmt: &str) -> std::io::Result<()> {
        self.writer.write_all(stmt.as_bytes())?;
        self.writer.write_all(b"\n")?;

        self.counts.statements += 1;
        self.counts.bytes += stmt.len() as u64 + 1;

        self.pending += 1;
        if self.pending >= self.max_stmt_buffer {
            self.pending = 0;
            self.writer.flush()?;
        }

        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.pending = 0;
        self.writer.flush()
    }

    pub fn counts(&self) -> WriteCounts {
        self.counts
    }

    /// Flush everything and hand back the counts.
    pub fn finish(mut self) -> std::io::Result<WriteCounts> {
        self.flush()?;
        Ok(self.counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Records how many times `flush` reached the inner writer.
    struct FlushCounter {
        data: Vec<u8>,
        flushes: usize,
    }

    impl Write for FlushCounter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_write_statement_appends_newline() {
        let mut out = Vec::new();
        let mut writer = SqlWriter::new(&mut out);
        writer.write_statement("BEGIN;").unwrap();
        writer.write_statement("COMMIT;").unwrap();
        let counts = writer.finish().unwrap();

        assert_eq!(out, b"BEGIN;\nCOMMIT;\n");
        assert_eq!(counts.statements, 2);
        assert_eq!(counts.bytes, out.len() as u64);
    }

    #[test]
    fn test_periodic_flush() {
        let mut sink = FlushCounter {
            data: Vec::new(),
            flushes: 0,
        };
        {
            let mut writer = SqlWriter::with_flush_interval(&mut sink, 10);
            for _ in 0..25 {
                writer.write_statement("SELECT 1;").unwrap();
            }
            writer.finish().unwrap();
        }

        // two interval flushes plus the final one
        assert_eq!(sink.flushes, 3);
        assert_eq!(sink.data.len(), 25 * "SELECT 1;\n".len());
    }
}
