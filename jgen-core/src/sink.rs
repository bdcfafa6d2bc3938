//! Output sink for rendered Java text.

use std::io::{self, Write};

/// Append-only text sink over any [`io::Write`].
///
/// The first write failure is recorded and every later write is dropped, so
/// renderers can emit unconditionally and check [`JavaWriter::is_healthy`]
/// once at the end.
pub struct JavaWriter<'a> {
    inner: &'a mut dyn Write,
    error: Option<io::Error>,
    bytes_written: usize,
}

impl<'a> JavaWriter<'a> {
    /// Wrap a destination. The writer never flushes or closes it.
    pub fn new(inner: &'a mut dyn Write) -> Self {
        Self {
            inner,
            error: None,
            bytes_written: 0,
        }
    }

    /// Append raw text without a newline.
    pub fn push_str(&mut self, s: &str) -> &mut Self {
        if self.error.is_some() || s.is_empty() {
            return self;
        }
        match self.inner.write_all(s.as_bytes()) {
            Ok(()) => self.bytes_written += s.len(),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    bytes_written = self.bytes_written,
                    "java sink failed, dropping remaining output"
                );
                self.error = Some(err);
            }
        }
        self
    }

    /// Append a line terminator.
    pub fn push_newline(&mut self) -> &mut Self {
        self.push_str("\n")
    }

    /// Append `prefix`, `text` and a line terminator.
    pub fn push_line(&mut self, prefix: &str, text: &str) -> &mut Self {
        self.push_str(prefix).push_str(text).push_newline()
    }

    /// Whether every write so far has succeeded.
    pub fn is_healthy(&self) -> bool {
        self.error.is_none()
    }

    /// The failure that poisoned this writer, if any.
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Number of bytes accepted by the destination.
    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Consume the writer, returning the recorded failure.
    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
