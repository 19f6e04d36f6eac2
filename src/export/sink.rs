//! Output destinations.

use std::fs::File;
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::error_handling::ScrapeError;

/// Writer wrapper that silently ignores broken pipe errors.
///
/// When stdout is piped to a command like `head` that closes early, writes
/// would otherwise fail with `BrokenPipe`.
pub(crate) struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}

/// Opens the output destination: the given file, or stdout when `None`.
///
/// # Errors
///
/// Returns `ScrapeError::Output` if the file cannot be created.
pub fn open_sink(output: Option<&Path>) -> Result<Box<dyn Write>, ScrapeError> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ScrapeError::Output(format!(
                    "Failed to create output file {}: {e}",
                    path.display()
                ))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(IgnoreBrokenPipe::new(io::stdout()))),
    }
}
