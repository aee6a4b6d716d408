//! Plain-text rendering of status lines

use std::{
    fmt,
    io::{self, Write},
};

use super::{StatusLine, StatusSink};
use crate::error::{Error, Result};

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLine::Invalid { path, reason } => {
                write!(f, "'{}' is corrupt or invalid: {}", path.display(), reason)
            }
            StatusLine::Deleting { path } => {
                write!(f, "Invalid PDF detected: {}. Deleting file.", path.display())
            }
            StatusLine::Uppercase { path } => {
                write!(f, "Uppercase letter found in filename: {}", path.display())
            }
        }
    }
}

/// Writes one line per status message and flushes after each, so the
/// operator sees progress even when a later step aborts the run.
#[derive(Debug)]
pub struct StatusWriter<W: Write> {
    inner: W,
}

impl StatusWriter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StatusWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> StatusSink for StatusWriter<W> {
    fn emit(&mut self, line: StatusLine) -> Result<()> {
        writeln!(self.inner, "{}", line).map_err(Error::Output)?;
        self.inner.flush().map_err(Error::Output)
    }
}
