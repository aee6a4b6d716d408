//! Operator-facing status lines
//!
//! Every line names the file it is about. The wording is diagnostic text for
//! a human, not a protocol.

use std::path::PathBuf;

use crate::error::Result;

pub mod formatter;

pub use formatter::StatusWriter;

/// One status message emitted while sweeping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    /// The document failed validation; `reason` is the parser's text or "No pages"
    Invalid { path: PathBuf, reason: String },
    /// The document is about to be removed
    Deleting { path: PathBuf },
    /// The file name carries at least one uppercase letter
    Uppercase { path: PathBuf },
}

impl StatusLine {
    pub fn path(&self) -> &PathBuf {
        match self {
            StatusLine::Invalid { path, .. }
            | StatusLine::Deleting { path }
            | StatusLine::Uppercase { path } => path,
        }
    }
}

/// Destination for status lines
pub trait StatusSink {
    fn emit(&mut self, line: StatusLine) -> Result<()>;
}

impl<S: StatusSink + ?Sized> StatusSink for &mut S {
    fn emit(&mut self, line: StatusLine) -> Result<()> {
        (**self).emit(line)
    }
}

/// Collects lines in memory instead of writing them anywhere
impl StatusSink for Vec<StatusLine> {
    fn emit(&mut self, line: StatusLine) -> Result<()> {
        self.push(line);
        Ok(())
    }
}
