//! Error types and handling for the PDF sweep library

use std::{io, path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// Custom result type for sweep operations
pub type Result<T> = StdResult<T, Error>;

/// Coarse classification of every error that can escape a sweep run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FilesystemAccess,
    Permission,
    UnexpectedValidation,
    Output,
    Config,
}

/// Core error type for sweep operations.
///
/// Malformed and empty documents never show up here: the validator absorbs
/// them into a `false` verdict. Everything in this enum is fatal to a run.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Filesystem access error at '{}': {source}", path.display())]
    FilesystemAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Permission denied at '{}': {source}", path.display())]
    Permission {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unexpected failure while validating '{}': {source}", path.display())]
    UnexpectedValidation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write status output: {0}")]
    Output(#[source] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Maps an I/O failure on `path` to the matching error variant
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Error::Permission { path, source },
            _ => Error::FilesystemAccess { path, source },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FilesystemAccess { .. } => ErrorKind::FilesystemAccess,
            Error::Permission { .. } => ErrorKind::Permission,
            Error::UnexpectedValidation { .. } => ErrorKind::UnexpectedValidation,
            Error::Output(_) => ErrorKind::Output,
            Error::Config(_) => ErrorKind::Config,
        }
    }
}
