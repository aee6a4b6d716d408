//! Configuration types and validation for the sweep pipeline

use std::{fmt, path::PathBuf, str::FromStr};

use crate::error::{Error, Result};

/// Directory scanned when the caller does not name one
pub const DEFAULT_ROOT: &str = "./PDFs";

/// Suffix matched when the caller does not name one
pub const DEFAULT_EXTENSION: &str = ".pdf";

/// What a single sweep run looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    /// Root of the directory tree to walk
    pub root: PathBuf,
    /// Case-sensitive file name suffix, e.g. `.pdf`
    pub extension: String,
}

impl SweepConfig {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// Rejects settings that would make the run meaningless
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            return Err(Error::Config("Extension must not be empty".into()));
        }
        if self.root.as_os_str().is_empty() {
            return Err(Error::Config("Root directory must not be empty".into()));
        }
        Ok(())
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT, DEFAULT_EXTENSION)
    }
}

/// Diagnostic verbosity for the `tracing` subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const VARIANTS: [&'static str; 5] = ["error", "warn", "info", "debug", "trace"];

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(Error::Config(format!("Unknown log level: {}", other))),
        }
    }
}
