//! Main Library File for PDF sweeping
//! Finds documents under a directory, deletes the ones that do not parse or
//! have no pages, and flags file names that contain uppercase letters.

// Configuration and Core Pipeline
pub mod config;
pub mod error;
pub mod pipeline;

// Stage 1: Discovery
pub mod scanner;

// Stage 2: Validation
pub mod verification;

// Stage 3: Removal
pub mod cleaner;

// Operator output
pub mod report;

// Shared Utilities
pub mod utils;

// Re-exports for crate consumers
pub use cleaner::remove_file;
pub use config::{LogLevel, SweepConfig};
pub use error::{Error, ErrorKind, Result};
pub use pipeline::{FileOutcome, Pipeline};
pub use report::{StatusLine, StatusSink, StatusWriter};
pub use scanner::discover_files;
pub use utils::{file_name, has_uppercase};
pub use verification::{validate_document, DocumentValidator, ValidationOutcome};
