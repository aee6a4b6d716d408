//! Sweep pipeline orchestration
//!
//! Discovers every matching document, then handles each one completely
//! before moving to the next: validate, delete if invalid, flag uppercase
//! file names. The first fatal error stops the run; earlier deletions stay.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::{
    cleaner::remove_file,
    config::SweepConfig,
    error::Result,
    report::{StatusLine, StatusSink},
    scanner::discover_files,
    utils::naming::{file_name, has_uppercase},
    verification::{DocumentLoader, DocumentValidator, LopdfLoader},
};

/// What happened to one discovered file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub valid: bool,
    pub removed: bool,
    pub uppercase_name: bool,
}

pub struct Pipeline<L = LopdfLoader> {
    config: SweepConfig,
    validator: DocumentValidator<L>,
}

impl Pipeline<LopdfLoader> {
    pub fn new(config: SweepConfig) -> Self {
        Self::with_validator(config, DocumentValidator::new())
    }
}

impl<L: DocumentLoader> Pipeline<L> {
    pub fn with_validator(config: SweepConfig, validator: DocumentValidator<L>) -> Self {
        Self { config, validator }
    }

    /// Runs one sweep, writing status lines to `sink`.
    ///
    /// The returned outcomes are for callers that want to inspect the run;
    /// nothing beyond the per-file lines is reported.
    #[instrument(skip_all, fields(root = %self.config.root.display()))]
    pub fn run(&self, sink: &mut impl StatusSink) -> Result<Vec<FileOutcome>> {
        self.config.validate()?;

        // Fully materialized so deletions cannot disturb the walk.
        let files = discover_files(&self.config.root, &self.config.extension)?;
        info!("Found {} candidate file(s)", files.len());

        let mut outcomes = Vec::with_capacity(files.len());
        for path in files {
            outcomes.push(self.process(path, sink)?);
        }
        Ok(outcomes)
    }

    fn process(&self, path: PathBuf, sink: &mut impl StatusSink) -> Result<FileOutcome> {
        debug!("Processing {}", path.display());

        let valid = self.validator.validate(&path, sink)?;
        if !valid {
            sink.emit(StatusLine::Deleting { path: path.clone() })?;
            remove_file(&path)?;
        }

        let uppercase_name = has_uppercase(&file_name(&path));
        if uppercase_name {
            sink.emit(StatusLine::Uppercase { path: path.clone() })?;
        }

        Ok(FileOutcome {
            path,
            valid,
            removed: !valid,
            uppercase_name,
        })
    }
}
