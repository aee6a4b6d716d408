//! Structural validation of a single document
//!
//! A document is valid when the parser accepts it and it has at least one
//! page. Parser rejections are an expected outcome and become a `false`
//! verdict. Anything else that goes wrong while opening the file is an
//! infrastructure problem and is returned as an error.

use std::{fs, io, path::Path};

use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    report::{StatusLine, StatusSink},
};

/// Reason reported for documents that parse but contain no pages
pub const NO_PAGES_REASON: &str = "No pages";

/// The one capability the validator needs from an opened document
pub trait PageSource {
    fn page_count(&self) -> usize;
}

impl PageSource for lopdf::Document {
    fn page_count(&self) -> usize {
        self.get_pages().len()
    }
}

/// Why a document could not be opened
#[derive(Debug)]
pub enum OpenError {
    /// The bytes do not form a valid document; carries the parser's message
    Malformed(String),
    /// Opening failed for a reason unrelated to document structure
    Unexpected(io::Error),
}

/// Opens documents on behalf of the validator
pub trait DocumentLoader {
    fn open(&self, path: &Path) -> std::result::Result<Box<dyn PageSource>, OpenError>;
}

/// Loads PDFs with `lopdf`.
///
/// The file is read up front so that I/O failures and parser failures can
/// never be confused: the former come from `fs::read`, the latter from
/// parsing bytes already in memory.
///
/// A document whose only defect is a stale `startxref` offset is repaired
/// in memory and accepted. The file on disk is left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfLoader;

impl DocumentLoader for LopdfLoader {
    fn open(&self, path: &Path) -> std::result::Result<Box<dyn PageSource>, OpenError> {
        let bytes = fs::read(path).map_err(OpenError::Unexpected)?;
        let document = match lopdf::Document::load_mem(&bytes) {
            Ok(document) => document,
            Err(e) => {
                let recovered = repair_startxref(&bytes)
                    .and_then(|repaired| lopdf::Document::load_mem(&repaired).ok());
                match recovered {
                    Some(document) => {
                        debug!("Recovered cross-reference offset for {}", path.display());
                        document
                    }
                    None => return Err(OpenError::Malformed(e.to_string())),
                }
            }
        };
        Ok(Box::new(document))
    }
}

fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).rposition(|w| w == needle)
}

/// Rewrites the trailer so `startxref` points at the last classic `xref`
/// table that starts a line. `None` when either keyword is missing.
fn repair_startxref(bytes: &[u8]) -> Option<Vec<u8>> {
    let trailer = rfind(bytes, b"startxref")?;
    let table = (1..trailer).rev().find(|&i| {
        matches!(bytes[i - 1], b'\n' | b'\r') && bytes[i..].starts_with(b"xref")
    })?;

    let mut repaired = bytes[..trailer].to_vec();
    repaired.extend_from_slice(format!("startxref\n{}\n%%EOF\n", table).as_bytes());
    Some(repaired)
}

/// Detailed verdict for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid { pages: usize },
    Malformed { reason: String },
    Empty,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid { .. })
    }

    /// Operator-facing explanation for an invalid outcome
    pub fn reason(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Valid { .. } => None,
            ValidationOutcome::Malformed { reason } => Some(reason),
            ValidationOutcome::Empty => Some(NO_PAGES_REASON),
        }
    }
}

/// Judges documents through a [`DocumentLoader`]
#[derive(Debug, Clone, Default)]
pub struct DocumentValidator<L = LopdfLoader> {
    loader: L,
}

impl DocumentValidator<LopdfLoader> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: DocumentLoader> DocumentValidator<L> {
    pub fn with_loader(loader: L) -> Self {
        Self { loader }
    }

    /// Opens `path` and classifies it without producing any output
    pub fn check(&self, path: &Path) -> Result<ValidationOutcome> {
        match self.loader.open(path) {
            Ok(document) => {
                let pages = document.page_count();
                if pages == 0 {
                    Ok(ValidationOutcome::Empty)
                } else {
                    Ok(ValidationOutcome::Valid { pages })
                }
            }
            Err(OpenError::Malformed(reason)) => Ok(ValidationOutcome::Malformed { reason }),
            Err(OpenError::Unexpected(source)) => Err(Error::UnexpectedValidation {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Returns whether `path` is a valid document, reporting the reason to
    /// `sink` when it is not. The file itself is never modified.
    pub fn validate(&self, path: &Path, sink: &mut impl StatusSink) -> Result<bool> {
        let outcome = self.check(path)?;
        match outcome.reason() {
            None => {
                debug!("Valid document: {}", path.display());
                Ok(true)
            }
            Some(reason) => {
                warn!("Invalid document {}: {}", path.display(), reason);
                sink.emit(StatusLine::Invalid {
                    path: path.to_path_buf(),
                    reason: reason.to_string(),
                })?;
                Ok(false)
            }
        }
    }
}

/// Validates `path` with the default `lopdf` loader
pub fn validate_document(path: &Path, sink: &mut impl StatusSink) -> Result<bool> {
    DocumentValidator::new().validate(path, sink)
}
