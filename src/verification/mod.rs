//! Verification module for swept documents

pub mod document_validator;

pub use self::document_validator::{
    validate_document, DocumentLoader, DocumentValidator, LopdfLoader, OpenError, PageSource,
    ValidationOutcome,
};
