//! Cleaner module: removes documents that did not survive validation

pub mod file_remover;

pub use file_remover::remove_file;
