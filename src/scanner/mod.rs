//! Scanner Module
//!
//! Finds the documents a sweep run will look at.

pub mod file_scanner;

pub use self::file_scanner::discover_files;
