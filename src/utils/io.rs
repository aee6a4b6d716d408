//! IO Utilities for file checks

use std::{fs, path::Path};

/// Checks if a path is an existing regular file (directories do not count).
pub fn file_exists(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}
