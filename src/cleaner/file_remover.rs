//! Removal of documents that failed validation

use std::{fs, io, path::Path};

use tracing::info;

use crate::{
    error::{Error, Result},
    utils::io::file_exists,
};

/// Deletes the file at `path`.
///
/// A missing file is a filesystem access error and a denied deletion is a
/// permission error. Neither is retried. The file's absence is confirmed
/// before returning.
pub fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| Error::from_io(path, e))?;

    if file_exists(path) {
        return Err(Error::FilesystemAccess {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::Other, "file still present after removal"),
        });
    }
    info!("Removed file: {}", path.display());
    Ok(())
}
