//! Recursive discovery of candidate documents on disk

use std::{
    env, io,
    path::{Component, Path, PathBuf},
};

use tracing::{debug, instrument};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};

/// Drops `.` components. `..` is left alone.
fn strip_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Resolves `root` against the working directory without touching symlinks
fn absolute_root(root: &Path) -> Result<PathBuf> {
    if root.is_absolute() {
        return Ok(strip_cur_dir(root));
    }
    let cwd = env::current_dir().map_err(|e| Error::from_io(root, e))?;
    Ok(strip_cur_dir(&cwd.join(root)))
}

/// True for regular files, and for symlinks that resolve to one
fn is_file_entry(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

/// Keeps the underlying I/O kind so permission problems stay distinguishable
fn walk_error(root: &Path, source: walkdir::Error) -> Error {
    let path = source.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
    let kind = source.io_error().map_or(io::ErrorKind::Other, io::Error::kind);
    Error::from_io(path, io::Error::new(kind, source))
}

fn has_suffix(entry: &DirEntry, suffix: &str) -> bool {
    entry.file_name().to_string_lossy().ends_with(suffix)
}

/// Walks `root` at any depth and returns the absolute paths of every file
/// whose name ends with `suffix`. The comparison is case-sensitive, so
/// `b.PDF` does not match `.pdf`.
///
/// The result is fully collected before returning. Any traversal error,
/// including a missing root, aborts discovery instead of yielding a partial
/// list.
#[instrument(skip_all, fields(root = %root.display(), suffix = %suffix))]
pub fn discover_files(root: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let root = absolute_root(root)?;
    let mut matched = Vec::new();

    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = entry.map_err(|source| walk_error(&root, source))?;

        if is_file_entry(&entry) && has_suffix(&entry, suffix) {
            debug!("Matched {}", entry.path().display());
            matched.push(entry.into_path());
        }
    }

    debug!("Discovered {} file(s)", matched.len());
    Ok(matched)
}
