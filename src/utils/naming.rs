//! File name inspection helpers

use std::path::Path;

/// Returns the final component of `path`, or an empty string when there is
/// none (e.g. `/` or `..`). Non-UTF-8 names are converted lossily.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// True when `c` is uppercase and has a distinct lowercase form
fn is_cased_upper(c: char) -> bool {
    c.is_uppercase() && c.to_lowercase().ne(std::iter::once(c))
}

/// Whether `name` contains at least one uppercase letter.
///
/// Digits, punctuation and uncased scripts never count. Pass a bare file
/// name, not a full path: uppercase directory names would otherwise match.
pub fn has_uppercase(name: &str) -> bool {
    name.chars().any(is_cased_upper)
}
