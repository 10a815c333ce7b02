//! Filesystem helpers.
//!
//! These follow symlinks: a snippets directory or source file reached through
//! a link is treated like the file it points at.

use std::path::Path;

/// Returns `true` if the path is a directory, following symlinks.
#[must_use]
pub(crate) fn is_dir(path: &Path) -> bool {
    path.metadata().map(|m| m.is_dir()).unwrap_or(false)
}
