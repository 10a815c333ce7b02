use std::path::Path;

use log::debug;

use crate::errors::{Result, SnippetError};
use crate::fs_util::is_dir;

/// Extension every snippet source file carries.
pub const SOURCE_EXTENSION: &str = ".json";

/// List the snippet source files in `dir`, sorted by name.
///
/// Every entry whose name ends in [`SOURCE_EXTENSION`] is returned unless it
/// is a directory. Symlinks are followed, and names that are not valid UTF-8
/// are returned lossily so the label lookup rejects them. Sorting keeps the
/// merged output stable across filesystems.
///
/// # Errors
///
/// - [`SnippetError::MissingDirectory`] if `dir` is not a directory
/// - [`SnippetError::NoSourceFiles`] if no source files are found
/// - [`SnippetError::Io`] if the directory cannot be listed
pub fn discover_source_files(dir: &Path) -> Result<Vec<String>> {
    if !is_dir(dir) {
        return Err(SnippetError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(SOURCE_EXTENSION) && !is_dir(&entry.path()) {
            files.push(name);
        }
    }

    if files.is_empty() {
        return Err(SnippetError::NoSourceFiles {
            path: dir.to_path_buf(),
        });
    }

    files.sort();
    debug!("discovered {} source file(s) in {}", files.len(), dir.display());
    Ok(files)
}
