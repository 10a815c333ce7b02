//! Fixed mapping from snippet source file names to language labels.
//!
//! Every file in the snippets directory must be registered here. An
//! unregistered file is a fatal error rather than a skip, so adding a language
//! always means adding a row to [`LANGUAGE_LABELS`].

use crate::errors::{Result, SnippetError};

/// Registered source files and the label appended to their global keys.
pub const LANGUAGE_LABELS: &[(&str, &str)] = &[
    ("javascript.json", "JavaScript"),
    ("python.json", "Python"),
    ("html.json", "HTML"),
    ("css.json", "CSS"),
    ("java.json", "Java"),
];

/// Look up the language label for a source file name.
///
/// # Errors
///
/// Returns [`SnippetError::UnmappedLanguage`] if the file is not registered.
pub fn resolve_language_label(file_name: &str) -> Result<&'static str> {
    LANGUAGE_LABELS
        .iter()
        .find(|(name, _)| *name == file_name)
        .map(|(_, label)| *label)
        .ok_or_else(|| SnippetError::UnmappedLanguage {
            file: file_name.to_string(),
        })
}
