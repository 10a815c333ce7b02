use std::path::PathBuf;

use thiserror::Error;

use crate::models::EntryCheck;

/// Errors that can occur while aggregating snippet files.
///
/// Every variant is fatal: the aggregator stops at the first one and writes
/// no output.
#[derive(Error, Debug)]
pub enum SnippetError {
    /// The snippets directory does not exist or is not a directory.
    #[error("missing snippets directory: {}", path.display())]
    MissingDirectory { path: PathBuf },

    /// The snippets directory holds no `.json` files.
    #[error("no snippet files found in {}", path.display())]
    NoSourceFiles { path: PathBuf },

    /// A source file has no entry in the language label table.
    #[error("no language label defined for file: {file}")]
    UnmappedLanguage { file: String },

    /// A source file could not be parsed as JSON.
    #[error("invalid JSON in {file}: {message}")]
    MalformedSource { file: String, message: String },

    /// A source file parsed, but its top-level value is not an object.
    #[error("top-level JSON must be an object in {file}")]
    InvalidShape { file: String },

    /// A snippet entry failed one of the structural checks.
    #[error("snippet \"{name}\" in {file}: {check}")]
    InvalidEntry {
        name: String,
        file: String,
        check: EntryCheck,
    },

    /// Two entries synthesized the same global key.
    #[error("duplicate global snippet key: {key}")]
    DuplicateKey { key: String },

    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for `Result<T, SnippetError>`.
pub type Result<T> = std::result::Result<T, SnippetError>;
