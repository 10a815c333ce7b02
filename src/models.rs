use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// A JSON object keyed by snippet name, in source order.
///
/// Backed by `serde_json::Map` with `preserve_order`, so both the snippet keys
/// and the fields inside each entry keep the order they were read in.
pub type SnippetMap = serde_json::Map<String, serde_json::Value>;

/// Top-level entries of one source file, in source order. Repeated names are
/// kept.
pub type SourceEntries = Vec<(String, serde_json::Value)>;

/// The structural check a snippet entry failed.
///
/// Checks run in declaration order and the first failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryCheck {
    /// The entry is not a JSON object.
    NotAnObject,
    /// `prefix` is absent or falsy.
    MissingPrefix,
    /// `scope` is absent or falsy.
    MissingScope,
    /// `body` is absent or falsy.
    MissingBody,
    /// `body` is neither a string nor an array.
    InvalidBodyType,
}

impl fmt::Display for EntryCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            EntryCheck::NotAnObject => "not an object",
            EntryCheck::MissingPrefix => "missing \"prefix\"",
            EntryCheck::MissingScope => "missing \"scope\"",
            EntryCheck::MissingBody => "missing \"body\"",
            EntryCheck::InvalidBodyType => "invalid \"body\" type (expected string or array)",
        };
        f.write_str(text)
    }
}

/// What a single source file contributed to the merged mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    /// File name inside the snippets directory (e.g. `python.json`).
    #[serde(rename = "file")]
    pub file_name: String,
    /// Language label the file resolved to.
    pub language: &'static str,
    /// Number of snippet entries merged from the file.
    #[serde(rename = "snippets")]
    pub entries: usize,
}

/// Result of the in-memory aggregation pass.
#[derive(Debug, Clone)]
pub struct AggregateReport {
    /// The merged, namespaced mapping.
    pub snippets: SnippetMap,
    /// Per-file contributions, in processing order.
    pub files: Vec<SourceFile>,
}

/// Result of a successful `run`.
#[derive(Debug)]
pub struct BuildOutcome {
    /// Path of the written snippet file.
    pub output_path: PathBuf,
    /// Number of snippets written.
    pub snippets_count: usize,
    /// Number of source files merged.
    pub files_count: usize,
}

/// Result of comparing the generated content against an existing output file.
#[derive(Debug)]
pub struct CheckOutcome {
    /// `true` when the output file already holds exactly the generated bytes.
    pub up_to_date: bool,
    /// Unified diff from the current file to the expected content. Empty when
    /// up to date.
    pub diff: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_check_display_names_field() {
        assert_eq!(EntryCheck::MissingPrefix.to_string(), "missing \"prefix\"");
        assert_eq!(EntryCheck::MissingBody.to_string(), "missing \"body\"");
        assert!(EntryCheck::InvalidBodyType.to_string().contains("body"));
    }

    #[test]
    fn entry_check_serializes_kebab_case() {
        let v = serde_json::to_value(EntryCheck::InvalidBodyType).unwrap();
        assert_eq!(v, "invalid-body-type");
    }

    #[test]
    fn source_file_serializes_with_report_names() {
        let sf = SourceFile {
            file_name: "python.json".into(),
            language: "Python",
            entries: 3,
        };
        let v = serde_json::to_value(&sf).unwrap();
        assert_eq!(v["file"], "python.json");
        assert_eq!(v["language"], "Python");
        assert_eq!(v["snippets"], 3);
    }
}
