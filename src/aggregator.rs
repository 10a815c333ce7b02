//! Snippet aggregation: merges per-language snippet files into one global file.
//!
//! Every source file is resolved to a language label, parsed, and validated
//! entry by entry. Each entry is re-keyed as `"<name> — <label>"` and merged
//! into a single mapping. The first problem aborts the whole pass, and
//! nothing is written until the mapping is complete.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde_json::Value;
use similar::TextDiff;

use crate::discovery::discover_source_files;
use crate::errors::{Result, SnippetError};
use crate::languages::resolve_language_label;
use crate::models::{AggregateReport, BuildOutcome, CheckOutcome, SnippetMap, SourceFile};
use crate::parser::parse_source_file;
use crate::validator::validate_entry;

/// Separator between the snippet name and the language label in global keys.
pub const KEY_SEPARATOR: &str = " — ";

/// Build the global key for a snippet. Separator collisions inside `name` are
/// not escaped.
#[must_use]
pub fn namespace_key(name: &str, language: &str) -> String {
    format!("{name}{KEY_SEPARATOR}{language}")
}

/// Insert `entry` under `key`, refusing to overwrite.
///
/// # Errors
///
/// Returns [`SnippetError::DuplicateKey`] if `key` is already present.
pub fn merge_entry(output: &mut SnippetMap, key: String, entry: Value) -> Result<()> {
    if output.contains_key(&key) {
        return Err(SnippetError::DuplicateKey { key });
    }
    output.insert(key, entry);
    Ok(())
}

/// Run the full in-memory pass over `source_dir` without touching the disk.
///
/// # Errors
///
/// Returns the first discovery, lookup, parse, validation or collision error.
pub fn aggregate(source_dir: &Path) -> Result<AggregateReport> {
    let mut snippets = SnippetMap::new();
    let mut files = Vec::new();

    for file_name in discover_source_files(source_dir)? {
        let language = resolve_language_label(&file_name)?;
        let source = parse_source_file(&source_dir.join(&file_name))?;
        let entries = source.len();

        for (name, entry) in source {
            validate_entry(&name, &entry, &file_name)?;
            merge_entry(&mut snippets, namespace_key(&name, language), entry)?;
        }

        debug!("merged {entries} snippet(s) from {file_name} as {language}");
        files.push(SourceFile {
            file_name,
            language,
            entries,
        });
    }

    Ok(AggregateReport { snippets, files })
}

/// Serialize the merged mapping: 2-space indentation, keys in insertion
/// order, non-ASCII written verbatim, no trailing newline.
///
/// # Errors
///
/// Returns [`SnippetError::Json`] if serialization fails.
pub fn render(snippets: &SnippetMap) -> Result<String> {
    Ok(serde_json::to_string_pretty(snippets)?)
}

/// Aggregate `source_dir` and write the result to `output_path`.
///
/// The parent directory of `output_path` is created if it does not exist.
/// The file itself is replaced atomically via a sibling `.tmp` file, so a
/// failed run leaves any earlier output untouched.
///
/// # Errors
///
/// Returns the first aggregation error, or an I/O error from writing.
pub fn run(source_dir: &Path, output_path: &Path) -> Result<BuildOutcome> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let report = aggregate(source_dir)?;
    let content = render(&report.snippets)?;
    write_atomic(output_path, content.as_bytes())?;

    info!(
        "wrote {} snippet(s) to {}",
        report.snippets.len(),
        output_path.display()
    );
    Ok(BuildOutcome {
        output_path: output_path.to_path_buf(),
        snippets_count: report.snippets.len(),
        files_count: report.files.len(),
    })
}

/// Compare what `run` would write against the current `output_path`.
///
/// Writes nothing and creates no directories. A missing output file is
/// reported as stale.
///
/// # Errors
///
/// Returns the first aggregation error, or an I/O error other than "not
/// found" from reading the current output. Output that is not UTF-8 is
/// reported as stale, not as an error.
pub fn check(source_dir: &Path, output_path: &Path) -> Result<CheckOutcome> {
    let report = aggregate(source_dir)?;
    let expected = render(&report.snippets)?;
    let current = match std::fs::read(output_path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(e) => return Err(e.into()),
    };

    if current == expected.as_bytes() {
        return Ok(CheckOutcome {
            up_to_date: true,
            diff: String::new(),
        });
    }

    let label = output_path.display();
    let (old_header, new_header) = (format!("{label} (current)"), format!("{label} (expected)"));
    let current = String::from_utf8_lossy(&current);
    let text_diff = TextDiff::from_lines(&*current, expected.as_str());
    let diff = text_diff
        .unified_diff()
        .header(&old_header, &new_header)
        .to_string();
    Ok(CheckOutcome {
        up_to_date: false,
        diff,
    })
}

fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let tmp = tmp_path(path);
    let _ = std::fs::remove_file(&tmp);

    let mut f = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&tmp)?;
    f.write_all(content)?;
    f.sync_all()?;
    drop(f);

    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
