pub mod aggregator;
pub mod discovery;
pub mod errors;
mod fs_util;
pub mod languages;
pub mod models;
pub mod parser;
pub mod validator;

// Re-export key types at crate root for convenience.
pub use aggregator::{aggregate, check, merge_entry, namespace_key, render, run, KEY_SEPARATOR};
pub use discovery::discover_source_files;
pub use errors::{Result, SnippetError};
pub use languages::{resolve_language_label, LANGUAGE_LABELS};
pub use models::{
    AggregateReport, BuildOutcome, CheckOutcome, EntryCheck, SnippetMap, SourceEntries, SourceFile,
};
pub use parser::{parse_source_file, parse_source_str};
pub use validator::validate_entry;
