use std::fmt;
use std::path::Path;

use serde::de::{IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::{Result, SnippetError};
use crate::models::SourceEntries;

/// Read a snippet source file and return its top-level entries in order.
///
/// Repeated names inside the file are kept as separate entries so the merge
/// step can reject them instead of silently keeping the last one.
///
/// # Errors
///
/// - [`SnippetError::Io`] if the file cannot be opened
/// - [`SnippetError::MalformedSource`] if it is not UTF-8 JSON
/// - [`SnippetError::InvalidShape`] if the top-level value is not an object
pub fn parse_source_file(path: &Path) -> Result<SourceEntries> {
    let file = display_name(path);
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(|e| SnippetError::MalformedSource {
        file: file.clone(),
        message: e.to_string(),
    })?;
    parse_source_str(&content, &file)
}

/// Parse snippet source text already in memory. `file` is used for error
/// context only.
pub fn parse_source_str(content: &str, file: &str) -> Result<SourceEntries> {
    let top: TopLevel =
        serde_json::from_str(content).map_err(|e| SnippetError::MalformedSource {
            file: file.to_string(),
            message: e.to_string(),
        })?;
    top.0.ok_or_else(|| SnippetError::InvalidShape {
        file: file.to_string(),
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Top-level JSON value: `Some` for an object, `None` for anything else.
struct TopLevel(Option<SourceEntries>);

impl<'de> Deserialize<'de> for TopLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TopLevelVisitor)
    }
}

struct TopLevelVisitor;

impl<'de> Visitor<'de> for TopLevelVisitor {
    type Value = TopLevel;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON value")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<TopLevel, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, entry)) = map.next_entry::<String, Value>()? {
            entries.push((name, entry));
        }
        Ok(TopLevel(Some(entries)))
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<TopLevel, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(TopLevel(None))
    }

    fn visit_bool<E>(self, _v: bool) -> std::result::Result<TopLevel, E>
    where
        E: serde::de::Error,
    {
        Ok(TopLevel(None))
    }

    fn visit_i64<E>(self, _v: i64) -> std::result::Result<TopLevel, E>
    where
        E: serde::de::Error,
    {
        Ok(TopLevel(None))
    }

    fn visit_u64<E>(self, _v: u64) -> std::result::Result<TopLevel, E>
    where
        E: serde::de::Error,
    {
        Ok(TopLevel(None))
    }

    fn visit_f64<E>(self, _v: f64) -> std::result::Result<TopLevel, E>
    where
        E: serde::de::Error,
    {
        Ok(TopLevel(None))
    }

    fn visit_str<E>(self, _v: &str) -> std::result::Result<TopLevel, E>
    where
        E: serde::de::Error,
    {
        Ok(TopLevel(None))
    }

    fn visit_unit<E>(self) -> std::result::Result<TopLevel, E>
    where
        E: serde::de::Error,
    {
        Ok(TopLevel(None))
    }
}
