use serde_json::Value;

use crate::errors::{Result, SnippetError};
use crate::models::EntryCheck;

/// JSON truthiness as editor tooling scripts see it: `null`, `false`, `0`
/// and `""` are falsy. Arrays and objects are always truthy, even when empty.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Find the first structural check `entry` fails, if any.
///
/// Order: object shape, `prefix`, `scope`, `body` presence, `body` type.
#[must_use]
pub fn first_failed_check(entry: &Value) -> Option<EntryCheck> {
    let Some(obj) = entry.as_object() else {
        return Some(EntryCheck::NotAnObject);
    };
    let present = |field: &str| obj.get(field).is_some_and(is_truthy);

    if !present("prefix") {
        return Some(EntryCheck::MissingPrefix);
    }
    if !present("scope") {
        return Some(EntryCheck::MissingScope);
    }
    if !present("body") {
        return Some(EntryCheck::MissingBody);
    }
    match obj.get("body") {
        Some(Value::String(_) | Value::Array(_)) => None,
        _ => Some(EntryCheck::InvalidBodyType),
    }
}

/// Validate one snippet entry from `file`.
///
/// # Errors
///
/// Returns [`SnippetError::InvalidEntry`] naming the first failed check.
pub fn validate_entry(name: &str, entry: &Value, file: &str) -> Result<()> {
    match first_failed_check(entry) {
        None => Ok(()),
        Some(check) => Err(SnippetError::InvalidEntry {
            name: name.to_string(),
            file: file.to_string(),
            check,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(entry: Value) -> Option<EntryCheck> {
        first_failed_check(&entry)
    }

    #[test]
    fn valid_entry_with_array_body() {
        assert_eq!(
            check(json!({"prefix": "for", "scope": "javascript", "body": ["a", "b"]})),
            None
        );
    }

    #[test]
    fn valid_entry_with_string_body_and_extra_fields() {
        assert_eq!(
            check(json!({
                "prefix": ["def", "fn"],
                "scope": "python",
                "body": "def $1():\n\t$0",
                "description": "function"
            })),
            None
        );
    }

    #[test]
    fn empty_body_array_is_accepted() {
        assert_eq!(check(json!({"prefix": "p", "scope": "s", "body": []})), None);
    }

    #[test]
    fn non_object_entries_fail_first() {
        assert_eq!(check(json!("text")), Some(EntryCheck::NotAnObject));
        assert_eq!(check(json!(["prefix"])), Some(EntryCheck::NotAnObject));
        assert_eq!(check(Value::Null), Some(EntryCheck::NotAnObject));
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        assert_eq!(check(json!({})), Some(EntryCheck::MissingPrefix));
        assert_eq!(
            check(json!({"prefix": "p", "body": "b"})),
            Some(EntryCheck::MissingScope)
        );
        assert_eq!(
            check(json!({"prefix": "p", "scope": "s"})),
            Some(EntryCheck::MissingBody)
        );
    }

    #[test]
    fn first_failure_wins_when_several_fields_are_bad() {
        assert_eq!(
            check(json!({"scope": "", "body": 3})),
            Some(EntryCheck::MissingPrefix)
        );
    }

    #[test]
    fn falsy_values_count_as_missing() {
        assert_eq!(
            check(json!({"prefix": "", "scope": "s", "body": "b"})),
            Some(EntryCheck::MissingPrefix)
        );
        assert_eq!(
            check(json!({"prefix": "p", "scope": null, "body": "b"})),
            Some(EntryCheck::MissingScope)
        );
        assert_eq!(
            check(json!({"prefix": "p", "scope": "s", "body": ""})),
            Some(EntryCheck::MissingBody)
        );
        assert_eq!(
            check(json!({"prefix": 0, "scope": "s", "body": "b"})),
            Some(EntryCheck::MissingPrefix)
        );
    }

    #[test]
    fn non_text_body_is_invalid_type() {
        assert_eq!(
            check(json!({"prefix": "p", "scope": "s", "body": 42})),
            Some(EntryCheck::InvalidBodyType)
        );
        assert_eq!(
            check(json!({"prefix": "p", "scope": "s", "body": {"line": "x"}})),
            Some(EntryCheck::InvalidBodyType)
        );
        assert_eq!(
            check(json!({"prefix": "p", "scope": "s", "body": true})),
            Some(EntryCheck::InvalidBodyType)
        );
    }

    #[test]
    fn truthiness_table() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn validate_entry_carries_context() {
        let err = validate_entry("loop", &json!({"prefix": "l"}), "python.json").unwrap_err();
        match err {
            SnippetError::InvalidEntry { name, file, check } => {
                assert_eq!(name, "loop");
                assert_eq!(file, "python.json");
                assert_eq!(check, EntryCheck::MissingScope);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
