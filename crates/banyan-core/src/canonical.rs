//! Canonical JSON rendering.
//!
//! The integrity-hash contract depends on one byte-stable serialization:
//! object keys sorted recursively, compact separators, no trailing
//! whitespace. `pretty_string` shares the same key ordering for the
//! artifacts operators actually read.

use serde_json::{Map, Value};

/// Rebuild a JSON value with object keys sorted recursively.
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = Map::new();
            for key in keys {
                sorted.insert(key.clone(), canonicalize(&map[key]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

/// Compact canonical serialization. This is the hash input format.
pub fn canonical_string(value: &Value) -> serde_json::Result<String> {
    serde_json::to_string(&canonicalize(value))
}

/// Pretty canonical rendering (two-space indent, trailing newline) for
/// persisted documents meant to be read and diffed.
pub fn pretty_string(value: &Value) -> serde_json::Result<String> {
    let mut rendered = serde_json::to_string_pretty(&canonicalize(value))?;
    rendered.push('\n');
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn sorts_keys_recursively() {
        let value = json!({
            "zeta": {"beta": 2, "alpha": 1},
            "alpha": [{"b": true, "a": false}],
        });
        let rendered = canonical_string(&value).unwrap();
        assert_eq!(
            rendered,
            r#"{"alpha":[{"a":false,"b":true}],"zeta":{"alpha":1,"beta":2}}"#
        );
    }

    #[test]
    fn compact_form_has_no_whitespace() {
        let rendered = canonical_string(&json!({"a": 1, "b": [1, 2]})).unwrap();
        assert!(!rendered.contains(' '));
        assert!(!rendered.contains('\n'));
    }

    #[test]
    fn rendering_is_deterministic() {
        let value = json!({"c": 3, "a": 1, "b": {"y": 2, "x": 1}});
        assert_eq!(
            canonical_string(&value).unwrap(),
            canonical_string(&value).unwrap()
        );
    }

    #[test]
    fn arrays_keep_element_order() {
        let rendered = canonical_string(&json!([3, 1, 2])).unwrap();
        assert_eq!(rendered, "[3,1,2]");
    }

    #[test]
    fn pretty_form_ends_with_newline() {
        let rendered = pretty_string(&json!({"b": 2, "a": 1})).unwrap();
        assert!(rendered.ends_with('\n'));
        assert!(rendered.find("\"a\"").unwrap() < rendered.find("\"b\"").unwrap());
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(canonical_string(&json!(null)).unwrap(), "null");
        assert_eq!(canonical_string(&json!("text")).unwrap(), "\"text\"");
        assert_eq!(canonical_string(&json!(42)).unwrap(), "42");
    }
}
