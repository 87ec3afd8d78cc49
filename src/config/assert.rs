//! Assertion primitives.
//!
//! Each primitive checks that a node has a claimed shape and hands back the
//! classified contents, or fails with a [`ParseError`] naming the key, the
//! offending value and the expected type. There is no coercion between
//! kinds: the string `"true"` is not a bool and `1.0` is not an int.

use tracing::debug;

use super::{Mapping, Node, ParseError};

/// Fails with [`ParseError::KeyNotFound`] for the first of `keys` missing
/// from `mapping`. Keys are checked in the order given.
pub fn assert_has_keys(
    mapping: &Mapping,
    keys: &[&str],
    location: &str,
) -> Result<(), ParseError> {
    match keys.iter().find(|key| !mapping.contains_key(key)) {
        Some(key) => {
            debug!(event = "config.keys.missing", key = *key, location = location);
            Err(ParseError::key_not_found(key, location))
        }
        None => Ok(()),
    }
}

pub fn assert_is_bool(key: &str, value: &Node) -> Result<bool, ParseError> {
    match value {
        Node::Bool(b) => Ok(*b),
        _ => Err(ParseError::new(key, value, "bool")),
    }
}

pub fn assert_is_string<'a>(key: &str, value: &'a Node) -> Result<&'a str, ParseError> {
    match value {
        Node::String(s) => Ok(s),
        _ => Err(ParseError::new(key, value, "string")),
    }
}

pub fn assert_is_int(key: &str, value: &Node) -> Result<i64, ParseError> {
    match value {
        Node::Int(i) => Ok(*i),
        _ => Err(ParseError::new(key, value, "int")),
    }
}

/// Accepts any sequence, whatever its element types.
pub fn assert_is_array<'a>(key: &str, value: &'a Node) -> Result<&'a [Node], ParseError> {
    match value {
        Node::Seq(items) => Ok(items),
        _ => Err(ParseError::new(key, value, "array")),
    }
}

/// Accepts a sequence of strings. A non-string element is reported against
/// the whole sequence, not the element.
pub fn assert_is_string_array<'a>(
    key: &str,
    value: &'a Node,
) -> Result<Vec<&'a str>, ParseError> {
    assert_is_array(key, value)?
        .iter()
        .map(|item| match item {
            Node::String(s) => Ok(s.as_str()),
            _ => Err(ParseError::new(key, value, "string array")),
        })
        .collect()
}

pub fn assert_is_map<'a>(key: &str, value: &'a Node) -> Result<&'a Mapping, ParseError> {
    match value {
        Node::Map(mapping) => Ok(mapping),
        _ => Err(ParseError::new(key, value, "map")),
    }
}

/// Accepts a mapping whose keys and values are all strings.
///
/// Only the first offending entry in iteration order is reported.
pub fn assert_is_string_map<'a>(key: &str, value: &'a Node) -> Result<&'a Mapping, ParseError> {
    let mapping = assert_is_map(key, value)?;
    for (name, item) in mapping.iter() {
        if !matches!(name, Node::String(_)) {
            return Err(ParseError::new(key, value, "map key"));
        }
        if !matches!(item, Node::String(_)) {
            return Err(ParseError::new(key, value, "map value"));
        }
    }
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Node {
        Node::Seq(items.iter().map(|s| Node::from(*s)).collect())
    }

    #[test]
    fn test_assert_has_keys_all_present() {
        let mapping: Mapping = [("a", 1i64), ("b", 2), ("extra", 3)].into_iter().collect();
        assert!(assert_has_keys(&mapping, &["a", "b"], "root").is_ok());
        assert!(assert_has_keys(&mapping, &[], "root").is_ok());
    }

    #[test]
    fn test_assert_has_keys_reports_first_missing_in_caller_order() {
        let mapping: Mapping = [("b", 2i64)].into_iter().collect();
        let err = assert_has_keys(&mapping, &["b", "z", "a"], "server").unwrap_err();
        assert_eq!(err, ParseError::key_not_found("z", "server"));
        assert_eq!(err.to_string(), "config key {z: ?} not found in server");
    }

    #[test]
    fn test_scalar_assertions_accept_exact_kind() {
        assert_eq!(assert_is_bool("k", &Node::Bool(true)), Ok(true));
        assert_eq!(assert_is_string("k", &Node::from("v")), Ok("v"));
        assert_eq!(assert_is_int("k", &Node::Int(-4)), Ok(-4));
    }

    #[test]
    fn test_scalar_assertions_do_not_coerce() {
        let err = assert_is_bool("flag", &Node::from("true")).unwrap_err();
        assert_eq!(err.to_string(), "config failed to parse {flag: true} as bool");

        let err = assert_is_int("count", &Node::from("12")).unwrap_err();
        assert_eq!(err.expected(), Some("int"));

        assert!(assert_is_int("ratio", &Node::Float(1.0)).is_err());
        assert!(assert_is_string("name", &Node::Int(5)).is_err());
        assert!(assert_is_string("name", &Node::Null).is_err());
    }

    #[test]
    fn test_assert_is_array_accepts_mixed_elements() {
        let value = Node::Seq(vec![Node::Int(1), Node::from("two")]);
        assert_eq!(assert_is_array("k", &value).map(<[Node]>::len), Ok(2));

        let err = assert_is_array("k", &Node::from("nope")).unwrap_err();
        assert_eq!(err.expected(), Some("array"));
    }

    #[test]
    fn test_assert_is_string_array() {
        let value = strings(&["b", "a", "c"]);
        assert_eq!(assert_is_string_array("k", &value), Ok(vec!["b", "a", "c"]));
    }

    #[test]
    fn test_assert_is_string_array_rejects_non_string_element() {
        let value = Node::Seq(vec![Node::from("a"), Node::Int(2)]);
        let err = assert_is_string_array("names", &value).unwrap_err();
        assert_eq!(
            err.to_string(),
            "config failed to parse {names: [a 2]} as string array"
        );
    }

    #[test]
    fn test_assert_is_string_array_rejects_non_sequence() {
        let err = assert_is_string_array("names", &Node::from("a")).unwrap_err();
        assert_eq!(err.expected(), Some("array"));
    }

    #[test]
    fn test_assert_is_map() {
        let value = Node::Map([("a", "b")].into_iter().collect());
        assert!(assert_is_map("k", &value).is_ok());

        let err = assert_is_map("", &Node::Int(3)).unwrap_err();
        assert_eq!(err.to_string(), "config failed to parse 3 as map");
    }

    #[test]
    fn test_assert_is_string_map() {
        let value = Node::Map([("a", "b"), ("c", "d")].into_iter().collect());
        assert_eq!(assert_is_string_map("env", &value).map(Mapping::len), Ok(2));
    }

    #[test]
    fn test_assert_is_string_map_rejects_non_string_key() {
        let mut mapping = Mapping::new();
        mapping.insert(Node::Int(1), "one");
        let err = assert_is_string_map("env", &Node::Map(mapping)).unwrap_err();
        assert_eq!(err.expected(), Some("map key"));
    }

    #[test]
    fn test_assert_is_string_map_rejects_non_string_value() {
        let mut mapping = Mapping::new();
        mapping.insert("debug", true);
        let err = assert_is_string_map("env", &Node::Map(mapping)).unwrap_err();
        assert_eq!(err.expected(), Some("map value"));
        assert_eq!(err.key(), Some("env"));
    }

    #[test]
    fn test_assert_is_string_map_with_several_bad_entries_fails() {
        let mut mapping = Mapping::new();
        mapping.insert("a", 1i64);
        mapping.insert(Node::Bool(false), "b");
        mapping.insert("c", Node::Null);
        assert!(assert_is_string_map("env", &Node::Map(mapping)).is_err());
    }
}
