use std::path::PathBuf;
use thiserror::Error;

use super::Node;

/// A configuration value that is missing or has the wrong shape.
///
/// This is the only error produced by the assertion primitives and typed
/// getters. Its rendered message is meant to be shown to the operator as-is.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error("config failed to parse {value} as {expected}")]
    Value { value: Node, expected: String },

    #[error("config failed to parse {{{key}: {value}}} as {expected}")]
    Keyed {
        key: String,
        value: Node,
        expected: String,
    },

    #[error("config key {{{key}: ?}} not found in {location}")]
    KeyNotFound { key: String, location: String },
}

impl ParseError {
    /// Creates a type error for `value`. An empty `key` produces the
    /// unkeyed form of the message.
    pub fn new(key: &str, value: &Node, expected: impl Into<String>) -> Self {
        let value = value.clone();
        let expected = expected.into();
        if key.is_empty() {
            ParseError::Value { value, expected }
        } else {
            ParseError::Keyed {
                key: key.to_owned(),
                value,
                expected,
            }
        }
    }

    pub fn key_not_found(key: &str, location: impl Into<String>) -> Self {
        ParseError::KeyNotFound {
            key: key.to_owned(),
            location: location.into(),
        }
    }

    /// The offending key, if the error names one.
    pub fn key(&self) -> Option<&str> {
        match self {
            ParseError::Value { .. } => None,
            ParseError::Keyed { key, .. } | ParseError::KeyNotFound { key, .. } => Some(key),
        }
    }

    /// The expected type label, if this is a type error.
    pub fn expected(&self) -> Option<&str> {
        match self {
            ParseError::Value { expected, .. } | ParseError::Keyed { expected, .. } => {
                Some(expected)
            }
            ParseError::KeyNotFound { .. } => None,
        }
    }
}

/// Failure to turn a file into a configuration tree.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("required config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    YamlSyntax {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    TomlSyntax {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("unsupported config file format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_message() {
        let err = ParseError::new("stuff", &Node::from("invalid"), "int");
        assert_eq!(
            err.to_string(),
            "config failed to parse {stuff: invalid} as int"
        );
        assert_eq!(err.key(), Some("stuff"));
        assert_eq!(err.expected(), Some("int"));
    }

    #[test]
    fn test_unkeyed_message() {
        let value = Node::Seq(vec![Node::Int(1), Node::Int(2)]);
        let err = ParseError::new("", &value, "string array");
        assert_eq!(err.to_string(), "config failed to parse [1 2] as string array");
        assert_eq!(err.key(), None);
    }

    #[test]
    fn test_key_not_found_message() {
        let err = ParseError::key_not_found("listen", "server");
        assert_eq!(err.to_string(), "config key {listen: ?} not found in server");
        assert_eq!(err.expected(), None);
    }

    #[test]
    fn test_config_error_is_transparent_for_parse_errors() {
        let err = ConfigError::from(ParseError::new("", &Node::Int(3), "map"));
        assert_eq!(err.to_string(), "config failed to parse 3 as map");
    }
}
