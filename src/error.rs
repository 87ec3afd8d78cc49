use crate::config::{ConfigError, ParseError};
use thiserror::Error;

/// Top-level error type for the yamlcfg library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Node;

    #[test]
    fn test_parse_error_message_is_unchanged() {
        let err = Error::from(ParseError::new("stuff", &Node::from("x"), "bool"));
        assert_eq!(err.to_string(), "config failed to parse {stuff: x} as bool");
    }

    #[test]
    fn test_config_error_is_prefixed() {
        let err = Error::from(ConfigError::FileNotFound("app.yaml".into()));
        assert_eq!(
            err.to_string(),
            "configuration error: required config file not found: app.yaml"
        );
    }
}
