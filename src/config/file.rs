//! Loading configuration documents from disk.

use std::path::Path;

use tracing::debug;

use super::assert::assert_is_map;
use super::{ConfigError, Mapping, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Format::Yaml),
            "toml" => Some(Format::Toml),
            _ => None,
        }
    }
}

/// Loads a YAML or TOML file and returns its root mapping.
///
/// The format is chosen by extension. Returns `Ok(None)` if the file doesn't
/// exist and `required` is false. A document whose root is not a mapping is
/// rejected with an unkeyed [`ParseError`](super::ParseError).
pub fn load_file(path: impl AsRef<Path>, required: bool) -> Result<Option<Mapping>, ConfigError> {
    let path = path.as_ref();
    let format =
        Format::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;

    debug!(event = "config.file.load_started", path = %path.display(), required = required);

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if required {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            debug!(event = "config.file.optional_missing", path = %path.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let root = match format {
        Format::Yaml => Node::from_yaml_str(&contents).map_err(|e| ConfigError::YamlSyntax {
            path: path.to_path_buf(),
            source: e,
        })?,
        Format::Toml => Node::from_toml_str(&contents).map_err(|e| ConfigError::TomlSyntax {
            path: path.to_path_buf(),
            source: e,
        })?,
    };

    let mapping = assert_is_map("", &root)?.clone();
    debug!(
        event = "config.file.load_completed",
        path = %path.display(),
        keys = mapping.len()
    );
    Ok(Some(mapping))
}
