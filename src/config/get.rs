//! Typed getters.
//!
//! Every getter follows the same rule: an absent key yields the caller's
//! default untouched, a present key must pass the matching assertion from
//! [`assert`](super::assert) or the [`ParseError`] is returned.

use std::collections::BTreeMap;
use std::time::Duration;

#[cfg(unix)]
use nix::sys::signal::Signal;
use tracing::trace;

use super::assert::{
    assert_is_bool, assert_is_int, assert_is_map, assert_is_string, assert_is_string_array,
    assert_is_string_map,
};
#[cfg(unix)]
use super::signal::lookup_signal;
use super::{Mapping, Node, ParseError};

/// Returns the raw value stored under `key`, without any type check.
pub fn get_map_item<'a>(mapping: &'a Mapping, key: &str) -> Option<&'a Node> {
    let item = mapping.get(key);
    if item.is_none() {
        trace!(event = "config.get.key_absent", key = key);
    }
    item
}

pub fn get_bool(mapping: &Mapping, key: &str, default: bool) -> Result<bool, ParseError> {
    match get_map_item(mapping, key) {
        Some(value) => assert_is_bool(key, value),
        None => Ok(default),
    }
}

pub fn get_string(
    mapping: &Mapping,
    key: &str,
    default: impl Into<String>,
) -> Result<String, ParseError> {
    match get_map_item(mapping, key) {
        Some(value) => assert_is_string(key, value).map(str::to_owned),
        None => Ok(default.into()),
    }
}

pub fn get_int(mapping: &Mapping, key: &str, default: i64) -> Result<i64, ParseError> {
    match get_map_item(mapping, key) {
        Some(value) => assert_is_int(key, value),
        None => Ok(default),
    }
}

/// Returns the strings in document order.
pub fn get_string_array(
    mapping: &Mapping,
    key: &str,
    default: Vec<String>,
) -> Result<Vec<String>, ParseError> {
    match get_map_item(mapping, key) {
        Some(value) => Ok(assert_is_string_array(key, value)?
            .into_iter()
            .map(str::to_owned)
            .collect()),
        None => Ok(default),
    }
}

/// Reads an integer number of seconds.
///
/// The default is already a [`Duration`] and is returned as given. Negative
/// values fail with the `"duration"` label.
pub fn get_duration(
    mapping: &Mapping,
    key: &str,
    default: Duration,
) -> Result<Duration, ParseError> {
    match get_map_item(mapping, key) {
        Some(value) => {
            let seconds = assert_is_int(key, value)?;
            u64::try_from(seconds)
                .map(Duration::from_secs)
                .map_err(|_| ParseError::new(key, value, "duration"))
        }
        None => Ok(default),
    }
}

/// Reads a signal name and resolves it through the platform registry.
///
/// An unknown name fails with the `"signal"` label, citing the value as it
/// appears in the document.
#[cfg(unix)]
pub fn get_signal(mapping: &Mapping, key: &str, default: Signal) -> Result<Signal, ParseError> {
    match get_map_item(mapping, key) {
        Some(value) => {
            let name = assert_is_string(key, value)?;
            lookup_signal(name).ok_or_else(|| ParseError::new(key, value, "signal"))
        }
        None => Ok(default),
    }
}

/// Returns the nested section under `key`, or `None` when it is absent.
pub fn get_map<'a>(mapping: &'a Mapping, key: &str) -> Result<Option<&'a Mapping>, ParseError> {
    get_map_item(mapping, key)
        .map(|value| assert_is_map(key, value))
        .transpose()
}

pub fn get_string_map(
    mapping: &Mapping,
    key: &str,
    default: BTreeMap<String, String>,
) -> Result<BTreeMap<String, String>, ParseError> {
    let Some(value) = get_map_item(mapping, key) else {
        return Ok(default);
    };
    let entries = assert_is_string_map(key, value)?;
    Ok(entries
        .iter()
        .filter_map(|(name, item)| match (name, item) {
            (Node::String(name), Node::String(item)) => Some((name.clone(), item.clone())),
            _ => None,
        })
        .collect())
}

/// Checks that `path` names a value through nested mappings.
///
/// Every key except the last must name a mapping. An empty path is present.
pub fn has_path(mapping: &Mapping, path: &[&str]) -> bool {
    match path {
        [] => true,
        [last] => mapping.contains_key(last),
        [first, rest @ ..] => match mapping.get(first) {
            Some(Node::Map(nested)) => has_path(nested, rest),
            _ => false,
        },
    }
}
