//! Typed, validated access to untyped configuration trees.

pub mod assert;
mod error;
mod file;
pub mod get;
mod node;
#[cfg(unix)]
pub mod signal;

pub use error::{ConfigError, ParseError};
pub use file::load_file;
pub use node::{Mapping, Node, NodeKind};
