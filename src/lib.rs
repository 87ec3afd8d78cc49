pub mod config;
mod error;

pub use config::assert::assert_has_keys;
pub use config::get::{
    get_bool, get_duration, get_int, get_map, get_map_item, get_string, get_string_array,
    get_string_map, has_path,
};
#[cfg(unix)]
pub use config::get::get_signal;
#[cfg(unix)]
pub use config::signal::lookup_signal;
pub use config::{load_file, ConfigError, Mapping, Node, NodeKind, ParseError};
pub use error::Error;
