//! Signal name resolution.
//!
//! The registry is built once from the signals the platform reports through
//! [`Signal::iterator`] and is read-only afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

use nix::sys::signal::Signal;
use tracing::debug;

static REGISTRY: LazyLock<HashMap<&'static str, Signal>> = LazyLock::new(|| {
    let registry: HashMap<_, _> = Signal::iterator().map(|sig| (sig.as_str(), sig)).collect();
    debug!(event = "config.signal.registry_built", signals = registry.len());
    registry
});

/// Resolves a signal name such as `"SIGINT"` or `" sigTrap "`.
///
/// Surrounding whitespace is ignored and matching is case-insensitive.
/// Unknown names return `None`.
pub fn lookup_signal(name: &str) -> Option<Signal> {
    let normalized = name.trim().to_uppercase();
    let found = REGISTRY.get(normalized.as_str()).copied();
    if found.is_none() {
        debug!(event = "config.signal.lookup_failed", name = name);
    }
    found
}

/// Every signal name the registry knows, sorted.
pub fn signal_names() -> Vec<&'static str> {
    let mut names: Vec<_> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_canonical_names() {
        assert_eq!(lookup_signal("SIGINT"), Some(Signal::SIGINT));
        assert_eq!(lookup_signal("SIGTERM"), Some(Signal::SIGTERM));
    }

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        assert_eq!(lookup_signal("\tSIGTERM      "), Some(Signal::SIGTERM));
        assert_eq!(lookup_signal("Sigsegv"), Some(Signal::SIGSEGV));
        assert_eq!(lookup_signal("sigTrap  "), Some(Signal::SIGTRAP));
        assert_eq!(lookup_signal("  SigInt "), lookup_signal("sigint"));
    }

    #[test]
    fn test_lookup_unknown_name() {
        assert_eq!(lookup_signal("SIGFART"), None);
        assert_eq!(lookup_signal(""), None);
        assert_eq!(lookup_signal("INT"), None);
    }

    #[test]
    fn test_signal_names_come_from_platform() {
        let names = signal_names();
        assert!(names.contains(&"SIGHUP"));
        assert!(names.contains(&"SIGKILL"));
        assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
