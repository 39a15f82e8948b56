//! Debug logging utilities
//!
//! Diagnostics are off by default; the `TERM_OSC_INTERP_DEBUG` environment
//! variable selects a level (`error`, `warn`, `info`, `debug`, `trace`, or
//! the equivalent number 1-5). Messages go to stderr with their category so
//! individual sequence families can be grepped out of a session log.

use std::sync::OnceLock;

/// Logging verbosity, in increasing order of detail
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    /// Logging disabled
    Off,
    /// Unrecoverable problems
    Error,
    /// Suspicious input worth surfacing
    Warn,
    /// High-level lifecycle messages
    Info,
    /// Per-sequence decisions (rejected payloads, state transitions)
    Debug,
    /// Every dispatched sequence
    Trace,
}

impl DebugLevel {
    fn from_env(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "error" => Self::Error,
            "2" | "warn" => Self::Warn,
            "3" | "info" => Self::Info,
            "4" | "debug" => Self::Debug,
            "5" | "trace" => Self::Trace,
            _ => Self::Off,
        }
    }
}

static LEVEL: OnceLock<DebugLevel> = OnceLock::new();

/// Current logging level, read from the environment once and cached
pub fn level() -> DebugLevel {
    *LEVEL.get_or_init(|| {
        std::env::var("TERM_OSC_INTERP_DEBUG")
            .map(|value| DebugLevel::from_env(&value))
            .unwrap_or(DebugLevel::Off)
    })
}

/// Check whether messages at `at` are currently emitted
pub fn enabled(at: DebugLevel) -> bool {
    at != DebugLevel::Off && at <= level()
}

/// Log a message under a category (e.g. "OSC52") at the given level
pub fn log(at: DebugLevel, category: &str, message: &str) {
    if enabled(at) {
        eprintln!("[{}] {}", category, message);
    }
}

/// Trace-log a dispatched sequence before any handler runs
pub fn log_osc_dispatch(command: u16, payload: &str) {
    if enabled(DebugLevel::Trace) {
        eprintln!(
            "[OSC] dispatch command={} payload_len={}",
            command,
            payload.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parsing() {
        assert_eq!(DebugLevel::from_env("debug"), DebugLevel::Debug);
        assert_eq!(DebugLevel::from_env("4"), DebugLevel::Debug);
        assert_eq!(DebugLevel::from_env("TRACE"), DebugLevel::Trace);
        assert_eq!(DebugLevel::from_env(""), DebugLevel::Off);
        assert_eq!(DebugLevel::from_env("nonsense"), DebugLevel::Off);
    }

    #[test]
    fn test_level_ordering() {
        assert!(DebugLevel::Trace > DebugLevel::Debug);
        assert!(DebugLevel::Debug > DebugLevel::Info);
        assert!(DebugLevel::Off < DebugLevel::Error);
    }
}
