//! OSC (Operating System Command) sequence interpretation dispatcher

mod clipboard;
mod hyperlink;
mod iterm;
mod notify;
mod shell;

use crate::action::Action;
use crate::debug;

/// Default maximum OSC payload length in bytes (1 MB)
const MAX_OSC_PAYLOAD_LENGTH: usize = 1_048_576;

/// An open hyperlink span awaiting its closing OSC 8 sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveHyperlink {
    /// Target URL
    pub url: String,
    /// Optional link id from the `id=` parameter
    pub id: Option<String>,
    /// Row the span was opened on
    pub start_row: usize,
    /// Column the span was opened at
    pub start_col: usize,
}

/// Stateful interpreter translating decoded OSC payloads into [`Action`]s
///
/// One instance per terminal session. The byte-level decoder hands each
/// recognized sequence to [`parse`](Self::parse) together with the current
/// cursor position and terminal width; the returned actions are applied by
/// the caller in order. State that must survive between calls (prompt id,
/// segment start column, open hyperlink span) lives on this struct and is
/// only mutated inside `parse`.
#[derive(Debug, Clone)]
pub struct OscInterpreter {
    /// Prompt cycle counter, bumped on each OSC 133;A
    current_prompt_id: u64,
    /// Column where the in-progress prompt/input segment began
    current_segment_start_col: usize,
    /// Open hyperlink span, if any
    active_hyperlink: Option<ActiveHyperlink>,
    /// Payload size cap in bytes (0 disables the guard)
    max_payload_len: usize,
    /// Whether OSC 52 clipboard writes are honored
    allow_clipboard_write: bool,
}

impl Default for OscInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl OscInterpreter {
    /// Create a new interpreter with default settings
    pub fn new() -> Self {
        Self {
            current_prompt_id: 0,
            current_segment_start_col: 0,
            active_hyperlink: None,
            max_payload_len: MAX_OSC_PAYLOAD_LENGTH,
            allow_clipboard_write: true,
        }
    }

    /// Interpret one decoded OSC sequence
    ///
    /// `command` is the numeric OSC command, `payload` the text after the
    /// command number and its separator, `cursor_row`/`cursor_col` the
    /// cursor position at dispatch time, and `cols` the current terminal
    /// width. Unknown commands and malformed payloads produce an empty list
    /// and leave all persistent state unchanged.
    pub fn parse(
        &mut self,
        command: u16,
        payload: &str,
        cursor_row: usize,
        cursor_col: usize,
        cols: usize,
    ) -> Vec<Action> {
        debug::log_osc_dispatch(command, payload);

        // Reject excessively large payloads to prevent memory exhaustion
        if self.max_payload_len != 0 && payload.len() > self.max_payload_len {
            debug::log(
                debug::DebugLevel::Debug,
                "OSC",
                &format!(
                    "OSC payload too large: {} bytes (max {}), ignoring",
                    payload.len(),
                    self.max_payload_len
                ),
            );
            return Vec::new();
        }

        match command {
            8 => self.handle_hyperlink(payload, cursor_row, cursor_col, cols),
            9 | 99 | 777 => self.handle_notify(command, payload),
            52 => self.handle_clipboard(payload),
            133 => self.handle_shell(payload, cursor_row, cursor_col),
            1337 => self.handle_iterm(payload, cursor_row, cols),
            _ => {
                debug::log(
                    debug::DebugLevel::Debug,
                    "OSC",
                    &format!("Unsupported OSC command: {}", command),
                );
                Vec::new()
            }
        }
    }

    /// Get the current prompt cycle id
    pub fn current_prompt_id(&self) -> u64 {
        self.current_prompt_id
    }

    /// Get the column where the in-progress prompt/input segment began
    pub fn segment_start_col(&self) -> usize {
        self.current_segment_start_col
    }

    /// Get the open hyperlink span, if any
    pub fn active_hyperlink(&self) -> Option<&ActiveHyperlink> {
        self.active_hyperlink.as_ref()
    }

    /// Check whether OSC 52 clipboard writes are honored
    pub fn allow_clipboard_write(&self) -> bool {
        self.allow_clipboard_write
    }

    /// Set whether OSC 52 clipboard writes are honored
    ///
    /// When disabled, clipboard write sequences are silently ignored.
    /// Clipboard read requests are refused regardless of this setting.
    pub fn set_allow_clipboard_write(&mut self, allow: bool) {
        self.allow_clipboard_write = allow;
    }

    /// Get the payload size cap in bytes (0 means uncapped)
    pub fn max_payload_len(&self) -> usize {
        self.max_payload_len
    }

    /// Set the payload size cap in bytes (0 disables the guard)
    pub fn set_max_payload_len(&mut self, max: usize) {
        self.max_payload_len = max;
    }
}

#[cfg(test)]
mod tests;
