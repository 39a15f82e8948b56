//! Clipboard OSC sequence handling (OSC 52)

use crate::action::Action;
use crate::debug;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use super::OscInterpreter;

impl OscInterpreter {
    pub(crate) fn handle_clipboard(&mut self, payload: &str) -> Vec<Action> {
        // Format: selection ; base64-data
        let Some((selection, data)) = payload.split_once(';') else {
            debug::log(
                debug::DebugLevel::Debug,
                "OSC52",
                "Missing selection/data separator, ignoring",
            );
            return Vec::new();
        };

        if !self.allow_clipboard_write {
            debug::log(
                debug::DebugLevel::Debug,
                "OSC52",
                "Clipboard writes disabled, ignoring",
            );
            return Vec::new();
        }

        // Read requests are never honored
        if data == "?" {
            debug::log(
                debug::DebugLevel::Debug,
                "OSC52",
                "Refusing clipboard read request",
            );
            return Vec::new();
        }

        if data.is_empty() {
            return vec![Action::ClipboardCopy {
                selection: selection.to_string(),
                data: String::new(),
            }];
        }

        // Callers that pre-decode send plain text here; a failed decode (or
        // one that yields non-UTF-8 bytes) falls back to the raw payload.
        let decoded = match BASE64.decode(data.as_bytes()) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(_) => data.to_string(),
            },
            Err(_) => data.to_string(),
        };

        vec![Action::ClipboardCopy {
            selection: selection.to_string(),
            data: decoded,
        }]
    }
}
