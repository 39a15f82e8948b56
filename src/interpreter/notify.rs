//! Notification OSC sequence handling (OSC 9, 99, 777)
//!
//! Three unrelated notification conventions are normalized onto one
//! [`Action::Notification`] shape:
//!
//! - OSC 9 (iTerm2/ConEmu): the payload is the body, verbatim
//! - OSC 99 (kitty): `key=value` fields plus one bare body/title field
//! - OSC 777 (urxvt): `notify;title;body`

use crate::action::{Action, Urgency};
use crate::debug;

use super::OscInterpreter;

impl OscInterpreter {
    pub(crate) fn handle_notify(&mut self, command: u16, payload: &str) -> Vec<Action> {
        match command {
            9 => self.handle_notify_simple(payload),
            99 => self.handle_notify_kitty(payload),
            777 => self.handle_notify_urxvt(payload),
            _ => Vec::new(),
        }
    }

    fn handle_notify_simple(&mut self, payload: &str) -> Vec<Action> {
        if payload.trim().is_empty() {
            return Vec::new();
        }

        vec![Action::Notification {
            title: None,
            body: payload.to_string(),
            urgency: Urgency::Normal,
        }]
    }

    fn handle_notify_kitty(&mut self, payload: &str) -> Vec<Action> {
        let mut payload_type: Option<&str> = None;
        let mut urgency = Urgency::Normal;
        let mut body_field: Option<&str> = None;
        let mut bare: Option<&str> = None;

        for field in payload.split(';') {
            if let Some((key, value)) = field.split_once('=') {
                match key {
                    "p" => payload_type = Some(value),
                    "e" => {
                        urgency = value
                            .trim()
                            .parse::<u8>()
                            .map(Urgency::from_kitty_param)
                            .unwrap_or_default();
                    }
                    // Notification id, unused downstream
                    "i" => {}
                    "body" => body_field = Some(value),
                    _ => {}
                }
            } else {
                bare = Some(field);
            }
        }

        let (title, body) = if payload_type == Some("title") {
            (bare, body_field.unwrap_or(""))
        } else {
            (None, bare.unwrap_or(""))
        };

        let title = title
            .filter(|t| !t.trim().is_empty())
            .map(|t| t.to_string());

        if title.is_none() && body.trim().is_empty() {
            debug::log(
                debug::DebugLevel::Debug,
                "OSC99",
                "Blank notification, ignoring",
            );
            return Vec::new();
        }

        vec![Action::Notification {
            title,
            body: body.to_string(),
            urgency,
        }]
    }

    fn handle_notify_urxvt(&mut self, payload: &str) -> Vec<Action> {
        // The body is the third field and may itself contain semicolons
        let mut fields = payload.splitn(3, ';');
        let subcommand = fields.next().unwrap_or("");

        if subcommand != "notify" {
            debug::log(
                debug::DebugLevel::Debug,
                "OSC777",
                &format!("Unsupported OSC 777 subcommand: {}", subcommand),
            );
            return Vec::new();
        }

        let title_field = fields.next().unwrap_or("");
        let body_field = fields.next().unwrap_or("");

        let title = if title_field.trim().is_empty() {
            None
        } else {
            Some(title_field.to_string())
        };

        let body = if body_field.trim().is_empty() {
            title.clone().unwrap_or_default()
        } else {
            body_field.to_string()
        };

        if title.is_none() && body.trim().is_empty() {
            return Vec::new();
        }

        vec![Action::Notification {
            title,
            body,
            urgency: Urgency::Normal,
        }]
    }
}
