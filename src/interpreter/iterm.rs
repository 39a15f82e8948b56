//! iTerm2 OSC 1337 sequence handling

use crate::action::{Action, CursorShape, SemanticType};
use crate::debug;

use super::OscInterpreter;

impl OscInterpreter {
    pub(crate) fn handle_iterm(
        &mut self,
        payload: &str,
        cursor_row: usize,
        cols: usize,
    ) -> Vec<Action> {
        if let Some(message) = payload.strip_prefix("AddAnnotation=") {
            return vec![Action::AddSegment {
                row: cursor_row,
                start_col: 0,
                end_col: cols,
                kind: SemanticType::Annotation,
                metadata: Some(message.to_string()),
                prompt_id: self.current_prompt_id,
            }];
        }

        if let Some(value) = payload.strip_prefix("SetCursorShape=") {
            let shape = value
                .trim()
                .parse::<u8>()
                .map(CursorShape::from_param)
                .unwrap_or(CursorShape::Block);
            return vec![Action::SetCursorShape { shape }];
        }

        debug::log(
            debug::DebugLevel::Debug,
            "OSC1337",
            &format!("Unsupported OSC 1337 payload: {}", payload),
        );
        Vec::new()
    }
}
