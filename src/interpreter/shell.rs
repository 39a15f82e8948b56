//! Shell integration OSC sequence handling (OSC 133)
//!
//! FinalTerm-style markers emitted by shells to delimit the prompt, the
//! typed command, and its output:
//!
//! - `A` prompt start
//! - `B` command input start (prompt end)
//! - `C` command output start (input end)
//! - `D;<exit>` command finished
//!
//! `A` starts a new prompt cycle; `B` and `C` close off the column range
//! accumulated since the last boundary into `Prompt` / `CommandInput`
//! segments, and `D` drops a zero-width `CommandFinished` marker carrying
//! the exit code.

use crate::action::{Action, SemanticType};
use crate::debug;

use super::OscInterpreter;

impl OscInterpreter {
    pub(crate) fn handle_shell(
        &mut self,
        payload: &str,
        cursor_row: usize,
        cursor_col: usize,
    ) -> Vec<Action> {
        match payload.chars().next() {
            Some('A') => {
                self.current_prompt_id += 1;
                self.current_segment_start_col = cursor_col;
                Vec::new()
            }
            Some('B') => {
                let mut actions = Vec::new();
                if self.current_segment_start_col < cursor_col {
                    actions.push(Action::AddSegment {
                        row: cursor_row,
                        start_col: self.current_segment_start_col,
                        end_col: cursor_col,
                        kind: SemanticType::Prompt,
                        metadata: None,
                        prompt_id: self.current_prompt_id,
                    });
                }
                self.current_segment_start_col = cursor_col;
                actions
            }
            Some('C') => {
                // The segment origin stays where B left it; a following B
                // without a new A reuses it.
                if self.current_segment_start_col < cursor_col {
                    return vec![Action::AddSegment {
                        row: cursor_row,
                        start_col: self.current_segment_start_col,
                        end_col: cursor_col,
                        kind: SemanticType::CommandInput,
                        metadata: None,
                        prompt_id: self.current_prompt_id,
                    }];
                }
                Vec::new()
            }
            Some('D') => {
                let exit_code = payload.get(2..).filter(|code| !code.is_empty()).unwrap_or("0");
                vec![Action::AddSegment {
                    row: cursor_row,
                    start_col: cursor_col,
                    end_col: cursor_col,
                    kind: SemanticType::CommandFinished,
                    metadata: Some(exit_code.to_string()),
                    prompt_id: self.current_prompt_id,
                }]
            }
            _ => {
                debug::log(
                    debug::DebugLevel::Debug,
                    "OSC133",
                    &format!("Unsupported shell integration marker: {}", payload),
                );
                Vec::new()
            }
        }
    }
}
