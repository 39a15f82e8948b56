//! Hyperlink OSC sequence handling (OSC 8)
//!
//! ## Protocol Format
//!
//! `OSC 8 ; params ; url ST` opens a hyperlink span at the cursor; a later
//! `OSC 8 ; ; ST` (empty url) closes it. `params` is a `:`-separated list of
//! `key=value` pairs; only `id` is interpreted.
//!
//! At most one span is open at a time. A span is recorded when it opens and
//! emitted as a row-local [`Action::AddSegment`] when it closes; a span the
//! cursor abandoned (new link on another row, or no column advance) is
//! discarded without a segment. A span left open across a line break is
//! truncated to its starting row, extended to the full row width.

use crate::action::{Action, SemanticType};
use crate::debug;

use super::{ActiveHyperlink, OscInterpreter};

impl OscInterpreter {
    pub(crate) fn handle_hyperlink(
        &mut self,
        payload: &str,
        cursor_row: usize,
        cursor_col: usize,
        cols: usize,
    ) -> Vec<Action> {
        let Some((params, url)) = payload.split_once(';') else {
            debug::log(
                debug::DebugLevel::Debug,
                "OSC8",
                "Missing params/url separator, ignoring",
            );
            return Vec::new();
        };

        let url = url.trim();
        if url.is_empty() {
            return self.close_hyperlink(cursor_row, cursor_col, cols);
        }

        let id = params.split(':').find_map(|param| {
            param
                .split_once('=')
                .filter(|(key, _)| *key == "id")
                .map(|(_, value)| value.to_string())
        });

        let mut actions = Vec::new();
        if let Some(open) = self.active_hyperlink.take() {
            // Starting a new link closes the previous span when it covers at
            // least one column on the same row; otherwise it is dropped.
            if open.start_row == cursor_row && open.start_col < cursor_col {
                actions.push(Action::AddSegment {
                    row: open.start_row,
                    start_col: open.start_col,
                    end_col: cursor_col,
                    kind: SemanticType::Hyperlink,
                    metadata: Some(open.url),
                    prompt_id: self.current_prompt_id,
                });
            } else {
                debug::log(
                    debug::DebugLevel::Debug,
                    "OSC8",
                    &format!("Discarding unterminated hyperlink span: {}", open.url),
                );
            }
        }

        self.active_hyperlink = Some(ActiveHyperlink {
            url: url.to_string(),
            id,
            start_row: cursor_row,
            start_col: cursor_col,
        });

        actions
    }

    fn close_hyperlink(&mut self, cursor_row: usize, cursor_col: usize, cols: usize) -> Vec<Action> {
        let Some(open) = self.active_hyperlink.take() else {
            return Vec::new();
        };

        if open.start_row == cursor_row {
            if open.start_col < cursor_col {
                return vec![Action::AddSegment {
                    row: cursor_row,
                    start_col: open.start_col,
                    end_col: cursor_col,
                    kind: SemanticType::Hyperlink,
                    metadata: Some(open.url),
                    prompt_id: self.current_prompt_id,
                }];
            }
            // Zero-width span, nothing to annotate
            return Vec::new();
        }

        // The cursor left the row while the link was open; the span is
        // truncated to the starting row, extended to the full row width.
        if open.start_col < cols {
            return vec![Action::AddSegment {
                row: open.start_row,
                start_col: open.start_col,
                end_col: cols,
                kind: SemanticType::Hyperlink,
                metadata: Some(open.url),
                prompt_id: self.current_prompt_id,
            }];
        }

        Vec::new()
    }
}
