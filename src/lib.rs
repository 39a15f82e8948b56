//! A stateful OSC (Operating System Command) sequence interpreter
//!
//! This library translates decoded OSC payloads into discrete, consumer-ready
//! actions. It sits between a byte-level VT decoder (which recognizes
//! `ESC ] cmd ; payload ST/BEL` framing) and a terminal grid store (which
//! materializes segments onto cells); neither of those concerns lives here.
//!
//! ## Supported sequences
//! - **OSC 8**: hyperlink spans, tracked across calls and emitted as
//!   row-local segments when the span closes
//! - **OSC 9**: simple desktop notifications
//! - **OSC 52**: clipboard writes (read requests are refused)
//! - **OSC 99**: kitty-style structured notifications with urgency
//! - **OSC 133**: FinalTerm shell integration markers (prompt, command
//!   input, command finished)
//! - **OSC 777**: urxvt `notify` notifications
//! - **OSC 1337**: iTerm2 annotations and cursor shape changes
//!
//! One [`OscInterpreter`] instance per terminal session owns all cross-call
//! state (prompt id, segment start column, open hyperlink span). Calls must
//! be sequential; the interpreter performs no I/O and never blocks.

pub mod action;
pub mod debug;
pub mod interpreter;

pub use action::{Action, CursorShape, SemanticType, Urgency};
pub use interpreter::{ActiveHyperlink, OscInterpreter};
