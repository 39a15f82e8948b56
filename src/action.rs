//! Actions produced by the OSC interpreter
//!
//! This module defines the discrete actions handed to the embedding
//! terminal: semantic segments, cursor shape changes, clipboard writes, and
//! desktop notifications. Actions are plain data; applying them (writing the
//! OS clipboard, annotating grid cells, raising a notification) is the
//! consumer's job.

use serde::{Deserialize, Serialize};

/// Semantic classification of a labeled column range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SemanticType {
    /// Shell prompt text (between OSC 133;A and OSC 133;B)
    Prompt,
    /// Command input text (between OSC 133;B and OSC 133;C)
    CommandInput,
    /// Zero-width marker where a command finished (OSC 133;D)
    CommandFinished,
    /// Hyperlink span (OSC 8)
    Hyperlink,
    /// Free-form annotation spanning the row (OSC 1337 AddAnnotation)
    Annotation,
}

impl std::fmt::Display for SemanticType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SemanticType::Prompt => write!(f, "prompt"),
            SemanticType::CommandInput => write!(f, "command_input"),
            SemanticType::CommandFinished => write!(f, "command_finished"),
            SemanticType::Hyperlink => write!(f, "hyperlink"),
            SemanticType::Annotation => write!(f, "annotation"),
        }
    }
}

/// Cursor shape requested via OSC 1337 SetCursorShape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorShape {
    /// Filled block covering the cell (shape 0)
    #[default]
    Block,
    /// Vertical bar at the left cell edge (shape 1)
    BarLeft,
    /// Underline along the cell baseline (shape 2)
    Underline,
}

impl CursorShape {
    /// Parse a shape from its SetCursorShape parameter
    pub fn from_param(param: u8) -> Self {
        match param {
            0 => Self::Block,
            1 => Self::BarLeft,
            2 => Self::Underline,
            _ => Self::Block, // Unknown shapes default to block
        }
    }

    /// Convert the shape back to its SetCursorShape parameter value
    pub fn to_param(self) -> u8 {
        match self {
            Self::Block => 0,
            Self::BarLeft => 1,
            Self::Underline => 2,
        }
    }
}

impl std::fmt::Display for CursorShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CursorShape::Block => write!(f, "block"),
            CursorShape::BarLeft => write!(f, "bar_left"),
            CursorShape::Underline => write!(f, "underline"),
        }
    }
}

/// Desktop notification urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Urgency {
    /// Low priority (0)
    Low,
    /// Normal priority (1)
    #[default]
    Normal,
    /// Critical priority (2)
    Critical,
}

impl Urgency {
    /// Remap a kitty OSC 99 `e=` value (0-5+) onto the three-level scale
    pub fn from_kitty_param(param: u8) -> Self {
        match param {
            0 | 1 => Self::Low,
            2 => Self::Normal,
            _ => Self::Critical,
        }
    }

    /// Convert the urgency to its numeric value
    pub fn to_param(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Normal => 1,
            Self::Critical => 2,
        }
    }
}

/// Discrete action for the embedding terminal to apply
///
/// Actions are immutable once constructed and must be applied in the order
/// they were returned from [`crate::OscInterpreter::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// A labeled column range on one row
    AddSegment {
        /// Row the segment lies on
        row: usize,
        /// First column of the segment (inclusive)
        start_col: usize,
        /// End column of the segment (exclusive); equals `start_col` only
        /// for `CommandFinished` markers
        end_col: usize,
        /// Semantic classification of the range
        kind: SemanticType,
        /// Kind-specific payload: the URL for hyperlinks, the exit code for
        /// finished commands, the message for annotations
        metadata: Option<String>,
        /// Prompt cycle the segment belongs to
        prompt_id: u64,
    },
    /// Change the cursor shape
    SetCursorShape {
        /// Requested shape
        shape: CursorShape,
    },
    /// Write decoded text to a clipboard selection
    ClipboardCopy {
        /// Selection target as sent on the wire (may be empty)
        selection: String,
        /// Decoded clipboard text (may be empty)
        data: String,
    },
    /// Raise a desktop notification
    Notification {
        /// Notification title; `None` when the wire format carries none
        title: Option<String>,
        /// Notification body
        body: String,
        /// Delivery urgency
        urgency: Urgency,
    },
}
