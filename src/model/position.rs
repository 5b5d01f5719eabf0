//! Position types for context-window extraction.

use serde::{Deserialize, Serialize};

/// A caret or selection inside a block sequence.
///
/// Positions address blocks by index in document order; previous/next
/// siblings are the neighboring indices. The host collaborator is
/// responsible for mapping its own cursor model onto these indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Position {
    /// A single cursor point inside one block
    Cursor {
        /// Index of the block containing the cursor
        block: usize,
    },

    /// A selection spanning one or more blocks (inclusive on both ends)
    Selection {
        /// Index of the first selected block
        start: usize,
        /// Index of the last selected block
        end: usize,
    },
}

impl Position {
    /// Create a cursor position.
    pub fn cursor(block: usize) -> Self {
        Position::Cursor { block }
    }

    /// Create a selection. The bounds are reordered if given backwards.
    pub fn selection(start: usize, end: usize) -> Self {
        Position::Selection {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// Index of the block the backward walk starts from.
    pub fn start_block(&self) -> usize {
        match self {
            Position::Cursor { block } => *block,
            Position::Selection { start, .. } => *start,
        }
    }

    /// Index of the block the forward walk starts from.
    pub fn end_block(&self) -> usize {
        match self {
            Position::Cursor { block } => *block,
            Position::Selection { end, .. } => *end,
        }
    }

    /// Check if this is a selection rather than a bare cursor.
    pub fn is_selection(&self) -> bool {
        matches!(self, Position::Selection { .. })
    }
}
