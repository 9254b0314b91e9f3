//! Error types for history navigation and edit commands.

use thiserror::Error;

/// Errors from undo/redo navigation.
///
/// Both variants are recoverable: a failed call leaves the history exactly
/// as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// No earlier checkpoint to go back to.
    #[error("nothing to undo")]
    NothingToUndo,

    /// No undone checkpoint to go forward to.
    #[error("nothing to redo")]
    NothingToRedo,
}

/// Errors from malformed edit commands.
///
/// A rejected command leaves the buffer untouched. These are owned by the
/// command layer and never produced by the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("offset {at} is out of bounds for buffer of length {len}")]
    OutOfBounds { at: usize, len: usize },

    #[error("offset {at} is not a char boundary")]
    NotCharBoundary { at: usize },

    #[error("range start {start} is past range end {end}")]
    InvertedRange { start: usize, end: usize },
}
