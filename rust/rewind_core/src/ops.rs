//! Edit commands applied to the buffer.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::buffer::TextBuffer;
use crate::error::CommandError;

/// A single edit operation.
///
/// The set is closed: callers dispatch over these variants, not over
/// open-ended callbacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    Append { text: String },
    Insert { at: usize, text: String },
    Delete { start: usize, end: usize },
}

/// Apply one command to the buffer.
///
/// Atomic per command: on `Err` the buffer is exactly as it was. Offsets are
/// byte offsets and must land on char boundaries.
pub fn apply(buf: &mut TextBuffer, cmd: &Command) -> Result<(), CommandError> {
    match cmd {
        Command::Append { text } => {
            buf.text.push_str(text);
        }
        Command::Insert { at, text } => {
            check_offset(&buf.text, *at)?;
            buf.text.insert_str(*at, text);
        }
        Command::Delete { start, end } => {
            if start > end {
                return Err(CommandError::InvertedRange { start: *start, end: *end });
            }
            check_offset(&buf.text, *start)?;
            check_offset(&buf.text, *end)?;
            buf.text.replace_range(*start..*end, "");
        }
    }
    trace!(len = buf.text.len(), "applied command");
    Ok(())
}

fn check_offset(text: &str, at: usize) -> Result<(), CommandError> {
    if at > text.len() {
        return Err(CommandError::OutOfBounds { at, len: text.len() });
    }
    if !text.is_char_boundary(at) {
        return Err(CommandError::NotCharBoundary { at });
    }
    Ok(())
}
