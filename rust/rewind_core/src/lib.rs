pub mod buffer;
pub mod error;
pub mod export;
pub mod history;
pub mod ops;
pub mod snapshot;

use tracing::debug;

use buffer::TextBuffer;
use error::CommandError;
use history::History;
use ops::Command;

/// An editing session: one live buffer plus its checkpoint history.
///
/// Every mutating method takes `&mut self`, so "mutate, capture, push" is one
/// exclusive unit and no observer can interleave between an edit and its
/// checkpoint.
#[derive(Debug)]
pub struct Session {
    pub buffer: TextBuffer,
    pub history: History<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// An empty session. The empty initial state is recorded as the first
    /// checkpoint, so undoing all edits lands back on it.
    pub fn new() -> Self {
        Self::with_buffer(TextBuffer::new(), History::new())
    }

    /// A session whose history keeps at most `depth` undo steps.
    pub fn with_max_depth(depth: usize) -> Self {
        Self::with_buffer(TextBuffer::new(), History::with_max_depth(depth))
    }

    fn with_buffer(buffer: TextBuffer, mut history: History<String>) -> Self {
        history.push(buffer.capture());
        Self { buffer, history }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let buffer: TextBuffer = serde_json::from_str(json)?;
        Ok(Self::with_buffer(buffer, History::new()))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.buffer).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn to_html(&self) -> String {
        crate::export::to_html(&self.buffer)
    }

    pub fn to_markdown(&self) -> String {
        crate::export::to_markdown(&self.buffer)
    }

    /// Apply one edit command and checkpoint the result.
    ///
    /// A rejected command changes neither the buffer nor the history.
    pub fn apply(&mut self, cmd: &Command) -> Result<(), CommandError> {
        ops::apply(&mut self.buffer, cmd)?;
        self.history.push(self.buffer.capture());
        Ok(())
    }

    pub fn append(&mut self, text: &str) -> Result<(), CommandError> {
        self.apply(&Command::Append { text: text.to_string() })
    }

    pub fn insert(&mut self, at: usize, text: &str) -> Result<(), CommandError> {
        self.apply(&Command::Insert { at, text: text.to_string() })
    }

    pub fn delete(&mut self, start: usize, end: usize) -> Result<(), CommandError> {
        self.apply(&Command::Delete { start, end })
    }

    /// Step the buffer back one checkpoint. Returns true if a change occurred;
    /// an exhausted history is a quiet no-op here, callers that need the error
    /// can drive [`History::undo`] themselves.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Ok(snap) => {
                self.buffer.restore(&snap);
                true
            }
            Err(err) => {
                debug!(%err, "undo ignored");
                false
            }
        }
    }

    /// Step the buffer forward one undone checkpoint. Returns true if a
    /// change occurred.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Ok(snap) => {
                self.buffer.restore(&snap);
                true
            }
            Err(err) => {
                debug!(%err, "redo ignored");
                false
            }
        }
    }

    pub fn read(&self) -> &str {
        self.buffer.read()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of checkpoints currently held, including the live one.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
