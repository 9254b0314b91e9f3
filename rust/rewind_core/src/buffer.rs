//! The live text buffer and snapshot capture/restore.

use serde::{Deserialize, Serialize};

use crate::snapshot::Snapshot;

/// The single mutable document of a session.
///
/// Edits go through [`crate::ops::apply`]; each one either applies fully or
/// leaves the text untouched, so observers never see a half-applied command.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TextBuffer {
    pub text: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Current text, for observation only.
    pub fn read(&self) -> &str {
        &self.text
    }

    /// Freeze the current text into an immutable snapshot.
    pub fn capture(&self) -> Snapshot<String> {
        Snapshot::new(self.text.clone())
    }

    /// Replace the whole buffer with a previously captured snapshot.
    ///
    /// Anything written since that capture is discarded.
    pub fn restore(&mut self, snap: &Snapshot<String>) {
        self.text = snap.state().clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_is_isolated_from_later_edits() {
        let mut buf = TextBuffer::with_text("one");
        let snap = buf.capture();
        buf.text.push_str(" two");
        assert_eq!(snap.state(), "one");
        assert_eq!(buf.read(), "one two");
    }

    #[test]
    fn restore_replaces_wholesale() {
        let mut buf = TextBuffer::with_text("draft");
        let snap = buf.capture();
        buf.text = "rewritten entirely".to_string();
        buf.restore(&snap);
        assert_eq!(buf.read(), "draft");
    }

    #[test]
    fn restore_of_fresh_capture_is_a_noop() {
        let mut buf = TextBuffer::with_text("same");
        let snap = buf.capture();
        buf.restore(&snap);
        assert_eq!(buf.read(), "same");
    }
}
