//! Immutable point-in-time copies of buffer state.

use serde::{Deserialize, Serialize};

/// A frozen copy of originator state.
///
/// Construction takes ownership of the copy; after that the payload is
/// read-only, so later edits to the buffer cannot reach back into a stored
/// snapshot. The history stores these without ever looking inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot<S> {
    state: S,
}

impl<S> Snapshot<S> {
    pub fn new(state: S) -> Self {
        Self { state }
    }

    /// Read the captured payload.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Unwrap the payload, consuming the snapshot.
    pub fn into_state(self) -> S {
        self.state
    }
}
