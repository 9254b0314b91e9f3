use rewind_core::Session;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct Editor {
    core: Session,
}

#[wasm_bindgen]
impl Editor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Editor {
        Editor { core: Session::new() }
    }

    /// An editor whose history keeps at most `depth` undo steps.
    pub fn with_max_depth(depth: usize) -> Editor {
        Editor { core: Session::with_max_depth(depth) }
    }

    pub fn from_json(json: String) -> Editor {
        let core = Session::from_json(&json).unwrap_or_else(|_| Session::new());
        Editor { core }
    }

    pub fn to_json(&self) -> String { self.core.to_json() }
    pub fn to_html(&self) -> String { self.core.to_html() }
    pub fn to_markdown(&self) -> String { self.core.to_markdown() }

    pub fn read(&self) -> String { self.core.read().to_string() }

    // Edits: report acceptance, the buffer is unchanged on rejection.
    pub fn append(&mut self, text: String) -> bool { self.core.append(&text).is_ok() }
    pub fn insert(&mut self, at: usize, text: String) -> bool { self.core.insert(at, &text).is_ok() }
    pub fn delete(&mut self, start: usize, end: usize) -> bool { self.core.delete(start, end).is_ok() }

    // History
    pub fn undo(&mut self) -> bool { self.core.undo() }
    pub fn redo(&mut self) -> bool { self.core.redo() }
    pub fn can_undo(&self) -> bool { self.core.can_undo() }
    pub fn can_redo(&self) -> bool { self.core.can_redo() }
    pub fn history_len(&self) -> usize { self.core.history_len() }
}
