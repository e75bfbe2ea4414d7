/// Shown instead of an empty buffer while not editing.
pub const EMPTY_CONTENT_TEXT: &str = "File content goes here";

/// Transient text buffer of one text file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentEntry {
    text: String,
    editing: bool,
}

impl ContentEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            editing: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Returns `false` when the buffer already held `text`.
    pub fn set_text(&mut self, text: String) -> bool {
        if self.text == text {
            return false;
        }
        self.text = text;
        true
    }

    /// Flips edit mode and returns the new state.
    pub fn toggle_editing(&mut self) -> bool {
        self.editing = !self.editing;
        self.editing
    }

    pub fn display_text(&self) -> &str {
        if self.text.is_empty() && !self.editing {
            EMPTY_CONTENT_TEXT
        } else {
            &self.text
        }
    }
}
