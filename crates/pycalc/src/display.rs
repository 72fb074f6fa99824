//! Display surface: storage for the expression buffer

/// Read / replace / clear access to the display text
pub trait DisplaySurface {
    /// Replaces the buffer and takes focus
    fn set_text(&mut self, text: String);

    /// Returns the buffer verbatim
    fn text(&self) -> &str;

    /// Empties the buffer
    fn clear(&mut self) {
        self.set_text(String::new());
    }
}

/// In-memory display
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextDisplay {
    buffer: String,
    focused: bool,
}

impl TextDisplay {
    /// Creates an empty, unfocused display
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once the display has been written to
    #[must_use]
    pub const fn has_focus(&self) -> bool {
        self.focused
    }
}

impl DisplaySurface for TextDisplay {
    fn set_text(&mut self, text: String) {
        self.buffer = text;
        self.focused = true;
    }

    fn text(&self) -> &str {
        &self.buffer
    }
}
