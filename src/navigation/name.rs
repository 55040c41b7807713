use crate::text::has_glyph;

/// Longest name the player can type, in characters
pub const MAX_NAME_LEN: usize = 16;

/// Text typed on the name entry screen
///
/// Only grows by appending characters the bitmap font can draw and only shrinks by removing
/// the last one. Length is counted in `char`s and capped at [`MAX_NAME_LEN`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameBuffer {
    text: String,
}

impl NameBuffer {
    pub fn new() -> Self {
        NameBuffer {
            text: String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append `c` if the font can draw it and there is room; returns whether it was added
    pub fn push(&mut self, c: char) -> bool {
        if !has_glyph(c) || self.len() >= MAX_NAME_LEN {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Remove the last character; no-op when empty
    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }
}
