//! Line representation and character-addressed text operations
//!
//! Columns are counted in characters, never bytes, so every public
//! method here takes and returns character columns.

use unicode_width::UnicodeWidthStr;

/// A single line of text in a buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    /// The text content (without trailing newline)
    text: String,
}

impl Line {
    /// Create a new empty line
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Create a line from a string
    pub fn from_string(s: String) -> Self {
        Self { text: s }
    }

    /// Get the text content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the line is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the display width of the line
    pub fn display_width(&self) -> usize {
        self.text.width()
    }

    /// Byte offset of a character column, clamped to the line end
    pub fn col_to_byte(&self, col: usize) -> usize {
        self.text
            .char_indices()
            .nth(col)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }

    /// Insert a string at a character column
    pub fn insert_str(&mut self, col: usize, s: &str) {
        let byte = self.col_to_byte(col);
        self.text.insert_str(byte, s);
    }

    /// Delete the characters in `[start, end)` and return them
    pub fn delete_range(&mut self, start: usize, end: usize) -> String {
        let start = self.col_to_byte(start);
        let end = self.col_to_byte(end).max(start);
        let deleted = self.text[start..end].to_string();
        self.text.replace_range(start..end, "");
        deleted
    }

    /// Split the line at a character column, returning the remainder
    pub fn split_off(&mut self, col: usize) -> Line {
        let byte = self.col_to_byte(col);
        Line::from_string(self.text.split_off(byte))
    }

    /// Append another line's content to this line
    pub fn append(&mut self, other: Line) {
        self.text.push_str(other.text());
    }

    /// Characters in `[start, end)`, clamped to the line
    pub fn slice(&self, start: usize, end: usize) -> &str {
        let start = self.col_to_byte(start);
        let end = self.col_to_byte(end).max(start);
        &self.text[start..end]
    }

    /// Characters from `start` to the end of the line
    pub fn slice_from(&self, start: usize) -> &str {
        &self.text[self.col_to_byte(start)..]
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Self::from_string(s.to_string())
    }
}

impl From<String> for Line {
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}
