//! Text buffer - a list of lines plus the style tags laid over them

use std::fmt;
use std::str::FromStr;

use crate::line::Line;
use crate::tags::TagTable;

/// A (line, column) address in a buffer
///
/// Lines are 1-indexed, columns are 0-indexed and counted in characters.
/// Formats and parses as `"line.column"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Start of a line
    pub const fn line_start(line: usize) -> Self {
        Self { line, column: 0 }
    }

    /// Where this position moves after text `[at, end)` was inserted
    ///
    /// Positions before `at` stay put; the rest move with the text.
    pub fn shifted_for_insert(self, at: Position, end: Position) -> Position {
        if self < at {
            self
        } else if self.line == at.line {
            Position::new(end.line, end.column + (self.column - at.column))
        } else {
            Position::new(self.line + (end.line - at.line), self.column)
        }
    }

    /// Where this position moves after text `[start, end)` was deleted
    ///
    /// Positions inside the deleted range collapse onto `start`.
    pub fn shifted_for_delete(self, start: Position, end: Position) -> Position {
        if self <= start {
            self
        } else if self <= end {
            start
        } else if self.line == end.line {
            Position::new(start.line, start.column + (self.column - end.column))
        } else {
            Position::new(self.line - (end.line - start.line), self.column)
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::line_start(1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.line, self.column)
    }
}

/// Error returned when parsing a `"line.column"` index fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePositionError(String);

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid text index '{}'", self.0)
    }
}

impl std::error::Error for ParsePositionError {}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError(s.to_string());
        let (line, column) = s.trim().split_once('.').ok_or_else(err)?;
        let line = line.parse().map_err(|_| err())?;
        let column = column.parse().map_err(|_| err())?;
        Ok(Position::new(line, column))
    }
}

/// A buffer containing lines of text and their tags
#[derive(Debug, Clone)]
pub struct TextBuffer {
    /// Lines of text, never empty
    lines: Vec<Line>,
    /// Style tags over the text
    tags: TagTable,
    /// Whether the buffer changed since it was last marked clean
    modified: bool,
}

impl TextBuffer {
    /// Create a new buffer holding one empty line
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new()], // Always have at least one line
            tags: TagTable::new(),
            modified: false,
        }
    }

    /// Create a buffer from text; a trailing break yields a trailing empty line
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.insert(Position::default(), text);
        buffer.modified = false;
        buffer
    }

    /// Number of lines, always at least one
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get a line by 1-based index
    pub fn line(&self, line: usize) -> Option<&Line> {
        line.checked_sub(1).and_then(|idx| self.lines.get(idx))
    }

    /// Text of a line, empty when out of range
    pub fn line_text(&self, line: usize) -> &str {
        self.line(line).map(Line::text).unwrap_or("")
    }

    /// Length of a line in characters
    pub fn line_len(&self, line: usize) -> usize {
        self.line(line).map(Line::char_len).unwrap_or(0)
    }

    /// Position just past the last character of a line
    pub fn line_end(&self, line: usize) -> Position {
        Position::new(line, self.line_len(line))
    }

    /// Position just past the last character of the buffer
    pub fn end(&self) -> Position {
        self.line_end(self.line_count())
    }

    /// Whether the buffer holds no text at all
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Check if buffer is modified
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Mark buffer as modified or clean
    pub fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }

    /// Whether `pos` addresses an existing character or line end
    pub fn contains(&self, pos: Position) -> bool {
        pos.line >= 1 && pos.line <= self.line_count() && pos.column <= self.line_len(pos.line)
    }

    /// Clamp a position into the buffer, the way toolkit indices are clamped
    pub fn clamp(&self, pos: Position) -> Position {
        if pos.line == 0 {
            return Position::default();
        }
        if pos.line > self.line_count() {
            return self.end();
        }
        Position::new(pos.line, pos.column.min(self.line_len(pos.line)))
    }

    /// Whole text, lines joined with `\n`
    pub fn text(&self) -> String {
        let mut text = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(line.text());
        }
        text
    }

    /// Text in `[start, end)`
    pub fn get(&self, start: Position, end: Position) -> String {
        let start = self.clamp(start);
        let end = self.clamp(end);
        if end <= start {
            return String::new();
        }
        if start.line == end.line {
            return self.lines[start.line - 1].slice(start.column, end.column).to_string();
        }
        let mut text = self.lines[start.line - 1].slice_from(start.column).to_string();
        for line in &self.lines[start.line..end.line - 1] {
            text.push('\n');
            text.push_str(line.text());
        }
        text.push('\n');
        text.push_str(self.lines[end.line - 1].slice(0, end.column));
        text
    }

    /// Insert text at a position and return the position after it
    ///
    /// Every `\n` in `text` starts a new line. Tags after the insertion
    /// point move with the text.
    pub fn insert(&mut self, pos: Position, text: &str) -> Position {
        let at = self.clamp(pos);
        if text.is_empty() {
            return at;
        }
        let idx = at.line - 1;
        let tail = self.lines[idx].split_off(at.column);

        let mut segments = text.split('\n');
        let first = segments.next().unwrap_or_default();
        self.lines[idx].insert_str(at.column, first);

        let mut end = Position::new(at.line, at.column + first.chars().count());
        let mut new_lines = Vec::new();
        for segment in segments {
            new_lines.push(Line::from(segment));
            end = Position::new(end.line + 1, segment.chars().count());
        }
        self.lines.splice(idx + 1..idx + 1, new_lines);
        self.lines[end.line - 1].append(tail);

        self.tags.shift_for_insert(at, end);
        self.modified = true;
        end
    }

    /// Delete `[start, end)` and return the removed text
    pub fn delete(&mut self, start: Position, end: Position) -> String {
        let start = self.clamp(start);
        let end = self.clamp(end);
        if end <= start {
            return String::new();
        }
        let removed = self.get(start, end);

        if start.line == end.line {
            self.lines[start.line - 1].delete_range(start.column, end.column);
        } else {
            let tail = self.lines[end.line - 1].split_off(end.column);
            self.lines.drain(start.line..end.line);
            let first = &mut self.lines[start.line - 1];
            first.delete_range(start.column, first.char_len());
            first.append(tail);
        }

        self.tags.shift_for_delete(start, end);
        self.modified = true;
        removed
    }

    /// Replace the whole text and drop every tag
    pub fn set_text(&mut self, text: &str) {
        self.lines = vec![Line::new()];
        self.tags = TagTable::new();
        self.insert(Position::default(), text);
    }

    /// Convert an absolute character offset to a position (line breaks count as one)
    pub fn offset_to_position(&self, offset: usize) -> Position {
        let mut remaining = offset;
        for (idx, line) in self.lines.iter().enumerate() {
            let len = line.char_len();
            if remaining <= len {
                return Position::new(idx + 1, remaining);
            }
            remaining -= len + 1;
        }
        self.end()
    }

    /// Convert a position to an absolute character offset
    pub fn position_to_offset(&self, pos: Position) -> usize {
        let pos = self.clamp(pos);
        let before: usize = self.lines[..pos.line - 1]
            .iter()
            .map(|line| line.char_len() + 1)
            .sum();
        before + pos.column
    }

    /// Tags over the text
    pub fn tags(&self) -> &TagTable {
        &self.tags
    }

    /// Mutable tags over the text
    pub fn tags_mut(&mut self) -> &mut TagTable {
        &mut self.tags
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
