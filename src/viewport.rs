//! Viewport - the visible portion of a widget's buffer

use crate::buffer::Position;

/// The rows and columns of a buffer currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line (1-indexed)
    top_line: usize,
    /// First visible column
    left_column: usize,
    /// Number of visible rows
    height: u16,
    /// Number of visible columns
    width: u16,
}

impl Viewport {
    pub fn new(height: u16, width: u16) -> Self {
        Self {
            top_line: 1,
            left_column: 0,
            height: height.max(1),
            width: width.max(1),
        }
    }

    pub fn top_line(&self) -> usize {
        self.top_line
    }

    pub fn left_column(&self) -> usize {
        self.left_column
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Resize, keeping the top-left corner
    pub fn set_size(&mut self, height: u16, width: u16) {
        self.height = height.max(1);
        self.width = width.max(1);
    }

    /// Last visible line
    pub fn bottom_line(&self) -> usize {
        self.top_line + self.height as usize - 1
    }

    /// Check if a line is visible
    pub fn is_line_visible(&self, line: usize) -> bool {
        line >= self.top_line && line <= self.bottom_line()
    }

    /// Check if a position is on screen
    pub fn is_visible(&self, pos: Position) -> bool {
        self.is_line_visible(pos.line)
            && pos.column >= self.left_column
            && pos.column < self.left_column + self.width as usize
    }

    /// Scroll the least amount that brings `pos` on screen
    pub fn see(&mut self, pos: Position) {
        let line = pos.line.max(1);
        if line < self.top_line {
            self.top_line = line;
        } else if line > self.bottom_line() {
            self.top_line = line - self.height as usize + 1;
        }

        let width = self.width as usize;
        if pos.column < self.left_column {
            self.left_column = pos.column;
        } else if pos.column >= self.left_column + width {
            self.left_column = pos.column - width + 1;
        }
    }

    /// Scroll down by n lines, never past `max_line`
    pub fn scroll_down(&mut self, n: usize, max_line: usize) {
        self.top_line = self.top_line.saturating_add(n).min(max_line.max(1));
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.top_line = self.top_line.saturating_sub(n).max(1);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(24, 80)
    }
}
