//! Editable code widget
//!
//! `CodeEditor` adds what a user editing surface needs on top of
//! `CodeBox`: typing at the cursor, selection, paste, the block cursor
//! toggle and a viewport that follows the cursor.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crate::buffer::Position;
use crate::codebox::{CodeBox, CodeBoxOptions};
use crate::error::Result;
use crate::events::Event;
use crate::syntax::LanguageRegistry;
use crate::tags::SELECTION_TAG;
use crate::viewport::Viewport;

/// A code widget the user can type into
#[derive(Debug)]
pub struct CodeEditor {
    codebox: CodeBox,
    viewport: Viewport,
    /// Column vertical movement tries to keep
    goal_column: usize,
}

impl CodeEditor {
    pub fn new(options: CodeBoxOptions) -> Result<Self> {
        Ok(Self::from_codebox(CodeBox::new(options)?))
    }

    pub fn with_registry(options: CodeBoxOptions, registry: Arc<LanguageRegistry>) -> Result<Self> {
        Ok(Self::from_codebox(CodeBox::with_registry(options, registry)?))
    }

    fn from_codebox(codebox: CodeBox) -> Self {
        Self {
            codebox,
            viewport: Viewport::default(),
            goal_column: 0,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn set_viewport_size(&mut self, height: u16, width: u16) {
        self.viewport.set_size(height, width);
        self.see_cursor();
    }

    /// Scroll so that `pos` is visible
    pub fn see(&mut self, pos: Position) {
        let pos = self.codebox.buffer().clamp(pos);
        self.viewport.see(pos);
    }

    fn see_cursor(&mut self) {
        let cursor = self.codebox.cursor();
        self.viewport.see(cursor);
    }

    /// Move the cursor and scroll to it
    pub fn set_current_pos(&mut self, pos: Position) {
        self.codebox.set_cursor(pos);
        self.goal_column = self.codebox.current_column();
        self.see_cursor();
    }

    /// Move the cursor to the start of a line
    pub fn set_current_line(&mut self, line: usize) {
        self.set_current_pos(Position::line_start(line));
    }

    /// Move the cursor within its line
    pub fn set_current_column(&mut self, column: usize) {
        let line = self.codebox.current_line();
        self.set_current_pos(Position::new(line, column));
    }

    // ---- Typing --------------------------------------------------------

    /// Insert text at the cursor, replacing the selection
    pub fn type_text(&mut self, text: &str) {
        self.delete_selection();
        let cursor = self.codebox.cursor();
        self.codebox.insert(cursor, text);
        self.goal_column = self.codebox.current_column();
        self.see_cursor();
    }

    pub fn type_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.type_text(ch.encode_utf8(&mut buf));
    }

    /// Delete the selection or the character before the cursor
    ///
    /// Returns false when there was nothing to delete.
    pub fn backspace(&mut self) -> bool {
        if self.delete_selection().is_some() {
            return true;
        }
        let cursor = self.codebox.cursor();
        let start = if cursor.column > 0 {
            Position::new(cursor.line, cursor.column - 1)
        } else if cursor.line > 1 {
            self.codebox.buffer().line_end(cursor.line - 1)
        } else {
            return false;
        };
        self.codebox.delete(start, cursor);
        self.goal_column = self.codebox.current_column();
        self.see_cursor();
        true
    }

    /// Delete the selection or the character after the cursor
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection().is_some() {
            return true;
        }
        let cursor = self.codebox.cursor();
        let buffer = self.codebox.buffer();
        let end = if cursor.column < buffer.line_len(cursor.line) {
            Position::new(cursor.line, cursor.column + 1)
        } else if cursor.line < buffer.line_count() {
            Position::line_start(cursor.line + 1)
        } else {
            return false;
        };
        self.codebox.delete(cursor, end);
        true
    }

    /// Paste text at the cursor, replacing the selection
    pub fn paste(&mut self, text: &str) {
        if let Some((start, _)) = self.selection() {
            self.delete_selection();
            self.codebox.set_cursor(start);
        }
        let cursor = self.codebox.cursor();
        self.codebox.insert(cursor, text);
        self.goal_column = self.codebox.current_column();
        self.see_cursor();
        self.codebox.emit(Event::TextPasted);
    }

    // ---- Selection -----------------------------------------------------

    /// Select `[start, end)`, replacing any previous selection
    pub fn select(&mut self, start: Position, end: Position) {
        let buffer = self.codebox.buffer();
        let (start, end) = (buffer.clamp(start), buffer.clamp(end));
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        let tags = self.codebox.tags_mut();
        tags.clear(SELECTION_TAG);
        tags.add(SELECTION_TAG, start, end);
        self.codebox.emit(Event::SelectionChanged);
    }

    /// Select the whole document and put the cursor at its end
    pub fn select_all(&mut self) {
        let end = self.codebox.buffer().end();
        self.codebox.set_cursor(end);
        self.see_cursor();
        self.select(Position::default(), end);
    }

    /// Drop the selection
    pub fn clear_selection(&mut self) {
        if self.selection().is_some() {
            self.codebox.tags_mut().clear(SELECTION_TAG);
            self.codebox.emit(Event::SelectionChanged);
        }
    }

    /// First and last position of the selection
    pub fn selection(&self) -> Option<(Position, Position)> {
        let ranges = self.codebox.buffer().tags().ranges(SELECTION_TAG);
        let first = ranges.first()?;
        let last = ranges.last()?;
        Some((first.start, last.end))
    }

    pub fn selected_text(&self) -> Option<String> {
        self.selection().map(|(start, end)| self.codebox.get(start, end))
    }

    /// Delete the selected text and return it
    pub fn delete_selection(&mut self) -> Option<String> {
        let (start, end) = self.selection()?;
        let removed = self.codebox.delete(start, end);
        self.codebox.tags_mut().clear(SELECTION_TAG);
        self.codebox.emit(Event::SelectionChanged);
        Some(removed)
    }

    // ---- Cursor --------------------------------------------------------

    /// Switch between the block cursor and the thin line cursor
    pub fn toggle_cursor_mode(&mut self) {
        let was_block = self.codebox.block_cursor();
        let insert_width = if was_block { 1 } else { 0 };
        self.codebox.set_cursor_mode(!was_block, insert_width);
        tracing::debug!(block_cursor = !was_block, "cursor mode changed");
        self.codebox.emit(Event::CursorModeChanged);
    }

    pub fn move_left(&mut self) {
        let cursor = self.codebox.cursor();
        if cursor.column > 0 {
            self.set_current_pos(Position::new(cursor.line, cursor.column - 1));
        } else if cursor.line > 1 {
            let end = self.codebox.buffer().line_end(cursor.line - 1);
            self.set_current_pos(end);
        }
    }

    pub fn move_right(&mut self) {
        let cursor = self.codebox.cursor();
        let buffer = self.codebox.buffer();
        if cursor.column < buffer.line_len(cursor.line) {
            self.set_current_pos(Position::new(cursor.line, cursor.column + 1));
        } else if cursor.line < buffer.line_count() {
            self.set_current_pos(Position::line_start(cursor.line + 1));
        }
    }

    /// Move up a line, trying to keep the goal column
    pub fn move_up(&mut self) {
        let cursor = self.codebox.cursor();
        if cursor.line > 1 {
            self.move_vertically(cursor.line - 1);
        }
    }

    /// Move down a line, trying to keep the goal column
    pub fn move_down(&mut self) {
        let cursor = self.codebox.cursor();
        if cursor.line < self.codebox.line_count() {
            self.move_vertically(cursor.line + 1);
        }
    }

    fn move_vertically(&mut self, line: usize) {
        let goal = self.goal_column;
        self.codebox.set_cursor(Position::new(line, goal));
        self.see_cursor();
    }

    pub fn move_to_line_start(&mut self) {
        let start = self.codebox.current_line_start();
        self.set_current_pos(start);
    }

    pub fn move_to_line_end(&mut self) {
        let end = self.codebox.current_line_end();
        self.set_current_pos(end);
    }
}

impl Deref for CodeEditor {
    type Target = CodeBox;

    fn deref(&self) -> &CodeBox {
        &self.codebox
    }
}

impl DerefMut for CodeEditor {
    fn deref_mut(&mut self) -> &mut CodeBox {
        &mut self.codebox
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn editor(text: &str) -> CodeEditor {
        let mut editor = CodeEditor::new(CodeBoxOptions::default()).unwrap();
        editor.set_content(text);
        editor
    }

    fn recorder(editor: &mut CodeEditor) -> Rc<RefCell<Vec<Event>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&events);
        editor.subscribe(move |event| log.borrow_mut().push(event));
        events
    }

    #[test]
    fn test_typing_highlights_line() {
        let mut editor = editor("");
        for ch in "def f():".chars() {
            editor.type_char(ch);
        }
        assert_eq!(editor.cursor(), Position::new(1, 8));
        assert_eq!(editor.tags_at(Position::new(1, 0)), vec![TokenKind::Keyword.name()]);

        editor.type_text("\n    return 1");
        assert_eq!(editor.cursor(), Position::new(2, 12));
        assert_eq!(editor.tags_at(Position::new(2, 4)), vec![TokenKind::Keyword.name()]);
    }

    #[test]
    fn test_backspace_and_delete_forward() {
        let mut editor = editor("ab\ncd");
        editor.set_current_pos(Position::new(2, 0));
        assert!(editor.backspace());
        assert_eq!(editor.content(), "abcd");
        assert_eq!(editor.cursor(), Position::new(1, 2));

        assert!(editor.delete_forward());
        assert_eq!(editor.content(), "abd");

        editor.set_current_pos(Position::new(1, 0));
        assert!(!editor.backspace());
        editor.move_to_line_end();
        assert!(!editor.delete_forward());
    }

    #[test]
    fn test_select_all_and_type_replaces() {
        let mut editor = editor("x = 1\ny = 2");
        let events = recorder(&mut editor);
        editor.select_all();
        assert_eq!(editor.selection(), Some((Position::new(1, 0), Position::new(2, 5))));
        assert_eq!(editor.cursor(), Position::new(2, 5));
        assert_eq!(events.borrow().as_slice(), &[Event::SelectionChanged]);

        editor.type_text("z");
        assert_eq!(editor.content(), "z");
        assert_eq!(editor.selection(), None);
        assert_eq!(
            events.borrow().as_slice(),
            &[
                Event::SelectionChanged,
                Event::ContentChanged,
                Event::SelectionChanged,
                Event::ContentChanged,
            ]
        );
    }

    #[test]
    fn test_delete_selection_reports_change() {
        let mut editor = editor("abc");
        editor.select(Position::new(1, 1), Position::new(1, 2));
        let events = recorder(&mut editor);
        assert_eq!(editor.delete_selection().as_deref(), Some("b"));
        assert_eq!(
            events.borrow().as_slice(),
            &[Event::ContentChanged, Event::SelectionChanged]
        );
        assert_eq!(editor.delete_selection(), None);
        assert_eq!(events.borrow().len(), 2);
    }

    #[test]
    fn test_selection_survives_rehighlight() {
        let mut editor = editor("import os");
        editor.select(Position::new(1, 7), Position::new(1, 0));
        editor.highlight_all();
        assert_eq!(editor.selected_text().as_deref(), Some("import "));
        assert!(editor.tags_at(Position::new(1, 0)).contains(&SELECTION_TAG));
    }

    #[test]
    fn test_paste_replaces_selection() {
        let mut editor = editor("print(old)");
        editor.select(Position::new(1, 6), Position::new(1, 9));
        let events = recorder(&mut editor);
        editor.paste("new,\n      more");
        assert_eq!(editor.content(), "print(new,\n      more)");
        assert_eq!(editor.cursor(), Position::new(2, 10));
        assert_eq!(editor.selection(), None);
        assert_eq!(events.borrow().last(), Some(&Event::TextPasted));
        assert_eq!(editor.tags_at(Position::new(2, 6)), vec![TokenKind::Name.name()]);
    }

    #[test]
    fn test_toggle_cursor_mode() {
        let mut editor = editor("");
        let events = recorder(&mut editor);
        assert!(!editor.block_cursor());
        assert_eq!(editor.insert_width(), 1);

        editor.toggle_cursor_mode();
        assert!(editor.block_cursor());
        assert_eq!(editor.insert_width(), 0);

        editor.toggle_cursor_mode();
        assert!(!editor.block_cursor());
        assert_eq!(editor.insert_width(), 1);
        assert_eq!(*events.borrow(), vec![Event::CursorModeChanged; 2]);
    }

    #[test]
    fn test_viewport_follows_cursor() {
        let text = (1..=100).map(|n| format!("x{}", n)).collect::<Vec<_>>().join("\n");
        let mut editor = editor(&text);
        editor.set_viewport_size(10, 40);
        editor.set_current_line(50);
        assert_eq!(editor.viewport().top_line(), 41);
        assert!(editor.viewport().is_line_visible(50));

        editor.set_current_line(1);
        assert_eq!(editor.viewport().top_line(), 1);
    }

    #[test]
    fn test_vertical_movement_keeps_goal_column() {
        let mut editor = editor("abcdef\nab\nabcdef");
        editor.set_current_pos(Position::new(1, 5));
        editor.move_down();
        assert_eq!(editor.cursor(), Position::new(2, 2));
        editor.move_down();
        assert_eq!(editor.cursor(), Position::new(3, 5));
        editor.move_left();
        editor.move_up();
        assert_eq!(editor.cursor(), Position::new(2, 2));
    }
}
