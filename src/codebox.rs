//! The base code widget
//!
//! `CodeBox` owns a text buffer, the highlighter for its active language
//! and the active color scheme. Every edit goes through the highlighter so
//! the token tags stay in step with the text.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::buffer::{Position, TextBuffer};
use crate::error::{CodeBoxError, Result};
use crate::events::{Event, Observers, SubscriptionId, Warning};
use crate::highlighter::Highlighter;
use crate::scheme::{StyleScheme, DEFAULT_SCHEME};
use crate::syntax::{LanguageRegistry, Style};
use crate::tags::{StyleTag, SELECTION_TAG};

/// Language used when none is configured
pub const DEFAULT_LANGUAGE: &str = "python";
/// Default font family
pub const DEFAULT_FONT_FAMILY: &str = "monospace";
/// Default font size in points
pub const DEFAULT_FONT_SIZE: u16 = 10;
/// Default tab width
pub const DEFAULT_TAB_WIDTH: &str = "4ch";

/// Parse a tab width given in characters, e.g. `"4ch"`
pub fn parse_tab_width(value: &str) -> Result<usize> {
    value
        .trim()
        .strip_suffix("ch")
        .and_then(|count| count.parse().ok())
        .ok_or_else(|| CodeBoxError::InvalidTabWidth(value.to_string()))
}

/// Font of the widget text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    pub family: String,
    pub size: u16,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: DEFAULT_FONT_FAMILY.to_string(),
            size: DEFAULT_FONT_SIZE,
        }
    }
}

/// How a widget is set up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBoxOptions {
    /// Language name or alias
    pub language: String,
    /// Bundled scheme name or scheme file path
    pub scheme: String,
    pub font: Font,
    /// Tab width in characters, e.g. `"4ch"`
    pub tab_width: String,
    pub block_cursor: bool,
}

impl Default for CodeBoxOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            scheme: DEFAULT_SCHEME.to_string(),
            font: Font::default(),
            tab_width: DEFAULT_TAB_WIDTH.to_string(),
            block_cursor: false,
        }
    }
}

impl CodeBoxOptions {
    pub fn language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    pub fn scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.to_string();
        self
    }
}

/// Names of the settings `configure` and `cget` understand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Language,
    Highlighter,
    FontFamily,
    FontSize,
    TabWidth,
    BlockCursor,
    InsertWidth,
}

impl SettingKey {
    pub const ALL: [SettingKey; 7] = [
        SettingKey::Language,
        SettingKey::Highlighter,
        SettingKey::FontFamily,
        SettingKey::FontSize,
        SettingKey::TabWidth,
        SettingKey::BlockCursor,
        SettingKey::InsertWidth,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SettingKey::Language => "language",
            SettingKey::Highlighter => "highlighter",
            SettingKey::FontFamily => "font-family",
            SettingKey::FontSize => "font-size",
            SettingKey::TabWidth => "tabs",
            SettingKey::BlockCursor => "blockcursor",
            SettingKey::InsertWidth => "insertwidth",
        }
    }
}

/// A setting together with its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    Language(String),
    Highlighter(String),
    FontFamily(String),
    FontSize(u16),
    TabWidth(String),
    BlockCursor(bool),
    InsertWidth(u16),
}

impl Setting {
    pub fn key(&self) -> SettingKey {
        match self {
            Setting::Language(_) => SettingKey::Language,
            Setting::Highlighter(_) => SettingKey::Highlighter,
            Setting::FontFamily(_) => SettingKey::FontFamily,
            Setting::FontSize(_) => SettingKey::FontSize,
            Setting::TabWidth(_) => SettingKey::TabWidth,
            Setting::BlockCursor(_) => SettingKey::BlockCursor,
            Setting::InsertWidth(_) => SettingKey::InsertWidth,
        }
    }
}

/// A syntax-highlighting text widget
pub struct CodeBox {
    registry: Arc<LanguageRegistry>,
    buffer: TextBuffer,
    highlighter: Highlighter,
    /// Language name as last requested
    language: String,
    scheme: StyleScheme,
    font: Font,
    tab_width: usize,
    block_cursor: bool,
    insert_width: u16,
    /// Insertion cursor
    cursor: Position,
    observers: Observers,
    warnings: Vec<Warning>,
}

impl CodeBox {
    /// Create a widget using the built-in languages
    pub fn new(options: CodeBoxOptions) -> Result<Self> {
        Self::with_registry(options, LanguageRegistry::global())
    }

    /// Create a widget resolving languages through `registry`
    ///
    /// No change notifications are sent while the widget is built.
    pub fn with_registry(options: CodeBoxOptions, registry: Arc<LanguageRegistry>) -> Result<Self> {
        let tab_width = parse_tab_width(&options.tab_width)?;
        let scheme = StyleScheme::load(&options.scheme)?;
        let language = if options.language.trim().is_empty() {
            DEFAULT_LANGUAGE.to_string()
        } else {
            options.language
        };

        let mut codebox = Self {
            highlighter: Highlighter::from_resolved(registry.resolve(DEFAULT_LANGUAGE)),
            registry,
            buffer: TextBuffer::new(),
            language: String::new(),
            scheme,
            font: options.font,
            tab_width,
            block_cursor: options.block_cursor,
            insert_width: if options.block_cursor { 0 } else { 1 },
            cursor: Position::default(),
            observers: Observers::new(),
            warnings: Vec::new(),
        };
        codebox.apply_language(&language);
        Ok(codebox)
    }

    // ---- Content -------------------------------------------------------

    /// The whole text
    pub fn content(&self) -> String {
        self.buffer.text()
    }

    /// Replace the whole text and highlight it
    pub fn set_content(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.cursor = self.buffer.clamp(self.cursor);
        self.emit(Event::ContentChanged);
        self.highlight_all();
    }

    /// Text in `[start, end)`
    pub fn get(&self, start: Position, end: Position) -> String {
        self.buffer.get(start, end)
    }

    /// Insert text and return the position after it
    pub fn insert(&mut self, pos: Position, text: &str) -> Position {
        let at = self.buffer.clamp(pos);
        let end = self.highlighter.insert(&mut self.buffer, at, text);
        self.cursor = self.cursor.shifted_for_insert(at, end);
        if !text.is_empty() {
            self.emit(Event::ContentChanged);
        }
        end
    }

    /// Delete `[start, end)` and return the removed text
    pub fn delete(&mut self, start: Position, end: Position) -> String {
        let start = self.buffer.clamp(start);
        let end = self.buffer.clamp(end);
        let removed = self.highlighter.delete(&mut self.buffer, start, end);
        if !removed.is_empty() {
            self.cursor = self.cursor.shifted_for_delete(start, end);
            self.emit(Event::ContentChanged);
        }
        removed
    }

    /// Replace the content with a file's text
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        self.set_content(&text);
        self.buffer.set_modified(false);
        tracing::debug!(path = %path.display(), lines = self.line_count(), "loaded file");
        self.emit(Event::LoadedFromFile);
        Ok(())
    }

    /// Insert a file's text at `pos` and return the position after it
    pub fn insert_from_file(&mut self, path: impl AsRef<Path>, pos: Position) -> Result<Position> {
        let text = fs::read_to_string(path)?;
        Ok(self.insert(pos, &text))
    }

    /// Write the whole content to a file
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let end = self.buffer.end();
        self.save_range_to_file(path, Position::default(), end)
    }

    /// Write the text in `[start, end)` to a file
    pub fn save_range_to_file(
        &mut self,
        path: impl AsRef<Path>,
        start: Position,
        end: Position,
    ) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.buffer.get(start, end))?;
        if start == Position::default() && self.buffer.clamp(end) == self.buffer.end() {
            self.buffer.set_modified(false);
        }
        tracing::debug!(path = %path.display(), "saved file");
        self.emit(Event::SavedToFile);
        Ok(())
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_modified(&self) -> bool {
        self.buffer.is_modified()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    // ---- Language and scheme -------------------------------------------

    /// Language name as last requested
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Canonical key of the language actually highlighted
    pub fn language_key(&self) -> &str {
        self.highlighter.language()
    }

    /// Name of the tokenizer in use
    pub fn tokenizer_name(&self) -> &str {
        self.highlighter.tokenizer().name()
    }

    /// Change the language and re-highlight everything
    ///
    /// An empty name is ignored. An unknown name falls back to the
    /// default language and records a warning.
    pub fn set_language(&mut self, language: &str) {
        if language.trim().is_empty() {
            return;
        }
        self.apply_language(language);
        self.emit(Event::LanguageChanged);
        self.highlight_all();
    }

    fn apply_language(&mut self, language: &str) {
        let resolved = self.registry.resolve(language);
        if resolved.fell_back {
            tracing::warn!(
                requested = language,
                fallback = %resolved.key,
                "unsupported language"
            );
            self.warnings.push(Warning::LanguageFallback {
                requested: language.to_string(),
                used: resolved.key.clone(),
            });
        }
        self.highlighter = Highlighter::from_resolved(resolved);
        self.language = language.to_string();
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn scheme(&self) -> &StyleScheme {
        &self.scheme
    }

    /// Switch to another color scheme
    ///
    /// On error the current scheme stays active.
    pub fn set_scheme(&mut self, identifier: &str) -> Result<()> {
        self.scheme = StyleScheme::load(identifier)?;
        self.emit(Event::SchemeChanged);
        self.highlight_all();
        Ok(())
    }

    /// Drop all token tags and re-highlight the whole buffer
    pub fn highlight_all(&mut self) {
        self.highlighter.highlight_all(&mut self.buffer);
        self.emit(Event::AllHighlighted);
    }

    /// Re-highlight one line
    pub fn highlight_line(&mut self, line: usize) -> Result<()> {
        self.highlighter.highlight_line(&mut self.buffer, line)
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    // ---- Cursor --------------------------------------------------------

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Move the cursor, clamped into the buffer
    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = self.buffer.clamp(pos);
    }

    pub fn set_cursor_line_col(&mut self, line: usize, column: usize) {
        self.set_cursor(Position::new(line, column));
    }

    /// Cursor as an absolute character offset
    pub fn cursor_offset(&self) -> usize {
        self.buffer.position_to_offset(self.cursor)
    }

    pub fn set_cursor_offset(&mut self, offset: usize) {
        self.cursor = self.buffer.offset_to_position(offset);
    }

    pub fn current_line(&self) -> usize {
        self.cursor.line
    }

    pub fn current_column(&self) -> usize {
        self.cursor.column
    }

    /// Start of the cursor line
    pub fn current_line_start(&self) -> Position {
        Position::line_start(self.cursor.line)
    }

    /// End of the cursor line
    pub fn current_line_end(&self) -> Position {
        self.buffer.line_end(self.cursor.line)
    }

    // ---- Font and cursor appearance ------------------------------------

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn font_family(&self) -> &str {
        &self.font.family
    }

    pub fn set_font_family(&mut self, family: &str) {
        self.font.family = family.to_string();
    }

    pub fn font_size(&self) -> u16 {
        self.font.size
    }

    pub fn set_font_size(&mut self, size: u16) {
        self.font.size = size;
    }

    /// Tab width in characters
    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// Set the tab width from a value like `"4ch"`
    pub fn set_tab_width(&mut self, value: &str) -> Result<()> {
        self.tab_width = parse_tab_width(value)?;
        Ok(())
    }

    pub fn block_cursor(&self) -> bool {
        self.block_cursor
    }

    pub fn insert_width(&self) -> u16 {
        self.insert_width
    }

    pub(crate) fn set_cursor_mode(&mut self, block_cursor: bool, insert_width: u16) {
        self.block_cursor = block_cursor;
        self.insert_width = insert_width;
    }

    // ---- Settings ------------------------------------------------------

    /// Change one setting
    pub fn configure(&mut self, setting: Setting) -> Result<()> {
        match setting {
            Setting::Language(language) => self.set_language(&language),
            Setting::Highlighter(scheme) => self.set_scheme(&scheme)?,
            Setting::FontFamily(family) => self.set_font_family(&family),
            Setting::FontSize(size) => self.set_font_size(size),
            Setting::TabWidth(width) => self.set_tab_width(&width)?,
            Setting::BlockCursor(block) => self.block_cursor = block,
            Setting::InsertWidth(width) => self.insert_width = width,
        }
        Ok(())
    }

    /// Read one setting
    pub fn cget(&self, key: SettingKey) -> Setting {
        match key {
            SettingKey::Language => Setting::Language(self.language.clone()),
            SettingKey::Highlighter => Setting::Highlighter(self.scheme.name().to_string()),
            SettingKey::FontFamily => Setting::FontFamily(self.font.family.clone()),
            SettingKey::FontSize => Setting::FontSize(self.font.size),
            SettingKey::TabWidth => Setting::TabWidth(format!("{}ch", self.tab_width)),
            SettingKey::BlockCursor => Setting::BlockCursor(self.block_cursor),
            SettingKey::InsertWidth => Setting::InsertWidth(self.insert_width),
        }
    }

    // ---- Tags ----------------------------------------------------------

    /// Ranges of one tag as `(start, end)` pairs
    pub fn tag_ranges(&self, name: &str) -> Vec<(Position, Position)> {
        self.buffer
            .tags()
            .ranges(name)
            .iter()
            .map(|range| (range.start, range.end))
            .collect()
    }

    /// Names of the tags covering the character at `pos`
    pub fn tags_at(&self, pos: Position) -> Vec<&str> {
        self.buffer.tags().names_at(pos)
    }

    /// Tags on one line, sorted by start
    pub fn line_tags(&self, line: usize) -> Vec<StyleTag> {
        self.buffer
            .tags()
            .tags_in(Position::line_start(line), self.buffer.line_end(line))
    }

    /// Style a tag is drawn with under the active scheme
    ///
    /// Font fields the scheme leaves open take the widget font.
    pub fn tag_style(&self, name: &str) -> Style {
        let declared = if name == SELECTION_TAG {
            Some(self.scheme.selection())
        } else {
            self.scheme.style_for(name)
        };
        let mut style = declared.cloned().unwrap_or_default();
        if style.fg.is_none() && name != SELECTION_TAG {
            style.fg = self.scheme.foreground();
        }
        style.family.get_or_insert_with(|| self.font.family.clone());
        style.size.get_or_insert(self.font.size);
        style
    }

    pub(crate) fn tags_mut(&mut self) -> &mut crate::tags::TagTable {
        self.buffer.tags_mut()
    }

    // ---- Notifications -------------------------------------------------

    /// Register a callback for every event
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(Event) + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub(crate) fn emit(&mut self, event: Event) {
        self.observers.notify(event);
    }

    /// Warnings recorded so far
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Take and clear the recorded warnings
    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }
}

impl fmt::Display for CodeBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content())
    }
}

impl fmt::Debug for CodeBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeBox")
            .field("scheme", &self.scheme.name())
            .field("language", &self.language)
            .field("tokenizer", &self.tokenizer_name())
            .field("lines", &self.line_count())
            .field("cursor", &self.cursor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{TokenKind, FALLBACK_LANGUAGE};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(codebox: &mut CodeBox) -> Rc<RefCell<Vec<Event>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&events);
        codebox.subscribe(move |event| log.borrow_mut().push(event));
        events
    }

    fn python_box(text: &str) -> CodeBox {
        let mut codebox = CodeBox::new(CodeBoxOptions::default()).unwrap();
        codebox.set_content(text);
        codebox
    }

    #[test]
    fn test_defaults() {
        let codebox = CodeBox::new(CodeBoxOptions::default()).unwrap();
        assert_eq!(codebox.language(), "python");
        assert_eq!(codebox.scheme().name(), "mariana");
        assert_eq!(codebox.tab_width(), 4);
        assert_eq!(codebox.font_family(), "monospace");
        assert_eq!(codebox.font_size(), 10);
        assert!(codebox.is_empty());
        assert_eq!(codebox.line_count(), 1);
        assert!(codebox.warnings().is_empty());
    }

    #[test]
    fn test_tab_width_parsing() {
        assert_eq!(parse_tab_width("8ch").unwrap(), 8);
        assert!(matches!(
            parse_tab_width("4px"),
            Err(CodeBoxError::InvalidTabWidth(_))
        ));
        assert!(parse_tab_width("ch").is_err());

        let options = CodeBoxOptions {
            tab_width: "4".to_string(),
            ..CodeBoxOptions::default()
        };
        assert!(CodeBox::new(options).is_err());
    }

    #[test]
    fn test_content_round_trip() {
        let codebox = python_box("a\nb\n");
        assert_eq!(codebox.content(), "a\nb\n");
        assert_eq!(codebox.line_count(), 3);
        assert_eq!(codebox.to_string(), "a\nb\n");
    }

    #[test]
    fn test_set_content_notifies() {
        let mut codebox = CodeBox::new(CodeBoxOptions::default()).unwrap();
        let events = recorder(&mut codebox);
        codebox.set_content("x = 1");
        assert_eq!(*events.borrow(), vec![Event::ContentChanged, Event::AllHighlighted]);
        assert_eq!(codebox.tags_at(Position::new(1, 4)), vec![TokenKind::Number.name()]);
    }

    #[test]
    fn test_construction_applies_options() {
        let options = CodeBoxOptions::default().language("rust").scheme("monokai");
        let codebox = CodeBox::new(options).unwrap();
        assert_eq!(codebox.language_key(), "rust");
        assert_eq!(codebox.scheme().name(), "monokai");
    }

    #[test]
    fn test_language_change_retags() {
        let mut codebox = python_box("let x = 1");
        assert_eq!(codebox.tags_at(Position::new(1, 0)), vec![TokenKind::Name.name()]);

        let events = recorder(&mut codebox);
        codebox.set_language("RS");
        assert_eq!(codebox.language(), "RS");
        assert_eq!(codebox.language_key(), "rust");
        assert_eq!(codebox.tags_at(Position::new(1, 0)), vec![TokenKind::Keyword.name()]);
        assert_eq!(*events.borrow(), vec![Event::LanguageChanged, Event::AllHighlighted]);
    }

    #[test]
    fn test_empty_language_is_ignored() {
        let mut codebox = python_box("");
        let events = recorder(&mut codebox);
        codebox.set_language("  ");
        assert_eq!(codebox.language(), "python");
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let mut codebox = python_box("def f(): pass");
        codebox.set_language("klingon");
        assert_eq!(codebox.language(), "klingon");
        assert_eq!(codebox.language_key(), FALLBACK_LANGUAGE);
        assert_eq!(
            codebox.warnings(),
            &[Warning::LanguageFallback {
                requested: "klingon".to_string(),
                used: "python".to_string(),
            }]
        );
        assert_eq!(codebox.tags_at(Position::new(1, 0)), vec![TokenKind::Keyword.name()]);
        assert_eq!(codebox.take_warnings().len(), 1);
        assert!(codebox.warnings().is_empty());
    }

    #[test]
    fn test_scheme_change_keeps_ranges() {
        let mut codebox = python_box("import os\nprint(os.name)\n");
        let before = codebox.line_tags(2);
        let keyword_before = codebox.tag_style(TokenKind::Keyword.name());

        let events = recorder(&mut codebox);
        codebox.set_scheme("monokai").unwrap();
        assert_eq!(codebox.line_tags(2), before);
        assert_ne!(codebox.tag_style(TokenKind::Keyword.name()), keyword_before);
        assert_eq!(*events.borrow(), vec![Event::SchemeChanged, Event::AllHighlighted]);
    }

    #[test]
    fn test_bad_scheme_keeps_current() {
        let mut codebox = python_box("");
        let err = codebox.set_scheme("/missing/scheme.json").unwrap_err();
        assert!(matches!(err, CodeBoxError::SchemeNotFound(_)));
        assert_eq!(codebox.scheme().name(), "mariana");

        let options = CodeBoxOptions::default().scheme("nope");
        assert!(CodeBox::new(options).is_err());
    }

    #[test]
    fn test_insert_and_delete() {
        let mut codebox = python_box("x = 1\n");
        codebox.set_cursor(Position::new(1, 5));
        let events = recorder(&mut codebox);

        let end = codebox.insert(Position::new(1, 0), "if y:\n    ");
        assert_eq!(end, Position::new(2, 4));
        assert_eq!(codebox.cursor(), Position::new(2, 9));
        assert_eq!(codebox.tags_at(Position::new(1, 0)), vec![TokenKind::Keyword.name()]);

        let removed = codebox.delete(Position::new(1, 0), Position::new(2, 4));
        assert_eq!(removed, "if y:\n    ");
        assert_eq!(codebox.content(), "x = 1\n");
        assert_eq!(codebox.cursor(), Position::new(1, 5));
        assert_eq!(*events.borrow(), vec![Event::ContentChanged, Event::ContentChanged]);
    }

    #[test]
    fn test_cursor_queries() {
        let mut codebox = python_box("ab\ncdef\n");
        codebox.set_cursor_line_col(2, 10);
        assert_eq!(codebox.cursor(), Position::new(2, 4));
        assert_eq!(codebox.cursor_offset(), 7);
        assert_eq!(codebox.current_line_start(), Position::new(2, 0));
        assert_eq!(codebox.current_line_end(), Position::new(2, 4));

        codebox.set_cursor_offset(1);
        assert_eq!((codebox.current_line(), codebox.current_column()), (1, 1));
    }

    #[test]
    fn test_configure_and_cget() {
        let mut codebox = python_box("");
        codebox.configure(Setting::Language("js".to_string())).unwrap();
        codebox.configure(Setting::Highlighter("monokai".to_string())).unwrap();
        codebox.configure(Setting::FontSize(14)).unwrap();
        codebox.configure(Setting::TabWidth("2ch".to_string())).unwrap();
        assert!(codebox.configure(Setting::TabWidth("2".to_string())).is_err());

        assert_eq!(codebox.cget(SettingKey::Language), Setting::Language("js".to_string()));
        assert_eq!(
            codebox.cget(SettingKey::Highlighter),
            Setting::Highlighter("monokai".to_string())
        );
        assert_eq!(codebox.cget(SettingKey::FontSize), Setting::FontSize(14));
        assert_eq!(codebox.cget(SettingKey::TabWidth), Setting::TabWidth("2ch".to_string()));
        for key in SettingKey::ALL {
            assert_eq!(codebox.cget(key).key(), key);
        }
    }

    #[test]
    fn test_declaration_keywords_tagged_apart_from_names() {
        let codebox = python_box("def fib(n):\nclass Foo:");
        assert_eq!(codebox.tags_at(Position::new(1, 0)), vec![TokenKind::Keyword.name()]);
        assert_eq!(codebox.tags_at(Position::new(1, 4)), vec![TokenKind::NameFunction.name()]);
        assert_eq!(codebox.tags_at(Position::new(2, 0)), vec![TokenKind::Keyword.name()]);
        assert_eq!(codebox.tags_at(Position::new(2, 6)), vec![TokenKind::NameClass.name()]);
    }

    #[test]
    fn test_tag_style_resolution() {
        let codebox = python_box("");
        let function = codebox.tag_style(TokenKind::NameFunction.name());
        assert!(function.fg.is_some());
        assert_eq!(function.family.as_deref(), Some("monospace"));
        assert_eq!(function.size, Some(10));

        let selection = codebox.tag_style(SELECTION_TAG);
        assert_eq!(selection.bg, codebox.scheme().selection().bg);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("main.py");
        fs::write(&source, "def main():\n    return 0\n").unwrap();

        let mut codebox = CodeBox::new(CodeBoxOptions::default()).unwrap();
        let events = recorder(&mut codebox);
        codebox.load_from_file(&source).unwrap();
        assert_eq!(codebox.line_count(), 3);
        assert!(!codebox.is_modified());
        assert_eq!(events.borrow().last(), Some(&Event::LoadedFromFile));

        codebox.insert(Position::new(3, 0), "main()\n");
        assert!(codebox.is_modified());

        let copy = dir.path().join("copy.py");
        codebox.save_to_file(&copy).unwrap();
        assert_eq!(fs::read_to_string(&copy).unwrap(), codebox.content());
        assert!(!codebox.is_modified());
        assert_eq!(events.borrow().last(), Some(&Event::SavedToFile));

        let head = dir.path().join("head.py");
        codebox
            .save_range_to_file(&head, Position::new(1, 0), Position::new(1, 3))
            .unwrap();
        assert_eq!(fs::read_to_string(&head).unwrap(), "def");

        let end = codebox.insert_from_file(&head, Position::new(4, 0)).unwrap();
        assert_eq!(end, Position::new(4, 3));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut codebox = python_box("keep");
        let err = codebox.load_from_file("/no/such/file.py").unwrap_err();
        assert!(matches!(err, CodeBoxError::Io(_)));
        assert_eq!(codebox.content(), "keep");
    }
}
