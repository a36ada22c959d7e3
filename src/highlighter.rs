//! Incremental highlighter
//!
//! Keeps the token tags of a buffer in step with its text. Tokenization
//! is line-local: only the lines an edit touched are re-tokenized, so a
//! construct spanning lines (block comments, triple-quoted strings) is
//! highlighted one line at a time and may come out wrong.

use std::fmt;
use std::sync::Arc;

use crate::buffer::{Position, TextBuffer};
use crate::error::{CodeBoxError, Result};
use crate::syntax::{ResolvedLanguage, Tokenizer};
use crate::tags::SELECTION_TAG;

/// Tags a buffer with the tokens of one language
#[derive(Clone)]
pub struct Highlighter {
    /// Canonical language key
    language: String,
    tokenizer: Arc<dyn Tokenizer>,
}

impl Highlighter {
    pub fn new(language: &str, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self {
            language: language.to_string(),
            tokenizer,
        }
    }

    /// Highlighter for a resolved registry entry
    pub fn from_resolved(resolved: ResolvedLanguage) -> Self {
        Self {
            language: resolved.key,
            tokenizer: resolved.tokenizer,
        }
    }

    /// Canonical key of the language being highlighted
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    /// Re-tag one line from a fresh tokenization
    ///
    /// Every tag but the selection is removed from the line first, so the
    /// line ends up covered by token tags with no gap and no overlap.
    pub fn highlight_line(&self, buffer: &mut TextBuffer, line: usize) -> Result<()> {
        if line == 0 || line > buffer.line_count() {
            return Err(CodeBoxError::InvalidPosition(Position::line_start(line)));
        }
        buffer.tags_mut().remove_all_except(
            SELECTION_TAG,
            Position::line_start(line),
            Position::line_start(line + 1),
        );
        self.tag_line(buffer, line);
        Ok(())
    }

    /// Add the token tags of one line that has no token tags yet
    fn tag_line(&self, buffer: &mut TextBuffer, line: usize) {
        let text = buffer.line_text(line).to_string();
        let tags = buffer.tags_mut();
        let mut column = 0;
        for token in self.tokenizer.tokenize(&text) {
            let len = token.char_len();
            tags.add(
                token.kind.name(),
                Position::new(line, column),
                Position::new(line, column + len),
            );
            column += len;
        }
    }

    /// Re-tag an inclusive run of lines in ascending order
    pub fn highlight_lines(&self, buffer: &mut TextBuffer, first: usize, last: usize) -> Result<()> {
        for line in first..=last {
            self.highlight_line(buffer, line)?;
        }
        Ok(())
    }

    /// Drop every token tag and re-tag the whole buffer
    pub fn highlight_all(&self, buffer: &mut TextBuffer) {
        buffer.tags_mut().clear_except(SELECTION_TAG);
        for line in 1..=buffer.line_count() {
            self.tag_line(buffer, line);
        }
        tracing::debug!(
            language = %self.language,
            lines = buffer.line_count(),
            "highlighted buffer"
        );
    }

    /// Insert text and re-tag every line it touched
    ///
    /// Returns the position just after the inserted text.
    pub fn insert(&self, buffer: &mut TextBuffer, pos: Position, text: &str) -> Position {
        let at = buffer.clamp(pos);
        let end = buffer.insert(at, text);
        // Both lines exist right after the insert
        let _ = self.highlight_lines(buffer, at.line, end.line);
        end
    }

    /// Delete `[start, end)` and re-tag the line the deletion collapsed onto
    pub fn delete(&self, buffer: &mut TextBuffer, start: Position, end: Position) -> String {
        let start = buffer.clamp(start);
        let removed = buffer.delete(start, end);
        let _ = self.highlight_line(buffer, start.line);
        removed
    }
}

impl fmt::Debug for Highlighter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Highlighter")
            .field("language", &self.language)
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{LanguageRegistry, TokenKind};
    use crate::tags::StyleTag;

    fn python() -> Highlighter {
        Highlighter::from_resolved(LanguageRegistry::global().resolve("python"))
    }

    fn token_tags(buffer: &TextBuffer, line: usize) -> Vec<StyleTag> {
        buffer
            .tags()
            .tags_in(Position::line_start(line), buffer.line_end(line))
            .into_iter()
            .filter(|tag| tag.name != SELECTION_TAG)
            .collect()
    }

    /// Fresh tokenization of a line as (kind name, start col, end col),
    /// with neighbours of the same kind merged the way tags merge
    fn expected_spans(highlighter: &Highlighter, text: &str) -> Vec<(&'static str, usize, usize)> {
        let mut spans: Vec<(&'static str, usize, usize)> = Vec::new();
        let mut column = 0;
        for token in highlighter.tokenizer().tokenize(text) {
            let len = token.char_len();
            match spans.last_mut() {
                Some(last) if last.0 == token.kind.name() => last.2 += len,
                _ => spans.push((token.kind.name(), column, column + len)),
            }
            column += len;
        }
        spans
    }

    fn assert_covered(highlighter: &Highlighter, buffer: &TextBuffer) {
        for line in 1..=buffer.line_count() {
            let actual: Vec<_> = token_tags(buffer, line)
                .into_iter()
                .map(|tag| {
                    assert_eq!(tag.start.line, line);
                    assert_eq!(tag.end.line, line);
                    (tag.name, tag.start.column, tag.end.column)
                })
                .collect();
            let expected: Vec<_> = expected_spans(highlighter, buffer.line_text(line))
                .into_iter()
                .map(|(name, start, end)| (name.to_string(), start, end))
                .collect();
            assert_eq!(actual, expected, "line {}", line);
        }
    }

    const SOURCE: &str = "import os\n\ndef main():\n    print(\"héllo\")  # greet\n    return 0\n";

    #[test]
    fn test_highlight_all_covers_every_line() {
        let highlighter = python();
        let mut buffer = TextBuffer::from_text(SOURCE);
        highlighter.highlight_all(&mut buffer);
        assert_covered(&highlighter, &buffer);

        let tags = token_tags(&buffer, 1);
        assert_eq!(tags[0].name, TokenKind::Keyword.name());
        assert_eq!(tags[0].end, Position::new(1, 6));
    }

    #[test]
    fn test_highlight_is_idempotent() {
        let highlighter = python();
        let mut buffer = TextBuffer::from_text(SOURCE);
        highlighter.highlight_all(&mut buffer);
        let first = buffer.tags().tags_in(Position::default(), buffer.end());
        highlighter.highlight_all(&mut buffer);
        highlighter.highlight_line(&mut buffer, 3).unwrap();
        assert_eq!(buffer.tags().tags_in(Position::default(), buffer.end()), first);
    }

    #[test]
    fn test_empty_content_has_no_tags() {
        let highlighter = python();
        let mut buffer = TextBuffer::from_text("");
        highlighter.highlight_all(&mut buffer);
        assert_eq!(buffer.tags().range_count(), 0);
    }

    #[test]
    fn test_trailing_break_is_three_lines() {
        let highlighter = python();
        let mut buffer = TextBuffer::from_text("a\nb\n");
        highlighter.highlight_all(&mut buffer);
        assert_eq!(buffer.line_count(), 3);
        assert!(token_tags(&buffer, 3).is_empty());
        assert_covered(&highlighter, &buffer);
    }

    #[test]
    fn test_line_out_of_range() {
        let highlighter = python();
        let mut buffer = TextBuffer::from_text("x = 1");
        assert!(matches!(
            highlighter.highlight_line(&mut buffer, 2),
            Err(CodeBoxError::InvalidPosition(_))
        ));
        assert!(highlighter.highlight_line(&mut buffer, 0).is_err());
    }

    #[test]
    fn test_single_line_insert() {
        let highlighter = python();
        let mut buffer = TextBuffer::from_text("x = 1\ny = 2");
        highlighter.highlight_all(&mut buffer);
        let end = highlighter.insert(&mut buffer, Position::new(1, 0), "if ");
        assert_eq!(end, Position::new(1, 3));
        assert_covered(&highlighter, &buffer);
    }

    #[test]
    fn test_multiline_insert_tags_each_new_line() {
        let highlighter = python();
        let mut buffer = TextBuffer::from_text("x = \"abc\"\nz = 3");
        highlighter.highlight_all(&mut buffer);

        // Splits the string literal on line 1 across three lines
        let end = highlighter.insert(&mut buffer, Position::new(1, 6), "\ndef f():\n    pass ");
        assert_eq!(end, Position::new(3, 9));
        assert_eq!(buffer.line_count(), 4);
        assert_covered(&highlighter, &buffer);

        let line2 = token_tags(&buffer, 2);
        assert_eq!(line2[0].name, TokenKind::Keyword.name());
    }

    #[test]
    fn test_insert_lines_at_document_end() {
        let highlighter = python();
        let mut buffer = TextBuffer::from_text("pass");
        highlighter.highlight_all(&mut buffer);

        let end = highlighter.insert(&mut buffer, Position::new(1, 4), "x\ny\n");
        assert_eq!(end, Position::new(3, 0));
        assert_eq!(buffer.line_count(), 3);
        assert_eq!(buffer.line_text(1), "passx");
        assert_covered(&highlighter, &buffer);

        for line in 1..=2 {
            let tags = token_tags(&buffer, line);
            assert_eq!(tags.first().map(|t| t.start), Some(Position::line_start(line)));
            assert_eq!(tags.last().map(|t| t.end), Some(buffer.line_end(line)));
        }
        let line2 = token_tags(&buffer, 2);
        assert_eq!(line2[0].name, TokenKind::Name.name());
        assert!(token_tags(&buffer, 3).is_empty());
    }

    #[test]
    fn test_delete_rejoins_and_retags() {
        let highlighter = python();
        let mut buffer = TextBuffer::from_text("def f():\n    return 1\n");
        highlighter.highlight_all(&mut buffer);
        let removed = highlighter.delete(&mut buffer, Position::new(1, 8), Position::new(2, 4));
        assert_eq!(removed, "\n    ");
        assert_eq!(buffer.line_text(1), "def f():return 1");
        assert_covered(&highlighter, &buffer);
    }

    #[test]
    fn test_selection_survives_highlight() {
        let highlighter = python();
        let mut buffer = TextBuffer::from_text("pass\npass");
        buffer.tags_mut().add(SELECTION_TAG, Position::new(1, 1), Position::new(2, 2));
        highlighter.highlight_all(&mut buffer);
        highlighter.insert(&mut buffer, Position::new(2, 4), "\nx");
        let sel = buffer.tags().ranges(SELECTION_TAG);
        assert_eq!(sel.len(), 1);
        assert_eq!(sel[0].start, Position::new(1, 1));
        assert_eq!(sel[0].end, Position::new(2, 2));
    }

    #[test]
    fn test_language_change_retags() {
        let mut buffer = TextBuffer::from_text("let x = 1;");
        python().highlight_all(&mut buffer);
        let before = buffer.tags().tags_in(Position::default(), buffer.end());

        let rust = Highlighter::from_resolved(LanguageRegistry::global().resolve("rs"));
        assert_eq!(rust.language(), "rust");
        rust.highlight_all(&mut buffer);
        assert_covered(&rust, &buffer);
        assert_ne!(buffer.tags().tags_in(Position::default(), buffer.end()), before);
    }
}
