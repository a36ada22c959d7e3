//! Markdown language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenKind;

/// Create Markdown language definition
pub fn markdown_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("Markdown");

    // Headers (# Header)
    lang.rule("header", r"^#{1,6}\s.*$", TokenKind::Heading, 100);

    // Code fences (``` or ~~~)
    lang.rule("code_fence", r"^(?:```|~~~).*$", TokenKind::String, 99);

    // Blockquotes
    lang.rule("blockquote", r"^>.*$", TokenKind::Comment, 98);

    // Inline code
    lang.rule("inline_code", r"`[^`]+`", TokenKind::String, 90);

    // Bold (**text** or __text__), then italic
    lang.rule("bold", r"\*\*[^*]+\*\*|__[^_]+__", TokenKind::Keyword, 85);
    lang.rule("italic", r"\*[^*]+\*|\b_[^_]+_\b", TokenKind::KeywordType, 84);

    // Links [text](url) and images
    lang.rule("link", r"!?\[[^\]]*\]\([^)]*\)", TokenKind::NameFunction, 80);

    // List markers
    lang.rule("list", r"^\s*(?:[-*+]|\d+\.)\s", TokenKind::Punctuation, 75);

    // Horizontal rules
    lang.rule("hr", r"^(?:---+|\*\*\*+|___+)\s*$", TokenKind::Punctuation, 101);

    lang
}
