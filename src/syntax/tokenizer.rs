//! The tokenizer seam
//!
//! A tokenizer turns one string into an ordered sequence of tokens whose
//! texts concatenate back to the input exactly. Tokenizers are total:
//! anything they do not recognize comes back as `TokenKind::Text`.

use super::tokens::TokenKind;

/// A (kind, text) pair produced by a tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Maps a string to a lossless, gapless token sequence
pub trait Tokenizer: Send + Sync {
    /// Human-readable tokenizer name (e.g. "Python")
    fn name(&self) -> &str;

    /// Tokenize `text`; empty input yields no tokens
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>>;
}

/// Tokenizer that marks everything as plain text
#[derive(Debug, Default)]
pub struct PlainTokenizer;

impl Tokenizer for PlainTokenizer {
    fn name(&self) -> &str {
        "Text only"
    }

    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        if text.is_empty() {
            Vec::new()
        } else {
            vec![Token::new(TokenKind::Text, text)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_tokenizer() {
        let tokens = PlainTokenizer.tokenize("any text");
        assert_eq!(tokens, vec![Token::new(TokenKind::Text, "any text")]);
        assert!(PlainTokenizer.tokenize("").is_empty());
    }

    #[test]
    fn test_char_len() {
        assert_eq!(Token::new(TokenKind::String, "\"é\"").char_len(), 3);
    }
}
