//! Syntax highlighting support
//!
//! This module provides the tokenizer seam and everything behind it:
//! - Token kinds and their dotted tag names
//! - Regex rule sets that tokenize one line at a time
//! - The registry resolving language names to tokenizers
//! - Styles a color scheme assigns to token kinds

mod builtin;
mod language;
mod registry;
mod rules;
mod style;
mod tokenizer;
mod tokens;

pub use language::LanguageDefinition;
pub use registry::{
    LanguageRegistry, ResolvedLanguage, TokenizerFactory, FALLBACK_LANGUAGE, PLAIN_LANGUAGE,
};
pub use rules::PatternRule;
pub use style::{Color, Style};
pub use tokenizer::{PlainTokenizer, Token, Tokenizer};
pub use tokens::{parent_name, TokenKind};
