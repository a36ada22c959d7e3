//! Built-in language definitions
//!
//! This module provides tokenizers for common programming languages,
//! plus the rules most of them share.

mod bash;
mod c;
mod csharp;
mod css;
mod dockerfile;
mod go;
mod html;
mod java;
mod javascript;
mod json;
mod kotlin;
mod lua;
mod markdown;
mod python;
mod ruby;
mod rust;
mod sql;
mod toml_lang;
mod yaml;

pub use bash::bash_language;
pub use c::{c_language, cpp_language};
pub use csharp::csharp_language;
pub use css::css_language;
pub use dockerfile::dockerfile_language;
pub use go::go_language;
pub use html::html_language;
pub use java::java_language;
pub use javascript::{javascript_language, typescript_language};
pub use json::json_language;
pub use kotlin::kotlin_language;
pub use lua::lua_language;
pub use markdown::markdown_language;
pub use python::python_language;
pub use ruby::ruby_language;
pub use rust::rust_language;
pub use sql::sql_language;
pub use toml_lang::toml_language;
pub use yaml::yaml_language;

use super::language::LanguageDefinition;
use super::tokens::TokenKind;

/// Double-quoted string with backslash escapes; runs to end of line if unterminated
pub(crate) const DOUBLE_QUOTED: &str = r#""(?:[^"\\]|\\.)*"?"#;
/// Single-quoted string with backslash escapes; runs to end of line if unterminated
pub(crate) const SINGLE_QUOTED: &str = r"'(?:[^'\\]|\\.)*'?";

/// Whitespace, identifiers and punctuation, at the lowest priorities
pub(crate) fn add_common_rules(lang: &mut LanguageDefinition) {
    lang.rule("punctuation", r"[()\[\]{},;.:]", TokenKind::Punctuation, 3);
    lang.rule("identifier", r"[A-Za-z_][A-Za-z0-9_]*", TokenKind::Name, 2);
    lang.rule("whitespace", r"[ \t]+", TokenKind::Whitespace, 1);
}

/// C-family numbers: hex, binary, float, integer
pub(crate) fn add_c_style_numbers(lang: &mut LanguageDefinition) {
    lang.rule("hex", r"\b0[xX][0-9a-fA-F_]+[uUlL]*\b", TokenKind::Number, 65);
    lang.rule("binary", r"\b0[bB][01_]+\b", TokenKind::Number, 65);
    lang.rule("float", r"\b\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?[fFdD]?\b", TokenKind::Number, 64);
    lang.rule("integer", r"\b\d[\d_]*[uUlL]*\b", TokenKind::Number, 63);
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::syntax::language::LanguageDefinition;
    use crate::syntax::tokenizer::Tokenizer;
    use crate::syntax::tokens::TokenKind;

    /// Tokenize and assert the tokens rebuild the input
    pub fn kinds(lang: &LanguageDefinition, text: &str) -> Vec<(TokenKind, String)> {
        let tokens = lang.tokenize(text);
        let rebuilt: String = tokens.iter().map(|t| t.text).collect();
        assert_eq!(rebuilt, text, "tokens must cover the input exactly");
        tokens.into_iter().map(|t| (t.kind, t.text.to_string())).collect()
    }

    /// Whether `text` was produced as one token of `kind`
    pub fn has(tokens: &[(TokenKind, String)], kind: TokenKind, text: &str) -> bool {
        tokens.iter().any(|(k, t)| *k == kind && t == text)
    }
}
