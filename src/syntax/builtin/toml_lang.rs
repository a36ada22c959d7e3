//! TOML language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenKind;

use super::{add_common_rules, DOUBLE_QUOTED};

/// Create TOML language definition
pub fn toml_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("TOML");

    // Comments
    lang.rule("comment", r"#.*$", TokenKind::Comment, 100);

    // Table headers
    lang.rule("table", r"^\s*\[\[?[^\]]*\]\]?", TokenKind::Heading, 98);

    // Multi-line strings only close on the line they open
    lang.rule("multiline_basic", r#""""(?:.*?"""|.*$)"#, TokenKind::String, 97);
    lang.rule("multiline_literal", r"'''(?:.*?'''|.*$)", TokenKind::String, 97);
    lang.rule("basic_string", DOUBLE_QUOTED, TokenKind::String, 96);
    lang.rule("literal_string", r"'[^']*'?", TokenKind::String, 96);

    // Keys: bare or dotted, at line start before '='
    lang.rule_before("key", r"^\s*[A-Za-z0-9_\-.]+", r"\s*=", TokenKind::NameTag, 90);

    lang.words("boolean", &["true", "false"], TokenKind::KeywordConstant, 80);

    // Dates before numbers
    lang.rule(
        "datetime",
        r"\b\d{4}-\d{2}-\d{2}(?:[T ]\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:\d{2})?)?",
        TokenKind::Number,
        70,
    );
    lang.rule("hex", r"\b0x[0-9a-fA-F_]+\b", TokenKind::Number, 65);
    lang.rule("float", r"[+-]?\b\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?\b", TokenKind::Number, 64);
    lang.rule("integer", r"[+-]?\b\d[\d_]*\b", TokenKind::Number, 63);

    lang.rule("operator", r"=", TokenKind::Operator, 40);

    add_common_rules(&mut lang);
    lang
}
