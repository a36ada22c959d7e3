//! Ruby language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenKind;

use super::{add_common_rules, DOUBLE_QUOTED, SINGLE_QUOTED};

/// Create Ruby language definition
pub fn ruby_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("Ruby");

    lang.rule("comment", r"#.*$", TokenKind::Comment, 100);

    lang.rule("double_string", DOUBLE_QUOTED, TokenKind::String, 96);
    lang.rule("single_string", SINGLE_QUOTED, TokenKind::String, 96);
    lang.rule("symbol", r":[A-Za-z_]\w*[?!]?", TokenKind::String, 94);
    lang.rule("scope", r"::", TokenKind::Operator, 93);

    lang.rule_after(
        "def_name",
        r"\bdef\s+(?:self\.)?",
        r"\w+[?!=]?",
        TokenKind::NameFunction,
        90,
    );
    lang.rule_after("class_name", r"\b(?:class|module)\s+", r"\w+", TokenKind::NameClass, 90);

    lang.rule("variable", r"@@?\w+|\$\w+", TokenKind::Name, 85);

    lang.words("constant", &["true", "false", "nil"], TokenKind::KeywordConstant, 82);
    lang.words(
        "keyword",
        &[
            "alias", "and", "begin", "break", "case", "class", "def", "do", "else", "elsif",
            "end", "ensure", "for", "if", "in", "module", "next", "not", "or", "redo", "rescue",
            "retry", "return", "super", "then", "undef", "unless", "until", "when", "while",
            "yield", "__FILE__", "__LINE__",
        ],
        TokenKind::Keyword,
        80,
    );
    lang.words(
        "builtin",
        &[
            "attr_accessor", "attr_reader", "attr_writer", "extend", "include", "lambda",
            "loop", "p", "print", "private", "proc", "protected", "public", "puts", "raise",
            "require", "require_relative", "self",
        ],
        TokenKind::NameBuiltin,
        75,
    );

    lang.rule("constant_name", r"\b[A-Z]\w*", TokenKind::NameClass, 60);

    lang.rule("hex", r"\b0[xX][0-9a-fA-F_]+\b", TokenKind::Number, 65);
    lang.rule("number", r"\b\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?\b", TokenKind::Number, 63);
    lang.rule("operator", r"[+\-*/%&|^!<>=~?]+", TokenKind::Operator, 40);

    add_common_rules(&mut lang);
    lang
}
