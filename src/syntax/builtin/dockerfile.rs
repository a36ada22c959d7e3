//! Dockerfile language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenKind;

use super::{add_common_rules, DOUBLE_QUOTED, SINGLE_QUOTED};

/// Create Dockerfile language definition
pub fn dockerfile_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("Dockerfile");

    lang.rule("comment", r"^\s*#.*$", TokenKind::Comment, 100);

    lang.rule("double_string", DOUBLE_QUOTED, TokenKind::String, 96);
    lang.rule("single_string", SINGLE_QUOTED, TokenKind::String, 96);

    // Instructions only count at the start of a line
    lang.rule_after(
        "instruction",
        r"^\s*",
        r"(?i)(?:from|run|cmd|label|maintainer|expose|env|add|copy|entrypoint|volume|user|workdir|arg|onbuild|stopsignal|healthcheck|shell)\b",
        TokenKind::Keyword,
        90,
    );
    lang.rule("stage", r"(?i)\bas\b", TokenKind::Keyword, 80);

    lang.rule("variable", r"\$\{[^}]*\}?|\$\w+", TokenKind::Name, 85);
    lang.rule("flag", r"--[\w-]+", TokenKind::NameAttribute, 70);

    lang.rule("number", r"\b\d+\b", TokenKind::Number, 63);
    lang.rule("operator", r"&&|\|\||[=\\|;]", TokenKind::Operator, 40);

    add_common_rules(&mut lang);
    lang
}
