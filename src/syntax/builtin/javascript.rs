//! JavaScript and TypeScript language definitions

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenKind;

use super::{add_c_style_numbers, add_common_rules, DOUBLE_QUOTED, SINGLE_QUOTED};

fn ecmascript(name: &str) -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(name);

    lang.rule("line_comment", r"//.*$", TokenKind::Comment, 100);
    lang.rule("block_comment", r"/\*(?:.*?\*/|.*$)", TokenKind::Comment, 99);

    lang.rule("template", r"`(?:[^`\\]|\\.)*`?", TokenKind::String, 97);
    lang.rule("double_string", DOUBLE_QUOTED, TokenKind::String, 96);
    lang.rule("single_string", SINGLE_QUOTED, TokenKind::String, 96);

    lang.words(
        "constant",
        &["true", "false", "null", "undefined", "NaN", "Infinity"],
        TokenKind::KeywordConstant,
        82,
    );
    lang.words(
        "keyword",
        &[
            "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
            "default", "delete", "do", "else", "export", "extends", "finally", "for", "from",
            "function", "if", "import", "in", "instanceof", "let", "new", "of", "return",
            "static", "super", "switch", "throw", "try", "typeof", "var", "void", "while",
            "with", "yield",
        ],
        TokenKind::Keyword,
        80,
    );
    lang.words(
        "builtin",
        &["this", "console", "window", "document", "Math", "JSON", "Promise", "Object", "Array"],
        TokenKind::NameBuiltin,
        75,
    );

    lang.rule_before("function", r"\b[A-Za-z_$][\w$]*", r"\s*\(", TokenKind::NameFunction, 70);
    lang.rule("class_name", r"\b[A-Z][\w$]*\b", TokenKind::NameClass, 60);

    add_c_style_numbers(&mut lang);
    lang.rule("operator", r"[+\-*/%&|^!<>=~?]+", TokenKind::Operator, 40);

    add_common_rules(&mut lang);
    lang
}

/// Create JavaScript language definition
pub fn javascript_language() -> LanguageDefinition {
    ecmascript("JavaScript")
}

/// Create TypeScript language definition, JavaScript plus type syntax
pub fn typescript_language() -> LanguageDefinition {
    let mut lang = ecmascript("TypeScript");
    lang.words(
        "ts_keyword",
        &[
            "abstract", "as", "declare", "enum", "implements", "interface", "keyof", "namespace",
            "private", "protected", "public", "readonly", "type",
        ],
        TokenKind::Keyword,
        79,
    );
    lang.words(
        "ts_type",
        &["any", "boolean", "never", "number", "object", "string", "symbol", "unknown", "void"],
        TokenKind::KeywordType,
        78,
    );
    lang.rule("ts_decorator", r"@\w+", TokenKind::NameDecorator, 95);
    lang
}
