//! Go language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenKind;

use super::{add_c_style_numbers, add_common_rules, DOUBLE_QUOTED};

/// Create Go language definition
pub fn go_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("Go");

    lang.rule("line_comment", r"//.*$", TokenKind::Comment, 100);
    lang.rule("block_comment", r"/\*(?:.*?\*/|.*$)", TokenKind::Comment, 99);

    lang.rule("raw_string", r"`[^`]*`?", TokenKind::String, 97);
    lang.rule("string", DOUBLE_QUOTED, TokenKind::String, 96);
    lang.rule("rune", r"'(?:[^'\\]|\\.)*'", TokenKind::String, 95);

    // Function and method names; the receiver is skipped
    lang.rule_after(
        "func_name",
        r"\bfunc\s+(?:\([^)]*\)\s*)?",
        r"\w+",
        TokenKind::NameFunction,
        90,
    );
    lang.rule_after("type_name", r"\btype\s+", r"\w+", TokenKind::NameClass, 90);

    lang.words("constant", &["true", "false", "nil", "iota"], TokenKind::KeywordConstant, 82);
    lang.words(
        "keyword",
        &[
            "break", "case", "chan", "const", "continue", "default", "defer", "else",
            "fallthrough", "for", "func", "go", "goto", "if", "import", "interface", "map",
            "package", "range", "return", "select", "struct", "switch", "type", "var",
        ],
        TokenKind::Keyword,
        80,
    );
    lang.words(
        "type",
        &[
            "any", "bool", "byte", "complex64", "complex128", "error", "float32", "float64",
            "int", "int8", "int16", "int32", "int64", "rune", "string", "uint", "uint8",
            "uint16", "uint32", "uint64", "uintptr",
        ],
        TokenKind::KeywordType,
        78,
    );
    lang.words(
        "builtin",
        &[
            "append", "cap", "clear", "close", "copy", "delete", "len", "make", "max", "min",
            "new", "panic", "print", "println", "recover",
        ],
        TokenKind::NameBuiltin,
        75,
    );

    lang.rule_before("call", r"\b[A-Za-z_]\w*", r"\s*\(", TokenKind::NameFunction, 70);

    add_c_style_numbers(&mut lang);
    lang.rule("operator", r":=|[+\-*/%&|^!<>=]+", TokenKind::Operator, 40);

    add_common_rules(&mut lang);
    lang
}
