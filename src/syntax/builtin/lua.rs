//! Lua language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenKind;

use super::{add_common_rules, DOUBLE_QUOTED, SINGLE_QUOTED};

/// Create Lua language definition
pub fn lua_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("Lua");

    lang.rule("block_comment", r"--\[=*\[(?:.*?\]=*\]|.*$)", TokenKind::Comment, 101);
    lang.rule("line_comment", r"--.*$", TokenKind::Comment, 100);

    lang.rule("long_string", r"\[=*\[(?:.*?\]=*\]|.*$)", TokenKind::String, 97);
    lang.rule("double_string", DOUBLE_QUOTED, TokenKind::String, 96);
    lang.rule("single_string", SINGLE_QUOTED, TokenKind::String, 96);

    lang.rule_after(
        "function_name",
        r"\bfunction\s+",
        r"\w[\w.:]*",
        TokenKind::NameFunction,
        90,
    );

    lang.words("constant", &["true", "false", "nil"], TokenKind::KeywordConstant, 82);
    lang.words(
        "keyword",
        &[
            "and", "break", "do", "else", "elseif", "end", "for", "function", "goto", "if", "in",
            "local", "not", "or", "repeat", "return", "then", "until", "while",
        ],
        TokenKind::Keyword,
        80,
    );
    lang.words(
        "builtin",
        &[
            "assert", "error", "getmetatable", "io", "ipairs", "math", "next", "os", "pairs",
            "pcall", "print", "rawget", "rawset", "require", "select", "setmetatable", "string",
            "table", "tonumber", "tostring", "type", "unpack", "xpcall",
        ],
        TokenKind::NameBuiltin,
        75,
    );

    lang.rule_before("call", r"\b[A-Za-z_]\w*", r"\s*[({]", TokenKind::NameFunction, 70);

    lang.rule("hex", r"\b0[xX][0-9a-fA-F]+\b", TokenKind::Number, 65);
    lang.rule("number", r"\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b", TokenKind::Number, 63);
    lang.rule("operator", r"\.\.\.?|[+\-*/%^#<>=~]+", TokenKind::Operator, 40);

    add_common_rules(&mut lang);
    lang
}
