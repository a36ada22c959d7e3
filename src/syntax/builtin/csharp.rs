//! C# language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenKind;

use super::{add_c_style_numbers, add_common_rules, DOUBLE_QUOTED};

/// Create C# language definition
pub fn csharp_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("C#");

    lang.rule("line_comment", r"//.*$", TokenKind::Comment, 100);
    lang.rule("block_comment", r"/\*(?:.*?\*/|.*$)", TokenKind::Comment, 99);
    lang.rule("preprocessor", r"^\s*#\s*\w+.*$", TokenKind::CommentPreproc, 98);

    // Verbatim strings double their quotes instead of escaping them
    lang.rule("verbatim_string", r#"\$?@"(?:[^"]|"")*"?"#, TokenKind::String, 97);
    lang.rule("string", &format!(r"\$?{}", DOUBLE_QUOTED), TokenKind::String, 96);
    lang.rule("char", r"'(?:[^'\\]|\\.)*'", TokenKind::String, 95);

    lang.rule_after(
        "type_decl",
        r"\b(?:class|interface|struct|enum|record)\s+",
        r"\w+",
        TokenKind::NameClass,
        90,
    );

    lang.words("constant", &["true", "false", "null"], TokenKind::KeywordConstant, 82);
    lang.words(
        "keyword",
        &[
            "abstract", "as", "async", "await", "base", "break", "case", "catch", "checked",
            "class", "const", "continue", "default", "delegate", "do", "else", "enum", "event",
            "explicit", "extern", "finally", "fixed", "for", "foreach", "get", "goto", "if",
            "implicit", "in", "init", "interface", "internal", "is", "lock", "namespace", "new",
            "operator", "out", "override", "params", "private", "protected", "public",
            "readonly", "record", "ref", "return", "sealed", "set", "sizeof", "stackalloc",
            "static", "struct", "switch", "this", "throw", "try", "typeof", "unchecked",
            "unsafe", "using", "var", "virtual", "volatile", "when", "where", "while", "yield",
        ],
        TokenKind::Keyword,
        80,
    );
    lang.words(
        "type",
        &[
            "bool", "byte", "char", "decimal", "double", "dynamic", "float", "int", "long",
            "nint", "nuint", "object", "sbyte", "short", "string", "uint", "ulong", "ushort",
            "void",
        ],
        TokenKind::KeywordType,
        78,
    );

    lang.rule_before(
        "method",
        r"\b[A-Za-z_]\w*",
        r"\s*(?:<[^>]*>)?\s*\(",
        TokenKind::NameFunction,
        70,
    );

    add_c_style_numbers(&mut lang);
    lang.rule("operator", r"=>|[+\-*/%&|^!<>=~?]+", TokenKind::Operator, 40);

    add_common_rules(&mut lang);
    lang
}
