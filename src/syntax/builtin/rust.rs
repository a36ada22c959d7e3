//! Rust language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenKind;

use super::{add_common_rules, DOUBLE_QUOTED};

/// Create Rust language definition
pub fn rust_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("Rust");

    // Doc comments before line comments for priority
    lang.rule("doc_comment", r"///.*$", TokenKind::Comment, 101);
    lang.rule("line_comment", r"//.*$", TokenKind::Comment, 100);
    // Block comments are only recognized when they close on the same line
    lang.rule("block_comment", r"/\*.*?\*/", TokenKind::Comment, 99);

    // Strings
    lang.rule("raw_string", r##"\br#*"[^"]*"#*"##, TokenKind::String, 97);
    lang.rule("string", &format!("b?{}", DOUBLE_QUOTED), TokenKind::String, 96);

    // Attributes
    lang.rule("attribute", r"#!?\[[^\]]*\]?", TokenKind::NameDecorator, 95);

    // Character literals
    lang.rule("char", r"b?'(?:[^'\\]|\\.|\\u\{[0-9a-fA-F]+\})'", TokenKind::String, 90);

    // Lifetimes (after char to avoid conflict)
    lang.rule("lifetime", r"'\w+", TokenKind::NameDecorator, 89);

    // Macros (ending with !)
    lang.rule("macro", r"\b\w+!", TokenKind::NameFunction, 85);

    lang.words("constant", &["true", "false"], TokenKind::KeywordConstant, 81);
    lang.words(
        "keyword",
        &[
            "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
            "extern", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
            "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
            "type", "union", "unsafe", "use", "where", "while",
        ],
        TokenKind::Keyword,
        80,
    );

    // Built-in types
    lang.words(
        "type",
        &[
            "bool", "char", "str", "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16",
            "i32", "i64", "i128", "isize", "f32", "f64",
        ],
        TokenKind::KeywordType,
        75,
    );
    lang.words(
        "prelude",
        &["String", "Vec", "Box", "Option", "Result", "Some", "None", "Ok", "Err"],
        TokenKind::NameBuiltin,
        74,
    );

    // Function calls and definitions
    lang.rule_before("function", r"\b[a-z_][a-zA-Z0-9_]*", r"\s*\(", TokenKind::NameFunction, 70);

    // Type names (capitalized identifiers)
    lang.rule("type_name", r"\b[A-Z][a-zA-Z0-9_]*\b", TokenKind::NameClass, 60);

    // Numbers
    lang.rule("hex", r"\b0x[0-9a-fA-F_]+\b", TokenKind::Number, 65);
    lang.rule("binary", r"\b0b[01_]+\b", TokenKind::Number, 65);
    lang.rule("octal", r"\b0o[0-7_]+\b", TokenKind::Number, 65);
    lang.rule("float", r"\b\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?(?:f32|f64)?\b", TokenKind::Number, 64);
    lang.rule(
        "integer",
        r"\b\d[\d_]*(?:u8|u16|u32|u64|u128|usize|i8|i16|i32|i64|i128|isize)?\b",
        TokenKind::Number,
        63,
    );

    // Operators
    lang.rule("operator", r"[+\-*/%&|^!<>=@?]+", TokenKind::Operator, 40);

    add_common_rules(&mut lang);
    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::builtin::test_support::{has, kinds};

    #[test]
    fn test_rust_keywords() {
        let lang = rust_language();
        let tokens = kinds(&lang, "let mut x = 5;");
        assert!(has(&tokens, TokenKind::Keyword, "let"));
        assert!(has(&tokens, TokenKind::Keyword, "mut"));
        assert!(has(&tokens, TokenKind::Number, "5"));
    }

    #[test]
    fn test_rust_string() {
        let lang = rust_language();
        let tokens = kinds(&lang, r#"let s = "he said \"hi\"";"#);
        assert!(has(&tokens, TokenKind::String, r#""he said \"hi\"""#));
    }

    #[test]
    fn test_rust_comment() {
        let lang = rust_language();
        let tokens = kinds(&lang, "// this is a comment");
        assert_eq!(tokens, vec![(TokenKind::Comment, "// this is a comment".to_string())]);
    }

    #[test]
    fn test_rust_macro_and_lifetime() {
        let lang = rust_language();
        let tokens = kinds(&lang, "fn first(v: &'a str) { println!(\"x\"); }");
        assert!(has(&tokens, TokenKind::NameFunction, "println!"));
        assert!(has(&tokens, TokenKind::NameDecorator, "'a"));
        assert!(has(&tokens, TokenKind::NameFunction, "first"));
        assert!(has(&tokens, TokenKind::KeywordType, "str"));
    }

    #[test]
    fn test_rust_char_literal() {
        let lang = rust_language();
        let tokens = kinds(&lang, "let c = 'x';");
        assert!(has(&tokens, TokenKind::String, "'x'"));
    }
}
