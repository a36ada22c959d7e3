//! Kotlin language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenKind;

use super::{add_c_style_numbers, add_common_rules, DOUBLE_QUOTED};

/// Create Kotlin language definition
pub fn kotlin_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("Kotlin");

    lang.rule("line_comment", r"//.*$", TokenKind::Comment, 100);
    lang.rule("block_comment", r"/\*(?:.*?\*/|.*$)", TokenKind::Comment, 99);

    lang.rule("raw_string", r#""""(?:.*?"""|.*$)"#, TokenKind::String, 97);
    lang.rule("string", DOUBLE_QUOTED, TokenKind::String, 96);
    lang.rule("char", r"'(?:[^'\\]|\\.)*'", TokenKind::String, 95);

    lang.rule("annotation", r"@[\w:]+", TokenKind::NameDecorator, 94);

    lang.rule_after(
        "fun_name",
        r"\bfun\s+(?:<[^>]*>\s*)?",
        r"\w[\w.]*",
        TokenKind::NameFunction,
        90,
    );
    lang.rule_after(
        "class_name",
        r"\b(?:class|interface|object)\s+",
        r"\w+",
        TokenKind::NameClass,
        90,
    );

    lang.words("constant", &["true", "false", "null"], TokenKind::KeywordConstant, 82);
    lang.words(
        "keyword",
        &[
            "abstract", "as", "break", "by", "catch", "companion", "continue", "data", "do",
            "else", "enum", "finally", "for", "fun", "if", "import", "in", "init", "inline",
            "interface", "internal", "is", "lateinit", "object", "open", "override", "package",
            "private", "protected", "public", "return", "sealed", "super", "suspend", "this",
            "throw", "try", "typealias", "val", "var", "when", "while",
        ],
        TokenKind::Keyword,
        80,
    );
    lang.words(
        "type",
        &[
            "Any", "Boolean", "Byte", "Char", "Double", "Float", "Int", "Long", "Nothing",
            "Short", "String", "Unit",
        ],
        TokenKind::KeywordType,
        78,
    );
    lang.words(
        "builtin",
        &["println", "print", "listOf", "mapOf", "setOf", "mutableListOf", "arrayOf", "require"],
        TokenKind::NameBuiltin,
        75,
    );

    add_c_style_numbers(&mut lang);
    lang.rule("operator", r"[+\-*/%&|^!<>=?]+", TokenKind::Operator, 40);

    add_common_rules(&mut lang);
    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::builtin::test_support::{has, kinds};

    #[test]
    fn test_kotlin_function() {
        let lang = kotlin_language();
        let tokens = kinds(&lang, "fun main(args: Array<String>) {");
        assert_eq!(tokens[0], (TokenKind::Keyword, "fun".to_string()));
        assert!(has(&tokens, TokenKind::NameFunction, "main"));
        assert!(has(&tokens, TokenKind::KeywordType, "String"));
    }

    #[test]
    fn test_kotlin_class_keyword() {
        let lang = kotlin_language();
        let tokens = kinds(&lang, "data class Point(val x: Int)");
        assert!(has(&tokens, TokenKind::Keyword, "class"));
        assert!(has(&tokens, TokenKind::NameClass, "Point"));
    }

    #[test]
    fn test_kotlin_values() {
        let lang = kotlin_language();
        let tokens = kinds(&lang, "val text: String? = null // none yet");
        assert!(has(&tokens, TokenKind::Keyword, "val"));
        assert!(has(&tokens, TokenKind::KeywordConstant, "null"));
        assert!(has(&tokens, TokenKind::Comment, "// none yet"));
    }
}
