//! Java language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenKind;

use super::{add_c_style_numbers, add_common_rules, DOUBLE_QUOTED};

/// Create Java language definition
pub fn java_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("Java");

    lang.rule("line_comment", r"//.*$", TokenKind::Comment, 100);
    lang.rule("block_comment", r"/\*(?:.*?\*/|.*$)", TokenKind::Comment, 99);

    lang.rule("text_block", r#""""(?:.*?"""|.*$)"#, TokenKind::String, 97);
    lang.rule("string", DOUBLE_QUOTED, TokenKind::String, 96);
    lang.rule("char", r"'(?:[^'\\]|\\.)*'", TokenKind::String, 95);

    lang.rule("annotation", r"@\w+", TokenKind::NameDecorator, 94);

    lang.rule_after(
        "class_name",
        r"\b(?:class|interface|enum|record)\s+",
        r"\w+",
        TokenKind::NameClass,
        90,
    );

    lang.words("constant", &["true", "false", "null"], TokenKind::KeywordConstant, 82);
    lang.words(
        "keyword",
        &[
            "abstract", "assert", "break", "case", "catch", "class", "continue", "default",
            "do", "else", "enum", "extends", "final", "finally", "for", "if", "implements",
            "import", "instanceof", "interface", "native", "new", "package", "private",
            "protected", "public", "record", "return", "static", "super", "switch",
            "synchronized", "this", "throw", "throws", "transient", "try", "var", "volatile",
            "while", "yield",
        ],
        TokenKind::Keyword,
        80,
    );
    lang.words(
        "type",
        &["boolean", "byte", "char", "double", "float", "int", "long", "short", "void"],
        TokenKind::KeywordType,
        78,
    );

    lang.rule_before("method", r"\b[a-z_$][\w$]*", r"\s*\(", TokenKind::NameFunction, 70);
    lang.rule("type_name", r"\b[A-Z][\w$]*\b", TokenKind::NameClass, 60);

    add_c_style_numbers(&mut lang);
    lang.rule("operator", r"[+\-*/%&|^!<>=~?]+", TokenKind::Operator, 40);

    add_common_rules(&mut lang);
    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::builtin::test_support::{has, kinds};

    #[test]
    fn test_java_class_header() {
        let lang = java_language();
        let tokens = kinds(&lang, "public final class Main extends Base {");
        assert!(has(&tokens, TokenKind::Keyword, "public"));
        assert!(has(&tokens, TokenKind::Keyword, "class"));
        assert!(has(&tokens, TokenKind::NameClass, "Main"));
        assert!(has(&tokens, TokenKind::NameClass, "Base"));
    }

    #[test]
    fn test_java_method_body() {
        let lang = java_language();
        let tokens = kinds(&lang, r#"    @Override int size() { return "x".length(); }"#);
        assert!(has(&tokens, TokenKind::NameDecorator, "@Override"));
        assert!(has(&tokens, TokenKind::KeywordType, "int"));
        assert!(has(&tokens, TokenKind::NameFunction, "size"));
        assert!(has(&tokens, TokenKind::String, r#""x""#));
        assert!(has(&tokens, TokenKind::NameFunction, "length"));
    }
}
