//! C and C++ language definitions

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenKind;

use super::{add_c_style_numbers, add_common_rules, DOUBLE_QUOTED};

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "const", "continue", "default", "do", "else", "enum", "extern",
    "for", "goto", "if", "inline", "register", "restrict", "return", "sizeof", "static",
    "struct", "switch", "typedef", "union", "volatile", "while",
];

const C_TYPES: &[&str] = &[
    "char", "double", "float", "int", "long", "short", "signed", "unsigned", "void", "_Bool",
    "size_t", "ptrdiff_t", "int8_t", "int16_t", "int32_t", "int64_t", "uint8_t", "uint16_t",
    "uint32_t", "uint64_t", "FILE",
];

const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "catch", "class", "concept", "consteval", "constexpr", "const_cast",
    "co_await", "co_return", "co_yield", "decltype", "delete", "dynamic_cast", "explicit",
    "export", "friend", "mutable", "namespace", "new", "noexcept", "operator", "private",
    "protected", "public", "reinterpret_cast", "requires", "static_assert", "static_cast",
    "template", "this", "throw", "try", "typeid", "typename", "using", "virtual",
];

fn c_family(name: &str) -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(name);

    // Comments
    lang.rule("line_comment", r"//.*$", TokenKind::Comment, 100);
    lang.rule("block_comment", r"/\*(?:.*?\*/|.*$)", TokenKind::Comment, 99);

    // Preprocessor directives, to end of line
    lang.rule("preprocessor", r"^\s*#\s*\w+.*$", TokenKind::CommentPreproc, 98);

    // Strings and characters
    lang.rule("string", DOUBLE_QUOTED, TokenKind::String, 96);
    lang.rule("char", r"'(?:[^'\\]|\\.)*'", TokenKind::String, 95);

    lang.words("keyword", C_KEYWORDS, TokenKind::Keyword, 80);
    lang.words("type", C_TYPES, TokenKind::KeywordType, 78);
    lang.words("constant", &["NULL"], TokenKind::KeywordConstant, 77);

    // Function calls and definitions
    lang.rule_before("function", r"\b[A-Za-z_]\w*", r"\s*\(", TokenKind::NameFunction, 70);

    add_c_style_numbers(&mut lang);

    // Operators
    lang.rule("operator", r"[+\-*/%&|^!<>=~?]+", TokenKind::Operator, 40);

    add_common_rules(&mut lang);
    lang
}

/// Create C language definition
pub fn c_language() -> LanguageDefinition {
    c_family("C")
}

/// Create C++ language definition, the C rules plus C++ keywords
pub fn cpp_language() -> LanguageDefinition {
    let mut lang = c_family("C++");
    lang.words("cpp_keyword", CPP_KEYWORDS, TokenKind::Keyword, 79);
    lang.words("cpp_constant", &["true", "false", "nullptr"], TokenKind::KeywordConstant, 77);
    lang.words("cpp_type", &["bool", "auto", "wchar_t"], TokenKind::KeywordType, 78);
    lang.rule("scope", r"::", TokenKind::Operator, 41);
    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::builtin::test_support::{has, kinds};

    #[test]
    fn test_c_preprocessor() {
        let lang = c_language();
        let tokens = kinds(&lang, "#include <stdio.h>");
        assert_eq!(tokens, vec![(TokenKind::CommentPreproc, "#include <stdio.h>".to_string())]);
    }

    #[test]
    fn test_c_function_and_types() {
        let lang = c_language();
        let tokens = kinds(&lang, "int main(void) { return 0; }");
        assert!(has(&tokens, TokenKind::KeywordType, "int"));
        assert!(has(&tokens, TokenKind::NameFunction, "main"));
        assert!(has(&tokens, TokenKind::Keyword, "return"));
        assert!(has(&tokens, TokenKind::Number, "0"));
    }

    #[test]
    fn test_cpp_extends_c() {
        let c = c_language();
        let cpp = cpp_language();
        let line = "\tcout << \"Hello World!\" << endl; // greet";
        assert!(!has(&kinds(&c, "using namespace std;"), TokenKind::Keyword, "namespace"));
        assert!(has(&kinds(&cpp, "using namespace std;"), TokenKind::Keyword, "namespace"));

        let tokens = kinds(&cpp, line);
        assert!(has(&tokens, TokenKind::String, "\"Hello World!\""));
        assert!(has(&tokens, TokenKind::Operator, "<<"));
        assert!(has(&tokens, TokenKind::Comment, "// greet"));
    }
}
