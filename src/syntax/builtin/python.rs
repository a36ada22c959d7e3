//! Python language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenKind;

use super::{add_common_rules, DOUBLE_QUOTED, SINGLE_QUOTED};

/// Create Python language definition
pub fn python_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("Python");

    // Comments
    lang.rule("comment", r"#.*$", TokenKind::Comment, 100);

    // Triple-quoted strings close on the same line or run to its end
    lang.rule("triple_double", r#"[rRbBuUfF]{0,2}"""(?:.*?"""|.*$)"#, TokenKind::String, 97);
    lang.rule("triple_single", r"[rRbBuUfF]{0,2}'''(?:.*?'''|.*$)", TokenKind::String, 97);

    // Regular strings, with optional prefix
    lang.rule("double_string", &format!(r"[rRbBuUfF]{{0,2}}{}", DOUBLE_QUOTED), TokenKind::String, 96);
    lang.rule("single_string", &format!(r"[rRbBuUfF]{{0,2}}{}", SINGLE_QUOTED), TokenKind::String, 96);

    // Decorators
    lang.rule("decorator", r"@[\w.]+", TokenKind::NameDecorator, 95);

    // Names being defined; the keyword itself stays a keyword
    lang.rule_after("def_name", r"\bdef\s+", r"\w+", TokenKind::NameFunction, 90);
    lang.rule_after("class_name", r"\bclass\s+", r"\w+", TokenKind::NameClass, 90);

    lang.words("constant", &["False", "None", "True"], TokenKind::KeywordConstant, 82);
    lang.words(
        "keyword",
        &[
            "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del",
            "elif", "else", "except", "finally", "for", "from", "global", "if", "import", "in",
            "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
            "with", "yield",
        ],
        TokenKind::Keyword,
        80,
    );

    // self/cls
    lang.words("self", &["self", "cls"], TokenKind::NameBuiltin, 77);

    // Built-in functions
    lang.words(
        "builtin",
        &[
            "abs", "all", "any", "bin", "bool", "bytes", "callable", "chr", "dict", "dir",
            "divmod", "enumerate", "eval", "exec", "filter", "float", "format", "frozenset",
            "getattr", "hasattr", "hash", "hex", "id", "input", "int", "isinstance", "iter",
            "len", "list", "map", "max", "min", "next", "object", "open", "ord", "pow", "print",
            "range", "repr", "reversed", "round", "set", "setattr", "sorted", "str", "sum",
            "super", "tuple", "type", "zip",
        ],
        TokenKind::NameBuiltin,
        75,
    );

    // Numbers
    lang.rule("hex", r"\b0[xX][0-9a-fA-F_]+\b", TokenKind::Number, 65);
    lang.rule("binary", r"\b0[bB][01_]+\b", TokenKind::Number, 65);
    lang.rule("octal", r"\b0[oO][0-7_]+\b", TokenKind::Number, 65);
    lang.rule("float", r"\b\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?j?\b", TokenKind::Number, 64);
    lang.rule("integer", r"\b\d[\d_]*j?\b", TokenKind::Number, 63);

    // Operators
    lang.rule("operator", r"[+\-*/%&|^!<>=~]+", TokenKind::Operator, 40);

    add_common_rules(&mut lang);
    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::builtin::test_support::{has, kinds};

    #[test]
    fn test_python_keywords_and_names() {
        let lang = python_language();
        let tokens = kinds(&lang, "for item in items: print(item)");
        assert!(has(&tokens, TokenKind::Keyword, "for"));
        assert!(has(&tokens, TokenKind::Keyword, "in"));
        assert!(has(&tokens, TokenKind::NameBuiltin, "print"));
        assert!(has(&tokens, TokenKind::Name, "items"));
    }

    #[test]
    fn test_python_comment_and_string() {
        let lang = python_language();
        let tokens = kinds(&lang, r#"x = f"hi {x}"  # greet"#);
        assert!(has(&tokens, TokenKind::String, r#"f"hi {x}""#));
        assert!(has(&tokens, TokenKind::Comment, "# greet"));
    }

    #[test]
    fn test_python_definitions() {
        let lang = python_language();
        let decorator = kinds(&lang, "@functools.cache");
        assert!(has(&decorator, TokenKind::NameDecorator, "@functools.cache"));
        let def = kinds(&lang, "def fib(n):");
        assert_eq!(def[0], (TokenKind::Keyword, "def".to_string()));
        assert!(has(&def, TokenKind::NameFunction, "fib"));
        let class = kinds(&lang, "class  Foo(Base):");
        assert!(has(&class, TokenKind::Keyword, "class"));
        assert!(has(&class, TokenKind::NameClass, "Foo"));
        assert!(!has(&class, TokenKind::NameClass, "Base"));
    }

    #[test]
    fn test_python_docstring_open_runs_to_eol() {
        let lang = python_language();
        let tokens = kinds(&lang, r#"    """Start of a docstring"#);
        assert!(has(&tokens, TokenKind::String, r#""""Start of a docstring"#));
    }

    #[test]
    fn test_python_numbers() {
        let lang = python_language();
        let tokens = kinds(&lang, "n = 0x1F + 3.14 + 10");
        assert!(has(&tokens, TokenKind::Number, "0x1F"));
        assert!(has(&tokens, TokenKind::Number, "3.14"));
        assert!(has(&tokens, TokenKind::Number, "10"));
    }
}
