//! CSS language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenKind;

use super::{add_common_rules, DOUBLE_QUOTED, SINGLE_QUOTED};

/// Create CSS language definition
pub fn css_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("CSS");

    lang.rule("comment", r"/\*(?:.*?\*/|.*$)", TokenKind::Comment, 100);

    lang.rule("double_string", DOUBLE_QUOTED, TokenKind::String, 96);
    lang.rule("single_string", SINGLE_QUOTED, TokenKind::String, 96);

    lang.rule("at_rule", r"@[\w-]+", TokenKind::Keyword, 90);
    lang.rule("important", r"!\s*important\b", TokenKind::Keyword, 88);

    // A property is a name followed by a colon and a value, not a selector
    // with a pseudo-class such as `a:hover {`
    lang.rule_before(
        "property",
        r"-?[A-Za-z][\w-]*",
        r"\s*:[^{};]*(?:;|\}|$)",
        TokenKind::Keyword,
        85,
    );

    lang.rule("hex_color", r"#[0-9a-fA-F]{3,8}\b", TokenKind::Number, 72);
    lang.rule("id", r"#[A-Za-z_][\w-]*", TokenKind::NameDecorator, 71);
    lang.rule("class", r"\.[A-Za-z_][\w-]*", TokenKind::NameClass, 70);
    lang.rule_before("function", r"[A-Za-z][\w-]*", r"\(", TokenKind::NameFunction, 68);

    lang.rule(
        "number",
        r"[+-]?(?:\d+\.?\d*|\.\d+)(?:%|[A-Za-z]+)?",
        TokenKind::Number,
        65,
    );
    lang.rule("operator", r"[>+~*=|^$]", TokenKind::Operator, 40);

    add_common_rules(&mut lang);
    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::builtin::test_support::{has, kinds};

    #[test]
    fn test_css_rule_set() {
        let lang = css_language();
        let tokens = kinds(&lang, "a:hover, .nav #top { font-size: 1.5em; color: #fff; }");
        assert!(has(&tokens, TokenKind::Name, "a"));
        assert!(has(&tokens, TokenKind::Name, "hover"));
        assert!(has(&tokens, TokenKind::NameClass, ".nav"));
        assert!(has(&tokens, TokenKind::NameDecorator, "#top"));
        assert!(has(&tokens, TokenKind::Keyword, "font-size"));
        assert!(has(&tokens, TokenKind::Number, "1.5em"));
        assert!(has(&tokens, TokenKind::Keyword, "color"));
        assert!(has(&tokens, TokenKind::Number, "#fff"));
    }

    #[test]
    fn test_css_at_rule_and_function() {
        let lang = css_language();
        let tokens = kinds(&lang, r#"@import url("base.css") !important; /* base */"#);
        assert!(has(&tokens, TokenKind::Keyword, "@import"));
        assert!(has(&tokens, TokenKind::NameFunction, "url"));
        assert!(has(&tokens, TokenKind::String, r#""base.css""#));
        assert!(has(&tokens, TokenKind::Keyword, "!important"));
        assert!(has(&tokens, TokenKind::Comment, "/* base */"));
    }
}
