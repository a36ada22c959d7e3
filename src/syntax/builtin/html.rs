//! HTML language definition
//!
//! Markup is tokenized a line at a time like everything else, so a tag
//! whose attributes continue on the next line loses its context there.

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenKind;

use super::{DOUBLE_QUOTED, SINGLE_QUOTED};

/// Create HTML language definition
pub fn html_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("HTML");

    lang.rule("comment", r"<!--(?:.*?-->|.*$)", TokenKind::Comment, 100);
    lang.rule("doctype", r"<![A-Za-z][^>]*>?", TokenKind::CommentPreproc, 98);

    lang.rule_after("tag_name", r"</?", r"[A-Za-z][\w:-]*", TokenKind::NameTag, 90);
    lang.rule("tag_delimiter", r"</?|/?>", TokenKind::Punctuation, 85);

    lang.rule_before(
        "attribute",
        r"[A-Za-z_:][\w:.-]*",
        r"\s*=",
        TokenKind::NameAttribute,
        80,
    );
    lang.rule_after(
        "attribute_value",
        r"=\s*",
        &format!("{}|{}", DOUBLE_QUOTED, SINGLE_QUOTED),
        TokenKind::String,
        75,
    );

    lang.rule("entity", r"&(?:#\d+|#x[0-9a-fA-F]+|\w+);", TokenKind::NameBuiltin, 60);
    lang.rule("equals", r"=", TokenKind::Operator, 40);
    lang.rule("whitespace", r"[ \t]+", TokenKind::Whitespace, 1);
    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::builtin::test_support::{has, kinds};

    #[test]
    fn test_html_element() {
        let lang = html_language();
        let tokens = kinds(&lang, r#"<a href="x.html">Link &amp; more</a>"#);
        assert_eq!(tokens[0], (TokenKind::Punctuation, "<".to_string()));
        assert_eq!(tokens[1], (TokenKind::NameTag, "a".to_string()));
        assert!(has(&tokens, TokenKind::NameAttribute, "href"));
        assert!(has(&tokens, TokenKind::String, r#""x.html""#));
        assert!(has(&tokens, TokenKind::Text, "Link"));
        assert!(has(&tokens, TokenKind::NameBuiltin, "&amp;"));
        assert!(has(&tokens, TokenKind::Punctuation, "</"));
    }

    #[test]
    fn test_html_comment_and_doctype() {
        let lang = html_language();
        let doctype = kinds(&lang, "<!DOCTYPE html>");
        assert_eq!(doctype, vec![(TokenKind::CommentPreproc, "<!DOCTYPE html>".to_string())]);

        let comment = kinds(&lang, "<br/> <!-- note -->");
        assert!(has(&comment, TokenKind::NameTag, "br"));
        assert!(has(&comment, TokenKind::Punctuation, "/>"));
        assert!(has(&comment, TokenKind::Comment, "<!-- note -->"));
    }
}
