//! YAML language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenKind;

use super::{add_common_rules, DOUBLE_QUOTED};

/// Create YAML language definition
pub fn yaml_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("YAML");

    lang.rule("comment", r"(?:^|\s)#.*$", TokenKind::Comment, 100);
    lang.rule("document", r"^(?:---|\.\.\.)\s*$", TokenKind::Heading, 99);

    lang.rule("double_string", DOUBLE_QUOTED, TokenKind::String, 96);
    lang.rule("single_string", r"'(?:[^']|'')*'?", TokenKind::String, 96);

    lang.rule("anchor", r"[&*][\w\-]+", TokenKind::NameDecorator, 92);
    lang.rule("tag", r"!!?[\w\-]*", TokenKind::NameDecorator, 91);

    // Mapping keys, possibly after a list dash
    lang.rule_before("key", r"\w[\w.\-]*(?:[ /][\w.\-]+)*", r"\s*:(?:\s|$)", TokenKind::NameTag, 90);

    lang.words(
        "constant",
        &["true", "false", "yes", "no", "on", "off", "null", "True", "False", "Null"],
        TokenKind::KeywordConstant,
        80,
    );
    lang.rule("number", r"[+-]?\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b", TokenKind::Number, 65);
    lang.rule("indicator", r"[-?:|>](?:\s|$)", TokenKind::Punctuation, 50);

    add_common_rules(&mut lang);
    lang
}
