//! JSON language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenKind;

use super::{add_common_rules, DOUBLE_QUOTED};

/// Create JSON language definition
pub fn json_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("JSON");

    // Object keys are strings followed by a colon
    lang.rule_before("key", DOUBLE_QUOTED, r"\s*:", TokenKind::NameTag, 97);
    lang.rule("string", DOUBLE_QUOTED, TokenKind::String, 96);
    lang.words("constant", &["true", "false", "null"], TokenKind::KeywordConstant, 80);
    lang.rule("number", r"-?\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b", TokenKind::Number, 65);

    add_common_rules(&mut lang);
    lang
}
