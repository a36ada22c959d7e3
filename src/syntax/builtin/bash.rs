//! Bash language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenKind;

use super::{add_common_rules, DOUBLE_QUOTED};

/// Create Bash language definition
pub fn bash_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("Bash");

    lang.rule("shebang", r"^#!.*$", TokenKind::CommentPreproc, 101);
    lang.rule("comment", r"(?:^|[ \t])#.*$", TokenKind::Comment, 100);

    lang.rule("double_string", DOUBLE_QUOTED, TokenKind::String, 96);
    lang.rule("single_string", r"'[^']*'?", TokenKind::String, 96);

    lang.rule("variable", r"\$(?:\{[^}]*\}?|\w+|[@#?$!*0-9-])", TokenKind::NameBuiltin, 92);

    lang.words(
        "keyword",
        &[
            "case", "do", "done", "elif", "else", "esac", "fi", "for", "function", "if", "in",
            "local", "return", "select", "then", "until", "while",
        ],
        TokenKind::Keyword,
        80,
    );
    lang.words(
        "builtin",
        &[
            "alias", "cd", "echo", "eval", "exec", "exit", "export", "printf", "read", "set",
            "shift", "source", "test", "trap", "unset",
        ],
        TokenKind::NameBuiltin,
        75,
    );

    lang.rule("number", r"\b\d+\b", TokenKind::Number, 65);
    lang.rule("operator", r"&&|\|\||[|&;<>=!]+", TokenKind::Operator, 40);

    add_common_rules(&mut lang);
    lang
}
