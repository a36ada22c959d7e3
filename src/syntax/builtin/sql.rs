//! SQL language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenKind;

use super::add_common_rules;

const KEYWORDS: &[&str] = &[
    "add", "all", "alter", "and", "any", "as", "asc", "begin", "between", "by", "case",
    "cascade", "check", "column", "commit", "constraint", "create", "cross", "database",
    "default", "delete", "desc", "distinct", "drop", "else", "end", "exists", "foreign",
    "from", "full", "group", "having", "if", "in", "index", "inner", "insert", "into", "is",
    "join", "key", "left", "like", "limit", "not", "offset", "on", "or", "order", "outer",
    "primary", "references", "returning", "right", "rollback", "select", "set", "table",
    "then", "transaction", "union", "unique", "update", "using", "values", "view", "when",
    "where", "with",
];

const TYPES: &[&str] = &[
    "bigint", "binary", "blob", "boolean", "char", "date", "datetime", "decimal", "double",
    "float", "int", "integer", "interval", "json", "numeric", "real", "serial", "smallint",
    "text", "time", "timestamp", "uuid", "varchar",
];

const FUNCTIONS: &[&str] = &[
    "avg", "cast", "coalesce", "count", "lower", "max", "min", "now", "nullif", "round",
    "substring", "sum", "trim", "upper",
];

/// Case-insensitive whole-word alternation
fn any_word(words: &[&str]) -> String {
    format!(r"(?i)\b(?:{})\b", words.join("|"))
}

/// Create SQL language definition
pub fn sql_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("SQL");

    lang.rule("line_comment", r"--.*$", TokenKind::Comment, 100);
    lang.rule("block_comment", r"/\*(?:.*?\*/|.*$)", TokenKind::Comment, 99);

    // Quotes are escaped by doubling them
    lang.rule("string", r"'(?:[^']|'')*'?", TokenKind::String, 96);
    lang.rule("quoted_name", r#""(?:[^"]|"")*"?"#, TokenKind::String, 95);

    lang.rule("constant", r"(?i)\b(?:true|false|null)\b", TokenKind::KeywordConstant, 82);
    lang.rule("keyword", &any_word(KEYWORDS), TokenKind::Keyword, 80);
    lang.rule("type", &any_word(TYPES), TokenKind::NameBuiltin, 78);
    lang.rule_before("function", &any_word(FUNCTIONS), r"\s*\(", TokenKind::NameFunction, 75);

    lang.rule("number", r"\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b", TokenKind::Number, 63);
    lang.rule("parameter", r"[:@$]\w+|\?", TokenKind::Name, 50);
    lang.rule("operator", r"\|\||::|[+\-*/%<>=!~]+", TokenKind::Operator, 40);

    add_common_rules(&mut lang);
    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::builtin::test_support::{has, kinds};

    #[test]
    fn test_sql_keywords_any_case() {
        let lang = sql_language();
        let tokens = kinds(&lang, "Select COUNT(*) from users WHERE name = 'O''Brien';");
        assert!(has(&tokens, TokenKind::Keyword, "Select"));
        assert!(has(&tokens, TokenKind::NameFunction, "COUNT"));
        assert!(has(&tokens, TokenKind::Keyword, "from"));
        assert!(has(&tokens, TokenKind::Name, "users"));
        assert!(has(&tokens, TokenKind::Keyword, "WHERE"));
        assert!(has(&tokens, TokenKind::String, "'O''Brien'"));
    }

    #[test]
    fn test_sql_table_definition() {
        let lang = sql_language();
        let tokens = kinds(&lang, "  id INTEGER PRIMARY KEY, -- row id");
        assert!(has(&tokens, TokenKind::NameBuiltin, "INTEGER"));
        assert!(has(&tokens, TokenKind::Keyword, "PRIMARY"));
        assert!(has(&tokens, TokenKind::Comment, "-- row id"));
    }
}
