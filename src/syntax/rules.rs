//! Pattern rules for syntax highlighting
//!
//! This module defines the rule type used to match and tokenize
//! source code for syntax highlighting.

use regex::Regex;

use super::tokens::TokenKind;

/// A single-line pattern rule
///
/// Matches a regex pattern and assigns a token kind to the match.
/// Rules are tried in priority order (highest first).
#[derive(Debug)]
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Token kind to assign to matches
    pub kind: TokenKind,
    /// Priority (higher = matched first)
    pub priority: i32,
    /// Text that must follow a match without being part of it
    pub lookahead: Option<Regex>,
    /// Text that must end right where a match begins
    pub lookbehind: Option<Regex>,
}

impl PatternRule {
    /// Create a new pattern rule; `None` if the pattern does not compile
    pub fn new(name: &str, pattern: &str, kind: TokenKind, priority: i32) -> Option<Self> {
        match Regex::new(pattern) {
            Ok(regex) => Some(Self {
                name: name.to_string(),
                pattern: regex,
                kind,
                priority,
                lookahead: None,
                lookbehind: None,
            }),
            Err(err) => {
                tracing::error!(rule = name, %err, "invalid highlight pattern");
                None
            }
        }
    }

    /// Create a rule that only matches when `lookahead` matches right after it
    ///
    /// Stands in for `(?=...)`, which the regex engine does not support.
    pub fn with_lookahead(
        name: &str,
        pattern: &str,
        lookahead: &str,
        kind: TokenKind,
        priority: i32,
    ) -> Option<Self> {
        let mut rule = Self::new(name, pattern, kind, priority)?;
        match Regex::new(&format!("^(?:{})", lookahead)) {
            Ok(regex) => rule.lookahead = Some(regex),
            Err(err) => {
                tracing::error!(rule = name, %err, "invalid highlight lookahead");
                return None;
            }
        }
        Some(rule)
    }

    /// Create a rule that only matches right after text matching `lookbehind`
    ///
    /// Stands in for `(?<=...)`. Matches are only tried where a match of
    /// `lookbehind` ends, so the context may be of any length.
    pub fn with_lookbehind(
        name: &str,
        lookbehind: &str,
        pattern: &str,
        kind: TokenKind,
        priority: i32,
    ) -> Option<Self> {
        let mut rule = Self::new(name, pattern, kind, priority)?;
        match Regex::new(lookbehind) {
            Ok(regex) => rule.lookbehind = Some(regex),
            Err(err) => {
                tracing::error!(rule = name, %err, "invalid highlight lookbehind");
                return None;
            }
        }
        Some(rule)
    }

    fn followed_correctly(&self, text: &str, end: usize) -> bool {
        self.lookahead
            .as_ref()
            .map_or(true, |lookahead| lookahead.is_match(&text[end..]))
    }

    /// First match that begins where a context match ends
    fn find_after_context(&self, context: &Regex, text: &str, start: usize) -> Option<(usize, usize)> {
        for ctx in context.find_iter(text) {
            let at = ctx.end();
            if at < start {
                continue;
            }
            if let Some(m) = self.pattern.find_at(text, at) {
                if m.start() == at && m.end() > at && self.followed_correctly(text, m.end()) {
                    return Some((m.start(), m.end()));
                }
            }
        }
        None
    }

    /// Find the first non-empty match at or after byte offset `start`
    ///
    /// The search sees the whole line, so `\b` and `^` keep their meaning
    /// at `start`.
    pub fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        if let Some(context) = &self.lookbehind {
            return self.find_after_context(context, text, start);
        }
        let mut from = start;
        while from <= text.len() {
            let m = self.pattern.find_at(text, from)?;
            if m.end() > m.start() && self.followed_correctly(text, m.end()) {
                return Some((m.start(), m.end()));
            }
            from = text[m.start()..]
                .chars()
                .next()
                .map_or(text.len() + 1, |ch| m.start() + ch.len_utf8());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_rule() {
        let rule = PatternRule::new("number", r"\d+", TokenKind::Number, 50).unwrap();
        assert_eq!(rule.find_at("abc 123 def", 0), Some((4, 7)));
        assert_eq!(rule.find_at("abc 123 def", 5), Some((5, 7)));
        assert_eq!(rule.find_at("no numbers", 0), None);
    }

    #[test]
    fn test_word_boundary_sees_context() {
        let rule = PatternRule::new("kw", r"\bif\b", TokenKind::Keyword, 80).unwrap();
        // "gif" must not match at offset 1 just because the search starts there
        assert_eq!(rule.find_at("gif if", 1), Some((4, 6)));
    }

    #[test]
    fn test_empty_matches_skipped() {
        let rule = PatternRule::new("maybe", r"x*", TokenKind::Name, 10).unwrap();
        assert_eq!(rule.find_at("ab xx", 0), Some((3, 5)));
        assert_eq!(rule.find_at("ab", 0), None);
    }

    #[test]
    fn test_lookahead() {
        let rule = PatternRule::with_lookahead(
            "call",
            r"\b[a-z_]\w*",
            r"\s*\(",
            TokenKind::NameFunction,
            70,
        )
        .unwrap();
        assert_eq!(rule.find_at("x = run (y)", 0), Some((4, 7)));
        assert_eq!(rule.find_at("plain words", 0), None);
    }

    #[test]
    fn test_lookbehind_matches_only_the_name() {
        let rule =
            PatternRule::with_lookbehind("def", r"\bdef\s+", r"\w+", TokenKind::NameFunction, 90)
                .unwrap();
        assert_eq!(rule.find_at("def fib(n):", 0), Some((4, 7)));
        assert_eq!(rule.find_at("undef fib", 0), None);
        assert_eq!(rule.find_at("x = fib", 0), None);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PatternRule::new("broken", r"(unclosed", TokenKind::Text, 1).is_none());
    }
}
