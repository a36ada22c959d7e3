//! Language definitions for syntax highlighting
//!
//! A `LanguageDefinition` is an ordered set of pattern rules. It tokenizes
//! one line at a time and fills every stretch no rule claims with plain
//! text, so the tokens always cover the input exactly.
//!
//! Tokenization is line-local: a block comment or triple-quoted string that
//! spans lines is only recognized on the line where it opens and closes.

use super::rules::PatternRule;
use super::tokenizer::{Token, Tokenizer};
use super::tokens::TokenKind;

/// A complete language definition for syntax highlighting
#[derive(Debug)]
pub struct LanguageDefinition {
    /// Language name (e.g., "Rust", "Python")
    pub name: String,
    /// Pattern rules, sorted by priority (highest first)
    pub patterns: Vec<PatternRule>,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            patterns: Vec::new(),
        }
    }

    /// Add a pattern rule
    pub fn add_pattern(&mut self, rule: PatternRule) {
        self.patterns.push(rule);
        // Keep sorted by priority (highest first); stable, so ties keep insertion order
        self.patterns.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Compile and add a rule, skipping it if the pattern is invalid
    pub fn rule(&mut self, name: &str, pattern: &str, kind: TokenKind, priority: i32) {
        if let Some(rule) = PatternRule::new(name, pattern, kind, priority) {
            self.add_pattern(rule);
        }
    }

    /// Compile and add a rule that must be followed by `lookahead`
    pub fn rule_before(
        &mut self,
        name: &str,
        pattern: &str,
        lookahead: &str,
        kind: TokenKind,
        priority: i32,
    ) {
        if let Some(rule) = PatternRule::with_lookahead(name, pattern, lookahead, kind, priority) {
            self.add_pattern(rule);
        }
    }

    /// Compile and add a rule that must directly follow `lookbehind`
    pub fn rule_after(
        &mut self,
        name: &str,
        lookbehind: &str,
        pattern: &str,
        kind: TokenKind,
        priority: i32,
    ) {
        if let Some(rule) = PatternRule::with_lookbehind(name, lookbehind, pattern, kind, priority) {
            self.add_pattern(rule);
        }
    }

    /// Add a keyword-style rule matching any of `words` as a whole word
    pub fn words(&mut self, name: &str, words: &[&str], kind: TokenKind, priority: i32) {
        let alternation = words
            .iter()
            .map(|word| regex::escape(word))
            .collect::<Vec<_>>()
            .join("|");
        self.rule(name, &format!(r"\b(?:{})\b", alternation), kind, priority);
    }
}

impl Tokenizer for LanguageDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            let mut matched: Option<(usize, TokenKind)> = None;
            let mut next_start: Option<usize> = None;

            for rule in &self.patterns {
                if let Some((start, end)) = rule.find_at(text, pos) {
                    if start == pos {
                        // First match (highest priority) at the cursor wins
                        matched = Some((end, rule.kind));
                        break;
                    }
                    next_start = Some(next_start.map_or(start, |n| n.min(start)));
                }
            }

            let (end, kind) = match matched {
                Some(hit) => hit,
                None => (next_start.unwrap_or(text.len()), TokenKind::Text),
            };
            tokens.push(Token::new(kind, &text[pos..end]));
            pos = end;
        }

        tokens
    }
}
