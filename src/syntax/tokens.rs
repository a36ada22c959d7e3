//! Token kinds for syntax highlighting
//!
//! Kinds are named after the dotted token hierarchy common to lexing
//! libraries (`Token.Name.Function`), and that dotted name is the tag name
//! a highlighted range carries in the buffer.

/// Semantic token kinds recognized by the built-in tokenizers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// Plain text and anything no rule recognized
    Text,
    /// Runs of spaces and tabs
    Whitespace,
    /// Input the tokenizer considers invalid
    Error,
    /// Source code comments
    Comment,
    /// Preprocessor directives (#include, #define)
    CommentPreproc,
    /// Language keywords (if, else, fn, let, etc.)
    Keyword,
    /// Keyword constants (true, None, null)
    KeywordConstant,
    /// Built-in type keywords (int, u8, bool)
    KeywordType,
    /// Identifiers
    Name,
    /// Function names and calls
    NameFunction,
    /// Class, struct and type names
    NameClass,
    /// Built-in functions and pseudo-variables (print, self)
    NameBuiltin,
    /// Decorators, attributes, annotations
    NameDecorator,
    /// Keys in data formats (JSON, TOML, YAML) and markup tag names
    NameTag,
    /// Markup attribute names
    NameAttribute,
    /// String literals
    String,
    /// Numeric literals
    Number,
    /// Operators (+, -, *, /, etc.)
    Operator,
    /// Punctuation (, ; : etc.)
    Punctuation,
    /// Headings and section markers
    Heading,
}

impl TokenKind {
    /// Every kind, in declaration order
    pub const ALL: [TokenKind; 20] = [
        TokenKind::Text,
        TokenKind::Whitespace,
        TokenKind::Error,
        TokenKind::Comment,
        TokenKind::CommentPreproc,
        TokenKind::Keyword,
        TokenKind::KeywordConstant,
        TokenKind::KeywordType,
        TokenKind::Name,
        TokenKind::NameFunction,
        TokenKind::NameClass,
        TokenKind::NameBuiltin,
        TokenKind::NameDecorator,
        TokenKind::NameTag,
        TokenKind::NameAttribute,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::Heading,
    ];

    /// Dotted name, used as the tag name
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Text => "Token.Text",
            TokenKind::Whitespace => "Token.Text.Whitespace",
            TokenKind::Error => "Token.Error",
            TokenKind::Comment => "Token.Comment",
            TokenKind::CommentPreproc => "Token.Comment.Preproc",
            TokenKind::Keyword => "Token.Keyword",
            TokenKind::KeywordConstant => "Token.Keyword.Constant",
            TokenKind::KeywordType => "Token.Keyword.Type",
            TokenKind::Name => "Token.Name",
            TokenKind::NameFunction => "Token.Name.Function",
            TokenKind::NameClass => "Token.Name.Class",
            TokenKind::NameBuiltin => "Token.Name.Builtin",
            TokenKind::NameDecorator => "Token.Name.Decorator",
            TokenKind::NameTag => "Token.Name.Tag",
            TokenKind::NameAttribute => "Token.Name.Attribute",
            TokenKind::String => "Token.Literal.String",
            TokenKind::Number => "Token.Literal.Number",
            TokenKind::Operator => "Token.Operator",
            TokenKind::Punctuation => "Token.Punctuation",
            TokenKind::Heading => "Token.Generic.Heading",
        }
    }

    /// Parse a kind from its dotted name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Parent of a dotted tag name: `Token.Name.Function` -> `Token.Name`
pub fn parent_name(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(parent, _)| parent)
}
