//! codebox - the model behind a syntax-highlighting code widget
//!
//! A line-addressed text buffer carries named style tags. An incremental
//! highlighter keeps those tags in step with the text using pluggable
//! tokenizers, and a JSON color scheme decides how each tag looks.
//!
//! Three widgets sit on top:
//! - [`CodeBox`]: content, language, scheme, font and file I/O
//! - [`CodeEditor`]: adds cursor movement, typing, selection and paste
//! - [`CodeBlock`]: read-only display, changed only by the program
//!
//! ```no_run
//! use codebox::{CodeBoxOptions, CodeEditor, Position};
//!
//! let mut editor = CodeEditor::new(CodeBoxOptions::default().language("rust"))?;
//! editor.subscribe(|event| println!("{}", event));
//! editor.type_text("fn main() {}");
//! assert_eq!(editor.tags_at(Position::new(1, 0)), vec!["Token.Keyword"]);
//! # Ok::<(), codebox::CodeBoxError>(())
//! ```

pub mod block;
pub mod buffer;
pub mod codebox;
pub mod config;
pub mod editor;
pub mod error;
pub mod events;
pub mod highlighter;
pub mod line;
pub mod log;
pub mod render;
pub mod scheme;
pub mod syntax;
pub mod tags;
pub mod viewport;

pub use block::CodeBlock;
pub use buffer::{Position, TextBuffer};
pub use codebox::{CodeBox, CodeBoxOptions, Font, Setting, SettingKey};
pub use config::Settings;
pub use editor::CodeEditor;
pub use error::{CodeBoxError, Result};
pub use events::{Event, SubscriptionId, Warning};
pub use highlighter::Highlighter;
pub use scheme::StyleScheme;
pub use syntax::{LanguageRegistry, Token, TokenKind, Tokenizer};
pub use tags::{StyleTag, SELECTION_TAG};
