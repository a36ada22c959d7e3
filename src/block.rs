//! Read-only code display
//!
//! A `CodeBlock` shows highlighted code that only the program changes.
//! It has no typing, paste or selection surface; content is replaced,
//! inserted or deleted through the same programmatic calls as `CodeBox`.

use std::fmt;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use crate::buffer::Position;
use crate::codebox::{CodeBox, CodeBoxOptions, Setting};
use crate::error::Result;
use crate::events::{Event, SubscriptionId};
use crate::syntax::LanguageRegistry;

/// A code widget whose content is only set programmatically
#[derive(Debug)]
pub struct CodeBlock {
    codebox: CodeBox,
}

impl CodeBlock {
    pub fn new(options: CodeBoxOptions) -> Result<Self> {
        Ok(Self {
            codebox: CodeBox::new(options)?,
        })
    }

    pub fn with_registry(options: CodeBoxOptions, registry: Arc<LanguageRegistry>) -> Result<Self> {
        Ok(Self {
            codebox: CodeBox::with_registry(options, registry)?,
        })
    }

    /// Create a block already showing `content`
    pub fn with_content(options: CodeBoxOptions, content: &str) -> Result<Self> {
        let mut block = Self::new(options)?;
        block.set_content(content);
        Ok(block)
    }

    /// Always true: users cannot edit a block
    pub fn is_read_only(&self) -> bool {
        true
    }

    pub fn set_content(&mut self, text: &str) {
        self.codebox.set_content(text);
    }

    pub fn insert(&mut self, pos: Position, text: &str) -> Position {
        self.codebox.insert(pos, text)
    }

    pub fn delete(&mut self, start: Position, end: Position) -> String {
        self.codebox.delete(start, end)
    }

    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.codebox.load_from_file(path)
    }

    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.codebox.save_to_file(path)
    }

    pub fn set_language(&mut self, language: &str) {
        self.codebox.set_language(language);
    }

    pub fn set_scheme(&mut self, identifier: &str) -> Result<()> {
        self.codebox.set_scheme(identifier)
    }

    pub fn set_font_family(&mut self, family: &str) {
        self.codebox.set_font_family(family);
    }

    pub fn set_font_size(&mut self, size: u16) {
        self.codebox.set_font_size(size);
    }

    pub fn configure(&mut self, setting: Setting) -> Result<()> {
        self.codebox.configure(setting)
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(Event) + 'static,
    {
        self.codebox.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.codebox.unsubscribe(id)
    }
}

impl Deref for CodeBlock {
    type Target = CodeBox;

    fn deref(&self) -> &CodeBox {
        &self.codebox
    }
}

impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.codebox, f)
    }
}
