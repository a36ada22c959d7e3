//! Color schemes
//!
//! A scheme is a JSON document with three sections:
//!
//! ```json
//! {
//!     "general":   { "background": "#303841", "foreground": "#d8dee9" },
//!     "selection": { "background": "#4e5a65" },
//!     "syntax":    { "Token.Keyword": "#c594c5",
//!                    "Token.Comment": { "color": "#a6acb9", "italic": true } }
//! }
//! ```
//!
//! Schemes are identified either by a bundled name (`mariana`, `monokai`)
//! or by a path to a JSON file.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{CodeBoxError, Result};
use crate::syntax::{parent_name, Color, Style};

/// Scheme used when none is configured
pub const DEFAULT_SCHEME: &str = "mariana";

const BUNDLED: &[(&str, &str)] = &[
    ("mariana", include_str!("../schemes/mariana.json")),
    ("monokai", include_str!("../schemes/monokai.json")),
];

/// `general` keys that must hold a color
const GENERAL_COLOR_KEYS: &[&str] = &[
    "background",
    "foreground",
    "insertbackground",
    "selectbackground",
    "selectforeground",
    "highlightcolor",
    "highlightbackground",
];

/// A syntax entry: either a bare color or a full style object
#[derive(Deserialize)]
#[serde(untagged)]
enum StyleEntry {
    Color(String),
    Styled(StyleObject),
}

#[derive(Deserialize, Default)]
struct StyleObject {
    #[serde(alias = "foreground")]
    color: Option<String>,
    background: Option<String>,
    bold: Option<bool>,
    italic: Option<bool>,
    underline: Option<bool>,
    strikethrough: Option<bool>,
    family: Option<String>,
    size: Option<u16>,
    font: Option<FontObject>,
}

#[derive(Deserialize, Default)]
struct FontObject {
    family: Option<String>,
    size: Option<u16>,
    bold: Option<bool>,
    italic: Option<bool>,
    underline: Option<bool>,
    strikethrough: Option<bool>,
}

fn parse_color(tag: &str, value: &str) -> Result<Color> {
    Color::parse(value)
        .ok_or_else(|| CodeBoxError::SchemeShape(format!("bad color '{}' for '{}'", value, tag)))
}

impl StyleEntry {
    fn into_style(self, tag: &str) -> Result<Style> {
        match self {
            StyleEntry::Color(color) => Ok(Style::fg(parse_color(tag, &color)?)),
            StyleEntry::Styled(obj) => obj.into_style(tag),
        }
    }
}

impl StyleObject {
    fn into_style(self, tag: &str) -> Result<Style> {
        let font = self.font.unwrap_or_default();
        Ok(Style {
            fg: self.color.map(|c| parse_color(tag, &c)).transpose()?,
            bg: self.background.map(|c| parse_color(tag, &c)).transpose()?,
            bold: self.bold.or(font.bold).unwrap_or(false),
            italic: self.italic.or(font.italic).unwrap_or(false),
            underline: self.underline.or(font.underline).unwrap_or(false),
            strikethrough: self.strikethrough.or(font.strikethrough).unwrap_or(false),
            family: self.family.or(font.family),
            size: self.size.or(font.size),
        })
    }
}

/// A loaded color scheme
#[derive(Debug, Clone, PartialEq)]
pub struct StyleScheme {
    /// Bundled name or the path it was read from
    name: String,
    /// Widget options, in file order by key
    general: BTreeMap<String, Value>,
    /// Style of the selection tag
    selection: Style,
    /// Tag name -> style
    syntax: BTreeMap<String, Style>,
}

/// Decode one section; a value of the wrong type is a shape error
fn section_value<T: serde::de::DeserializeOwned>(key: &str, value: Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|err| CodeBoxError::SchemeShape(format!("'{}' section: {}", key, err)))
}

impl StyleScheme {
    /// Load a scheme by bundled name or file path
    pub fn load(identifier: &str) -> Result<Self> {
        let key = identifier.trim().to_lowercase();
        if let Some((name, json)) = BUNDLED.iter().find(|(name, _)| *name == key) {
            return Self::from_json(name, json);
        }
        Self::from_file(Path::new(identifier))
    }

    /// Read a scheme from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CodeBoxError::SchemeNotFound(path.to_path_buf()));
        }
        let json = fs::read_to_string(path)?;
        Self::from_json(&path.display().to_string(), &json)
    }

    /// Parse a scheme document
    pub fn from_json(name: &str, json: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(json)?;
        let Value::Object(mut sections) = document else {
            return Err(CodeBoxError::SchemeShape(
                "top level must be an object".to_string(),
            ));
        };
        let mut section = |key: &str| {
            sections
                .remove(key)
                .ok_or_else(|| CodeBoxError::SchemeShape(format!("missing '{}' section", key)))
        };
        let general = section("general")?;
        let selection = section("selection")?;
        let syntax = section("syntax")?;

        let general: BTreeMap<String, Value> = section_value("general", general)?;
        for key in GENERAL_COLOR_KEYS {
            if let Some(value) = general.get(*key) {
                let text = value.as_str().ok_or_else(|| {
                    CodeBoxError::SchemeShape(format!("'{}' must be a color string", key))
                })?;
                parse_color(key, text)?;
            }
        }

        let selection: StyleObject = section_value("selection", selection)?;
        let selection = selection.into_style("selection")?;

        let entries: BTreeMap<String, StyleEntry> = section_value("syntax", syntax)?;
        let syntax = entries
            .into_iter()
            .map(|(tag, entry)| {
                let style = entry.into_style(&tag)?;
                Ok((tag, style))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;

        tracing::debug!(scheme = name, tags = syntax.len(), "loaded color scheme");
        Ok(Self {
            name: name.to_string(),
            general,
            selection,
            syntax,
        })
    }

    /// Names of the bundled schemes
    pub fn builtin_names() -> Vec<&'static str> {
        BUNDLED.iter().map(|(name, _)| *name).collect()
    }

    /// Bundled name or file path of this scheme
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw `general` option
    pub fn general(&self, key: &str) -> Option<&Value> {
        self.general.get(key)
    }

    /// Every `general` option
    pub fn general_options(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.general.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// A `general` option read as a color
    pub fn general_color(&self, key: &str) -> Option<Color> {
        self.general(key)
            .and_then(Value::as_str)
            .and_then(Color::parse)
    }

    /// Widget background
    pub fn background(&self) -> Option<Color> {
        self.general_color("background")
    }

    /// Default text color
    pub fn foreground(&self) -> Option<Color> {
        self.general_color("foreground")
    }

    /// Caret color
    pub fn caret(&self) -> Option<Color> {
        self.general_color("insertbackground")
    }

    /// Style of the selection tag
    pub fn selection(&self) -> &Style {
        &self.selection
    }

    /// Style declared for exactly this tag name
    pub fn declared(&self, tag: &str) -> Option<&Style> {
        self.syntax.get(tag)
    }

    /// Style for a tag, falling back to the nearest styled parent
    ///
    /// `Token.Name.Function` uses `Token.Name` when it has no entry of
    /// its own, then `Token`.
    pub fn style_for(&self, tag: &str) -> Option<&Style> {
        let mut name = Some(tag);
        while let Some(current) = name {
            if let Some(style) = self.syntax.get(current) {
                return Some(style);
            }
            name = parent_name(current);
        }
        None
    }

    /// Tag names the scheme styles
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.syntax.keys().map(String::as_str)
    }
}
