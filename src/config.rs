//! Configuration file support
//!
//! Loads settings from ~/.codebox.toml (or %USERPROFILE%\.codebox.toml on Windows)
//!
//! Example:
//! ```toml
//! language = "rust"
//! scheme = "monokai"
//! font_family = "JetBrains Mono"
//! font_size = 12
//! tab_width = "4ch"
//! block_cursor = false
//! line_numbers = true
//! ```

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::codebox::{
    parse_tab_width, CodeBoxOptions, Font, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE,
    DEFAULT_LANGUAGE, DEFAULT_TAB_WIDTH,
};
use crate::error::Result;
use crate::scheme::DEFAULT_SCHEME;

const CONFIG_FILE: &str = ".codebox.toml";

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Language used when none is given or detected
    pub language: String,
    /// Bundled scheme name or scheme file path
    pub scheme: String,
    pub font_family: String,
    pub font_size: u16,
    /// Tab width in characters, e.g. "4ch"
    pub tab_width: String,
    pub block_cursor: bool,
    /// Whether to show line numbers
    pub line_numbers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            scheme: DEFAULT_SCHEME.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            tab_width: DEFAULT_TAB_WIDTH.to_string(),
            block_cursor: false,
            line_numbers: false,
        }
    }
}

impl Settings {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }
    }

    /// Load settings from the config file
    ///
    /// A missing file gives the defaults; a malformed one is logged and
    /// also gives the defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(contents) = fs::read_to_string(&path) else {
            return Self::default();
        };
        match Self::from_toml(&contents) {
            Ok(settings) => {
                tracing::debug!(path = %path.display(), "loaded settings");
                settings
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring invalid settings file");
                Self::default()
            }
        }
    }

    /// Parse settings from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(contents)?;
        parse_tab_width(&settings.tab_width)?;
        Ok(settings)
    }

    /// Widget options these settings describe
    pub fn to_options(&self) -> CodeBoxOptions {
        CodeBoxOptions {
            language: self.language.clone(),
            scheme: self.scheme.clone(),
            font: Font {
                family: self.font_family.clone(),
                size: self.font_size,
            },
            tab_width: self.tab_width.clone(),
            block_cursor: self.block_cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodeBoxError;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.language, "python");
        assert_eq!(settings.scheme, "mariana");
        assert!(!settings.line_numbers);
        assert_eq!(settings.to_options(), CodeBoxOptions::default());
    }

    #[test]
    fn test_parse_partial_file() {
        let settings = Settings::from_toml(
            r#"
            # only what differs from the defaults
            scheme = "monokai"
            font_size = 14
            line_numbers = true
            "#,
        )
        .unwrap();
        assert_eq!(settings.scheme, "monokai");
        assert_eq!(settings.font_size, 14);
        assert!(settings.line_numbers);
        assert_eq!(settings.tab_width, "4ch");
    }

    #[test]
    fn test_malformed_file() {
        let err = Settings::from_toml("font_size = \"big\"").unwrap_err();
        assert!(matches!(err, CodeBoxError::Config(_)));
        assert!(Settings::from_toml("colour = true").is_err());
    }

    #[test]
    fn test_bad_tab_width() {
        let err = Settings::from_toml("tab_width = \"4 spaces\"").unwrap_err();
        assert!(matches!(err, CodeBoxError::InvalidTabWidth(_)));
    }

    #[test]
    fn test_config_path_file_name() {
        if let Some(path) = Settings::config_path() {
            assert!(path.ends_with(".codebox.toml"));
        }
    }
}
