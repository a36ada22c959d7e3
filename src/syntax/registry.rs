//! Language registry
//!
//! Maps canonical language keys to tokenizer factories. Resolving a
//! language name is two separate steps: normalization (trim, lowercase,
//! alias table) and lookup. Tokenizers are built on first use and shared
//! afterwards.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use super::builtin;
use super::tokenizer::{PlainTokenizer, Tokenizer};

/// Builds a tokenizer for one language
pub type TokenizerFactory = fn() -> Arc<dyn Tokenizer>;

/// Canonical key of the language used when a name is not recognized
pub const FALLBACK_LANGUAGE: &str = "python";

/// Key reported when not even the fallback language is registered
pub const PLAIN_LANGUAGE: &str = "text";

struct LanguageEntry {
    display_name: String,
    factory: TokenizerFactory,
    tokenizer: OnceLock<Arc<dyn Tokenizer>>,
}

impl LanguageEntry {
    fn tokenizer(&self) -> Arc<dyn Tokenizer> {
        Arc::clone(self.tokenizer.get_or_init(self.factory))
    }
}

/// Outcome of resolving a language name
#[derive(Clone)]
pub struct ResolvedLanguage {
    /// Canonical key actually used
    pub key: String,
    /// Tokenizer for that key
    pub tokenizer: Arc<dyn Tokenizer>,
    /// True when the requested name was unknown and the fallback was used
    pub fell_back: bool,
}

impl fmt::Debug for ResolvedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedLanguage")
            .field("key", &self.key)
            .field("tokenizer", &self.tokenizer.name())
            .field("fell_back", &self.fell_back)
            .finish()
    }
}

/// Registry of the languages a widget can highlight
pub struct LanguageRegistry {
    /// Canonical key -> entry
    languages: HashMap<String, LanguageEntry>,
    /// Alias -> canonical key
    aliases: HashMap<String, String>,
    /// File extension -> canonical key
    extension_map: HashMap<String, String>,
    /// Whole file name (`Dockerfile`) -> canonical key
    filename_map: HashMap<String, String>,
}

impl LanguageRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            languages: HashMap::new(),
            aliases: HashMap::new(),
            extension_map: HashMap::new(),
            filename_map: HashMap::new(),
        }
    }

    /// Create a registry holding every built-in language
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register("python", "Python", || Arc::new(builtin::python_language()));
        registry.add_aliases("python", &["py", "python3"]);
        registry.add_extensions("python", &["py", "pyw", "pyi"]);

        registry.register("rust", "Rust", || Arc::new(builtin::rust_language()));
        registry.add_aliases("rust", &["rs"]);
        registry.add_extensions("rust", &["rs"]);

        registry.register("c", "C", || Arc::new(builtin::c_language()));
        registry.add_extensions("c", &["c", "h"]);

        registry.register("cpp", "C++", || Arc::new(builtin::cpp_language()));
        registry.add_aliases("cpp", &["c++", "c plus plus", "cxx"]);
        registry.add_extensions("cpp", &["cpp", "cc", "cxx", "hpp", "hh"]);

        registry.register("javascript", "JavaScript", || {
            Arc::new(builtin::javascript_language())
        });
        registry.add_aliases("javascript", &["js"]);
        registry.add_extensions("javascript", &["js", "mjs", "cjs", "jsx"]);

        registry.register("typescript", "TypeScript", || {
            Arc::new(builtin::typescript_language())
        });
        registry.add_aliases("typescript", &["ts"]);
        registry.add_extensions("typescript", &["ts", "tsx"]);

        registry.register("csharp", "C#", || Arc::new(builtin::csharp_language()));
        registry.add_aliases("csharp", &["c#", "cs", "c sharp"]);
        registry.add_extensions("csharp", &["cs", "csx"]);

        registry.register("go", "Go", || Arc::new(builtin::go_language()));
        registry.add_aliases("go", &["golang"]);
        registry.add_extensions("go", &["go"]);

        registry.register("java", "Java", || Arc::new(builtin::java_language()));
        registry.add_extensions("java", &["java"]);

        registry.register("kotlin", "Kotlin", || Arc::new(builtin::kotlin_language()));
        registry.add_aliases("kotlin", &["kt"]);
        registry.add_extensions("kotlin", &["kt", "kts"]);

        registry.register("ruby", "Ruby", || Arc::new(builtin::ruby_language()));
        registry.add_aliases("ruby", &["rb"]);
        registry.add_extensions("ruby", &["rb", "rake", "gemspec"]);
        registry.add_filenames("ruby", &["Rakefile", "Gemfile"]);

        registry.register("lua", "Lua", || Arc::new(builtin::lua_language()));
        registry.add_extensions("lua", &["lua"]);

        registry.register("sql", "SQL", || Arc::new(builtin::sql_language()));
        registry.add_extensions("sql", &["sql"]);

        registry.register("html", "HTML", || Arc::new(builtin::html_language()));
        registry.add_aliases("html", &["htm", "xhtml"]);
        registry.add_extensions("html", &["html", "htm", "xhtml"]);

        registry.register("css", "CSS", || Arc::new(builtin::css_language()));
        registry.add_extensions("css", &["css"]);

        registry.register("dockerfile", "Dockerfile", || {
            Arc::new(builtin::dockerfile_language())
        });
        registry.add_aliases("dockerfile", &["docker"]);
        registry.add_extensions("dockerfile", &["dockerfile"]);
        registry.add_filenames("dockerfile", &["Dockerfile", "Containerfile"]);

        registry.register("json", "JSON", || Arc::new(builtin::json_language()));
        registry.add_extensions("json", &["json"]);

        registry.register("toml", "TOML", || Arc::new(builtin::toml_language()));
        registry.add_extensions("toml", &["toml"]);

        registry.register("yaml", "YAML", || Arc::new(builtin::yaml_language()));
        registry.add_aliases("yaml", &["yml"]);
        registry.add_extensions("yaml", &["yaml", "yml"]);

        registry.register("bash", "Bash", || Arc::new(builtin::bash_language()));
        registry.add_aliases("bash", &["sh", "shell"]);
        registry.add_extensions("bash", &["sh", "bash"]);

        registry.register("markdown", "Markdown", || Arc::new(builtin::markdown_language()));
        registry.add_aliases("markdown", &["md"]);
        registry.add_extensions("markdown", &["md", "markdown"]);

        registry.register("text", "Text", || Arc::new(PlainTokenizer));
        registry.add_aliases("text", &["plain", "plaintext", "txt"]);
        registry.add_extensions("text", &["txt"]);

        registry
    }

    /// The shared built-in registry, built on first use
    pub fn global() -> Arc<LanguageRegistry> {
        static GLOBAL: OnceLock<Arc<LanguageRegistry>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(LanguageRegistry::builtin())))
    }

    /// Register a language under a canonical key, replacing any previous one
    pub fn register(&mut self, key: &str, display_name: &str, factory: TokenizerFactory) {
        let key = key.trim().to_lowercase();
        self.aliases.remove(&key);
        self.languages.insert(
            key,
            LanguageEntry {
                display_name: display_name.to_string(),
                factory,
                tokenizer: OnceLock::new(),
            },
        );
    }

    /// Make `aliases` resolve to `key`
    pub fn add_aliases(&mut self, key: &str, aliases: &[&str]) {
        let key = key.trim().to_lowercase();
        for alias in aliases {
            self.aliases.insert(alias.trim().to_lowercase(), key.clone());
        }
    }

    /// Map file extensions to `key`
    pub fn add_extensions(&mut self, key: &str, extensions: &[&str]) {
        let key = key.trim().to_lowercase();
        for ext in extensions {
            self.extension_map.insert(ext.to_lowercase(), key.clone());
        }
    }

    /// Map whole file names, matched case-insensitively, to `key`
    pub fn add_filenames(&mut self, key: &str, filenames: &[&str]) {
        let key = key.trim().to_lowercase();
        for filename in filenames {
            self.filename_map.insert(filename.to_lowercase(), key.clone());
        }
    }

    /// Normalize a user-supplied language name to a candidate canonical key
    ///
    /// The result is not guaranteed to be registered.
    pub fn normalize(&self, name: &str) -> String {
        let name = name.trim().to_lowercase();
        match self.aliases.get(&name) {
            Some(key) => key.clone(),
            None => name,
        }
    }

    /// Whether a name resolves to a registered language
    pub fn contains(&self, name: &str) -> bool {
        self.languages.contains_key(&self.normalize(name))
    }

    /// Tokenizer for a name, if it is registered
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Tokenizer>> {
        self.languages
            .get(&self.normalize(name))
            .map(LanguageEntry::tokenizer)
    }

    /// Resolve a name, falling back to the default language when unknown
    pub fn resolve(&self, name: &str) -> ResolvedLanguage {
        let key = self.normalize(name);
        if let Some(entry) = self.languages.get(&key) {
            return ResolvedLanguage {
                key,
                tokenizer: entry.tokenizer(),
                fell_back: false,
            };
        }

        let (key, tokenizer) = match self.languages.get(FALLBACK_LANGUAGE) {
            Some(entry) => (FALLBACK_LANGUAGE, entry.tokenizer()),
            None => (PLAIN_LANGUAGE, Arc::new(PlainTokenizer) as Arc<dyn Tokenizer>),
        };
        ResolvedLanguage {
            key: key.to_string(),
            tokenizer,
            fell_back: true,
        }
    }

    /// Detect the language key from a file name or its extension
    pub fn detect(&self, filename: &Path) -> Option<&str> {
        let name = filename.file_name()?.to_str()?.to_lowercase();
        if let Some(key) = self.filename_map.get(&name) {
            return Some(key.as_str());
        }
        let ext = filename.extension()?.to_str()?.to_lowercase();
        self.extension_map.get(&ext).map(String::as_str)
    }

    /// Display names of every registered language, sorted
    pub fn languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self
            .languages
            .values()
            .map(|entry| entry.display_name.as_str())
            .collect();
        names.sort_by_key(|name| name.to_lowercase());
        names
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for LanguageRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageRegistry")
            .field("languages", &self.languages())
            .finish()
    }
}
