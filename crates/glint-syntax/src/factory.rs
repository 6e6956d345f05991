//! Highlighter construction.
//!
//! Picks a language from a file path (or the configured default) and builds
//! a [`Highlighter`] for it. Creation never fails: anything that cannot be
//! resolved or built ends up on [`FALLBACK_LANGUAGE`].

use std::collections::BTreeMap;
use std::path::Path;

use glint_buffer::TextWidget;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::batch::DEFAULT_BATCH_THRESHOLD;
use crate::debounce::DEFAULT_DEBOUNCE;
use crate::fallback::CompiledRules;
use crate::highlighter::Highlighter;
use crate::language::Language;

/// Used whenever no other language can be resolved.
pub const FALLBACK_LANGUAGE: Language = Language::Python;

/// File extension (lowercase, no dot) → language.
pub static EXTENSION_MAP: &[(&str, Language)] = &[
    ("py", Language::Python),
    ("pyw", Language::Python),
    ("pyi", Language::Python),
    ("rs", Language::Rust),
    ("js", Language::JavaScript),
    ("mjs", Language::JavaScript),
    ("cjs", Language::JavaScript),
    ("jsx", Language::JavaScript),
    ("ts", Language::TypeScript),
    ("tsx", Language::TypeScript),
    ("json", Language::Json),
    ("c", Language::C),
    ("h", Language::C),
    ("cpp", Language::Cpp),
    ("cxx", Language::Cpp),
    ("cc", Language::Cpp),
    ("hpp", Language::Cpp),
    ("hh", Language::Cpp),
    ("m", Language::ObjC),
    ("mm", Language::ObjC),
    ("java", Language::Java),
    ("kt", Language::Kotlin),
    ("kts", Language::Kotlin),
    ("scala", Language::Scala),
    ("dart", Language::Dart),
    ("swift", Language::Swift),
    ("go", Language::Go),
    ("rb", Language::Ruby),
    ("php", Language::Php),
    ("lua", Language::Lua),
    ("sh", Language::Bash),
    ("bash", Language::Bash),
    ("zsh", Language::Bash),
    ("sql", Language::Sql),
    ("css", Language::Css),
    ("html", Language::Html),
    ("htm", Language::Html),
    ("xml", Language::Xml),
    ("yaml", Language::Yaml),
    ("yml", Language::Yaml),
    ("md", Language::Markdown),
    ("markdown", Language::Markdown),
    ("log", Language::Log),
    ("txt", Language::Log),
];

/// Highlighting settings handed to the factory.
///
/// Read-only once built; a settings change means building a new config and
/// new highlighters from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Language name used when the path gives no answer
    pub default_language: Option<String>,

    /// Delay between an edit and the re-highlight, in milliseconds
    pub debounce_ms: u64,

    /// Pending ranges per tag before an early flush
    pub batch_threshold: usize,

    /// Extension → language name, checked before the built-in table
    pub extra_extensions: BTreeMap<String, String>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            default_language: None,
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            batch_threshold: DEFAULT_BATCH_THRESHOLD,
            extra_extensions: BTreeMap::new(),
        }
    }
}

/// Builds highlighters from a [`HighlightConfig`].
#[derive(Debug, Clone, Default)]
pub struct HighlighterFactory {
    config: HighlightConfig,
}

impl HighlighterFactory {
    pub fn new(config: HighlightConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Language for a file extension, overrides first. Case-insensitive.
    pub fn language_for_extension(&self, extension: &str) -> Option<Language> {
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();

        let overridden = self
            .config
            .extra_extensions
            .iter()
            .find(|(ext, _)| ext.trim_start_matches('.').eq_ignore_ascii_case(&extension));
        if let Some((ext, name)) = overridden {
            match Language::from_name(name) {
                Some(language) => return Some(language),
                None => warn!(extension = %ext, language = %name, "Unknown language in extension override"),
            }
        }

        EXTENSION_MAP
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|&(_, language)| language)
    }

    /// Language for an optional path: extension, then the configured
    /// default, then [`FALLBACK_LANGUAGE`].
    pub fn resolve(&self, path: Option<&Path>) -> Language {
        let from_path = path
            .and_then(|p| p.extension())
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.language_for_extension(ext));
        if let Some(language) = from_path {
            return language;
        }

        match self.config.default_language.as_deref() {
            Some(name) => Language::from_name(name).unwrap_or_else(|| {
                warn!(language = name, "Unknown default language, using fallback");
                FALLBACK_LANGUAGE
            }),
            None => FALLBACK_LANGUAGE,
        }
    }

    /// Creates a highlighter for `widget`.
    pub fn create<W: TextWidget>(&self, widget: W, path: Option<&Path>) -> Highlighter<W> {
        let language = self.resolve(path);
        debug!(%language, path = ?path, "Creating highlighter");
        self.create_for_language(widget, language)
    }

    /// Creates a highlighter for an explicit language.
    pub fn create_for_language<W: TextWidget>(
        &self,
        widget: W,
        language: Language,
    ) -> Highlighter<W> {
        let mut rules = CompiledRules::new(language);
        if !rules.errors().is_empty() && language != FALLBACK_LANGUAGE {
            warn!(%language, fallback = %FALLBACK_LANGUAGE, "Language tables failed to build");
            rules = CompiledRules::new(FALLBACK_LANGUAGE);
        }
        Highlighter::from_rules(widget, rules, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_buffer::TextBuffer;
    use proptest::prelude::*;

    #[test]
    fn test_extension_lookup() {
        let factory = HighlighterFactory::default();
        assert_eq!(factory.language_for_extension("rs"), Some(Language::Rust));
        assert_eq!(factory.language_for_extension(".PY"), Some(Language::Python));
        assert_eq!(factory.language_for_extension("Md"), Some(Language::Markdown));
        assert_eq!(factory.language_for_extension("txt"), Some(Language::Log));
        assert_eq!(factory.language_for_extension("unknownext"), None);
    }

    #[test]
    fn test_extension_overrides() {
        let mut config = HighlightConfig::default();
        config.extra_extensions.insert(".txt".into(), "markdown".into());
        config.extra_extensions.insert("rs".into(), "klingon".into());
        let factory = HighlighterFactory::new(config);
        assert_eq!(factory.language_for_extension("TXT"), Some(Language::Markdown));
        assert_eq!(factory.language_for_extension("rs"), Some(Language::Rust));
    }

    #[test]
    fn test_resolve_defaults() {
        let factory = HighlighterFactory::default();
        assert_eq!(factory.resolve(Some(Path::new("a/b/main.RS"))), Language::Rust);
        assert_eq!(factory.resolve(Some(Path::new("thing.unknownext"))), FALLBACK_LANGUAGE);
        assert_eq!(factory.resolve(Some(Path::new("Makefile"))), FALLBACK_LANGUAGE);
        assert_eq!(factory.resolve(None), FALLBACK_LANGUAGE);

        let factory = HighlighterFactory::new(HighlightConfig {
            default_language: Some("Go".into()),
            ..Default::default()
        });
        assert_eq!(factory.resolve(Some(Path::new("thing.unknownext"))), Language::Go);
        assert_eq!(factory.resolve(None), Language::Go);
    }

    #[test]
    fn test_unknown_extension_creates_fallback() {
        let factory = HighlighterFactory::default();
        let mut highlighter =
            factory.create(TextBuffer::from("x = 1"), Some(Path::new("thing.unknownext")));
        assert_eq!(highlighter.language(), FALLBACK_LANGUAGE);
        highlighter.highlight();
        assert!(highlighter.widget().has_tag(
            "number",
            glint_buffer::Position::new(1, 4),
            glint_buffer::Position::new(1, 5)
        ));
    }

    proptest! {
        #[test]
        fn prop_create_never_fails(
            path in proptest::option::of("[a-zA-Z0-9_./]{0,20}"),
            default in proptest::option::of("[a-zA-Z+]{0,12}"),
        ) {
            let factory = HighlighterFactory::new(HighlightConfig {
                default_language: default,
                ..Default::default()
            });
            let mut highlighter =
                factory.create(TextBuffer::from("def f():\n    return 1\n"), path.as_deref().map(Path::new));
            highlighter.highlight();
            prop_assert_eq!(highlighter.pending_count(), 0);
        }
    }
}
