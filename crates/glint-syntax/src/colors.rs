//! Tag → color table.
//!
//! Every highlighter starts from the same base palette, layers its
//! language's extra tags on top, and lets a theme override any entry.
//!
//! ## Learning: Fallback Chains
//!
//! A tag the table has never seen still gets a color. [`SyntaxColorTable::resolve`]
//! walks `imported_x` → `x` → `variable` → foreground, so a theme that omits
//! `imported_function` leaves it colored like `function`.

use std::collections::BTreeMap;

use glint_buffer::Color;
use tracing::warn;

use crate::language::{Language, TagDefault};
use crate::theme::Theme;

/// Default palette shared by every language.
pub const BASE_COLORS: &[(&str, &str)] = &[
    ("keyword", "#569CD6"),
    ("control", "#C586C0"),
    ("operator", "#D4D4D4"),
    ("punctuation", "#D4D4D4"),
    ("class", "#4EC9B0"),
    ("function", "#DCDCAA"),
    ("method", "#DCDCAA"),
    ("variable", "#9CDCFE"),
    ("parameter", "#9CDCFE"),
    ("property", "#9CDCFE"),
    ("string", "#CE9178"),
    ("number", "#B5CEA8"),
    ("boolean", "#569CD6"),
    ("null", "#569CD6"),
    ("constant", "#4FC1FF"),
    ("comment", "#6A9955"),
    ("docstring", "#6A9955"),
    ("todo", "#FF8C00"),
    ("decorator", "#C586C0"),
    ("builtin", "#4EC9B0"),
    ("self", "#569CD6"),
    ("namespace", "#4EC9B0"),
    ("type", "#4EC9B0"),
    ("type_annotation", "#4EC9B0"),
    ("interface", "#4EC9B0"),
];

/// Used when nothing in the chain matches.
pub const DEFAULT_FOREGROUND: Color = Color::rgb(0.831, 0.831, 0.831);

const IMPORTED_PREFIX: &str = "imported_";

/// Maps tag names to colors.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxColorTable {
    colors: BTreeMap<String, Color>,
    foreground: Color,
}

impl SyntaxColorTable {
    /// The base palette only.
    pub fn base() -> Self {
        let mut table = Self {
            colors: BTreeMap::new(),
            foreground: DEFAULT_FOREGROUND,
        };
        for &(tag, hex) in BASE_COLORS {
            table.set_hex(tag, hex);
        }
        table
    }

    /// Base palette plus the extra tags `language` emits.
    pub fn for_language(language: Language) -> Self {
        let mut table = Self::base();
        for &(tag, default) in language.def().tags {
            match default {
                TagDefault::Inherit(from) => {
                    let color = table.resolve(from);
                    table.colors.insert(tag.to_string(), color);
                }
                TagDefault::Fixed(hex) => table.set_hex(tag, hex),
            }
        }
        table
    }

    fn set_hex(&mut self, tag: &str, hex: &str) {
        match Color::from_hex(hex) {
            Ok(color) => {
                self.colors.insert(tag.to_string(), color);
            }
            Err(e) => warn!(tag, hex, error = %e, "Ignoring invalid default color"),
        }
    }

    pub fn get(&self, tag: &str) -> Option<Color> {
        self.colors.get(tag).copied()
    }

    pub fn set(&mut self, tag: impl Into<String>, color: Color) {
        self.colors.insert(tag.into(), color);
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.colors.contains_key(tag)
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.colors.iter().map(|(tag, color)| (tag.as_str(), *color))
    }

    /// Color for `tag`, following the fallback chain.
    pub fn resolve(&self, tag: &str) -> Color {
        if let Some(color) = self.get(tag) {
            return color;
        }
        if let Some(family) = tag.strip_prefix(IMPORTED_PREFIX)
            && let Some(color) = self.get(family)
        {
            return color;
        }
        self.get("variable").unwrap_or(self.foreground)
    }

    /// Gives every tag in `tags` an entry. Returns the tags that were added.
    pub fn ensure<'a>(&mut self, tags: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        let mut added = Vec::new();
        for tag in tags {
            if !self.contains(tag) {
                let color = self.resolve(tag);
                self.colors.insert(tag.to_string(), color);
                added.push(tag);
            }
        }
        added
    }

    /// Overrides entries with the theme's colors. Tags the theme does not
    /// mention keep their current color.
    pub fn apply_theme(&mut self, theme: &Theme) {
        for (tag, color) in theme.colors() {
            self.colors.insert(tag.to_string(), color);
        }
        if let Some(foreground) = theme.base.foreground {
            self.foreground = foreground;
        }
    }
}

impl Default for SyntaxColorTable {
    fn default() -> Self {
        Self::base()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    #[test]
    fn test_base_palette() {
        let table = SyntaxColorTable::base();
        assert_eq!(table.len(), BASE_COLORS.len());
        assert_eq!(table.get("keyword"), Some(hex("#569CD6")));
        assert_eq!(table.get("comment"), Some(hex("#6A9955")));
    }

    #[test]
    fn test_language_tags() {
        let python = SyntaxColorTable::for_language(Language::Python);
        assert_eq!(python.get("f_string"), python.get("string"));
        assert_eq!(python.get("exception"), python.get("class"));

        let log = SyntaxColorTable::for_language(Language::Log);
        assert_eq!(log.get("log_level_error"), Some(hex("#CE9178")));
    }

    #[test]
    fn test_every_language_tag_has_a_color() {
        for &language in Language::ALL {
            let table = SyntaxColorTable::for_language(language);
            for &(tag, _) in language.def().tags {
                assert!(table.contains(tag), "{language}: {tag}");
            }
        }
    }

    #[test]
    fn test_resolve_chain() {
        let mut table = SyntaxColorTable::base();
        assert_eq!(table.resolve("imported_function"), hex("#DCDCAA"));
        assert_eq!(table.resolve("imported_module"), hex("#9CDCFE"));
        assert_eq!(table.resolve("never_seen"), hex("#9CDCFE"));

        table.colors.remove("variable");
        assert_eq!(table.resolve("never_seen"), DEFAULT_FOREGROUND);
    }

    #[test]
    fn test_ensure() {
        let mut table = SyntaxColorTable::base();
        let added = table.ensure(["keyword", "imported_class", "key"]);
        assert_eq!(added, vec!["imported_class", "key"]);
        assert_eq!(table.get("imported_class"), table.get("class"));
        assert!(table.ensure(["imported_class"]).is_empty());
    }

    #[test]
    fn test_apply_theme_keeps_missing_tags() {
        let mut table = SyntaxColorTable::base();
        table.ensure(["imported_function"]);
        let before = table.get("imported_function");

        let theme = Theme::from_json("partial", r##"{"keyword": "#FF0000"}"##).unwrap();
        table.apply_theme(&theme);
        assert_eq!(table.get("keyword"), Some(hex("#FF0000")));
        assert_eq!(table.get("imported_function"), before);
    }
}
