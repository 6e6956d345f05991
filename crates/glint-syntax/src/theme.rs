//! Highlighting themes.
//!
//! A theme file is a JSON object mapping tag names to `#RRGGBB` colors, with
//! an optional `base` object for widget-wide colors:
//!
//! ```json
//! {
//!     "base": { "background": "#1E1E1E", "foreground": "#D4D4D4" },
//!     "keyword": "#569CD6",
//!     "imported_class": "#4EC9B0"
//! }
//! ```
//!
//! ## Learning: Lenient Parsing with `serde_json::Value`
//!
//! Deriving `Deserialize` would reject a whole file over one bad entry.
//! Themes are hand-edited, so they are read as an untyped `Value` first and
//! each entry is checked on its own: non-string values and unparsable colors
//! are skipped with a warning, everything else is kept.
//!
//! ## Learning: Builder Pattern
//!
//! ```rust,ignore
//! let theme = Theme::dark().with_color("keyword", Color::rgb(1.0, 0.0, 0.0));
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use glint_buffer::{BaseStyle, Color};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::colors::BASE_COLORS;
use crate::{SyntaxError, SyntaxResult};

const BASE_KEY: &str = "base";

/// A named set of tag colors plus widget-wide colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Theme name
    pub name: String,

    /// Widget background, foreground, cursor and selection
    pub base: BaseStyle,

    colors: BTreeMap<String, Color>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: BaseStyle::default(),
            colors: BTreeMap::new(),
        }
    }

    /// Minimal built-in theme used when a theme cannot be loaded: a dark
    /// background and a light foreground, no syntax colors.
    pub fn fallback() -> Self {
        Self::new("fallback").with_base(base_style("#1E1E1E", "#D4D4D4", "#AEAFAD", "#264F78"))
    }

    /// Built-in dark theme: the base palette on a dark background.
    pub fn dark() -> Self {
        let mut theme =
            Self::new("dark").with_base(base_style("#1E1E1E", "#D4D4D4", "#AEAFAD", "#264F78"));
        for &(tag, hex) in BASE_COLORS {
            if let Ok(color) = Color::from_hex(hex) {
                theme.colors.insert(tag.to_string(), color);
            }
        }
        theme
    }

    /// Built-in light theme.
    pub fn light() -> Self {
        let palette: &[(&str, &str)] = &[
            ("keyword", "#0000FF"),
            ("control", "#AF00DB"),
            ("class", "#267F99"),
            ("function", "#795E26"),
            ("method", "#795E26"),
            ("variable", "#001080"),
            ("parameter", "#001080"),
            ("property", "#001080"),
            ("string", "#A31515"),
            ("number", "#098658"),
            ("boolean", "#0000FF"),
            ("null", "#0000FF"),
            ("constant", "#0070C1"),
            ("comment", "#008000"),
            ("docstring", "#008000"),
            ("decorator", "#AF00DB"),
            ("builtin", "#267F99"),
            ("self", "#0000FF"),
            ("namespace", "#267F99"),
            ("type", "#267F99"),
            ("type_annotation", "#267F99"),
            ("operator", "#000000"),
        ];
        let mut theme =
            Self::new("light").with_base(base_style("#FFFFFF", "#000000", "#000000", "#ADD6FF"));
        for &(tag, hex) in palette {
            if let Ok(color) = Color::from_hex(hex) {
                theme.colors.insert(tag.to_string(), color);
            }
        }
        theme
    }

    /// Looks up a built-in theme by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "fallback" => Some(Self::fallback()),
            _ => None,
        }
    }

    pub fn with_base(mut self, base: BaseStyle) -> Self {
        self.base = base;
        self
    }

    pub fn with_color(mut self, tag: impl Into<String>, color: Color) -> Self {
        self.colors.insert(tag.into(), color);
        self
    }

    pub fn color(&self, tag: &str) -> Option<Color> {
        self.colors.get(tag).copied()
    }

    /// Tag colors, in tag order.
    pub fn colors(&self) -> impl Iterator<Item = (&str, Color)> {
        self.colors.iter().map(|(tag, color)| (tag.as_str(), *color))
    }

    // ==================== Loading ====================

    /// Parses theme JSON. Only a non-object document is an error.
    pub fn from_json(name: impl Into<String>, json: &str) -> SyntaxResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(name, value)
    }

    pub fn from_value(name: impl Into<String>, value: Value) -> SyntaxResult<Self> {
        let name = name.into();
        let Value::Object(entries) = value else {
            return Err(SyntaxError::Theme(format!(
                "theme {name:?} must be a JSON object"
            )));
        };

        let mut theme = Self::new(name);
        for (key, value) in entries {
            if key == BASE_KEY {
                match value {
                    Value::Object(base) => theme.base = parse_base(&theme.name, &base),
                    _ => warn!(theme = %theme.name, "Ignoring non-object base section"),
                }
                continue;
            }
            if let Some(color) = parse_color(&theme.name, &key, &value) {
                theme.colors.insert(key, color);
            }
        }
        debug!(theme = %theme.name, colors = theme.colors.len(), "Parsed theme");
        Ok(theme)
    }

    /// Loads a theme file, named after its file stem.
    pub fn load(path: &Path) -> SyntaxResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_json(name, &content)
    }

    /// Loads a theme file, falling back to [`Theme::fallback`] on any error.
    pub fn load_or_fallback(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Theme load failed, using fallback");
            Self::fallback()
        })
    }

    /// Serializes in the theme file format.
    pub fn to_json(&self) -> SyntaxResult<String> {
        let mut root = Map::new();
        root.insert(BASE_KEY.to_string(), serde_json::to_value(self.base)?);
        for (tag, color) in &self.colors {
            root.insert(tag.clone(), Value::String(color.to_hex()));
        }
        Ok(serde_json::to_string_pretty(&Value::Object(root))?)
    }

    /// Saves the theme to a file.
    pub fn save(&self, path: &Path) -> SyntaxResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

fn base_style(background: &str, foreground: &str, cursor: &str, selection: &str) -> BaseStyle {
    let color = |hex: &str| Color::from_hex(hex).ok();
    BaseStyle {
        background: color(background),
        foreground: color(foreground),
        cursor: color(cursor),
        selection: color(selection),
    }
}

fn parse_color(theme: &str, key: &str, value: &Value) -> Option<Color> {
    let Value::String(hex) = value else {
        warn!(theme, key, "Ignoring non-string theme entry");
        return None;
    };
    match Color::from_hex(hex.trim()) {
        Ok(color) => Some(color),
        Err(e) => {
            warn!(theme, key, error = %e, "Ignoring invalid theme color");
            None
        }
    }
}

/// Reads the `base` section, accepting the Tk-style aliases too.
fn parse_base(theme: &str, entries: &Map<String, Value>) -> BaseStyle {
    let mut base = BaseStyle::default();
    for (key, value) in entries {
        let slot = match key.as_str() {
            "background" | "bg" => &mut base.background,
            "foreground" | "fg" => &mut base.foreground,
            "cursor" | "insertbackground" => &mut base.cursor,
            "selection" | "selectbackground" => &mut base.selection,
            _ => {
                debug!(theme, key = %key, "Ignoring unknown base key");
                continue;
            }
        };
        if let Some(color) = parse_color(theme, key, value) {
            *slot = Some(color);
        }
    }
    base
}
