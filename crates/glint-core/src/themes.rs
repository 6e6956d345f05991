//! Theme lookup by name.
//!
//! A name resolves to `<directory>/<name>.json` first, then to a built-in
//! theme. Anything that fails ends up as [`Theme::fallback`].

use std::path::{Path, PathBuf};

use glint_syntax::Theme;
use tracing::{debug, warn};

use crate::CoreResult;
use crate::config::ThemeConfig;

const BUILTIN: &[&str] = &["dark", "light", "fallback"];

/// Finds themes in a directory and among the built-ins.
#[derive(Debug, Clone, Default)]
pub struct ThemeStore {
    directory: Option<PathBuf>,
}

impl ThemeStore {
    pub fn new(directory: Option<PathBuf>) -> Self {
        Self { directory }
    }

    pub fn from_config(config: &ThemeConfig) -> Self {
        Self::new(config.directory())
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    fn file_for(&self, name: &str) -> Option<PathBuf> {
        let path = self.directory.as_ref()?.join(format!("{name}.json"));
        path.is_file().then_some(path)
    }

    /// Resolves a theme name. Never fails.
    pub fn resolve(&self, name: &str) -> Theme {
        if let Some(path) = self.file_for(name) {
            debug!(theme = name, path = %path.display(), "Loading theme file");
            return Theme::load_or_fallback(&path);
        }
        Theme::builtin(name).unwrap_or_else(|| {
            warn!(theme = name, "Unknown theme, using fallback");
            Theme::fallback()
        })
    }

    /// Names of every available theme, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = BUILTIN.iter().map(|s| s.to_string()).collect();
        if let Some(dir) = &self.directory
            && let Ok(entries) = std::fs::read_dir(dir)
        {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "json")
                    && let Some(stem) = path.file_stem()
                {
                    names.push(stem.to_string_lossy().into_owned());
                }
            }
        }
        names.sort();
        names.dedup();
        names
    }

    /// Writes a theme into the directory as `<name>.json`.
    pub fn install(&self, theme: &Theme) -> CoreResult<PathBuf> {
        let dir = self
            .directory
            .as_ref()
            .ok_or_else(|| crate::CoreError::InvalidOperation("no theme directory".into()))?;
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.json", theme.name));
        theme.save(&path)?;
        Ok(path)
    }
}
