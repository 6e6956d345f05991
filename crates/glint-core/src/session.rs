//! Open tabs and their highlighters.
//!
//! ## Learning: Type Aliases and Newtypes
//!
//! `TabId` is a newtype wrapper around `Uuid`. This provides:
//! - Type safety: Can't accidentally use a string as a tab ID
//! - Encapsulation: Can change the underlying type without breaking APIs
//! - Documentation: The type name explains its purpose
//!
//! ## Learning: Deadlines Instead of Timers
//!
//! Each highlighter only says "run me again in 50 ms". The session turns
//! that into an `Instant` per tab, and the host calls [`Session::tick`] from
//! whatever loop it has. Passing `now` in keeps the whole thing
//! deterministic under test.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use glint_buffer::{BufferResult, TextBuffer, TextWidget};
use glint_syntax::{Highlighter, HighlighterFactory, PassKind, Theme};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::Config;
use crate::event::{EventBus, HighlightEvent};
use crate::themes::ThemeStore;
use crate::{CoreError, CoreResult};

/// Unique identifier for a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabId(Uuid);

impl TabId {
    /// Creates a new unique tab ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct Tab {
    highlighter: Highlighter<TextBuffer>,
    path: Option<PathBuf>,
    deadline: Option<Instant>,
}

/// Every open tab, one highlighter each.
pub struct Session {
    config: Config,
    factory: HighlighterFactory,
    themes: ThemeStore,
    theme: Theme,
    tabs: HashMap<TabId, Tab>,
    events: EventBus,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let themes = ThemeStore::from_config(&config.theme);
        let theme = themes.resolve(&config.theme.name);
        info!(theme = %theme.name, "Session started");
        Self {
            factory: HighlighterFactory::new(config.highlight.clone()),
            config,
            themes,
            theme,
            tabs: HashMap::new(),
            events: EventBus::new(),
        }
    }

    // ==================== Tabs ====================

    /// Opens a tab over `text` and highlights it once.
    pub fn open(&mut self, text: &str, path: Option<&Path>) -> TabId {
        self.insert_tab(TextBuffer::from(text), path.map(Path::to_path_buf))
    }

    /// Opens a file in a new tab.
    pub fn open_file(&mut self, path: impl AsRef<Path>) -> CoreResult<TabId> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CoreError::FileNotFound(path.display().to_string()));
        }
        let buffer = TextBuffer::from_file(path)?;
        Ok(self.insert_tab(buffer, Some(path.to_path_buf())))
    }

    fn insert_tab(&mut self, buffer: TextBuffer, path: Option<PathBuf>) -> TabId {
        let id = TabId::new();
        let tab = self.build_tab(buffer, path);
        let language = tab.highlighter.language();
        let pass = tab.highlighter.last_pass();
        self.tabs.insert(id, tab);

        debug!(tab = %id, %language, "Opened tab");
        self.events
            .emit(HighlightEvent::TabOpened { tab: id, language });
        if let Some(pass) = pass {
            self.events
                .emit(HighlightEvent::HighlightCompleted { tab: id, pass });
        }
        id
    }

    fn build_tab(&self, mut buffer: TextBuffer, path: Option<PathBuf>) -> Tab {
        // the initial load is not an edit
        buffer.take_modified();
        let mut highlighter = self.factory.create(buffer, path.as_deref());
        highlighter.set_theme(&self.theme);
        highlighter.highlight();
        Tab {
            highlighter,
            path,
            deadline: None,
        }
    }

    /// Closes a tab.
    pub fn close(&mut self, id: TabId) -> CoreResult<()> {
        self.tabs.remove(&id).ok_or(CoreError::TabNotFound(id))?;
        self.events.emit(HighlightEvent::TabClosed(id));
        Ok(())
    }

    /// Edits a tab's buffer and schedules a re-highlight if it changed.
    pub fn edit<R>(
        &mut self,
        id: TabId,
        now: Instant,
        f: impl FnOnce(&mut TextBuffer) -> BufferResult<R>,
    ) -> CoreResult<R> {
        let tab = self.tabs.get_mut(&id).ok_or(CoreError::TabNotFound(id))?;
        let result = f(tab.highlighter.widget_mut())?;
        if let Some(delay) = tab.highlighter.poll_modified() {
            tab.deadline = Some(now + delay);
            self.events
                .emit(HighlightEvent::HighlightScheduled { tab: id, delay });
        }
        Ok(result)
    }

    /// Runs every pass whose deadline has passed. Returns how many ran.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut ran = 0;
        for (&id, tab) in &mut self.tabs {
            if !tab.deadline.is_some_and(|deadline| deadline <= now) {
                continue;
            }
            tab.deadline = None;
            if tab.highlighter.on_debounce_elapsed() {
                ran += 1;
                let pass = tab.highlighter.last_pass().unwrap_or(PassKind::Fallback);
                self.events
                    .emit(HighlightEvent::HighlightCompleted { tab: id, pass });
            } else {
                self.events.emit(HighlightEvent::HighlightSkipped(id));
            }
        }
        ran
    }

    /// Earliest pending deadline, for hosts that sleep until the next pass.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tabs.values().filter_map(|tab| tab.deadline).min()
    }

    // ==================== Themes & Config ====================

    /// Resolves a theme by name and applies it to every tab.
    pub fn set_theme(&mut self, name: &str) {
        self.theme = self.themes.resolve(name);
        for tab in self.tabs.values_mut() {
            tab.highlighter.set_theme(&self.theme);
        }
        self.events
            .emit(HighlightEvent::ThemeChanged(self.theme.name.clone()));
    }

    /// Replaces the configuration and rebuilds every highlighter from it.
    pub fn reload(&mut self, config: Config) {
        self.themes = ThemeStore::from_config(&config.theme);
        self.theme = self.themes.resolve(&config.theme.name);
        self.factory = HighlighterFactory::new(config.highlight.clone());
        self.config = config;

        let tabs = std::mem::take(&mut self.tabs);
        for (id, tab) in tabs {
            let mut highlighter = tab.highlighter;
            highlighter.clear_tags();
            let rebuilt = self.build_tab(highlighter.into_widget(), tab.path);
            self.tabs.insert(id, rebuilt);
        }
        info!(tabs = self.tabs.len(), "Configuration reloaded");
        self.events.emit(HighlightEvent::ConfigReloaded);
    }

    // ==================== Queries ====================

    pub fn highlighter(&self, id: TabId) -> CoreResult<&Highlighter<TextBuffer>> {
        self.tabs
            .get(&id)
            .map(|tab| &tab.highlighter)
            .ok_or(CoreError::TabNotFound(id))
    }

    pub fn buffer(&self, id: TabId) -> CoreResult<&TextBuffer> {
        self.highlighter(id).map(Highlighter::widget)
    }

    pub fn path(&self, id: TabId) -> CoreResult<Option<&Path>> {
        self.tabs
            .get(&id)
            .map(|tab| tab.path.as_deref())
            .ok_or(CoreError::TabNotFound(id))
    }

    pub fn tabs(&self) -> impl Iterator<Item = TabId> + '_ {
        self.tabs.keys().copied()
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Subscribes to session events.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<HighlightEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_buffer::{Color, Position, TagStyle};
    use glint_syntax::Language;
    use std::time::Duration;
    use tempfile::TempDir;

    use crate::event::EventHandler;

    fn drain(handler: &mut EventHandler) -> Vec<HighlightEvent> {
        std::iter::from_fn(|| handler.try_next()).collect()
    }

    #[test]
    fn test_open_highlights_immediately() {
        let mut session = Session::new(Config::default());
        let mut events = EventHandler::new(session.subscribe());
        let id = session.open("import os", Some(Path::new("script.py")));

        let buffer = session.buffer(id).unwrap();
        assert!(buffer.has_tag("keyword", Position::new(1, 0), Position::new(1, 6)));
        assert_eq!(
            drain(&mut events),
            vec![
                HighlightEvent::TabOpened { tab: id, language: Language::Python },
                HighlightEvent::HighlightCompleted { tab: id, pass: PassKind::Structured },
            ]
        );
    }

    #[test]
    fn test_edits_wait_for_deadline() {
        let mut session = Session::new(Config::default());
        let id = session.open("x = 1\n", Some(Path::new("a.py")));
        let mut events = EventHandler::new(session.subscribe());
        let start = Instant::now();

        session.edit(id, start, |b| b.insert(0, "# note\n")).unwrap();
        session
            .edit(id, start + Duration::from_millis(10), |b| b.insert(0, "y = 2\n"))
            .unwrap();
        assert_eq!(session.next_deadline(), Some(start + Duration::from_millis(50)));

        assert_eq!(session.tick(start + Duration::from_millis(20)), 0);
        assert!(session.buffer(id).unwrap().tag_ranges("comment").is_empty());

        assert_eq!(session.tick(start + Duration::from_millis(50)), 1);
        assert!(session.buffer(id).unwrap().has_tag(
            "comment",
            Position::new(2, 0),
            Position::new(2, 6)
        ));
        assert_eq!(session.next_deadline(), None);

        assert_eq!(
            drain(&mut events),
            vec![
                HighlightEvent::HighlightScheduled {
                    tab: id,
                    delay: Duration::from_millis(50)
                },
                HighlightEvent::HighlightCompleted { tab: id, pass: PassKind::Structured },
            ]
        );
    }

    #[test]
    fn test_unchanged_text_skips_pass() {
        let mut session = Session::new(Config::default());
        let id = session.open("x = 1\n", None);
        let start = Instant::now();

        session.edit(id, start, |b| b.insert(0, "z")).unwrap();
        session.edit(id, start, |b| b.delete(0..1).map(|_| ())).unwrap();
        let mut events = EventHandler::new(session.subscribe());
        assert_eq!(session.tick(start + Duration::from_secs(1)), 0);
        assert_eq!(drain(&mut events), vec![HighlightEvent::HighlightSkipped(id)]);
    }

    #[test]
    fn test_unknown_tab() {
        let mut session = Session::new(Config::default());
        let id = TabId::new();
        assert!(matches!(session.close(id), Err(CoreError::TabNotFound(_))));
        assert!(session.buffer(id).is_err());
        assert!(session.edit(id, Instant::now(), |_| Ok(())).is_err());
    }

    #[test]
    fn test_open_file_and_close() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lib.rs");
        std::fs::write(&path, "fn main() {}\n").unwrap();

        let mut session = Session::new(Config::default());
        let id = session.open_file(&path).unwrap();
        assert_eq!(session.highlighter(id).unwrap().language(), Language::Rust);
        assert_eq!(session.path(id).unwrap(), Some(path.as_path()));
        assert_eq!(session.next_deadline(), None);

        session.close(id).unwrap();
        assert_eq!(session.tab_count(), 0);
        assert!(matches!(
            session.open_file(dir.path().join("missing.rs")),
            Err(CoreError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_set_theme_applies_to_tabs() {
        let dir = TempDir::new().unwrap();
        let red = Color::from_hex("#FF0000").unwrap();
        let store = ThemeStore::new(Some(dir.path().to_path_buf()));
        store
            .install(&Theme::new("red").with_color("keyword", red))
            .unwrap();

        let mut config = Config::default();
        config.theme.directory = Some(dir.path().to_path_buf());
        let mut session = Session::new(config);
        let id = session.open("import os\nos.getcwd()\n", None);
        let imported = session.buffer(id).unwrap().tag_style("imported_function").copied();

        session.set_theme("red");
        let buffer = session.buffer(id).unwrap();
        assert_eq!(buffer.tag_style("keyword"), Some(&TagStyle::foreground(red)));
        assert_eq!(buffer.tag_style("imported_function").copied(), imported);
        assert_eq!(session.theme().name, "red");
    }

    #[test]
    fn test_reload_rebuilds_highlighters() {
        let mut session = Session::new(Config::default());
        let id = session.open("SELECT 1;", Some(Path::new("query.txt")));
        assert_eq!(session.highlighter(id).unwrap().language(), Language::Log);

        let mut config = Config::default();
        config
            .highlight
            .extra_extensions
            .insert("txt".into(), "sql".into());
        session.reload(config);

        let highlighter = session.highlighter(id).unwrap();
        assert_eq!(highlighter.language(), Language::Sql);
        assert!(highlighter.widget().has_tag(
            "keyword",
            Position::new(1, 0),
            Position::new(1, 6)
        ));
        assert_eq!(highlighter.widget().text(), "SELECT 1;");
    }
}
