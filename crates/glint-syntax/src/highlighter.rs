//! Per-buffer highlighter.
//!
//! One [`Highlighter`] owns one widget. A pass reads the widget's text,
//! rebuilds the imported symbol table, tries a structured parse and falls
//! back to the regex rules when that fails, then makes sure every tag it used
//! has a color.
//!
//! ## Learning: Disjoint Field Borrows
//!
//! `highlight()` holds `&mut self.batch` and `&mut self.widget` inside the
//! [`Emitter`] while it reads `self.symbols` and mutates `self.parser`. The
//! borrow checker accepts this because each borrow names a different field;
//! calling a `&mut self` helper in the middle would not compile.
//!
//! ## Learning: Nothing Escapes
//!
//! `highlight()` returns a [`PassKind`], not a `Result`. Parse failures,
//! rejected tags and style errors are logged and absorbed here so an editor
//! never loses the ability to edit because highlighting went wrong.

use std::collections::BTreeSet;
use std::time::Duration;

use glint_buffer::{TagStyle, TextWidget};
use tracing::{debug, warn};

use crate::batch::{Emitter, TagBatch};
use crate::colors::SyntaxColorTable;
use crate::debounce::{DebounceState, Debouncer};
use crate::factory::HighlightConfig;
use crate::fallback::CompiledRules;
use crate::language::Language;
use crate::mapper::LineIndex;
use crate::structured::{StructuredParser, highlight_structured};
use crate::symbols::ImportedSymbolTable;
use crate::theme::Theme;

/// Which highlighter produced the last pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassKind {
    /// Tree-sitter parse and walk
    Structured,
    /// Regex rules, either by design or after a failed parse
    Fallback,
}

/// Highlighting state for one buffer.
pub struct Highlighter<W: TextWidget> {
    widget: W,
    language: Language,
    rules: CompiledRules,
    parser: Option<StructuredParser>,
    colors: SyntaxColorTable,
    symbols: ImportedSymbolTable,
    batch: TagBatch,
    debounce: Debouncer,
    /// Tags applied by the last pass, cleared before the next one.
    applied: BTreeSet<&'static str>,
    last_pass: Option<PassKind>,
}

impl<W: TextWidget> Highlighter<W> {
    /// Creates a highlighter for `language`.
    pub fn new(widget: W, language: Language, config: &HighlightConfig) -> Self {
        Self::from_rules(widget, CompiledRules::new(language), config)
    }

    pub(crate) fn from_rules(widget: W, rules: CompiledRules, config: &HighlightConfig) -> Self {
        let language = rules.language();
        let parser = if language.has_grammar() {
            match StructuredParser::new(language) {
                Ok(parser) => Some(parser),
                Err(e) => {
                    warn!(%language, error = %e, "Structured parser unavailable, using regex rules only");
                    None
                }
            }
        } else {
            None
        };

        let mut highlighter = Self {
            widget,
            language,
            rules,
            parser,
            colors: SyntaxColorTable::for_language(language),
            symbols: ImportedSymbolTable::new(),
            batch: TagBatch::new(config.batch_threshold),
            debounce: Debouncer::new(Duration::from_millis(config.debounce_ms)),
            applied: BTreeSet::new(),
            last_pass: None,
        };
        highlighter.configure_all_tags();
        highlighter
    }

    // ==================== Highlighting ====================

    /// Runs a full pass over the current text.
    pub fn highlight(&mut self) -> PassKind {
        let text = self.widget.text();
        self.clear_tags();

        let lines = LineIndex::new(&text);
        self.symbols = self.language.extract_symbols(&text);

        let mut emitter = Emitter::new(&mut self.batch, &mut self.widget);
        let structured = match self.parser.as_mut() {
            Some(parser) => match parser.parse(&text, &lines) {
                Ok(tree) => {
                    highlight_structured(
                        self.language,
                        &tree,
                        &text,
                        &lines,
                        &self.symbols,
                        &mut emitter,
                    );
                    true
                }
                Err(failure) => {
                    debug!(language = %self.language, %failure, "Falling back to regex rules");
                    false
                }
            },
            None => false,
        };
        if !structured {
            self.rules
                .highlight_basic(&text, &lines, &self.symbols, &mut emitter);
        }
        let emitted = emitter.emitted();
        let used = emitter.finish();

        let kind = if structured {
            PassKind::Structured
        } else {
            PassKind::Fallback
        };
        self.configure_new_tags(&used);
        self.applied = used;
        self.debounce.record(text);
        self.last_pass = Some(kind);

        debug!(
            language = %self.language,
            pass = ?kind,
            ranges = emitted,
            tags = self.applied.len(),
            symbols = self.symbols.len(),
            "Highlight pass complete"
        );
        kind
    }

    /// Removes every tag the last pass applied.
    pub fn clear_tags(&mut self) {
        for tag in std::mem::take(&mut self.applied) {
            if let Err(e) = self.widget.clear_tag(tag) {
                warn!(tag, error = %e, "Could not clear tag");
            }
        }
    }

    // ==================== Scheduling ====================

    /// Modification hook. Returns the delay to schedule
    /// [`on_debounce_elapsed`](Self::on_debounce_elapsed) after, or `None`
    /// when a pass is already scheduled.
    pub fn on_modified(&mut self) -> Option<Duration> {
        self.debounce.notify()
    }

    /// Checks the widget's modified flag and notifies the scheduler if set.
    pub fn poll_modified(&mut self) -> Option<Duration> {
        if self.widget.take_modified() {
            self.on_modified()
        } else {
            None
        }
    }

    /// The delayed callback. Highlights if the text changed since the last
    /// pass and returns whether it did.
    pub fn on_debounce_elapsed(&mut self) -> bool {
        let text = self.widget.text();
        if self.debounce.fire(&text) {
            self.highlight();
            true
        } else {
            false
        }
    }

    // ==================== Colors ====================

    /// Applies a theme. Tags the theme does not mention keep their colors.
    pub fn set_theme(&mut self, theme: &Theme) {
        if let Err(e) = self.widget.configure_base(&theme.base) {
            warn!(theme = %theme.name, error = %e, "Widget rejected base colors");
        }
        self.colors.apply_theme(theme);
        self.configure_all_tags();
        debug!(theme = %theme.name, "Theme applied");
    }

    fn configure_all_tags(&mut self) {
        let tags: Vec<(String, glint_buffer::Color)> = self
            .colors
            .iter()
            .map(|(tag, color)| (tag.to_string(), color))
            .collect();
        for (tag, color) in tags {
            self.configure_tag(&tag, color);
        }
    }

    /// Gives tags seen for the first time a resolved color.
    fn configure_new_tags(&mut self, used: &BTreeSet<&'static str>) {
        for tag in self.colors.ensure(used.iter().copied()) {
            let color = self.colors.resolve(tag);
            self.configure_tag(tag, color);
        }
    }

    fn configure_tag(&mut self, tag: &str, color: glint_buffer::Color) {
        if let Err(e) = self
            .widget
            .configure_tag_style(tag, TagStyle::foreground(color))
        {
            warn!(tag, error = %e, "Widget rejected tag style");
        }
    }

    // ==================== Accessors ====================

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn into_widget(self) -> W {
        self.widget
    }

    pub fn colors(&self) -> &SyntaxColorTable {
        &self.colors
    }

    /// Imported symbols found by the last pass.
    pub fn symbols(&self) -> &ImportedSymbolTable {
        &self.symbols
    }

    /// Ranges waiting in the batch. Zero after every pass.
    pub fn pending_count(&self) -> usize {
        self.batch.pending_count()
    }

    pub fn last_pass(&self) -> Option<PassKind> {
        self.last_pass
    }

    pub fn debounce_state(&self) -> DebounceState {
        self.debounce.state()
    }

    /// Tags applied by the last pass.
    pub fn applied_tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.applied.iter().copied()
    }
}

impl<W: TextWidget> std::fmt::Debug for Highlighter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Highlighter")
            .field("language", &self.language)
            .field("structured", &self.parser.is_some())
            .field("last_pass", &self.last_pass)
            .field("debounce", &self.debounce.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_buffer::{BaseStyle, BufferResult, Color, Position, TextBuffer};
    use proptest::prelude::*;

    use crate::mapper::is_valid_position;

    fn pos(line: usize, column: usize) -> Position {
        Position::new(line, column)
    }

    fn python(text: &str) -> Highlighter<TextBuffer> {
        Highlighter::new(TextBuffer::from(text), Language::Python, &HighlightConfig::default())
    }

    /// Snapshot of every tag range on the buffer.
    fn snapshot(buffer: &TextBuffer) -> Vec<(String, Vec<(Position, Position)>)> {
        let mut names = buffer.tag_names();
        names.sort();
        names
            .into_iter()
            .map(|name| {
                let ranges = buffer.tag_ranges(&name);
                (name, ranges)
            })
            .collect()
    }

    /// Records every range handed to the widget.
    struct Recorder {
        inner: TextBuffer,
        applied: Vec<(String, Position, Position)>,
    }

    impl TextWidget for Recorder {
        fn text(&self) -> String {
            self.inner.text()
        }

        fn text_range(&self, start: Position, end: Position) -> BufferResult<String> {
            self.inner.text_range(start, end)
        }

        fn end_position(&self) -> Position {
            self.inner.end_position()
        }

        fn apply_tag(&mut self, tag: &str, start: Position, end: Position) -> BufferResult<()> {
            self.applied.push((tag.to_string(), start, end));
            self.inner.apply_tag(tag, start, end)
        }

        fn remove_tag(&mut self, tag: &str, start: Position, end: Position) -> BufferResult<()> {
            self.inner.remove_tag(tag, start, end)
        }

        fn configure_tag_style(&mut self, tag: &str, style: TagStyle) -> BufferResult<()> {
            self.inner.configure_tag_style(tag, style)
        }

        fn configure_base(&mut self, base: &BaseStyle) -> BufferResult<()> {
            self.inner.configure_base(base)
        }

        fn take_modified(&mut self) -> bool {
            self.inner.take_modified()
        }
    }

    #[test]
    fn test_import_statement() {
        let mut highlighter = python("import os");
        assert_eq!(highlighter.highlight(), PassKind::Structured);
        let buffer = highlighter.widget();
        assert!(buffer.has_tag("keyword", pos(1, 0), pos(1, 6)));
        assert!(buffer.has_tag("namespace", pos(1, 7), pos(1, 9)));
    }

    #[test]
    fn test_annotated_function() {
        let mut highlighter = python("def f(x: int) -> int:\n    return x");
        highlighter.highlight();
        let buffer = highlighter.widget();
        assert!(buffer.has_tag("keyword", pos(1, 0), pos(1, 3)));
        assert!(buffer.has_tag("function", pos(1, 4), pos(1, 5)));
        assert!(buffer.has_tag("parameter", pos(1, 6), pos(1, 7)));
        assert!(buffer.has_tag("type_annotation", pos(1, 9), pos(1, 12)));
        assert!(buffer.has_tag("type_annotation", pos(1, 17), pos(1, 20)));
        assert!(buffer.has_tag("keyword", pos(2, 4), pos(2, 10)));
    }

    #[test]
    fn test_syntax_error_falls_back() {
        let mut highlighter = python("def f(:\n");
        assert_eq!(highlighter.highlight(), PassKind::Fallback);
        assert!(highlighter.widget().has_tag("keyword", pos(1, 0), pos(1, 3)));
        assert_eq!(highlighter.pending_count(), 0);
    }

    #[test]
    fn test_fallback_output_is_kept() {
        let text = "import os\nif x == 'a' or 3.5:\n    pass  # note\ndef (";
        let mut highlighter = python(text);
        assert_eq!(highlighter.highlight(), PassKind::Fallback);

        let lines = LineIndex::new(text);
        let mut expected: Vec<(&'static str, Position, Position)> = Vec::new();
        CompiledRules::new(Language::Python).highlight_basic(
            text,
            &lines,
            &Language::Python.extract_symbols(text),
            &mut expected,
        );
        let basic = ["keyword", "string", "number", "comment"];
        let expected: Vec<_> = expected
            .into_iter()
            .filter(|(tag, ..)| basic.contains(tag))
            .collect();
        assert!(expected.len() >= 6);
        for (tag, start, end) in expected {
            assert!(highlighter.widget().has_tag(tag, start, end), "{tag} {start}-{end}");
        }
    }

    #[test]
    fn test_highlight_is_idempotent() {
        let text = "from os import path\nclass A(B):\n    def run(self):\n        return path.join('a', 1)\n";
        let mut highlighter = python(text);
        highlighter.highlight();
        let first = snapshot(highlighter.widget());
        highlighter.highlight();
        assert_eq!(snapshot(highlighter.widget()), first);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_stale_tags_are_cleared() {
        let mut highlighter = python("import os");
        highlighter.highlight();
        highlighter.widget_mut().set_text("x = 1");
        highlighter.highlight();
        let buffer = highlighter.widget();
        assert!(buffer.tag_ranges("keyword").is_empty());
        assert!(buffer.tag_ranges("namespace").is_empty());
        assert!(buffer.has_tag("number", pos(1, 4), pos(1, 5)));
    }

    #[test]
    fn test_small_batches_flush_everything() {
        let config = HighlightConfig {
            batch_threshold: 2,
            ..Default::default()
        };
        let text = "a = 1\nb = 2\nc = 3\nd = 4\n";
        let mut highlighter = Highlighter::new(TextBuffer::from(text), Language::Python, &config);
        highlighter.highlight();
        assert_eq!(highlighter.pending_count(), 0);
        assert_eq!(highlighter.widget().tag_ranges("number").len(), 4);
    }

    #[test]
    fn test_debounce_cycle() {
        let mut highlighter = python("x = 1");
        assert_eq!(highlighter.poll_modified(), None);

        highlighter.widget_mut().insert(0, "y = 2\n").unwrap();
        assert_eq!(highlighter.poll_modified(), Some(Duration::from_millis(50)));
        assert_eq!(highlighter.debounce_state(), DebounceState::Pending);

        highlighter.widget_mut().insert(0, "# hi\n").unwrap();
        assert_eq!(highlighter.poll_modified(), None);

        assert!(highlighter.on_debounce_elapsed());
        assert_eq!(highlighter.debounce_state(), DebounceState::Idle);
        assert!(highlighter.widget().has_tag("comment", pos(1, 0), pos(1, 4)));

        // no change since the last pass
        assert!(highlighter.on_modified().is_some());
        assert!(!highlighter.on_debounce_elapsed());
    }

    #[test]
    fn test_tag_styles_configured() {
        let mut highlighter = python("import os\nos.getcwd()\n");
        let keyword = Color::from_hex("#569CD6").unwrap();
        assert_eq!(
            highlighter.widget().tag_style("keyword"),
            Some(&TagStyle::foreground(keyword))
        );

        highlighter.highlight();
        let function = highlighter.colors().get("function");
        assert_eq!(highlighter.colors().get("imported_function"), function);
        assert!(highlighter.widget().tag_style("imported_function").is_some());
        for tag in highlighter.applied_tags() {
            assert!(highlighter.colors().contains(tag), "{tag}");
        }
    }

    #[test]
    fn test_theme_missing_tag_keeps_default() {
        let mut highlighter = python("import os\nos.getcwd()\n");
        highlighter.highlight();
        let before = highlighter.colors().get("imported_function");
        assert!(before.is_some());

        let red = Color::from_hex("#FF0000").unwrap();
        let theme = Theme::new("partial").with_color("keyword", red).with_base(BaseStyle {
            background: Some(Color::from_hex("#000000").unwrap()),
            ..Default::default()
        });
        highlighter.set_theme(&theme);

        assert_eq!(highlighter.colors().get("imported_function"), before);
        let buffer = highlighter.widget();
        assert_eq!(buffer.tag_style("keyword"), Some(&TagStyle::foreground(red)));
        assert_eq!(
            buffer.tag_style("imported_function"),
            before.map(TagStyle::foreground).as_ref()
        );
        assert_eq!(buffer.base_style().background, theme.base.background);
    }

    #[test]
    fn test_regex_only_language() {
        let mut highlighter = Highlighter::new(
            TextBuffer::from("SELECT id FROM users; -- all"),
            Language::Sql,
            &HighlightConfig::default(),
        );
        assert_eq!(highlighter.highlight(), PassKind::Fallback);
        assert!(highlighter.widget().has_tag("keyword", pos(1, 0), pos(1, 6)));
        assert!(highlighter.widget().has_tag("comment", pos(1, 22), pos(1, 28)));
    }

    proptest! {
        #[test]
        fn prop_emitted_ranges_are_valid(
            text in "[a-z0-9 ():=#\"'.\n+\\-{}\\[\\],]{0,80}",
            index in 0usize..5,
        ) {
            let language = [
                Language::Python,
                Language::Rust,
                Language::JavaScript,
                Language::Json,
                Language::C,
            ][index];
            let widget = Recorder { inner: TextBuffer::from(text.as_str()), applied: Vec::new() };
            let mut highlighter = Highlighter::new(widget, language, &HighlightConfig::default());
            highlighter.highlight();
            prop_assert_eq!(highlighter.pending_count(), 0);

            let lines = LineIndex::new(&text);
            for (_, start, end) in &highlighter.widget().applied {
                prop_assert!(start < end);
                prop_assert!(is_valid_position(&lines, &text, *start));
                prop_assert!(is_valid_position(&lines, &text, *end));
            }
        }
    }
}
