//! # Glint Syntax
//!
//! Incremental syntax highlighting for editor buffers.
//!
//! A pass reads the buffer text, extracts imported names, and then either
//! walks a tree-sitter parse tree (Python, Rust, JavaScript, JSON) or runs
//! per-language regex rules (everything else, and any buffer that does not
//! parse cleanly). Results become `(tag, start, end)` requests that are
//! batched and applied to a [`TextWidget`](glint_buffer::TextWidget).
//!
//! ## Why Tree-sitter?
//!
//! Tree-sitter is a parser generator tool and incremental parsing library:
//! - **Error-tolerant**: Produces a tree even for broken input, with
//!   `ERROR` and `MISSING` nodes marking the damage
//! - **Fast**: Written in C with Rust bindings
//! - **Accurate**: Real parsing, so `print` the builtin and `print` the
//!   attribute get different colors
//!
//! A tree with any error node is treated as a failed parse and the whole
//! buffer goes through the regex rules instead.
//!
//! ## Learning: FFI (Foreign Function Interface)
//!
//! Tree-sitter is written in C. Rust's FFI allows calling C functions:
//! - `extern "C"` blocks declare C functions
//! - `unsafe` blocks required for calling them
//! - The `tree-sitter` crate provides safe wrappers
//!
//! Nodes borrow their tree, so the walk copies what it needs into an owned
//! [`SyntaxTree`](tree::SyntaxTree) first and never hands tree-sitter types
//! to the classifiers.

pub mod batch;
pub mod colors;
pub mod debounce;
pub mod factory;
pub mod fallback;
pub mod highlighter;
pub mod language;
pub mod mapper;
pub mod structured;
pub mod symbols;
pub mod theme;
pub mod tree;

pub use batch::{Emitter, TagBatch, TagSink};
pub use colors::SyntaxColorTable;
pub use debounce::{DebounceState, Debouncer};
pub use factory::{FALLBACK_LANGUAGE, HighlightConfig, HighlighterFactory};
pub use fallback::CompiledRules;
pub use highlighter::{Highlighter, PassKind};
pub use language::Language;
pub use mapper::LineIndex;
pub use structured::{ParseFailure, StructuredParser};
pub use symbols::{ImportedSymbol, ImportedSymbolTable, SymbolKind};
pub use theme::Theme;

/// Result type for syntax operations
pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Errors that can occur while setting up highlighting.
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("No grammar available for {0}")]
    NoGrammar(Language),

    #[error("Grammar error: {0}")]
    Grammar(String),

    #[error("Invalid {tag} pattern: {source}")]
    Pattern {
        tag: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("Theme error: {0}")]
    Theme(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_buffer::{Position, TextBuffer, TextWidget};

    #[test]
    fn test_rust_highlighting() {
        let source = r#"fn main() {
    println!("Hello, world!");
}"#;
        let factory = HighlighterFactory::default();
        let mut highlighter = factory.create(TextBuffer::from(source), Some("main.rs".as_ref()));
        assert_eq!(highlighter.highlight(), PassKind::Structured);

        let buffer = highlighter.widget();
        assert!(buffer.has_tag("keyword", Position::new(1, 0), Position::new(1, 2)));
        assert!(buffer.has_tag("function", Position::new(1, 3), Position::new(1, 7)));
        assert!(buffer.has_tag("macro", Position::new(2, 4), Position::new(2, 12)));
        assert_eq!(buffer.tagged_text("string"), vec!["\"Hello, world!\""]);
    }

    #[test]
    fn test_unknown_language() {
        let result: SyntaxResult<Language> = "unknown_lang".parse();
        assert!(matches!(result, Err(SyntaxError::UnknownLanguage(name)) if name == "unknown_lang"));
    }

    #[test]
    fn test_every_language_highlights() {
        let factory = HighlighterFactory::default();
        for &language in Language::ALL {
            let mut highlighter =
                factory.create_for_language(TextBuffer::from("x = 1 # \"a\"\n"), language);
            highlighter.highlight();
            assert_eq!(highlighter.pending_count(), 0, "{language}");
            assert!(highlighter.last_pass().is_some());
            let _ = highlighter.widget().end_position();
        }
    }
}
