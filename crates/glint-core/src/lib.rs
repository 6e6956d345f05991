//! # Glint Core
//!
//! Application-side plumbing around the highlighting engine.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        Session                           │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────────────┐ │
//! │  │   Config    │ │ ThemeStore  │ │      EventBus       │ │
//! │  └─────────────┘ └─────────────┘ └─────────────────────┘ │
//! │         │                                                │
//! │  ┌──────┴──────────────────────────────────┐             │
//! │  │   HighlighterFactory → one per tab      │             │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐    │             │
//! │  │  │  Tab 1  │ │  Tab 2  │ │  Tab 3  │    │             │
//! │  │  └─────────┘ └─────────┘ └─────────┘    │             │
//! │  └─────────────────────────────────────────┘             │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Learning: Module Organization
//!
//! Rust modules map to files:
//! - `mod foo;` looks for `foo.rs` or `foo/mod.rs`
//! - `pub use` re-exports items for cleaner public APIs

pub mod config;
pub mod event;
pub mod session;
pub mod themes;

pub use config::{Config, ConfigError, ThemeConfig};
pub use event::{EventBus, EventHandler, HighlightEvent};
pub use session::{Session, TabId};
pub use themes::ThemeStore;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Tab not found: {0}")]
    TabNotFound(TabId),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Buffer error: {0}")]
    Buffer(#[from] glint_buffer::BufferError),

    #[error("Syntax error: {0}")]
    Syntax(#[from] glint_syntax::SyntaxError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}
