//! # Glint Buffer
//!
//! Text storage for the highlighter: a rope buffer, `line.column` positions,
//! color types, and the [`TextWidget`] trait the engine drives.
//!
//! ## Key Concepts for Learning Rust
//!
//! ### Ownership & Borrowing
//! - `TextBuffer` owns the rope and the tag store
//! - Query methods borrow (`&self`); tagging and edits need `&mut self`
//!
//! ### Memory Safety
//! - Positions are validated before any rope access, so bad ranges become
//!   `BufferError`s instead of panics

mod buffer;
mod position;
mod style;
mod tags;
mod widget;

pub use buffer::TextBuffer;
pub use position::Position;
pub use style::{BaseStyle, Color, TagStyle};
pub use tags::TagStore;
pub use widget::TextWidget;

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur during buffer operations
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("Position {line}.{column} is out of bounds")]
    PositionOutOfBounds { line: usize, column: usize },

    #[error("Invalid character index: {0}")]
    InvalidCharIndex(usize),

    #[error("Invalid position: {0:?}")]
    InvalidPosition(String),

    #[error("Range is invalid: start {start} is after end {end}")]
    InvalidRange { start: Position, end: Position },

    #[error("Invalid tag name: {0:?}")]
    InvalidTag(String),

    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
