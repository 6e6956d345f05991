//! The text widget interface the highlighter drives.
//!
//! ## Learning: Traits as Seams
//!
//! The highlighting engine never sees a concrete GUI toolkit. It is generic
//! over `TextWidget`, so the same engine runs against the rope-backed
//! [`TextBuffer`](crate::TextBuffer) in tests and the CLI, and against a real
//! editor widget in a host application.

use crate::{BaseStyle, BufferResult, Position, TagStyle};

/// A text widget that can hold named tag ranges.
///
/// Positions use `line.column` addressing: 1-indexed lines, 0-indexed
/// character columns, half-open ranges.
pub trait TextWidget {
    /// Returns the full text.
    fn text(&self) -> String;

    /// Returns the text between two positions.
    fn text_range(&self, start: Position, end: Position) -> BufferResult<String>;

    /// Position just past the last character.
    fn end_position(&self) -> Position;

    /// Adds `tag` over `[start, end)`.
    fn apply_tag(&mut self, tag: &str, start: Position, end: Position) -> BufferResult<()>;

    /// Removes `tag` from `[start, end)`.
    fn remove_tag(&mut self, tag: &str, start: Position, end: Position) -> BufferResult<()>;

    /// Sets the visual style used for `tag`.
    fn configure_tag_style(&mut self, tag: &str, style: TagStyle) -> BufferResult<()>;

    /// Sets widget-wide colors. Unset fields keep their current value.
    fn configure_base(&mut self, base: &BaseStyle) -> BufferResult<()>;

    /// Returns true if the text changed since the last call, and clears the flag.
    ///
    /// This is the modification hook: hosts poll it (or call it from their
    /// own change event) to decide whether to notify the highlighter.
    fn take_modified(&mut self) -> bool;

    /// Removes `tag` from the whole text.
    fn clear_tag(&mut self, tag: &str) -> BufferResult<()> {
        let end = self.end_position();
        self.remove_tag(tag, Position::ORIGIN, end)
    }
}
