//! Core text buffer implementation using rope data structure.
//!
//! ## Why Rope?
//!
//! Traditional text editors use gap buffers or arrays, but ropes excel at:
//! - **Large files**: O(log n) insertions/deletions vs O(n) for arrays
//! - **Cheap snapshots**: the highlighter copies the text once per pass
//! - **Line lookups**: `line_to_char` is O(log n), which position mapping leans on
//!
//! ## Learning: Ownership in Action
//!
//! ```rust,ignore
//! let buffer = TextBuffer::new();  // buffer OWNS the rope and its tags
//! let ranges = buffer.tag_ranges("keyword"); // ranges BORROW from buffer
//! // buffer.insert(0, "x");        // ERROR! Can't mutate while borrowed
//! drop(ranges);                    // Release borrow
//! buffer.insert(0, "x");           // Now OK! Tags shift with the text.
//! ```

use ropey::Rope;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::tags::TagStore;
use crate::{BaseStyle, BufferError, BufferResult, Position, TagStyle, TextWidget};

/// A text buffer backed by a rope, with a tag store that follows edits.
///
/// # Thread Safety
///
/// `TextBuffer` is `Send` but not `Sync` - it can be moved between threads
/// but shouldn't be accessed from multiple threads simultaneously.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    /// The rope holding our text content
    rope: Rope,

    /// Tag ranges and styles, in character indices
    tags: TagStore,

    /// Widget-wide colors
    base: BaseStyle,

    /// Set by every edit, cleared by `take_modified`
    modified: bool,

    /// Associated file path (if any)
    file_path: Option<PathBuf>,
}

impl TextBuffer {
    /// Creates a new empty buffer.
    ///
    /// # Example
    /// ```
    /// use glint_buffer::TextBuffer;
    ///
    /// let buffer = TextBuffer::new();
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            tags: TagStore::new(),
            base: BaseStyle::default(),
            modified: false,
            file_path: None,
        }
    }

    /// Loads a buffer from a file.
    ///
    /// # Learning: Error Handling with `?`
    ///
    /// The `?` operator converts the `io::Error` into `BufferError::Io`
    /// through the `#[from]` attribute on the variant.
    pub fn from_file(path: impl AsRef<Path>) -> BufferResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let mut buffer = Self::from(content);
        buffer.file_path = Some(path.to_path_buf());
        Ok(buffer)
    }

    // ==================== Text Access ====================

    /// Returns a line (1-indexed) without its trailing newline.
    pub fn line(&self, line: usize) -> BufferResult<String> {
        let idx = self.line_index(line)?;
        let mut text: String = self.rope.line(idx).into();
        if text.ends_with('\n') {
            text.pop();
        }
        Ok(text)
    }

    /// Returns a slice of text by character range.
    pub fn slice(&self, range: Range<usize>) -> BufferResult<String> {
        if range.start > range.end || range.end > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(range.end));
        }
        Ok(self.rope.slice(range).into())
    }

    // ==================== Measurements ====================

    /// Returns true if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Returns the number of characters in the buffer.
    #[inline]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns the number of lines in the buffer.
    ///
    /// An empty buffer has 1 line. A buffer ending with `\n` counts
    /// the empty line after it.
    #[inline]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Returns the length of a line (1-indexed) in characters, excluding the newline.
    pub fn line_len(&self, line: usize) -> BufferResult<usize> {
        let idx = self.line_index(line)?;
        let slice = self.rope.line(idx);
        let len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            Ok(len - 1)
        } else {
            Ok(len)
        }
    }

    // ==================== Mutations ====================

    /// Inserts text at a character index.
    ///
    /// # Learning: `&mut self`
    ///
    /// This method requires exclusive (mutable) access to the buffer.
    /// Rust's borrow checker ensures no other code can read or write
    /// the buffer, or hold references into its tag ranges, meanwhile.
    pub fn insert(&mut self, char_idx: usize, text: &str) -> BufferResult<()> {
        if char_idx > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(char_idx));
        }

        self.rope.insert(char_idx, text);
        self.tags.on_insert(char_idx, text.chars().count());
        self.modified = true;

        Ok(())
    }

    /// Inserts text at a line.column position.
    pub fn insert_at(&mut self, pos: Position, text: &str) -> BufferResult<()> {
        let char_idx = self.position_to_char_idx(pos)?;
        self.insert(char_idx, text)
    }

    /// Deletes text in a character range.
    pub fn delete(&mut self, range: Range<usize>) -> BufferResult<String> {
        if range.start > range.end || range.end > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(range.end));
        }

        let deleted: String = self.rope.slice(range.clone()).into();
        self.rope.remove(range.clone());
        self.tags.on_delete(range);
        self.modified = true;

        Ok(deleted)
    }

    /// Replaces text in a range with new text.
    pub fn replace(&mut self, range: Range<usize>, text: &str) -> BufferResult<String> {
        let deleted = self.delete(range.clone())?;
        self.insert(range.start, text)?;
        Ok(deleted)
    }

    /// Replaces the whole content.
    pub fn set_text(&mut self, text: &str) {
        let len = self.len_chars();
        self.rope = Rope::from_str(text);
        self.tags.on_delete(0..len);
        self.modified = true;
    }

    // ==================== Position Conversion ====================

    /// Converts a Position (line, column) to a character index.
    ///
    /// # Learning: Bounds Checking
    ///
    /// We validate input before operations to maintain invariants.
    /// This prevents panics and provides meaningful error messages.
    pub fn position_to_char_idx(&self, pos: Position) -> BufferResult<usize> {
        let out_of_bounds = || BufferError::PositionOutOfBounds {
            line: pos.line,
            column: pos.column,
        };
        let idx = self.line_index(pos.line).map_err(|_| out_of_bounds())?;
        let line_len = self.line_len(pos.line)?;

        // Allow column to be at end of line (for insertion and range ends)
        if pos.column > line_len {
            return Err(out_of_bounds());
        }

        Ok(self.rope.line_to_char(idx) + pos.column)
    }

    /// Converts a character index to a Position (line, column).
    pub fn char_idx_to_position(&self, char_idx: usize) -> BufferResult<Position> {
        if char_idx > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(char_idx));
        }

        let idx = self.rope.char_to_line(char_idx);
        let line_start = self.rope.line_to_char(idx);

        Ok(Position::new(idx + 1, char_idx - line_start))
    }

    fn char_range(&self, start: Position, end: Position) -> BufferResult<Range<usize>> {
        if start > end {
            return Err(BufferError::InvalidRange { start, end });
        }
        Ok(self.position_to_char_idx(start)?..self.position_to_char_idx(end)?)
    }

    fn line_index(&self, line: usize) -> BufferResult<usize> {
        if line == 0 || line > self.len_lines() {
            return Err(BufferError::PositionOutOfBounds { line, column: 0 });
        }
        Ok(line - 1)
    }

    // ==================== Tag Queries ====================

    /// Returns the ranges covered by `tag`, in document order.
    pub fn tag_ranges(&self, tag: &str) -> Vec<(Position, Position)> {
        self.tags
            .ranges(tag)
            .iter()
            .filter_map(|r| {
                let start = self.char_idx_to_position(r.start).ok()?;
                let end = self.char_idx_to_position(r.end).ok()?;
                Some((start, end))
            })
            .collect()
    }

    /// Returns the text under each range of `tag`.
    pub fn tagged_text(&self, tag: &str) -> Vec<String> {
        self.tags
            .ranges(tag)
            .iter()
            .filter_map(|r| self.slice(r.clone()).ok())
            .collect()
    }

    /// Returns true if `tag` covers all of `[start, end)`.
    pub fn has_tag(&self, tag: &str, start: Position, end: Position) -> bool {
        self.char_range(start, end)
            .map(|range| self.tags.covers(tag, range))
            .unwrap_or(false)
    }

    /// Names of tags currently applied somewhere.
    pub fn tag_names(&self) -> Vec<String> {
        self.tags.tag_names().map(str::to_string).collect()
    }

    /// Style configured for `tag`, if any.
    pub fn tag_style(&self, tag: &str) -> Option<&TagStyle> {
        self.tags.style(tag)
    }

    /// Widget-wide colors.
    pub fn base_style(&self) -> &BaseStyle {
        &self.base
    }

    // ==================== State Queries ====================

    /// Returns true if the text changed since the last `take_modified`.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Returns the associated file path, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }
}

impl TextWidget for TextBuffer {
    fn text(&self) -> String {
        self.rope.to_string()
    }

    fn text_range(&self, start: Position, end: Position) -> BufferResult<String> {
        let range = self.char_range(start, end)?;
        self.slice(range)
    }

    fn end_position(&self) -> Position {
        let line = self.len_lines();
        let column = self.line_len(line).unwrap_or(0);
        Position::new(line, column)
    }

    fn apply_tag(&mut self, tag: &str, start: Position, end: Position) -> BufferResult<()> {
        if tag.is_empty() {
            return Err(BufferError::InvalidTag(tag.to_string()));
        }
        let range = self.char_range(start, end)?;
        self.tags.add(tag, range);
        Ok(())
    }

    fn remove_tag(&mut self, tag: &str, start: Position, end: Position) -> BufferResult<()> {
        let range = self.char_range(start, end)?;
        self.tags.remove(tag, range);
        Ok(())
    }

    fn configure_tag_style(&mut self, tag: &str, style: TagStyle) -> BufferResult<()> {
        if tag.is_empty() {
            return Err(BufferError::InvalidTag(tag.to_string()));
        }
        self.tags.set_style(tag, style);
        Ok(())
    }

    fn configure_base(&mut self, base: &BaseStyle) -> BufferResult<()> {
        self.base.merge(base);
        Ok(())
    }

    fn take_modified(&mut self) -> bool {
        std::mem::take(&mut self.modified)
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for TextBuffer {
    fn from(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
            ..Self::new()
        }
    }
}

impl From<String> for TextBuffer {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}
