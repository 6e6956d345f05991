//! Position mapping between parser coordinates and widget addressing.
//!
//! ## Learning: Bytes vs Characters
//!
//! Rust strings are UTF-8, so regex matches and tree-sitter nodes report
//! *byte* offsets. Widgets address text by *character* column. `LineIndex`
//! keeps the byte offset of every line start so a byte offset turns into a
//! `line.column` position with one binary search plus a short char count on
//! that line only.

use std::borrow::Cow;

use glint_buffer::Position;

/// Byte offsets of line starts for one snapshot of text.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));
        Self {
            line_starts,
            len: text.len(),
        }
    }

    /// Number of lines (an empty text has one).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text of a 1-indexed line, without its newline.
    pub fn line<'t>(&self, text: &'t str, line: usize) -> &'t str {
        let Some(&start) = self.line_starts.get(line.wrapping_sub(1)) else {
            return "";
        };
        let end = self
            .line_starts
            .get(line)
            .map(|next| next - 1)
            .unwrap_or(self.len);
        text.get(start..end).unwrap_or("")
    }

    /// Length of a 1-indexed line in characters.
    pub fn line_len(&self, text: &str, line: usize) -> usize {
        self.line(text, line).chars().count()
    }

    /// Maps a byte offset to a position.
    ///
    /// Line is the number of newlines before the offset plus one, column is
    /// the number of characters since the preceding newline.
    pub fn position_of_offset(&self, text: &str, offset: usize) -> Position {
        let offset = floor_char_boundary(text, offset.min(self.len));
        let row = self.line_starts.partition_point(|&start| start <= offset) - 1;
        self.position_of_point(text, row, offset - self.line_starts[row])
    }

    /// Maps a tree-sitter point (0-indexed row, byte column) to a position.
    pub fn position_of_point(&self, text: &str, row: usize, byte_column: usize) -> Position {
        let line = self.line(text, row + 1);
        let byte_column = floor_char_boundary(line, byte_column.min(line.len()));
        Position::new(row + 1, line[..byte_column].chars().count())
    }

    /// Maps a position back to a byte offset, clamping to the line.
    pub fn offset_of(&self, text: &str, pos: Position) -> usize {
        let Some(&start) = self.line_starts.get(pos.line.wrapping_sub(1)) else {
            return self.len;
        };
        let line = self.line(text, pos.line);
        let within = line
            .char_indices()
            .nth(pos.column)
            .map(|(i, _)| i)
            .unwrap_or(line.len());
        start + within
    }
}

fn floor_char_boundary(text: &str, mut idx: usize) -> usize {
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

// ==================== Located Items ====================

/// Something the highlighter can place in the text.
///
/// Parsers do not always report where an item ends. The mapper then
/// estimates the end from the item's textual representation.
pub trait Located {
    /// Start position, if the producer reported one.
    fn start(&self) -> Option<Position>;

    /// End position, if the producer reported one.
    fn end(&self) -> Option<Position> {
        None
    }

    /// Text used to estimate a missing end.
    fn repr(&self) -> Cow<'_, str>;
}

/// A word found by scanning a line, located by its start only.
#[derive(Debug, Clone, Copy)]
pub struct Token<'a> {
    pub start: Position,
    pub text: &'a str,
}

impl Located for Token<'_> {
    fn start(&self) -> Option<Position> {
        Some(self.start)
    }

    fn repr(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.text)
    }
}

/// Returns the `(start, end)` range of an item.
///
/// - explicit end: used as is
/// - missing end: start plus the character length of the first line of the
///   item's representation, clamped to the start line (approximate)
/// - missing start: the `1.0`/`1.0` sentinel, which is never emitted
pub fn position_of<L: Located + ?Sized>(
    item: &L,
    lines: &LineIndex,
    text: &str,
) -> (Position, Position) {
    let Some(start) = item.start() else {
        return (Position::ORIGIN, Position::ORIGIN);
    };
    if let Some(end) = item.end() {
        return (start, end);
    }

    let repr = item.repr();
    let width = repr.lines().next().unwrap_or("").chars().count();
    let line_len = lines.line_len(text, start.line);
    let end_column = (start.column + width).min(line_len).max(start.column);
    (start, Position::new(start.line, end_column))
}

/// Returns true if `pos` addresses a character boundary inside `text`.
pub fn is_valid_position(lines: &LineIndex, text: &str, pos: Position) -> bool {
    pos.line >= 1 && pos.line <= lines.line_count() && pos.column <= lines.line_len(text, pos.line)
}
