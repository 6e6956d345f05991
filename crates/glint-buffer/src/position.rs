//! Positions in `line.column` form.
//!
//! ## Learning: Newtype Pattern
//!
//! `Position` wraps line/column coordinates instead of passing `(usize, usize)`
//! around. Lines are 1-indexed and columns are 0-indexed characters, which is
//! the addressing scheme text widgets use (`"1.0"` is the first character).
//! Deriving `Ord` with `line` declared first gives document order for free.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::BufferError;

/// A position in the buffer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (0-indexed, in characters not bytes)
    pub column: usize,
}

impl Position {
    /// The first character of the document, `1.0`.
    ///
    /// Also used as the sentinel for nodes that carry no location.
    pub const ORIGIN: Position = Position { line: 1, column: 0 };

    /// Creates a new position.
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Returns the position `n` characters further along the same line.
    pub fn offset(self, n: usize) -> Self {
        Self {
            line: self.line,
            column: self.column + n,
        }
    }

    /// Returns true if this is the `1.0` sentinel.
    pub fn is_origin(&self) -> bool {
        *self == Self::ORIGIN
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.line, self.column)
    }
}

impl FromStr for Position {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BufferError::InvalidPosition(s.to_string());
        let (line, column) = s.split_once('.').ok_or_else(invalid)?;
        let line: usize = line.trim().parse().map_err(|_| invalid())?;
        let column: usize = column.trim().parse().map_err(|_| invalid())?;
        if line == 0 {
            return Err(invalid());
        }
        Ok(Self { line, column })
    }
}

impl TryFrom<String> for Position {
    type Error = BufferError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(pos: Position) -> Self {
        pos.to_string()
    }
}
