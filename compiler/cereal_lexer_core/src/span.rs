//! Source locations measured in characters.

use std::fmt;
use std::ops::Range;

/// Half-open character range `[start, start + len)` over a source string.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    /// Offset of the first character.
    pub start: usize,
    /// Number of characters covered.
    pub len: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, len: usize) -> Self {
        Span { start, len }
    }

    /// Offset one past the last covered character.
    #[inline]
    pub const fn end(self) -> usize {
        self.start + self.len
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn range(self) -> Range<usize> {
        self.start..self.end()
    }

    /// Returns `true` if `index` falls inside this span.
    #[inline]
    pub const fn contains(self, index: usize) -> bool {
        index >= self.start && index < self.end()
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

/// Cursor location: character index plus 1-based line and 0-based column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    pub index: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Position of the first character of any source.
    pub const START: Position = Position {
        index: 0,
        line: 1,
        column: 0,
    };
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
