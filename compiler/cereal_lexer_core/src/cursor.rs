//! Character cursor over an owned source string.
//!
//! The cursor decodes the source into `char`s once at construction, so every
//! index it reports is a character offset. Reading past the end never
//! panics through [`current()`](Cursor::current): it yields [`EOF_CHAR`]
//! instead, and [`advance()`](Cursor::advance) is a no-op at EOF.
//!
//! # Line and Column
//!
//! `line` and `column` describe the character *at* `index`. Advancing over a
//! `\n` moves to the next line and resets the column; the newline itself is
//! reported on the line it terminates.

use crate::char_class::EOF_CHAR;
use crate::{Position, ScanError, ScanErrorKind, Span};

/// Stateful reader over a fixed input string.
///
/// # Invariant
///
/// `0 <= index <= chars.len()`, and `is_eof()` holds exactly when
/// `index == chars.len()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    /// Source decoded into characters.
    chars: Vec<char>,
    /// Current read position (character index into `chars`).
    index: usize,
    /// 0-based column of the character at `index`.
    column: usize,
    /// 1-based line of the character at `index`.
    line: usize,
}

impl Cursor {
    /// Create a cursor positioned at the first character of `source`.
    pub fn new(source: &str) -> Self {
        Cursor {
            chars: source.chars().collect(),
            index: Position::START.index,
            column: Position::START.column,
            line: Position::START.line,
        }
    }

    /// Returns the character at the current position, or [`EOF_CHAR`] at EOF.
    #[inline]
    pub fn current(&self) -> char {
        self.chars.get(self.index).copied().unwrap_or(EOF_CHAR)
    }

    /// Returns `true` once every character has been passed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.index >= self.chars.len()
    }

    /// Move past the current character.
    ///
    /// Does nothing at EOF.
    pub fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        if self.current() == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        self.index += 1;
    }

    /// Advance, then return the new current character.
    ///
    /// Fails with [`ScanErrorKind::EndOfInput`] when the advance lands on
    /// (or was already at) EOF.
    pub fn next_char(&mut self) -> Result<char, ScanError> {
        self.advance();
        if self.is_eof() {
            return Err(self.error_kind(ScanErrorKind::EndOfInput));
        }
        Ok(self.current())
    }

    /// Returns the character `offset` positions ahead without moving.
    ///
    /// `peek(0)` is the current character.
    ///
    /// # Panics
    ///
    /// Panics if `index + offset` is outside the source, EOF included. Use
    /// [`get()`](Self::get) when the offset is not known to be in bounds.
    #[inline]
    pub fn peek(&self, offset: usize) -> char {
        self.chars[self.index + offset]
    }

    /// Checked variant of [`peek()`](Self::peek).
    #[inline]
    pub fn get(&self, offset: usize) -> Option<char> {
        self.index
            .checked_add(offset)
            .and_then(|i| self.chars.get(i))
            .copied()
    }

    /// Rewind to the first character of the source.
    pub fn reset(&mut self) {
        self.index = Position::START.index;
        self.column = Position::START.column;
        self.line = Position::START.line;
    }

    /// Build a positioned error carrying a free-form message.
    ///
    /// The error records the current position; return it with `Err(..)?`
    /// or `return Err(..)` to abort the scan.
    pub fn error(&self, message: impl Into<String>) -> ScanError {
        self.error_kind(ScanErrorKind::Custom(message.into()))
    }

    /// Build a positioned error of a specific kind.
    pub fn error_kind(&self, kind: ScanErrorKind) -> ScanError {
        ScanError::new(kind, self.position())
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn position(&self) -> Position {
        Position {
            index: self.index,
            line: self.line,
            column: self.column,
        }
    }

    /// Source length in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Collect the characters covered by `span`.
    ///
    /// Parts of the span that fall outside the source are ignored.
    pub fn slice(&self, span: Span) -> String {
        let end = span.end().min(self.chars.len());
        let start = span.start.min(end);
        self.chars[start..end].iter().collect()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
