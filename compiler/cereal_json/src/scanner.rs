//! Hand-written scanner for the JSON-like grammar.
//!
//! The scanner pulls characters from a [`Cursor`] and produces one
//! [`JsonToken`] per call. Each call skips leading whitespace, then
//! dispatches on the current character to a focused method that consumes the
//! whole token. There is no state between calls beyond the cursor position.
//!
//! # Failure Modes
//!
//! Escapes are not validated, numbers are not checked beyond rejecting a
//! second `.`, and any letter run becomes a keyword. A character that starts
//! no token becomes [`JsonToken::Invalid`] rather than an error. Only two
//! conditions fail a scan: a string that reaches EOF, and a number with two
//! decimal points.

use cereal_lexer_core::{
    is_digit, is_letter, is_quote, is_whitespace, Cursor, ScanError, ScanErrorKind, TokenSource,
    TokenStream,
};
use tracing::{debug, trace};

use crate::token::{JsonToken, Lexeme};

/// Token stream over the JSON-like grammar.
pub type JsonTokenStream = TokenStream<JsonScanner>;

/// Grammar-specific scanner; plugs into [`TokenStream`] via [`TokenSource`].
#[derive(Clone, Debug)]
pub struct JsonScanner {
    cursor: Cursor,
}

impl JsonScanner {
    /// Create a scanner positioned at the start of `source`.
    pub fn new(source: &str) -> Self {
        Self::from_cursor(Cursor::new(source))
    }

    /// Create a scanner that continues from wherever `cursor` stands.
    pub fn from_cursor(cursor: Cursor) -> Self {
        JsonScanner { cursor }
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    pub fn into_cursor(self) -> Cursor {
        self.cursor
    }

    /// Produce the next token.
    ///
    /// Returns [`JsonToken::Eof`] once only whitespace remains, and keeps
    /// returning it on every later call.
    pub fn scan_token(&mut self) -> Result<JsonToken, ScanError> {
        self.skip_whitespace();
        if self.cursor.is_eof() {
            return Ok(JsonToken::Eof);
        }
        let token = match self.cursor.current() {
            '{' => self.single(|start| JsonToken::LeftBrace { start }),
            '}' => self.single(|start| JsonToken::RightBrace { start }),
            '[' => self.single(|start| JsonToken::LeftBracket { start }),
            ']' => self.single(|start| JsonToken::RightBracket { start }),
            ',' => self.single(|start| JsonToken::Comma { start }),
            ':' => self.single(|start| JsonToken::Colon { start }),
            '"' => self.string()?,
            '0'..='9' | '-' => self.number()?,
            'a'..='z' | 'A'..='Z' => self.keyword(),
            _ => self.invalid(),
        };
        Ok(token)
    }

    // ─── Whitespace ────────────────────────────────────────────────────

    fn skip_whitespace(&mut self) {
        while !self.cursor.is_eof() && is_whitespace(self.cursor.current()) {
            self.cursor.advance();
        }
    }

    // ─── Punctuation ───────────────────────────────────────────────────

    /// Single-character token: record the start, advance once, build.
    fn single(&mut self, make: fn(usize) -> JsonToken) -> JsonToken {
        let start = self.cursor.index();
        self.cursor.advance();
        make(start)
    }

    // ─── Strings ───────────────────────────────────────────────────────

    /// Scan from the opening quote through the closing quote.
    ///
    /// A backslash makes the following character ordinary, so `\"` does not
    /// close the string. Both characters of every escape are kept as-is.
    fn string(&mut self) -> Result<JsonToken, ScanError> {
        let start = self.cursor.index();
        let mut text = String::new();
        text.push(self.cursor.current()); // opening '"'
        self.cursor.advance();
        while !is_quote(self.cursor.current()) {
            if self.cursor.is_eof() {
                return Err(self.cursor.error_kind(ScanErrorKind::UnterminatedString));
            }
            if self.cursor.current() == '\\' {
                text.push('\\');
                self.cursor.advance();
            }
            text.push(self.cursor.current());
            self.cursor.advance();
        }
        text.push(self.cursor.current()); // closing '"'
        self.cursor.advance();
        Ok(JsonToken::String(Lexeme::new(text, start)))
    }

    // ─── Numbers ───────────────────────────────────────────────────────

    /// Scan a run of digits and `.` after a leading digit or `-`.
    ///
    /// Only a second `.` is rejected; shapes like `-`, `1.`, or `-.` are
    /// accepted as written.
    fn number(&mut self) -> Result<JsonToken, ScanError> {
        let start = self.cursor.index();
        let mut seen_decimal = self.cursor.current() == '.';
        let mut text = String::new();
        text.push(self.cursor.current());
        self.cursor.advance();
        while !self.cursor.is_eof() && is_number_continue(self.cursor.current()) {
            if self.cursor.current() == '.' {
                if seen_decimal {
                    return Err(self.cursor.error_kind(ScanErrorKind::MultipleDecimalPoints));
                }
                seen_decimal = true;
            }
            text.push(self.cursor.current());
            self.cursor.advance();
        }
        Ok(JsonToken::Number(Lexeme::new(text, start)))
    }

    // ─── Keywords ──────────────────────────────────────────────────────

    fn keyword(&mut self) -> JsonToken {
        let start = self.cursor.index();
        let mut text = String::new();
        text.push(self.cursor.current());
        self.cursor.advance();
        while !self.cursor.is_eof() && is_letter(self.cursor.current()) {
            text.push(self.cursor.current());
            self.cursor.advance();
        }
        JsonToken::Keyword(Lexeme::new(text, start))
    }

    // ─── Invalid ───────────────────────────────────────────────────────

    fn invalid(&mut self) -> JsonToken {
        let start = self.cursor.index();
        let ch = self.cursor.current();
        self.cursor.advance();
        JsonToken::Invalid { ch, start }
    }
}

#[inline]
fn is_number_continue(c: char) -> bool {
    is_digit(c) || c == '.'
}

impl TokenSource for JsonScanner {
    type Token = JsonToken;

    fn read_token(&mut self) -> Result<JsonToken, ScanError> {
        let result = self.scan_token();
        match &result {
            Ok(token) => trace!(kind = %token.kind(), span = ?token.span(), "scanned token"),
            Err(err) => debug!(
                index = err.position.index,
                line = err.position.line,
                column = err.position.column,
                error = %err.kind,
                "scan failed"
            ),
        }
        result
    }

    fn is_end_token(token: &JsonToken) -> bool {
        token.is_eof()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
