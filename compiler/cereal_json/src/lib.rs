//! Scanner for cereal's JSON-like grammar.
//!
//! Turns source text into a flat sequence of [`JsonToken`]s: six structural
//! punctuation tokens, numbers, strings, keywords, invalid characters, and a
//! terminating [`JsonToken::Eof`]. Nesting, escapes, and literal values are
//! not interpreted here.
//!
//! ```
//! use cereal_json::{tokenize, JsonToken};
//!
//! let tokens = tokenize(r#"{"key": 123}"#).unwrap();
//! assert_eq!(tokens[0], JsonToken::LeftBrace { start: 0 });
//! assert_eq!(tokens[1], JsonToken::string(r#""key""#, 1));
//! assert_eq!(tokens[3], JsonToken::number("123", 8));
//! assert_eq!(tokens.last(), Some(&JsonToken::Eof));
//! ```

mod scanner;
mod token;

pub use cereal_lexer_core::{Position, ScanError, ScanErrorKind, Span};
pub use scanner::{JsonScanner, JsonTokenStream};
pub use token::{JsonToken, Lexeme, TokenKind};

/// Create a token stream positioned at the start of `source`.
pub fn token_stream(source: &str) -> JsonTokenStream {
    JsonTokenStream::new(JsonScanner::new(source))
}

/// Scan all of `source`, ending with [`JsonToken::Eof`].
///
/// Fails on the first scan error; tokens read before it are discarded.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Result<Vec<JsonToken>, ScanError> {
    token_stream(source).drain_to_vec()
}
