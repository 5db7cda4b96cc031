//! Token model for the JSON-like grammar.
//!
//! [`JsonToken`] is a closed set of variants. Structural punctuation carries
//! only its start offset (length is always 1); numbers, strings, and
//! keywords carry a [`Lexeme`] with the exact source text; [`JsonToken::Eof`]
//! is a payload-free sentinel.

use std::borrow::Cow;
use std::fmt;

use cereal_lexer_core::Span;

/// Payload-free token classification.
///
/// Discriminants group the kinds: structural `0..16`, payload `16..32`,
/// error `240`, control `255`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum TokenKind {
    LeftBrace = 0,
    RightBrace = 1,
    LeftBracket = 2,
    RightBracket = 3,
    Comma = 4,
    Colon = 5,

    Number = 16,
    String = 17,
    Keyword = 18,

    Invalid = 240,

    Eof = 255,
}

impl TokenKind {
    /// Fixed source text for structural kinds, `None` for the rest.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::LeftBrace => Some("{"),
            TokenKind::RightBrace => Some("}"),
            TokenKind::LeftBracket => Some("["),
            TokenKind::RightBracket => Some("]"),
            TokenKind::Comma => Some(","),
            TokenKind::Colon => Some(":"),
            TokenKind::Number
            | TokenKind::String
            | TokenKind::Keyword
            | TokenKind::Invalid
            | TokenKind::Eof => None,
        }
    }

    /// Human-readable description for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::LeftBrace => "`{`",
            TokenKind::RightBrace => "`}`",
            TokenKind::LeftBracket => "`[`",
            TokenKind::RightBracket => "`]`",
            TokenKind::Comma => "`,`",
            TokenKind::Colon => "`:`",
            TokenKind::Number => "number literal",
            TokenKind::String => "string literal",
            TokenKind::Keyword => "keyword",
            TokenKind::Invalid => "invalid character",
            TokenKind::Eof => "end of file",
        }
    }

    /// Variant name as it appears in a token's `Display` output.
    pub const fn label(self) -> &'static str {
        match self {
            TokenKind::LeftBrace => "LeftBrace",
            TokenKind::RightBrace => "RightBrace",
            TokenKind::LeftBracket => "LeftBracket",
            TokenKind::RightBracket => "RightBracket",
            TokenKind::Comma => "Comma",
            TokenKind::Colon => "Colon",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Keyword => "Keyword",
            TokenKind::Invalid => "Invalid",
            TokenKind::Eof => "EOF",
        }
    }

    /// Single-character punctuation.
    pub const fn is_structural(self) -> bool {
        (self as u8) < 16
    }

    /// Number, string, or keyword.
    pub const fn has_payload(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::String | TokenKind::Keyword)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Source text captured verbatim by a payload-carrying token.
///
/// `len` is the character count of `text`, so a lexeme always describes the
/// span `[start, start + len)` of the source it was scanned from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Lexeme {
    text: String,
    start: usize,
    len: usize,
}

impl Lexeme {
    pub fn new(text: impl Into<String>, start: usize) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Lexeme { text, start, len }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Length in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.start, self.len)
    }
}

/// One lexical unit of the JSON-like grammar.
///
/// Equality compares the variant, the start offset, and (for payload
/// tokens) the length and captured text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(tag = "kind"))]
pub enum JsonToken {
    /// `{`
    LeftBrace { start: usize },
    /// `}`
    RightBrace { start: usize },
    /// `[`
    LeftBracket { start: usize },
    /// `]`
    RightBracket { start: usize },
    /// `,`
    Comma { start: usize },
    /// `:`
    Colon { start: usize },
    /// A run starting with a digit or `-`, including any sign and `.`.
    Number(Lexeme),
    /// A quoted string, quotes and backslash escapes included.
    String(Lexeme),
    /// A run of ASCII letters. Not checked against `true`/`false`/`null`.
    Keyword(Lexeme),
    /// A character that starts no other token.
    Invalid { ch: char, start: usize },
    /// End of input. Reports `-1` for both start and length.
    Eof,
}

impl JsonToken {
    pub fn number(text: impl Into<String>, start: usize) -> Self {
        JsonToken::Number(Lexeme::new(text, start))
    }

    pub fn string(text: impl Into<String>, start: usize) -> Self {
        JsonToken::String(Lexeme::new(text, start))
    }

    pub fn keyword(text: impl Into<String>, start: usize) -> Self {
        JsonToken::Keyword(Lexeme::new(text, start))
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            JsonToken::LeftBrace { .. } => TokenKind::LeftBrace,
            JsonToken::RightBrace { .. } => TokenKind::RightBrace,
            JsonToken::LeftBracket { .. } => TokenKind::LeftBracket,
            JsonToken::RightBracket { .. } => TokenKind::RightBracket,
            JsonToken::Comma { .. } => TokenKind::Comma,
            JsonToken::Colon { .. } => TokenKind::Colon,
            JsonToken::Number(_) => TokenKind::Number,
            JsonToken::String(_) => TokenKind::String,
            JsonToken::Keyword(_) => TokenKind::Keyword,
            JsonToken::Invalid { .. } => TokenKind::Invalid,
            JsonToken::Eof => TokenKind::Eof,
        }
    }

    /// Source span, or `None` for [`JsonToken::Eof`].
    pub fn span(&self) -> Option<Span> {
        match self {
            JsonToken::LeftBrace { start }
            | JsonToken::RightBrace { start }
            | JsonToken::LeftBracket { start }
            | JsonToken::RightBracket { start }
            | JsonToken::Comma { start }
            | JsonToken::Colon { start }
            | JsonToken::Invalid { start, .. } => Some(Span::new(*start, 1)),
            JsonToken::Number(lexeme) | JsonToken::String(lexeme) | JsonToken::Keyword(lexeme) => {
                Some(lexeme.span())
            }
            JsonToken::Eof => None,
        }
    }

    /// Offset of the first character; `-1` for [`JsonToken::Eof`].
    pub fn start_index(&self) -> isize {
        self.span().map_or(-1, |span| to_signed(span.start))
    }

    /// Length in characters; `-1` for [`JsonToken::Eof`].
    pub fn length(&self) -> isize {
        self.span().map_or(-1, |span| to_signed(span.len))
    }

    /// Captured payload for numbers, strings, and keywords.
    pub fn lexeme(&self) -> Option<&Lexeme> {
        match self {
            JsonToken::Number(lexeme) | JsonToken::String(lexeme) | JsonToken::Keyword(lexeme) => {
                Some(lexeme)
            }
            _ => None,
        }
    }

    /// Source text this token was scanned from. Empty for EOF.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            JsonToken::Number(lexeme) | JsonToken::String(lexeme) | JsonToken::Keyword(lexeme) => {
                Cow::Borrowed(lexeme.text())
            }
            JsonToken::Invalid { ch, .. } => Cow::Owned(ch.to_string()),
            other => Cow::Borrowed(other.kind().lexeme().unwrap_or("")),
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, JsonToken::Eof)
    }

    #[inline]
    pub fn is_structural(&self) -> bool {
        self.kind().is_structural()
    }
}

impl fmt::Display for JsonToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.kind().label();
        match self {
            JsonToken::Number(lexeme) | JsonToken::String(lexeme) | JsonToken::Keyword(lexeme) => {
                write!(
                    f,
                    "{label}(value={}, startIndex={}, length={})",
                    lexeme.text, lexeme.start, lexeme.len
                )
            }
            JsonToken::Invalid { ch, start } => {
                write!(f, "{label}(char={ch}, startIndex={start})")
            }
            JsonToken::Eof => f.write_str(label),
            JsonToken::LeftBrace { start }
            | JsonToken::RightBrace { start }
            | JsonToken::LeftBracket { start }
            | JsonToken::RightBracket { start }
            | JsonToken::Comma { start }
            | JsonToken::Colon { start } => write!(f, "{label}(startIndex={start})"),
        }
    }
}

fn to_signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}
