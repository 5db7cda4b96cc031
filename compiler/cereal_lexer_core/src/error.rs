//! Positioned scanning errors.

use crate::Position;

/// A scan failure annotated with where the cursor stood when it happened.
///
/// The `Display` form always embeds the character index, e.g.
/// `error at index 4: number has two decimal points`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("error at index {}: {}", .position.index, .kind)]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub position: Position,
}

impl ScanError {
    pub fn new(kind: ScanErrorKind, position: Position) -> Self {
        ScanError { kind, position }
    }

    /// Character index of the failure.
    #[inline]
    pub fn index(&self) -> usize {
        self.position.index
    }
}

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ScanErrorKind {
    /// End of input reached inside a string, before the closing quote.
    #[error("unterminated string")]
    UnterminatedString,
    /// A second `.` inside one numeric literal.
    #[error("number has two decimal points")]
    MultipleDecimalPoints,
    /// Advance-and-read past the last character.
    #[error("end of input reached")]
    EndOfInput,
    /// Free-form message raised through [`Cursor::error`](crate::Cursor::error).
    #[error("{0}")]
    Custom(String),
}
