//! Low-level scanning primitives shared by cereal's grammar scanners.
//!
//! The crate is split into three layers:
//!
//! - [`Cursor`]: a character-addressed reader over an owned source string,
//!   tracking index, line, and column.
//! - [`TokenStream`]: a grammar-agnostic sequencer that turns "read one
//!   token" into `next`/`peek`/drain semantics with a single-slot lookahead.
//! - [`TokenSource`]: the seam a concrete scanner implements to plug into
//!   the sequencer.
//!
//! All offsets are measured in `char`s (Unicode scalar values), never bytes.

mod char_class;
mod cursor;
mod error;
mod span;
mod stream;

pub use char_class::{is_digit, is_letter, is_quote, is_whitespace, EOF_CHAR};
pub use cursor::Cursor;
pub use error::{ScanError, ScanErrorKind};
pub use span::{Position, Span};
pub use stream::{TokenSource, TokenStream, Tokens};
