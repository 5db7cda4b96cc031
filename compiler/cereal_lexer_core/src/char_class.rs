//! ASCII character classification.
//!
//! Only the ASCII ranges are recognized; a non-ASCII letter or digit is
//! neither a letter nor a digit here.

/// Character returned by [`Cursor::current`](crate::Cursor::current) once the
/// cursor has run off the end of the source.
pub const EOF_CHAR: char = '\0';

/// Space, tab, line feed, or carriage return.
#[inline]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// `0` through `9`.
#[inline]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// `a` through `z` or `A` through `Z`.
#[inline]
pub const fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// The double quote that opens and closes a string.
#[inline]
pub const fn is_quote(c: char) -> bool {
    c == '"'
}

#[cfg(test)]
mod tests;
