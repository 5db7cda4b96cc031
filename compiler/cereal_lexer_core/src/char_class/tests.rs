use super::*;

#[test]
fn whitespace_set_is_exactly_four_chars() {
    for c in [' ', '\t', '\n', '\r'] {
        assert!(is_whitespace(c), "{c:?} should be whitespace");
    }
    // Form feed and vertical tab are ASCII whitespace elsewhere, not here.
    for c in ['\x0C', '\x0B', '\u{A0}', 'a', EOF_CHAR] {
        assert!(!is_whitespace(c), "{c:?} should not be whitespace");
    }
}

#[test]
fn digits_are_ascii_only() {
    assert!(('0'..='9').all(is_digit));
    // Arabic-indic digit five
    assert!(!is_digit('\u{0665}'));
    assert!(!is_digit('-'));
    assert!(!is_digit('.'));
}

#[test]
fn letters_are_ascii_only() {
    assert!(('a'..='z').all(is_letter));
    assert!(('A'..='Z').all(is_letter));
    assert!(!is_letter('é'));
    assert!(!is_letter('_'));
    assert!(!is_letter('1'));
}

#[test]
fn quote_is_double_quote_only() {
    assert!(is_quote('"'));
    assert!(!is_quote('\''));
    assert!(!is_quote('`'));
}

#[test]
fn eof_char_classifies_as_nothing() {
    assert!(!is_whitespace(EOF_CHAR));
    assert!(!is_digit(EOF_CHAR));
    assert!(!is_letter(EOF_CHAR));
    assert!(!is_quote(EOF_CHAR));
}
