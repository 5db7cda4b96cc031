use super::*;
use pretty_assertions::assert_eq;

fn scan_all(source: &str) -> Vec<JsonToken> {
    let mut scanner = JsonScanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.scan_token().unwrap();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

fn scan_err(source: &str) -> ScanError {
    let mut scanner = JsonScanner::new(source);
    loop {
        match scanner.scan_token() {
            Ok(JsonToken::Eof) => panic!("expected a scan error for {source:?}"),
            Ok(_) => {}
            Err(err) => return err,
        }
    }
}

// === Punctuation ===

#[test]
fn structural_characters() {
    assert_eq!(
        scan_all("{}[],:"),
        vec![
            JsonToken::LeftBrace { start: 0 },
            JsonToken::RightBrace { start: 1 },
            JsonToken::LeftBracket { start: 2 },
            JsonToken::RightBracket { start: 3 },
            JsonToken::Comma { start: 4 },
            JsonToken::Colon { start: 5 },
            JsonToken::Eof,
        ]
    );
}

#[test]
fn empty_input_is_eof() {
    assert_eq!(scan_all(""), vec![JsonToken::Eof]);
}

#[test]
fn whitespace_only_is_eof() {
    assert_eq!(scan_all(" \t\r\n  "), vec![JsonToken::Eof]);
}

#[test]
fn eof_repeats() {
    let mut scanner = JsonScanner::new("1");
    assert_eq!(scanner.scan_token(), Ok(JsonToken::number("1", 0)));
    assert_eq!(scanner.scan_token(), Ok(JsonToken::Eof));
    assert_eq!(scanner.scan_token(), Ok(JsonToken::Eof));
}

// === Strings ===

#[test]
fn string_keeps_quotes() {
    assert_eq!(
        scan_all("\"key\""),
        vec![JsonToken::string("\"key\"", 0), JsonToken::Eof]
    );
}

#[test]
fn empty_string() {
    assert_eq!(
        scan_all("\"\""),
        vec![JsonToken::string("\"\"", 0), JsonToken::Eof]
    );
}

#[test]
fn escaped_quote_does_not_terminate() {
    let tokens = scan_all(r#""a\"b""#);
    assert_eq!(tokens[0], JsonToken::string(r#""a\"b""#, 0));
    assert_eq!(tokens[0].length(), 6);
}

#[test]
fn escapes_are_kept_verbatim() {
    let tokens = scan_all(r#""\né\\""#);
    assert_eq!(tokens[0].text(), r#""\né\\""#);
}

#[test]
fn string_may_span_lines() {
    let tokens = scan_all("\"a\nb\"");
    assert_eq!(tokens[0], JsonToken::string("\"a\nb\"", 0));
}

#[test]
fn unterminated_string_fails_at_end_of_input() {
    let err = scan_err("\"abc");
    assert_eq!(err.kind, ScanErrorKind::UnterminatedString);
    assert_eq!(err.index(), 4);
    assert_eq!(err.to_string(), "error at index 4: unterminated string");
}

#[test]
fn backslash_at_end_is_unterminated() {
    let err = scan_err("\"abc\\");
    assert_eq!(err.kind, ScanErrorKind::UnterminatedString);
    assert_eq!(err.index(), 5);
}

#[test]
fn escaped_closing_quote_is_unterminated() {
    let err = scan_err(r#"{"a\"}"#);
    assert_eq!(err.kind, ScanErrorKind::UnterminatedString);
}

#[test]
fn string_length_counts_chars() {
    let tokens = scan_all("\"\u{e9}\u{1F600}\" 1");
    assert_eq!(tokens[0].length(), 4);
    assert_eq!(tokens[1], JsonToken::number("1", 5));
}

// === Numbers ===

#[test]
fn integers_and_decimals() {
    assert_eq!(
        scan_all("0 42 3.14"),
        vec![
            JsonToken::number("0", 0),
            JsonToken::number("42", 2),
            JsonToken::number("3.14", 5),
            JsonToken::Eof,
        ]
    );
}

#[test]
fn negative_numbers() {
    assert_eq!(
        scan_all("-456 -2.71"),
        vec![
            JsonToken::number("-456", 0),
            JsonToken::number("-2.71", 5),
            JsonToken::Eof,
        ]
    );
}

#[test]
fn lone_minus_is_a_number() {
    assert_eq!(
        scan_all("-"),
        vec![JsonToken::number("-", 0), JsonToken::Eof]
    );
}

#[test]
fn trailing_decimal_point_is_accepted() {
    assert_eq!(
        scan_all("1."),
        vec![JsonToken::number("1.", 0), JsonToken::Eof]
    );
}

#[test]
fn minus_then_point_is_accepted() {
    assert_eq!(
        scan_all("-.5"),
        vec![JsonToken::number("-.5", 0), JsonToken::Eof]
    );
}

#[test]
fn number_stops_at_non_digit() {
    assert_eq!(
        scan_all("12e5"),
        vec![
            JsonToken::number("12", 0),
            JsonToken::keyword("e", 2),
            JsonToken::number("5", 3),
            JsonToken::Eof,
        ]
    );
}

#[test]
fn minus_inside_number_starts_a_new_one() {
    assert_eq!(
        scan_all("1-2"),
        vec![
            JsonToken::number("1", 0),
            JsonToken::number("-2", 1),
            JsonToken::Eof,
        ]
    );
}

#[test]
fn second_decimal_point_fails_at_that_point() {
    let err = scan_err("1.2.3");
    assert_eq!(err.kind, ScanErrorKind::MultipleDecimalPoints);
    assert_eq!(err.index(), 3);
    assert_eq!(
        err.to_string(),
        "error at index 3: number has two decimal points"
    );
}

#[test]
fn second_decimal_point_inside_array() {
    let err = scan_err("[1, 2..0]");
    assert_eq!(err.kind, ScanErrorKind::MultipleDecimalPoints);
    assert_eq!(err.index(), 6);
}

// === Keywords ===

#[test]
fn literal_keywords() {
    assert_eq!(
        scan_all("true false null"),
        vec![
            JsonToken::keyword("true", 0),
            JsonToken::keyword("false", 5),
            JsonToken::keyword("null", 11),
            JsonToken::Eof,
        ]
    );
}

#[test]
fn any_letter_run_is_a_keyword() {
    assert_eq!(
        scan_all("Nope"),
        vec![JsonToken::keyword("Nope", 0), JsonToken::Eof]
    );
}

#[test]
fn keyword_stops_at_digit() {
    assert_eq!(
        scan_all("abc123"),
        vec![
            JsonToken::keyword("abc", 0),
            JsonToken::number("123", 3),
            JsonToken::Eof,
        ]
    );
}

#[test]
fn non_ascii_letter_is_invalid() {
    assert_eq!(
        scan_all("\u{e9}"),
        vec![
            JsonToken::Invalid {
                ch: '\u{e9}',
                start: 0
            },
            JsonToken::Eof,
        ]
    );
}

// === Invalid ===

#[test]
fn unknown_characters_become_invalid_tokens() {
    assert_eq!(
        scan_all("[%]"),
        vec![
            JsonToken::LeftBracket { start: 0 },
            JsonToken::Invalid { ch: '%', start: 1 },
            JsonToken::RightBracket { start: 2 },
            JsonToken::Eof,
        ]
    );
}

#[test]
fn backslash_outside_string_is_invalid() {
    let tokens = scan_all(r#"\"x""#);
    assert_eq!(tokens[0], JsonToken::Invalid { ch: '\\', start: 0 });
    assert_eq!(tokens[1], JsonToken::string("\"x\"", 1));
}

#[test]
fn other_whitespace_is_invalid() {
    assert_eq!(
        scan_all("\u{0b}"),
        vec![
            JsonToken::Invalid {
                ch: '\u{0b}',
                start: 0
            },
            JsonToken::Eof,
        ]
    );
}

// === Cursor access ===

#[test]
fn cursor_tracks_lines_across_tokens() {
    let mut scanner = JsonScanner::new("{\n  \"a\"");
    scanner.scan_token().unwrap();
    scanner.scan_token().unwrap();
    assert_eq!(scanner.cursor().line(), 2);
    assert_eq!(scanner.cursor().column(), 5);
    assert!(scanner.cursor().is_eof());
}

#[test]
fn from_cursor_resumes_mid_source() {
    let mut cursor = Cursor::new("xx[1]");
    cursor.advance();
    cursor.advance();
    let mut scanner = JsonScanner::from_cursor(cursor);
    assert_eq!(
        scanner.scan_token(),
        Ok(JsonToken::LeftBracket { start: 2 })
    );
}

#[test]
fn reset_through_cursor_rescans() {
    let mut scanner = JsonScanner::new("[1]");
    scanner.scan_token().unwrap();
    scanner.cursor_mut().reset();
    assert_eq!(
        scanner.scan_token(),
        Ok(JsonToken::LeftBracket { start: 0 })
    );
    assert_eq!(scanner.into_cursor().index(), 1);
}

#[test]
fn end_token_is_eof() {
    assert!(JsonScanner::is_end_token(&JsonToken::Eof));
    assert!(!JsonScanner::is_end_token(&JsonToken::Comma { start: 0 }));
}

// === Property tests ===

mod proptest_scanner {
    use super::super::JsonScanner;
    use crate::JsonToken;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn never_panics(source in "\\PC{0,64}") {
            let mut scanner = JsonScanner::new(&source);
            for _ in 0..=source.chars().count() {
                match scanner.scan_token() {
                    Ok(JsonToken::Eof) | Err(_) => break,
                    Ok(_) => {}
                }
            }
        }

        #[test]
        fn spans_cover_source_text(source in "[ {}\\[\\],:a-z0-9\"%-]{0,48}") {
            let mut scanner = JsonScanner::new(&source);
            let chars: Vec<char> = source.chars().collect();
            let mut last_end = 0;
            loop {
                let Ok(token) = scanner.scan_token() else { break };
                let Some(span) = token.span() else { break };
                prop_assert!(span.start >= last_end);
                let text: String = chars[span.start..span.end()].iter().collect();
                prop_assert_eq!(text, token.text().into_owned());
                last_end = span.end();
            }
        }
    }
}
