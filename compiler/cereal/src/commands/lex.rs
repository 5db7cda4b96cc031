//! `lex` and `demo`: tokenize a document and print the token list.

use std::fmt::Write as _;

use cereal_json::{tokenize, JsonToken};

use super::{read_input, CliError};
use crate::options::{LexOptions, OutputFormat};

/// Document tokenized by `cereal demo`.
pub const DEMO_INPUT: &str = r#"{"name": "Alice", "age": 30}"#;

/// Tokenize the configured input and render the token list.
#[tracing::instrument(level = "debug", skip_all, fields(format = ?options.format))]
pub fn lex(options: &LexOptions) -> Result<String, CliError> {
    let name = options.input.display_name();
    let text = read_input(&options.input)?;
    let tokens = match tokenize(&text) {
        Ok(tokens) => tokens,
        Err(error) => return Err(CliError::Scan { name, text, error }),
    };
    tracing::debug!(count = tokens.len(), "tokenized input");
    render_tokens(&name, &tokens, options.format)
}

/// Tokenize [`DEMO_INPUT`] and print it the way the sample program does:
/// the input, then one token per line.
pub fn demo() -> Result<String, CliError> {
    let tokens = tokenize(DEMO_INPUT).map_err(|error| CliError::Scan {
        name: "<demo>".to_string(),
        text: DEMO_INPUT.to_string(),
        error,
    })?;

    let mut out = String::new();
    let _ = writeln!(out, "Input: {DEMO_INPUT}");
    let _ = writeln!(out, "Tokens:");
    for token in &tokens {
        let _ = writeln!(out, "  {token}");
    }
    Ok(out)
}

/// Format a token list, including its trailing EOF.
pub fn render_tokens(
    name: &str,
    tokens: &[JsonToken],
    format: OutputFormat,
) -> Result<String, CliError> {
    let mut out = String::new();
    match format {
        OutputFormat::Display => {
            let _ = writeln!(out, "Tokens for '{name}' ({} tokens):", tokens.len());
            for token in tokens {
                let _ = writeln!(out, "  {token}");
            }
        }
        OutputFormat::Debug => {
            let _ = writeln!(out, "Tokens for '{name}' ({} tokens):", tokens.len());
            for token in tokens {
                match token.span() {
                    Some(span) => {
                        let _ = writeln!(out, "  {token:?} @ {span}");
                    }
                    None => {
                        let _ = writeln!(out, "  {token:?}");
                    }
                }
            }
        }
        OutputFormat::Json => {
            out = serde_json::to_string_pretty(tokens)?;
            out.push('\n');
        }
    }
    Ok(out)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
