//! Command handlers for the cereal CLI.
//!
//! Each submodule implements one command. Input reading, the shared error
//! type, and diagnostic rendering live here in the module root.

use std::io::{ErrorKind, Read};
use std::ops::Range;
use std::path::PathBuf;

use ariadne::{Config, Label, Report, ReportKind, Source};
use cereal_json::ScanError;

use crate::options::{InputSource, OptionsError};

mod lex;

pub use lex::{demo, lex, render_tokens, DEMO_INPUT};

/// Failure of a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error("cannot find file '{}'", .0.display())]
    NotFound(PathBuf),
    #[error("permission denied reading '{}'", .0.display())]
    PermissionDenied(PathBuf),
    #[error("'{}' contains invalid UTF-8 data", .0.display())]
    InvalidUtf8(PathBuf),
    #[error("error reading '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("error reading standard input: {0}")]
    Stdin(#[source] std::io::Error),
    /// Scanning failed; keeps the input so the report can quote it.
    #[error("{name}: {error}")]
    Scan {
        name: String,
        text: String,
        error: ScanError,
    },
    #[error("cannot serialize tokens: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Text to print on stderr.
    ///
    /// Scan errors become an annotated excerpt of the input; everything
    /// else is a single `error:` line.
    pub fn render(&self, color: bool) -> String {
        match self {
            CliError::Scan { name, text, error } => render_scan_error(name, text, error, color),
            other => format!("error: {other}\n"),
        }
    }
}

/// Read the whole document named by `input`.
pub fn read_input(input: &InputSource) -> Result<String, CliError> {
    match input {
        InputSource::File(path) => std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CliError::NotFound(path.clone()),
            ErrorKind::PermissionDenied => CliError::PermissionDenied(path.clone()),
            ErrorKind::InvalidData => CliError::InvalidUtf8(path.clone()),
            _ => CliError::Read {
                path: path.clone(),
                source: e,
            },
        }),
        InputSource::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(CliError::Stdin)?;
            Ok(text)
        }
        InputSource::Inline(text) => Ok(text.clone()),
    }
}

/// Render a scan error as a source excerpt with the failing character
/// labelled.
///
/// Errors at end of input are pinned to the last character, since there
/// is nothing past it to point at.
pub fn render_scan_error(name: &str, text: &str, error: &ScanError, color: bool) -> String {
    let span = label_range(text.chars().count(), error.index());
    let report = Report::build(ReportKind::Error, name, span.start)
        .with_config(Config::default().with_color(color))
        .with_message(&error.kind)
        .with_label(Label::new((name, span)).with_message(error.to_string()))
        .with_note(format!(
            "at line {}, column {}",
            error.position.line, error.position.column
        ))
        .finish();

    let mut out = Vec::new();
    if report.write((name, Source::from(text)), &mut out).is_err() {
        return format!("error: {name}: {error}\n");
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn label_range(len: usize, index: usize) -> Range<usize> {
    let start = index.min(len.saturating_sub(1));
    start..(start + 1).min(len)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
