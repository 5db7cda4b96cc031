//! Options for the `lex` command, parsed from raw arguments.

use std::path::PathBuf;

/// How the token list is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Rust `Debug` form of each token, with its span.
    Debug,
    /// One `Display` line per token, e.g. `LeftBrace(startIndex=0)`.
    #[default]
    Display,
    /// A JSON array of serialized tokens.
    Json,
}

impl OutputFormat {
    /// Parse from a command-line value.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "debug" => Some(Self::Debug),
            "display" => Some(Self::Display),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Where the document to tokenize comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    /// `-` on the command line.
    Stdin,
    /// Text given directly with `--input`.
    Inline(String),
}

impl InputSource {
    /// Name used in headers and diagnostics.
    pub fn display_name(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::Inline(_) => "<input>".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexOptions {
    pub format: OutputFormat,
    pub input: InputSource,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("unknown format '{0}', options: debug, display, json")]
    UnknownFormat(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("'{0}' requires a value")]
    MissingValue(&'static str),
    #[error("missing input: pass a file path, '-' for stdin, or --input <text>")]
    MissingInput,
    #[error("more than one input given")]
    MultipleInputs,
}

/// Parse the arguments that follow `lex`.
///
/// Accepts `--format=<fmt>` or `--format <fmt>`, `--input <text>` or
/// `--input=<text>`, `-` for stdin, and a single file path.
pub fn parse_lex_args(args: &[String]) -> Result<LexOptions, OptionsError> {
    let mut format = OutputFormat::default();
    let mut input = None;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if let Some(value) = arg.strip_prefix("--format=") {
            format = parse_format(value)?;
        } else if arg == "--format" {
            i += 1;
            let value = args.get(i).ok_or(OptionsError::MissingValue("--format"))?;
            format = parse_format(value)?;
        } else if let Some(text) = arg.strip_prefix("--input=") {
            set_input(&mut input, InputSource::Inline(text.to_string()))?;
        } else if arg == "--input" {
            i += 1;
            let text = args.get(i).ok_or(OptionsError::MissingValue("--input"))?;
            set_input(&mut input, InputSource::Inline(text.clone()))?;
        } else if arg == "-" {
            set_input(&mut input, InputSource::Stdin)?;
        } else if arg.starts_with('-') {
            return Err(OptionsError::UnknownOption(arg.to_string()));
        } else {
            set_input(&mut input, InputSource::File(PathBuf::from(arg)))?;
        }
        i += 1;
    }

    let input = input.ok_or(OptionsError::MissingInput)?;
    Ok(LexOptions { format, input })
}

fn parse_format(value: &str) -> Result<OutputFormat, OptionsError> {
    OutputFormat::parse(value).ok_or_else(|| OptionsError::UnknownFormat(value.to_string()))
}

fn set_input(slot: &mut Option<InputSource>, input: InputSource) -> Result<(), OptionsError> {
    if slot.is_some() {
        return Err(OptionsError::MultipleInputs);
    }
    *slot = Some(input);
    Ok(())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
