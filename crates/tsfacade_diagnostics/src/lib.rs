//! tsfacade_diagnostics: Error reporting infrastructure.
//!
//! The conversion itself cannot fail; everything here belongs to the edges
//! of the pipeline: reading inputs, decoding the declaration tree, and
//! loading project files. Errors implement [`miette::Diagnostic`] so the CLI
//! can point at the offending location in the input.

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the front end, the options loader, and the compiler.
#[derive(Debug, Error, Diagnostic)]
pub enum FacadeError {
    /// The declaration tree could not be decoded.
    #[error("failed to parse declaration tree `{file}`: {message}")]
    #[diagnostic(
        code(tsfacade::parse),
        help("the input must be a JSON declaration tree with a `statements` array")
    )]
    Parse {
        file: String,
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: SourceSpan,
    },

    /// A file could not be read or written.
    #[error("failed to access `{}`", .path.display())]
    #[diagnostic(code(tsfacade::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The project file is malformed or inconsistent.
    #[error("invalid project configuration `{}`: {message}", .path.display())]
    #[diagnostic(code(tsfacade::config))]
    Config { path: PathBuf, message: String },

    /// The command line asked for something that cannot be done.
    #[error("{0}")]
    #[diagnostic(code(tsfacade::usage))]
    Usage(String),

    #[error("no input files")]
    #[diagnostic(
        code(tsfacade::no_input),
        help("pass declaration trees on the command line or list them under `files` in the project file")
    )]
    NoInput,
}

impl FacadeError {
    /// Wrap a serde_json failure, locating it in `text`.
    pub fn parse(file: &str, text: &str, error: serde_json::Error) -> Self {
        let offset = line_col_to_offset(text, error.line(), error.column());
        let len = usize::from(offset < text.len());
        FacadeError::Parse {
            file: file.to_string(),
            message: error.to_string(),
            src: NamedSource::new(file, text.to_string()),
            span: (offset, len).into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FacadeError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        FacadeError::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Convert a 1-based line/column pair into a byte offset, clamped to the
/// text length. A column of 0 (serde_json's "end of line") maps to the
/// line start.
pub fn line_col_to_offset(text: &str, line: usize, column: usize) -> usize {
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(text.len())
}
