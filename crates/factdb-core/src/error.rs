//! Error handling for the factdb converter
//!
//! Every failure is fatal for the run: the converter stops at the first bad
//! line and writes nothing. The variants carry enough context (line number,
//! predicate, offending index) to find the problem in the source file.

use factdb_types::ParseError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for conversion runs
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input fact file could not be opened
    #[error("cannot open fact file {}: {source}", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line could not be split into predicate and arguments
    #[error("malformed fact on line {line_number}: {source}")]
    MalformedLine {
        line_number: usize,
        #[source]
        source: ParseError,
    },

    /// A category reads an argument position the fact does not have
    #[error(
        "fact `{predicate}` on line {line_number} has {arity} arguments but category `{category}` reads index {index}"
    )]
    ArgumentIndex {
        line_number: usize,
        predicate: String,
        category: String,
        index: usize,
        arity: usize,
    },

    /// Table configuration is unreadable or inconsistent
    #[error("configuration error: {message}")]
    Config { message: String, setting: Option<String> },

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ConvertError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            ConvertError::MissingFile { .. } => "missing_file",
            ConvertError::MalformedLine { .. } => "malformed_line",
            ConvertError::ArgumentIndex { .. } => "argument_index",
            ConvertError::Config { .. } => "configuration",
            ConvertError::Io(_) => "io",
        }
    }

    /// Line of the input the error refers to, if any
    pub fn line_number(&self) -> Option<usize> {
        match self {
            ConvertError::MalformedLine { line_number, .. }
            | ConvertError::ArgumentIndex { line_number, .. } => Some(*line_number),
            _ => None,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into(), setting: None }
    }

    /// Create a configuration error about a specific table entry
    pub fn config_setting(setting: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config { message: message.into(), setting: Some(setting.into()) }
    }
}

/// Result type alias for converter operations
pub type ConvertResult<T> = Result<T, ConvertError>;
