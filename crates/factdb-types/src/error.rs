use thiserror::Error;

/// Errors raised while splitting a single fact line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line has no `(` separating the predicate from its arguments
    #[error("expected `predicate(args...)`, found no '(' in `{line}`")]
    MissingParen {
        /// The offending line, with surrounding whitespace removed
        line: String,
    },
}

impl ParseError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            ParseError::MissingParen { .. } => "missing_paren",
        }
    }
}
