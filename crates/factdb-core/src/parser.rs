//! Fact line parser
//!
//! Splits `predicate('arg', 'arg', [list, ...]).` lines into a predicate and a
//! flat argument list. Arguments are split on `,` and stripped of quotes,
//! brackets, the closing parenthesis and the trailing period. There is no
//! escaping: a value containing one of those characters comes out mangled.

use crate::constants::syntax::{ARG_SEPARATOR, OPEN_PAREN, STRIP_CHARS};
use crate::error::{ConvertError, ConvertResult};
use factdb_types::{Fact, ParseError};
use std::io::{BufRead, Lines};
use tracing::debug;

/// Parse one fact line
pub fn parse_fact(line: &str) -> Result<Fact, ParseError> {
    let line = line.trim();
    let mut parts = line.split(OPEN_PAREN);
    let predicate = parts.next().unwrap_or_default();

    // Anything after a second '(' is dropped.
    let Some(arg_text) = parts.next() else {
        return Err(ParseError::MissingParen { line: line.to_string() });
    };

    let args = arg_text.split(ARG_SEPARATOR).map(clean_argument).map(str::to_owned).collect();

    Ok(Fact::new(predicate, args))
}

fn clean_argument(raw: &str) -> &str {
    raw.trim_matches(STRIP_CHARS)
}

/// Iterator over the facts of a line-oriented reader.
///
/// Yields `(line_number, fact)` with 1-based line numbers. A line without
/// `(`, blank lines included, ends the iteration with
/// [`ConvertError::MalformedLine`].
pub struct FactLines<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl<R: BufRead> FactLines<R> {
    pub fn new(reader: R) -> Self {
        Self { lines: reader.lines(), line_number: 0 }
    }

    /// Lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for FactLines<R> {
    type Item = ConvertResult<(usize, Fact)>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(ConvertError::Io(e))),
        };
        self.line_number += 1;
        let line_number = self.line_number;

        let parsed = parse_fact(&line).map(|fact| (line_number, fact)).map_err(|source| {
            debug!(line_number, "Malformed fact line");
            ConvertError::MalformedLine { line_number, source }
        });
        Some(parsed)
    }
}
