use chumsky::error::Rich;

use super::MAX_NESTING_DEPTH;
#[cfg(doc)]
use super::scan;

/// The error produced by [`scan`] when an expression is not well-formed.
///
/// Scanning has no side effects, so a failed scan never leaves anything behind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("failed to parse expression at line {line}, column {column} {span:?}: {reason}")]
pub struct ParseError {
    span: (usize, usize),
    line: usize,
    column: usize,
    reason: String,
}

impl ParseError {
    /// Create an error from the first failure reported by the parser.
    pub(super) fn from_rich(source: &str, error: &Rich<'_, char>) -> ParseError {
        let span = error.span();
        let (line, column) = line_and_column(source, span.start);

        ParseError {
            span: (span.start, span.end),
            line,
            column,
            reason: error.to_string(),
        }
    }

    /// The parenthesis at `offset` opens an operand list past [`MAX_NESTING_DEPTH`].
    pub(super) fn too_deep(source: &str, offset: usize) -> ParseError {
        let (line, column) = line_and_column(source, offset);

        ParseError {
            span: (offset, offset + 1),
            line,
            column,
            reason: format!("operands nest deeper than {MAX_NESTING_DEPTH} levels"),
        }
    }

    /// Used when the parser fails without reporting why, which chumsky does not do in practice.
    pub(super) fn unknown(source: &str) -> ParseError {
        let (line, column) = line_and_column(source, source.len());

        ParseError {
            span: (source.len(), source.len()),
            line,
            column,
            reason: "malformed expression".to_owned(),
        }
    }

    /// The byte offset at which the failure starts.
    pub fn position(&self) -> usize {
        self.span.0
    }

    /// The byte range `[start, end)` of the offending input.
    pub fn span(&self) -> (usize, usize) {
        self.span
    }

    /// The 1-based line of [`ParseError::position`].
    pub fn line(&self) -> usize {
        self.line
    }

    /// The 1-based column (in characters) of [`ParseError::position`].
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

fn line_and_column(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let before = source.get(..offset).unwrap_or(source);

    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|idx| idx + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() + 1;

    (line, column)
}
