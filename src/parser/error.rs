//! Parse error type.

use crate::token::Span;

/// An error raised by the parser, naming the line, what was expected, and
/// what was found.
#[derive(Debug)]
pub struct ParseError {
    /// A human-readable description naming what was expected and what was
    /// found.
    pub message: String,
    /// The source location of the offending token.
    pub span: Span,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.span.line, self.message)
    }
}

impl std::error::Error for ParseError {}
