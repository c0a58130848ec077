//! Lexical analysis error types.

use crate::token::Span;

/// An error raised by the lexer.
#[derive(Debug)]
pub struct LexError {
    /// A human-readable description of the error.
    pub message: String,
    /// The source location where the error occurred.
    pub span: Span,
}

impl LexError {
    pub(super) fn unexpected_character(c: char, span: Span) -> Self {
        LexError {
            message: format!("unexpected character '{}'", c),
            span,
        }
    }

    pub(super) fn unterminated_string(span: Span) -> Self {
        LexError {
            message: "unterminated string literal".to_string(),
            span,
        }
    }

    pub(super) fn unknown_escape(c: char, span: Span) -> Self {
        LexError {
            message: format!("unknown escape sequence '\\{}'", c),
            span,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.span.line, self.message)
    }
}

impl std::error::Error for LexError {}
