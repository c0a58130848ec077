//! Normalization error type.

use crate::token::Span;

/// An error raised when the AST has a shape no rewrite rule covers (e.g. a
/// `rec` wrapping something other than a single binding).
///
/// Normalization works over already-parsed trees, so most malformed shapes
/// are syntax errors the parser would already have rejected; the cases
/// that remain here are structural invariants internal to the rewrite
/// rules themselves, which is why a span is not always available.
#[derive(Debug)]
pub struct NormalizationError {
    pub message: String,
    pub span: Option<Span>,
}

impl NormalizationError {
    pub(super) fn new(message: impl Into<String>) -> Self {
        NormalizationError {
            message: message.into(),
            span: None,
        }
    }
}

impl std::fmt::Display for NormalizationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for NormalizationError {}
