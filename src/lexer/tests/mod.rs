//! Lexer unit tests, grouped by token class.

mod errors;
mod identifiers_keywords;
mod integers;
mod whitespace;

use super::Lexer;
use crate::token::TokenKind;

/// Tokenizes `src` and strips the trailing `EndOfTokens` marker, returning
/// just the kinds for assertion convenience.
pub(super) fn kinds(src: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(src);
    let mut tokens = lexer.tokenize().expect("lexer should succeed");
    assert!(matches!(tokens.pop().unwrap().kind, TokenKind::EndOfTokens));
    tokens.into_iter().map(|t| t.kind).collect()
}
