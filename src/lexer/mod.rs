//! Lexical analyzer for RPAL.
//!
//! [`Lexer`] converts RPAL source text into a stream of [`Token`]s
//! terminated by [`TokenKind::EndOfTokens`], failing with a [`LexError`]
//! on the first unrecognized character or unterminated string.
//!
//! # Module Structure
//!
//! - [`error`] - Error type for lexical analysis
//! - `cursor` - Position tracking and character navigation
//! - `skip` - Whitespace and comment handling
//! - `tokens` - Token recognition and reading
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod error;
mod skip;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::LexError;

use crate::token::{Span, Token, TokenKind};

/// A single-pass, non-backtracking lexer over an RPAL source string.
pub struct Lexer<'a> {
    pub(super) input: &'a str,
    pub(super) pos: usize,
    pub(super) line: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given source text.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
        }
    }

    /// Tokenizes the entire input, returning a vector ending with
    /// [`TokenKind::EndOfTokens`].
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] on the first unrecognized character or
    /// unterminated string literal.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_trivia();

            if self.is_eof() {
                let span = Span::new(self.pos, self.pos, self.line);
                tokens.push(Token::new(TokenKind::EndOfTokens, span));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }
}
