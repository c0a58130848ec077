//! Recursive-descent parser for RPAL.
//!
//! [`Parser`] consumes the token stream produced by [`crate::lexer`] and
//! produces an AST root ([`crate::tree::Tree`]), or fails with a
//! [`ParseError`] naming the first unexpected token. Implements the
//! 23-production RPAL grammar by recursive descent with single-token
//! lookahead; there is no error recovery.
//!
//! # Module Structure
//!
//! - [`error`] - Parse error type
//! - `helpers` - Token navigation, `expect_*`, lookahead predicates
//! - `expr` - Expression grammar levels `E` through `Rn`
//! - `decl` - Definition grammar levels `D` through `Vl`
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::lexer`] - Produces the token stream
//! * [`crate::tree`] - Defines the tree type this parser produces
//! * [`crate::normalizer`] - Rewrites the AST this parser produces into an ST

mod decl;
mod error;
mod expr;
mod helpers;

#[cfg(test)]
mod tests;

pub use error::ParseError;

use crate::token::Token;
use crate::tree::Tree;

/// A recursive-descent parser over an RPAL token stream.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a new parser from a token list produced by
    /// [`crate::lexer::Lexer::tokenize`].
    ///
    /// # Panics
    ///
    /// Panics if `tokens` is empty; the lexer always emits at least an
    /// `EndOfTokens` token.
    pub fn new(tokens: Vec<Token>) -> Self {
        assert!(!tokens.is_empty(), "token list must not be empty");
        Parser { tokens, pos: 0 }
    }

    /// Parses the entire token stream into an AST rooted at `E`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on the first unexpected token, or if
    /// tokens remain after a complete `E` has been parsed.
    pub fn parse(&mut self) -> Result<Tree, ParseError> {
        let tree = self.parse_e()?;
        if !self.is_eof() {
            return Err(ParseError {
                message: format!(
                    "expected end of input, found {}",
                    Self::describe(self.current_kind())
                ),
                span: self.current_span(),
            });
        }
        Ok(tree)
    }
}
