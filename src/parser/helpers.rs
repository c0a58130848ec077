//! Token navigation and basic parsing operations.

use super::Parser;
use super::error::ParseError;
use crate::token::{Span, Token, TokenKind};

impl Parser {
    /// A user-friendly description of a token, for error messages.
    pub(super) fn describe(kind: &TokenKind) -> String {
        match kind {
            TokenKind::Identifier(s) => format!("identifier '{}'", s),
            TokenKind::Integer(s) => format!("integer '{}'", s),
            TokenKind::StringLiteral(s) => format!("string '{}'", s),
            TokenKind::Operator(s) => format!("'{}'", s),
            TokenKind::Punctuation(s) => format!("'{}'", s),
            TokenKind::Keyword(s) => format!("'{}'", s),
            TokenKind::EndOfTokens => "end of input".to_string(),
        }
    }

    pub(super) fn current(&self) -> &Token {
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    pub(super) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    pub(super) fn current_span(&self) -> Span {
        self.current().span
    }

    pub(super) fn is_eof(&self) -> bool {
        matches!(self.current_kind(), TokenKind::EndOfTokens)
    }

    pub(super) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    pub(super) fn is_keyword(&self, word: &str) -> bool {
        matches!(self.current_kind(), TokenKind::Keyword(k) if k == word)
    }

    pub(super) fn is_operator(&self, op: &str) -> bool {
        matches!(self.current_kind(), TokenKind::Operator(o) if o == op)
    }

    pub(super) fn is_punctuation(&self, p: &str) -> bool {
        matches!(self.current_kind(), TokenKind::Punctuation(c) if c == p)
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        ParseError {
            message: format!(
                "expected {}, found {}",
                expected,
                Self::describe(self.current_kind())
            ),
            span: self.current_span(),
        }
    }

    pub(super) fn expect_keyword(&mut self, word: &str) -> Result<(), ParseError> {
        if self.is_keyword(word) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{}'", word)))
        }
    }

    pub(super) fn expect_operator(&mut self, op: &str) -> Result<(), ParseError> {
        if self.is_operator(op) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{}'", op)))
        }
    }

    pub(super) fn expect_punctuation(&mut self, p: &str) -> Result<(), ParseError> {
        if self.is_punctuation(p) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{}'", p)))
        }
    }

    pub(super) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if let TokenKind::Identifier(name) = self.current_kind() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            self.unexpected_err("an identifier")
        }
    }

    fn unexpected_err<T>(&self, expected: &str) -> Result<T, ParseError> {
        Err(self.unexpected(expected))
    }

    /// True if the current token can start an `Rn` (an identifier, integer,
    /// string, `true`/`false`/`nil`/`dummy`, or `(`), used by the `R`
    /// production to decide whether juxtaposition continues.
    pub(super) fn starts_rn(&self) -> bool {
        match self.current_kind() {
            TokenKind::Identifier(_) | TokenKind::Integer(_) | TokenKind::StringLiteral(_) => true,
            TokenKind::Keyword(k) => matches!(k.as_str(), "true" | "false" | "nil" | "dummy"),
            TokenKind::Punctuation(p) => p == "(",
            _ => false,
        }
    }

    /// True if the current token can start a `Vb` (an identifier, or `(`
    /// opening an empty tuple or a parenthesized variable list).
    pub(super) fn starts_vb(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Identifier(_)) || self.is_punctuation("(")
    }
}
