//! Token reading and recognition for the lexer.

use super::Lexer;
use super::error::LexError;
use crate::token::{Span, Token, TokenKind};

/// RPAL's reserved words. An identifier lexeme matching one
/// of these becomes a `Keyword` token instead of an `Identifier`.
const KEYWORDS: &[&str] = &[
    "let", "in", "fn", "where", "aug", "or", "not", "gr", "ge", "ls", "le", "eq", "ne", "true",
    "false", "nil", "dummy", "within", "and", "rec",
];

/// The operator-symbol character set.
const OPERATOR_CHARS: &str = "+-*<>&.@/:=~|$!#%^_[]{}\"`?";

/// The punctuation character set.
const PUNCTUATION_CHARS: &str = "();,";

fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(c)
}

fn is_punctuation_char(c: char) -> bool {
    PUNCTUATION_CHARS.contains(c)
}

impl<'a> Lexer<'a> {
    /// Reads and returns the next token from the input.
    ///
    /// Assumes whitespace and comments have already been skipped and the
    /// input is not at end-of-file. Longest-match applies within whichever
    /// token class the leading character selects.
    pub(super) fn next_token(&mut self) -> Result<Token, LexError> {
        let c = self
            .current_char()
            .expect("next_token called at end of input");
        let start = self.pos;
        let start_line = self.line;

        if c == '\'' {
            return self.read_string(start, start_line);
        }
        if c.is_ascii_digit() {
            return Ok(self.read_integer(start, start_line));
        }
        if c.is_ascii_alphabetic() {
            return Ok(self.read_identifier_or_keyword(start, start_line));
        }
        if is_punctuation_char(c) {
            self.advance();
            let span = Span::new(start, self.pos, start_line);
            return Ok(Token::new(TokenKind::Punctuation(c.to_string()), span));
        }
        if is_operator_char(c) {
            return Ok(self.read_operator(start, start_line));
        }

        let span = Span::new(start, self.pos + c.len_utf8(), start_line);
        Err(LexError::unexpected_character(c, span))
    }

    /// Reads an identifier or keyword: a letter followed by letters,
    /// digits, or underscores.
    fn read_identifier_or_keyword(&mut self, start: usize, start_line: usize) -> Token {
        while let Some(c) = self.current_char() {
            if c.is_ascii_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }
        let lexeme = self.input[start..self.pos].to_string();
        let span = Span::new(start, self.pos, start_line);
        let kind = if KEYWORDS.contains(&lexeme.as_str()) {
            TokenKind::Keyword(lexeme)
        } else {
            TokenKind::Identifier(lexeme)
        };
        Token::new(kind, span)
    }

    /// Reads an integer literal: one or more decimal digits.
    fn read_integer(&mut self, start: usize, start_line: usize) -> Token {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        let lexeme = self.input[start..self.pos].to_string();
        let span = Span::new(start, self.pos, start_line);
        Token::new(TokenKind::Integer(lexeme), span)
    }

    /// Reads a maximal run of operator-symbol characters.
    fn read_operator(&mut self, start: usize, start_line: usize) -> Token {
        while self.current_char().is_some_and(is_operator_char) {
            self.advance();
        }
        let lexeme = self.input[start..self.pos].to_string();
        let span = Span::new(start, self.pos, start_line);
        Token::new(TokenKind::Operator(lexeme), span)
    }

    /// Reads a single-quoted string literal, processing the escapes `\t`,
    /// `\n`, `\\`, `\'` and accepting spaces, tabs, letters, digits, and
    /// operator-symbol characters verbatim inside the quotes.
    fn read_string(&mut self, start: usize, start_line: usize) -> Result<Token, LexError> {
        self.advance(); // opening quote
        let mut value = String::new();

        loop {
            match self.current_char() {
                Some('\'') => {
                    self.advance();
                    let span = Span::new(start, self.pos, start_line);
                    return Ok(Token::new(TokenKind::StringLiteral(value), span));
                }
                Some('\\') => {
                    let escape_start = self.pos;
                    self.advance();
                    match self.current_char() {
                        Some('t') => {
                            value.push('\t');
                            self.advance();
                        }
                        Some('n') => {
                            value.push('\n');
                            self.advance();
                        }
                        Some('\\') => {
                            value.push('\\');
                            self.advance();
                        }
                        Some('\'') => {
                            value.push('\'');
                            self.advance();
                        }
                        Some(other) => {
                            let span = Span::new(escape_start, self.pos + other.len_utf8(), self.line);
                            return Err(LexError::unknown_escape(other, span));
                        }
                        None => {
                            let span = Span::new(start, self.pos, start_line);
                            return Err(LexError::unterminated_string(span));
                        }
                    }
                }
                Some(c) if c == ' ' || c == '\t' || c.is_ascii_alphanumeric() || is_operator_char(c) || is_punctuation_char(c) => {
                    value.push(c);
                    self.advance();
                }
                Some(c) => {
                    let span = Span::new(self.pos, self.pos + c.len_utf8(), self.line);
                    return Err(LexError::unexpected_character(c, span));
                }
                None => {
                    let span = Span::new(start, self.pos, start_line);
                    return Err(LexError::unterminated_string(span));
                }
            }
        }
    }
}
