//! Token kinds for the RPAL lexer.

/// The kind of token recognized by the lexer.
///
/// `Identifier` and `Keyword` are kept as distinct variants rather than one
/// `Identifier` variant matched against a reserved-word set at every call
/// site: the lexer is the single place that decides reservedness, and every
/// later stage only ever needs to know which one it has.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// An identifier that is not one of RPAL's reserved words.
    Identifier(String),
    /// A decimal integer literal.
    Integer(String),
    /// A single-quoted string literal, already unescaped.
    StringLiteral(String),
    /// A maximal run of operator-symbol characters (`+ - * < > & . @ / : = ~ | $ ! # % ^ _ [ ] { } \" \` ?`).
    Operator(String),
    /// One of the punctuation characters `( ) ; ,`.
    Punctuation(String),
    /// One of RPAL's reserved words: `let in fn where aug or not gr ge ls le
    /// eq ne true false nil dummy within and rec`.
    Keyword(String),
    /// The sentinel token that terminates every token stream.
    EndOfTokens,
}

impl TokenKind {
    /// The exact source substring this token was lexed from, for use in
    /// diagnostics and in the parser's token-kind display strings. Returns
    /// `None` for the synthetic `EndOfTokens` marker.
    pub fn lexeme(&self) -> Option<&str> {
        match self {
            TokenKind::Identifier(s)
            | TokenKind::Integer(s)
            | TokenKind::StringLiteral(s)
            | TokenKind::Operator(s)
            | TokenKind::Punctuation(s)
            | TokenKind::Keyword(s) => Some(s),
            TokenKind::EndOfTokens => None,
        }
    }
}
