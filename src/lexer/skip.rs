//! Whitespace and comment skipping.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Skips spaces, tabs, and newlines, advancing the line counter on each
    /// newline.
    pub(super) fn skip_whitespace(&mut self) {
        while matches!(self.current_char(), Some(' ') | Some('\t') | Some('\n')) {
            self.advance();
        }
    }

    /// Skips a `//` line comment if one starts at the current position,
    /// consuming through end-of-line but not the newline itself.
    pub(super) fn skip_comment(&mut self) {
        if self.current_char() == Some('/') && self.peek_char(1) == Some('/') {
            while self.current_char().is_some() && self.current_char() != Some('\n') {
                self.advance();
            }
        }
    }

    /// Skips whitespace and comments in any order until neither applies.
    pub(super) fn skip_trivia(&mut self) {
        loop {
            let pos_before = self.pos;
            self.skip_whitespace();
            self.skip_comment();
            if self.pos == pos_before {
                break;
            }
        }
    }
}
