//! Parser unit tests, grouped by grammar area.

mod errors;

use super::Parser;
use crate::ast::print_tree;
use crate::lexer::Lexer;
use crate::tree::Tree;

/// Lexes and parses `src`, panicking on either failure.
pub(super) fn parse(src: &str) -> Tree {
    let mut lexer = Lexer::new(src);
    let tokens = lexer.tokenize().expect("lexer should succeed");
    let mut parser = Parser::new(tokens);
    parser.parse().expect("parser should succeed")
}

/// Parses `src` and renders it in dot-indented form, for compact
/// assertions against the expected shape of the AST.
pub(super) fn parse_to_string(src: &str) -> String {
    print_tree(&parse(src))
}
