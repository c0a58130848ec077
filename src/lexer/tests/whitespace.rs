use super::kinds;
use crate::lexer::Lexer;
use crate::token::TokenKind;

#[test]
fn whitespace_between_tokens_is_skipped() {
    assert_eq!(
        kinds("  x   +\ty "),
        vec![
            TokenKind::Identifier("x".to_string()),
            TokenKind::Operator("+".to_string()),
            TokenKind::Identifier("y".to_string()),
        ]
    );
}

#[test]
fn empty_source_is_just_end_of_tokens() {
    assert_eq!(kinds(""), Vec::<TokenKind>::new());
}

#[test]
fn newline_advances_line_counter() {
    let mut lexer = Lexer::new("x\n\ny");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[0].line(), 1);
    assert_eq!(tokens[1].line(), 3);
}
