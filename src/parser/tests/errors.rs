use crate::lexer::Lexer;
use crate::parser::Parser;

fn parse_err(src: &str) -> String {
    let mut lexer = Lexer::new(src);
    let tokens = lexer.tokenize().expect("lexer should succeed");
    let mut parser = Parser::new(tokens);
    parser.parse().expect_err("parser should fail").to_string()
}

#[test]
fn missing_in_after_let_d() {
    let msg = parse_err("let x = 1 x");
    assert!(msg.contains("'in'"), "message was: {msg}");
}

#[test]
fn missing_closing_paren() {
    let msg = parse_err("(1 + 2");
    assert!(msg.contains("')'"), "message was: {msg}");
}

#[test]
fn trailing_tokens_after_a_complete_expression() {
    let msg = parse_err("1 + 2 )");
    assert!(msg.contains("end of input"), "message was: {msg}");
}

#[test]
fn dangling_fn_with_no_parameters() {
    let msg = parse_err("fn . x");
    assert!(msg.contains("parameter"), "message was: {msg}");
}

#[test]
fn error_reports_the_offending_line() {
    let mut lexer = Lexer::new("x\n+\n");
    let tokens = lexer.tokenize().unwrap();
    let mut parser = Parser::new(tokens);
    let err = parser.parse().unwrap_err();
    assert_eq!(err.span.line, 3);
}
