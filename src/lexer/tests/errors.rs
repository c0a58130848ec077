use crate::lexer::Lexer;

#[test]
fn unterminated_string_is_an_error() {
    let mut lexer = Lexer::new("'abc");
    assert!(lexer.tokenize().is_err());
}

#[test]
fn unterminated_string_across_newline_is_an_error() {
    let mut lexer = Lexer::new("'abc\ndef'");
    assert!(lexer.tokenize().is_err());
}

#[test]
fn unknown_escape_sequence_is_an_error() {
    let mut lexer = Lexer::new(r"'\q'");
    assert!(lexer.tokenize().is_err());
}

#[test]
fn non_ascii_character_is_an_error() {
    let mut lexer = Lexer::new("café");
    assert!(lexer.tokenize().is_err());
}

#[test]
fn error_reports_the_line_it_occurred_on() {
    let mut lexer = Lexer::new("x\ny\n'unterminated");
    let err = lexer.tokenize().unwrap_err();
    assert_eq!(err.span.line, 3);
}
