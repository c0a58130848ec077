use super::kinds;
use crate::token::TokenKind;

#[test]
fn single_digit() {
    assert_eq!(kinds("5"), vec![TokenKind::Integer("5".to_string())]);
}

#[test]
fn multi_digit_longest_match() {
    assert_eq!(kinds("12345"), vec![TokenKind::Integer("12345".to_string())]);
}

#[test]
fn leading_zeros_preserved_as_lexeme() {
    assert_eq!(kinds("007"), vec![TokenKind::Integer("007".to_string())]);
}

#[test]
fn integer_then_identifier() {
    assert_eq!(
        kinds("12abc"),
        vec![
            TokenKind::Integer("12".to_string()),
            TokenKind::Identifier("abc".to_string()),
        ]
    );
}
