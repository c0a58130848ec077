use super::kinds;
use crate::token::TokenKind;

#[test]
fn plain_identifier() {
    assert_eq!(kinds("foo"), vec![TokenKind::Identifier("foo".to_string())]);
}

#[test]
fn identifier_with_digits_and_underscore() {
    assert_eq!(
        kinds("x_1a2"),
        vec![TokenKind::Identifier("x_1a2".to_string())]
    );
}

#[test]
fn all_reserved_words_become_keywords() {
    let words = [
        "let", "in", "fn", "where", "aug", "or", "not", "gr", "ge", "ls", "le", "eq", "ne",
        "true", "false", "nil", "dummy", "within", "and", "rec",
    ];
    for word in words {
        assert_eq!(
            kinds(word),
            vec![TokenKind::Keyword(word.to_string())],
            "expected {word} to lex as a keyword"
        );
    }
}

#[test]
fn keyword_prefix_is_still_an_identifier() {
    // "lets" is not "let" followed by something else; longest-match means
    // the whole thing is one identifier, not a keyword.
    assert_eq!(kinds("lets"), vec![TokenKind::Identifier("lets".to_string())]);
}

#[test]
fn longest_match_for_identifiers() {
    assert_eq!(
        kinds("factorial"),
        vec![TokenKind::Identifier("factorial".to_string())]
    );
}
