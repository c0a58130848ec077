use super::normalize;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::tree::{Label, Tree};

fn normalized(src: &str) -> Tree {
    let mut lexer = Lexer::new(src);
    let tokens = lexer.tokenize().expect("lexer should succeed");
    let mut parser = Parser::new(tokens);
    let ast = parser.parse().expect("parser should succeed");
    normalize(ast).expect("normalization should succeed")
}

#[test]
fn let_rewrites_to_gamma_of_lambda_and_value() {
    let st = normalized("let x = 1 in x");
    assert_eq!(st.label, Label::Gamma);
    assert_eq!(st.children[0].label, Label::Lambda);
    assert!(matches!(st.children[0].children[0].label, Label::Id(ref n) if n == "x"));
    assert_eq!(st.children[1].label, Label::Int(1));
}

#[test]
fn where_rewrites_the_same_as_an_equivalent_let() {
    let from_where = normalized("x where x = 1");
    let from_let = normalized("let x = 1 in x");
    assert_eq!(from_where, from_let);
}

#[test]
fn function_form_curries_into_nested_lambdas() {
    let st = normalized("x where f a b = a");
    let binding = &st.children[1];
    assert_eq!(binding.label, Label::Equal);
    let value = &binding.children[1];
    assert_eq!(value.label, Label::Lambda);
    assert!(matches!(value.children[0].label, Label::Id(ref n) if n == "a"));
    assert_eq!(value.children[1].label, Label::Lambda);
    assert!(matches!(value.children[1].children[0].label, Label::Id(ref n) if n == "b"));
}

#[test]
fn multi_parameter_lambda_curries() {
    let st = normalized("fn a b . a");
    assert_eq!(st.label, Label::Lambda);
    assert!(matches!(st.children[0].label, Label::Id(ref n) if n == "a"));
    assert_eq!(st.children[1].label, Label::Lambda);
    assert!(matches!(st.children[1].children[0].label, Label::Id(ref n) if n == "b"));
}

#[test]
fn single_parameter_lambda_is_unchanged() {
    let st = normalized("fn a . a");
    assert_eq!(st.label, Label::Lambda);
    assert_eq!(st.children.len(), 2);
}

#[test]
fn within_chains_two_bindings_through_a_substitution() {
    let st = normalized("x where (a = 1 within x = a)");
    let binding = &st.children[1];
    assert_eq!(binding.label, Label::Equal);
    assert!(matches!(binding.children[0].label, Label::Id(ref n) if n == "x"));
    assert_eq!(binding.children[1].label, Label::Gamma);
}

#[test]
fn and_combines_bindings_into_a_simultaneous_tuple_binding() {
    let st = normalized("x where (x = 1 and y = 2)");
    let binding = &st.children[1];
    assert_eq!(binding.label, Label::Equal);
    assert_eq!(binding.children[0].label, Label::Tau);
    assert_eq!(binding.children[0].children.len(), 2);
    assert_eq!(binding.children[1].label, Label::Tau);
    assert_eq!(binding.children[1].children.len(), 2);
}

#[test]
fn rec_rewrites_to_a_y_star_fixed_point() {
    let st = normalized("x where rec x = x");
    let binding = &st.children[1];
    assert_eq!(binding.label, Label::Equal);
    let rhs = &binding.children[1];
    assert_eq!(rhs.label, Label::Gamma);
    assert_eq!(rhs.children[0].label, Label::YStar);
    assert_eq!(rhs.children[1].label, Label::Lambda);
}

#[test]
fn infix_at_application_rewrites_to_nested_gamma() {
    let st = normalized("1 @f 2");
    assert_eq!(st.label, Label::Gamma);
    assert_eq!(st.children[0].label, Label::Gamma);
    assert!(matches!(st.children[0].children[0].label, Label::Id(ref n) if n == "f"));
    assert_eq!(st.children[0].children[1].label, Label::Int(1));
    assert_eq!(st.children[1].label, Label::Int(2));
}

#[test]
fn nested_lets_are_fully_normalized_bottom_up() {
    let st = normalized("let x = (let y = 1 in y) in x");
    assert_eq!(st.label, Label::Gamma);
    // the inner let has already been rewritten to a gamma before the
    // outer rule ever inspects it.
    assert_eq!(st.children[1].label, Label::Gamma);
}

#[test]
fn rec_over_a_non_binding_is_a_normalization_error() {
    let malformed = Tree::new(Label::Rec, vec![Tree::leaf(Label::Id("x".to_string()))]);
    assert!(normalize(malformed).is_err());
}

#[test]
fn and_over_a_non_binding_is_a_normalization_error() {
    let malformed = Tree::new(
        Label::And,
        vec![
            Tree::new(
                Label::Equal,
                vec![
                    Tree::leaf(Label::Id("x".to_string())),
                    Tree::leaf(Label::Int(1)),
                ],
            ),
            Tree::leaf(Label::Id("y".to_string())),
        ],
    );
    assert!(normalize(malformed).is_err());
}

#[test]
fn empty_and_is_a_normalization_error() {
    let malformed = Tree::new(Label::And, vec![]);
    assert!(normalize(malformed).is_err());
}
