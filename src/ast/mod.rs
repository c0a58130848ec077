//! AST/ST pretty-printing.
//!
//! The parser and the normalizer both produce [`crate::tree::Tree`] values;
//! this module's printer works on either, since the dot-indented format is
//! identical for the AST and the ST — only the set of labels that can
//! appear differs.


use crate::tree::{Label, Tree};
use std::fmt::Write;

/// Renders `tree` in dot-indented form: one node per line, each child
/// prefixed by one additional `.` relative to its parent, leaves shown in
/// their literal form (`<ID:name>`, `<INT:n>`, `<STR:'...'>`, `<true>`,
/// `<false>`, `<nil>`, `<dummy>`).
pub fn print_tree(tree: &Tree) -> String {
    let mut out = String::new();
    print_node(tree, 0, &mut out);
    out
}

fn print_node(tree: &Tree, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push('.');
    }
    writeln!(out, "{}", node_text(tree)).expect("writing to a String never fails");
    for child in &tree.children {
        print_node(child, depth + 1, out);
    }
}

fn node_text(tree: &Tree) -> String {
    match &tree.label {
        Label::Let => "let".to_string(),
        Label::Where => "where".to_string(),
        Label::FunctionForm => "function_form".to_string(),
        Label::And => "and".to_string(),
        Label::Rec => "rec".to_string(),
        Label::Within => "within".to_string(),
        Label::At => "@".to_string(),
        Label::EmptyVb => "()".to_string(),
        Label::Lambda => "lambda".to_string(),
        Label::Gamma => "gamma".to_string(),
        Label::Arrow => "->".to_string(),
        Label::Tau => "tau".to_string(),
        Label::Equal => "=".to_string(),
        Label::YStar => "<Y*>".to_string(),
        Label::Op(op) => op.text().to_string(),
        Label::Id(name) => format!("<ID:{}>", name),
        Label::Int(n) => format!("<INT:{}>", n),
        Label::Str(s) => format!("<STR:'{}'>", s),
        Label::True => "<true>".to_string(),
        Label::False => "<false>".to_string(),
        Label::Nil => "<nil>".to_string(),
        Label::Dummy => "<dummy>".to_string(),
    }
}
