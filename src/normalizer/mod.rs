//! Rewrites an AST into a standardized tree (ST) using a fixed set of
//! local rules, applied bottom-up.
//!
//! Each rule strictly removes one surface-syntax label (`let`, `where`,
//! `function_form`, multi-parameter `lambda`, `within`, `and`, `rec`, `@`)
//! and never reintroduces one, so a single recursive post-order walk
//! reaches the same fixed point a repeated top-down rewrite would: by the
//! time a node's own rule fires, its children have already been rewritten
//! down to the shared AST/ST label set. A `D`-producing child is in
//! particular guaranteed to already be an `Equal` node by the time its
//! parent inspects it, since `within`/`and`/`rec`/bare bindings all
//! normalize to `Equal`.

mod error;

#[cfg(test)]
mod tests;

pub use error::NormalizationError;

use crate::tree::{Label, Tree};

/// Normalizes `tree` into a standardized tree.
///
/// # Errors
///
/// Returns a [`NormalizationError`] if a `rec`, `within`, `and`, or
/// `function_form` node does not have the shape its rule requires.
pub fn normalize(tree: Tree) -> Result<Tree, NormalizationError> {
    let Tree { label, children } = tree;

    let mut children = children
        .into_iter()
        .map(normalize)
        .collect::<Result<Vec<_>, _>>()?;

    match label {
        Label::Let => {
            let e = children.pop().expect("let has 2 children");
            let d = children.pop().expect("let has 2 children");
            let (x, p) = as_equal(d, "let")?;
            Ok(Tree::new(
                Label::Gamma,
                vec![Tree::new(Label::Lambda, vec![x, e]), p],
            ))
        }

        Label::Where => {
            let d = children.pop().expect("where has 2 children");
            let e = children.pop().expect("where has 2 children");
            let (x, p) = as_equal(d, "where")?;
            Ok(Tree::new(
                Label::Gamma,
                vec![Tree::new(Label::Lambda, vec![x, e]), p],
            ))
        }

        Label::FunctionForm => {
            if children.len() < 3 {
                return Err(NormalizationError::new(
                    "function_form requires a name, at least one parameter, and a body",
                ));
            }
            let body = children.pop().expect("checked above");
            let name = children.remove(0);
            let lambda_chain = curry(children, body);
            Ok(Tree::new(Label::Equal, vec![name, lambda_chain]))
        }

        Label::Lambda => {
            if children.len() < 2 {
                return Err(NormalizationError::new(
                    "lambda requires at least one parameter and a body",
                ));
            }
            let body = children.pop().expect("checked above");
            Ok(curry(children, body))
        }

        Label::Within => {
            if children.len() != 2 {
                return Err(NormalizationError::new("within requires two definitions"));
            }
            let d2 = children.pop().expect("checked above");
            let d1 = children.pop().expect("checked above");
            let (x1, e1) = as_equal(d1, "within")?;
            let (x2, e2) = as_equal(d2, "within")?;
            Ok(Tree::new(
                Label::Equal,
                vec![
                    x2,
                    Tree::new(
                        Label::Gamma,
                        vec![Tree::new(Label::Lambda, vec![x1, e2]), e1],
                    ),
                ],
            ))
        }

        Label::And => {
            if children.is_empty() {
                return Err(NormalizationError::new(
                    "and requires at least one definition",
                ));
            }
            let mut names = Vec::with_capacity(children.len());
            let mut values = Vec::with_capacity(children.len());
            for child in children {
                let (x, e) = as_equal(child, "and")?;
                names.push(x);
                values.push(e);
            }
            Ok(Tree::new(
                Label::Equal,
                vec![Tree::new(Label::Tau, names), Tree::new(Label::Tau, values)],
            ))
        }

        Label::Rec => {
            if children.len() != 1 {
                return Err(NormalizationError::new("rec requires a single binding"));
            }
            let binding = children.pop().expect("checked above");
            let (x, e) = as_equal(binding, "rec")?;
            let y_combinator = Tree::new(
                Label::Gamma,
                vec![
                    Tree::leaf(Label::YStar),
                    Tree::new(Label::Lambda, vec![x.clone(), e]),
                ],
            );
            Ok(Tree::new(Label::Equal, vec![x, y_combinator]))
        }

        Label::At => {
            if children.len() != 3 {
                return Err(NormalizationError::new(
                    "infix operator application requires two operands and an operator name",
                ));
            }
            let e2 = children.pop().expect("checked above");
            let n = children.pop().expect("checked above");
            let e1 = children.pop().expect("checked above");
            Ok(Tree::new(
                Label::Gamma,
                vec![Tree::new(Label::Gamma, vec![n, e1]), e2],
            ))
        }

        other => Ok(Tree::new(other, children)),
    }
}

/// Curries a parameter list `[V1, ..., Vn]` and a body `E` into
/// `lambda (V1, lambda (V2, ..., lambda (Vn, E)))`.
fn curry(params: Vec<Tree>, body: Tree) -> Tree {
    params
        .into_iter()
        .rev()
        .fold(body, |acc, param| Tree::new(Label::Lambda, vec![param, acc]))
}

/// Splits an already-normalized `Equal (X, E)` node into its two children,
/// or fails if normalization did not reduce it to that shape.
fn as_equal(tree: Tree, rule: &str) -> Result<(Tree, Tree), NormalizationError> {
    if tree.label != Label::Equal {
        return Err(NormalizationError::new(format!(
            "{rule} expected a binding of the form 'name = value'"
        )));
    }
    let Tree { mut children, .. } = tree;
    if children.len() != 2 {
        return Err(NormalizationError::new(format!(
            "{rule} expected a binding with exactly one name and one value"
        )));
    }
    let value = children.pop().expect("checked above");
    let name = children.pop().expect("checked above");
    Ok((name, value))
}
