//! Runtime values and closures.

use std::rc::Rc;

use super::environment::Environment;
use crate::tree::Tree;

/// The pattern a lambda binds its argument against.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundVars {
    /// A single name, e.g. `fn n . ...`.
    Single(String),
    /// A tuple of names, e.g. `fn (a, b) . ...`; the argument must be a
    /// tuple of matching length, bound pointwise.
    Tuple(Vec<String>),
    /// The empty-tuple parameter `()`; the argument must be `nil`.
    Empty,
}

/// A λ-closure: a lambda's body together with the environment it closed
/// over, captured at the point the lambda marker was evaluated.
#[derive(Debug)]
pub struct Closure {
    pub param: BoundVars,
    pub body: Tree,
    pub env: Rc<Environment>,
}

/// One of the fixed library of built-in functions, named in the primitive
/// environment.
#[derive(Debug, Clone, PartialEq)]
pub enum Builtin {
    Print,
    Stem,
    Stern,
    Conc,
    /// `Conc` curried over its first argument, awaiting the second.
    ConcPartial(String),
    Order,
    Null,
    IsInteger,
    IsString,
    IsTruthvalue,
    IsFunction,
    IsDummy,
    IsTuple,
    ItoS,
    Neg,
}

/// A runtime value.
///
/// `nil` (the empty tuple) is represented as `Tuple(vec![])` rather than
/// as its own variant: RPAL's `aug`/`Order` rules treat `nil` exactly as
/// an empty tuple (`aug nil x` is a 1-tuple of `x`, `Order nil` is `0`),
/// so giving it a distinct variant would only require re-deriving that
/// equivalence at every use site.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Str(String),
    Bool(bool),
    Dummy,
    Tuple(Vec<Value>),
    Closure(Rc<Closure>),
    /// The η-closure produced by `gamma(Y*, closure)`: a not-yet-unrolled
    /// recursive reference to `closure`, which re-unrolls itself on every
    /// application rather than mutating a back-edge into the environment.
    EtaClosure(Rc<Closure>),
    Builtin(Builtin),
    /// The fixed-point combinator marker itself, before it has been
    /// applied to a closure.
    YStar,
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Str(_) => "string",
            Value::Bool(_) => "truth value",
            Value::Dummy => "dummy",
            Value::Tuple(_) => "tuple",
            Value::Closure(_) | Value::EtaClosure(_) | Value::Builtin(_) => "function",
            Value::YStar => "<Y*>",
        }
    }

    /// Renders the value the way `Print` and the no-flag CLI mode do: raw
    /// form, tuples shown as `(v1, v2, ...)`.
    pub fn render_raw(&self) -> String {
        match self {
            Value::Int(n) => n.to_string(),
            Value::Str(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Dummy => String::new(),
            Value::Tuple(items) => {
                let rendered: Vec<String> = items.iter().map(Value::render_raw).collect();
                format!("({})", rendered.join(", "))
            }
            Value::Closure(_) | Value::EtaClosure(_) | Value::Builtin(_) => {
                "[function]".to_string()
            }
            Value::YStar => "<Y*>".to_string(),
        }
    }

    /// Renders the value the way `-pretty` does: a tuple becomes a flat,
    /// comma-separated list, sorted when every element is the same
    /// primitive type (all integers, or all strings), left as emitted
    /// otherwise. Non-tuple values render the same as [`Value::render_raw`].
    pub fn render_pretty(&self) -> String {
        match self {
            Value::Tuple(items) => {
                let mut rendered: Vec<String> = items.iter().map(Value::render_raw).collect();
                if all_integers(items) {
                    let mut ints: Vec<i64> = items
                        .iter()
                        .map(|v| match v {
                            Value::Int(n) => *n,
                            _ => unreachable!("checked by all_integers"),
                        })
                        .collect();
                    ints.sort_unstable();
                    rendered = ints.into_iter().map(|n| n.to_string()).collect();
                } else if all_strings(items) {
                    rendered.sort();
                }
                rendered.join(", ")
            }
            other => other.render_raw(),
        }
    }
}

fn all_integers(items: &[Value]) -> bool {
    !items.is_empty() && items.iter().all(|v| matches!(v, Value::Int(_)))
}

fn all_strings(items: &[Value]) -> bool {
    !items.is_empty() && items.iter().all(|v| matches!(v, Value::Str(_)))
}
