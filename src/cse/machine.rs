//! The CSE machine proper: evaluation of a standardized tree under an
//! environment.
//!
//! Rather than a literal flattened-control-structure stack loop, this
//! walks the ST directly with one recursive `eval` per node and an
//! `apply` for γ-combination; a lambda's "control structure" is just the
//! `Tree` its body closes over, and sharing is handled by `Rc` on the
//! environment rather than a separate indexed structure table. This
//! realizes the same thirteen rules (see module docs in [`super`])
//! without needing to pre-flatten the tree into a linear control
//! sequence, since nothing here depends on the flattened form except the
//! rules' own case analysis.

use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use super::builtins;
use super::environment::Environment;
use super::error::EvaluationError;
use super::value::{BoundVars, Closure, Value};
use crate::tree::{Label, Operator, Tree};

/// Drives evaluation of one program, holding the output sink and the
/// `-pretty` rendering mode.
pub struct Machine<'a> {
    out: &'a mut dyn Write,
    pretty: bool,
}

impl<'a> Machine<'a> {
    pub fn new(out: &'a mut dyn Write, pretty: bool) -> Self {
        Machine { out, pretty }
    }

    /// Evaluates `st` under the primitive environment and returns its
    /// value.
    pub fn run(&mut self, st: &Tree) -> Result<Value, EvaluationError> {
        let root = Environment::primitive();
        self.eval(st, &root)
    }

    fn eval(&mut self, node: &Tree, env: &Rc<Environment>) -> Result<Value, EvaluationError> {
        match &node.label {
            Label::Int(n) => Ok(Value::Int(*n)),
            Label::Str(s) => Ok(Value::Str(s.clone())),
            Label::True => Ok(Value::Bool(true)),
            Label::False => Ok(Value::Bool(false)),
            Label::Nil => Ok(Value::Tuple(Vec::new())),
            Label::Dummy => Ok(Value::Dummy),
            Label::YStar => Ok(Value::YStar),

            Label::Id(name) => env
                .lookup(name)
                .ok_or_else(|| EvaluationError::new(format!("unbound identifier '{name}'"))),

            Label::Lambda => {
                let param = bound_vars(&node.children[0])?;
                Ok(Value::Closure(Rc::new(Closure {
                    param,
                    body: node.children[1].clone(),
                    env: Rc::clone(env),
                })))
            }

            Label::Gamma => {
                let f = self.eval(&node.children[0], env)?;
                let a = self.eval(&node.children[1], env)?;
                self.apply(f, a)
            }

            Label::Arrow => {
                let cond = self.eval(&node.children[0], env)?;
                match cond {
                    Value::Bool(true) => self.eval(&node.children[1], env),
                    Value::Bool(false) => self.eval(&node.children[2], env),
                    other => Err(type_error("->", "a truth value", &other)),
                }
            }

            Label::Tau => {
                // Evaluated right to left so that side effects (Print
                // calls) inside later components run first; the tuple
                // itself is still assembled in left-to-right order.
                let n = node.children.len();
                let mut values: Vec<Option<Value>> = std::iter::repeat_with(|| None).take(n).collect();
                for i in (0..n).rev() {
                    values[i] = Some(self.eval(&node.children[i], env)?);
                }
                Ok(Value::Tuple(
                    values.into_iter().map(|v| v.expect("filled above")).collect(),
                ))
            }

            Label::Op(op) => self.eval_operator(*op, &node.children, env),

            other => Err(EvaluationError::new(format!(
                "internal error: '{:?}' should have been eliminated by normalization",
                other
            ))),
        }
    }

    fn eval_operator(
        &mut self,
        op: Operator,
        children: &[Tree],
        env: &Rc<Environment>,
    ) -> Result<Value, EvaluationError> {
        if op.is_binary() {
            let left = self.eval(&children[0], env)?;
            let right = self.eval(&children[1], env)?;
            apply_binary(op, left, right)
        } else {
            let operand = self.eval(&children[0], env)?;
            apply_unary(op, operand)
        }
    }

    /// Applies `f` to `a`, matching the CSE machine's γ-combination rules
    /// (4: λ-closure, 5: `Y*`, 6: η-closure, 7: built-in, 8: tuple index).
    fn apply(&mut self, f: Value, a: Value) -> Result<Value, EvaluationError> {
        match f {
            Value::Closure(closure) => self.apply_closure(&closure, a),

            Value::YStar => match a {
                Value::Closure(closure) => Ok(Value::EtaClosure(closure)),
                other => Err(type_error("Y*", "a lambda closure", &other)),
            },

            Value::EtaClosure(closure) => {
                // gamma(eta(c), a) = gamma(gamma(c, eta(c)), a): applying
                // c to its own eta-wrapped self re-binds the recursive
                // name, producing the real function closure, which is
                // then applied to the original argument.
                let unrolled = self.apply_closure(&closure, Value::EtaClosure(Rc::clone(&closure)))?;
                self.apply(unrolled, a)
            }

            Value::Builtin(b) => builtins::apply(b, a, self.out, self.pretty),

            Value::Tuple(items) => match a {
                Value::Int(i) if i >= 1 && (i as usize) <= items.len() => {
                    Ok(items[(i - 1) as usize].clone())
                }
                Value::Int(i) => Err(EvaluationError::new(format!(
                    "tuple index {i} out of range for a {}-tuple",
                    items.len()
                ))),
                other => Err(type_error("tuple indexing", "an integer", &other)),
            },

            other => Err(EvaluationError::new(format!(
                "cannot apply a value of type {}",
                other.type_name()
            ))),
        }
    }

    fn apply_closure(&mut self, closure: &Closure, arg: Value) -> Result<Value, EvaluationError> {
        let bindings = bind(&closure.param, arg)?;
        let frame = Environment::child(&closure.env, bindings);
        self.eval(&closure.body, &frame)
    }
}

/// Derives the parameter pattern a lambda's bound-variable node describes.
fn bound_vars(node: &Tree) -> Result<BoundVars, EvaluationError> {
    match &node.label {
        Label::Id(name) => Ok(BoundVars::Single(name.clone())),
        Label::EmptyVb => Ok(BoundVars::Empty),
        Label::Tau => {
            let mut names = Vec::with_capacity(node.children.len());
            for child in &node.children {
                match &child.label {
                    Label::Id(name) => names.push(name.clone()),
                    _ => {
                        return Err(EvaluationError::new(
                            "tuple parameter must be a list of names",
                        ));
                    }
                }
            }
            Ok(BoundVars::Tuple(names))
        }
        other => Err(EvaluationError::new(format!(
            "internal error: '{:?}' is not a valid bound-variable pattern",
            other
        ))),
    }
}

fn bind(param: &BoundVars, arg: Value) -> Result<HashMap<String, Value>, EvaluationError> {
    match param {
        BoundVars::Single(name) => {
            let mut bindings = HashMap::with_capacity(1);
            bindings.insert(name.clone(), arg);
            Ok(bindings)
        }
        BoundVars::Empty => match arg {
            Value::Tuple(items) if items.is_empty() => Ok(HashMap::new()),
            other => Err(type_error("()", "nil", &other)),
        },
        BoundVars::Tuple(names) => match arg {
            Value::Tuple(items) if items.len() == names.len() => {
                let mut bindings = HashMap::with_capacity(names.len());
                for (name, value) in names.iter().zip(items) {
                    bindings.insert(name.clone(), value);
                }
                Ok(bindings)
            }
            Value::Tuple(items) => Err(EvaluationError::new(format!(
                "tuple parameter has {} names but the argument is a {}-tuple",
                names.len(),
                items.len()
            ))),
            other => Err(type_error("tuple parameter", "a tuple", &other)),
        },
    }
}

fn apply_binary(op: Operator, left: Value, right: Value) -> Result<Value, EvaluationError> {
    use Operator::*;
    match op {
        Add | Sub | Mul | Div | Pow => {
            let (l, r) = (expect_int(&left, op)?, expect_int(&right, op)?);
            match op {
                Add => Ok(Value::Int(l + r)),
                Sub => Ok(Value::Int(l - r)),
                Mul => Ok(Value::Int(l * r)),
                Div => {
                    if r == 0 {
                        Err(EvaluationError::new("division by zero"))
                    } else {
                        Ok(Value::Int(l / r))
                    }
                }
                Pow => Ok(Value::Int(l.pow(r.try_into().unwrap_or(0)))),
                _ => unreachable!(),
            }
        }

        Aug => match left {
            Value::Tuple(mut items) => {
                items.push(right);
                Ok(Value::Tuple(items))
            }
            other => Err(type_error("aug", "a tuple", &other)),
        },

        Or => Ok(Value::Bool(expect_bool(&left, op)? || expect_bool(&right, op)?)),
        And => Ok(Value::Bool(expect_bool(&left, op)? && expect_bool(&right, op)?)),

        Gr | Ge | Ls | Le => compare(op, left, right),

        Eq => Ok(Value::Bool(values_equal(&left, &right))),
        Ne => Ok(Value::Bool(!values_equal(&left, &right))),

        Not | Neg => unreachable!("unary operators never reach apply_binary"),
    }
}

fn apply_unary(op: Operator, operand: Value) -> Result<Value, EvaluationError> {
    match op {
        Operator::Not => Ok(Value::Bool(!expect_bool(&operand, op)?)),
        Operator::Neg => Ok(Value::Int(-expect_int(&operand, op)?)),
        _ => unreachable!("binary operators never reach apply_unary"),
    }
}

fn compare(op: Operator, left: Value, right: Value) -> Result<Value, EvaluationError> {
    let ordering = match (&left, &right) {
        (Value::Int(l), Value::Int(r)) => l.cmp(r),
        (Value::Str(l), Value::Str(r)) => l.cmp(r),
        _ => {
            return Err(EvaluationError::new(format!(
                "{} requires two integers or two strings, got {} and {}",
                op.text(),
                left.type_name(),
                right.type_name()
            )));
        }
    };
    let result = match op {
        Operator::Gr => ordering.is_gt(),
        Operator::Ge => ordering.is_ge(),
        Operator::Ls => ordering.is_lt(),
        Operator::Le => ordering.is_le(),
        _ => unreachable!(),
    };
    Ok(Value::Bool(result))
}

fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Int(l), Value::Int(r)) => l == r,
        (Value::Str(l), Value::Str(r)) => l == r,
        (Value::Bool(l), Value::Bool(r)) => l == r,
        (Value::Dummy, Value::Dummy) => true,
        (Value::Tuple(l), Value::Tuple(r)) => {
            l.len() == r.len() && l.iter().zip(r).all(|(a, b)| values_equal(a, b))
        }
        _ => false,
    }
}

fn expect_int(value: &Value, op: Operator) -> Result<i64, EvaluationError> {
    match value {
        Value::Int(n) => Ok(*n),
        other => Err(type_error(op.text(), "an integer", other)),
    }
}

fn expect_bool(value: &Value, op: Operator) -> Result<bool, EvaluationError> {
    match value {
        Value::Bool(b) => Ok(*b),
        other => Err(type_error(op.text(), "a truth value", other)),
    }
}

fn type_error(construct: &str, expected: &str, got: &Value) -> EvaluationError {
    EvaluationError::new(format!(
        "{construct} requires {expected}, got {}",
        got.type_name()
    ))
}

