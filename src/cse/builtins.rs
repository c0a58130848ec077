//! Implementations of the fixed built-in function library.

use std::io::Write;

use super::error::EvaluationError;
use super::value::{Builtin, Value};

/// Applies a built-in to a single argument, matching the CSE machine's
/// "γ with built-in on S" rule. `Conc` is curried: the first application
/// returns a [`Builtin::ConcPartial`] awaiting the second string. `pretty`
/// mirrors the CLI's `-pretty` flag: when set, `Print` renders tuples the
/// sorted, comma-separated way rather than in raw `(v1, v2, ...)` form.
pub fn apply(
    builtin: Builtin,
    arg: Value,
    out: &mut dyn Write,
    pretty: bool,
) -> Result<Value, EvaluationError> {
    match builtin {
        Builtin::Print => {
            let rendered = if pretty {
                arg.render_pretty()
            } else {
                arg.render_raw()
            };
            write!(out, "{}", rendered)
                .map_err(|e| EvaluationError::new(format!("write error: {e}")))?;
            Ok(Value::Dummy)
        }

        Builtin::Stem => {
            let s = expect_string(&arg, "Stem")?;
            let first = s.chars().next().ok_or_else(|| {
                EvaluationError::new("Stem requires a non-empty string".to_string())
            })?;
            Ok(Value::Str(first.to_string()))
        }

        Builtin::Stern => {
            let s = expect_string(&arg, "Stern")?;
            if s.is_empty() {
                return Err(EvaluationError::new(
                    "Stern requires a non-empty string".to_string(),
                ));
            }
            Ok(Value::Str(s.chars().skip(1).collect()))
        }

        Builtin::Conc => {
            let s = expect_string(&arg, "Conc")?;
            Ok(Value::Builtin(Builtin::ConcPartial(s)))
        }

        Builtin::ConcPartial(first) => {
            let second = expect_string(&arg, "Conc")?;
            Ok(Value::Str(first + &second))
        }

        Builtin::Order => match arg {
            Value::Tuple(items) => Ok(Value::Int(items.len() as i64)),
            other => Err(type_error("Order", "a tuple", &other)),
        },

        Builtin::Null => match arg {
            Value::Tuple(items) => Ok(Value::Bool(items.is_empty())),
            other => Err(type_error("Null", "a tuple", &other)),
        },

        Builtin::IsInteger => Ok(Value::Bool(matches!(arg, Value::Int(_)))),
        Builtin::IsString => Ok(Value::Bool(matches!(arg, Value::Str(_)))),
        Builtin::IsTruthvalue => Ok(Value::Bool(matches!(arg, Value::Bool(_)))),
        Builtin::IsFunction => Ok(Value::Bool(matches!(
            arg,
            Value::Closure(_) | Value::EtaClosure(_) | Value::Builtin(_)
        ))),
        Builtin::IsDummy => Ok(Value::Bool(matches!(arg, Value::Dummy))),
        Builtin::IsTuple => Ok(Value::Bool(matches!(arg, Value::Tuple(_)))),

        Builtin::ItoS => match arg {
            Value::Int(n) => Ok(Value::Str(n.to_string())),
            other => Err(type_error("ItoS", "an integer", &other)),
        },

        Builtin::Neg => match arg {
            Value::Int(n) => Ok(Value::Int(-n)),
            other => Err(type_error("Neg", "an integer", &other)),
        },
    }
}

fn expect_string(value: &Value, builtin: &str) -> Result<String, EvaluationError> {
    match value {
        Value::Str(s) => Ok(s.clone()),
        other => Err(type_error(builtin, "a string", other)),
    }
}

fn type_error(builtin: &str, expected: &str, got: &Value) -> EvaluationError {
    EvaluationError::new(format!(
        "{builtin} expects {expected}, got {}",
        got.type_name()
    ))
}
