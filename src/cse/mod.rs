//! The CSE (Control-Stack-Environment) machine: evaluates a standardized
//! tree under lexical environments.
//!
//! # Module Structure
//!
//! - [`error`] - Evaluation error type
//! - [`value`] - Runtime values, closures, and the built-in tag
//! - `environment` - The parent-linked lexical environment tree
//! - `builtins` - Implementations of the built-in function library
//! - `machine` - The evaluator: one recursive `eval`/`apply` pair
//!   realizing the CSE machine's thirteen rules
//! - `tests` - Unit tests (test-only)

mod builtins;
mod environment;
mod error;
mod machine;
mod value;


pub use error::EvaluationError;
pub use machine::Machine;
pub use value::Value;

use crate::tree::Tree;
use std::io::Write;

/// Evaluates a standardized tree, writing any `Print` output to `out` and
/// rendering tuples sorted-and-flat if `pretty` is set.
///
/// # Errors
///
/// Returns an [`EvaluationError`] on the first unbound identifier, type
/// mismatch, arity mismatch, out-of-range tuple index, or division by
/// zero.
pub fn evaluate(st: &Tree, out: &mut dyn Write, pretty: bool) -> Result<Value, EvaluationError> {
    Machine::new(out, pretty).run(st)
}
