//! The lexical environment tree.

use std::collections::HashMap;
use std::rc::Rc;

use super::value::{Builtin, Value};

/// A single frame of bindings, linked to its parent by an `Rc` rather than
/// a child list: lookups only ever walk upward, and closures capture an
/// `Rc<Environment>` that must outlive the frame that created it, so the
/// parent link is the only direction ever needed.
#[derive(Debug)]
pub struct Environment {
    bindings: HashMap<String, Value>,
    parent: Option<Rc<Environment>>,
}

impl Environment {
    /// Builds the primitive environment `e0`, binding every built-in name.
    pub fn primitive() -> Rc<Environment> {
        let mut bindings = HashMap::new();
        for (name, builtin) in [
            ("Print", Builtin::Print),
            ("Stem", Builtin::Stem),
            ("Stern", Builtin::Stern),
            ("Conc", Builtin::Conc),
            ("Order", Builtin::Order),
            ("Null", Builtin::Null),
            ("Isinteger", Builtin::IsInteger),
            ("Isstring", Builtin::IsString),
            ("Istruthvalue", Builtin::IsTruthvalue),
            ("Isfunction", Builtin::IsFunction),
            ("Isdummy", Builtin::IsDummy),
            ("Istuple", Builtin::IsTuple),
            ("ItoS", Builtin::ItoS),
            ("Neg", Builtin::Neg),
        ] {
            bindings.insert(name.to_string(), Value::Builtin(builtin));
        }
        Rc::new(Environment {
            bindings,
            parent: None,
        })
    }

    /// Builds a child frame binding `bindings`, parented to `parent`.
    pub fn child(parent: &Rc<Environment>, bindings: HashMap<String, Value>) -> Rc<Environment> {
        Rc::new(Environment {
            bindings,
            parent: Some(Rc::clone(parent)),
        })
    }

    /// Looks up `name`, walking parent frames; `None` if unbound anywhere.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|p| p.lookup(name))
    }
}
