//! Substituting `Old` reads for plain variable reads.
//!
//! Used when a postcondition's `Old(_)` terms need to be re-expressed as
//! reads of a *different* tuple's variables — e.g. when building the state
//! graph, the prestate a postcondition's `Old` refers to is one of the
//! universe's `State` tuples, and the graph builder wants a pure
//! current-state expression it can evaluate without threading a prestate
//! around.

use std::rc::Rc;

use crate::boolexpr::{BoolExpr, Rel};
use crate::value::{Value, VarId};

/// Replace every `Old(i)` inside `expr` with `Variable(remap[i])`.
///
/// Panics if an `Old(i)` index is out of bounds for `remap` — this is a
/// programmer error at the call site, not a runtime data error, so it is
/// not part of [`crate::error::ExprError`].
pub fn rename_old(expr: &BoolExpr, remap: &[VarId]) -> BoolExpr {
    match expr {
        BoolExpr::True => BoolExpr::True,
        BoolExpr::False => BoolExpr::False,
        BoolExpr::Rel(r) => BoolExpr::Rel(Rel {
            kind: r.kind,
            lhs: rename_value(r.lhs, remap),
            rhs: rename_value(r.rhs, remap),
        }),
        BoolExpr::And(l, r) => BoolExpr::And(
            Rc::new(rename_old(l, remap)),
            Rc::new(rename_old(r, remap)),
        ),
        BoolExpr::Or(l, r) => BoolExpr::Or(
            Rc::new(rename_old(l, remap)),
            Rc::new(rename_old(r, remap)),
        ),
        BoolExpr::Not(e) => BoolExpr::Not(Rc::new(rename_old(e, remap))),
    }
}

fn rename_value(v: Value, remap: &[VarId]) -> Value {
    match v {
        Value::Old(i) => Value::Variable(remap[i]),
        other => other,
    }
}
