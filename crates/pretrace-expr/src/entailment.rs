//! Conservative syntactic entailment between two boolean expressions.
//!
//! `expr_satisfies(a, b)` answers "does every state satisfying `a` also
//! satisfy `b`" — but only syntactically, by structural pattern matching
//! on normal-form expressions. It is sound for the patterns it recognizes
//! and conservatively returns `false` for everything else, including some
//! pairs that are semantically entailed. Callers (the graph builder, when
//! it decides whether one contract's postcondition subsumes another's
//! precondition) rely on this exact behavior, so the rule order below
//! mirrors the reference implementation arm for arm — do not "improve" it.

use crate::boolexpr::BoolExpr;
use crate::nnf::downprop_negations;

/// `true` if every state satisfying `left` also satisfies `right`, by the
/// conservative syntactic rules described on the module.
pub fn expr_satisfies(left: &BoolExpr, right: &BoolExpr) -> bool {
    let left = downprop_negations(left);
    let right = downprop_negations(right);
    expr_satisfies_nnf(&left, &right)
}

fn expr_satisfies_nnf(left: &BoolExpr, right: &BoolExpr) -> bool {
    use BoolExpr::*;

    match (left, right) {
        (_, True) | (True, _) | (False, _) => true,
        (_, False) => false,
        (Rel(a), Rel(b)) if a.kind == crate::boolexpr::RelKind::Eq
            && b.kind == crate::boolexpr::RelKind::Eq =>
        {
            implies(a.lhs == b.lhs, a.rhs == b.rhs)
        }
        (Rel(a), Rel(b))
            if (a.kind == crate::boolexpr::RelKind::Eq && b.kind == crate::boolexpr::RelKind::Ne)
                || (a.kind == crate::boolexpr::RelKind::Ne && b.kind == crate::boolexpr::RelKind::Eq) =>
        {
            implies(a.lhs == b.lhs, a.rhs != b.rhs)
        }
        (Rel(a), Rel(b))
            if a.kind == crate::boolexpr::RelKind::Ne && b.kind == crate::boolexpr::RelKind::Ne =>
        {
            true
        }
        (And(a, b), right) => expr_satisfies_nnf(a, right) && expr_satisfies_nnf(b, right),
        (Or(a, b), right) => expr_satisfies_nnf(a, right) || expr_satisfies_nnf(b, right),
        (left, And(a, b)) => expr_satisfies_nnf(left, a) && expr_satisfies_nnf(left, b),
        (left, Or(a, b)) => expr_satisfies_nnf(left, a) || expr_satisfies_nnf(left, b),
        _ => false,
    }
}

fn implies(p: bool, q: bool) -> bool {
    !p || q
}
