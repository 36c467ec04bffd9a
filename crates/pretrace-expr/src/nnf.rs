//! Negation-normal-form conversion.

use std::collections::HashMap;

use crate::boolexpr::{and, not, or, BoolExpr};

/// Memoization cache for [`downprop_negations_cached`].
///
/// A plain local `HashMap`, not a global — two calls starting from fresh
/// caches and identical input produce identical output, so the cache is an
/// optimization, never an observable effect.
pub type NnfCache = HashMap<BoolExpr, BoolExpr>;

/// Push `Not` down to the leaves using De Morgan and relational duality.
///
/// `Rel::negation` is total over all six relational kinds, so `Not` is
/// fully eliminated: every negated leaf rewrites to its dual relation,
/// never staying wrapped. Idempotent.
pub fn downprop_negations(expr: &BoolExpr) -> BoolExpr {
    match expr {
        BoolExpr::Not(inner) => match inner.as_ref() {
            BoolExpr::True => BoolExpr::False,
            BoolExpr::False => BoolExpr::True,
            BoolExpr::Rel(r) => BoolExpr::Rel(r.negation()),
            BoolExpr::And(l, r) => or(
                downprop_negations(&not((**l).clone())),
                downprop_negations(&not((**r).clone())),
            ),
            BoolExpr::Or(l, r) => and(
                downprop_negations(&not((**l).clone())),
                downprop_negations(&not((**r).clone())),
            ),
            BoolExpr::Not(a) => downprop_negations(a),
            _ => expr.clone(),
        },
        BoolExpr::And(l, r) => and(downprop_negations(l), downprop_negations(r)),
        BoolExpr::Or(l, r) => or(downprop_negations(l), downprop_negations(r)),
        _ => expr.clone(),
    }
}

/// Same as [`downprop_negations`], memoized through `cache`.
pub fn downprop_negations_cached(expr: &BoolExpr, cache: &mut NnfCache) -> BoolExpr {
    if let Some(hit) = cache.get(expr) {
        return hit.clone();
    }
    let result = downprop_negations(expr);
    cache.insert(expr.clone(), result.clone());
    result
}
