//! The one configurable knob this crate has: a recursion/fuel guard on
//! the boolean-expression passes, in the same style as
//! `plotnik_lib::Error`'s `RecursionLimitExceeded`/`ExecFuelExhausted`
//! fuel pattern. No filesystem, network, or environment variables are
//! touched anywhere in this pipeline: there is no other configuration
//! surface.

use pretrace_expr::{BoolExpr, Value};

use crate::{Error, Result};

/// A bound on [`BoolExpr`] nesting depth, checked before the recursive
/// passes (`downprop_negations`, `expr_satisfies`) that would otherwise
/// walk arbitrarily deep contracts.
///
/// The state spaces this pipeline targets are small (well under 10^4
/// states) and contracts are hand-written, so the default is generous
/// — this guards against a pathological or generated contract, not
/// ordinary use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecursionLimit(pub usize);

impl Default for RecursionLimit {
    fn default() -> Self {
        RecursionLimit(1024)
    }
}

impl RecursionLimit {
    pub fn new(limit: usize) -> Self {
        RecursionLimit(limit)
    }

    fn check(self, expr: &BoolExpr) -> Result<()> {
        let depth = bool_expr_depth(expr);
        if depth > self.0 {
            Err(Error::RecursionLimitExceeded {
                depth,
                limit: self.0,
            })
        } else {
            Ok(())
        }
    }

    /// [`pretrace_expr::downprop_negations`], guarded by this limit.
    pub fn downprop_negations(self, expr: &BoolExpr) -> Result<BoolExpr> {
        self.check(expr)?;
        Ok(pretrace_expr::downprop_negations(expr))
    }

    /// [`pretrace_expr::expr_satisfies`], guarded by this limit.
    pub fn expr_satisfies(self, left: &BoolExpr, right: &BoolExpr) -> Result<bool> {
        self.check(left)?;
        self.check(right)?;
        Ok(pretrace_expr::expr_satisfies(left, right))
    }
}

fn bool_expr_depth(expr: &BoolExpr) -> usize {
    match expr {
        BoolExpr::True | BoolExpr::False => 1,
        BoolExpr::Rel(_) => 1,
        BoolExpr::Not(e) => 1 + bool_expr_depth(e),
        BoolExpr::And(l, r) | BoolExpr::Or(l, r) => 1 + bool_expr_depth(l).max(bool_expr_depth(r)),
    }
}
