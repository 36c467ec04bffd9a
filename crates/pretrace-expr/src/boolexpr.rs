//! Quantifier-free boolean expressions over [`Value`] terms.

use std::fmt;
use std::rc::Rc;

use crate::error::ExprError;
use crate::state::State;
use crate::value::Value;

/// Relational operator kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelKind {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// A single relation between two value terms, e.g. `state[0] = 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rel {
    pub kind: RelKind,
    pub lhs: Value,
    pub rhs: Value,
}

impl Rel {
    pub fn new(kind: RelKind, lhs: impl Into<Value>, rhs: impl Into<Value>) -> Self {
        Self {
            kind,
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    /// Flip the relational kind, keeping operands — `EQ<->NEQ`, `LT<->GE`, `LE<->GT`.
    pub fn negation(&self) -> Rel {
        let kind = match self.kind {
            RelKind::Eq => RelKind::Ne,
            RelKind::Ne => RelKind::Eq,
            RelKind::Lt => RelKind::Ge,
            RelKind::Ge => RelKind::Lt,
            RelKind::Le => RelKind::Gt,
            RelKind::Gt => RelKind::Le,
        };
        Rel {
            kind,
            lhs: self.lhs,
            rhs: self.rhs,
        }
    }

    fn symbol(&self) -> &'static str {
        match self.kind {
            RelKind::Eq => "=",
            RelKind::Ne => "!=",
            RelKind::Lt => "<",
            RelKind::Le => "<=",
            RelKind::Gt => ">",
            RelKind::Ge => ">=",
        }
    }

    pub fn evaluate(&self, state: &State, prestate: Option<&State>) -> Result<bool, ExprError> {
        let lhs = self.lhs.resolve(state, prestate)?;
        let rhs = self.rhs.resolve(state, prestate)?;
        Ok(match self.kind {
            RelKind::Eq => lhs == rhs,
            RelKind::Ne => lhs != rhs,
            RelKind::Lt => lhs < rhs,
            RelKind::Le => lhs <= rhs,
            RelKind::Gt => lhs > rhs,
            RelKind::Ge => lhs >= rhs,
        })
    }
}

/// A quantifier-free boolean expression over [`Value`] terms.
///
/// `And`/`Or`/`Not` hold their children behind `Rc` rather than `Box`:
/// cloning a subexpression (as the negation-normal-form pass and its
/// memoization cache both do constantly) is then a refcount bump, and
/// `Rc<BoolExpr>`'s `PartialEq`/`Hash` both forward through `Deref` so
/// structural comparison is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BoolExpr {
    True,
    False,
    And(Rc<BoolExpr>, Rc<BoolExpr>),
    Or(Rc<BoolExpr>, Rc<BoolExpr>),
    Not(Rc<BoolExpr>),
    Rel(Rel),
}

impl BoolExpr {
    /// `true` iff some `Rel` reachable inside references an `Old` term.
    pub fn contains_old(&self) -> bool {
        match self {
            BoolExpr::True | BoolExpr::False => false,
            BoolExpr::Rel(r) => {
                matches!(r.lhs, Value::Old(_)) || matches!(r.rhs, Value::Old(_))
            }
            BoolExpr::And(l, r) | BoolExpr::Or(l, r) => l.contains_old() || r.contains_old(),
            BoolExpr::Not(e) => e.contains_old(),
        }
    }
}

// ---- smart constructors -------------------------------------------------

pub fn bool_true() -> BoolExpr {
    BoolExpr::True
}

pub fn bool_false() -> BoolExpr {
    BoolExpr::False
}

pub fn and(l: BoolExpr, r: BoolExpr) -> BoolExpr {
    BoolExpr::And(Rc::new(l), Rc::new(r))
}

pub fn or(l: BoolExpr, r: BoolExpr) -> BoolExpr {
    BoolExpr::Or(Rc::new(l), Rc::new(r))
}

pub fn not(e: BoolExpr) -> BoolExpr {
    BoolExpr::Not(Rc::new(e))
}

fn rel(kind: RelKind, lhs: impl Into<Value>, rhs: impl Into<Value>) -> BoolExpr {
    BoolExpr::Rel(Rel::new(kind, lhs, rhs))
}

pub fn equal(lhs: impl Into<Value>, rhs: impl Into<Value>) -> BoolExpr {
    rel(RelKind::Eq, lhs, rhs)
}

pub fn not_equal(lhs: impl Into<Value>, rhs: impl Into<Value>) -> BoolExpr {
    rel(RelKind::Ne, lhs, rhs)
}

pub fn less_than(lhs: impl Into<Value>, rhs: impl Into<Value>) -> BoolExpr {
    rel(RelKind::Lt, lhs, rhs)
}

pub fn less_equal(lhs: impl Into<Value>, rhs: impl Into<Value>) -> BoolExpr {
    rel(RelKind::Le, lhs, rhs)
}

pub fn greater_than(lhs: impl Into<Value>, rhs: impl Into<Value>) -> BoolExpr {
    rel(RelKind::Gt, lhs, rhs)
}

pub fn greater_equal(lhs: impl Into<Value>, rhs: impl Into<Value>) -> BoolExpr {
    rel(RelKind::Ge, lhs, rhs)
}

impl fmt::Display for Rel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.symbol(), self.rhs)
    }
}

impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoolExpr::True => write!(f, "true"),
            BoolExpr::False => write!(f, "false"),
            BoolExpr::Rel(r) => write!(f, "{r}"),
            BoolExpr::And(l, r) => write!(f, "({l} && {r})"),
            BoolExpr::Or(l, r) => write!(f, "({l} || {r})"),
            BoolExpr::Not(e) => write!(f, "!({e})"),
        }
    }
}

/// Evaluate `expr` against `state` (and, for postconditions referencing
/// `Old`, `prestate`).
pub fn satisfies(
    state: &State,
    expr: &BoolExpr,
    prestate: Option<&State>,
) -> Result<bool, ExprError> {
    match expr {
        BoolExpr::True => Ok(true),
        BoolExpr::False => Ok(false),
        BoolExpr::Rel(r) => r.evaluate(state, prestate),
        BoolExpr::And(l, r) => Ok(satisfies(state, l, prestate)? && satisfies(state, r, prestate)?),
        BoolExpr::Or(l, r) => Ok(satisfies(state, l, prestate)? || satisfies(state, r, prestate)?),
        BoolExpr::Not(e) => Ok(!satisfies(state, e, prestate)?),
    }
}
