//! Leaf value terms of boolean expressions.

use std::fmt;

use crate::error::ExprError;
use crate::state::State;

/// Index of a ghost variable into a [`State`] tuple.
pub type VarId = usize;

/// A leaf term: a constant, a read of the current state, or a read of the
/// prestate (only meaningful inside a postcondition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    Literal(i64),
    Variable(VarId),
    Old(VarId),
}

impl Value {
    /// Resolve this term to a concrete integer against `state` and, for
    /// `Old`, `prestate`.
    ///
    /// `Old` without a `prestate` is a fatal [`ExprError::MissingPrestate`],
    /// matching the source's "failing this is fatal" contract.
    pub fn resolve(&self, state: &State, prestate: Option<&State>) -> Result<i64, ExprError> {
        match self {
            Value::Literal(x) => Ok(*x),
            Value::Variable(i) => state.get(*i).ok_or(ExprError::UnknownVariable {
                index: *i,
                arity: state.arity(),
            }),
            Value::Old(i) => {
                let prestate = prestate.ok_or(ExprError::MissingPrestate)?;
                prestate.get(*i).ok_or(ExprError::UnknownVariable {
                    index: *i,
                    arity: prestate.arity(),
                })
            }
        }
    }
}

impl From<i64> for Value {
    fn from(x: i64) -> Self {
        Value::Literal(x)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Literal(x) => write!(f, "{x}"),
            Value::Variable(i) => write!(f, "state[{i}]"),
            Value::Old(i) => write!(f, "old(state[{i}])"),
        }
    }
}
