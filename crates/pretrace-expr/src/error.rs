//! Fatal error taxonomy for the boolean-expression algebra.
//!
//! Every error here is fatal and unrecoverable at the point it's raised —
//! there's no partial-output path once a `Value` fails to resolve.

/// Errors raised while resolving a [`crate::value::Value`] or evaluating a
/// [`crate::boolexpr::BoolExpr`] against concrete state.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ExprError {
    /// `state[i]` or `prestate[i]` was out of range for the state's arity.
    #[error("variable index {index} out of range for state of arity {arity}")]
    UnknownVariable { index: usize, arity: usize },

    /// An `Old(_)` value term was resolved without a prestate in scope.
    #[error("Old(_) referenced without a prestate")]
    MissingPrestate,
}
