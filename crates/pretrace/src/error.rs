//! Facade-level error type.
//!
//! Every other public entry point in this crate (`regex_for`,
//! `must_contain`, `last_calls`, `collapse_same_prefix`,
//! `naive_pretrace`) is total over an already-built [`StateGraph`] and
//! cannot fail; `build_graph` is the one operation that evaluates
//! caller-supplied contracts against caller-supplied states, so it's the
//! one place an out-of-range variable or a missing prestate can surface.

use pretrace_expr::ExprError;

/// Errors that can occur while deriving pre-traces.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A method's precondition or postcondition referenced a variable
    /// index out of range, or an `Old(_)` term without a prestate.
    #[error(transparent)]
    Expr(#[from] ExprError),

    /// A [`crate::config::RecursionLimit`]-guarded operation was handed
    /// an expression nested deeper than the configured bound.
    #[error("expression nesting depth {depth} exceeds recursion limit {limit}")]
    RecursionLimitExceeded { depth: usize, limit: usize },
}

/// Result type for operations that can fail (currently just [`crate::build_graph`]).
pub type Result<T> = std::result::Result<T, Error>;
