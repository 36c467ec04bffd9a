//! Boolean expression algebra over abstract ghost state, and the
//! JML-style method contracts built on top of it.
//!
//! This crate has no notion of methods, graphs, or regexes — it is the
//! innermost layer the rest of the pipeline is built from: states,
//! values, boolean expressions, negation-normal form, conservative
//! entailment, `Old`-renaming, and contracts.

pub mod boolexpr;
pub mod contracts;
pub mod entailment;
pub mod error;
pub mod nnf;
pub mod rename;
pub mod state;
pub mod value;

pub use boolexpr::{
    and, bool_false, bool_true, equal, greater_equal, greater_than, less_equal, less_than, not,
    not_equal, or, satisfies, BoolExpr, Rel, RelKind,
};
pub use contracts::{Ensures, Invariant, MethodContract, MethodName, Requires};
pub use entailment::expr_satisfies;
pub use error::ExprError;
pub use nnf::{downprop_negations, downprop_negations_cached, NnfCache};
pub use rename::rename_old;
pub use state::State;
pub use value::{Value, VarId};
