//! Pretrace: derive call-context pre-traces for methods of a stateful
//! object specified by pre/post-condition contracts over ghost state.
//!
//! Given a finite universe of possible abstract states, an initial
//! state, and a `(precondition, postcondition)` contract per method,
//! this crate builds the reachable-state graph and, for any method,
//! synthesizes a regular expression describing every call sequence that
//! ends with an invocation of it — plus algebraic simplifications of
//! that expression and a symbolic "naïve pre-trace" in a small
//! call-algebra (CAT).
//!
//! # Example
//!
//! ```
//! use pretrace::{build_graph, equal, not_equal, regex_for, MethodContract, MethodName, State, Value};
//! use indexmap::IndexMap;
//!
//! let states = vec![State::from([0]), State::from([1]), State::from([2])];
//! let mut methods: IndexMap<MethodName, MethodContract> = IndexMap::new();
//! methods.insert(
//!     "createGame".into(),
//!     MethodContract::new("createGame", equal(Value::Variable(0), 0), equal(Value::Variable(0), 1)),
//! );
//! methods.insert(
//!     "placeBet".into(),
//!     MethodContract::new("placeBet", equal(Value::Variable(0), 1), equal(Value::Variable(0), 2)),
//! );
//!
//! let graph = build_graph(&states, &methods).expect("valid contracts");
//! let r = regex_for(&graph, &State::from([0]), &MethodName::from("placeBet"));
//! assert_eq!(r.to_string(), "createGame placeBet");
//! ```
//!
//! The pipeline is organized as a workspace of small crates, leaves
//! first: [`pretrace_expr`] (boolean-expression algebra and contracts),
//! [`pretrace_graph`] (state-graph construction and reverse indices),
//! [`pretrace_regex`] (the regex ADT and its algebraic simplifiers),
//! [`pretrace_elim`] (Brzozowski–McCluskey state elimination), and
//! [`pretrace_cat`] (the call-algebra term ADT and naïve pre-trace
//! synthesis). This crate is the facade: it wires them together and adds
//! the ambient surface (errors, a recursion-fuel guard, tracing hooks)
//! a complete library needs.

pub mod config;
pub mod error;

pub use config::RecursionLimit;
pub use error::{Error, Result};

pub use pretrace_expr::{
    and, bool_false, bool_true, downprop_negations, downprop_negations_cached, equal,
    expr_satisfies, greater_equal, greater_than, less_equal, less_than, not, not_equal, or,
    rename_old, satisfies, BoolExpr, Ensures, ExprError, Invariant, MethodContract, MethodName,
    NnfCache, Rel, RelKind, Requires, State, Value, VarId,
};

pub use pretrace_graph::{
    prestates_and_preceders, transition_maps, Backward, Forward, Preceders, Prestates, StateGraph,
};

pub use pretrace_regex::{
    alter, alter_to_list, collapse_same_prefix, concat as regex_concat, concat_to_list, empty,
    last_calls, must_contain, optional, repeat, repeat_one, terminal, Regex, RegexError,
};

pub use pretrace_elim::{regex_for, regex_for_with, LogTracer, NoopTracer, Tracer};

pub use pretrace_cat::{
    abstract_trace, concat as cat_concat, event, fix_point, naive_pretrace, observation, recvar,
    statement, union, union_all, CatNode, Event as CatEvent,
};

/// Build the reachable-state graph from a state universe and a map of
/// method contracts.
///
/// Thin wrapper over [`pretrace_graph::build_graph`] that lifts its
/// [`pretrace_expr::ExprError`] into this crate's [`Error`].
pub fn build_graph(
    possible_states: &[State],
    methods: &indexmap::IndexMap<MethodName, MethodContract>,
) -> Result<StateGraph> {
    Ok(pretrace_graph::build_graph(possible_states, methods)?)
}
