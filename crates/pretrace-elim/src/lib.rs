//! Brzozowski-McCluskey state elimination: convert a [`pretrace_graph::StateGraph`]
//! into a single [`pretrace_regex::Regex`] describing every pre-trace that
//! ends with an invocation of a target method.

mod node;
mod ripout;
mod trace;

pub use node::{enumerate_states, Node};
pub use ripout::{regex_for, regex_for_with};
pub use trace::{LogTracer, NoopTracer, Tracer};
