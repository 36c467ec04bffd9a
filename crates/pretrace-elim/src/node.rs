//! Node identifiers for the ripout graph.
//!
//! The elimination graph carries two virtual endpoints (`Start`/`End`) in
//! addition to the state-graph's own states. States are addressed by
//! their position in a deterministic, insertion-ordered enumeration
//! rather than by `State` value directly, so the ripout graph's edge
//! maps can use a cheap `Copy` key instead of cloning `State` tuples on
//! every lookup.

use indexmap::IndexSet;

use pretrace_expr::State;
use pretrace_graph::StateGraph;

/// A node in the ripout graph: one of the two virtual endpoints, or a
/// state from the underlying state graph (identified by index into
/// [`enumerate_nodes`]'s output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Start,
    End,
    State(usize),
}

/// Enumerate every state appearing as a source or destination in
/// `graph`, in first-appearance order (sources before their
/// destinations, destinations in per-method, per-edge order) — the same
/// determinism the rest of the pipeline relies on insertion-ordered maps
/// for.
pub fn enumerate_states(graph: &StateGraph) -> Vec<State> {
    let mut seen = IndexSet::new();
    for (src, transitions) in graph {
        seen.insert(src.clone());
        for dests in transitions.values() {
            for dest in dests {
                seen.insert(dest.clone());
            }
        }
    }
    seen.into_iter().collect()
}
