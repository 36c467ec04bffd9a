//! Reverse indices over a [`StateGraph`], each built in one linear pass.

use indexmap::{IndexMap, IndexSet};

use pretrace_expr::{MethodName, State};

use crate::graph::StateGraph;
use crate::util::set_add;

/// `forward[method][src]` = destinations reachable from `src` via `method`.
pub type Forward = IndexMap<MethodName, IndexMap<State, IndexSet<State>>>;
/// `backward[method][dest]` = sources that reach `dest` via `method`.
pub type Backward = IndexMap<MethodName, IndexMap<State, IndexSet<State>>>;

/// Build both the forward and backward per-method transition maps.
pub fn transition_maps(graph: &StateGraph) -> (Forward, Backward) {
    let mut forward: Forward = IndexMap::new();
    let mut backward: Backward = IndexMap::new();

    for (src, transitions) in graph {
        for (method, dests) in transitions {
            for dest in dests {
                set_add(forward.entry(method.clone()).or_default(), src.clone(), dest.clone());
                set_add(backward.entry(method.clone()).or_default(), dest.clone(), src.clone());
            }
        }
    }

    (forward, backward)
}

/// `prestates[method]` = every state `method` can fire from.
pub type Prestates = IndexMap<MethodName, IndexSet<State>>;
/// `preceders[state]` = every method that can produce `state` as a poststate.
pub type Preceders = IndexMap<State, IndexSet<MethodName>>;

/// Build both the prestate and preceder indices.
pub fn prestates_and_preceders(graph: &StateGraph) -> (Prestates, Preceders) {
    let mut prestates: Prestates = IndexMap::new();
    let mut preceders: Preceders = IndexMap::new();

    for (src, transitions) in graph {
        for (method, dests) in transitions {
            set_add(&mut prestates, method.clone(), src.clone());
            for dest in dests {
                set_add(&mut preceders, dest.clone(), method.clone());
            }
        }
    }

    (prestates, preceders)
}
