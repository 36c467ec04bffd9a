//! State-graph construction over method contracts, and the reverse
//! indices the state-elimination and CAT-synthesis stages need.

pub mod graph;
pub mod indices;
pub mod util;

pub use graph::{build_graph, build_graph_with, StateGraph};
pub use indices::{
    prestates_and_preceders, transition_maps, Backward, Forward, Preceders, Prestates,
};
