//! The call-algebra term ("CAT") ADT and naïve pre-trace synthesis.
//!
//! `naive_pretrace` is deliberately the *only* producer of `CatNode`
//! values in this pipeline: it builds a symbolic, non-simplified
//! approximation of "what could have just happened" directly from the
//! state graph's reverse indices, bypassing regex synthesis entirely.

pub mod node;
pub mod synth;

pub use node::{
    abstract_trace, concat, event, fix_point, observation, recvar, statement, union, union_all,
    CatNode, Event,
};
pub use synth::naive_pretrace;
