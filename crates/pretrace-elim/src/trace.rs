//! Tracing hooks for state elimination: a plain trait with one method
//! per event of interest, a `NoopTracer` whose methods are
//! `#[inline(always)]` no-ops the compiler erases entirely, and a
//! generic `..._with<T: Tracer>` entry point that callers who want
//! observability swap a real tracer into.
//!
//! This exists because ripout order is *observably* significant —
//! reverse insertion order produces markedly longer regexes — so a
//! tracer lets a caller watch the regex grow at each node elimination
//! without the library reaching for a logging crate the rest of this
//! pipeline has no other use for.

use pretrace_expr::State;
use pretrace_regex::Regex;

/// Observes one run of [`crate::regex_for_with`].
pub trait Tracer {
    /// Called once, before ripout begins, with the number of states
    /// carried into the elimination graph (including any unreachable
    /// from `initial_state` — ripout still visits them if they have
    /// edges at all).
    fn trace_start(&mut self, state_count: usize);

    /// Called immediately before eliminating `state`, with its self-loop
    /// regex if one was folded (`None` if the state had no self-loop).
    fn trace_eliminate(&mut self, state: &State, self_loop: Option<&Regex>);

    /// Called once, after ripout completes, with the final `Start -> End`
    /// regex (the same value `regex_for` returns).
    fn trace_done(&mut self, result: &Regex);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_start(&mut self, _state_count: usize) {}

    #[inline(always)]
    fn trace_eliminate(&mut self, _state: &State, _self_loop: Option<&Regex>) {}

    #[inline(always)]
    fn trace_done(&mut self, _result: &Regex) {}
}

/// Tracer that records one line of text per event, for tests and
/// debugging.
#[derive(Default)]
pub struct LogTracer {
    pub lines: Vec<String>,
}

impl Tracer for LogTracer {
    fn trace_start(&mut self, state_count: usize) {
        self.lines.push(format!("start: {state_count} states"));
    }

    fn trace_eliminate(&mut self, state: &State, self_loop: Option<&Regex>) {
        match self_loop {
            Some(r) => self.lines.push(format!("eliminate {state}: self-loop {r}")),
            None => self.lines.push(format!("eliminate {state}: no self-loop")),
        }
    }

    fn trace_done(&mut self, result: &Regex) {
        self.lines.push(format!("done: {result}"));
    }
}
