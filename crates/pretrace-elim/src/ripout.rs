//! State elimination: fold a [`StateGraph`]'s transitions, for a fixed
//! starting state and target method, down into a single [`Regex`].
//!
//! This is the Brzozowski-McCluskey technique: wrap the automaton with
//! two virtual endpoints, then repeatedly "rip out" an internal node,
//! folding its self-loop, incoming, and outgoing edges into composite
//! regexes on its neighbors, until only the two endpoints remain.
//!
//! The resulting language is a *pre-trace*: every call sequence that
//! ends with `method` itself having just been invoked. Any state with an
//! outgoing edge labeled `method` reaches the virtual end node via that
//! method's own terminal (not an unlabeled `Empty` edge), so the
//! synthesized regex's accepted strings all end in the target call — see
//! `DESIGN.md` for the worked derivation.

use indexmap::IndexMap;

use pretrace_expr::{MethodName, State};
use pretrace_graph::StateGraph;
use pretrace_regex::{alter, concat, empty, repeat, terminal, Regex};

use crate::node::{enumerate_states, Node};
use crate::trace::{NoopTracer, Tracer};

/// Edge labels and adjacency for the in-progress ripout graph.
///
/// `edges` carries the regex label for every `(src, dst)` pair currently
/// present; `successors`/`predecessors` mirror its key set so that
/// "every outgoing edge of n" and "every p with an edge into n" are O(1)
/// set lookups rather than a scan over all edges. All three are kept in
/// sync by every mutating method below — this is local, single-call
/// state that must not escape `regex_for`.
struct RipoutGraph {
    edges: IndexMap<(Node, Node), Regex>,
    successors: IndexMap<Node, Vec<Node>>,
    predecessors: IndexMap<Node, Vec<Node>>,
}

impl RipoutGraph {
    fn new() -> Self {
        Self {
            edges: IndexMap::new(),
            successors: IndexMap::new(),
            predecessors: IndexMap::new(),
        }
    }

    fn get(&self, src: Node, dst: Node) -> Option<&Regex> {
        self.edges.get(&(src, dst))
    }

    /// Set the label of `src -> dst`, folding with any existing label via
    /// `alter(existing, new)` rather than overwriting it — the order the
    /// ripout step itself folds a newly eliminated path in behind
    /// whatever `src -> dst` regex already stood.
    fn fold_edge(&mut self, src: Node, dst: Node, label: Regex) {
        self.fold_edge_with(src, dst, label, |existing, new| alter(existing, new));
    }

    /// Same as [`Self::fold_edge`], but folding `alter(new, existing)` —
    /// the order label lifting combines parallel same-pair method edges
    /// in, matching the reference implementation's `graph()`.
    fn fold_edge_new_first(&mut self, src: Node, dst: Node, label: Regex) {
        self.fold_edge_with(src, dst, label, |existing, new| alter(new, existing));
    }

    fn fold_edge_with(
        &mut self,
        src: Node,
        dst: Node,
        label: Regex,
        combine: impl Fn(Regex, Regex) -> Regex,
    ) {
        let is_new = !self.edges.contains_key(&(src, dst));
        let combined = match self.edges.get(&(src, dst)) {
            Some(existing) => combine(existing.clone(), label),
            None => label,
        };
        self.edges.insert((src, dst), combined);
        if is_new {
            self.successors.entry(src).or_default().push(dst);
            self.predecessors.entry(dst).or_default().push(src);
        }
    }

    fn take_self_loop(&mut self, n: Node) -> Regex {
        match self.edges.shift_remove(&(n, n)) {
            Some(r) => {
                remove_from(&mut self.successors, n, n);
                remove_from(&mut self.predecessors, n, n);
                repeat(r)
            }
            None => empty(),
        }
    }

    /// Remove every edge touching `n` (incoming or outgoing) and delete
    /// `n` from the adjacency indices. Called once ripout of `n` is
    /// complete.
    fn delete_node(&mut self, n: Node) {
        if let Some(succs) = self.successors.shift_remove(&n) {
            for q in succs {
                self.edges.shift_remove(&(n, q));
                remove_from(&mut self.predecessors, q, n);
            }
        }
        if let Some(preds) = self.predecessors.shift_remove(&n) {
            for p in preds {
                self.edges.shift_remove(&(p, n));
                remove_from(&mut self.successors, p, n);
            }
        }
    }
}

fn remove_from(index: &mut IndexMap<Node, Vec<Node>>, key: Node, value: Node) {
    if let Some(list) = index.get_mut(&key) {
        list.retain(|x| *x != value);
    }
}

/// Convert the state graph into a regular expression over method-name
/// terminals, describing every pre-trace that starts at `initial_state`
/// and ends with `method` itself being invoked.
///
/// Returns [`Regex::Empty`] rather than failing when no state reachable
/// from `initial_state` can invoke `method` — matching the reference
/// implementation's "UnreachableTarget... should return Empty rather
/// than raising".
pub fn regex_for(graph: &StateGraph, initial_state: &State, method: &MethodName) -> Regex {
    regex_for_with(graph, initial_state, method, &mut NoopTracer)
}

/// Same as [`regex_for`], but reporting each step to `tracer` — see
/// [`crate::trace::Tracer`].
pub fn regex_for_with<T: Tracer>(
    graph: &StateGraph,
    initial_state: &State,
    method: &MethodName,
    tracer: &mut T,
) -> Regex {
    let states = enumerate_states(graph);
    let index_of: IndexMap<&State, usize> =
        states.iter().enumerate().map(|(i, s)| (s, i)).collect();

    tracer.trace_start(states.len());

    let mut rg = RipoutGraph::new();

    // Label lifting: fold same-pair parallel edges via `alter(new, existing)`.
    for (src, transitions) in graph {
        let src_node = Node::State(index_of[src]);
        for (name, dests) in transitions {
            for dest in dests {
                let dst_node = Node::State(index_of[dest]);
                rg.fold_edge_new_first(src_node, dst_node, terminal(name.clone()));
            }
        }
    }

    // Virtual endpoints: S reaches the starting state unconditionally;
    // any state with an outgoing edge labeled `method` reaches E via that
    // method's own terminal, so the synthesized language ends in the
    // target invocation itself, not merely in a state able to make it.
    if let Some(&i) = index_of.get(initial_state) {
        rg.fold_edge(Node::Start, Node::State(i), empty());
    }
    for (src, transitions) in graph {
        if transitions.contains_key(method) {
            let src_node = Node::State(index_of[src]);
            rg.fold_edge(src_node, Node::End, terminal(method.clone()));
        }
    }

    // Ripout, in the state graph's own insertion order (the source notes
    // that reverse order produces markedly longer expressions).
    for state in &states {
        let n = Node::State(index_of[state]);
        if !rg.successors.contains_key(&n) && !rg.predecessors.contains_key(&n) {
            continue;
        }

        let r_self = rg.take_self_loop(n);
        tracer.trace_eliminate(
            state,
            if matches!(r_self, Regex::Empty) {
                None
            } else {
                Some(&r_self)
            },
        );

        let preds: Vec<Node> = rg.predecessors.get(&n).cloned().unwrap_or_default();
        let succs: Vec<Node> = rg.successors.get(&n).cloned().unwrap_or_default();

        for &p in &preds {
            let r_in = rg.get(p, n).cloned().unwrap_or_else(empty);
            for &q in &succs {
                let r_out = rg.get(n, q).cloned().unwrap_or_else(empty);
                let r_new = concat(concat(r_in.clone(), r_self.clone()), r_out);
                rg.fold_edge(p, q, r_new);
            }
        }

        rg.delete_node(n);
    }

    let result = rg.get(Node::Start, Node::End).cloned().unwrap_or_else(empty);
    tracer.trace_done(&result);
    result
}
