//! State-graph construction from a state universe and a set of method
//! contracts.

use indexmap::IndexMap;

use pretrace_expr::{satisfies, BoolExpr, ExprError, MethodContract, MethodName, State};

/// Adjacency map `state -> method -> destination states`.
///
/// Built once per program and read-only afterward. Iteration order over
/// the outer map follows insertion order — the order `possible_states`
/// and `methods` were given in — which the state-elimination algorithm
/// downstream depends on for reproducible regex output.
pub type StateGraph = IndexMap<State, IndexMap<MethodName, Vec<State>>>;

/// Build the state graph using [`pretrace_expr::satisfies`] as the
/// satisfaction predicate.
pub fn build_graph(
    possible_states: &[State],
    methods: &IndexMap<MethodName, MethodContract>,
) -> Result<StateGraph, ExprError> {
    build_graph_with(possible_states, methods, satisfies)
}

/// Build the state graph using a caller-supplied satisfaction predicate —
/// the "optional custom satisfies" hook.
pub fn build_graph_with<F>(
    possible_states: &[State],
    methods: &IndexMap<MethodName, MethodContract>,
    satisfies: F,
) -> Result<StateGraph, ExprError>
where
    F: Fn(&State, &BoolExpr, Option<&State>) -> Result<bool, ExprError>,
{
    let mut graph: StateGraph = IndexMap::new();

    for (name, contract) in methods {
        let pre = contract.pre();
        let post = contract.post();

        let transitions: Vec<(State, State)> = if !post.contains_old() {
            let pres = satisfying_states(possible_states, pre, &satisfies)?;
            let posts = satisfying_states(possible_states, post, &satisfies)?;
            pres
                .into_iter()
                .flat_map(|p| posts.iter().map(move |q| (p.clone(), q.clone())))
                .collect()
        } else {
            let pres = satisfying_states(possible_states, pre, &satisfies)?;
            let mut out = Vec::new();
            for p in &pres {
                for t in possible_states {
                    if satisfies(t, post, Some(p))? {
                        out.push((p.clone(), t.clone()));
                    }
                }
            }
            out
        };

        for (pre_state, post_state) in transitions {
            graph
                .entry(pre_state)
                .or_default()
                .entry(name.clone())
                .or_default()
                .push(post_state);
        }
    }

    Ok(graph)
}

fn satisfying_states<'s, F>(
    states: &'s [State],
    expr: &BoolExpr,
    satisfies: &F,
) -> Result<Vec<&'s State>, ExprError>
where
    F: Fn(&State, &BoolExpr, Option<&State>) -> Result<bool, ExprError>,
{
    let mut out = Vec::new();
    for s in states {
        if satisfies(s, expr, None)? {
            out.push(s);
        }
    }
    Ok(out)
}
