//! Naïve pre-trace synthesis: for each method, a CAT term describing
//! "some preceding method popped, then arbitrary unmodeled activity" —
//! built directly from the state graph's reverse indices, without going
//! through regex synthesis at all.

use indexmap::IndexMap;

use pretrace_expr::{MethodName, State};
use pretrace_graph::{prestates_and_preceders, StateGraph};

use crate::node::{abstract_trace, concat, event, union, union_all, CatNode, Event};

/// For every method in `method_names`, build its naïve pre-trace:
/// `pop(m') ⋅ ⋅⋅excl[methods]` unioned over every method `m'` that can
/// precede it, additionally unioned with a bare `⋅⋅excl[methods]` branch
/// when `initial_state` is itself one of the method's prestates (the
/// method could be the very first call).
///
/// Methods with no reachable prestate at all (absent from the graph)
/// are omitted from the result — there is no non-vacuous pre-trace to
/// synthesize for them.
pub fn naive_pretrace(
    graph: &StateGraph,
    method_names: &[MethodName],
    initial_state: &State,
) -> IndexMap<MethodName, CatNode> {
    let (prestates, preceders) = prestates_and_preceders(graph);
    let mut result = IndexMap::new();

    for method in method_names {
        let Some(m_pres) = prestates.get(method) else {
            continue;
        };

        let mut pops: Vec<MethodName> = Vec::new();
        for pre in m_pres {
            if let Some(methods) = preceders.get(pre) {
                for m in methods {
                    if !pops.contains(m) {
                        pops.push(m.clone());
                    }
                }
            }
        }

        let exclude_all = || abstract_trace(method_names.iter().cloned());

        let pretrace = if pops.is_empty() {
            // no method can precede this one at all; the only non-vacuous
            // branch left is "this was the first call".
            exclude_all()
        } else {
            let pop_expr = union_all(pops.into_iter().map(|m| event(Event::pop(m))));
            concat(pop_expr, exclude_all())
        };

        let pretrace = if m_pres.contains(initial_state) {
            union(exclude_all(), pretrace)
        } else {
            pretrace
        };

        result.insert(method.clone(), pretrace);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap as Map;
    use pretrace_expr::{equal, not_equal, MethodContract, Value};
    use pretrace_graph::build_graph;

    fn casino_graph_and_methods() -> (StateGraph, Vec<MethodName>) {
        let states = vec![State::from([0]), State::from([1]), State::from([2])];
        let mut methods: Map<MethodName, MethodContract> = Map::new();
        methods.insert(
            "removeFromPot".into(),
            MethodContract::new(
                "removeFromPot",
                not_equal(Value::Variable(0), 2),
                equal(Value::Variable(0), Value::Old(0)),
            ),
        );
        methods.insert(
            "createGame".into(),
            MethodContract::new("createGame", equal(Value::Variable(0), 0), equal(Value::Variable(0), 1)),
        );
        methods.insert(
            "placeBet".into(),
            MethodContract::new("placeBet", equal(Value::Variable(0), 1), equal(Value::Variable(0), 2)),
        );
        methods.insert(
            "decideBet".into(),
            MethodContract::new("decideBet", equal(Value::Variable(0), 2), equal(Value::Variable(0), 0)),
        );
        let names: Vec<MethodName> = methods.keys().cloned().collect();
        (build_graph(&states, &methods).unwrap(), names)
    }

    #[test]
    fn create_game_pretrace_includes_pop_decide_bet_and_bare_abstract_trace() {
        let (graph, names) = casino_graph_and_methods();
        let result = naive_pretrace(&graph, &names, &State::from([0]));
        let cg = result.get("createGame").unwrap().to_string();
        assert!(cg.contains("pop(decideBet)"));
        assert!(cg.contains("⋅⋅excl{"));
        // the bare-abstract-trace branch only appears because IDLE (0) is
        // createGame's sole prestate and also the initial state.
        assert!(cg.starts_with("⋅⋅excl{"));
    }

    #[test]
    fn place_bet_pretrace_has_no_bare_branch_since_its_prestate_is_not_initial() {
        let (graph, names) = casino_graph_and_methods();
        let result = naive_pretrace(&graph, &names, &State::from([0]));
        let pb = result.get("placeBet").unwrap().to_string();
        assert!(pb.contains("pop(createGame)"));
        assert!(!pb.starts_with("⋅⋅excl{"));
    }

    #[test]
    fn excluded_set_is_every_listed_method_name() {
        let (graph, names) = casino_graph_and_methods();
        let result = naive_pretrace(&graph, &names, &State::from([0]));
        let decide = result.get("decideBet").unwrap();
        match decide {
            CatNode::Concat(_, rest) => match rest.as_ref() {
                CatNode::AbstractTrace(excluded) => {
                    assert_eq!(excluded.len(), names.len());
                }
                other => panic!("expected AbstractTrace, got {other:?}"),
            },
            other => panic!("expected Concat, got {other:?}"),
        }
    }
}
