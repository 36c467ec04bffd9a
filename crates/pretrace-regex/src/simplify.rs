//! Algebraic regex simplifiers used to summarize what a regex can and
//! must contain, without fully enumerating its language.

use std::collections::HashSet;

use crate::regex::{alter, alter_to_list, concat, empty, pass_on, Regex};

/// Delete every starred/optional subexpression, keeping only what every
/// accepted string is guaranteed to contain.
pub fn eliminate_optionals(regex: &Regex) -> Regex {
    match regex {
        Regex::Repeat(_) | Regex::Optional(_) => empty(),
        Regex::RepeatOne(a) => eliminate_optionals(a),
        Regex::Concat(l, rest) if matches!(l.as_ref(), Regex::Repeat(_) | Regex::Optional(_)) => {
            eliminate_optionals(rest)
        }
        _ => pass_on(eliminate_optionals, regex),
    }
}

/// Factor a common prefix or suffix out of a top-level alternation, once
/// (not a fixed-point pass).
pub fn collapse_same_prefix(regex: &Regex) -> Regex {
    use crate::regex::optional;

    if let Regex::Alter(l, rest) = regex {
        if matches!(l.as_ref(), Regex::Empty) {
            return optional(collapse_same_prefix(rest));
        }
        if let Regex::Concat(b, rest_tail) = rest.as_ref() {
            let a = collapse_same_prefix(l);
            let b = collapse_same_prefix(b);
            let rest_tail = collapse_same_prefix(rest_tail);
            return if a == b {
                concat(a, optional(rest_tail))
            } else {
                alter(a, concat(b, rest_tail))
            };
        }
        if let Regex::Concat(rest_head, a) = l.as_ref() {
            let a = collapse_same_prefix(a);
            let b = collapse_same_prefix(rest);
            let rest_head = collapse_same_prefix(rest_head);
            return if a == b {
                concat(optional(rest_head), a)
            } else {
                alter(concat(rest_head, a), b)
            };
        }
    }
    pass_on(collapse_same_prefix, regex)
}

/// The set of alternative "skeletons" every accepted string must match
/// one of, after stripping everything optional.
pub fn must_contain(regex: &Regex) -> HashSet<Regex> {
    let regex = eliminate_optionals(regex);
    let regex = collapse_same_prefix(&regex);
    let regex = eliminate_optionals(&regex);
    alter_to_list(&regex).into_iter().collect()
}

/// The set of terminals that could legitimately end an accepted trace.
pub fn last_calls(regex: &Regex) -> HashSet<Regex> {
    let regex = eliminate_optionals(regex);
    alter_to_list(&last_calls_aux(&regex)).into_iter().collect()
}

fn last_calls_aux(r: &Regex) -> Regex {
    match r {
        Regex::Empty | Regex::Terminal(_) => r.clone(),
        Regex::Repeat(_) | Regex::Optional(_) => empty(),
        Regex::RepeatOne(a) => last_calls_aux(a),
        Regex::Concat(_, rest) => last_calls_aux(rest),
        Regex::Alter(l, rest) => alter(last_calls_aux(l), last_calls_aux(rest)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regex::{concat, optional, repeat, terminal};

    fn t(name: &str) -> Regex {
        terminal(name)
    }

    #[test]
    fn eliminate_optionals_drops_stars_and_question_marks() {
        assert_eq!(eliminate_optionals(&repeat(t("a"))), empty());
        assert_eq!(eliminate_optionals(&optional(t("a"))), empty());
        assert_eq!(
            eliminate_optionals(&concat(repeat(t("a")), t("b"))),
            t("b")
        );
    }

    #[test]
    fn eliminate_optionals_unwraps_plus() {
        assert_eq!(
            eliminate_optionals(&crate::regex::repeat_one(t("a"))),
            t("a")
        );
    }

    #[test]
    fn collapse_same_prefix_factors_shared_leading_terminal() {
        let r = alter(t("a"), concat(t("a"), t("b")));
        assert_eq!(collapse_same_prefix(&r), concat(t("a"), optional(t("b"))));
    }

    #[test]
    fn collapse_same_prefix_factors_shared_trailing_terminal() {
        let r = alter(concat(t("b"), t("a")), t("a"));
        assert_eq!(collapse_same_prefix(&r), concat(optional(t("b")), t("a")));
    }

    #[test]
    fn collapse_same_prefix_turns_empty_branch_into_optional() {
        let r = alter(empty(), t("a"));
        assert_eq!(collapse_same_prefix(&r), optional(t("a")));
    }

    #[test]
    fn must_contain_strips_optional_alternatives() {
        let r = alter(t("a"), concat(t("a"), t("b")));
        let result = must_contain(&r);
        assert_eq!(result, HashSet::from([t("a")]));
    }

    #[test]
    fn last_calls_picks_rightmost_terminal_per_alternative() {
        let r = alter(concat(t("a"), t("b")), t("c"));
        let result = last_calls(&r);
        assert_eq!(result, HashSet::from([t("b"), t("c")]));
    }

    #[test]
    fn last_calls_strips_trailing_star() {
        let r = concat(t("a"), repeat(t("b")));
        let result = last_calls(&r);
        assert_eq!(result, HashSet::from([t("a")]));
    }
}
