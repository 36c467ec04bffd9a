//! The regex ADT and its normal-form-enforcing smart constructors.

use std::fmt;
use std::rc::Rc;

/// A regular expression over method-name terminals.
///
/// `Concat`/`Alter` hold their children behind `Rc`, mirroring the boolean
/// expression algebra's choice: the simplification passes clone
/// subexpressions freely and structural equality must still see through
/// the indirection.
///
/// Two invariants are enforced by construction, never by a validator
/// afterward: `Concat(l, _)` never holds another `Concat` as `l`, and
/// `Alter(l, _)` never holds another `Alter` as `l` — both chains are
/// kept right-associative. There is therefore no public way to build a
/// value that violates the invariant; see [`crate::error::RegexError`]
/// for why the error variant still exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Regex {
    Empty,
    Terminal(Rc<str>),
    Concat(Rc<Regex>, Rc<Regex>),
    Alter(Rc<Regex>, Rc<Regex>),
    Repeat(Rc<Regex>),
    RepeatOne(Rc<Regex>),
    Optional(Rc<Regex>),
}

// ---- smart constructors -------------------------------------------------

pub fn empty() -> Regex {
    Regex::Empty
}

pub fn terminal(name: impl Into<Rc<str>>) -> Regex {
    Regex::Terminal(name.into())
}

pub fn repeat(e: Regex) -> Regex {
    match e {
        Regex::Empty | Regex::Repeat(_) => e,
        Regex::Optional(a) | Regex::RepeatOne(a) => Regex::Repeat(a),
        _ => Regex::Repeat(Rc::new(e)),
    }
}

pub fn repeat_one(e: Regex) -> Regex {
    match e {
        Regex::Empty | Regex::Repeat(_) | Regex::RepeatOne(_) => e,
        Regex::Optional(a) => repeat(a.as_ref().clone()),
        _ => Regex::RepeatOne(Rc::new(e)),
    }
}

pub fn optional(e: Regex) -> Regex {
    match e {
        Regex::Empty | Regex::Repeat(_) | Regex::Optional(_) => e,
        Regex::RepeatOne(a) => repeat(a.as_ref().clone()),
        _ => Regex::Optional(Rc::new(e)),
    }
}

pub fn concat(l: Regex, r: Regex) -> Regex {
    match (l, r) {
        (Regex::Empty, x) | (x, Regex::Empty) => x,
        (Regex::Concat(cl, cr), x) => concat((*cl).clone(), concat((*cr).clone(), x)),
        (l, r) => Regex::Concat(Rc::new(l), Rc::new(r)),
    }
}

pub fn alter(l: Regex, r: Regex) -> Regex {
    if l == r {
        return l;
    }
    match (l, r) {
        (Regex::Empty, Regex::Empty) => Regex::Empty,
        (Regex::Alter(al, ar), x) => alter((*al).clone(), alter((*ar).clone(), x)),
        (l, r) => Regex::Alter(Rc::new(l), Rc::new(r)),
    }
}

/// Apply `f` to every immediate child and re-fold through the smart
/// constructors, re-simplifying the result.
pub(crate) fn pass_on(f: impl Fn(&Regex) -> Regex, regex: &Regex) -> Regex {
    match regex {
        Regex::Empty | Regex::Terminal(_) => regex.clone(),
        Regex::Repeat(a) => repeat(f(a)),
        Regex::RepeatOne(a) => repeat_one(f(a)),
        Regex::Optional(a) => optional(f(a)),
        Regex::Alter(l, r) => alter(f(l), f(r)),
        Regex::Concat(l, r) => concat(f(l), f(r)),
    }
}

/// Linearize a right-associative `Concat` chain into its factors.
pub fn concat_to_list(regex: &Regex) -> Vec<Regex> {
    match regex {
        Regex::Concat(l, r) => {
            let mut out = vec![(**l).clone()];
            out.extend(concat_to_list(r));
            out
        }
        other => vec![other.clone()],
    }
}

/// Linearize a right-associative `Alter` chain into its alternatives.
pub fn alter_to_list(regex: &Regex) -> Vec<Regex> {
    match regex {
        Regex::Alter(l, r) => {
            let mut out = vec![(**l).clone()];
            out.extend(alter_to_list(r));
            out
        }
        other => vec![other.clone()],
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regex::Empty => write!(f, "ε"),
            Regex::Terminal(name) => write!(f, "{name}"),
            Regex::Concat(l, r) => match (l.as_ref(), r.as_ref()) {
                (Regex::Alter(al, ar), right) => write!(f, "({al} | {ar}) {right}"),
                (left, Regex::Alter(al, ar)) => write!(f, "{left} ({al} | {ar})"),
                (left, right) => write!(f, "{left} {right}"),
            },
            Regex::Alter(l, r) => write!(f, "{l} | {r}"),
            Regex::Repeat(e) => match e.as_ref() {
                Regex::Terminal(name) => write!(f, "{name}*"),
                e => write!(f, "({e})*"),
            },
            Regex::RepeatOne(e) => match e.as_ref() {
                Regex::Terminal(name) => write!(f, "{name}+"),
                e => write!(f, "({e})+"),
            },
            Regex::Optional(e) => match e.as_ref() {
                Regex::Terminal(name) => write!(f, "{name}?"),
                e => write!(f, "({e})?"),
            },
        }
    }
}
