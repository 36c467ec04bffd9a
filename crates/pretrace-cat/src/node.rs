//! The CAT ("call-algebra term") ADT and its rendering.
//!
//! Mirrors [`pretrace_regex::Regex`]'s shape: a handful of tagged variants
//! held behind `Rc` so the synthesis pass can clone subexpressions freely
//! while keeping structural `Eq`/`Hash`. Unlike `Regex`, there is no
//! normal-form invariant to enforce at construction time — CAT terms are
//! built once by [`crate::synth::naive_pretrace`] and never simplified
//! afterward, so plain tuple-struct variants suffice.

use std::fmt;
use std::rc::Rc;

use pretrace_expr::{BoolExpr, MethodName};

/// An event name together with its (method-name) arguments, e.g. `pop(placeBet)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Event {
    pub event_type: Rc<str>,
    pub args: Vec<MethodName>,
}

impl Event {
    pub fn new(event_type: impl Into<Rc<str>>, args: impl IntoIterator<Item = MethodName>) -> Self {
        Self {
            event_type: event_type.into(),
            args: args.into_iter().collect(),
        }
    }

    /// `Event("pop", [method])` — the one shape [`crate::synth::naive_pretrace`] emits.
    pub fn pop(method: MethodName) -> Self {
        Self::new("pop", [method])
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.event_type)?;
        for (i, a) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{a}")?;
        }
        write!(f, ")")
    }
}

/// A call-algebra term.
///
/// `FixPoint`/`Recvar`/`Statement`/`Observation` are constructible and
/// renderable — the type is complete — but [`crate::synth::naive_pretrace`]
/// never produces them: it only ever builds `Union`, `Concat`, `Event`,
/// and `AbstractTrace` nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CatNode {
    Union(Rc<CatNode>, Rc<CatNode>),
    Concat(Rc<CatNode>, Rc<CatNode>),
    Recvar(Rc<str>),
    FixPoint(Rc<CatNode>, Rc<CatNode>),
    Event(Event),
    /// Abstract unobserved activity, excluding the listed methods — these
    /// are the methods the pipeline *does* model, so "excluded" here means
    /// "excluded from the abstraction", not "forbidden from occurring".
    AbstractTrace(Vec<MethodName>),
    Observation(Vec<(MethodName, MethodName)>, BoolExpr),
    Statement(BoolExpr),
}

// ---- smart-ish constructors ---------------------------------------------
//
// Unlike Regex/BoolExpr there's no algebraic normal form to maintain here,
// so these are thin wrappers, not simplifying smart constructors.

pub fn union(l: CatNode, r: CatNode) -> CatNode {
    CatNode::Union(Rc::new(l), Rc::new(r))
}

pub fn concat(l: CatNode, r: CatNode) -> CatNode {
    CatNode::Concat(Rc::new(l), Rc::new(r))
}

pub fn recvar(name: impl Into<Rc<str>>) -> CatNode {
    CatNode::Recvar(name.into())
}

pub fn fix_point(var: CatNode, body: CatNode) -> CatNode {
    CatNode::FixPoint(Rc::new(var), Rc::new(body))
}

pub fn event(e: Event) -> CatNode {
    CatNode::Event(e)
}

pub fn abstract_trace(excluded: impl IntoIterator<Item = MethodName>) -> CatNode {
    CatNode::AbstractTrace(excluded.into_iter().collect())
}

pub fn observation(mappings: Vec<(MethodName, MethodName)>, statement: BoolExpr) -> CatNode {
    CatNode::Observation(mappings, statement)
}

pub fn statement(expr: BoolExpr) -> CatNode {
    CatNode::Statement(expr)
}

/// Fold a non-empty sequence of nodes left-to-right with [`union`].
///
/// Panics on an empty iterator — callers (method-pop synthesis) only ever
/// fold a non-empty set of preceding methods; an empty set means the
/// method has no reachable prestate at all, a condition the caller checks
/// before reaching for this helper.
pub fn union_all(nodes: impl IntoIterator<Item = CatNode>) -> CatNode {
    let mut iter = nodes.into_iter();
    let first = iter.next().expect("union_all requires at least one node");
    iter.fold(first, union)
}

impl fmt::Display for CatNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatNode::Union(l, r) => write!(f, "{l} ∨ {r}"),
            CatNode::Concat(l, r) => {
                let elide = matches!(l.as_ref(), CatNode::AbstractTrace(_))
                    || matches!(r.as_ref(), CatNode::AbstractTrace(_));
                if elide {
                    write!(f, "{} {}", Paren(l), Paren(r))
                } else {
                    write!(f, "{} ⋅ {}", Paren(l), Paren(r))
                }
            }
            CatNode::Recvar(name) => write!(f, "{name}"),
            CatNode::FixPoint(var, body) => write!(f, "μ{var}.({body})"),
            CatNode::Event(e) => write!(f, "{e}"),
            CatNode::AbstractTrace(excluded) => {
                write!(f, "⋅⋅")?;
                if !excluded.is_empty() {
                    write!(f, "excl{{")?;
                    for (i, m) in excluded.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{m}")?;
                    }
                    write!(f, "}}")?;
                }
                Ok(())
            }
            CatNode::Observation(mappings, stmt) => {
                write!(f, "℧{{")?;
                for (i, (k, v)) in mappings.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}.⌈{stmt}⌉")
            }
            CatNode::Statement(expr) => write!(f, "⌈{expr}⌉"),
        }
    }
}

/// Wraps a node's `Display` in parentheses whenever it's a composite
/// `Union`/`Concat` — the `paren=True` recursive-call parameter of the
/// reference renderer, made explicit as a wrapper type instead of a
/// formatting flag threaded through every call.
struct Paren<'a>(&'a CatNode);

impl fmt::Display for Paren<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            CatNode::Union(..) | CatNode::Concat(..) => write!(f, "({})", self.0),
            other => write!(f, "{other}"),
        }
    }
}
