//! JML-style method contracts: a precondition and a postcondition over
//! ghost state, keyed by method name.

use std::rc::Rc;

use crate::boolexpr::BoolExpr;

/// A method's display name, as it appears in contracts, traces, and
/// rendered regexes/CAT terms.
///
/// `Rc<str>` rather than an interned [`crate::interner`]-style symbol: the
/// corpus this pipeline operates on is a handful of methods per object,
/// never large enough for interning's lookup-table overhead to pay for
/// itself, and `Rc<str>` clones are already just a refcount bump.
pub type MethodName = Rc<str>;

/// A method's precondition: a boolean expression over the prestate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Requires(pub BoolExpr);

/// A method's postcondition: a boolean expression over the poststate,
/// which may additionally reference the prestate through `Old` terms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ensures(pub BoolExpr);

/// A class invariant: a boolean expression that must hold in every
/// reachable state, independent of any particular method.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Invariant(pub BoolExpr);

/// The full require/ensure contract for one method.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodContract {
    pub name: MethodName,
    pub requires: Requires,
    pub ensures: Ensures,
}

impl MethodContract {
    pub fn new(name: impl Into<MethodName>, requires: BoolExpr, ensures: BoolExpr) -> Self {
        Self {
            name: name.into(),
            requires: Requires(requires),
            ensures: Ensures(ensures),
        }
    }

    pub fn pre(&self) -> &BoolExpr {
        &self.requires.0
    }

    pub fn post(&self) -> &BoolExpr {
        &self.ensures.0
    }
}
