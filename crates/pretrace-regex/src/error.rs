//! Error taxonomy for the regex layer.

/// Raised only by code that bypasses the smart constructors to build a
/// [`crate::regex::Regex`] directly (`pretrace-elim`'s ripout algorithm
/// mutates an adjacency map of regexes in place, for instance, though it
/// always goes through `concat`/`alter` rather than the bare variants).
/// The smart constructors can never produce a value that violates the
/// right-associative normal form, so this variant should be unreachable
/// in practice; it exists because the normal form is a stated contract,
/// not merely an accident of how the constructors happen to behave.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RegexError {
    #[error("regex normal form violated: left child of {context} was itself a {context}")]
    NormalFormViolation { context: &'static str },
}
