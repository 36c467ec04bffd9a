//! The regex ADT, its normal-form-enforcing smart constructors, and the
//! algebraic simplifiers built on top of it (`collapse_same_prefix`,
//! `must_contain`, `last_calls`, `eliminate_optionals`).

pub mod error;
pub mod regex;
pub mod simplify;

pub use error::RegexError;
pub use regex::{
    alter, alter_to_list, concat, concat_to_list, empty, optional, repeat, repeat_one, terminal,
    Regex,
};
pub use simplify::{collapse_same_prefix, eliminate_optionals, last_calls, must_contain};
