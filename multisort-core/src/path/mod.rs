//! Dotted field paths: parsing and evaluation.
//!
//! A path is a `.`-separated list of segments. A segment is either a member
//! name (`first`) or a method call with JSON scalar arguments
//! (`catchphrase(3)`, `includes("x")`).

pub mod evaluator;
pub mod parser;

pub use evaluator::{evaluate, evaluate_str};
pub use parser::{FieldPath, Step};
