//! Dynamic value model for multisort.
//!
//! Sort criteria written as path strings walk untyped data: they read
//! members by name and call methods with literal arguments. This crate
//! defines what they walk over:
//!
//! - [`Value`]: an untyped value with a total sort order across kinds
//! - [`Literal`]: the scalar arguments an invocation step may pass
//! - [`Inspect`]: the lookup/invoke capability items expose to paths
//! - [`LookupError`]: why a lookup or call could not be satisfied
#![allow(missing_docs)]

mod builtins;
pub mod error;
pub mod inspect;
mod json;
pub mod literal;
pub mod value;

pub use error::{LookupError, Result};
pub use inspect::Inspect;
pub use literal::{Literal, NotAScalar};
pub use value::{Method, MethodFn, Value};
