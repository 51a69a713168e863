//! Criterion compilation and lexicographic sorting
//!
//! This module provides:
//! - Criteria (callable, signed, path) and their compiled evaluators
//! - Directed sort keys with per-criterion missing-value handling
//! - The composed comparator and decorate-then-sort application
//! - Partial application through [`Sorter`]

pub mod comparator;
pub mod criteria;
pub mod keys;
pub mod sorter;
pub mod utils;

pub use comparator::*;
pub use criteria::*;
pub use keys::*;
pub use sorter::*;
