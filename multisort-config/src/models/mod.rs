pub mod sort;

pub use sort::{SortConfig, SortConfigSource};
