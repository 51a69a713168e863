//! Configuration and command-line front end for `multisort`.
//!
//! [`SortConfig`] is loaded from a TOML or JSON file, an inline JSON
//! environment variable, or defaults; [`runner`] applies it to a JSON
//! document. The `multisort` binary ties both to the command line.

pub mod env;
pub mod models;
pub mod runner;

pub use env::load_env_file;
pub use models::{SortConfig, SortConfigSource};
pub use runner::{render, run, sort_document};
