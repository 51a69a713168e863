//! # multisort
//!
//! Compiles a list of heterogeneous sort criteria into one comparator.
//!
//! A criterion is one of:
//!
//! - a **callable** mapping an item to an orderable [`Value`] (ascending);
//! - a **signed number**: the item's own natural order, descending when
//!   negative;
//! - a **path string** in a small DSL: `"~name.last"`, `".fame"`,
//!   `"say.catchphrase(3)"`, `"retired?"`.
//!
//! ## Path DSL
//!
//! Applied in this order, each part optional:
//!
//! 1. a leading `!` or `~` inverts the order;
//! 2. one leading `.` is ignored;
//! 3. a trailing `?` compares presence (`true` unless null/absent) instead
//!    of the value;
//! 4. the rest is a dotted path. A segment `name(args)` calls method `name`
//!    with JSON scalar arguments. The empty path is the item itself.
//!
//! Criteria compose lexicographically: the first criterion that
//! distinguishes two items decides. Null and absent values tie with each
//! other and compare below any present value, so they lead an ascending
//! key and trail an inverted one.
//!
//! ## Examples
//!
//! ```
//! use multisort_core::{sort, sorter, Criterion};
//! use serde_json::json;
//!
//! let mut hosts = vec![
//!     json!({"name": {"last": "Sajak"}, "fame": 2}),
//!     json!({"name": {"last": "Trebek"}, "fame": 3}),
//!     json!({"name": {"last": "Barker"}, "fame": 2}),
//! ];
//! sort(&mut hosts, ["~fame", "name.last"])?;
//! assert_eq!(hosts[0]["name"]["last"], "Trebek");
//! assert_eq!(hosts[1]["name"]["last"], "Barker");
//!
//! let by_parity = sorter(vec![
//!     Criterion::by(|n: &i64| n % 2),
//!     Criterion::signed(-1.0),
//! ]);
//! let mut numbers = vec![1, 2, 3, 4];
//! by_parity.sort(&mut numbers)?;
//! assert_eq!(numbers, vec![4, 2, 3, 1]);
//! # Ok::<(), multisort_core::SortError>(())
//! ```

pub mod error;
pub mod path;
pub mod sorting;

pub use error::{ResolveError, Result, SortError};
pub use multisort_model::{Inspect, Literal, LookupError, Method, Value};
pub use path::{FieldPath, Step, evaluate, evaluate_str};
pub use sorting::{
    Comparator, Criteria, Criterion, DirectedKey, Evaluator, Extractor,
    SortKeys, Sorter, compile, compile_json, sort, sorter,
};
