//! Sort criteria and their compiled form.

use crate::{
    error::{Result, SortError},
    path::{FieldPath, evaluate},
};
use multisort_model::{Inspect, Value};
use std::{fmt, sync::Arc};
use tracing::debug;

/// Signature of a callable criterion.
pub type Extractor<T> = dyn Fn(&T) -> Value + Send + Sync;

/// One user-supplied sort key.
pub enum Criterion<T: ?Sized> {
    /// Orders by the function's result, ascending.
    Callable(Arc<Extractor<T>>),
    /// Orders by the item itself; a negative number means descending. The
    /// magnitude is ignored.
    Signed(f64),
    /// A path expression such as `"~name.last"` or `"say.catchphrase(3)?"`.
    Path(String),
}

impl<T: ?Sized> Criterion<T> {
    /// Order by the result of `extract`.
    pub fn by<R, F>(extract: F) -> Self
    where
        R: Into<Value>,
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        Criterion::Callable(Arc::new(move |item: &T| extract(item).into()))
    }

    pub fn signed(direction: f64) -> Self {
        Criterion::Signed(direction)
    }

    pub fn path(expression: impl Into<String>) -> Self {
        Criterion::Path(expression.into())
    }

    /// Classify a criterion read from configuration: numbers are signed
    /// criteria, strings are paths, anything else is rejected.
    pub fn try_from_json(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(Criterion::Signed)
                .ok_or_else(|| SortError::unsupported_criterion("number")),
            serde_json::Value::String(s) => Ok(Criterion::Path(s.clone())),
            serde_json::Value::Null => {
                Err(SortError::unsupported_criterion("null"))
            }
            serde_json::Value::Bool(_) => {
                Err(SortError::unsupported_criterion("boolean"))
            }
            serde_json::Value::Array(_) => {
                Err(SortError::unsupported_criterion("array"))
            }
            serde_json::Value::Object(_) => {
                Err(SortError::unsupported_criterion("object"))
            }
        }
    }

    /// Normalize into `{extract, invert}`.
    pub fn compile(&self) -> Evaluator<T> {
        match self {
            Criterion::Callable(extract) => Evaluator {
                extract: Extract::Callable(Arc::clone(extract)),
                invert: false,
            },
            Criterion::Signed(direction) => Evaluator {
                extract: Extract::Identity,
                invert: *direction < 0.0,
            },
            Criterion::Path(expression) => compile_path(expression),
        }
    }
}

/// Apply the path DSL: an optional `!`/`~` inversion marker, one optional
/// leading `.`, an optional trailing `?` existential marker, then the path.
fn compile_path<T: ?Sized>(expression: &str) -> Evaluator<T> {
    let (invert, rest) = match expression.strip_prefix(['!', '~']) {
        Some(rest) => (true, rest),
        None => (false, expression),
    };
    let rest = rest.strip_prefix('.').unwrap_or(rest);
    let (existential, rest) = match rest.strip_suffix('?') {
        Some(rest) => (true, rest),
        None => (false, rest),
    };

    let path = FieldPath::parse(rest);
    if path.has_invalid_steps() {
        debug!(
            criterion = expression,
            "path has a malformed segment; items reaching it will fail"
        );
    }

    Evaluator {
        extract: Extract::Path { path, existential },
        invert,
    }
}

impl<T: ?Sized> Clone for Criterion<T> {
    fn clone(&self) -> Self {
        match self {
            Criterion::Callable(extract) => {
                Criterion::Callable(Arc::clone(extract))
            }
            Criterion::Signed(direction) => Criterion::Signed(*direction),
            Criterion::Path(expression) => Criterion::Path(expression.clone()),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Criterion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Callable(_) => f.write_str("Callable(..)"),
            Criterion::Signed(direction) => {
                f.debug_tuple("Signed").field(direction).finish()
            }
            Criterion::Path(expression) => {
                f.debug_tuple("Path").field(expression).finish()
            }
        }
    }
}

impl<T: ?Sized> From<&str> for Criterion<T> {
    fn from(value: &str) -> Self {
        Criterion::Path(value.to_string())
    }
}

impl<T: ?Sized> From<String> for Criterion<T> {
    fn from(value: String) -> Self {
        Criterion::Path(value)
    }
}

impl<T: ?Sized> From<i32> for Criterion<T> {
    fn from(value: i32) -> Self {
        Criterion::Signed(f64::from(value))
    }
}

impl<T: ?Sized> From<i64> for Criterion<T> {
    fn from(value: i64) -> Self {
        Criterion::Signed(value as f64)
    }
}

impl<T: ?Sized> From<f64> for Criterion<T> {
    fn from(value: f64) -> Self {
        Criterion::Signed(value)
    }
}

/// An ordered list of criteria; the first is the primary key and each
/// later one breaks ties left by those before it.
pub struct Criteria<T: ?Sized>(Vec<Criterion<T>>);

impl<T: ?Sized> Criteria<T> {
    pub fn new(criteria: Vec<Criterion<T>>) -> Self {
        Criteria(criteria)
    }

    /// Classify configuration entries: one criterion or an array of them.
    pub fn try_from_json(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Array(entries) => entries
                .iter()
                .map(Criterion::try_from_json)
                .collect::<Result<Vec<_>>>()
                .map(Criteria),
            single => Criterion::try_from_json(single).map(Criteria::from),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Criterion<T>> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<Criterion<T>> {
        self.0
    }
}

impl<T: ?Sized> Clone for Criteria<T> {
    fn clone(&self) -> Self {
        Criteria(self.0.clone())
    }
}

impl<T: ?Sized> fmt::Debug for Criteria<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}

impl<T: ?Sized> FromIterator<Criterion<T>> for Criteria<T> {
    fn from_iter<I: IntoIterator<Item = Criterion<T>>>(iter: I) -> Self {
        Criteria(iter.into_iter().collect())
    }
}

impl<T: ?Sized> From<Criterion<T>> for Criteria<T> {
    fn from(value: Criterion<T>) -> Self {
        Criteria(vec![value])
    }
}

impl<T: ?Sized> From<Vec<Criterion<T>>> for Criteria<T> {
    fn from(value: Vec<Criterion<T>>) -> Self {
        Criteria(value)
    }
}

impl<T: ?Sized, const N: usize> From<[Criterion<T>; N]> for Criteria<T> {
    fn from(value: [Criterion<T>; N]) -> Self {
        Criteria(value.into())
    }
}

impl<T: ?Sized> From<&str> for Criteria<T> {
    fn from(value: &str) -> Self {
        Criteria(vec![Criterion::from(value)])
    }
}

impl<T: ?Sized> From<String> for Criteria<T> {
    fn from(value: String) -> Self {
        Criteria(vec![Criterion::from(value)])
    }
}

impl<T: ?Sized> From<i32> for Criteria<T> {
    fn from(value: i32) -> Self {
        Criteria(vec![Criterion::from(value)])
    }
}

impl<T: ?Sized> From<i64> for Criteria<T> {
    fn from(value: i64) -> Self {
        Criteria(vec![Criterion::from(value)])
    }
}

impl<T: ?Sized> From<f64> for Criteria<T> {
    fn from(value: f64) -> Self {
        Criteria(vec![Criterion::from(value)])
    }
}

impl<T: ?Sized> From<Vec<&str>> for Criteria<T> {
    fn from(value: Vec<&str>) -> Self {
        value.into_iter().map(Criterion::from).collect()
    }
}

impl<T: ?Sized, const N: usize> From<[&str; N]> for Criteria<T> {
    fn from(value: [&str; N]) -> Self {
        value.into_iter().map(Criterion::from).collect()
    }
}

impl<T: ?Sized> From<Vec<String>> for Criteria<T> {
    fn from(value: Vec<String>) -> Self {
        value.into_iter().map(Criterion::from).collect()
    }
}

/// How a compiled criterion obtains its value from an item.
enum Extract<T: ?Sized> {
    Callable(Arc<Extractor<T>>),
    Identity,
    Path { path: FieldPath, existential: bool },
}

/// A compiled criterion: `{extract, invert}`.
pub struct Evaluator<T: ?Sized> {
    extract: Extract<T>,
    invert: bool,
}

impl<T: Inspect + ?Sized> Evaluator<T> {
    /// The value this criterion orders `item` by.
    pub fn extract(&self, item: &T) -> Result<Value> {
        match &self.extract {
            Extract::Callable(extract) => Ok(extract(item)),
            Extract::Identity => Ok(item.to_value()),
            Extract::Path { path, existential } => {
                let value = evaluate(item, path).map_err(|source| {
                    SortError::Resolution {
                        path: path.to_string(),
                        source,
                    }
                })?;
                Ok(if *existential {
                    Value::Bool(value.is_present())
                } else {
                    value
                })
            }
        }
    }
}

impl<T: ?Sized> Evaluator<T> {
    pub fn is_inverted(&self) -> bool {
        self.invert
    }

    pub fn is_existential(&self) -> bool {
        matches!(
            self.extract,
            Extract::Path {
                existential: true,
                ..
            }
        )
    }

    /// The path this evaluator walks, if it came from a path criterion.
    pub fn path(&self) -> Option<&FieldPath> {
        match &self.extract {
            Extract::Path { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl<T: ?Sized> Clone for Evaluator<T> {
    fn clone(&self) -> Self {
        let extract = match &self.extract {
            Extract::Callable(extract) => Extract::Callable(Arc::clone(extract)),
            Extract::Identity => Extract::Identity,
            Extract::Path { path, existential } => Extract::Path {
                path: path.clone(),
                existential: *existential,
            },
        };
        Evaluator {
            extract,
            invert: self.invert,
        }
    }
}

impl<T: ?Sized> fmt::Debug for Evaluator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let extract = match &self.extract {
            Extract::Callable(_) => "callable".to_string(),
            Extract::Identity => "identity".to_string(),
            Extract::Path { path, existential } => {
                format!("path({path}){}", if *existential { "?" } else { "" })
            }
        };
        f.debug_struct("Evaluator")
            .field("extract", &extract)
            .field("invert", &self.invert)
            .finish()
    }
}
