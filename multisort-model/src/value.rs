//! The dynamic value that path steps traverse and comparators order.

use crate::{
    builtins,
    error::{LookupError, Result},
    literal::Literal,
};
use ordered_float::OrderedFloat;
use std::{cmp::Ordering, collections::BTreeMap, fmt, sync::Arc};

/// Signature of a method stored inside an object value.
pub type MethodFn = dyn Fn(&[Literal]) -> Result<Value> + Send + Sync;

/// A callable member. Cloning shares the underlying closure.
#[derive(Clone)]
pub struct Method(Arc<MethodFn>);

impl Method {
    pub fn new(
        func: impl Fn(&[Literal]) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        Method(Arc::new(func))
    }

    pub fn call(&self, args: &[Literal]) -> Result<Value> {
        (self.0)(args)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Method(..)")
    }
}

/// An untyped value.
///
/// `Absent` is a member that does not exist; `Null` is an explicit null.
/// Both count as missing when ordering.
///
/// `PartialEq`/`Ord` implement the *sort order*, not structural identity:
/// `Null` equals `Absent`, every method equals every other method, and
/// values of different kinds order by kind (missing, boolean, number,
/// string, array, object, method).
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Absent,
    Null,
    Bool(bool),
    Number(OrderedFloat<f64>),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
    Method(Method),
}

impl Value {
    pub fn number(n: f64) -> Self {
        Value::Number(OrderedFloat(n))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Build an object from `(key, value)` pairs.
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn method(
        func: impl Fn(&[Literal]) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        Value::Method(Method::new(func))
    }

    /// True for `Absent` and `Null`.
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Absent | Value::Null)
    }

    pub fn is_present(&self) -> bool {
        !self.is_missing()
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Absent => "absent value",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Method(_) => "method",
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.0),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Absent | Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
            Value::Method(_) => 6,
        }
    }

    /// Resolve a plain path step.
    ///
    /// Members that do not exist resolve to `Absent`; only `null` and
    /// absent receivers are an error.
    pub fn lookup(&self, name: &str) -> Result<Value> {
        match self {
            Value::Absent | Value::Null => Err(LookupError::NotInspectable {
                member: name.to_string(),
                kind: self.kind(),
            }),
            Value::Object(map) => {
                Ok(map.get(name).cloned().unwrap_or(Value::Absent))
            }
            Value::Array(items) => Ok(builtins::array_member(items, name)),
            Value::String(s) => Ok(builtins::string_member(s, name)),
            Value::Bool(_) | Value::Number(_) | Value::Method(_) => {
                Ok(Value::Absent)
            }
        }
    }

    /// Resolve an invocation step: find method `name` and call it.
    pub fn call(&self, name: &str, args: &[Literal]) -> Result<Value> {
        match self {
            Value::Absent | Value::Null => Err(LookupError::NotInspectable {
                member: name.to_string(),
                kind: self.kind(),
            }),
            Value::Object(map) => match map.get(name) {
                Some(Value::Method(method)) => method.call(args),
                Some(other) => Err(LookupError::NotCallable {
                    member: name.to_string(),
                    kind: other.kind(),
                }),
                None => Err(LookupError::NoSuchMethod {
                    method: name.to_string(),
                    kind: self.kind(),
                }),
            },
            Value::String(s) => builtins::call_string(s, name, args),
            Value::Number(n) => builtins::call_number(n.0, name, args),
            Value::Array(items) => builtins::call_array(items, name, args),
            Value::Bool(b) => builtins::call_bool(*b, name, args),
            Value::Method(_) => Err(LookupError::NoSuchMethod {
                method: name.to_string(),
                kind: self.kind(),
            }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&builtins::format_number(n.0)),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    // Missing elements render empty inside arrays.
                    if item.is_present() {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => f.write_str("[object Object]"),
            Value::Method(_) => f.write_str("[method]"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Number(a), Value::Number(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Array(a), Value::Array(b)) => a.cmp(b),
            (Value::Object(a), Value::Object(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Array(value.into_iter().map(Into::into).collect())
    }
}

impl From<Method> for Value {
    fn from(value: Method) -> Self {
        Value::Method(value)
    }
}

impl From<Literal> for Value {
    fn from(value: Literal) -> Self {
        match value {
            Literal::Null => Value::Null,
            Literal::Bool(b) => Value::Bool(b),
            Literal::Number(n) => Value::number(n),
            Literal::String(s) => Value::String(s),
        }
    }
}

impl From<&Literal> for Value {
    fn from(value: &Literal) -> Self {
        Value::from(value.clone())
    }
}
