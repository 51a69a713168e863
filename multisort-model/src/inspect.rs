//! The capability path steps need from an item: view it as a value, read a
//! member, call a method.
//!
//! Implement [`Inspect`] for domain types to expose typed fields to path
//! criteria without converting the whole item into a [`Value`] first.

use crate::{error::Result, literal::Literal, value::Value};
use std::{rc::Rc, sync::Arc};

/// Something a sort criterion can look into.
pub trait Inspect {
    /// The item itself as an orderable value. Used by identity criteria
    /// (empty paths and signed numbers).
    fn to_value(&self) -> Value;

    /// Resolve a plain step. Unknown members should yield
    /// [`Value::Absent`] rather than an error.
    fn member(&self, name: &str) -> Result<Value> {
        self.to_value().lookup(name)
    }

    /// Resolve an invocation step.
    fn invoke(&self, name: &str, args: &[Literal]) -> Result<Value> {
        self.to_value().call(name, args)
    }
}

impl Inspect for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn member(&self, name: &str) -> Result<Value> {
        self.lookup(name)
    }

    fn invoke(&self, name: &str, args: &[Literal]) -> Result<Value> {
        self.call(name, args)
    }
}

macro_rules! impl_inspect_scalar {
    ($($ty:ty),*) => {
        $(
            impl Inspect for $ty {
                fn to_value(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

impl_inspect_scalar!(
    bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64
);

impl Inspect for str {
    fn to_value(&self) -> Value {
        Value::from(self)
    }
}

impl Inspect for String {
    fn to_value(&self) -> Value {
        Value::from(self.as_str())
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, Inspect::to_value)
    }

    fn member(&self, name: &str) -> Result<Value> {
        match self {
            Some(inner) => inner.member(name),
            None => Value::Null.lookup(name),
        }
    }

    fn invoke(&self, name: &str, args: &[Literal]) -> Result<Value> {
        match self {
            Some(inner) => inner.invoke(name, args),
            None => Value::Null.call(name, args),
        }
    }
}

impl<T: Inspect> Inspect for [T] {
    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(Inspect::to_value).collect())
    }

    fn member(&self, name: &str) -> Result<Value> {
        if name == "length" {
            return Ok(Value::from(self.len()));
        }
        match name.parse::<usize>() {
            Ok(idx) if name.bytes().all(|b| b.is_ascii_digit()) => {
                Ok(self.get(idx).map_or(Value::Absent, Inspect::to_value))
            }
            _ => Ok(Value::Absent),
        }
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }

    fn member(&self, name: &str) -> Result<Value> {
        self.as_slice().member(name)
    }

    fn invoke(&self, name: &str, args: &[Literal]) -> Result<Value> {
        self.as_slice().invoke(name, args)
    }
}

macro_rules! impl_inspect_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: Inspect + ?Sized> Inspect for $ptr<T> {
                fn to_value(&self) -> Value {
                    (**self).to_value()
                }

                fn member(&self, name: &str) -> Result<Value> {
                    (**self).member(name)
                }

                fn invoke(&self, name: &str, args: &[Literal]) -> Result<Value> {
                    (**self).invoke(name, args)
                }
            }
        )*
    };
}

impl_inspect_pointer!(Box, Rc, Arc);

impl<T: Inspect + ?Sized> Inspect for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn member(&self, name: &str) -> Result<Value> {
        (**self).member(name)
    }

    fn invoke(&self, name: &str, args: &[Literal]) -> Result<Value> {
        (**self).invoke(name, args)
    }
}
