//! Scalar literals passed as arguments to invocation steps.

use std::fmt;

/// A JSON scalar literal: the only kind of argument a path may pass to a
/// method.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Literal {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Literal {
    pub fn kind(&self) -> &'static str {
        match self {
            Literal::Null => "null",
            Literal::Bool(_) => "boolean",
            Literal::Number(_) => "number",
            Literal::String(_) => "string",
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Literal::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("null"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Number(n) => write!(f, "{n}"),
            Literal::String(s) => write!(f, "{s:?}"),
        }
    }
}

/// Returned when a JSON value is an array or object rather than a scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotAScalar(pub &'static str);

impl fmt::Display for NotAScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a scalar literal, found {}", self.0)
    }
}

impl std::error::Error for NotAScalar {}

impl TryFrom<serde_json::Value> for Literal {
    type Error = NotAScalar;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(Literal::Null),
            serde_json::Value::Bool(b) => Ok(Literal::Bool(b)),
            // Every finite JSON number fits an f64, possibly with rounding.
            serde_json::Value::Number(n) => {
                Ok(Literal::Number(n.as_f64().unwrap_or(f64::NAN)))
            }
            serde_json::Value::String(s) => Ok(Literal::String(s)),
            serde_json::Value::Array(_) => Err(NotAScalar("an array")),
            serde_json::Value::Object(_) => Err(NotAScalar("an object")),
        }
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Number(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Number(value as f64)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_convert_from_json() {
        assert_eq!(Literal::try_from(json!(3)), Ok(Literal::Number(3.0)));
        assert_eq!(
            Literal::try_from(json!("x")),
            Ok(Literal::String("x".into()))
        );
        assert_eq!(Literal::try_from(json!(null)), Ok(Literal::Null));
        assert_eq!(Literal::try_from(json!(false)), Ok(Literal::Bool(false)));
    }

    #[test]
    fn containers_are_rejected() {
        assert_eq!(Literal::try_from(json!([1])), Err(NotAScalar("an array")));
        assert_eq!(
            Literal::try_from(json!({"a": 1})),
            Err(NotAScalar("an object"))
        );
    }
}
