//! Interop with `serde_json` documents.

use crate::{
    error::{LookupError, Result},
    inspect::Inspect,
    literal::Literal,
    value::Value,
};

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => {
                Value::number(n.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::Array(items.iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.iter().map(|(k, v)| (k.clone(), Value::from(v))).collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Value::from(&value)
    }
}

/// Members are read straight out of the document; only the selected child
/// is converted.
impl Inspect for serde_json::Value {
    fn to_value(&self) -> Value {
        Value::from(self)
    }

    fn member(&self, name: &str) -> Result<Value> {
        match self {
            serde_json::Value::Object(map) => {
                Ok(map.get(name).map_or(Value::Absent, Value::from))
            }
            serde_json::Value::Array(items) => items.as_slice().member(name),
            other => Value::from(other).lookup(name),
        }
    }

    fn invoke(&self, name: &str, args: &[Literal]) -> Result<Value> {
        match self {
            // Plain JSON carries no callables.
            serde_json::Value::Object(map) => Err(match map.get(name) {
                Some(member) => LookupError::NotCallable {
                    member: name.to_string(),
                    kind: Value::from(member).kind(),
                },
                None => LookupError::NoSuchMethod {
                    method: name.to_string(),
                    kind: "object",
                },
            }),
            other => Value::from(other).call(name, args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_documents() {
        let doc = json!({"a": [1, "x", null], "b": true});
        let value = Value::from(&doc);
        assert_eq!(
            value.lookup("a"),
            Ok(Value::Array(vec![
                Value::from(1),
                Value::from("x"),
                Value::Null
            ]))
        );
    }

    #[test]
    fn json_members_resolve_in_place() {
        let doc = json!({"name": {"last": "Sajak"}, "tags": ["a", "b"]});
        assert_eq!(
            doc.member("name").and_then(|v| v.lookup("last")),
            Ok(Value::from("Sajak"))
        );
        assert_eq!(doc["tags"].member("length"), Ok(Value::from(2)));
        assert!(matches!(doc.member("nope"), Ok(Value::Absent)));
    }

    #[test]
    fn json_fields_are_not_callable() {
        let doc = json!({"name": "x"});
        assert!(matches!(
            doc.invoke("name", &[]),
            Err(LookupError::NotCallable { .. })
        ));
        assert_eq!(
            json!("MiXed").invoke("toLowerCase", &[]),
            Ok(Value::from("mixed"))
        );
    }
}
