//! Applies a [`SortConfig`] to a JSON document.
//!
//! The CLI binary is a thin wrapper over [`run`]; keeping the logic here
//! lets tests drive it without spawning a process.

use anyhow::{Context, Result, anyhow, bail};
use serde_json::Value;
use tracing::{debug, info};

use crate::models::SortConfig;

/// Sort the array selected by `config.pointer` in place and return how many
/// items it held. The document is left untouched when any criterion fails.
pub fn sort_document(document: &mut Value, config: &SortConfig) -> Result<usize> {
    let comparator = config
        .comparator()
        .context("failed to compile sort criteria")?;

    let target = match config.pointer.as_deref() {
        None | Some("") => document,
        Some(pointer) => document
            .pointer_mut(pointer)
            .ok_or_else(|| anyhow!("pointer `{pointer}` does not match the input"))?,
    };

    let found = kind(target);
    let Value::Array(items) = target else {
        bail!(
            "expected an array at `{}`, found {found}",
            config.pointer.as_deref().unwrap_or("")
        );
    };

    debug!(items = items.len(), criteria = comparator.len(), "sorting document");
    comparator.sort(items).context("sort failed")?;
    Ok(items.len())
}

/// Parse `input`, sort it, and render the result.
pub fn run(input: &str, config: &SortConfig) -> Result<String> {
    let mut document: Value =
        serde_json::from_str(input).context("input is not valid JSON")?;
    let count = sort_document(&mut document, config)?;
    info!(count, "sorted items");
    render(&document, config.pretty)
}

pub fn render(document: &Value, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };
    rendered.context("failed to serialize output")
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(criteria: Vec<Value>) -> SortConfig {
        SortConfig {
            criteria,
            ..SortConfig::default()
        }
    }

    #[test]
    fn sorts_the_root_array() {
        let out = run("[3, 1, 2]", &config(vec![json!(-1)])).expect("run");
        assert_eq!(out, "[3,2,1]");
    }

    #[test]
    fn sorts_the_array_under_a_pointer() {
        let mut doc = json!({
            "meta": {"total": 3},
            "data": {"items": [{"n": "b"}, {"n": "c"}, {"n": "a"}]}
        });
        let cfg = SortConfig {
            pointer: Some("/data/items".into()),
            ..config(vec![json!("n")])
        };
        assert_eq!(sort_document(&mut doc, &cfg).expect("sort"), 3);
        assert_eq!(doc["data"]["items"], json!([{"n": "a"}, {"n": "b"}, {"n": "c"}]));
        assert_eq!(doc["meta"], json!({"total": 3}));
    }

    #[test]
    fn rejects_non_array_targets() {
        let err = run(r#"{"a": 1}"#, &config(vec![])).expect_err("object root");
        assert!(err.to_string().contains("found an object"));

        let cfg = SortConfig {
            pointer: Some("/missing".into()),
            ..SortConfig::default()
        };
        let err = run("[]", &cfg).expect_err("bad pointer");
        assert!(err.to_string().contains("/missing"));
    }

    #[test]
    fn failed_sort_leaves_document_intact() {
        let mut doc = json!([{"s": "b"}, {"s": 1}, {"s": "a"}]);
        let before = doc.clone();
        let err = sort_document(&mut doc, &config(vec![json!("s.toLowerCase()")]))
            .expect_err("numbers have no toLowerCase");
        assert!(format!("{err:#}").contains("toLowerCase"));
        assert_eq!(doc, before);
    }

    #[test]
    fn pretty_output_is_indented() {
        let cfg = SortConfig {
            pretty: true,
            ..config(vec![json!("")])
        };
        let out = run("[2, 1]", &cfg).expect("run");
        assert_eq!(out, "[\n  1,\n  2\n]");
    }
}
