//! Resolves a [`FieldPath`] against an item.

use super::parser::{FieldPath, Step};
use crate::error::ResolveError;
use multisort_model::{Inspect, Value};
use tracing::trace;

/// Walk `path` from `item`.
///
/// The empty path returns the item itself. As soon as a step produces
/// `null` or an absent member the walk stops and yields [`Value::Absent`];
/// later steps are never looked at, so an invalid segment after a missing
/// value is not an error.
pub fn evaluate<T: Inspect + ?Sized>(
    item: &T,
    path: &FieldPath,
) -> Result<Value, ResolveError> {
    let mut steps = path.steps().iter();
    let Some(first) = steps.next() else {
        return Ok(item.to_value());
    };

    let mut current = apply(item, first)?;
    for step in steps {
        if current.is_missing() {
            trace!(path = %path, at = %step, "short-circuit on missing value");
            return Ok(Value::Absent);
        }
        current = apply(&current, step)?;
    }

    Ok(if current.is_missing() {
        Value::Absent
    } else {
        current
    })
}

/// Parse and evaluate in one go.
pub fn evaluate_str<T: Inspect + ?Sized>(
    item: &T,
    path: &str,
) -> Result<Value, ResolveError> {
    evaluate(item, &FieldPath::parse(path))
}

fn apply<T: Inspect + ?Sized>(
    target: &T,
    step: &Step,
) -> Result<Value, ResolveError> {
    match step {
        Step::Member(name) => {
            target.member(name).map_err(|source| ResolveError::Lookup {
                segment: step.to_string(),
                source,
            })
        }
        Step::Invoke { name, args } => target
            .invoke(name, args)
            .map_err(|source| ResolveError::Lookup {
                segment: step.to_string(),
                source,
            }),
        Step::Invalid(err) => Err(err.clone()),
    }
}
