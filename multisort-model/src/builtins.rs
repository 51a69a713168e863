//! Members and methods every value kind understands without user code.

use crate::{
    error::{LookupError, Result},
    literal::Literal,
    value::Value,
};

/// Render a number the way script runtimes print it: integral values have
/// no fractional part, non-finite values are spelled out.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if n == 0.0 {
        "0".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{n:.0}")
    } else {
        format!("{n}")
    }
}

fn parse_index(name: &str) -> Option<usize> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}

pub(crate) fn array_member(items: &[Value], name: &str) -> Value {
    if name == "length" {
        return Value::from(items.len());
    }
    parse_index(name)
        .and_then(|idx| items.get(idx).cloned())
        .unwrap_or(Value::Absent)
}

pub(crate) fn string_member(s: &str, name: &str) -> Value {
    if name == "length" {
        return Value::from(s.chars().count());
    }
    parse_index(name)
        .and_then(|idx| s.chars().nth(idx))
        .map(Value::from)
        .unwrap_or(Value::Absent)
}

fn expect_arity(
    method: &str,
    args: &[Literal],
    min: usize,
    max: usize,
) -> Result<()> {
    if args.len() < min || args.len() > max {
        let expected = if min == max {
            format!("{min}")
        } else {
            format!("{min} to {max}")
        };
        return Err(LookupError::bad_arguments(
            method,
            format!("expected {expected} argument(s), got {}", args.len()),
        ));
    }
    Ok(())
}

fn string_arg<'a>(method: &str, args: &'a [Literal], pos: usize) -> Result<&'a str> {
    args.get(pos).and_then(Literal::as_str).ok_or_else(|| {
        LookupError::bad_arguments(method, format!("argument {pos} must be a string"))
    })
}

fn integer_arg(method: &str, args: &[Literal], pos: usize) -> Result<Option<i64>> {
    match args.get(pos) {
        None => Ok(None),
        Some(Literal::Number(n)) if n.is_finite() && n.fract() == 0.0 => {
            Ok(Some(*n as i64))
        }
        Some(other) => Err(LookupError::bad_arguments(
            method,
            format!("argument {pos} must be an integer, got {other}"),
        )),
    }
}

fn no_such_method(method: &str, kind: &'static str) -> LookupError {
    LookupError::NoSuchMethod {
        method: method.to_string(),
        kind,
    }
}

pub(crate) fn call_string(s: &str, method: &str, args: &[Literal]) -> Result<Value> {
    match method {
        "toLowerCase" | "toUpperCase" | "trim" | "toString" => {
            expect_arity(method, args, 0, 0)?;
            Ok(Value::String(match method {
                "toLowerCase" => s.to_lowercase(),
                "toUpperCase" => s.to_uppercase(),
                "trim" => s.trim().to_string(),
                _ => s.to_string(),
            }))
        }
        "includes" | "startsWith" | "endsWith" => {
            expect_arity(method, args, 1, 1)?;
            let needle = string_arg(method, args, 0)?;
            Ok(Value::Bool(match method {
                "includes" => s.contains(needle),
                "startsWith" => s.starts_with(needle),
                _ => s.ends_with(needle),
            }))
        }
        "charAt" => {
            expect_arity(method, args, 0, 1)?;
            let idx = integer_arg(method, args, 0)?.unwrap_or(0);
            let ch = usize::try_from(idx).ok().and_then(|i| s.chars().nth(i));
            Ok(Value::String(ch.map(String::from).unwrap_or_default()))
        }
        _ => Err(no_such_method(method, "string")),
    }
}

pub(crate) fn call_number(n: f64, method: &str, args: &[Literal]) -> Result<Value> {
    match method {
        "toString" => {
            expect_arity(method, args, 0, 0)?;
            Ok(Value::String(format_number(n)))
        }
        "toFixed" => {
            expect_arity(method, args, 0, 1)?;
            let digits = integer_arg(method, args, 0)?.unwrap_or(0);
            let digits = usize::try_from(digits)
                .ok()
                .filter(|d| *d <= 100)
                .ok_or_else(|| {
                    LookupError::bad_arguments(method, "digits must be between 0 and 100")
                })?;
            Ok(Value::String(format!("{n:.digits$}")))
        }
        "abs" => {
            expect_arity(method, args, 0, 0)?;
            Ok(Value::number(n.abs()))
        }
        _ => Err(no_such_method(method, "number")),
    }
}

pub(crate) fn call_array(items: &[Value], method: &str, args: &[Literal]) -> Result<Value> {
    match method {
        "includes" => {
            expect_arity(method, args, 1, 1)?;
            let needle = Value::from(&args[0]);
            Ok(Value::Bool(items.iter().any(|item| *item == needle)))
        }
        "join" => {
            expect_arity(method, args, 0, 1)?;
            let sep = match args.first() {
                Some(_) => string_arg(method, args, 0)?,
                None => ",",
            };
            let joined = items
                .iter()
                .map(|item| {
                    if item.is_missing() {
                        String::new()
                    } else {
                        item.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(sep);
            Ok(Value::String(joined))
        }
        "at" => {
            expect_arity(method, args, 1, 1)?;
            let idx = integer_arg(method, args, 0)?.unwrap_or(0);
            let len = items.len() as i64;
            let resolved = if idx < 0 { len + idx } else { idx };
            Ok(usize::try_from(resolved)
                .ok()
                .and_then(|i| items.get(i).cloned())
                .unwrap_or(Value::Absent))
        }
        _ => Err(no_such_method(method, "array")),
    }
}

pub(crate) fn call_bool(b: bool, method: &str, args: &[Literal]) -> Result<Value> {
    match method {
        "toString" => {
            expect_arity(method, args, 0, 0)?;
            Ok(Value::String(b.to_string()))
        }
        _ => Err(no_such_method(method, "boolean")),
    }
}
