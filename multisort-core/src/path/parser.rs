//! Splits a dotted path into steps.
//!
//! Parsing never fails: a segment that cannot be understood becomes an
//! [`Step::Invalid`] carrying its error, raised only if evaluation reaches
//! it.

use crate::error::ResolveError;
use multisort_model::Literal;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static INVOCATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(?P<name>[A-Za-z_$][A-Za-z0-9_$]*)\((?P<args>.*)\)$")
        .expect("invocation regex should compile")
});

/// One resolved unit of a path.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// `name`: read a member.
    Member(String),
    /// `name(args)`: call a method with literal arguments.
    Invoke { name: String, args: Vec<Literal> },
    /// A segment that failed to parse.
    Invalid(ResolveError),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Member(name) => f.write_str(name),
            Step::Invoke { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
            Step::Invalid(err) => write!(f, "<{err}>"),
        }
    }
}

/// A parsed dotted path. The empty path is the identity.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPath {
    raw: String,
    steps: Vec<Step>,
}

impl FieldPath {
    pub fn parse(path: &str) -> Self {
        let steps = if path.is_empty() {
            Vec::new()
        } else {
            split_segments(path).into_iter().map(parse_segment).collect()
        };
        Self {
            raw: path.to_string(),
            steps,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }

    /// True when some step will fail as soon as evaluation reaches it.
    pub fn has_invalid_steps(&self) -> bool {
        self.steps.iter().any(|step| matches!(step, Step::Invalid(_)))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Split on `.` outside parentheses and outside string literals inside
/// parentheses, so argument lists keep their dots.
fn split_segments(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth: i32 = 0;
    let mut in_string = false;
    let mut escaped = false;
    let mut start = 0;

    for (idx, ch) in path.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' if depth > 0 => in_string = true,
            '(' => depth += 1,
            ')' => depth -= 1,
            '.' if depth <= 0 => {
                segments.push(&path[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    segments.push(&path[start..]);
    segments
}

fn parse_segment(segment: &str) -> Step {
    if segment.is_empty() {
        return Step::Invalid(ResolveError::MalformedSegment {
            segment: segment.to_string(),
            reason: "empty segment".to_string(),
        });
    }

    if !segment.contains(['(', ')']) {
        return Step::Member(segment.to_string());
    }

    let Some(caps) = INVOCATION_PATTERN.captures(segment) else {
        return Step::Invalid(ResolveError::MalformedSegment {
            segment: segment.to_string(),
            reason: "expected `name(arguments)`".to_string(),
        });
    };

    match parse_arguments(&caps["args"]) {
        Ok(args) => Step::Invoke {
            name: caps["name"].to_string(),
            args,
        },
        Err(reason) => Step::Invalid(ResolveError::MalformedArguments {
            segment: segment.to_string(),
            reason,
        }),
    }
}

/// Arguments are the body of a JSON array and must all be scalars.
fn parse_arguments(text: &str) -> Result<Vec<Literal>, String> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(&format!("[{text}]"))
            .map_err(|err| err.to_string())?;

    values
        .into_iter()
        .map(|value| Literal::try_from(value).map_err(|err| err.to_string()))
        .collect()
}
