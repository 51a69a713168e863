use std::fmt::{self, Display};

/// Errors produced when a value cannot satisfy a member lookup or call.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    /// Member access on `null` or an absent value.
    NotInspectable { member: String, kind: &'static str },
    /// Invocation of a member that does not exist on the receiver.
    NoSuchMethod { method: String, kind: &'static str },
    /// Invocation of a member that exists but is not a method.
    NotCallable { member: String, kind: &'static str },
    /// A method rejected its argument list.
    BadArguments { method: String, reason: String },
    /// A user-supplied method reported a failure.
    Invocation { method: String, message: String },
}

impl LookupError {
    pub fn bad_arguments(
        method: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        LookupError::BadArguments {
            method: method.into(),
            reason: reason.into(),
        }
    }

    pub fn invocation(
        method: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LookupError::Invocation {
            method: method.into(),
            message: message.into(),
        }
    }
}

impl Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::NotInspectable { member, kind } => {
                write!(f, "cannot read member `{member}` of {kind}")
            }
            LookupError::NoSuchMethod { method, kind } => {
                write!(f, "{kind} has no method `{method}`")
            }
            LookupError::NotCallable { member, kind } => {
                write!(f, "member `{member}` is a {kind}, not a method")
            }
            LookupError::BadArguments { method, reason } => {
                write!(f, "bad arguments for `{method}`: {reason}")
            }
            LookupError::Invocation { method, message } => {
                write!(f, "`{method}` failed: {message}")
            }
        }
    }
}

impl std::error::Error for LookupError {}

pub type Result<T> = std::result::Result<T, LookupError>;
