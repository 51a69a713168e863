use multisort_model::LookupError;
use thiserror::Error;

/// Failure while resolving one path against one item.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("malformed path segment `{segment}`: {reason}")]
    MalformedSegment { segment: String, reason: String },

    #[error("malformed argument list in `{segment}`: {reason}")]
    MalformedArguments { segment: String, reason: String },

    #[error("step `{segment}` failed: {source}")]
    Lookup {
        segment: String,
        #[source]
        source: LookupError,
    },
}

/// Errors surfaced by compiling criteria or sorting with them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SortError {
    /// A criterion is not a callable, number, or path string.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A path could not be resolved against an item.
    #[error("resolution error in `{path}`: {source}")]
    Resolution {
        path: String,
        #[source]
        source: ResolveError,
    },
}

impl SortError {
    pub fn unsupported_criterion(kind: &str) -> Self {
        SortError::Configuration(format!(
            "criterion of unsupported kind: {kind} (expected a number or a path string)"
        ))
    }
}

pub type Result<T> = std::result::Result<T, SortError>;
