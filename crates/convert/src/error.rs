//! Conversion error types
//!
//! Every strict coercion returns [`ConvertError`] on failure. Errors carry the
//! source kind and the requested target at the point where conversion failed,
//! so callers never need to re-annotate them.

use crate::value::ValueKind;
use thiserror::Error;

/// Result alias used by every strict coercion.
pub type ConvertResult<T> = Result<T, ConvertError>;

// ============================================================================
// MAIN ERROR TYPE
// ============================================================================

/// Coercion failure
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The source kind has no coercion rule for the target
    #[error("unable to cast {value} of kind {kind} to {target}")]
    Unsupported {
        value: String,
        kind: ValueKind,
        target: String,
    },

    /// Text input did not match any accepted lexical form
    #[error("unable to parse {input:?} as {target}: {reason}")]
    Parse {
        input: String,
        target: String,
        reason: String,
    },

    /// Negative numeric input for an unsigned target
    #[error("unable to cast negative value {value} to {target}")]
    NegativeNotAllowed { value: String, target: String },

    /// Collection or mapping lift attempted on an incompatible shape
    #[error("unable to lift {kind} into {target}: {reason}")]
    Structure {
        kind: ValueKind,
        target: String,
        reason: String,
    },

    /// JSON text could not be decoded, or a value could not be encoded
    #[error("JSON error for {target}: {reason}")]
    Json { target: String, reason: String },

    /// A configured limit was exceeded
    #[error("{limit} exceeded: {actual} > {max}")]
    LimitExceeded {
        limit: String,
        max: usize,
        actual: usize,
    },
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ConvertError {
    /// Create an unsupported-kind error from the offending value's rendering
    pub fn unsupported(
        value: impl Into<String>,
        kind: ValueKind,
        target: impl Into<String>,
    ) -> Self {
        Self::Unsupported {
            value: value.into(),
            kind,
            target: target.into(),
        }
    }

    /// Create a parse error
    pub fn parse(
        input: impl Into<String>,
        target: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Parse {
            input: input.into(),
            target: target.into(),
            reason: reason.into(),
        }
    }

    /// Create a negative-not-allowed error
    pub fn negative(value: impl Into<String>, target: impl Into<String>) -> Self {
        Self::NegativeNotAllowed {
            value: value.into(),
            target: target.into(),
        }
    }

    /// Create a structural mismatch error
    pub fn structure(
        kind: ValueKind,
        target: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Structure {
            kind,
            target: target.into(),
            reason: reason.into(),
        }
    }

    /// Create a JSON error
    pub fn json(target: impl Into<String>, reason: impl ToString) -> Self {
        Self::Json {
            target: target.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a limit exceeded error
    pub fn limit_exceeded(limit: impl Into<String>, max: usize, actual: usize) -> Self {
        Self::LimitExceeded {
            limit: limit.into(),
            max,
            actual,
        }
    }

    /// Whether this error came from a negative value hitting an unsigned target
    pub fn is_negative(&self) -> bool {
        matches!(self, Self::NegativeNotAllowed { .. })
    }

    /// Whether this error came from a text parser
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// The target type named by this error, when it names one
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Unsupported { target, .. }
            | Self::Parse { target, .. }
            | Self::NegativeNotAllowed { target, .. }
            | Self::Structure { target, .. }
            | Self::Json { target, .. } => Some(target),
            Self::LimitExceeded { .. } => None,
        }
    }
}

/// Short, path-free name of `T` for error messages.
///
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub(crate) fn type_label<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut path = String::new();
    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            path.push(ch);
        } else {
            out.push_str(last_segment(&path));
            path.clear();
            out.push(ch);
        }
    }
    out.push_str(last_segment(&path));
    out
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_kind_and_target() {
        let err = ConvertError::unsupported("[1, 2]", ValueKind::Seq, "i64");
        assert_eq!(err.to_string(), "unable to cast [1, 2] of kind sequence to i64");
        assert_eq!(err.target(), Some("i64"));
    }

    #[test]
    fn test_negative_marker() {
        let err = ConvertError::negative("-1", "u64");
        assert!(err.is_negative());
        assert!(!err.is_parse());
    }

    #[test]
    fn test_type_label_strips_paths() {
        assert_eq!(type_label::<i64>(), "i64");
        assert_eq!(type_label::<String>(), "String");
        assert_eq!(type_label::<Vec<String>>(), "Vec<String>");
        assert_eq!(type_label::<Option<Vec<bool>>>(), "Option<Vec<bool>>");
    }
}
