//! Coercion limits
//!
//! Bounds for the two places where a single call could do unbounded work:
//! decoding JSON text on the mapping path, and following reference layers.

use crate::error::{ConvertError, ConvertResult};
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`ConvertLimits::max_json_bytes`]
pub const ENV_MAX_JSON_BYTES: &str = "MORPH_MAX_JSON_BYTES";

/// Environment variable overriding [`ConvertLimits::max_indirection_depth`]
pub const ENV_MAX_INDIRECTION_DEPTH: &str = "MORPH_MAX_INDIRECTION_DEPTH";

/// Configurable limits for coercion
///
/// # Example
///
/// ```
/// use morph_convert::ConvertLimits;
///
/// let limits = ConvertLimits::default();
/// assert_eq!(limits.max_json_bytes, 10_000_000);
///
/// let strict = ConvertLimits::strict();
/// assert!(strict.check_json_bytes(2_000_000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertLimits {
    /// Maximum length of JSON text accepted by mapping lifters
    pub max_json_bytes: usize,

    /// Maximum number of reference layers the resolver follows
    pub max_indirection_depth: usize,
}

impl Default for ConvertLimits {
    fn default() -> Self {
        Self {
            max_json_bytes: 10_000_000, // 10MB
            max_indirection_depth: 64,
        }
    }
}

impl ConvertLimits {
    /// Permissive limits for trusted environments
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            max_json_bytes: 100_000_000,
            max_indirection_depth: 1024,
        }
    }

    /// Strict limits for untrusted input
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_json_bytes: 1_000_000, // 1MB
            max_indirection_depth: 16,
        }
    }

    /// No limits (use with caution!)
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_json_bytes: usize::MAX,
            max_indirection_depth: usize::MAX,
        }
    }

    /// Default limits with `MORPH_*` environment overrides applied
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Default limits with overrides taken from `lookup`.
    ///
    /// Malformed overrides are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut limits = Self::default();

        if let Some(n) = read_override(&lookup, ENV_MAX_JSON_BYTES) {
            limits.max_json_bytes = n;
        }
        if let Some(n) = read_override(&lookup, ENV_MAX_INDIRECTION_DEPTH) {
            limits.max_indirection_depth = n;
        }

        limits
    }

    /// Validate JSON text length
    #[inline]
    pub fn check_json_bytes(&self, len: usize) -> ConvertResult<()> {
        if len > self.max_json_bytes {
            Err(ConvertError::limit_exceeded(
                "max_json_bytes",
                self.max_json_bytes,
                len,
            ))
        } else {
            Ok(())
        }
    }
}

fn read_override(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<usize> {
    let raw = lookup(key)?;
    match crate::coerce::to_usize(&Value::Str(raw.trim().to_owned())) {
        Ok(n) => Some(n),
        Err(err) => {
            tracing::warn!(variable = key, value = %raw, error = %err, "ignoring malformed limit override");
            None
        }
    }
}
