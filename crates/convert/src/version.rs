//! Version extraction from free text

use crate::coerce::{Coerce, unsupported};
use crate::error::ConvertResult;
use crate::parse::parse_unsigned;
use crate::resolve::indirect;
use crate::value::Value;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// First run of digits and dots after any non-digit prefix
static VERSION_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\d]*([\d.]+)(.*)").unwrap());

/// A `major.minor.build` version triple
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct VersionInfo {
    pub major: u64,
    pub minor: u64,
    pub build: u64,
}

impl VersionInfo {
    pub const fn new(major: u64, minor: u64, build: u64) -> Self {
        Self {
            major,
            minor,
            build,
        }
    }

    /// Extract a version from text such as `"v1.4.2"` or `"tool - version 3.7.21"`.
    ///
    /// Every dot-separated group must parse as an integer, otherwise the
    /// result is `0.0.0`. Missing groups are zero and extra groups are ignored.
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        let run = VERSION_RUN.replace_all(trimmed, "${1}");
        let groups: Option<Vec<u64>> = run
            .split('.')
            .map(|group| parse_unsigned(group, "version").ok())
            .collect();
        let groups = groups.unwrap_or_default();
        let at = |i: usize| groups.get(i).copied().unwrap_or(0);
        Self::new(at(0), at(1), at(2))
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

/// Coerce a value to a version.
///
/// Version values pass through and text goes through
/// [`VersionInfo::from_text`]. Null and every other kind are an error.
pub fn parse_version(value: &Value) -> ConvertResult<VersionInfo> {
    let value = indirect(value);
    if let Some(text) = value.as_text() {
        return Ok(VersionInfo::from_text(text));
    }
    match &*value {
        Value::Version(v) => Ok(*v),
        other => Err(unsupported(other, "VersionInfo")),
    }
}

impl Coerce for VersionInfo {
    const TARGET: &'static str = "VersionInfo";

    fn coerce(value: &Value) -> ConvertResult<Self> {
        parse_version(value)
    }

    fn zero() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("v1.4.2", VersionInfo::new(1, 4, 2))]
    #[case("kitool - version v3.7.21\n", VersionInfo::new(3, 7, 21))]
    #[case("3.2.1beta", VersionInfo::new(3, 2, 1))]
    #[case("3.2.1-beta", VersionInfo::new(3, 2, 1))]
    #[case("release 2", VersionInfo::new(2, 0, 0))]
    #[case("1.08", VersionInfo::new(1, 8, 0))]
    #[case("1.2.3.4", VersionInfo::new(1, 2, 3))]
    #[case("3.", VersionInfo::new(0, 0, 0))]
    #[case("no digits", VersionInfo::new(0, 0, 0))]
    #[case("", VersionInfo::new(0, 0, 0))]
    fn test_from_text(#[case] text: &str, #[case] expected: VersionInfo) {
        assert_eq!(VersionInfo::from_text(text), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(VersionInfo::new(1, 4, 2).to_string(), "1.4.2");
    }

    #[test]
    fn test_parse_version_kinds() {
        let v = VersionInfo::new(3, 2, 1);
        assert_eq!(parse_version(&Value::Version(v)).unwrap(), v);
        assert_eq!(parse_version(&Value::reference("3.2.1")).unwrap(), v);
        assert!(parse_version(&Value::Null).is_err());
        assert!(parse_version(&Value::from(3)).is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(VersionInfo::new(1, 10, 0) > VersionInfo::new(1, 9, 9));
    }
}
