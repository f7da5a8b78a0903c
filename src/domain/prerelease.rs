//! Pre-release identifiers and build metadata for semantic versions
//!
//! According to semver.org: https://semver.org/#spec-item-9 and
//! https://semver.org/#spec-item-10

use crate::error::{MinVerError, Result};
use std::fmt;
use std::str::FromStr;

/// A single dot-separated pre-release identifier
///
/// Variant order matters: the derived `Ord` makes every numeric identifier
/// lower precedence than every alphanumeric one, numeric identifiers compare
/// numerically and alphanumeric identifiers compare by ASCII byte order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreReleaseIdentifier {
    /// Digits only, no leading zero unless the value is exactly 0
    Numeric(u64),
    /// ASCII letters, digits and hyphens with at least one non-digit
    AlphaNumeric(String),
}

impl PreReleaseIdentifier {
    /// Parse a single identifier (no dots)
    ///
    /// # Examples
    /// ```ignore
    /// assert_eq!(PreReleaseIdentifier::parse("7")?, PreReleaseIdentifier::Numeric(7));
    /// assert!(PreReleaseIdentifier::parse("07").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, PreReleaseIdentifier::Numeric(_))
    }
}

impl FromStr for PreReleaseIdentifier {
    type Err = MinVerError;

    fn from_str(s: &str) -> Result<Self> {
        if !is_identifier(s) {
            return Err(MinVerError::version(format!(
                "Invalid pre-release identifier: '{}'",
                s
            )));
        }

        if s.bytes().all(|b| b.is_ascii_digit()) {
            if s.len() > 1 && s.starts_with('0') {
                return Err(MinVerError::version(format!(
                    "Numeric pre-release identifier has a leading zero: '{}'",
                    s
                )));
            }

            return s.parse::<u64>().map(PreReleaseIdentifier::Numeric).map_err(|_| {
                MinVerError::version(format!("Numeric pre-release identifier too large: '{}'", s))
            });
        }

        Ok(PreReleaseIdentifier::AlphaNumeric(s.to_string()))
    }
}

impl From<u64> for PreReleaseIdentifier {
    fn from(value: u64) -> Self {
        PreReleaseIdentifier::Numeric(value)
    }
}

impl fmt::Display for PreReleaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreReleaseIdentifier::Numeric(n) => write!(f, "{}", n),
            PreReleaseIdentifier::AlphaNumeric(s) => write!(f, "{}", s),
        }
    }
}

/// Parse a dot-separated pre-release list such as "beta.2"
pub fn parse_pre_release(s: &str) -> Result<Vec<PreReleaseIdentifier>> {
    s.split('.').map(PreReleaseIdentifier::parse).collect()
}

/// Validated build metadata ("build.5", "sha-abc123", or empty)
///
/// Metadata never takes part in version precedence. An empty value means
/// "no metadata".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildMetadata(String);

impl BuildMetadata {
    pub fn empty() -> Self {
        BuildMetadata(String::new())
    }

    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join two metadata values with a dot, skipping empty sides
    pub fn join(&self, other: &BuildMetadata) -> BuildMetadata {
        match (self.is_empty(), other.is_empty()) {
            (_, true) => self.clone(),
            (true, false) => other.clone(),
            (false, false) => BuildMetadata(format!("{}.{}", self.0, other.0)),
        }
    }
}

impl FromStr for BuildMetadata {
    type Err = MinVerError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(BuildMetadata::empty());
        }

        if let Some(bad) = s.split('.').find(|part| !is_identifier(part)) {
            return Err(MinVerError::version(format!(
                "Invalid build metadata identifier '{}' in '{}'",
                bad, s
            )));
        }

        Ok(BuildMetadata(s.to_string()))
    }
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_parse_numeric() {
        assert_eq!(
            PreReleaseIdentifier::parse("42").unwrap(),
            PreReleaseIdentifier::Numeric(42)
        );
        assert_eq!(
            PreReleaseIdentifier::parse("0").unwrap(),
            PreReleaseIdentifier::Numeric(0)
        );
    }

    #[test]
    fn test_identifier_parse_alphanumeric() {
        assert_eq!(
            PreReleaseIdentifier::parse("rc-1").unwrap(),
            PreReleaseIdentifier::AlphaNumeric("rc-1".to_string())
        );
        assert_eq!(
            PreReleaseIdentifier::parse("0a").unwrap(),
            PreReleaseIdentifier::AlphaNumeric("0a".to_string())
        );
    }

    #[test]
    fn test_identifier_parse_invalid() {
        assert!(PreReleaseIdentifier::parse("").is_err());
        assert!(PreReleaseIdentifier::parse("01").is_err());
        assert!(PreReleaseIdentifier::parse("beta.1").is_err());
        assert!(PreReleaseIdentifier::parse("beta_1").is_err());
        assert!(PreReleaseIdentifier::parse("99999999999999999999999").is_err());
    }

    #[test]
    fn test_identifier_ordering() {
        let numeric = PreReleaseIdentifier::Numeric(1000);
        let alpha = PreReleaseIdentifier::AlphaNumeric("1a".to_string());
        assert!(numeric < alpha);

        assert!(PreReleaseIdentifier::Numeric(2) < PreReleaseIdentifier::Numeric(11));
        assert!(
            PreReleaseIdentifier::AlphaNumeric("Beta".to_string())
                < PreReleaseIdentifier::AlphaNumeric("alpha".to_string())
        );
    }

    #[test]
    fn test_parse_pre_release_list() {
        let ids = parse_pre_release("beta.2.x-y").unwrap();
        assert_eq!(
            ids,
            vec![
                PreReleaseIdentifier::AlphaNumeric("beta".to_string()),
                PreReleaseIdentifier::Numeric(2),
                PreReleaseIdentifier::AlphaNumeric("x-y".to_string()),
            ]
        );
        assert!(parse_pre_release("beta..2").is_err());
    }

    #[test]
    fn test_build_metadata_parse() {
        assert_eq!(BuildMetadata::parse("build.007").unwrap().as_str(), "build.007");
        assert!(BuildMetadata::parse("").unwrap().is_empty());
        assert!(BuildMetadata::parse("a+b").is_err());
        assert!(BuildMetadata::parse("a..b").is_err());
    }

    #[test]
    fn test_build_metadata_join() {
        let empty = BuildMetadata::empty();
        let build = BuildMetadata::parse("build").unwrap();
        let ci = BuildMetadata::parse("ci.5").unwrap();

        assert_eq!(empty.join(&ci), ci);
        assert_eq!(build.join(&empty), build);
        assert_eq!(build.join(&ci).as_str(), "build.ci.5");
    }
}
