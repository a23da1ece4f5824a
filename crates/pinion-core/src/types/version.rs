//! Version and version-compatibility types.
//!
//! Provides the Version triple used for range checks, the VersionRange
//! interval notation (`[15.0.0,16.0.0)`), and the VersionSpec predicate
//! attached to dependency edges.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Parsed version (major.minor.patch with an optional qualifier)
///
/// Qualifiers such as `-beta1` are preserved and compared for equality, but
/// they never participate in ordering: only the numeric triple does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub qualifier: Option<String>,
}

/// Version interval with inclusive or exclusive bounds
///
/// An absent upper bound means the range is open above, e.g. `[15.0.0,)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRange {
    pub lower: Version,
    pub lower_inclusive: bool,
    pub upper: Option<Version>,
    pub upper_inclusive: bool,
}

/// Compatibility predicate attached to a dependency edge
///
/// Tests whether a given version of the required artifact satisfies the
/// declaration. `Exact` compares version strings byte-for-byte, so it
/// accepts versions the `Version` parser would reject. `Range` parses the
/// candidate first; an unparsable candidate never matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VersionSpec {
    Exact(String),
    Range(VersionRange),
}

/// Version parsing and validation errors
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Invalid version format: {input}")]
    InvalidFormat { input: String },

    #[error("Invalid number in version: {component}")]
    InvalidNumber { component: String },

    #[error("Invalid version range: {input}")]
    InvalidRange { input: String },

    #[error("Empty bound in version range: {input}")]
    EmptyBound { input: String },
}

impl Version {
    /// Create a new version with no qualifier
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            qualifier: None,
        }
    }

    /// Check if this version has a qualifier suffix
    pub fn is_qualified(&self) -> bool {
        self.qualifier.is_some()
    }

    /// Ordering on the numeric triple only (qualifiers never order)
    fn numeric_cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch))
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        // Split on '-' for the qualifier
        let (core_part, qualifier) = match input.split_once('-') {
            Some((c, q)) => (c, Some(q.to_string())),
            None => (input, None),
        };

        // Parse major.minor.patch
        let parts: Vec<&str> = core_part.split('.').collect();
        if parts.len() != 3 {
            return Err(VersionError::InvalidFormat {
                input: input.to_string(),
            });
        }

        let major = parts[0].parse().map_err(|_| VersionError::InvalidNumber {
            component: parts[0].to_string(),
        })?;
        let minor = parts[1].parse().map_err(|_| VersionError::InvalidNumber {
            component: parts[1].to_string(),
        })?;
        let patch = parts[2].parse().map_err(|_| VersionError::InvalidNumber {
            component: parts[2].to_string(),
        })?;

        Ok(Version {
            major,
            minor,
            patch,
            qualifier,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if let Some(ref qualifier) = self.qualifier {
            write!(f, "-{}", qualifier)?;
        }

        Ok(())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.numeric_cmp(other)
    }
}

impl VersionRange {
    /// Check if a version falls inside this range
    pub fn contains(&self, version: &Version) -> bool {
        let above_lower = match version.cmp(&self.lower) {
            Ordering::Greater => true,
            Ordering::Equal => self.lower_inclusive,
            Ordering::Less => false,
        };
        if !above_lower {
            return false;
        }

        match self.upper {
            None => true,
            Some(ref upper) => match version.cmp(upper) {
                Ordering::Less => true,
                Ordering::Equal => self.upper_inclusive,
                Ordering::Greater => false,
            },
        }
    }
}

impl FromStr for VersionRange {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        let lower_inclusive = match input.chars().next() {
            Some('[') => true,
            Some('(') => false,
            _ => {
                return Err(VersionError::InvalidRange {
                    input: input.to_string(),
                })
            }
        };
        let upper_inclusive = match input.chars().last() {
            Some(']') => true,
            Some(')') => false,
            _ => {
                return Err(VersionError::InvalidRange {
                    input: input.to_string(),
                })
            }
        };

        let inner = &input[1..input.len() - 1];
        let (lower_str, upper_str) = inner.split_once(',').ok_or(VersionError::InvalidRange {
            input: input.to_string(),
        })?;

        let lower_str = lower_str.trim();
        if lower_str.is_empty() {
            return Err(VersionError::EmptyBound {
                input: input.to_string(),
            });
        }
        let lower = Version::from_str(lower_str)?;

        // An empty upper bound leaves the range open above
        let upper_str = upper_str.trim();
        let upper = if upper_str.is_empty() {
            None
        } else {
            Some(Version::from_str(upper_str)?)
        };

        Ok(VersionRange {
            lower,
            lower_inclusive,
            upper,
            upper_inclusive,
        })
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.lower_inclusive { '[' } else { '(' })?;
        write!(f, "{},", self.lower)?;
        if let Some(ref upper) = self.upper {
            write!(f, "{}", upper)?;
        }
        write!(f, "{}", if self.upper_inclusive { ']' } else { ')' })
    }
}

impl VersionSpec {
    /// Parse a spec string: bracket or paren prefix selects a range,
    /// anything else is an exact version string
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let input = input.trim();

        if input.starts_with('[') || input.starts_with('(') {
            Ok(VersionSpec::Range(VersionRange::from_str(input)?))
        } else if input.is_empty() {
            Err(VersionError::InvalidFormat {
                input: input.to_string(),
            })
        } else {
            Ok(VersionSpec::Exact(input.to_string()))
        }
    }

    /// Create an exact spec for a version string
    pub fn exact(version: &str) -> Self {
        VersionSpec::Exact(version.to_string())
    }

    /// Check if a version string satisfies this spec
    pub fn matches(&self, version: &str) -> bool {
        match self {
            VersionSpec::Exact(expected) => expected == version.trim(),
            VersionSpec::Range(range) => match Version::from_str(version) {
                Ok(parsed) => range.contains(&parsed),
                // A version the range cannot interpret is not covered by it
                Err(_) => false,
            },
        }
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSpec::Exact(version) => write!(f, "{}", version),
            VersionSpec::Range(range) => write!(f, "{}", range),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parsing() {
        let v = Version::from_str("15.0.1").unwrap();
        assert_eq!(v.major, 15);
        assert_eq!(v.minor, 0);
        assert_eq!(v.patch, 1);
        assert_eq!(v.qualifier, None);
    }

    #[test]
    fn test_version_with_qualifier() {
        let v = Version::from_str("1.2.3-beta1").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
        assert_eq!(v.qualifier, Some("beta1".to_string()));
        assert!(v.is_qualified());
    }

    #[test]
    fn test_version_rejects_bad_input() {
        assert!(Version::from_str("1.2").is_err());
        assert!(Version::from_str("1.2.3.4").is_err());
        assert!(Version::from_str("a.b.c").is_err());
        assert!(Version::from_str("").is_err());
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");

        let v = Version {
            major: 16,
            minor: 0,
            patch: 0,
            qualifier: Some("rc1".to_string()),
        };
        assert_eq!(v.to_string(), "16.0.0-rc1");
    }

    #[test]
    fn test_version_ordering_ignores_qualifier() {
        let plain = Version::new(1, 0, 0);
        let qualified = Version::from_str("1.0.0-beta1").unwrap();

        assert_eq!(plain.cmp(&qualified), Ordering::Equal);
        assert_ne!(plain, qualified);
    }

    #[test]
    fn test_range_half_open() {
        let range = VersionRange::from_str("[15.0.0,16.0.0)").unwrap();

        assert!(range.contains(&Version::new(15, 0, 0)));
        assert!(range.contains(&Version::new(15, 9, 9)));
        assert!(!range.contains(&Version::new(16, 0, 0)));
        assert!(!range.contains(&Version::new(14, 9, 9)));
    }

    #[test]
    fn test_range_closed() {
        let range = VersionRange::from_str("[1.0.0,2.0.0]").unwrap();

        assert!(range.contains(&Version::new(1, 0, 0)));
        assert!(range.contains(&Version::new(2, 0, 0)));
        assert!(!range.contains(&Version::new(2, 0, 1)));
    }

    #[test]
    fn test_range_open_lower() {
        let range = VersionRange::from_str("(1.0.0,2.0.0)").unwrap();

        assert!(!range.contains(&Version::new(1, 0, 0)));
        assert!(range.contains(&Version::new(1, 0, 1)));
    }

    #[test]
    fn test_range_unbounded_above() {
        let range = VersionRange::from_str("[15.0.0,)").unwrap();

        assert!(range.contains(&Version::new(15, 0, 0)));
        assert!(range.contains(&Version::new(999, 0, 0)));
        assert!(!range.contains(&Version::new(14, 9, 9)));
    }

    #[test]
    fn test_range_rejects_bad_input() {
        assert!(VersionRange::from_str("15.0.0").is_err());
        assert!(VersionRange::from_str("[15.0.0]").is_err());
        assert!(VersionRange::from_str("[,16.0.0)").is_err());
        assert!(VersionRange::from_str("[a,b)").is_err());
    }

    #[test]
    fn test_spec_exact() {
        let spec = VersionSpec::parse("16.0.1").unwrap();

        assert!(spec.matches("16.0.1"));
        assert!(!spec.matches("16.0.2"));
        // Exact specs work on strings the Version parser rejects
        let spec = VersionSpec::parse("2020.weird").unwrap();
        assert!(spec.matches("2020.weird"));
    }

    #[test]
    fn test_spec_range() {
        let spec = VersionSpec::parse("[15.0.0,16.0.0)").unwrap();

        assert!(spec.matches("15.0.1"));
        assert!(!spec.matches("16.0.0"));
        // Unparsable candidates never match a range
        assert!(!spec.matches("not-a-version"));
    }

    #[test]
    fn test_spec_rejects_empty() {
        assert!(VersionSpec::parse("").is_err());
        assert!(VersionSpec::parse("  ").is_err());
    }
}
