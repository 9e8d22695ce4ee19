use crate::error::{NextVersionError, Result};
use std::fmt;

/// Semantic version representation
///
/// Field order matters: the derived `Ord` compares major, then minor, then
/// patch, which is semantic-version precedence for plain `X.Y.Z` versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Baseline used when no version tag exists or the computation fails
    pub const DEFAULT: Version = Version::new(1, 0, 0);

    /// Create a new version
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a strict `MAJOR.MINOR.PATCH` string (e.g., "1.2.3")
    ///
    /// No `v` prefix, no pre-release or build suffix, digits only.
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() != 3 {
            return Err(NextVersionError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                text
            )));
        }

        let major = parse_component(text, "major", parts[0])?;
        let minor = parse_component(text, "minor", parts[1])?;
        let patch = parse_component(text, "patch", parts[2])?;

        Ok(Version::new(major, minor, patch))
    }

    /// Bump version according to bump type
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        let overflow = || {
            NextVersionError::version(format!("Cannot apply {} bump to {}", bump_type, self))
        };

        let bumped = match bump_type {
            VersionBump::Major => Version {
                major: self.major.checked_add(1).ok_or_else(overflow)?,
                minor: 0,
                patch: 0,
            },
            VersionBump::Minor => Version {
                major: self.major,
                minor: self.minor.checked_add(1).ok_or_else(overflow)?,
                patch: 0,
            },
            VersionBump::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1).ok_or_else(overflow)?,
            },
        };
        Ok(bumped)
    }
}

// `u64::from_str` would also accept a leading '+'.
fn parse_component(text: &str, name: &str, part: &str) -> Result<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NextVersionError::version(format!(
            "Invalid {} version in '{}': '{}'",
            name, text, part
        )));
    }
    part.parse::<u64>().map_err(|_| {
        NextVersionError::version(format!(
            "{} version out of range in '{}': {}",
            name, text, part
        ))
    })
}

impl Default for Version {
    fn default() -> Self {
        Version::DEFAULT
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_rejects_prefix_and_suffix() {
        assert!(Version::parse("v1.2.3").is_err());
        assert!(Version::parse("1.2.3-rc1").is_err());
        assert!(Version::parse("1.2.3+build").is_err());
        assert!(Version::parse("+1.2.3").is_err());
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("1.2.3.4").is_err());
        assert!(Version::parse("1..3").is_err());
        assert!(Version::parse("").is_err());
    }

    #[test]
    fn test_version_parse_overflow() {
        assert!(Version::parse("99999999999999999999999.0.0").is_err());
    }

    #[test]
    fn test_version_parse_leading_zeros_are_numeric() {
        assert_eq!(Version::parse("01.002.3").unwrap(), Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(VersionBump::Major).unwrap(), Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(VersionBump::Minor).unwrap(), Version::new(1, 3, 0));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(VersionBump::Patch).unwrap(), Version::new(1, 2, 4));
    }

    #[test]
    fn test_version_bump_overflow() {
        let v = Version::new(u64::MAX, 0, 0);
        assert!(v.bump(VersionBump::Major).is_err());
        assert_eq!(v.bump(VersionBump::Minor).unwrap(), Version::new(u64::MAX, 1, 0));
    }

    #[test]
    fn test_version_ordering_is_numeric() {
        assert!(Version::new(1, 10, 0) > Version::new(1, 9, 9));
        assert!(Version::new(2, 0, 0) > Version::new(1, 99, 99));
        assert!(Version::new(0, 0, 10) > Version::new(0, 0, 2));
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
        assert_eq!(Version::parse("1.02.3").unwrap().to_string(), "1.2.3");
    }

    #[test]
    fn test_version_default() {
        assert_eq!(Version::default(), Version::new(1, 0, 0));
    }

    #[test]
    fn test_bump_display() {
        assert_eq!(VersionBump::Major.to_string(), "major");
        assert_eq!(VersionBump::Patch.to_string(), "patch");
    }
}
