use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A three-part version number: `major.minor.subversion`.
///
/// Ordering is lexicographic over the three components, which is what the
/// derived `Ord` gives us given the field order below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VersionTriple {
    pub major: u32,
    pub minor: u32,
    pub subversion: u32,
}

impl VersionTriple {
    pub const fn new(major: u32, minor: u32, subversion: u32) -> Self {
        Self {
            major,
            minor,
            subversion,
        }
    }

    /// True when both triples share `major.minor`.
    pub fn same_generation(&self, other: &VersionTriple) -> bool {
        self.major == other.major && self.minor == other.minor
    }

    /// The `(major, minor)` pair, for comparisons that ignore the subversion.
    pub fn generation(&self) -> (u32, u32) {
        (self.major, self.minor)
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.subversion)
    }
}

/// Errors produced when parsing a [`VersionTriple`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTripleError {
    #[error("empty version string")]
    Empty,

    #[error("expected `major.minor[.subversion]`, got {count} components in '{input}'")]
    ComponentCount { input: String, count: usize },

    #[error("invalid version component '{component}' in '{input}'")]
    InvalidComponent { input: String, component: String },
}

impl FromStr for VersionTriple {
    type Err = ParseTripleError;

    /// Accepts `5.16.3`, `v5.16.3`, and `5.16` (subversion defaults to 0).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed.strip_prefix('v').unwrap_or(trimmed);
        if body.is_empty() {
            return Err(ParseTripleError::Empty);
        }

        let parts: Vec<&str> = body.split('.').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(ParseTripleError::ComponentCount {
                input: s.to_string(),
                count: parts.len(),
            });
        }

        let parse = |component: &str| {
            component
                .parse::<u32>()
                .map_err(|_| ParseTripleError::InvalidComponent {
                    input: s.to_string(),
                    component: component.to_string(),
                })
        };

        let major = parse(parts[0])?;
        let minor = parse(parts[1])?;
        let subversion = match parts.get(2) {
            Some(p) => parse(*p)?,
            None => 0,
        };
        Ok(Self::new(major, minor, subversion))
    }
}
