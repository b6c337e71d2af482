//! Patterns to search for.

use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use thiserror::Error;

/// A non-empty string of bytes to search for.
///
/// Patterns are matched exactly on their UTF-8 bytes; match positions
/// reported by the matchers are byte offsets into the searched text.
///
/// The empty string is not a valid pattern: it has no well-defined prefix
/// function, and silently skipping it would change match semantics
/// invisibly. All constructors reject it with [`InvalidPattern::Empty`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern(String);

impl Pattern {
    /// Create a pattern, rejecting the empty string.
    pub fn try_new(pattern: impl Into<String>) -> Result<Self, InvalidPattern> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(InvalidPattern::Empty);
        }
        Ok(Self(pattern))
    }

    /// The pattern as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The bytes that are matched against the text.
    pub fn bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// The match length, in bytes.
    // Patterns are never empty, so there is no `is_empty`.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl AsRef<str> for Pattern {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<&str> for Pattern {
    type Error = InvalidPattern;

    fn try_from(pattern: &str) -> Result<Self, Self::Error> {
        Self::try_new(pattern)
    }
}

impl TryFrom<String> for Pattern {
    type Error = InvalidPattern;

    fn try_from(pattern: String) -> Result<Self, Self::Error> {
        Self::try_new(pattern)
    }
}

impl FromStr for Pattern {
    type Err = InvalidPattern;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Self::try_new(pattern)
    }
}

impl Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that occur when constructing patterns.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidPattern {
    /// The empty string cannot be searched for.
    #[error("empty patterns are not supported")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_empty_pattern() {
        assert_eq!(Pattern::try_new(""), Err(InvalidPattern::Empty));
        assert_eq!("".parse::<Pattern>(), Err(InvalidPattern::Empty));
    }

    #[test]
    fn pattern_roundtrip() {
        let p: Pattern = "needle".parse().unwrap();
        assert_eq!(p.as_str(), "needle");
        assert_eq!(p.len(), 6);
        assert_eq!(p.bytes(), b"needle");
    }
}
