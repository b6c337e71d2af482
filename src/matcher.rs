//! The pattern matchers.
//!
//! The [`TextMatcher`] trait is the main interface for substring matching.
//! The following implementations of this trait are provided:
//!  - [`SinglePatternMatcher`], which matches a single pattern,
//!  - [`NaiveManyMatcher`], matching one pattern at a time using
//!    [`SinglePatternMatcher`]. Mostly useful as a benchmark baseline and
//!    for testing.
//!  - [`ManyMatcher`], which matches many patterns at once. The main
//!    matcher implementation of this crate.

mod many_patterns;
mod single_pattern;

use std::fmt::{self, Debug, Display};

use derive_more::{From, Into};

pub use self::many_patterns::{ManyMatcher, NaiveManyMatcher};
pub use self::single_pattern::SinglePatternMatcher;

/// Identify patterns with IDs.
///
/// IDs are caller-assigned and need not be unique: the same pattern string
/// may be registered under several IDs, in which case every occurrence is
/// reported once per ID.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, From, Into, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PatternID(pub usize);

impl Debug for PatternID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl Display for PatternID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID({})", self.0)
    }
}

/// Match patterns on text.
pub trait TextMatcher {
    /// Find all pattern occurrences in `text`.
    ///
    /// Occurrences are yielded in ascending order of their start position.
    /// Overlapping occurrences are all reported.
    fn find_matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = PatternMatch> + 'a;

    /// The total number of pattern occurrences in `text`.
    fn count_matches(&self, text: &str) -> usize {
        self.find_matches(text).count()
    }
}

/// A match instance returned by a [`TextMatcher`].
///
/// The `pattern` indicates which pattern matches; `start` is the 0-indexed
/// byte offset in the text at which the occurrence begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PatternMatch {
    /// The matching pattern ID.
    pub pattern: PatternID,

    /// The start position of the occurrence in the text.
    pub start: usize,
}

impl PatternMatch {
    /// Create a new pattern match result.
    pub fn new(pattern: PatternID, start: usize) -> Self {
        Self { pattern, start }
    }
}

impl From<(PatternID, usize)> for PatternMatch {
    fn from((pattern, start): (PatternID, usize)) -> Self {
        Self::new(pattern, start)
    }
}
