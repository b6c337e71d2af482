//! A naive multi-pattern matcher that matches each pattern separately.

use itertools::Itertools;

use crate::matcher::{PatternID, PatternMatch, SinglePatternMatcher, TextMatcher};
use crate::pattern::{InvalidPattern, Pattern};

/// A matcher for many patterns that runs one [`SinglePatternMatcher`] per
/// pattern.
///
/// Equivalent to [`ManyMatcher`](super::ManyMatcher), but each search
/// costs one text scan per pattern. Mostly useful as a baseline in
/// benchmarking and testing, and as the per-pattern evaluation path of the
/// condition evaluator.
#[derive(Clone, Debug, Default)]
pub struct NaiveManyMatcher {
    matchers: Vec<(PatternID, SinglePatternMatcher)>,
}

impl NaiveManyMatcher {
    /// A matcher with no patterns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher from a list of patterns, with IDs assigned
    /// `0..n` in order.
    pub fn from_patterns(patterns: impl IntoIterator<Item = Pattern>) -> Self {
        let mut matcher = Self::new();
        for (id, pattern) in patterns.into_iter().enumerate() {
            matcher.add_pattern(pattern, id);
        }
        matcher
    }

    /// Add a pattern under a caller-assigned ID.
    pub fn add_pattern(&mut self, pattern: Pattern, id: impl Into<PatternID>) -> PatternID {
        let id = id.into();
        self.matchers.push((id, SinglePatternMatcher::new(pattern)));
        id
    }

    /// Validate `pattern` and add it under `id`.
    ///
    /// Errors on the empty pattern; see [`InvalidPattern`].
    pub fn try_add_pattern(
        &mut self,
        pattern: impl Into<String>,
        id: impl Into<PatternID>,
    ) -> Result<PatternID, InvalidPattern> {
        Ok(self.add_pattern(Pattern::try_new(pattern)?, id))
    }

    /// Discard all patterns, as if freshly constructed.
    pub fn reset(&mut self) {
        self.matchers.clear();
    }
}

impl TextMatcher for NaiveManyMatcher {
    /// Find all occurrences of all patterns, merged into ascending start
    /// position order.
    ///
    /// Unlike [`ManyMatcher`](super::ManyMatcher), the order of matches
    /// sharing a start position is unspecified.
    fn find_matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = PatternMatch> + 'a {
        self.matchers
            .iter()
            .map(move |(id, matcher)| {
                matcher
                    .match_positions(text)
                    .map(move |start| PatternMatch::new(*id, start))
            })
            .kmerge_by(|a, b| a.start <= b.start)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn merges_positions_across_patterns() {
        let mut m = NaiveManyMatcher::new();
        m.try_add_pattern("ab", 0).unwrap();
        m.try_add_pattern("ba", 1).unwrap();
        let starts = m.find_matches("ababa").map(|m| m.start).collect_vec();
        assert_eq!(starts, [0, 1, 2, 3]);
    }

    #[test]
    fn empty_text_yields_no_matches() {
        let m = NaiveManyMatcher::from_patterns(["a".parse().unwrap(), "b".parse().unwrap()]);
        assert_eq!(m.count_matches(""), 0);
    }
}
