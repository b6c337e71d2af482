//! A matcher for a single pattern.
//!
//! The matcher scans text with a prefix-function automaton, the classical
//! Knuth–Morris–Pratt construction. It is the building block of
//! [`NaiveManyMatcher`](super::NaiveManyMatcher) and a baseline for
//! [`ManyMatcher`](super::ManyMatcher).

use crate::pattern::Pattern;

use super::{PatternID, PatternMatch, TextMatcher};

/// A matcher for a single pattern, based on a prefix-function automaton.
///
/// The prefix function of the pattern is computed once at construction;
/// every search then runs in time linear in the text length, with no
/// allocation. The matcher holds no mutable state, so searches are
/// independent of each other and one instance can be shared freely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SinglePatternMatcher {
    pattern: Pattern,
    /// `prefix_fn[i]` is the length of the longest proper prefix of
    /// `pattern[0..=i]` that is also a suffix of it.
    prefix_fn: Vec<usize>,
}

impl SinglePatternMatcher {
    /// Create a matcher that searches for `pattern`.
    pub fn new(pattern: Pattern) -> Self {
        let prefix_fn = prefix_function(pattern.bytes());
        Self { pattern, prefix_fn }
    }

    /// The pattern this matcher searches for.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// All start positions at which the pattern occurs in `text`.
    ///
    /// Positions are yielded in strictly increasing order. Overlapping
    /// occurrences are all reported: searching `"aaa"` for `"aa"` yields
    /// the positions 0 and 1.
    pub fn match_positions<'a>(&'a self, text: &'a str) -> impl Iterator<Item = usize> + 'a {
        let pattern = self.pattern.bytes();
        let mut len = 0;
        text.bytes().enumerate().filter_map(move |(i, byte)| {
            while len > 0 && pattern[len] != byte {
                len = self.prefix_fn[len - 1];
            }
            if pattern[len] == byte {
                len += 1;
            }
            if len == pattern.len() {
                // Roll back to the longest border so that occurrences
                // overlapping this one are found too.
                len = self.prefix_fn[len - 1];
                Some(i + 1 - pattern.len())
            } else {
                None
            }
        })
    }

    /// Whether the pattern occurs in `text` at all.
    pub fn match_exists(&self, text: &str) -> bool {
        self.match_positions(text).next().is_some()
    }

    /// The number of (possibly overlapping) occurrences of the pattern in
    /// `text`.
    pub fn count_matches(&self, text: &str) -> usize {
        self.match_positions(text).count()
    }
}

impl TextMatcher for SinglePatternMatcher {
    /// Find all occurrences of the pattern, reported under
    /// [`PatternID::default()`].
    fn find_matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = PatternMatch> + 'a {
        self.match_positions(text)
            .map(|start| PatternMatch::new(PatternID::default(), start))
    }
}

/// The prefix function of `pattern`.
///
/// Uses the standard amortised-linear construction: the border length `len`
/// only ever increases by one per iteration and is rolled back through
/// previously computed values on mismatch.
fn prefix_function(pattern: &[u8]) -> Vec<usize> {
    let mut prefix_fn = vec![0; pattern.len()];
    let mut len = 0;
    for i in 1..pattern.len() {
        while len > 0 && pattern[len] != pattern[i] {
            len = prefix_fn[len - 1];
        }
        if pattern[len] == pattern[i] {
            len += 1;
        }
        prefix_fn[i] = len;
    }
    prefix_fn
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rstest::rstest;

    use super::*;

    fn matcher(pattern: &str) -> SinglePatternMatcher {
        SinglePatternMatcher::new(pattern.parse().unwrap())
    }

    #[test]
    fn test_prefix_function() {
        assert_eq!(prefix_function(b"abcabcd"), [0, 0, 0, 1, 2, 3, 0]);
        assert_eq!(prefix_function(b"aabaaab"), [0, 1, 0, 1, 2, 2, 3]);
        assert_eq!(prefix_function(b"aaaa"), [0, 1, 2, 3]);
    }

    #[rstest]
    #[case("aa", "aaaa", vec![0, 1, 2])]
    #[case("aba", "ababa", vec![0, 2])]
    #[case("needle", "needle in a needlestack", vec![0, 12])]
    #[case("xyz", "no occurrence here", vec![])]
    #[case("longer than the text", "short", vec![])]
    #[case("a", "", vec![])]
    fn match_positions(#[case] pattern: &str, #[case] text: &str, #[case] expected: Vec<usize>) {
        assert_eq!(matcher(pattern).match_positions(text).collect_vec(), expected);
    }

    #[test]
    fn match_exists_and_count() {
        let m = matcher("ab");
        assert!(m.match_exists("drab"));
        assert!(!m.match_exists("ba"));
        assert_eq!(m.count_matches("abab"), 2);
        assert_eq!(m.count_matches(""), 0);
    }

    #[test]
    fn searches_are_independent() {
        let m = matcher("aa");
        let first = m.match_positions("aaa").collect_vec();
        let second = m.match_positions("aaa").collect_vec();
        assert_eq!(first, second);
    }
}
