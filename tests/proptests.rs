//! Property tests comparing the matchers against naive references.

use itertools::Itertools;
use proptest::prelude::*;

use textmatching::{
    ManyMatcher, NaiveManyMatcher, Pattern, PatternMatch, SinglePatternMatcher, TextMatcher,
};

/// Every window of the text equal to the pattern, by brute force.
fn naive_scan(text: &str, pattern: &str) -> Vec<usize> {
    text.as_bytes()
        .windows(pattern.len())
        .positions(|window| window == pattern.as_bytes())
        .collect()
}

proptest! {
    #[test]
    fn single_pattern_matches_naive_scan(
        text in "[ab]{0,50}",
        pattern in "[ab]{1,6}",
    ) {
        let matcher = SinglePatternMatcher::new(pattern.parse().unwrap());
        prop_assert_eq!(
            matcher.match_positions(&text).collect_vec(),
            naive_scan(&text, &pattern)
        );
    }

    #[test]
    fn many_matcher_agrees_with_naive(
        text in "[abc]{0,60}",
        patterns in prop::collection::vec("[abc]{1,4}", 1..6),
    ) {
        let patterns = patterns
            .into_iter()
            .map(|p| p.parse::<Pattern>().unwrap())
            .collect_vec();
        let trie_matcher = ManyMatcher::from_patterns(patterns.clone());
        let naive_matcher = NaiveManyMatcher::from_patterns(patterns);

        let sort = |mut matches: Vec<PatternMatch>| {
            matches.sort_by_key(|m| (m.start, m.pattern));
            matches
        };
        prop_assert_eq!(
            sort(trie_matcher.find_matches(&text).collect_vec()),
            sort(naive_matcher.find_matches(&text).collect_vec())
        );
    }

    #[test]
    fn search_is_idempotent(
        text in "[ab]{0,40}",
        patterns in prop::collection::vec("[ab]{1,3}", 1..4),
    ) {
        let matcher = ManyMatcher::from_patterns(
            patterns.into_iter().map(|p| p.parse::<Pattern>().unwrap()),
        );
        let first = matcher.find_matches(&text).collect_vec();
        let second = matcher.find_matches(&text).collect_vec();
        prop_assert_eq!(first, second);
    }
}
