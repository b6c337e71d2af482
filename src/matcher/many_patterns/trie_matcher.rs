//! A multi-pattern matcher based on a trie automaton with suffix links.

use std::iter;

use crate::matcher::{PatternID, PatternMatch, TextMatcher};
use crate::pattern::{InvalidPattern, Pattern};
use crate::trie::{root_state, StateID, Trie};

/// A matcher for many patterns, based on a trie automaton with suffix
/// links.
///
/// All patterns are ingested into a shared [`Trie`]; a single
/// left-to-right pass over the text then reports every occurrence of every
/// pattern, including patterns that are suffixes of other matched patterns
/// (searching for `"he"` and `"she"` reports both when `"she"` occurs).
///
/// Adding a pattern only extends the trie structurally. The suffix links
/// that make the trie an automaton are computed on first search and
/// cached; adding further patterns invalidates the cache, so matchers may
/// be extended between searches. Searches take `&self` and the cache is
/// `Sync`, so a constructed matcher can be shared across threads.
#[derive(Clone, Debug, Default)]
pub struct ManyMatcher {
    trie: Trie,
    /// The registered patterns, in registration order.
    patterns: Vec<(PatternID, Pattern)>,
}

impl ManyMatcher {
    /// A matcher with no patterns.
    pub fn new() -> Self {
        Self {
            trie: Trie::new(),
            patterns: Vec::new(),
        }
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
    ///
    /// Walks the trie from the root, appending states for the bytes not
    /// yet present along the pattern's path, and records `id` at the
    /// terminal state. IDs need not be unique: registering the same
    /// pattern twice under two IDs reports both IDs at every occurrence.
    pub fn add_pattern(&mut self, pattern: Pattern, id: impl Into<PatternID>) -> PatternID {
        let id = id.into();
        let terminal = pattern
            .bytes()
            .iter()
            .fold(root_state(), |state, &byte| self.trie.add_child(state, byte));
        self.trie.add_match(terminal, id);
        self.patterns.push((id, pattern));
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

    /// The registered patterns with their IDs, in registration order.
    pub fn patterns(&self) -> &[(PatternID, Pattern)] {
        &self.patterns
    }

    /// Discard all patterns and trie states, as if freshly constructed.
    pub fn reset(&mut self) {
        self.trie.reset();
        self.patterns.clear();
    }

    /// All matches ending at byte position `pos`, where `state` is the
    /// automaton state after consuming `text[..=pos]`.
    ///
    /// Walks the suffix-link chain from `state` up to (and excluding) the
    /// root: every state on the chain spells a suffix of the consumed
    /// text, so its attached patterns all end at `pos`. Deeper states are
    /// visited first, so at equal positions the most specific (longest)
    /// patterns are reported first, each state's IDs in attach order.
    fn matches_ending_at(
        &self,
        state: StateID,
        pos: usize,
    ) -> impl Iterator<Item = PatternMatch> + '_ {
        let mut check = state;
        iter::from_fn(move || {
            (check != root_state()).then(|| {
                let current = check;
                check = self.trie.suffix_link(check);
                current
            })
        })
        .flat_map(move |suffix_state| {
            let start = pos + 1 - self.trie.depth(suffix_state);
            self.trie
                .matches(suffix_state)
                .iter()
                .map(move |&id| PatternMatch::new(id, start))
        })
    }
}

impl TextMatcher for ManyMatcher {
    fn find_matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = PatternMatch> + 'a {
        let mut state = root_state();
        text.bytes().enumerate().flat_map(move |(pos, byte)| {
            state = self.trie.transition(state, byte);
            self.matches_ending_at(state, pos)
        })
    }
}
