//! The trie automaton backing the multi-pattern matcher.
//!
//! A trie stores a set of patterns in a tree where each edge is labeled by
//! a byte and each path from the root spells a prefix of one or more
//! inserted patterns. Augmented with suffix links, the trie becomes an
//! automaton that can follow arbitrary input: whenever no direct edge
//! matches the next byte, the automaton falls back to the state reached by
//! the longest proper suffix of the current path that is itself a path
//! from the root.
//!
//! States are stored in a single growable arena and addressed by
//! [`StateID`]; they are never moved once appended, so IDs stay valid for
//! the lifetime of the trie.

use std::collections::VecDeque;

use derive_more::{From, Into};
use once_cell::sync::OnceCell;
use smallvec::SmallVec;

use crate::matcher::PatternID;
use crate::HashMap;

/// A state ID in the trie automaton.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, From, Into, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateID(usize);

impl StateID {
    fn index(self) -> usize {
        self.0
    }
}

/// The root state of any trie.
pub fn root_state() -> StateID {
    StateID(0)
}

/// A state in the trie.
#[derive(Clone, Debug, Default)]
struct State {
    /// Outgoing edges, keyed by byte.
    children: HashMap<u8, StateID>,
    /// Edge distance from the root. A pattern terminating here has this
    /// byte length.
    depth: usize,
    /// Patterns terminating exactly at this state, in insertion order.
    matches: SmallVec<[PatternID; 1]>,
}

/// A byte trie with lazily computed suffix links.
///
/// The trie is built incrementally with [`Trie::add_child`] and
/// [`Trie::add_match`]. Suffix links are derived data: they are computed by
/// a single breadth-first sweep on first use, cached, and invalidated
/// whenever the trie structure changes. The cache is populated
/// idempotently behind a `Sync` cell, so shared read-only use from several
/// threads is safe once construction is done.
#[derive(Clone, Debug)]
pub struct Trie {
    states: Vec<State>,
    /// Suffix link of every state, indexed by state.
    links: OnceCell<Vec<StateID>>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// A trie holding only the root state.
    pub fn new() -> Self {
        Self {
            states: vec![State::default()],
            links: OnceCell::new(),
        }
    }

    /// The number of states, including the root.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// The child of `state` along the edge labeled `symbol`, if any.
    pub fn child(&self, state: StateID, symbol: u8) -> Option<StateID> {
        self.states[state.index()].children.get(&symbol).copied()
    }

    /// Follow the edge of `state` labeled `symbol`, appending a new state
    /// if the edge does not exist yet.
    ///
    /// Appending a state invalidates the suffix links; they are recomputed
    /// on next use.
    pub fn add_child(&mut self, state: StateID, symbol: u8) -> StateID {
        if let Some(child) = self.child(state, symbol) {
            return child;
        }
        let child: StateID = self.states.len().into();
        let depth = self.states[state.index()].depth + 1;
        self.states.push(State {
            depth,
            ..Default::default()
        });
        self.states[state.index()].children.insert(symbol, child);
        self.links.take();
        child
    }

    /// Record that a pattern terminates at `state`.
    ///
    /// IDs are kept in insertion order and are not deduplicated.
    pub fn add_match(&mut self, state: StateID, id: PatternID) {
        self.states[state.index()].matches.push(id);
    }

    /// The patterns terminating exactly at `state`, in insertion order.
    pub fn matches(&self, state: StateID) -> &[PatternID] {
        &self.states[state.index()].matches
    }

    /// The edge distance of `state` from the root.
    pub fn depth(&self, state: StateID) -> usize {
        self.states[state.index()].depth
    }

    /// The suffix link of `state`.
    ///
    /// This is the state reached by the longest proper suffix of `state`'s
    /// path that is itself a path from the root. The root links to itself
    /// and its link is never followed further.
    pub fn suffix_link(&self, state: StateID) -> StateID {
        self.suffix_links()[state.index()]
    }

    /// The total transition function of the automaton.
    ///
    /// Follows the direct edge for `symbol` if there is one; otherwise
    /// falls back along suffix links until an edge is found or the root,
    /// which absorbs all unmatched bytes, is reached.
    pub fn transition(&self, state: StateID, symbol: u8) -> StateID {
        self.fallback(state, symbol, self.suffix_links())
    }

    /// Discard everything but a fresh root state.
    pub fn reset(&mut self) {
        self.states.clear();
        self.states.push(State::default());
        self.links.take();
    }

    /// The suffix link table, computed on first use.
    fn suffix_links(&self) -> &[StateID] {
        self.links.get_or_init(|| self.compute_suffix_links())
    }

    /// Compute all suffix links in one breadth-first sweep.
    ///
    /// Children of the root link back to the root; any deeper state links
    /// to the state reached from its parent's link by the incoming byte.
    /// Level order guarantees that the links of shallower states are
    /// available by the time they are needed.
    fn compute_suffix_links(&self) -> Vec<StateID> {
        let mut links = vec![root_state(); self.states.len()];
        let mut queue = VecDeque::from([root_state()]);
        while let Some(state) = queue.pop_front() {
            for (&symbol, &child) in &self.states[state.index()].children {
                if state != root_state() {
                    links[child.index()] = self.fallback(links[state.index()], symbol, &links);
                }
                queue.push_back(child);
            }
        }
        links
    }

    fn fallback(&self, mut state: StateID, symbol: u8, links: &[StateID]) -> StateID {
        loop {
            if let Some(next) = self.child(state, symbol) {
                return next;
            }
            if state == root_state() {
                return root_state();
            }
            state = links[state.index()];
        }
    }
}
