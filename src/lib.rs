#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod condition;
#[cfg(feature = "cli")]
pub mod io;
pub mod matcher;
pub mod pattern;
pub mod record;
pub mod trie;

pub use condition::{Condition, ConditionSet, Engine, ParseConditionError};
pub use matcher::{
    ManyMatcher, NaiveManyMatcher, PatternID, PatternMatch, SinglePatternMatcher, TextMatcher,
};
pub use pattern::{InvalidPattern, Pattern};
pub use record::Record;

/// A hash map using the fx hash function.
pub type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;
