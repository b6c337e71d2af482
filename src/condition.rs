//! Occurrence-count conditions on record fields.
//!
//! A [`Condition`] requires that a set of patterns occurs at least a given
//! number of times in one field of a [`Record`]; a [`ConditionSet`] is the
//! conjunction of several conditions. Conditions are evaluated with either
//! matching [`Engine`], with identical accept/reject semantics.

use std::str::FromStr;

use thiserror::Error;

use crate::matcher::{ManyMatcher, NaiveManyMatcher, TextMatcher};
use crate::pattern::{InvalidPattern, Pattern};
use crate::record::Record;

/// The matching engine used to evaluate conditions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Engine {
    /// One prefix-function automaton per pattern
    /// ([`NaiveManyMatcher`]).
    #[display(fmt = "kmp")]
    Kmp,
    /// One trie automaton with suffix links per condition
    /// ([`ManyMatcher`]).
    #[default]
    #[display(fmt = "aho-corasick")]
    AhoCorasick,
}

/// A single search condition on a record field.
///
/// The condition holds when the patterns occur at least `required_count`
/// times *in total* in the selected field: the threshold may be met by one
/// pattern alone or by several patterns together, and overlapping
/// occurrences all count.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    field: usize,
    patterns: Vec<Pattern>,
    required_count: usize,
}

impl Condition {
    /// A condition on the field at position `field`.
    pub fn new(field: usize, patterns: Vec<Pattern>, required_count: usize) -> Self {
        Self {
            field,
            patterns,
            required_count,
        }
    }

    /// The 0-based position of the field the condition applies to.
    pub fn field(&self) -> usize {
        self.field
    }

    /// The patterns whose occurrences are counted.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// The minimum total occurrence count for the condition to hold.
    pub fn required_count(&self) -> usize {
        self.required_count
    }

    /// Total occurrences of the condition's patterns in `record`'s field.
    ///
    /// A field the record does not have yields no occurrences. The matcher
    /// is built afresh per call; callers evaluating one condition against
    /// many records can instead build a matcher once and share it.
    pub fn count_occurrences(&self, record: &Record, engine: Engine) -> usize {
        let Some(text) = record.field(self.field) else {
            return 0;
        };
        let patterns = self.patterns.iter().cloned();
        match engine {
            Engine::Kmp => NaiveManyMatcher::from_patterns(patterns).count_matches(text),
            Engine::AhoCorasick => ManyMatcher::from_patterns(patterns).count_matches(text),
        }
    }

    /// Whether `record` satisfies the condition.
    pub fn is_satisfied(&self, record: &Record, engine: Engine) -> bool {
        self.count_occurrences(record, engine) >= self.required_count
    }
}

/// Parse a condition from a `FIELD:PATTERN[,PATTERN...]:COUNT`
/// specification, e.g. `2:Programming:1` or `1:Smith,Jones:2`.
///
/// Patterns may contain `:` (the field is read from the front and the
/// count from the back) but not `,`.
impl FromStr for Condition {
    type Err = ParseConditionError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseConditionError::MalformedSpec(spec.to_string());
        let (field, rest) = spec.split_once(':').ok_or_else(malformed)?;
        let (patterns, count) = rest.rsplit_once(':').ok_or_else(malformed)?;
        let field = field
            .trim()
            .parse()
            .map_err(|_| ParseConditionError::InvalidNumber(field.to_string()))?;
        let required_count = count
            .trim()
            .parse()
            .map_err(|_| ParseConditionError::InvalidNumber(count.to_string()))?;
        let patterns = patterns
            .split(',')
            .map(Pattern::try_new)
            .collect::<Result<_, _>>()?;
        Ok(Self::new(field, patterns, required_count))
    }
}

/// Errors that occur when parsing a condition specification.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseConditionError {
    /// The specification is not of the `FIELD:PATTERNS:COUNT` shape.
    #[error("expected FIELD:PATTERN[,PATTERN...]:COUNT, got {0:?}")]
    MalformedSpec(String),

    /// The field position or the required count is not a number.
    #[error("invalid number in condition: {0:?}")]
    InvalidNumber(String),

    /// One of the listed patterns is invalid.
    #[error(transparent)]
    InvalidPattern(#[from] InvalidPattern),
}

/// A conjunction of conditions.
///
/// A record is accepted only if every condition is satisfied; an empty set
/// accepts every record.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionSet {
    conditions: Vec<Condition>,
}

impl ConditionSet {
    /// A condition set holding `conditions`.
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    /// Add a condition to the set.
    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    /// The conditions in the set.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Whether `record` satisfies every condition in the set.
    pub fn accepts(&self, record: &Record, engine: Engine) -> bool {
        self.conditions
            .iter()
            .all(|condition| condition.is_satisfied(record, engine))
    }
}

impl FromIterator<Condition> for ConditionSet {
    fn from_iter<T: IntoIterator<Item = Condition>>(conditions: T) -> Self {
        Self::new(conditions.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const ENGINES: [Engine; 2] = [Engine::Kmp, Engine::AhoCorasick];

    fn record(fields: &[&str]) -> Record {
        fields.iter().copied().collect()
    }

    fn condition(spec: &str) -> Condition {
        spec.parse().unwrap()
    }

    #[rstest]
    #[case("2:Programming:1", 2, vec!["Programming"], 1)]
    #[case("1:Smith,Jones:2", 1, vec!["Smith", "Jones"], 2)]
    #[case("0: a:b :1", 0, vec![" a:b "], 1)]
    fn parse_condition(
        #[case] spec: &str,
        #[case] field: usize,
        #[case] patterns: Vec<&str>,
        #[case] required_count: usize,
    ) {
        let condition = condition(spec);
        assert_eq!(condition.field(), field);
        assert_eq!(
            condition.patterns().iter().map(Pattern::as_str).collect::<Vec<_>>(),
            patterns
        );
        assert_eq!(condition.required_count(), required_count);
    }

    #[rstest]
    #[case("no colons")]
    #[case("1:missing count")]
    #[case("x:pat:1")]
    #[case("1:pat:x")]
    #[case("1::1")]
    fn parse_condition_errors(#[case] spec: &str) {
        assert!(spec.parse::<Condition>().is_err());
    }

    #[test]
    fn counts_are_summed_over_patterns() {
        let r = record(&["", "John Smith-Jones", ""]);
        let c = condition("1:Smith,Jones:2");
        for engine in ENGINES {
            assert_eq!(c.count_occurrences(&r, engine), 2);
            assert!(c.is_satisfied(&r, engine));
        }
    }

    #[test]
    fn missing_field_counts_zero() {
        let r = record(&["only one field"]);
        let c = condition("5:one:1");
        for engine in ENGINES {
            assert_eq!(c.count_occurrences(&r, engine), 0);
            assert!(!c.is_satisfied(&r, engine));
        }
    }

    #[test]
    fn overlapping_occurrences_count() {
        let r = record(&["aaaa"]);
        let c = condition("0:aa:3");
        for engine in ENGINES {
            assert_eq!(c.count_occurrences(&r, engine), 3);
        }
    }

    #[test]
    fn all_conditions_must_hold() {
        let r = record(&["2024-03-01", "Ada Lovelace", "Programming"]);
        let accepted: ConditionSet = [condition("2:Programming:1"), condition("1:Ada:1")]
            .into_iter()
            .collect();
        let rejected: ConditionSet = [condition("2:Programming:1"), condition("1:Smith:1")]
            .into_iter()
            .collect();
        for engine in ENGINES {
            assert!(accepted.accepts(&r, engine));
            assert!(!rejected.accepts(&r, engine));
        }
    }

    #[test]
    fn empty_set_accepts_everything() {
        let set = ConditionSet::default();
        for engine in ENGINES {
            assert!(set.accepts(&record(&["anything"]), engine));
        }
    }
}
