//! Aggregate completer - fans one request out to many completers
//!
//! This module provides the completer used at the top of a shell's completion
//! stack. It runs every child completer against the same buffer and cursor,
//! keeps the candidates of the children that reported the deepest replacement
//! offset, and merges them into one sorted, duplicate-free list.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::Completer;
use crate::error::Result;

/// One child completer's result, recorded during aggregation.
struct Completion {
    /// Offset the child reported
    offset: Option<usize>,
    /// Candidate list the child produced
    candidates: Vec<String>,
}

/// Completer that aggregates several child completers into one
///
/// Children run in insertion order, each against a private copy of the
/// incoming accumulator, so no child can observe another child's output.
/// Only children that reach the maximum replacement offset contribute
/// candidates; a child whose suggestions would replace text further from
/// the cursor is dropped entirely. The aggregate implements [`Completer`]
/// itself, so aggregates nest.
pub struct AggregateCompleter {
    /// Child completers, run in order
    completers: Vec<Arc<dyn Completer>>,
}

impl AggregateCompleter {
    /// Create an aggregate completer with no children
    pub fn new() -> Self {
        Self {
            completers: Vec::new(),
        }
    }

    /// Create an aggregate completer from a collection of children
    ///
    /// # Arguments
    /// * `completers` - Child completers, kept in iteration order
    pub fn with_completers<I>(completers: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Completer>>,
    {
        Self {
            completers: completers.into_iter().collect(),
        }
    }

    /// Append a child completer
    pub fn add_completer(&mut self, completer: Arc<dyn Completer>) {
        self.completers.push(completer);
    }

    /// Immutable view of the child completers
    pub fn completers(&self) -> &[Arc<dyn Completer>] {
        &self.completers
    }

    /// Mutable access to the backing child list
    ///
    /// There is no defensive copy: additions and removals are visible to
    /// the next [`complete`](Completer::complete) call.
    pub fn completers_mut(&mut self) -> &mut Vec<Arc<dyn Completer>> {
        &mut self.completers
    }
}

impl Default for AggregateCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AggregateCompleter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AggregateCompleter")
            .field("completers", &self.completers.len())
            .finish()
    }
}

impl Completer for AggregateCompleter {
    /// Run every child and merge the winners' candidates
    ///
    /// # Arguments
    /// * `buffer` - The input line
    /// * `cursor` - Cursor position (byte index)
    /// * `candidates` - Accumulator the merged candidates are appended to
    ///
    /// # Returns
    /// * `Result<Option<usize>>` - The maximum offset any child reported,
    ///   or `None` when there are no children or none could complete
    fn complete(
        &self,
        buffer: &str,
        cursor: usize,
        candidates: &mut Vec<String>,
    ) -> Result<Option<usize>> {
        let mut completions = Vec::with_capacity(self.completers.len());

        // Run each child against a copy of the accumulator as it was on
        // entry and record what it returned. A failing child aborts the
        // whole call before the caller's accumulator is touched.
        let mut max: Option<usize> = None;
        for completer in &self.completers {
            let mut scratch = candidates.clone();
            let offset = completer.complete(buffer, cursor, &mut scratch)?;

            max = max.max(offset);
            completions.push(Completion {
                offset,
                candidates: scratch,
            });
        }

        // Merge the candidates of exactly the children that reached the
        // maximum offset, sorted and deduplicated.
        let merged: BTreeSet<String> = completions
            .into_iter()
            .filter(|completion| completion.offset == max)
            .flat_map(|completion| completion.candidates)
            .collect();

        debug!(
            "aggregate completion: {} children, offset {:?}, {} candidates",
            self.completers.len(),
            max,
            merged.len()
        );

        candidates.extend(merged);
        Ok(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test completer with a fixed offset and candidate list.
    struct FixedCompleter {
        offset: Option<usize>,
        candidates: Vec<String>,
    }

    impl FixedCompleter {
        fn new<I, S>(offset: Option<usize>, candidates: I) -> Arc<dyn Completer>
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Arc::new(Self {
                offset,
                candidates: candidates.into_iter().map(Into::into).collect(),
            })
        }
    }

    impl Completer for FixedCompleter {
        fn complete(
            &self,
            _buffer: &str,
            _cursor: usize,
            candidates: &mut Vec<String>,
        ) -> Result<Option<usize>> {
            candidates.extend(self.candidates.iter().cloned());
            Ok(self.offset)
        }
    }

    /// Test completer that always fails.
    struct FailingCompleter;

    impl Completer for FailingCompleter {
        fn complete(
            &self,
            _buffer: &str,
            _cursor: usize,
            _candidates: &mut Vec<String>,
        ) -> Result<Option<usize>> {
            Err("completer exploded".into())
        }
    }

    #[test]
    fn test_empty_aggregate_returns_none() {
        let aggregate = AggregateCompleter::new();
        let mut candidates = Vec::new();

        let offset = aggregate.complete("", 0, &mut candidates).unwrap();

        assert_eq!(offset, None);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_single_child_passthrough() {
        let aggregate =
            AggregateCompleter::with_completers([FixedCompleter::new(Some(3), ["foo", "bar"])]);
        let mut candidates = Vec::new();

        let offset = aggregate.complete("xyz", 3, &mut candidates).unwrap();

        assert_eq!(offset, Some(3));
        assert_eq!(candidates, vec!["bar", "foo"]);
    }

    #[test]
    fn test_max_offset_wins() {
        let aggregate = AggregateCompleter::with_completers([
            FixedCompleter::new(Some(2), ["zeta"]),
            FixedCompleter::new(Some(5), ["alpha"]),
        ]);
        let mut candidates = Vec::new();

        let offset = aggregate.complete("input", 5, &mut candidates).unwrap();

        // The shallower child ran fine but its candidates are dropped
        assert_eq!(offset, Some(5));
        assert_eq!(candidates, vec!["alpha"]);
    }

    #[test]
    fn test_tied_children_merge_sorted_dedup() {
        let aggregate = AggregateCompleter::with_completers([
            FixedCompleter::new(Some(4), ["cat", "dog"]),
            FixedCompleter::new(Some(4), ["dog", "emu"]),
        ]);
        let mut candidates = Vec::new();

        let offset = aggregate.complete("pets", 4, &mut candidates).unwrap();

        assert_eq!(offset, Some(4));
        assert_eq!(candidates, vec!["cat", "dog", "emu"]);
    }

    #[test]
    fn test_silent_children_produce_nothing() {
        let aggregate = AggregateCompleter::with_completers([
            FixedCompleter::new(None, Vec::<String>::new()),
            FixedCompleter::new(None, Vec::<String>::new()),
        ]);
        let mut candidates = Vec::new();

        let offset = aggregate.complete("abc", 3, &mut candidates).unwrap();

        assert_eq!(offset, None);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_matching_child_beats_silent_child() {
        let aggregate = AggregateCompleter::with_completers([
            FixedCompleter::new(None, Vec::<String>::new()),
            FixedCompleter::new(Some(0), ["match"]),
        ]);
        let mut candidates = Vec::new();

        let offset = aggregate.complete("m", 1, &mut candidates).unwrap();

        assert_eq!(offset, Some(0));
        assert_eq!(candidates, vec!["match"]);
    }

    #[test]
    fn test_children_isolated_from_each_other() {
        // Appends a marker if it ever sees a sibling's candidate, which the
        // scratch-copy isolation must prevent.
        struct Spy;

        impl Completer for Spy {
            fn complete(
                &self,
                _buffer: &str,
                _cursor: usize,
                candidates: &mut Vec<String>,
            ) -> Result<Option<usize>> {
                if candidates.iter().any(|c| c == "planted") {
                    candidates.push("saw-sibling-output".to_string());
                }
                Ok(None)
            }
        }

        let aggregate = AggregateCompleter::with_completers([
            FixedCompleter::new(Some(0), ["planted"]),
            Arc::new(Spy) as Arc<dyn Completer>,
        ]);
        let mut candidates = Vec::new();

        aggregate.complete("x", 1, &mut candidates).unwrap();

        assert!(!candidates.iter().any(|c| c == "saw-sibling-output"));
    }

    #[test]
    fn test_child_order_does_not_change_result() {
        let children = [
            FixedCompleter::new(Some(4), ["cat", "dog"]),
            FixedCompleter::new(Some(2), ["zebra"]),
            FixedCompleter::new(Some(4), ["dog", "emu"]),
        ];

        let forward = AggregateCompleter::with_completers(children.clone());
        let reversed = AggregateCompleter::with_completers(children.iter().rev().cloned());

        let mut forward_candidates = Vec::new();
        let mut reversed_candidates = Vec::new();
        let forward_offset = forward.complete("pets", 4, &mut forward_candidates).unwrap();
        let reversed_offset = reversed
            .complete("pets", 4, &mut reversed_candidates)
            .unwrap();

        assert_eq!(forward_offset, reversed_offset);
        assert_eq!(forward_candidates, reversed_candidates);
    }

    #[test]
    fn test_repeat_call_is_idempotent() {
        let aggregate =
            AggregateCompleter::with_completers([FixedCompleter::new(Some(1), ["one", "two"])]);

        let mut first = Vec::new();
        let mut second = Vec::new();
        let first_offset = aggregate.complete("t", 1, &mut first).unwrap();
        let second_offset = aggregate.complete("t", 1, &mut second).unwrap();

        assert_eq!(first_offset, second_offset);
        assert_eq!(first, second);
    }

    #[test]
    fn test_child_error_propagates() {
        let aggregate = AggregateCompleter::with_completers([
            FixedCompleter::new(Some(0), ["early"]),
            Arc::new(FailingCompleter) as Arc<dyn Completer>,
        ]);
        let mut candidates = Vec::new();

        let result = aggregate.complete("x", 1, &mut candidates);

        assert!(result.is_err());
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_completers_mut_is_live() {
        let mut aggregate = AggregateCompleter::new();
        assert!(aggregate.completers().is_empty());

        aggregate
            .completers_mut()
            .push(FixedCompleter::new(Some(0), ["late"]));

        let mut candidates = Vec::new();
        let offset = aggregate.complete("l", 1, &mut candidates).unwrap();

        assert_eq!(offset, Some(0));
        assert_eq!(candidates, vec!["late"]);
        assert_eq!(aggregate.completers().len(), 1);
    }

    #[test]
    fn test_nested_aggregates_compose() {
        let inner = AggregateCompleter::with_completers([FixedCompleter::new(Some(2), ["inner"])]);
        let outer = AggregateCompleter::with_completers([
            Arc::new(inner) as Arc<dyn Completer>,
            FixedCompleter::new(Some(2), ["outer"]),
        ]);
        let mut candidates = Vec::new();

        let offset = outer.complete("ab", 2, &mut candidates).unwrap();

        assert_eq!(offset, Some(2));
        assert_eq!(candidates, vec!["inner", "outer"]);
    }

    #[test]
    fn test_baseline_items_ride_along_in_merge() {
        // Children see a copy of the incoming accumulator, so the merged
        // output re-includes pre-existing items alongside the new ones.
        let aggregate =
            AggregateCompleter::with_completers([FixedCompleter::new(Some(0), ["new"])]);
        let mut candidates = vec!["existing".to_string()];

        aggregate.complete("n", 1, &mut candidates).unwrap();

        assert_eq!(candidates, vec!["existing", "existing", "new"]);
    }
}
