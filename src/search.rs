//! Match semantics and the per-query match accumulator.
//!
//! A query is processed character by character. The [`MatchAccumulator`]
//! folds the character index lookups into a progressively narrowing candidate
//! set, applying the selected [`MatchType`] predicate at every step. The
//! contract is all-or-nothing: a query matches only if every one of its
//! characters has an index node and the narrowing survives every step.

use std::hash::Hash;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::index::CharNode;
use crate::position::PositionSet;
use crate::registry::TargetRegistry;

/// Matching semantics for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchType {
    /// The query equals a registered search string verbatim.
    Exact,
    /// The query appears as a contiguous run of characters within some
    /// registered string.
    Like,
    /// The query's characters appear in order within some registered string,
    /// possibly separated by gaps.
    SuperLike,
}

/// Transient per-query fold over the character index.
///
/// The state maps each surviving target key to the position set that was
/// relevant to it at the most recently consumed character. Borrows from the
/// index for the duration of one query; nothing is cloned until the final
/// result is materialized.
#[derive(Debug)]
pub struct MatchAccumulator<'a, T> {
    state: Option<AHashMap<&'a T, &'a PositionSet>>,
}

impl<'a, T> MatchAccumulator<'a, T>
where
    T: Eq + Hash,
{
    /// Create an accumulator with no consumed characters.
    pub fn new() -> Self {
        MatchAccumulator { state: None }
    }

    /// Consume one query character whose index node is `node`.
    ///
    /// The first call seeds the candidate set with the node's entire key
    /// mapping. Subsequent calls keep only keys present in both the current
    /// state and `node` for which some previously recorded offset `p`
    /// satisfies the match predicate against `p + 1`. Returns whether any
    /// candidate survived; once this returns `false` the query cannot match.
    pub fn advance(
        &mut self,
        node: &'a CharNode<T>,
        query: &str,
        match_type: MatchType,
        registry: &TargetRegistry<T>,
    ) -> bool {
        let prev = match self.state.take() {
            None => {
                self.state = Some(node.iter().collect());
                return true;
            }
            Some(prev) => prev,
        };

        let mut next: AHashMap<&'a T, &'a PositionSet> = AHashMap::new();
        for (target, positions) in node.iter() {
            let Some(before) = prev.get(target) else {
                continue;
            };
            let survives = before
                .iter()
                .any(|p| Self::matches(target, positions, p + 1, query, match_type, registry));
            if survives {
                next.insert(target, positions);
            }
        }

        let any = !next.is_empty();
        self.state = Some(next);
        any
    }

    /// Match predicate for one candidate at the expected offset.
    fn matches(
        target: &T,
        positions: &PositionSet,
        expect: u32,
        query: &str,
        match_type: MatchType,
        registry: &TargetRegistry<T>,
    ) -> bool {
        match match_type {
            MatchType::Exact => {
                positions.contains(expect) && registry.contains_pair(target, query)
            }
            MatchType::Like => positions.contains(expect),
            MatchType::SuperLike => positions.last().is_some_and(|last| last >= expect),
        }
    }

    /// Materialize up to `limit` surviving target keys, sorted by their
    /// natural order. A `limit` of zero yields an empty result.
    pub fn into_results(self, limit: usize) -> Vec<T>
    where
        T: Clone + Ord,
    {
        if limit == 0 {
            return Vec::new();
        }
        let Some(state) = self.state else {
            return Vec::new();
        };
        let mut keys: Vec<T> = state.keys().map(|target| (*target).clone()).collect();
        keys.sort();
        keys.truncate(limit);
        keys
    }
}

impl<T> Default for MatchAccumulator<'_, T>
where
    T: Eq + Hash,
{
    fn default() -> Self {
        MatchAccumulator::new()
    }
}
