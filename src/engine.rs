//! The search engine: registration, removal, update, and query execution.
//!
//! A [`SearchEngine`] owns the character index and the target registry behind
//! a single reader/writer lock. Mutating operations (`put`, `remove`,
//! `update`) take the write guard and mutate both structures together;
//! `search` takes the read guard, so any number of queries proceed
//! concurrently but never against a writer. `update` holds the write guard
//! across its internal remove-then-put, so no caller observes the
//! intermediate state.

use std::hash::Hash;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{Result, XiphosError};
use crate::index::CharIndex;
use crate::registry::TargetRegistry;
use crate::search::{MatchAccumulator, MatchType};

/// Configuration for a search engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEngineConfig {
    /// Exclusive upper bound on indexable character codes. Characters at or
    /// above the bound are never indexed, so queries containing them always
    /// miss. The bound is fixed for the lifetime of the engine.
    pub char_limit: u32,

    /// Capacity hint for the number of target keys.
    pub expected_targets: usize,
}

impl Default for SearchEngineConfig {
    fn default() -> Self {
        SearchEngineConfig {
            char_limit: char::MAX as u32 + 1,
            expected_targets: 0,
        }
    }
}

/// Point-in-time counters describing an engine's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEngineStats {
    /// Number of registered target keys.
    pub target_count: usize,
    /// Total number of registered search strings across all keys.
    pub search_string_count: usize,
    /// Number of character nodes ever created. Nodes are never reclaimed, so
    /// this only grows until [`SearchEngine::clear`].
    pub node_count: usize,
}

/// Index and registry, mutated together under the engine's lock.
#[derive(Debug)]
struct Inner<T> {
    index: CharIndex<T>,
    registry: TargetRegistry<T>,
}

impl<T> Inner<T>
where
    T: Clone + Eq + Hash,
{
    fn put(&mut self, target: T, search: &str) {
        if self.registry.contains_pair(&target, search) {
            return;
        }
        for (offset, c) in search.chars().enumerate() {
            self.index.index_char(c, target.clone(), offset as u32);
        }
        self.registry.insert(target, search.to_string());
    }

    fn remove(&mut self, target: &T) -> bool {
        let Some(strings) = self.registry.remove(target) else {
            return false;
        };
        let mut removed = false;
        for search in &strings {
            for c in search.chars() {
                if let Some(hit) = self.index.remove_target(c, target) {
                    // Overwritten on every character that has a node; the
                    // returned flag reflects only the last one processed.
                    removed = hit;
                }
            }
        }
        removed
    }
}

/// An in-memory fuzzy/substring matching index over target keys of type `T`.
///
/// `T` is opaque to the engine apart from equality, hashing, and a total
/// order; the order produces the deterministic sorted result sequence.
///
/// # Example
///
/// ```
/// use xiphos::engine::SearchEngine;
/// use xiphos::search::MatchType;
///
/// let engine = SearchEngine::new();
/// engine.put(1u64, "weather");
/// engine.put(2u64, "whatever");
///
/// assert_eq!(engine.search("eat", 10, MatchType::Like), vec![1]);
/// assert_eq!(engine.search("whr", 10, MatchType::SuperLike), vec![1, 2]);
/// ```
#[derive(Debug)]
pub struct SearchEngine<T> {
    inner: RwLock<Inner<T>>,
}

impl<T> SearchEngine<T>
where
    T: Clone + Eq + Hash + Ord,
{
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        // The default config always validates.
        match SearchEngine::with_config(SearchEngineConfig::default()) {
            Ok(engine) => engine,
            Err(_) => unreachable!("default config is valid"),
        }
    }

    /// Create an engine with the given configuration.
    ///
    /// Returns an error when `char_limit` is zero or exceeds the character
    /// code space.
    pub fn with_config(config: SearchEngineConfig) -> Result<Self> {
        if config.char_limit == 0 {
            return Err(XiphosError::invalid_argument("char_limit must be non-zero"));
        }
        if config.char_limit > char::MAX as u32 + 1 {
            return Err(XiphosError::invalid_argument(format!(
                "char_limit {} exceeds the character code space",
                config.char_limit
            )));
        }
        Ok(SearchEngine {
            inner: RwLock::new(Inner {
                index: CharIndex::new(config.char_limit),
                registry: TargetRegistry::with_capacity(config.expected_targets),
            }),
        })
    }

    /// Register a search string for a target key.
    ///
    /// Re-registering an identical (target, string) pair is a no-op. A key
    /// may carry multiple distinct strings; they coexist and pool their
    /// position data.
    pub fn put(&self, target: T, search: &str) {
        self.inner.write().put(target, search);
    }

    /// Remove a target key and all of its registered search strings.
    ///
    /// Returns `false` when the key is unregistered. Otherwise the flag is
    /// rewritten for each character of each of the key's strings, so it
    /// reflects only the last character processed.
    pub fn remove(&self, target: &T) -> bool {
        self.inner.write().remove(target)
    }

    /// Replace `remove_key` with `new_target` registered under `new_search`.
    ///
    /// The whole composite runs under one exclusive acquisition; the `put`
    /// happens if and only if the removal reported success. No reader or
    /// writer can observe the intermediate state.
    pub fn update(&self, remove_key: &T, new_target: T, new_search: &str) {
        let mut inner = self.inner.write();
        if inner.remove(remove_key) {
            inner.put(new_target, new_search);
        }
    }

    /// Search for target keys matching `query` under the given semantics.
    ///
    /// Returns up to `limit` keys sorted by their natural order. A query
    /// fails as a whole when any of its characters has no index node or when
    /// the narrowing eliminates every candidate; failure yields an empty
    /// result, never an error. A `limit` of zero or an empty query also
    /// yield an empty result.
    pub fn search(&self, query: &str, limit: usize, match_type: MatchType) -> Vec<T> {
        let inner = self.inner.read();
        let chars: Vec<char> = query.chars().collect();
        let mut accumulator = MatchAccumulator::new();
        let mut matched = 0;
        for &c in &chars {
            let Some(node) = inner.index.node(c) else {
                break;
            };
            if !accumulator.advance(node, query, match_type, &inner.registry) {
                break;
            }
            matched += 1;
        }
        if matched == chars.len() {
            accumulator.into_results(limit)
        } else {
            Vec::new()
        }
    }

    /// Check whether a target key has any registered search string.
    pub fn contains_target(&self, target: &T) -> bool {
        self.inner.read().registry.contains(target)
    }

    /// Get the number of registered target keys.
    pub fn target_count(&self) -> usize {
        self.inner.read().registry.len()
    }

    /// Check whether the engine has no registered target keys.
    pub fn is_empty(&self) -> bool {
        self.inner.read().registry.is_empty()
    }

    /// Get point-in-time counters for the engine's contents.
    pub fn stats(&self) -> SearchEngineStats {
        let inner = self.inner.read();
        SearchEngineStats {
            target_count: inner.registry.len(),
            search_string_count: inner.registry.search_string_count(),
            node_count: inner.index.node_count(),
        }
    }

    /// Remove every registration, resetting the engine to its initial state.
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.index.clear();
        inner.registry.clear();
    }
}

impl<T> Default for SearchEngine<T>
where
    T: Clone + Eq + Hash + Ord,
{
    fn default() -> Self {
        SearchEngine::new()
    }
}
