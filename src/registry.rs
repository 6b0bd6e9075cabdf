//! Target registry mapping keys to their registered search strings.
//!
//! The registry drives full removal and duplicate detection: a target key is
//! present if and only if it has at least one registered search string, and a
//! `put` of an already-registered (key, string) pair is a no-op.

use std::hash::Hash;

use ahash::{AHashMap, AHashSet};

/// Mapping from target key to the set of search strings registered for it.
#[derive(Debug, Clone)]
pub struct TargetRegistry<T> {
    entries: AHashMap<T, AHashSet<String>>,
}

impl<T> TargetRegistry<T>
where
    T: Eq + Hash,
{
    /// Create a new empty registry.
    pub fn new() -> Self {
        TargetRegistry {
            entries: AHashMap::new(),
        }
    }

    /// Create a registry with capacity for `capacity` target keys.
    pub fn with_capacity(capacity: usize) -> Self {
        TargetRegistry {
            entries: AHashMap::with_capacity(capacity),
        }
    }

    /// Register a search string for a target key, creating the key's set if
    /// needed.
    pub fn insert(&mut self, target: T, search: String) {
        self.entries.entry(target).or_default().insert(search);
    }

    /// Check whether this exact (target, search) pair is registered.
    pub fn contains_pair(&self, target: &T, search: &str) -> bool {
        self.entries
            .get(target)
            .is_some_and(|strings| strings.contains(search))
    }

    /// Check whether a target key has any registered search string.
    pub fn contains(&self, target: &T) -> bool {
        self.entries.contains_key(target)
    }

    /// Remove a target key, returning its registered search strings.
    pub fn remove(&mut self, target: &T) -> Option<AHashSet<String>> {
        self.entries.remove(target)
    }

    /// Get the search strings registered for a target key.
    pub fn get(&self, target: &T) -> Option<&AHashSet<String>> {
        self.entries.get(target)
    }

    /// Get the number of registered target keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the total number of registered search strings across all keys.
    pub fn search_string_count(&self) -> usize {
        self.entries.values().map(|strings| strings.len()).sum()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for TargetRegistry<T>
where
    T: Eq + Hash,
{
    fn default() -> Self {
        TargetRegistry::new()
    }
}
