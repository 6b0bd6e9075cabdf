//! Character index and position index nodes.
//!
//! The [`CharIndex`] maps each character code to an optional [`CharNode`];
//! absence means the character was never registered. A node maps target keys
//! to the ordered set of offsets at which its character occurs across each
//! key's registered search strings.
//!
//! The index is a sparse map rather than a table sized to the full character
//! range, which keeps memory proportional to the registered alphabet while
//! preserving O(1) expected lookup. Nodes are created lazily on first
//! registration of their character and are never deleted afterwards, even
//! when all of their entries have been removed.

use std::hash::Hash;

use ahash::AHashMap;

use crate::position::PositionSet;

/// Per-character node mapping target keys to position sets.
#[derive(Debug, Clone)]
pub struct CharNode<T> {
    entries: AHashMap<T, PositionSet>,
}

impl<T> CharNode<T>
where
    T: Eq + Hash,
{
    /// Create a new empty node.
    pub fn new() -> Self {
        CharNode {
            entries: AHashMap::new(),
        }
    }

    /// Record an occurrence of this node's character for `target` at `offset`.
    pub fn insert(&mut self, target: T, offset: u32) {
        self.entries.entry(target).or_default().insert(offset);
    }

    /// Remove the entry for a target key, returning whether one existed.
    pub fn remove(&mut self, target: &T) -> bool {
        self.entries.remove(target).is_some()
    }

    /// Get the position set for a target key.
    pub fn get(&self, target: &T) -> Option<&PositionSet> {
        self.entries.get(target)
    }

    /// Iterate over (target key, position set) entries.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &PositionSet)> {
        self.entries.iter()
    }

    /// Get the number of target keys recorded in this node.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the node has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for CharNode<T>
where
    T: Eq + Hash,
{
    fn default() -> Self {
        CharNode::new()
    }
}

/// Sparse table from character to position index node.
///
/// The representable character-code range is fixed at construction:
/// characters whose code is at or above `char_limit` are never indexed, so
/// queries containing them always miss.
#[derive(Debug, Clone)]
pub struct CharIndex<T> {
    nodes: AHashMap<char, CharNode<T>>,
    char_limit: u32,
}

impl<T> CharIndex<T>
where
    T: Eq + Hash,
{
    /// Create a new index covering character codes below `char_limit`.
    pub fn new(char_limit: u32) -> Self {
        CharIndex {
            nodes: AHashMap::new(),
            char_limit,
        }
    }

    /// Index an occurrence of `c` for `target` at `offset`, creating the
    /// node for `c` if absent.
    pub fn index_char(&mut self, c: char, target: T, offset: u32) {
        if c as u32 >= self.char_limit {
            return;
        }
        self.nodes.entry(c).or_default().insert(target, offset);
    }

    /// Look up the node for a character.
    pub fn node(&self, c: char) -> Option<&CharNode<T>> {
        self.nodes.get(&c)
    }

    /// Remove the entry for `target` from the node for `c`, if that node
    /// exists. Returns whether an entry was removed. The node itself is kept
    /// even when it becomes empty.
    pub fn remove_target(&mut self, c: char, target: &T) -> Option<bool> {
        self.nodes.get_mut(&c).map(|node| node.remove(target))
    }

    /// Get the number of nodes ever created.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Drop all nodes.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}
