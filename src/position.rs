//! Ordered-insertion position sets.
//!
//! A [`PositionSet`] records, for one character and one target key, every
//! offset at which that character appeared across all of the key's registered
//! search strings. Insertion order is preserved and the most recently inserted
//! offset is tracked explicitly, which the subsequence match mode uses as a
//! monotonic upper bound.

use ahash::AHashSet;

/// An ordered set of character offsets with explicit last-inserted tracking.
///
/// Offsets are distinct within the set. `last()` reflects the most recent
/// call to [`insert`](PositionSet::insert), even when that insert was a
/// duplicate and did not grow the set.
#[derive(Debug, Clone, Default)]
pub struct PositionSet {
    /// Offsets in insertion order, without duplicates.
    offsets: Vec<u32>,
    /// Membership table for O(1) contains checks.
    members: AHashSet<u32>,
    /// Most recently inserted offset.
    last: Option<u32>,
}

impl PositionSet {
    /// Create a new empty position set.
    pub fn new() -> Self {
        PositionSet::default()
    }

    /// Insert an offset, preserving insertion order and skipping duplicates.
    ///
    /// The last-inserted marker is updated unconditionally.
    pub fn insert(&mut self, offset: u32) {
        self.last = Some(offset);
        if self.members.insert(offset) {
            self.offsets.push(offset);
        }
    }

    /// Check whether an offset is present.
    pub fn contains(&self, offset: u32) -> bool {
        self.members.contains(&offset)
    }

    /// Get the most recently inserted offset.
    pub fn last(&self) -> Option<u32> {
        self.last
    }

    /// Iterate over offsets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.offsets.iter().copied()
    }

    /// Get the number of distinct offsets.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Check whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut set = PositionSet::new();
        set.insert(3);
        set.insert(0);
        set.insert(7);

        let collected: Vec<u32> = set.iter().collect();
        assert_eq!(collected, vec![3, 0, 7]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_duplicate_insert_is_skipped() {
        let mut set = PositionSet::new();
        set.insert(1);
        set.insert(2);
        set.insert(1);

        let collected: Vec<u32> = set.iter().collect();
        assert_eq!(collected, vec![1, 2]);
        assert!(set.contains(1));
        assert!(set.contains(2));
        assert!(!set.contains(3));
    }

    #[test]
    fn test_last_updated_on_duplicate() {
        let mut set = PositionSet::new();
        assert_eq!(set.last(), None);

        set.insert(5);
        set.insert(9);
        assert_eq!(set.last(), Some(9));

        // A duplicate insert still moves the marker.
        set.insert(5);
        assert_eq!(set.last(), Some(5));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty_set() {
        let set = PositionSet::new();
        assert!(set.is_empty());
        assert_eq!(set.last(), None);
        assert!(!set.contains(0));
    }
}
