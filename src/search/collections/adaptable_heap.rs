use std::cmp::Ordering;

use crate::error::QueueError;

/// Handle to an entry of an [`AdaptableHeap`], returned on insertion.
///
/// A locator stays valid until its entry leaves the heap. Locators are never
/// reused by the heap that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locator(usize);

#[derive(Clone, Debug)]
struct HeapEntry<K, V> {
    key: K,
    value: V,
    locator: Locator,
}

/// Binary min-heap whose entries can be located in O(1) and have their key
/// decreased in O(log n).
///
/// Entries with equal keys leave the heap in insertion order.
#[derive(Clone, Debug)]
pub struct AdaptableHeap<K, V> {
    entries: Vec<HeapEntry<K, V>>,
    // heap position of every issued locator, `None` once its entry left
    positions: Vec<Option<usize>>,
}

impl<K: PartialOrd + Copy, V> Default for AdaptableHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialOrd + Copy, V> AdaptableHeap<K, V> {
    pub fn new() -> Self {
        AdaptableHeap {
            entries: Vec::new(),
            positions: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        AdaptableHeap {
            entries: Vec::with_capacity(capacity),
            positions: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, locator: Locator) -> bool {
        self.position(locator).is_ok()
    }

    pub fn insert(&mut self, key: K, value: V) -> Locator {
        let locator = Locator(self.positions.len());
        let position = self.entries.len();
        self.positions.push(Some(position));
        self.entries.push(HeapEntry {
            key,
            value,
            locator,
        });
        self.sift_up(position);
        locator
    }

    pub fn peek(&self) -> Option<(K, &V)> {
        self.entries.first().map(|entry| (entry.key, &entry.value))
    }

    pub fn key(&self, locator: Locator) -> Result<K, QueueError> {
        Ok(self.entries[self.position(locator)?].key)
    }

    pub fn value(&self, locator: Locator) -> Result<&V, QueueError> {
        Ok(&self.entries[self.position(locator)?].value)
    }

    /// Removes and returns the entry with the smallest key.
    pub fn pop_min(&mut self) -> Result<(K, V), QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        Ok(self.remove_at(0))
    }

    /// Lowers the key of a live entry. The new key must not be greater than the
    /// current one.
    pub fn decrease_key(&mut self, locator: Locator, key: K) -> Result<(), QueueError> {
        let position = self.position(locator)?;
        // also rejects keys that do not compare, like NaN
        if !(key <= self.entries[position].key) {
            return Err(QueueError::KeyIncrease);
        }
        self.entries[position].key = key;
        self.sift_up(position);
        Ok(())
    }

    /// Removes an arbitrary live entry.
    pub fn remove(&mut self, locator: Locator) -> Result<(K, V), QueueError> {
        let position = self.position(locator)?;
        Ok(self.remove_at(position))
    }

    pub fn clear(&mut self) {
        for entry in self.entries.drain(..) {
            self.positions[entry.locator.0] = None;
        }
    }

    fn position(&self, locator: Locator) -> Result<usize, QueueError> {
        self.positions
            .get(locator.0)
            .copied()
            .flatten()
            .ok_or(QueueError::InvalidToken)
    }

    fn remove_at(&mut self, position: usize) -> (K, V) {
        let removed = self.entries.swap_remove(position);
        self.positions[removed.locator.0] = None;

        if position < self.entries.len() {
            self.positions[self.entries[position].locator.0] = Some(position);
            let position = self.sift_up(position);
            self.sift_down(position);
        }

        (removed.key, removed.value)
    }

    fn is_less(&self, a: usize, b: usize) -> bool {
        let (a, b) = (&self.entries[a], &self.entries[b]);
        match a.key.partial_cmp(&b.key) {
            Some(Ordering::Less) => true,
            Some(Ordering::Greater) => false,
            _ => a.locator < b.locator,
        }
    }

    fn sift_up(&mut self, mut position: usize) -> usize {
        while position > 0 {
            let parent = (position - 1) / 2;
            if !self.is_less(position, parent) {
                break;
            }
            self.swap_entries(position, parent);
            position = parent;
        }
        position
    }

    fn sift_down(&mut self, mut position: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * position + 1;
            let right = left + 1;
            let mut smallest = position;

            if left < len && self.is_less(left, smallest) {
                smallest = left;
            }
            if right < len && self.is_less(right, smallest) {
                smallest = right;
            }
            if smallest == position {
                return;
            }
            self.swap_entries(position, smallest);
            position = smallest;
        }
    }

    fn swap_entries(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.positions[self.entries[a].locator.0] = Some(a);
        self.positions[self.entries[b].locator.0] = Some(b);
    }
}
