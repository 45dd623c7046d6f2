//! FIFO-stable priority queue over the crate's [`BinaryHeap`].
//!
//! Each item is wrapped in an entry ordered by `(priority, Reverse(sequence))`.
//! The sequence number grows with every enqueue, so entries never compare
//! equal and, among equal priorities, the oldest entry ranks highest.

use std::cmp::{Ordering, Reverse};
use std::fmt::{self, Debug};

use crate::error::{Result, StructureError};
use crate::heap::{BinaryHeap, Max};

struct Entry<T, P> {
    item: T,
    priority: P,
    seq: u64,
}

impl<T, P: Ord> Entry<T, P> {
    #[inline]
    fn key(&self) -> (&P, Reverse<u64>) {
        (&self.priority, Reverse(self.seq))
    }
}

impl<T, P: Ord> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T, P: Ord> Eq for Entry<T, P> {}

impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// A queue that releases the highest-priority item first, oldest first on ties.
pub struct PriorityQueue<T, P: Ord> {
    heap: BinaryHeap<Entry<T, P>, Max>,
    next_seq: u64,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn enqueue(&mut self, item: T, priority: P) {
        let entry = Entry {
            item,
            priority,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        // Sequence numbers are unique, so the duplicate scan is skipped.
        self.heap.push_distinct(entry);
    }

    pub fn dequeue(&mut self) -> Result<T> {
        self.dequeue_with_priority().map(|(item, _)| item)
    }

    pub fn dequeue_with_priority(&mut self) -> Result<(T, P)> {
        self.heap
            .remove_top()
            .map(|entry| (entry.item, entry.priority))
            .map_err(|_| StructureError::empty("Priority queue"))
    }

    pub fn peek(&self) -> Result<&T> {
        self.front().map(|entry| &entry.item)
    }

    pub fn peek_priority(&self) -> Result<&P> {
        self.front().map(|entry| &entry.priority)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drops every entry. Sequence numbering continues where it left off.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    fn front(&self) -> Result<&Entry<T, P>> {
        self.heap
            .top()
            .map_err(|_| StructureError::empty("Priority queue"))
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug, P: Ord + Debug> Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.heap.iter().map(|e| (&e.item, &e.priority)))
            .finish()
    }
}

impl<T, P: Ord> Extend<(T, P)> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (item, priority) in iter {
            self.enqueue(item, priority);
        }
    }
}

impl<T, P: Ord> FromIterator<(T, P)> for PriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

// --- Tests ---
