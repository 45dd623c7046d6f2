use std::collections::VecDeque;
use std::fmt::{self, Debug};

use crate::error::{Result, StructureError};
use crate::linked_list::LinkedList;

/// A trait for abstraction over different FIFO queue types (Linked, Array, std `VecDeque`).
pub trait AnyQueue<T> {
    fn peek(&self) -> Result<&T>;
    fn enqueue(&mut self, elem: T);
    fn dequeue(&mut self) -> Result<T>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn clear(&mut self);
}

impl<T> AnyQueue<T> for VecDeque<T> {
    fn peek(&self) -> Result<&T> {
        self.front().ok_or_else(|| StructureError::empty("Queue"))
    }
    fn enqueue(&mut self, elem: T) {
        self.push_back(elem);
    }
    fn dequeue(&mut self) -> Result<T> {
        self.pop_front().ok_or_else(|| StructureError::empty("Queue"))
    }
    fn len(&self) -> usize {
        self.len()
    }
    fn clear(&mut self) {
        self.clear();
    }
}

/// A queue over the crate's index-linked [`LinkedList`]: enqueue at the tail, dequeue at the head.
pub struct LinkedQueue<T> {
    list: LinkedList<T>,
}

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> crate::linked_list::Iter<'_, T, u32> {
        self.list.iter()
    }
}

impl<T> AnyQueue<T> for LinkedQueue<T> {
    fn peek(&self) -> Result<&T> {
        self.list.front().ok_or_else(|| StructureError::empty("Queue"))
    }
    fn enqueue(&mut self, elem: T) {
        self.list.append(elem);
    }
    fn dequeue(&mut self) -> Result<T> {
        self.list
            .pop_front()
            .ok_or_else(|| StructureError::empty("Queue"))
    }
    fn len(&self) -> usize {
        self.list.len()
    }
    fn clear(&mut self) {
        self.list.clear();
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

/// A queue over a ring buffer (`VecDeque`).
#[derive(Clone, Default)]
pub struct ArrayQueue<T> {
    elems: VecDeque<T>,
}

impl<T> ArrayQueue<T> {
    pub fn new() -> Self {
        Self {
            elems: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elems: VecDeque::with_capacity(capacity),
        }
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.elems.iter()
    }
}

impl<T> AnyQueue<T> for ArrayQueue<T> {
    fn peek(&self) -> Result<&T> {
        AnyQueue::peek(&self.elems)
    }
    fn enqueue(&mut self, elem: T) {
        self.elems.push_back(elem);
    }
    fn dequeue(&mut self) -> Result<T> {
        AnyQueue::dequeue(&mut self.elems)
    }
    fn len(&self) -> usize {
        self.elems.len()
    }
    fn clear(&mut self) {
        self.elems.clear();
    }
}

impl<T: Debug> Debug for ArrayQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// --- Tests ---
