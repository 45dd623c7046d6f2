//! Doubly linked list stored in parallel arrays.
//!
//! # Implementation details
//! - **Index links**: `prevs` and `nexts` hold [`IndexType`] indices instead of pointers,
//!   so the list is safe Rust with no `Rc`/`RefCell` and no raw pointers.
//! - **Free list**: removed slots are chained through `nexts` starting at `free_head`
//!   and recycled by later insertions.
//! - **Positional access** walks from whichever end is closer to the index.

use std::fmt::{self, Debug};
use std::iter::FromIterator;

use log::warn;

use crate::error::{Result, StructureError};
use crate::utils::IndexType;

/// A doubly linked list whose nodes live in `Vec`s and link to each other by index.
///
/// `I` selects the width of the links; the list holds at most `I::max_slots()` nodes.
pub struct LinkedList<T, I: IndexType = u32> {
    values: Vec<Option<T>>,
    prevs: Vec<I>,
    nexts: Vec<I>,
    free_head: I,
    head: I,
    tail: I,
    len: usize,
}

impl<T, I: IndexType> LinkedList<T, I> {
    /// Creates a new, empty list.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            prevs: Vec::new(),
            nexts: Vec::new(),
            free_head: I::NONE,
            head: I::NONE,
            tail: I::NONE,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            prevs: Vec::with_capacity(capacity),
            nexts: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    // --- Inspection ---

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        self.value_at(self.head)
    }

    pub fn back(&self) -> Option<&T> {
        self.value_at(self.tail)
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(StructureError::out_of_bounds(index, self.len));
        }
        let idx = self.node_at(index);
        self.value_at(idx)
            .ok_or_else(|| StructureError::out_of_bounds(index, self.len))
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.len {
            return Err(StructureError::out_of_bounds(index, self.len));
        }
        let idx = self.node_at(index);
        let len = self.len;
        self.values[idx.as_usize()]
            .as_mut()
            .ok_or_else(|| StructureError::out_of_bounds(index, len))
    }

    /// Returns the first element satisfying `predicate`.
    pub fn find<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|item| predicate(item))
    }

    pub fn iter(&self) -> Iter<'_, T, I> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    // --- Modification ---

    /// Adds an element to the end of the list.
    ///
    /// A full list drops `elem` and logs a warning; use
    /// [`try_append`](Self::try_append) to get the error back.
    pub fn append(&mut self, elem: T) {
        if let Err(e) = self.try_append(elem) {
            warn!("linked list: append dropped an element: {}", e);
        }
    }

    /// Adds an element to the end, or fails once every `I` slot is in use.
    pub fn try_append(&mut self, elem: T) -> Result<()> {
        let idx = self.alloc(elem)?;
        self.prevs[idx.as_usize()] = self.tail;
        if self.tail.is_none() {
            self.head = idx;
        } else {
            self.nexts[self.tail.as_usize()] = idx;
        }
        self.tail = idx;
        self.len += 1;
        Ok(())
    }

    /// Adds every element of `elems` to the end, in order.
    pub fn append_all<It: IntoIterator<Item = T>>(&mut self, elems: It) {
        for elem in elems {
            self.append(elem);
        }
    }

    /// Adds an element to the front of the list. A full list drops it, as
    /// [`append`](Self::append) does.
    pub fn push_front(&mut self, elem: T) {
        if let Err(e) = self.try_push_front(elem) {
            warn!("linked list: push_front dropped an element: {}", e);
        }
    }

    pub fn try_push_front(&mut self, elem: T) -> Result<()> {
        let idx = self.alloc(elem)?;
        self.nexts[idx.as_usize()] = self.head;
        if self.head.is_none() {
            self.tail = idx;
        } else {
            self.prevs[self.head.as_usize()] = idx;
        }
        self.head = idx;
        self.len += 1;
        Ok(())
    }

    /// Inserts `elem` so that it ends up at position `index`.
    ///
    /// `index == len` appends. Anything larger is out of bounds.
    pub fn add(&mut self, elem: T, index: usize) -> Result<()> {
        if index > self.len {
            return Err(StructureError::out_of_bounds(index, self.len));
        }
        if index == self.len {
            return self.try_append(elem);
        }
        if index == 0 {
            return self.try_push_front(elem);
        }
        let at = self.node_at(index);
        let before = self.prevs[at.as_usize()];
        let idx = self.alloc(elem)?;
        self.prevs[idx.as_usize()] = before;
        self.nexts[idx.as_usize()] = at;
        self.nexts[before.as_usize()] = idx;
        self.prevs[at.as_usize()] = idx;
        self.len += 1;
        Ok(())
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.head.is_none() {
            return None;
        }
        self.unlink(self.head)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail.is_none() {
            return None;
        }
        self.unlink(self.tail)
    }

    /// Removes and returns the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(StructureError::out_of_bounds(index, self.len));
        }
        let idx = self.node_at(index);
        let len = self.len;
        self.unlink(idx)
            .ok_or_else(|| StructureError::out_of_bounds(index, len))
    }

    /// Removes every element satisfying `predicate`, returning how many were removed.
    pub fn remove_all<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        let mut cursor = self.head;
        while !cursor.is_none() {
            let next = self.nexts[cursor.as_usize()];
            let matches = self.values[cursor.as_usize()]
                .as_ref()
                .is_some_and(&mut predicate);
            if matches {
                self.unlink(cursor);
                removed += 1;
            }
            cursor = next;
        }
        removed
    }

    /// Removes all elements and releases the node storage.
    pub fn clear(&mut self) {
        self.values.clear();
        self.prevs.clear();
        self.nexts.clear();
        self.free_head = I::NONE;
        self.head = I::NONE;
        self.tail = I::NONE;
        self.len = 0;
    }

    // --- Internals ---

    fn value_at(&self, idx: I) -> Option<&T> {
        if idx.is_none() {
            return None;
        }
        self.values[idx.as_usize()].as_ref()
    }

    /// Walks to the node at `index` from whichever end is closer.
    /// Caller guarantees `index < len`.
    fn node_at(&self, index: usize) -> I {
        if index < self.len / 2 {
            let mut cursor = self.head;
            for _ in 0..index {
                cursor = self.nexts[cursor.as_usize()];
            }
            cursor
        } else {
            let mut cursor = self.tail;
            for _ in 0..(self.len - 1 - index) {
                cursor = self.prevs[cursor.as_usize()];
            }
            cursor
        }
    }

    /// Takes a slot from the free list or grows the arrays. The slot comes back unlinked.
    fn alloc(&mut self, elem: T) -> Result<I> {
        if self.len >= I::max_slots() {
            return Err(StructureError::out_of_bounds(self.len, I::max_slots()));
        }
        if !self.free_head.is_none() {
            let idx = self.free_head;
            let slot = idx.as_usize();
            self.free_head = self.nexts[slot];
            self.values[slot] = Some(elem);
            self.prevs[slot] = I::NONE;
            self.nexts[slot] = I::NONE;
            return Ok(idx);
        }
        let idx = I::from_usize(self.values.len());
        self.values.push(Some(elem));
        self.prevs.push(I::NONE);
        self.nexts.push(I::NONE);
        Ok(idx)
    }

    /// Splices the node out of the list and returns its slot to the free list.
    fn unlink(&mut self, idx: I) -> Option<T> {
        let slot = idx.as_usize();
        let prev = self.prevs[slot];
        let next = self.nexts[slot];
        if prev.is_none() {
            self.head = next;
        } else {
            self.nexts[prev.as_usize()] = next;
        }
        if next.is_none() {
            self.tail = prev;
        } else {
            self.prevs[next.as_usize()] = prev;
        }
        let value = self.values[slot].take();
        self.prevs[slot] = I::NONE;
        self.nexts[slot] = self.free_head;
        self.free_head = idx;
        self.len -= 1;
        value
    }
}

impl<T: PartialEq, I: IndexType> LinkedList<T, I> {
    /// Removes the first occurrence of `value`.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let mut cursor = self.head;
        while !cursor.is_none() {
            if self.values[cursor.as_usize()].as_ref() == Some(value) {
                return self.unlink(cursor);
            }
            cursor = self.nexts[cursor.as_usize()];
        }
        None
    }

    /// Position of the first occurrence of `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }
}

impl<T: Clone, I: IndexType> LinkedList<T, I> {
    /// Copies the list into a `Vec`, head first.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// --- Iterators ---

pub struct Iter<'a, T, I: IndexType> {
    list: &'a LinkedList<T, I>,
    front: I,
    back: I,
    remaining: usize,
}

impl<'a, T, I: IndexType> Iterator for Iter<'a, T, I> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front;
        self.front = self.list.nexts[idx.as_usize()];
        self.remaining -= 1;
        self.list.value_at(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, I: IndexType> DoubleEndedIterator for Iter<'a, T, I> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back;
        self.back = self.list.prevs[idx.as_usize()];
        self.remaining -= 1;
        self.list.value_at(idx)
    }
}

impl<T, I: IndexType> ExactSizeIterator for Iter<'_, T, I> {}

pub struct IntoIter<T, I: IndexType> {
    list: LinkedList<T, I>,
}

impl<T, I: IndexType> Iterator for IntoIter<T, I> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T, I: IndexType> DoubleEndedIterator for IntoIter<T, I> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T, I: IndexType> IntoIterator for LinkedList<T, I> {
    type Item = T;
    type IntoIter = IntoIter<T, I>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T, I: IndexType> IntoIterator for &'a LinkedList<T, I> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, I>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Trait Implementations ---

impl<T, I: IndexType> Default for LinkedList<T, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, I: IndexType> Clone for LinkedList<T, I> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Debug, I: IndexType> Debug for LinkedList<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, I: IndexType> PartialEq for LinkedList<T, I> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, I: IndexType> Eq for LinkedList<T, I> {}

impl<T, I: IndexType> Extend<T> for LinkedList<T, I> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        self.append_all(iter);
    }
}

impl<T, I: IndexType> FromIterator<T> for LinkedList<T, I> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut list = Self::new();
        list.append_all(iter);
        list
    }
}

// --- Tests ---
