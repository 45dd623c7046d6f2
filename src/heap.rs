use core::marker::PhantomData;
use std::collections::BinaryHeap as StdBinaryHeap;
use std::fmt::{self, Debug};

use crate::error::{Result, StructureError};

/// A trait for abstraction over different priority heap types (std, size-balanced).
pub trait AnyHeap<T> {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn push(&mut self, item: T) -> Result<()>;
    fn pop(&mut self) -> Result<T>;
    fn peek(&self) -> Result<&T>;
    fn clear(&mut self);
}

impl<T: Ord> AnyHeap<T> for StdBinaryHeap<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push(&mut self, item: T) -> Result<()> {
        self.push(item);
        Ok(())
    }
    fn pop(&mut self) -> Result<T> {
        self.pop().ok_or_else(|| StructureError::empty("Heap"))
    }
    fn peek(&self) -> Result<&T> {
        self.peek().ok_or_else(|| StructureError::empty("Heap"))
    }
    fn clear(&mut self) {
        self.clear();
    }
}

pub use heapless::binary_heap::{Kind, Max, Min};

/// Bridges the `heapless` kind markers to a comparison the pointer heap can use.
pub trait HeapKind<T: Ord>: Kind {
    /// True when `a` must sit above `b` in the heap.
    fn precedes(a: &T, b: &T) -> bool;
}

impl<T: Ord> HeapKind<T> for Max {
    #[inline]
    fn precedes(a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: Ord> HeapKind<T> for Min {
    #[inline]
    fn precedes(a: &T, b: &T) -> bool {
        a < b
    }
}

type Link<T> = Option<Box<HeapNode<T>>>;

#[derive(Clone)]
struct HeapNode<T> {
    value: T,
    /// Nodes in the subtree rooted here, this one included.
    size: usize,
    left: Link<T>,
    right: Link<T>,
}

impl<T> HeapNode<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            size: 1,
            left: None,
            right: None,
        })
    }
}

#[inline]
fn size_of<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |n| n.size)
}

/// A binary heap of unique values kept as a size-balanced tree of boxed nodes.
///
/// # Features
/// * **Heap Kind:** Supports both `Max` (default) and `Min` heap behavior.
/// * **Shape:** Each node caches its subtree size. Inserts walk toward the smaller
///   subtree and removals detach a leaf from the larger one, so depth stays
///   logarithmic without an array backing.
/// * **Uniqueness:** A value already in the heap is rejected on insert.
pub struct BinaryHeap<T: Ord, K: HeapKind<T> = Max> {
    root: Link<T>,
    _kind: PhantomData<K>,
}

impl<T: Ord, K: HeapKind<T>> BinaryHeap<T, K> {
    pub fn new() -> Self {
        Self {
            root: None,
            _kind: PhantomData,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        size_of(&self.root)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The highest-priority value.
    pub fn top(&self) -> Result<&T> {
        self.root
            .as_ref()
            .map(|n| &n.value)
            .ok_or_else(|| StructureError::empty("Heap"))
    }

    /// True if `value` is stored in the heap.
    ///
    /// Subtrees whose root ranks below `value` are skipped, since nothing
    /// beneath them can equal it.
    pub fn contains(&self, value: &T) -> bool {
        let mut stack: Vec<&HeapNode<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            if node.value == *value {
                return true;
            }
            if K::precedes(value, &node.value) {
                continue;
            }
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        false
    }

    /// Inserts `value`, handing it back if an equal value is already present.
    pub fn try_insert(&mut self, value: T) -> core::result::Result<(), T> {
        if self.contains(&value) {
            return Err(value);
        }
        self.push_distinct(value);
        Ok(())
    }

    /// Inserts a value the caller knows is not already present.
    pub(crate) fn push_distinct(&mut self, value: T) {
        match self.root.as_deref_mut() {
            Some(root) => Self::insert_into(root, value),
            None => self.root = Some(HeapNode::leaf(value)),
        }
    }

    /// Removes and returns the highest-priority value.
    pub fn remove_top(&mut self) -> Result<T> {
        let mut root = self.root.take().ok_or_else(|| StructureError::empty("Heap"))?;
        let Some(last) = Self::detach_last(&mut root) else {
            // Single node.
            return Ok(root.value);
        };
        let top = std::mem::replace(&mut root.value, last);
        Self::sift_down(&mut root);
        self.root = Some(root);
        Ok(top)
    }

    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Iterates over the values in no particular order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Drains the heap in priority order: descending for `Max`, ascending for `Min`.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        while let Ok(value) = self.remove_top() {
            out.push(value);
        }
        out
    }

    // --- Internals ---

    fn insert_into(node: &mut HeapNode<T>, value: T) {
        node.size += 1;
        let HeapNode {
            value: parent,
            left,
            right,
            ..
        } = node;

        let go_left = match (left.as_ref(), right.as_ref()) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(l), Some(r)) => l.size <= r.size,
        };
        let slot = if go_left { left } else { right };

        match slot.as_deref_mut() {
            Some(child) => Self::insert_into(child, value),
            None => *slot = Some(HeapNode::leaf(value)),
        }

        // Bubble up on the way back: the new value only ever travels along this path.
        if let Some(child) = slot.as_deref_mut() {
            if K::precedes(&child.value, parent) {
                std::mem::swap(&mut child.value, parent);
            }
        }
    }

    /// Unhooks a leaf below `node`, preferring the right side while it is at
    /// least as large as the left. Returns `None` if `node` has no children.
    fn detach_last(node: &mut HeapNode<T>) -> Option<T> {
        let slot = if size_of(&node.left) <= size_of(&node.right) {
            &mut node.right
        } else {
            &mut node.left
        };
        let taken = if slot.as_ref().is_some_and(|c| c.size > 1) {
            slot.as_deref_mut().and_then(Self::detach_last)
        } else {
            slot.take().map(|leaf| leaf.value)
        };
        if taken.is_some() {
            node.size -= 1;
        }
        taken
    }

    fn sift_down(node: &mut HeapNode<T>) {
        let HeapNode {
            value, left, right, ..
        } = node;
        let child = match (left.as_deref_mut(), right.as_deref_mut()) {
            (Some(l), Some(r)) => {
                if K::precedes(&r.value, &l.value) {
                    r
                } else {
                    l
                }
            }
            (Some(c), None) | (None, Some(c)) => c,
            (None, None) => return,
        };
        if K::precedes(&child.value, value) {
            std::mem::swap(&mut child.value, value);
            Self::sift_down(child);
        }
    }
}

impl<T: Ord + Debug, K: HeapKind<T>> BinaryHeap<T, K> {
    /// Inserts `value`; an equal value already present gives `DuplicateValue`
    /// and leaves the heap unchanged.
    pub fn insert(&mut self, value: T) -> Result<()> {
        self.try_insert(value)
            .map_err(|rejected| StructureError::duplicate(&rejected))
    }

    /// Inserts every value in turn; returns the last failure, if any.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, values: I) -> Result<()> {
        let mut outcome = Ok(());
        for value in values {
            if let Err(e) = self.insert(value) {
                outcome = Err(e);
            }
        }
        outcome
    }
}

impl<T: Ord + Debug, K: HeapKind<T>> AnyHeap<T> for BinaryHeap<T, K> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push(&mut self, item: T) -> Result<()> {
        self.insert(item)
    }
    fn pop(&mut self) -> Result<T> {
        self.remove_top()
    }
    fn peek(&self) -> Result<&T> {
        self.top()
    }
    fn clear(&mut self) {
        self.clear();
    }
}

pub struct Iter<'a, T> {
    stack: Vec<&'a HeapNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.value)
    }
}

// --- Trait Implementations ---

impl<T: Ord, K: HeapKind<T>> Default for BinaryHeap<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone, K: HeapKind<T>> Clone for BinaryHeap<T, K> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            _kind: PhantomData,
        }
    }
}

impl<T: Ord + Debug, K: HeapKind<T>> Debug for BinaryHeap<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord, K: HeapKind<T>> FromIterator<T> for BinaryHeap<T, K> {
    /// Duplicates are dropped.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        for value in iter {
            let _ = heap.try_insert(value);
        }
        heap
    }
}

// --- Tests ---
