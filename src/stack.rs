use std::fmt::{self, Debug};

use crate::error::{Result, StructureError};

/// A trait for abstraction over different LIFO stack types (Linked, Array, std `Vec`).
pub trait AnyStack<T> {
    fn peek(&self) -> Result<&T>;
    fn push(&mut self, elem: T);
    fn pop(&mut self) -> Result<T>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn clear(&mut self);
}

impl<T> AnyStack<T> for Vec<T> {
    fn peek(&self) -> Result<&T> {
        self.last().ok_or_else(|| StructureError::empty("Stack"))
    }
    fn push(&mut self, elem: T) {
        self.push(elem);
    }
    fn pop(&mut self) -> Result<T> {
        self.pop().ok_or_else(|| StructureError::empty("Stack"))
    }
    fn len(&self) -> usize {
        self.len()
    }
    fn clear(&mut self) {
        self.clear();
    }
}

// --- LinkedStack ---

struct StackNode<T> {
    value: T,
    next: Option<Box<StackNode<T>>>,
}

/// A stack of boxed nodes; the head of the chain is the top.
///
/// `push` and `pop` are O(1) and never reallocate.
pub struct LinkedStack<T> {
    top: Option<Box<StackNode<T>>>,
    len: usize,
}

impl<T> LinkedStack<T> {
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> LinkedStackIter<'_, T> {
        LinkedStackIter {
            next: self.top.as_deref(),
        }
    }
}

impl<T> AnyStack<T> for LinkedStack<T> {
    fn peek(&self) -> Result<&T> {
        self.top
            .as_ref()
            .map(|node| &node.value)
            .ok_or_else(|| StructureError::empty("Stack"))
    }

    fn push(&mut self, elem: T) {
        let node = Box::new(StackNode {
            value: elem,
            next: self.top.take(),
        });
        self.top = Some(node);
        self.len += 1;
    }

    fn pop(&mut self) -> Result<T> {
        let node = self.top.take().ok_or_else(|| StructureError::empty("Stack"))?;
        self.top = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        // Unlink iteratively so a long chain cannot overflow the call stack on drop.
        let mut cursor = self.top.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.len = 0;
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    /// Pushes each item in turn, so the last item ends on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        for elem in iter {
            stack.push(elem);
        }
        stack
    }
}

pub struct LinkedStackIter<'a, T> {
    next: Option<&'a StackNode<T>>,
}

impl<'a, T> Iterator for LinkedStackIter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

// --- ArrayStack ---

/// A stack over a `Vec`; the end of the vector is the top.
#[derive(Clone, Default)]
pub struct ArrayStack<T> {
    elems: Vec<T>,
}

impl<T> ArrayStack<T> {
    pub fn new() -> Self {
        Self { elems: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elems: Vec::with_capacity(capacity),
        }
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.elems.iter().rev()
    }
}

impl<T> AnyStack<T> for ArrayStack<T> {
    fn peek(&self) -> Result<&T> {
        AnyStack::peek(&self.elems)
    }
    fn push(&mut self, elem: T) {
        self.elems.push(elem);
    }
    fn pop(&mut self) -> Result<T> {
        AnyStack::pop(&mut self.elems)
    }
    fn len(&self) -> usize {
        self.elems.len()
    }
    fn clear(&mut self) {
        self.elems.clear();
    }
}

impl<T: Debug> Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for ArrayStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elems: iter.into_iter().collect(),
        }
    }
}

// --- Tests ---
