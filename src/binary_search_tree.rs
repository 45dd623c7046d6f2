use std::cmp::Ordering;
use std::fmt::Debug;

use crate::error::{Result, StructureError};
use crate::tree::{BinaryTree, NodeId};

/// A binary search tree of unique values stored in a [`BinaryTree`] arena.
///
/// Every value in a node's left subtree is smaller than the node's value and
/// every value in its right subtree is larger.
#[derive(Clone)]
pub struct BinarySearchTree<T> {
    tree: BinaryTree<T>,
}

impl<T: Ord + Debug> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self {
            tree: BinaryTree::new(),
        }
    }

    /// Inserts `value` as a new leaf; a value already present is rejected.
    pub fn insert(&mut self, value: T) -> Result<()> {
        let Some(mut current) = self.tree.root() else {
            self.tree.set_root(value);
            return Ok(());
        };
        loop {
            match value.cmp(self.tree.value(current)) {
                Ordering::Equal => return Err(StructureError::duplicate(&value)),
                Ordering::Less => match self.tree.left(current) {
                    Some(left) => current = left,
                    None => {
                        self.tree.add_left(current, value)?;
                        return Ok(());
                    }
                },
                Ordering::Greater => match self.tree.right(current) {
                    Some(right) => current = right,
                    None => {
                        self.tree.add_right(current, value)?;
                        return Ok(());
                    }
                },
            }
        }
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

    /// Removes `value` from the tree.
    ///
    /// A node with two children takes the value of its in-order successor,
    /// and the successor's node is spliced out in its place.
    pub fn delete(&mut self, value: &T) -> Result<()> {
        let target = self
            .find(value)
            .ok_or_else(|| StructureError::not_found(value))?;
        let victim = match (self.tree.left(target), self.tree.right(target)) {
            (Some(_), Some(right)) => {
                let successor = self.tree.min_in_subtree(right);
                self.tree.swap_values(target, successor);
                successor
            }
            _ => target,
        };
        self.tree.splice_out(victim)?;
        Ok(())
    }

    pub fn search(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Node holding `value`, if present.
    pub fn find(&self, value: &T) -> Option<NodeId> {
        let mut cursor = self.tree.root();
        while let Some(id) = cursor {
            cursor = match value.cmp(self.tree.value(id)) {
                Ordering::Equal => return Some(id),
                Ordering::Less => self.tree.left(id),
                Ordering::Greater => self.tree.right(id),
            };
        }
        None
    }

    /// Number of edges between the root and the node holding `value`.
    pub fn depth(&self, value: &T) -> Option<usize> {
        let mut depth = 0;
        let mut cursor = self.tree.root();
        while let Some(id) = cursor {
            cursor = match value.cmp(self.tree.value(id)) {
                Ordering::Equal => return Some(depth),
                Ordering::Less => self.tree.left(id),
                Ordering::Greater => self.tree.right(id),
            };
            depth += 1;
        }
        None
    }

    /// Values in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        self.tree.in_order()
    }

    pub fn height(&self) -> usize {
        self.tree.height()
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Read-only view of the underlying tree.
    pub fn tree(&self) -> &BinaryTree<T> {
        &self.tree
    }
}

impl<T: Ord + Debug> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.tree.in_order()).finish()
    }
}

impl<T: Ord + Debug> FromIterator<T> for BinarySearchTree<T> {
    /// Duplicates are skipped.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bst = Self::new();
        let _ = bst.insert_all(iter);
        bst
    }
}

// --- Tests ---
