//! Arena-backed binary tree with parent links.
//!
//! Nodes live in a `Vec` and refer to each other by [`NodeId`], so a node can
//! know its parent without shared ownership. Freed slots go on a free list and
//! are reused by the next allocation. Indexing a freed `NodeId` panics, the
//! same way indexing a slice past its end does.

use std::collections::VecDeque;
use std::fmt::{self, Debug};

use crate::error::{Result, StructureError};

/// Handle to a node inside one [`BinaryTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// What the second node is to the first, see [`BinaryTree::relationship`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relationship {
    LeftChild,
    RightChild,
    Parent,
    None,
}

#[derive(Clone)]
struct TreeNode<T> {
    value: T,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

#[derive(Clone)]
pub struct BinaryTree<T> {
    nodes: Vec<Option<TreeNode<T>>>,
    free: Vec<usize>,
    root: Option<NodeId>,
    len: usize,
}

impl<T> BinaryTree<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    // --- Shape ---

    /// Replaces the whole tree with a single root node.
    pub fn set_root(&mut self, value: T) -> NodeId {
        self.clear();
        let id = self.alloc(value, None);
        self.root = Some(id);
        id
    }

    /// Attaches `value` as the left child of `parent`.
    ///
    /// Fails with `InvalidArgument` if `parent` already has a left child.
    pub fn add_left(&mut self, parent: NodeId, value: T) -> Result<NodeId> {
        if self.node(parent).left.is_some() {
            return Err(StructureError::invalid_argument("left child already set"));
        }
        let id = self.alloc(value, Some(parent));
        self.node_mut(parent).left = Some(id);
        Ok(id)
    }

    /// Attaches `value` as the right child of `parent`.
    ///
    /// Fails with `InvalidArgument` if `parent` already has a right child.
    pub fn add_right(&mut self, parent: NodeId, value: T) -> Result<NodeId> {
        if self.node(parent).right.is_some() {
            return Err(StructureError::invalid_argument("right child already set"));
        }
        let id = self.alloc(value, Some(parent));
        self.node_mut(parent).right = Some(id);
        Ok(id)
    }

    /// Removes a node that has at most one child, hooking that child onto the
    /// node's parent. Returns the removed value.
    pub fn splice_out(&mut self, id: NodeId) -> Result<T> {
        let (parent, left, right) = {
            let node = self.node(id);
            (node.parent, node.left, node.right)
        };
        let child = match (left, right) {
            (Some(_), Some(_)) => {
                return Err(StructureError::invalid_argument(
                    "cannot splice out a node with two children",
                ));
            }
            (Some(c), None) | (None, Some(c)) => Some(c),
            (None, None) => None,
        };

        if let Some(c) = child {
            self.node_mut(c).parent = parent;
        }
        match parent {
            None => self.root = child,
            Some(p) => {
                let p_node = self.node_mut(p);
                if p_node.left == Some(id) {
                    p_node.left = child;
                } else {
                    p_node.right = child;
                }
            }
        }
        Ok(self.release(id))
    }

    /// Exchanges the values held by two nodes; the shape is untouched.
    pub fn swap_values(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let (lo, hi) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (head, tail) = self.nodes.split_at_mut(hi);
        match (head[lo].as_mut(), tail[0].as_mut()) {
            (Some(x), Some(y)) => std::mem::swap(&mut x.value, &mut y.value),
            _ => panic!("swap_values on a removed node"),
        }
    }

    /// Drops every node. Previously issued `NodeId`s become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    // --- Accessors ---

    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    #[inline]
    pub fn value(&self, id: NodeId) -> &T {
        &self.node(id).value
    }

    #[inline]
    pub fn value_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.node_mut(id).value
    }

    #[inline]
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).left
    }

    #[inline]
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).right
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Describes what `other` is to `node`.
    pub fn relationship(&self, node: NodeId, other: NodeId) -> Relationship {
        let n = self.node(node);
        if n.left == Some(other) {
            Relationship::LeftChild
        } else if n.right == Some(other) {
            Relationship::RightChild
        } else if n.parent == Some(other) {
            Relationship::Parent
        } else {
            Relationship::None
        }
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.number_of_children(id) == 0
    }

    pub fn is_root(&self, id: NodeId) -> bool {
        self.root == Some(id)
    }

    pub fn number_of_children(&self, id: NodeId) -> usize {
        let n = self.node(id);
        n.left.is_some() as usize + n.right.is_some() as usize
    }

    /// Number of nodes in the subtree rooted at `id`, including `id`.
    pub fn subtree_size(&self, id: NodeId) -> usize {
        let mut count = 0;
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            count += 1;
            let n = self.node(current);
            stack.extend(n.right);
            stack.extend(n.left);
        }
        count
    }

    /// The leftmost node under `id`.
    pub fn min_in_subtree(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(left) = self.node(current).left {
            current = left;
        }
        current
    }

    /// Number of levels in the tree; `0` when empty.
    pub fn height(&self) -> usize {
        self.root.map_or(0, |r| self.height_of(r))
    }

    /// Number of levels in the subtree rooted at `id`.
    pub fn height_of(&self, id: NodeId) -> usize {
        let mut height = 0;
        let mut level = vec![id];
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|&n| {
                    let node = self.node(n);
                    node.left.into_iter().chain(node.right)
                })
                .collect();
        }
        height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // --- Traversals ---

    pub fn pre_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let n = self.node(id);
            out.push(&n.value);
            stack.extend(n.right);
            stack.extend(n.left);
        }
        out
    }

    pub fn in_order(&self) -> Vec<&T> {
        self.in_order_ids()
            .into_iter()
            .map(|id| self.value(id))
            .collect()
    }

    /// In-order walk returning node handles rather than values.
    pub fn in_order_ids(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut cursor = self.root;
        loop {
            while let Some(id) = cursor {
                stack.push(id);
                cursor = self.node(id).left;
            }
            let Some(id) = stack.pop() else { break };
            out.push(id);
            cursor = self.node(id).right;
        }
        out
    }

    pub fn post_order(&self) -> Vec<&T> {
        // Reverse of a root-right-left walk.
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let n = self.node(id);
            out.push(&n.value);
            stack.extend(n.left);
            stack.extend(n.right);
        }
        out.reverse();
        out
    }

    pub fn level_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut queue: VecDeque<NodeId> = self.root.into_iter().collect();
        while let Some(id) = queue.pop_front() {
            let n = self.node(id);
            out.push(&n.value);
            queue.extend(n.left);
            queue.extend(n.right);
        }
        out
    }

    // --- Internals ---

    #[inline]
    fn node(&self, id: NodeId) -> &TreeNode<T> {
        match self.nodes.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("invalid NodeId {}", id.0),
        }
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut TreeNode<T> {
        match self.nodes.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("invalid NodeId {}", id.0),
        }
    }

    fn alloc(&mut self, value: T, parent: Option<NodeId>) -> NodeId {
        let node = TreeNode {
            value,
            parent,
            left: None,
            right: None,
        };
        self.len += 1;
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> T {
        match self.nodes.get_mut(id.0).and_then(Option::take) {
            Some(node) => {
                self.free.push(id.0);
                self.len -= 1;
                node.value
            }
            None => panic!("invalid NodeId {}", id.0),
        }
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.level_order()).finish()
    }
}

// --- Tests ---
