//! Chapter 4: trees and graphs.

use std::cmp::Ordering;

use crate::error::Result;
use crate::graph::DirectedWeightedGraph;
use crate::linked_list::LinkedList;
use crate::tree::{BinaryTree, NodeId};

// --- 4.1 Route Between Nodes ---

/// Whether `end` is reachable from `start`. A missing `start` is an error; a
/// missing `end` is simply unreachable.
pub fn route_between<G>(graph: &G, start: &str, end: &str) -> Result<bool>
where
    G: DirectedWeightedGraph + ?Sized,
{
    Ok(graph.dfs(start)?.iter().any(|vertex| vertex == end))
}

// --- 4.2 Minimal Tree ---

/// Builds a minimal-height BST from a sorted slice of distinct values.
pub fn create_minimal_bst<T: Clone>(sorted: &[T]) -> BinaryTree<T> {
    let mut tree = BinaryTree::new();
    if !sorted.is_empty() {
        let mid = (sorted.len() - 1) / 2;
        let root = tree.set_root(sorted[mid].clone());
        attach_halves(&mut tree, root, sorted, mid);
    }
    tree
}

fn attach_halves<T: Clone>(tree: &mut BinaryTree<T>, node: NodeId, values: &[T], mid: usize) {
    let (lower, upper) = (&values[..mid], &values[mid + 1..]);
    if !lower.is_empty() {
        let m = (lower.len() - 1) / 2;
        if let Ok(child) = tree.add_left(node, lower[m].clone()) {
            attach_halves(tree, child, lower, m);
        }
    }
    if !upper.is_empty() {
        let m = (upper.len() - 1) / 2;
        if let Ok(child) = tree.add_right(node, upper[m].clone()) {
            attach_halves(tree, child, upper, m);
        }
    }
}

// --- 4.3 List of Depths ---

/// One list of node handles per depth, each ordered left to right.
pub fn create_depth_lists<T>(tree: &BinaryTree<T>) -> Vec<LinkedList<NodeId>> {
    let mut depths: Vec<LinkedList<NodeId>> = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = tree.root().map(|r| (r, 0)).into_iter().collect();
    while let Some((id, depth)) = stack.pop() {
        if depths.len() == depth {
            depths.push(LinkedList::new());
        }
        depths[depth].append(id);
        stack.extend(tree.right(id).map(|r| (r, depth + 1)));
        stack.extend(tree.left(id).map(|l| (l, depth + 1)));
    }
    depths
}

// --- 4.4 Check Balanced ---

/// True when no node's subtrees differ in height by more than one.
pub fn is_tree_balanced<T>(tree: &BinaryTree<T>) -> bool {
    balanced_height(tree, tree.root()).is_some()
}

/// Height of the subtree, or `None` as soon as an unbalanced node is seen.
fn balanced_height<T>(tree: &BinaryTree<T>, node: Option<NodeId>) -> Option<usize> {
    let Some(id) = node else {
        return Some(0);
    };
    let left = balanced_height(tree, tree.left(id))?;
    let right = balanced_height(tree, tree.right(id))?;
    (left.abs_diff(right) <= 1).then(|| left.max(right) + 1)
}

// --- 4.5 Validate BST ---

/// Checks every node against the `(min, max]` range its ancestors allow, so a
/// left child may equal its parent but a right child may not.
pub fn validate_bst<T: Ord>(tree: &BinaryTree<T>) -> bool {
    let mut stack: Vec<(NodeId, Option<&T>, Option<&T>)> =
        tree.root().map(|r| (r, None, None)).into_iter().collect();
    while let Some((id, min, max)) = stack.pop() {
        let value = tree.value(id);
        if min.is_some_and(|m| value <= m) || max.is_some_and(|m| value > m) {
            return false;
        }
        stack.extend(tree.left(id).map(|l| (l, min, Some(value))));
        stack.extend(tree.right(id).map(|r| (r, Some(value), max)));
    }
    true
}

// --- 4.6 Successor ---

/// The next node in order, found through parent links.
pub fn in_order_successor<T>(tree: &BinaryTree<T>, node: NodeId) -> Option<NodeId> {
    if let Some(right) = tree.right(node) {
        return Some(tree.min_in_subtree(right));
    }
    let mut child = node;
    let mut parent = tree.parent(child);
    while let Some(p) = parent {
        if tree.left(p) == Some(child) {
            break;
        }
        child = p;
        parent = tree.parent(p);
    }
    parent
}

// --- 4.9 BST Sequences ---

/// Every insertion order that builds `tree` as a BST. An empty tree has one
/// empty sequence.
pub fn all_sequences<T: Clone>(tree: &BinaryTree<T>) -> Vec<LinkedList<T>> {
    sequences_from(tree, tree.root())
}

fn sequences_from<T: Clone>(tree: &BinaryTree<T>, node: Option<NodeId>) -> Vec<LinkedList<T>> {
    let Some(id) = node else {
        return vec![LinkedList::new()];
    };
    let mut prefix = LinkedList::new();
    prefix.append(tree.value(id).clone());

    let lefts = sequences_from(tree, tree.left(id));
    let rights = sequences_from(tree, tree.right(id));
    let mut result = Vec::new();
    for left in &lefts {
        for right in &rights {
            weave(
                &mut left.clone(),
                &mut right.clone(),
                &mut prefix,
                &mut result,
            );
        }
    }
    result
}

/// Interleaves `first` and `second` in every way that keeps each list's own
/// order, taking from `first` before `second` at each branch.
fn weave<T: Clone>(
    first: &mut LinkedList<T>,
    second: &mut LinkedList<T>,
    prefix: &mut LinkedList<T>,
    results: &mut Vec<LinkedList<T>>,
) {
    if first.is_empty() || second.is_empty() {
        let mut woven = prefix.clone();
        woven.append_all(first.iter().cloned());
        woven.append_all(second.iter().cloned());
        results.push(woven);
        return;
    }

    if let Some(head) = first.pop_front() {
        prefix.append(head);
        weave(first, second, prefix, results);
        if let Some(head) = prefix.pop_back() {
            first.push_front(head);
        }
    }
    if let Some(head) = second.pop_front() {
        prefix.append(head);
        weave(first, second, prefix, results);
        if let Some(head) = prefix.pop_back() {
            second.push_front(head);
        }
    }
}

// --- 4.10 Check Subtree ---

/// Whether `pattern` occurs in `tree` as a complete subtree, comparing
/// pre-order walks that record missing children.
pub fn contains_subtree<T: PartialEq>(tree: &BinaryTree<T>, pattern: &BinaryTree<T>) -> bool {
    let haystack = pre_order_with_gaps(tree);
    let needle = pre_order_with_gaps(pattern);
    haystack.windows(needle.len()).any(|window| window == needle)
}

fn pre_order_with_gaps<T>(tree: &BinaryTree<T>) -> Vec<Option<&T>> {
    let mut walk = Vec::new();
    let mut stack = vec![tree.root()];
    while let Some(slot) = stack.pop() {
        match slot {
            Some(id) => {
                walk.push(Some(tree.value(id)));
                stack.push(tree.right(id));
                stack.push(tree.left(id));
            }
            None => walk.push(None),
        }
    }
    walk
}

// --- Pair with difference ---

/// Finds `(a, b)` in `values` with `b - a == diff`, scanning a sorted copy
/// with two pointers. The two values come from different positions.
pub fn pair_with_difference(values: &[i64], diff: u64) -> Option<(i64, i64)> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let target = i128::from(diff);
    let (mut i, mut j) = (0, 1);
    while j < sorted.len() {
        if i == j {
            j += 1;
            continue;
        }
        let gap = i128::from(sorted[j]) - i128::from(sorted[i]);
        match gap.cmp(&target) {
            Ordering::Equal => return Some((sorted[i], sorted[j])),
            Ordering::Less => j += 1,
            Ordering::Greater => i += 1,
        }
    }
    None
}
