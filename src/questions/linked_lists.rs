//! Chapter 2: singly linked lists.
//!
//! The puzzles need shared tails and cycles, which an owning list cannot
//! express, so nodes live in a [`NodePool`] arena and link by [`ListNodeId`].
//! Unlinked nodes stay in the pool; only reachability from a head matters.

use std::hash::Hash;

use fnv::FnvBuildHasher;
use hashbrown::HashSet;

use crate::error::{Result, StructureError};
use crate::stack::{AnyStack, LinkedStack};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListNodeId(usize);

#[derive(Clone, Debug)]
pub struct ListNode<T> {
    pub value: T,
    pub next: Option<ListNodeId>,
}

#[derive(Clone, Debug, Default)]
pub struct NodePool<T> {
    nodes: Vec<ListNode<T>>,
}

impl<T> NodePool<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Allocates an unlinked node.
    pub fn push(&mut self, value: T) -> ListNodeId {
        self.nodes.push(ListNode { value, next: None });
        ListNodeId(self.nodes.len() - 1)
    }

    /// Allocates a chain holding `values` in order and returns its head.
    pub fn from_values<I: IntoIterator<Item = T>>(&mut self, values: I) -> Option<ListNodeId> {
        let mut head = None;
        let mut tail: Option<ListNodeId> = None;
        for value in values {
            let id = self.push(value);
            match tail {
                Some(t) => self.set_next(t, Some(id)),
                None => head = Some(id),
            }
            tail = Some(id);
        }
        head
    }

    #[inline]
    pub fn value(&self, id: ListNodeId) -> &T {
        &self.nodes[id.0].value
    }

    #[inline]
    pub fn next(&self, id: ListNodeId) -> Option<ListNodeId> {
        self.nodes[id.0].next
    }

    #[inline]
    pub fn set_next(&mut self, id: ListNodeId, next: Option<ListNodeId>) {
        self.nodes[id.0].next = next;
    }

    /// Values reachable from `head`, stopping before any node is seen twice.
    pub fn values_from(&self, head: Option<ListNodeId>) -> Vec<&T> {
        let mut seen: HashSet<ListNodeId, FnvBuildHasher> = HashSet::default();
        let mut out = Vec::new();
        let mut cursor = head;
        while let Some(id) = cursor {
            if !seen.insert(id) {
                break;
            }
            out.push(self.value(id));
            cursor = self.next(id);
        }
        out
    }

    /// The node `index` steps after `head`.
    pub fn node_at(&self, head: Option<ListNodeId>, index: usize) -> Option<ListNodeId> {
        let mut cursor = head;
        for _ in 0..index {
            cursor = self.next(cursor?);
        }
        cursor
    }

    /// Total nodes allocated, linked or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn swap_values(&mut self, a: ListNodeId, b: ListNodeId) {
        if a == b {
            return;
        }
        let (lo, hi) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (head, tail) = self.nodes.split_at_mut(hi);
        std::mem::swap(&mut head[lo].value, &mut tail[0].value);
    }

    fn successors(&self, head: Option<ListNodeId>) -> impl Iterator<Item = ListNodeId> + '_ {
        std::iter::successors(head, move |&id| self.next(id))
    }
}

/// 2.1 Removes later duplicates, keeping first occurrences. O(n) time, O(n) space.
pub fn delete_duplicates_buffer<T: Hash + Eq + Clone>(pool: &mut NodePool<T>, head: Option<ListNodeId>) {
    let mut seen: HashSet<T, FnvBuildHasher> = HashSet::default();
    let mut previous: Option<ListNodeId> = None;
    let mut cursor = head;
    while let Some(id) = cursor {
        let next = pool.next(id);
        if seen.insert(pool.value(id).clone()) {
            previous = Some(id);
        } else if let Some(p) = previous {
            pool.set_next(p, next);
        }
        cursor = next;
    }
}

/// 2.1 Same as [`delete_duplicates_buffer`] without extra storage. O(n^2) time.
pub fn delete_duplicates_no_buffer<T: PartialEq>(pool: &mut NodePool<T>, head: Option<ListNodeId>) {
    let mut current = head;
    while let Some(id) = current {
        let mut runner = id;
        while let Some(candidate) = pool.next(runner) {
            if pool.value(candidate) == pool.value(id) {
                let skip = pool.next(candidate);
                pool.set_next(runner, skip);
            } else {
                runner = candidate;
            }
        }
        current = pool.next(id);
    }
}

/// 2.2 The value `n` places from the end (`n = 1` is the last node).
pub fn nth_to_last_recursive<T>(pool: &NodePool<T>, head: Option<ListNodeId>, n: usize) -> Option<&T> {
    // Returns the count of nodes from `node` to the end, plus the match if found.
    fn walk<T>(pool: &NodePool<T>, node: Option<ListNodeId>, n: usize) -> (usize, Option<ListNodeId>) {
        let Some(id) = node else {
            return (0, None);
        };
        let (after, found) = walk(pool, pool.next(id), n);
        let position = after + 1;
        (position, found.or((position == n).then_some(id)))
    }
    walk(pool, head, n).1.map(|id| pool.value(id))
}

/// 2.2 Iterative two-pointer version of [`nth_to_last_recursive`].
pub fn nth_to_last_iterative<T>(pool: &NodePool<T>, head: Option<ListNodeId>, n: usize) -> Option<&T> {
    if n == 0 {
        return None;
    }
    let mut scout = head;
    for _ in 0..n {
        scout = pool.next(scout?);
    }
    let mut current = head?;
    while let Some(s) = scout {
        scout = pool.next(s);
        current = pool.next(current)?;
    }
    Some(pool.value(current))
}

/// 2.3 Deletes `node` given only that node, by pulling its successor's value in.
///
/// Fails on the last node of a list, which has no successor to copy.
pub fn delete_middle_node<T>(pool: &mut NodePool<T>, node: ListNodeId) -> Result<()> {
    let next = pool
        .next(node)
        .ok_or_else(|| StructureError::invalid_argument("can only delete middle nodes"))?;
    pool.swap_values(node, next);
    let skip = pool.next(next);
    pool.set_next(node, skip);
    Ok(())
}

/// 2.4 Relinks the list as smaller, then equal, then greater than `x`,
/// keeping relative order within each part. Returns the new head.
pub fn partition_list<T: Ord>(pool: &mut NodePool<T>, head: Option<ListNodeId>, x: &T) -> Option<ListNodeId> {
    let nodes: Vec<ListNodeId> = pool.successors(head).collect();
    let mut smaller = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for id in nodes {
        match pool.value(id).cmp(x) {
            std::cmp::Ordering::Less => smaller.push(id),
            std::cmp::Ordering::Equal => equal.push(id),
            std::cmp::Ordering::Greater => greater.push(id),
        }
    }
    let order: Vec<ListNodeId> = smaller.into_iter().chain(equal).chain(greater).collect();
    for pair in order.windows(2) {
        pool.set_next(pair[0], Some(pair[1]));
    }
    if let Some(&last) = order.last() {
        pool.set_next(last, None);
    }
    order.first().copied()
}

/// 2.5 Adds two numbers stored least-significant digit first; the sum is a
/// new chain in the same pool. A node holding more than 9 is rejected.
pub fn sum_lists_reverse(
    pool: &mut NodePool<u8>,
    a: Option<ListNodeId>,
    b: Option<ListNodeId>,
) -> Result<Option<ListNodeId>> {
    fn take_digit(pool: &NodePool<u8>, cursor: &mut Option<ListNodeId>) -> Result<u8> {
        let Some(id) = *cursor else { return Ok(0) };
        let digit = *pool.value(id);
        if digit > 9 {
            return Err(StructureError::invalid_argument(format!(
                "{} is not a decimal digit",
                digit
            )));
        }
        *cursor = pool.next(id);
        Ok(digit)
    }

    let mut digits = Vec::new();
    let (mut x, mut y) = (a, b);
    let mut carry = 0u8;
    while x.is_some() || y.is_some() || carry > 0 {
        let total = carry + take_digit(pool, &mut x)? + take_digit(pool, &mut y)?;
        digits.push(total % 10);
        carry = total / 10;
    }
    Ok(pool.from_values(digits))
}

/// 2.6 True if the list reads the same both ways. Pushes the first half on a stack.
pub fn is_list_palindrome<T: PartialEq>(pool: &NodePool<T>, head: Option<ListNodeId>) -> bool {
    let mut stack = LinkedStack::new();
    let mut slow = head;
    let mut fast = head;
    while let Some(f) = fast {
        let Some(f_next) = pool.next(f) else { break };
        if let Some(s) = slow {
            stack.push(pool.value(s));
            slow = pool.next(s);
        }
        fast = pool.next(f_next);
    }
    // Odd length: skip the middle node.
    if fast.is_some() {
        slow = slow.and_then(|s| pool.next(s));
    }
    while let Some(s) = slow {
        match stack.pop() {
            Ok(expected) if expected == pool.value(s) => slow = pool.next(s),
            _ => return false,
        }
    }
    true
}

/// 2.7 The first node shared by both lists, compared by identity.
pub fn list_intersect<T>(pool: &NodePool<T>, a: Option<ListNodeId>, b: Option<ListNodeId>) -> Option<ListNodeId> {
    let tail_and_len = |head: Option<ListNodeId>| {
        pool.successors(head)
            .fold((None, 0usize), |(_, len), id| (Some(id), len + 1))
    };
    let (tail_a, len_a) = tail_and_len(a);
    let (tail_b, len_b) = tail_and_len(b);
    if tail_a.is_none() || tail_a != tail_b {
        return None;
    }

    let (mut shorter, mut longer) = if len_a < len_b { (a, b) } else { (b, a) };
    for _ in 0..len_a.abs_diff(len_b) {
        longer = longer.and_then(|id| pool.next(id));
    }
    while shorter != longer {
        shorter = shorter.and_then(|id| pool.next(id));
        longer = longer.and_then(|id| pool.next(id));
    }
    shorter
}

/// 2.8 The node where a cycle begins, found with Floyd's tortoise and hare.
pub fn detect_loop<T>(pool: &NodePool<T>, head: Option<ListNodeId>) -> Option<ListNodeId> {
    let step = |id: Option<ListNodeId>| id.and_then(|i| pool.next(i));
    let mut slow = head;
    let mut fast = head;
    loop {
        slow = step(slow);
        fast = step(step(fast));
        match (slow, fast) {
            (_, None) => return None,
            (s, f) if s == f => break,
            _ => {}
        }
    }
    let mut start = head;
    while start != fast {
        start = step(start);
        fast = step(fast);
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Clone>(pool: &NodePool<T>, head: Option<ListNodeId>) -> Vec<T> {
        pool.values_from(head).into_iter().cloned().collect()
    }

    #[test]
    fn test_lists_delete_duplicates() {
        let input = [3, 4, 1, 2, 4, 1, 5, 6, 2, 1, 4, 3];
        let mut pool = NodePool::new();
        let head = pool.from_values(input);
        delete_duplicates_buffer(&mut pool, head);
        assert_eq!(collect(&pool, head), [3, 4, 1, 2, 5, 6]);

        let head = pool.from_values(input);
        delete_duplicates_no_buffer(&mut pool, head);
        assert_eq!(collect(&pool, head), [3, 4, 1, 2, 5, 6]);

        let head = pool.from_values([1, 2, 3, 4, 5]);
        delete_duplicates_buffer(&mut pool, head);
        delete_duplicates_no_buffer(&mut pool, head);
        assert_eq!(collect(&pool, head), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_lists_nth_to_last() {
        let mut pool = NodePool::new();
        let head = pool.from_values(1..=9);
        assert_eq!(nth_to_last_recursive(&pool, head, 3), Some(&7));
        assert_eq!(nth_to_last_iterative(&pool, head, 3), Some(&7));
        assert_eq!(nth_to_last_recursive(&pool, head, 1), Some(&9));
        assert_eq!(nth_to_last_iterative(&pool, head, 9), Some(&1));
        assert_eq!(nth_to_last_iterative(&pool, head, 0), None);
        assert_eq!(nth_to_last_recursive(&pool, head, 0), None);

        let single = pool.from_values([2]);
        assert_eq!(nth_to_last_recursive(&pool, single, 2), None);
        assert_eq!(nth_to_last_iterative(&pool, single, 2), None);
    }

    #[test]
    fn test_lists_delete_middle_node() {
        let mut pool = NodePool::new();
        let head = pool.from_values([1, 2, 3]);
        let middle = pool.node_at(head, 1).unwrap();
        delete_middle_node(&mut pool, middle).unwrap();
        assert_eq!(collect(&pool, head), [1, 3]);

        let last = pool.node_at(head, 1).unwrap();
        assert!(matches!(
            delete_middle_node(&mut pool, last),
            Err(StructureError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_lists_partition() {
        let cases: [(&[i32], i32, &[i32]); 5] = [
            (&[3, 4, 1, 6, 8, 2, 9, 5], 3, &[1, 2, 3, 4, 6, 8, 9, 5]),
            (&[10, 40, 50, 20, 30, 60], 25, &[10, 20, 40, 50, 30, 60]),
            (&[1, 1, 1, 2, 3, 1, 2], 1, &[1, 1, 1, 1, 2, 3, 2]),
            (&[1, 1, 1, 2, 3, 1, 2], 0, &[1, 1, 1, 2, 3, 1, 2]),
            (&[1, 1, 1, 2, 3, 1, 2], 4, &[1, 1, 1, 2, 3, 1, 2]),
        ];
        let mut pool = NodePool::new();
        for (input, x, expected) in cases {
            let head = pool.from_values(input.iter().copied());
            let head = partition_list(&mut pool, head, &x);
            assert_eq!(collect(&pool, head), expected);
        }
        assert_eq!(partition_list(&mut pool, None, &1), None);
    }

    #[test]
    fn test_lists_sum_reverse() {
        let mut pool = NodePool::new();
        let a = pool.from_values([7, 4, 2]);
        let b = pool.from_values([4, 9, 8]);
        let sum = sum_lists_reverse(&mut pool, a, b).unwrap();
        assert_eq!(collect(&pool, sum), [1, 4, 1, 1]);

        let a = pool.from_values([1, 2]);
        let b = pool.from_values([5, 6, 2, 4, 7]);
        let sum = sum_lists_reverse(&mut pool, a, b).unwrap();
        assert_eq!(collect(&pool, sum), [6, 8, 2, 4, 7]);
        let sum = sum_lists_reverse(&mut pool, b, a).unwrap();
        assert_eq!(collect(&pool, sum), [6, 8, 2, 4, 7]);

        let nines = pool.from_values([9, 9, 9]);
        let one = pool.from_values([1]);
        let sum = sum_lists_reverse(&mut pool, nines, one).unwrap();
        assert_eq!(collect(&pool, sum), [0, 0, 0, 1]);
        assert_eq!(sum_lists_reverse(&mut pool, None, None), Ok(None));
    }

    #[test]
    fn test_lists_sum_rejects_non_digits() {
        let mut pool = NodePool::new();
        let a = pool.from_values([3, 200]);
        let b = pool.from_values([5]);
        assert!(matches!(
            sum_lists_reverse(&mut pool, a, b),
            Err(StructureError::InvalidArgument { .. })
        ));
        let c = pool.from_values([10]);
        assert!(sum_lists_reverse(&mut pool, b, c).is_err());
    }

    #[test]
    fn test_lists_palindrome() {
        let mut pool = NodePool::new();
        let odd = pool.from_values("abcdcba".chars());
        let even = pool.from_values("abcddcba".chars());
        let not = pool.from_values("abcdecba".chars());
        let single = pool.from_values("a".chars());
        assert!(is_list_palindrome(&pool, odd));
        assert!(is_list_palindrome(&pool, even));
        assert!(!is_list_palindrome(&pool, not));
        assert!(is_list_palindrome(&pool, single));
        assert!(is_list_palindrome(&pool, None));
    }

    #[test]
    fn test_lists_intersect() {
        let mut pool = NodePool::new();
        let shared = pool.from_values([3, 7]);
        let a = pool.push(2);
        pool.set_next(a, shared);
        let b = pool.from_values([1, 5, 6]);
        let b_tail = pool.node_at(b, 2).unwrap();
        pool.set_next(b_tail, shared);

        assert_eq!(list_intersect(&pool, Some(a), b), shared);
        assert_eq!(list_intersect(&pool, b, Some(a)), shared);

        let lone = pool.from_values([3]);
        assert_eq!(list_intersect(&pool, lone, b), None);
        assert_eq!(list_intersect(&pool, b, None), None);
    }

    #[test]
    fn test_lists_detect_loop() {
        let mut pool = NodePool::new();
        let head = pool.from_values([1, 3, 2, 3, 4]);
        let loop_start = pool.node_at(head, 1);
        let tail = pool.node_at(head, 4).unwrap();
        pool.set_next(tail, loop_start);
        assert_eq!(detect_loop(&pool, head), loop_start);
        assert_eq!(collect(&pool, head), [1, 3, 2, 3, 4]);

        let straight = pool.from_values(1..=6);
        assert_eq!(detect_loop(&pool, straight), None);

        let me = pool.push(9);
        pool.set_next(me, Some(me));
        assert_eq!(detect_loop(&pool, Some(me)), Some(me));
    }
}
