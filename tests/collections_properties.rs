//! Property-based tests for the list, map, tree and trie structures, each
//! checked against a std collection doing the same work.

use interview_structures::{BinarySearchTree, ChainedHashMap, LinkedList, Trie};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap, VecDeque};

#[derive(Debug, Clone)]
enum MapOp {
    Put(u8, i32),
    Remove(u8),
    Get(u8),
    Clear,
}

fn map_ops_strategy() -> impl Strategy<Value = Vec<MapOp>> {
    prop::collection::vec(
        prop_oneof![
            6 => (any::<u8>(), any::<i32>()).prop_map(|(k, v)| MapOp::Put(k, v)),
            3 => any::<u8>().prop_map(MapOp::Remove),
            3 => any::<u8>().prop_map(MapOp::Get),
            1 => Just(MapOp::Clear),
        ],
        0..600,
    )
}

#[derive(Debug, Clone)]
enum ListOp {
    Append(i32),
    PushFront(i32),
    PopFront,
    PopBack,
    Add(usize, i32),
    RemoveAt(usize),
}

fn list_ops_strategy() -> impl Strategy<Value = Vec<ListOp>> {
    prop::collection::vec(
        prop_oneof![
            any::<i32>().prop_map(ListOp::Append),
            any::<i32>().prop_map(ListOp::PushFront),
            Just(ListOp::PopFront),
            Just(ListOp::PopBack),
            (0usize..40, any::<i32>()).prop_map(|(i, v)| ListOp::Add(i, v)),
            (0usize..40).prop_map(ListOp::RemoveAt),
        ],
        0..300,
    )
}

/// Lowercase words of one to six letters.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::char::range('a', 'e'), 1..=6)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_hashmap_matches_std(ops in map_ops_strategy()) {
        let mut ours: ChainedHashMap<u8, i32> = ChainedHashMap::new();
        let mut reference: HashMap<u8, i32> = HashMap::new();

        for op in ops {
            match op {
                MapOp::Put(k, v) => prop_assert_eq!(ours.put(k, v), reference.insert(k, v)),
                MapOp::Remove(k) => prop_assert_eq!(ours.remove(&k), reference.remove(&k)),
                MapOp::Get(k) => prop_assert_eq!(ours.get(&k), reference.get(&k)),
                MapOp::Clear => {
                    ours.clear();
                    reference.clear();
                }
            }
            prop_assert_eq!(ours.len(), reference.len());
        }

        // Load factor stays at or under 3/4.
        prop_assert!(ours.len() * 4 <= ours.bucket_count() * 3);
        let mut pairs: Vec<(u8, i32)> = ours.iter().map(|(k, v)| (*k, *v)).collect();
        let mut expected: Vec<(u8, i32)> = reference.into_iter().collect();
        pairs.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(pairs, expected);
    }

    #[test]
    fn prop_linked_list_matches_vecdeque(ops in list_ops_strategy()) {
        let mut ours: LinkedList<i32> = LinkedList::new();
        let mut reference: VecDeque<i32> = VecDeque::new();

        for op in ops {
            match op {
                ListOp::Append(v) => {
                    ours.append(v);
                    reference.push_back(v);
                }
                ListOp::PushFront(v) => {
                    ours.push_front(v);
                    reference.push_front(v);
                }
                ListOp::PopFront => prop_assert_eq!(ours.pop_front(), reference.pop_front()),
                ListOp::PopBack => prop_assert_eq!(ours.pop_back(), reference.pop_back()),
                ListOp::Add(i, v) => {
                    let fits = i <= reference.len();
                    prop_assert_eq!(ours.add(v, i).is_ok(), fits);
                    if fits {
                        reference.insert(i, v);
                    }
                }
                ListOp::RemoveAt(i) => {
                    prop_assert_eq!(ours.remove_at(i).ok(), reference.remove(i));
                }
            }
            prop_assert_eq!(ours.len(), reference.len());
            prop_assert_eq!(ours.front(), reference.front());
            prop_assert_eq!(ours.back(), reference.back());
        }

        prop_assert_eq!(ours.to_vec(), Vec::from(reference.clone()));
        let backwards: Vec<i32> = ours.iter().rev().copied().collect();
        let expected: Vec<i32> = reference.iter().rev().copied().collect();
        prop_assert_eq!(backwards, expected);
    }

    #[test]
    fn prop_bst_keeps_sorted_unique_values(
        values in prop::collection::vec(-500i32..500, 0..200),
        doomed in prop::collection::vec(-500i32..500, 0..100)
    ) {
        let mut bst = BinarySearchTree::new();
        let mut reference = BTreeSet::new();
        for &v in &values {
            prop_assert_eq!(bst.insert(v).is_ok(), reference.insert(v));
        }
        for v in &doomed {
            prop_assert_eq!(bst.delete(v).is_ok(), reference.remove(v));
        }

        let in_order: Vec<i32> = bst.in_order().into_iter().copied().collect();
        let expected: Vec<i32> = reference.iter().copied().collect();
        prop_assert_eq!(in_order, expected);
        prop_assert_eq!(bst.len(), reference.len());
        prop_assert!(bst.height() <= bst.len());
        for v in &reference {
            prop_assert!(bst.search(v));
            prop_assert!(bst.depth(v).is_some_and(|d| d < bst.height()));
        }
    }

    #[test]
    fn prop_trie_prefix_queries_match_filter(
        words in prop::collection::btree_set(word_strategy(), 0..60),
        prefix in word_strategy(),
        doomed in prop::collection::vec(word_strategy(), 0..20)
    ) {
        let mut trie = Trie::new();
        trie.insert_all(words.iter().map(String::as_str)).unwrap();
        let mut reference = words.clone();
        for word in &doomed {
            prop_assert_eq!(trie.remove(word).is_ok(), reference.remove(word));
        }

        let expected: Vec<String> = reference
            .iter()
            .filter(|w| w.starts_with(prefix.as_str()))
            .cloned()
            .collect();
        prop_assert_eq!(trie.words_with_prefix(&prefix), expected.clone());
        prop_assert_eq!(trie.validate_prefix(&prefix), !expected.is_empty());
        for word in &reference {
            prop_assert!(trie.validate_word(word));
        }
        prop_assert_eq!(trie.is_empty(), reference.is_empty());
    }
}
