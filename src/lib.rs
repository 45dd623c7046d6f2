//! # Interview Structures
//!
//! Textbook data structures and the classic interview puzzles built on them.
//!
//! The centrepiece is the [`graph`] module: a directed weighted graph stored
//! either as an adjacency list or an adjacency matrix behind one trait, with
//! DFS, BFS and Dijkstra's shortest paths. Dijkstra runs on [`PriorityQueue`],
//! which sits on a size-balanced pointer [`BinaryHeap`].
//!
//! ## Key Features
//!
//! * **Two graph layouts, one API:** [`AdjacencyList`] keeps insertion order,
//!   [`AdjacencyMatrix`] trades memory for O(1) edge lookup. [`Undirected`]
//!   turns either one into an undirected graph.
//! * **Size-balanced heap:** nodes cache their subtree sizes, so inserts go
//!   to the smaller side and removals take from the larger one.
//! * **Arena storage:** [`LinkedList`] and [`BinaryTree`] link nodes by index,
//!   with no `Rc`/`RefCell` and no `unsafe`.
//! * **Shared traits:** [`AnyStack`], [`AnyQueue`] and [`AnyHeap`] let the
//!   same code drive a std collection or one of ours.
//!
//! ## Feature Flags
//!
//! * `bitvec` (default): bit-vector variants of the string puzzles in
//!   [`questions::arrays_strings`].
//!
//! ## Examples
//!
//! ### Shortest paths
//!
//! ```rust
//! use interview_structures::graph::{AdjacencyList, DirectedWeightedGraph};
//!
//! let mut graph = AdjacencyList::new();
//! graph.add_all_vertices(["a", "b", "c"])?;
//! graph.add_edge("a", "b", 4)?;
//! graph.add_edge("b", "c", 1)?;
//! graph.add_edge("a", "c", 7)?;
//!
//! let path = graph.shortest_path("a", "c")?;
//! let labels: Vec<&str> = path.iter().map(|step| step.vertex.as_str()).collect();
//! assert_eq!(labels, ["a", "b", "c"]);
//! assert_eq!(path.last().map(|step| step.distance), Some(5));
//! # Ok::<(), interview_structures::StructureError>(())
//! ```
//!
//! ### BinaryHeap
//!
//! ```rust
//! use interview_structures::{BinaryHeap, Min};
//!
//! let mut heap: BinaryHeap<i32, Min> = BinaryHeap::new();
//! heap.insert_all([5, 1, 8, 3])?;
//! assert_eq!(heap.top(), Ok(&1));
//!
//! // Values are unique.
//! assert!(heap.insert(3).is_err());
//! assert_eq!(heap.into_sorted_vec(), [1, 3, 5, 8]);
//! # Ok::<(), interview_structures::StructureError>(())
//! ```
//!
//! ### Trie
//!
//! ```rust
//! use interview_structures::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert_all(["car", "cart", "cat"])?;
//! assert!(trie.validate_prefix("ca"));
//! assert!(!trie.validate_word("ca"));
//! assert_eq!(trie.words_with_prefix("car"), ["car", "cart"]);
//! # Ok::<(), interview_structures::StructureError>(())
//! ```

// --- Module Declarations ---

pub mod binary_search_tree;
pub mod error;
pub mod graph;
pub mod hashmap;
pub mod heap;
pub mod linked_list;
pub mod priority_queue;
pub mod queue;
pub mod questions;
pub mod stack;
pub mod tree;
pub mod trie;
pub mod utils;

// --- Re-exports ---

pub use binary_search_tree::BinarySearchTree;
pub use error::{Result, StructureError};
pub use graph::{
    AdjacencyList, AdjacencyMatrix, DirectedWeightedGraph, PathStep, ShortestPaths, Undirected,
    UndirectedAdjacencyList, UndirectedAdjacencyMatrix,
};
pub use hashmap::ChainedHashMap;
pub use heap::{AnyHeap, BinaryHeap, HeapKind, Max, Min};
pub use linked_list::LinkedList;
pub use priority_queue::PriorityQueue;
pub use queue::{AnyQueue, ArrayQueue, LinkedQueue};
pub use stack::{AnyStack, ArrayStack, LinkedStack};
pub use tree::{BinaryTree, NodeId, Relationship};
pub use trie::Trie;
pub use utils::IndexType;
