//! Interview puzzles grouped by chapter. Each function stands alone and works
//! over the crate's own structures.

pub mod arrays_strings;
pub mod linked_lists;
pub mod stacks_queues;
pub mod trees_graphs;
