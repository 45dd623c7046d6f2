//! Error handling for the interview-structures crate.
//!
//! Every fallible operation returns [`Result`], whose error side is
//! [`StructureError`]. Lookups that have a natural "absent" answer return
//! `Option` instead.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// Read or removal from a structure with no elements.
    #[error("{structure} is empty")]
    Empty {
        /// Human-readable name of the structure ("Stack", "Heap", ...)
        structure: &'static str,
    },

    /// Positional access outside the valid range.
    #[error("Index out of bounds: index {index}, size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// Insertion of a value that a unique-valued structure already holds.
    #[error("Value already exists: {value}")]
    DuplicateValue {
        /// Debug rendering of the rejected value
        value: String,
    },

    /// Lookup or removal of a value that is not present.
    #[error("Value not found: {value}")]
    ValueNotFound {
        /// Debug rendering of the missing value
        value: String,
    },

    #[error("Vertex already exists: {0}")]
    VertexExists(String),

    #[error("Vertex does not exist: {0}")]
    VertexNotFound(String),

    #[error("Edge already exists: {from}->{to}")]
    EdgeExists { from: String, to: String },

    #[error("Edge does not exist: {from}->{to}")]
    EdgeNotFound { from: String, to: String },

    /// Shortest-path query for a vertex the search never reached.
    #[error("Vertex cannot be reached: {0}")]
    Unreachable(String),

    #[error("Invalid word: {0}")]
    InvalidWord(String),

    #[error("Word already exists in trie: {0}")]
    WordExists(String),

    /// A precondition on the arguments did not hold.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the violated precondition
        message: String,
    },
}

impl StructureError {
    /// Create an empty-structure error
    pub fn empty(structure: &'static str) -> Self {
        Self::Empty { structure }
    }

    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { index, size }
    }

    /// Create a duplicate value error from anything printable with `{:?}`
    pub fn duplicate<T: std::fmt::Debug + ?Sized>(value: &T) -> Self {
        Self::DuplicateValue {
            value: format!("{value:?}"),
        }
    }

    /// Create a value not found error from anything printable with `{:?}`
    pub fn not_found<T: std::fmt::Debug + ?Sized>(value: &T) -> Self {
        Self::ValueNotFound {
            value: format!("{value:?}"),
        }
    }

    pub fn edge_exists(from: &str, to: &str) -> Self {
        Self::EdgeExists {
            from: from.to_owned(),
            to: to.to_owned(),
        }
    }

    pub fn edge_not_found(from: &str, to: &str) -> Self {
        Self::EdgeNotFound {
            from: from.to_owned(),
            to: to.to_owned(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, StructureError>;
