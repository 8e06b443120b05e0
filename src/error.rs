use crate::Key;

/// Why a mutating operation on an [`OrderedTree`][crate::OrderedTree] left the tree untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// `insert` was given a key the tree already holds.
    #[error("key {0} is already present")]
    Duplicate(Key),
    /// `delete` was given a key the tree does not hold.
    #[error("key {0} is not present")]
    NotFound(Key),
}
