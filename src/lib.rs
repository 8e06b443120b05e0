//! An ordered, mutable Binary Search Tree (BST) over a single scalar key type.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! may have child `Node`s. The invariants this crate maintains are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//! 3. No key appears twice. Inserting a key that is already present is rejected.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)`. This tree does no rebalancing, so
//! the height is entirely decided by insertion order: keys inserted in
//! ascending order produce a tree that is really a linked list.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedTree, TreeError};
//!
//! let mut tree = OrderedTree::new();
//! assert_eq!(tree.height(), -1);
//!
//! tree.insert(20).unwrap();
//! tree.insert(10).unwrap();
//! tree.insert(30).unwrap();
//! assert_eq!(tree.insert(10), Err(TreeError::Duplicate(10)));
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.min().map(|n| n.key()), Some(10));
//! assert_eq!(tree.max().map(|n| n.key()), Some(30));
//!
//! tree.delete(20).unwrap();
//! assert!(tree.find(20).is_none());
//! assert_eq!(tree.delete(20), Err(TreeError::NotFound(20)));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod tree;


pub use error::TreeError;
pub use tree::{Node, OrderedTree};

/// The scalar key stored in every [`Node`].
pub type Key = i32;
