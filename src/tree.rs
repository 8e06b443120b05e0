//! A mutable, unbalanced BST. Nodes own their children through `Option<Box<Node>>` slots, and
//! every mutation rewrites the slot that owns the affected node.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedTree, TreeError};
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(1).is_none());
//! assert!(tree.min().is_none());
//!
//! tree.insert(1).unwrap();
//! assert_eq!(tree.find(1).map(|n| n.key()), Some(1));
//!
//! // Keys are unique, so inserting the same key again is rejected.
//! assert_eq!(tree.insert(1), Err(TreeError::Duplicate(1)));
//! assert_eq!(tree.len(), 1);
//!
//! tree.delete(1).unwrap();
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::{Key, TreeError};

/// A position that owns at most one `Node`: the root of a tree or a child of a `Node`.
type Link = Option<Box<Node>>;

/// A Binary Search Tree of unique keys. This can be used for inserting, finding, and deleting
/// keys as well as looking up the smallest and largest key.
///
/// No rebalancing is ever done. Inserting keys in sorted order produces a tree whose height
/// equals its length.
pub struct OrderedTree {
    root: Link,
    len: usize,
}

impl Default for OrderedTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for OrderedTree {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for OrderedTree {
    /// Lists every node in pre-order. Each `Node` only shows its children's keys, so the output
    /// is flat no matter how deep the tree is.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut nodes = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            nodes.push(node);
            stack.extend(node.right());
            stack.extend(node.left());
        }

        f.debug_struct("OrderedTree")
            .field("len", &self.len)
            .field("nodes", &nodes)
            .finish()
    }
}

impl OrderedTree {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The top-most node, if the tree has any nodes.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Inserts the given key into the tree. If the key is already present, nothing changes and
    /// [`TreeError::Duplicate`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, TreeError};
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert_eq!(tree.insert(20), Ok(()));
    /// assert_eq!(tree.insert(10), Ok(()));
    /// assert_eq!(tree.insert(20), Err(TreeError::Duplicate(20)));
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.key(), 20);
    /// assert_eq!(root.left().map(|n| n.key()), Some(10));
    /// ```
    pub fn insert(&mut self, key: Key) -> Result<(), TreeError> {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    debug!("insert: rejected duplicate key {}", key);
                    return Err(TreeError::Duplicate(key));
                }
                Ordering::Greater => &mut node.right,
            };
        }
        *slot = Some(Node::new_boxed(key));

        self.len += 1;
        trace!("insert: added key {}, len is now {}", key, self.len);
        Ok(())
    }

    /// Deletes the node containing the given key from the tree. If the tree does not contain the
    /// key, nothing changes and [`TreeError::NotFound`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, TreeError};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.delete(1), Err(TreeError::NotFound(1)));
    ///
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.delete(1), Ok(()));
    /// assert!(tree.find(1).is_none());
    /// ```
    pub fn delete(&mut self, key: Key) -> Result<(), TreeError> {
        remove(&mut self.root, key).map_err(|err| {
            debug!("delete: {}", err);
            err
        })?;

        self.len -= 1;
        trace!("delete: removed key {}, len is now {}", key, self.len);
        Ok(())
    }

    /// Potentially finds the node holding the given key. If no node has the key, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1).unwrap();
    ///
    /// assert_eq!(tree.find(1).map(|n| n.key()), Some(1));
    /// assert!(tree.find(42).is_none());
    /// ```
    pub fn find(&self, key: Key) -> Option<&Node> {
        let mut cursor = self.root();
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// Whether the tree holds the given key.
    pub fn contains(&self, key: Key) -> bool {
        self.find(key).is_some()
    }

    /// The node with the smallest key, or `None` for an empty tree.
    pub fn min(&self) -> Option<&Node> {
        self.root().map(Node::leftmost)
    }

    /// The node with the largest key, or `None` for an empty tree.
    pub fn max(&self) -> Option<&Node> {
        self.root().map(Node::rightmost)
    }

    /// Counts the levels of the tree, with the root as level one. An empty tree has a height of
    /// `-1`, a lone root has a height of `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(2).unwrap();
    /// assert_eq!(tree.height(), 1);
    ///
    /// tree.insert(1).unwrap();
    /// tree.insert(3).unwrap();
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> isize {
        match self.root() {
            Some(root) => root.levels() as isize,
            None => -1,
        }
    }

    /// Releases every node, leaving an empty tree.
    ///
    /// Nodes are detached from their children before being dropped so that tearing down a tree
    /// never recurses, however deep it is.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }

        self.len = 0;
    }
}

/// Deletes `key` from the subtree owned by `slot`.
///
/// The descent is a loop over owning slots so a chain of any depth can be searched.
fn remove(mut slot: &mut Link, key: Key) -> Result<(), TreeError> {
    loop {
        let ordering = match slot.as_deref() {
            Some(node) => key.cmp(&node.key),
            None => return Err(TreeError::NotFound(key)),
        };

        slot = match (ordering, slot) {
            (Ordering::Equal, found) => {
                unlink(found);
                return Ok(());
            }
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, None) => return Err(TreeError::NotFound(key)),
        };
    }
}

/// Removes the node owned by `slot`, keeping everything beneath it in the tree.
///
/// Panics if `slot` is empty.
fn unlink(slot: &mut Link) {
    let mut node = slot.take().expect("unlink requires an occupied slot");

    *slot = match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(left), Some(right)) => {
            // The predecessor has no right child so removing it lands in one of the arms above.
            let predecessor = left.rightmost().key;
            node.key = predecessor;
            node.left = Some(left);
            node.right = Some(right);

            let removed = remove(&mut node.left, predecessor);
            debug_assert!(removed.is_ok());

            if cfg!(debug_assertions) {
                if let Some(left) = node.left() {
                    assert!(left.rightmost().key < node.key);
                }
                if let Some(right) = node.right() {
                    assert!(right.leftmost().key > node.key);
                }
            }

            Some(node)
        }
    };
}

/// A single element of an [`OrderedTree`]. It holds a key and up to two children. Nodes are only
/// ever handed out by shared reference so their keys can't be changed behind the tree's back.
pub struct Node {
    key: Key,
    left: Link,
    right: Link,
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

impl Node {
    fn new_boxed(key: Key) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> Key {
        self.key
    }

    /// The root of the subtree holding keys smaller than this node's key.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the subtree holding keys larger than this node's key.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has 1 level.
    fn levels(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        deepest
    }
}
