//! A plain Binary Search Tree. Nothing is done to keep it balanced, so inserting values in sorted
//! order produces a tree shaped like a linked list and every operation degrades to `O(N)`.
//!
//! Inserting, removing and searching recurse once per level of the tree. Callers feeding this
//! tree adversarial (e.g. sorted) input should bound its size accordingly. Clearing and dropping
//! do not recurse.
//!
//! # Examples
//!
//! ```
//! use ordtree::bst::Tree;
//!
//! let mut tree = Tree::new();
//! for x in 1..=5 {
//!     tree.insert(x);
//! }
//!
//! // No rebalancing happened - every node only has a right child.
//! assert_eq!(tree.height(), 4);
//! assert_eq!(tree.root(), Some(&1));
//! ```

use crate::ordered::{Node, OrderedTree, Rebalance};

/// The [`Rebalance`] policy of a plain BST: every subtree is left exactly as it is.
#[derive(Debug)]
pub enum Unbalanced {}

impl Rebalance for Unbalanced {
    fn rebalance<T>(node: Box<Node<T>>) -> Box<Node<T>> {
        node
    }
}

/// A Binary Search Tree that never rebalances.
pub type Tree<T> = OrderedTree<T, Unbalanced>;
