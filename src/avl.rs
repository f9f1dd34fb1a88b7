//! A self-balancing Binary Search Tree (specifically, an AVL tree).
//!
//! Every node keeps the heights of its two subtrees within one of each other. Whenever an insert
//! or a remove unwinds past a node that has become two levels taller on one side, one or two
//! rotations restore the invariant. The height of a tree with `N` values is therefore bounded by
//! roughly `1.44 * lg(N + 2)`.
//!
//! # Examples
//!
//! ```
//! use ordtree::avl::Tree;
//!
//! let mut tree = Tree::new();
//! for x in 1..=5 {
//!     tree.insert(x);
//! }
//!
//! // Sorted input doesn't degrade the tree into a list.
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.root(), Some(&2));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
//! ```

use log::trace;

use crate::ordered::{height, Node, OrderedTree, Rebalance};

/// The [`Rebalance`] policy of an AVL tree.
///
/// See [the Wikipedia page][wiki] for the terminology used in the rotations.
///
/// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing
#[derive(Debug)]
pub enum Balanced {}

impl Rebalance for Balanced {
    fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
        let factor = node.balance_factor();
        let node = if factor > 1 {
            if node.left.as_ref().map_or(0, |n| n.balance_factor()) < 0 {
                trace!("left-right rotation");
                node.left = node.left.take().map(rotate_left);
            }
            rotate_right(node)
        } else if factor < -1 {
            if node.right.as_ref().map_or(0, |n| n.balance_factor()) > 0 {
                trace!("right-left rotation");
                node.right = node.right.take().map(rotate_right);
            }
            rotate_left(node)
        } else {
            node
        };

        // After balancing, assert that we've restored/maintained the AVL invariant.
        if cfg!(debug_assertions) {
            let left_height = height(&node.left);
            let right_height = height(&node.right);
            assert_eq!(node.height, left_height.max(right_height) + 1);
            assert!((left_height - right_height).abs() <= 1);
        }
        node
    }
}

/// A self-balancing Binary Search Tree.
pub type Tree<T> = OrderedTree<T, Balanced>;

/// Rotates `node` to the right. This moves the left child up vertically and `node` down
/// vertically. Used to rebalance the tree when the left child is too tall. As such, it must only
/// be called when there _is_ a left child.
///
/// ## Panics
///
/// When called on a node without a left child.
///
/// # Diagram
///
/// ```text
///      node               pivot
///      /  \               /   \
///   pivot  z   rotate -> x    node
///    / \                      /  \
///   x   y                    y    z
/// ```
fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    trace!("rotating right at height {}", node.height);
    let mut pivot = node.left.take().expect("Rotate right => left child");

    node.left = pivot.right.take();
    node.fix_height();

    pivot.right = Some(node);
    pivot.fix_height();
    pivot
}

/// The mirror image of [`rotate_right`]: the right child moves up and `node` becomes its left
/// child.
///
/// ## Panics
///
/// When called on a node without a right child.
fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    trace!("rotating left at height {}", node.height);
    let mut pivot = node.right.take().expect("Rotate left => right child");

    node.right = pivot.left.take();
    node.fix_height();

    pivot.left = Some(node);
    pivot.fix_height();
    pivot
}
