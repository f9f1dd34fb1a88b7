//! This crate exposes various choices for Binary Search Trees (BSTs), along with a binary heap,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value no greater than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value no less than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). With clever construction the
//! height of a BST can be limited to `O(lg N)` where `N` is the number of nodes
//! in the tree. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! ## Trees in this crate
//!
//! - [`bst::Tree`]: no balancing at all.
//! - [`avl::Tree`]: rotates after every insert and remove to keep sibling subtree heights within
//!   one of each other.
//! - [`rbt::Tree`]: colors nodes red or black and rotates/recolors to keep the longest path at
//!   most twice the shortest.
//!
//! All three keep values equal to an already stored value instead of replacing it, so they
//! behave like sorted multisets. They share the same API: `insert`, `remove`, `contains`,
//! `min`, `max`, `successor`, `predecessor`, `height`, `len`, `clear`, in-order `iter` and a
//! level-order `Display`.
//!
//! ```
//! use ordtree::{avl, bst, rbt};
//!
//! let values = [1, 2, 3, 4, 5, 6, 7];
//!
//! let bst: bst::Tree<i32> = values.into_iter().collect();
//! let avl: avl::Tree<i32> = values.into_iter().collect();
//! let rbt: rbt::Tree<i32> = values.into_iter().collect();
//!
//! assert_eq!(bst.height(), 6);
//! assert_eq!(avl.height(), 2);
//! assert_eq!(rbt.height(), 3);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod bst;
mod display;
pub mod error;
pub mod heap;
pub mod ordered;
pub mod rbt;

#[cfg(test)]
mod test;

pub use error::{Error, Result};
