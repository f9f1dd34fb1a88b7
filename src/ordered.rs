//! The ordered-tree core shared by the [plain BST](crate::bst) and the [AVL tree](crate::avl).
//!
//! Both trees own their nodes through `Option<Box<Node>>` links and only differ in what happens to
//! each ancestor of a changed node once an insert or a remove unwinds back up the tree. That
//! difference is captured by the [`Rebalance`] hook: the plain BST leaves every subtree as it is
//! while the AVL tree rotates subtrees that have become too lopsided.
//!
//! Values equal to a stored value are not rejected. They are routed into the left subtree on
//! insert, so the tree behaves like a sorted multiset and every `insert` adds exactly one node.
//!
//! # Examples
//!
//! ```
//! use ordtree::bst::Tree;
//!
//! let mut tree: Tree<i32> = [5, 3, 8].into_iter().collect();
//!
//! assert!(tree.contains(&3));
//! assert_eq!(tree.remove(&3), Some(3));
//! assert!(!tree.contains(&3));
//!
//! // Removing something that isn't there changes nothing.
//! assert_eq!(tree.remove(&3), None);
//! assert_eq!(tree.len(), 2);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use log::debug;

use crate::display;
use crate::error::{Error, Result};

/// Height of an absent subtree. A lone node has a height of `0`.
pub(crate) const EMPTY_HEIGHT: isize = -1;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

mod private {
    pub trait Sealed {}

    impl Sealed for crate::bst::Unbalanced {}
    impl Sealed for crate::avl::Balanced {}
}

/// The hook every ancestor of an inserted or removed node is passed through, bottom up.
///
/// This trait is sealed. Its implementations are [`Unbalanced`](crate::bst::Unbalanced) and
/// [`Balanced`](crate::avl::Balanced).
pub trait Rebalance: private::Sealed {
    /// Restores this policy's shape invariant at `node` and returns the root of the resulting
    /// subtree. Both children of `node` already satisfy the invariant and the cached height of
    /// `node` is up to date.
    fn rebalance<T>(node: Box<Node<T>>) -> Box<Node<T>>;
}

/// A single element of an [`OrderedTree`] along with the two subtrees hanging off of it.
#[derive(Clone)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// Number of edges on the longest path from this node down to a leaf.
    pub(crate) height: isize,
}

/// Height of the subtree behind `link`.
pub(crate) fn height<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(EMPTY_HEIGHT, |n| n.height)
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
            height: 0,
        })
    }

    /// Adjusts the height of `self` to be one more than the taller of its children.
    pub(crate) fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// The height of the left subtree minus the height of the right subtree. Positive values mean
    /// the node leans left.
    pub(crate) fn balance_factor(&self) -> isize {
        height(&self.left) - height(&self.right)
    }

    fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }

    fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("height", &self.height)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

/// A binary search tree whose shape is maintained by the [`Rebalance`] policy `R`.
///
/// Use it through [`bst::Tree`](crate::bst::Tree) or [`avl::Tree`](crate::avl::Tree).
pub struct OrderedTree<T, R> {
    root: Link<T>,
    len: usize,
    _policy: PhantomData<R>,
}

impl<T, R> Default for OrderedTree<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> Drop for OrderedTree<T, R> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone, R> Clone for OrderedTree<T, R> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
            _policy: PhantomData,
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for OrderedTree<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the tree level by level, writing `_` for a missing child.
///
/// ```
/// use ordtree::avl::Tree;
///
/// let tree: Tree<i32> = (1..=5).collect();
/// assert_eq!(tree.to_string(), "2\n1 4\n_ _ 3 5\n");
/// ```
impl<T: fmt::Display, R> fmt::Display for OrderedTree<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.as_deref() {
            None => writeln!(f, "Tree empty"),
            Some(root) => display::level_order(
                f,
                root,
                |n| (n.left.as_deref(), n.right.as_deref()),
                |f, n| write!(f, "{}", n.value),
            ),
        }
    }
}

impl<T, R> OrderedTree<T, R> {
    /// Generates a new, empty tree.
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            _policy: PhantomData,
        }
    }

    /// The number of values stored in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of edges on the longest path from the root down to a leaf. An empty tree has a
    /// height of `-1` and a tree with a single value has a height of `0`.
    pub fn height(&self) -> isize {
        height(&self.root)
    }

    /// The value stored at the root of the tree, if any.
    pub fn root(&self) -> Option<&T> {
        self.root.as_deref().map(|n| &n.value)
    }

    /// Returns the smallest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the tree has no values.
    pub fn min(&self) -> Result<&T> {
        self.root
            .as_deref()
            .map(|n| &n.leftmost().value)
            .ok_or(Error::Empty)
    }

    /// Returns the largest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the tree has no values.
    pub fn max(&self) -> Result<&T> {
        self.root
            .as_deref()
            .map(|n| &n.rightmost().value)
            .ok_or(Error::Empty)
    }

    /// Iterates over the values in sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Removes every value from the tree. Nodes are released one at a time from an explicit stack
    /// so even a list-shaped tree can be cleared without recursing.
    pub fn clear(&mut self) {
        if self.root.is_none() {
            return;
        }
        debug!("clearing tree of {} nodes", self.len);

        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    #[cfg(test)]
    pub(crate) fn root_node(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T: Ord, R: Rebalance> OrderedTree<T, R> {
    /// Inserts `value` into the tree. A value equal to one already stored is kept alongside it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &1]);
    /// ```
    pub fn insert(&mut self, value: T) {
        self.root = Some(insert::<T, R>(self.root.take(), value));
        self.len += 1;
    }

    /// Removes one occurrence of `value` from the tree and returns it. If the tree does not
    /// contain `value`, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::avl::Tree;
    ///
    /// let mut tree: Tree<i32> = [10, 5, 15].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&10), Some(10));
    /// assert_eq!(tree.remove(&10), None);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&5, &15]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let (root, removed) = remove::<T, R>(self.root.take(), value);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Whether the tree holds a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// The value that follows the node holding `value` in sorted order, or `None` if `value` is
    /// absent or that node is the last one. When `value` is stored more than once the neighbor can
    /// be another copy of `value`.
    ///
    /// When the located node has no right subtree the successor is its nearest ancestor that it
    /// hangs to the left of, which is found on the way down from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::avl::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&4), Some(&5));
    /// assert_eq!(tree.successor(&5), Some(&7));
    /// assert_eq!(tree.successor(&9), None);
    /// assert_eq!(tree.successor(&6), None);
    /// ```
    pub fn successor(&self, value: &T) -> Option<&T> {
        let mut ancestor: Option<&Node<T>> = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match value.cmp(&node.value) {
                Ordering::Less => {
                    ancestor = Some(node);
                    current = node.left.as_deref();
                }
                Ordering::Equal => {
                    return match node.right.as_deref() {
                        Some(right) => Some(&right.leftmost().value),
                        None => ancestor.map(|n| &n.value),
                    };
                }
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        None
    }

    /// The value that precedes the node holding `value` in sorted order, or `None` if `value` is
    /// absent or that node is the first one. When `value` is stored more than once the neighbor
    /// can be another copy of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::avl::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.predecessor(&7), Some(&5));
    /// assert_eq!(tree.predecessor(&5), Some(&4));
    /// assert_eq!(tree.predecessor(&1), None);
    /// ```
    pub fn predecessor(&self, value: &T) -> Option<&T> {
        let mut ancestor: Option<&Node<T>> = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match value.cmp(&node.value) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Equal => {
                    return match node.left.as_deref() {
                        Some(left) => Some(&left.rightmost().value),
                        None => ancestor.map(|n| &n.value),
                    };
                }
                Ordering::Greater => {
                    ancestor = Some(node);
                    current = node.right.as_deref();
                }
            }
        }
        None
    }

    fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }
}

impl<T: Ord, R: Rebalance> FromIterator<T> for OrderedTree<T, R> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord, R: Rebalance> Extend<T> for OrderedTree<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, R> IntoIterator for &'a OrderedTree<T, R> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Inserts `value` below `link` and returns the new root of that subtree.
fn insert<T: Ord, R: Rebalance>(link: Link<T>, value: T) -> Box<Node<T>> {
    let mut node = match link {
        Some(node) => node,
        None => return Node::new_boxed(value),
    };

    if value > node.value {
        node.right = Some(insert::<T, R>(node.right.take(), value));
    } else {
        node.left = Some(insert::<T, R>(node.left.take(), value));
    }

    node.fix_height();
    R::rebalance(node)
}

/// Removes one occurrence of `value` below `link`. Returns the new root of that subtree along
/// with the removed value, if there was one.
fn remove<T: Ord, R: Rebalance>(link: Link<T>, value: &T) -> (Link<T>, Option<T>) {
    let mut node = match link {
        Some(node) => node,
        None => return (None, None),
    };

    let removed = match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, removed) = remove::<T, R>(node.left.take(), value);
            node.left = left;
            removed
        }
        Ordering::Greater => {
            let (right, removed) = remove::<T, R>(node.right.take(), value);
            node.right = right;
            removed
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => return (None, Some(node.value)),
            (Some(child), None) | (None, Some(child)) => {
                let Node { value, .. } = *node;
                return (Some(R::rebalance(child)), Some(value));
            }
            // With two children the in-order successor is unlinked from the right subtree and
            // its value takes the place of ours. This node stays where it is.
            (Some(left), Some(right)) => {
                let (right, successor) = take_min::<T, R>(right);
                node.left = Some(left);
                node.right = right;
                Some(std::mem::replace(&mut node.value, successor))
            }
        },
    };

    node.fix_height();
    (Some(R::rebalance(node)), removed)
}

/// Unlinks the leftmost node below `node`. Returns what remains of the subtree and the unlinked
/// value.
fn take_min<T, R: Rebalance>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (right, value)
        }
        Some(left) => {
            let (left, min) = take_min::<T, R>(left);
            node.left = left;
            node.fix_height();
            (Some(R::rebalance(node)), min)
        }
    }
}

/// In-order iterator over the values of an [`OrderedTree`], created by [`OrderedTree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose left subtree has been visited but whose own value hasn't been yielded yet.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
