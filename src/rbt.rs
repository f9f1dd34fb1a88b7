//! A Red-Black Tree. Every node is colored red or black and the tree maintains that:
//!
//! 1. The root and every leaf (the shared `nil` sentinel) are black.
//! 2. No red node has a red child.
//! 3. Every path from a node down to a leaf passes through the same number of black nodes.
//!
//! Together these keep the longest root-to-leaf path at most twice as long as the shortest, so the
//! height of a tree with `N` values is at most `2 * lg(N + 1)`.
//!
//! Nodes live in an arena owned by the tree and refer to each other, including their parent, by
//! index. Slot `0` is the sentinel: it stands in for every missing child and for the parent of the
//! root, which lets the fixup code below follow the textbook algorithms without special-casing
//! absent nodes. Removed nodes' slots are recycled by later inserts. No operation recurses except
//! [`Tree::height`].
//!
//! # Examples
//!
//! ```
//! use ordtree::rbt::Tree;
//!
//! let mut tree = Tree::new();
//! for x in 1..=5 {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.to_string(), "2(B)\n1(B) 4(B)\n_ _ 3(R) 5(R)\n");
//!
//! assert_eq!(tree.remove(&1), Some(1));
//! assert_eq!(tree.to_string(), "4(B)\n2(B) 5(B)\n_ 3(R) _ _\n");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use log::{debug, trace};

use crate::display;
use crate::error::{Error, Result};

/// Index of a node in its tree's arena.
type NodeId = usize;

/// Index of the shared sentinel. It is always black and never holds a value.
const NIL: NodeId = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Clone)]
struct Node<T> {
    /// `None` for the sentinel and for slots waiting on the free list.
    value: Option<T>,
    color: Color,
    /// Non-owning. `NIL` for the root.
    parent: NodeId,
    left: NodeId,
    right: NodeId,
}

impl<T> Node<T> {
    fn sentinel() -> Self {
        Self {
            value: None,
            color: Color::Black,
            parent: NIL,
            left: NIL,
            right: NIL,
        }
    }
}

/// A self-balancing Binary Search Tree that colors its nodes to bound its height.
///
/// Like the other trees in this crate, values equal to a stored value are kept alongside it.
#[derive(Clone)]
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
    /// Slots of removed nodes, reused before the arena grows.
    free: Vec<NodeId>,
    root: NodeId,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the tree level by level. Every value is followed by its color, `R` or `B`, and a
/// missing child is written as `_`.
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.root == NIL {
            return writeln!(f, "Tree empty");
        }
        display::level_order(
            f,
            self.root,
            |id| (self.link(self.nodes[id].left), self.link(self.nodes[id].right)),
            |f, id| {
                let color = match self.color(id) {
                    Color::Red => 'R',
                    Color::Black => 'B',
                };
                write!(f, "{}({})", self.value(id), color)
            },
        )
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::sentinel()],
            free: Vec::new(),
            root: NIL,
            len: 0,
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
        self.subtree_height(self.root)
    }

    /// The value stored at the root of the tree, if any.
    pub fn root(&self) -> Option<&T> {
        self.link(self.root).map(|id| self.value(id))
    }

    /// Returns the smallest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the tree has no values.
    pub fn min(&self) -> Result<&T> {
        self.link(self.root)
            .map(|id| self.value(self.minimum(id)))
            .ok_or(Error::Empty)
    }

    /// Returns the largest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the tree has no values.
    pub fn max(&self) -> Result<&T> {
        self.link(self.root)
            .map(|id| self.value(self.maximum(id)))
            .ok_or(Error::Empty)
    }

    /// Iterates over the values in sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            tree: self,
            next: self.link(self.root).map_or(NIL, |id| self.minimum(id)),
            remaining: self.len,
        }
    }

    /// Removes every value from the tree, keeping only the sentinel.
    pub fn clear(&mut self) {
        if self.len > 0 {
            debug!("clearing red-black tree of {} nodes", self.len);
        }
        self.nodes.truncate(1);
        self.nodes[NIL] = Node::sentinel();
        self.free.clear();
        self.root = NIL;
        self.len = 0;
    }

    fn link(&self, id: NodeId) -> Option<NodeId> {
        (id != NIL).then_some(id)
    }

    fn value(&self, id: NodeId) -> &T {
        self.nodes[id]
            .value
            .as_ref()
            .expect("Only the sentinel and free slots lack a value")
    }

    fn color(&self, id: NodeId) -> Color {
        self.nodes[id].color
    }

    fn set_color(&mut self, id: NodeId, color: Color) {
        self.nodes[id].color = color;
    }

    fn parent(&self, id: NodeId) -> NodeId {
        self.nodes[id].parent
    }

    fn child(&self, id: NodeId, side: Side) -> NodeId {
        match side {
            Side::Left => self.nodes[id].left,
            Side::Right => self.nodes[id].right,
        }
    }

    fn set_child(&mut self, id: NodeId, side: Side, child: NodeId) {
        match side {
            Side::Left => self.nodes[id].left = child,
            Side::Right => self.nodes[id].right = child,
        }
    }

    fn subtree_height(&self, id: NodeId) -> isize {
        if id == NIL {
            return -1;
        }
        let left = self.subtree_height(self.nodes[id].left);
        let right = self.subtree_height(self.nodes[id].right);
        left.max(right) + 1
    }

    fn minimum(&self, mut id: NodeId) -> NodeId {
        while self.nodes[id].left != NIL {
            id = self.nodes[id].left;
        }
        id
    }

    fn maximum(&self, mut id: NodeId) -> NodeId {
        while self.nodes[id].right != NIL {
            id = self.nodes[id].right;
        }
        id
    }

    /// The node following `id` in sorted order, or `NIL` if `id` holds the largest value.
    fn next_node(&self, mut id: NodeId) -> NodeId {
        if self.nodes[id].right != NIL {
            return self.minimum(self.nodes[id].right);
        }
        let mut parent = self.parent(id);
        while parent != NIL && id == self.nodes[parent].right {
            id = parent;
            parent = self.parent(parent);
        }
        parent
    }

    /// The node preceding `id` in sorted order, or `NIL` if `id` holds the smallest value.
    fn prev_node(&self, mut id: NodeId) -> NodeId {
        if self.nodes[id].left != NIL {
            return self.maximum(self.nodes[id].left);
        }
        let mut parent = self.parent(id);
        while parent != NIL && id == self.nodes[parent].left {
            id = parent;
            parent = self.parent(parent);
        }
        parent
    }

    fn alloc(&mut self, value: T, parent: NodeId) -> NodeId {
        let node = Node {
            value: Some(value),
            color: Color::Red,
            parent,
            left: NIL,
            right: NIL,
        };
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Hands the slot of an unlinked node back to the free list and returns its value.
    fn release(&mut self, id: NodeId) -> T {
        let node = std::mem::replace(&mut self.nodes[id], Node::sentinel());
        self.free.push(id);
        node.value.expect("Released node was live")
    }

    /// Points whichever link referred to `old` (the root, or a child link of `parent`) at `new`.
    fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if parent == NIL {
            self.root = new;
        } else if self.nodes[parent].left == old {
            self.nodes[parent].left = new;
        } else {
            self.nodes[parent].right = new;
        }
    }

    /// Puts the subtree rooted at `new` where the subtree rooted at `old` was. `new` may be the
    /// sentinel, whose parent is then set so the delete fixup can find its way back up.
    fn transplant(&mut self, old: NodeId, new: NodeId) {
        let parent = self.parent(old);
        self.replace_child(parent, old, new);
        self.nodes[new].parent = parent;
    }

    /// Rotates `x` down towards `side`, lifting its child on the other side into its place. A
    /// left rotation is `rotate(x, Side::Left)` and a right rotation `rotate(x, Side::Right)`.
    /// In-order sequence is preserved and the three affected parent links are repaired.
    ///
    /// ```text
    ///      x          left rotation          y
    ///     / \       ----------------->      / \
    ///    a   y                             x   c
    ///       / \     <-----------------    / \
    ///      b   c      right rotation     a   b
    /// ```
    fn rotate(&mut self, x: NodeId, side: Side) {
        trace!("rotating {side:?} at node {x}");
        let y = self.child(x, side.opposite());
        debug_assert_ne!(y, NIL, "Rotation needs a child to lift");

        let inner = self.child(y, side);
        self.set_child(x, side.opposite(), inner);
        if inner != NIL {
            self.nodes[inner].parent = x;
        }

        let parent = self.parent(x);
        self.nodes[y].parent = parent;
        self.replace_child(parent, x, y);

        self.set_child(y, side, x);
        self.nodes[x].parent = y;
    }
}

impl<T: Ord> Tree<T> {
    /// Inserts `value` into the tree. A value equal to one already stored is kept alongside it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::rbt::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &2, &2]);
    /// ```
    pub fn insert(&mut self, value: T) {
        let mut parent = NIL;
        let mut side = Side::Left;
        let mut current = self.root;
        while current != NIL {
            parent = current;
            side = if value > *self.value(current) {
                Side::Right
            } else {
                Side::Left
            };
            current = self.child(current, side);
        }

        let id = self.alloc(value, parent);
        if parent == NIL {
            self.root = id;
        } else {
            self.set_child(parent, side, id);
        }
        self.len += 1;

        self.insert_fixup(id);
        debug_assert_eq!(self.color(self.root), Color::Black);
        debug_assert_eq!(self.color(NIL), Color::Black);
    }

    /// Removes one occurrence of `value` from the tree and returns it. If the tree does not
    /// contain `value`, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::rbt::Tree;
    ///
    /// let mut tree: Tree<i32> = (1..=10).collect();
    ///
    /// assert_eq!(tree.remove(&4), Some(4));
    /// assert_eq!(tree.remove(&4), None);
    /// assert_eq!(tree.len(), 9);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let target = self.find(value);
        if target == NIL {
            return None;
        }

        let left = self.nodes[target].left;
        let right = self.nodes[target].right;
        let mut removed_color = self.color(target);
        // The node that moves into the position vacated by whichever node leaves the tree's
        // structure. Possibly the sentinel.
        let replacement;

        if left == NIL {
            replacement = right;
            self.transplant(target, right);
        } else if right == NIL {
            replacement = left;
            self.transplant(target, left);
        } else {
            // Two children: the successor is unlinked from its spot and takes `target`'s place,
            // color included.
            let successor = self.minimum(right);
            removed_color = self.color(successor);
            replacement = self.nodes[successor].right;

            if self.parent(successor) == target {
                self.nodes[replacement].parent = successor;
            } else {
                self.transplant(successor, replacement);
                self.nodes[successor].right = right;
                self.nodes[right].parent = successor;
            }

            self.transplant(target, successor);
            self.nodes[successor].left = left;
            self.nodes[left].parent = successor;
            let color = self.color(target);
            self.set_color(successor, color);
        }

        if removed_color == Color::Black {
            self.delete_fixup(replacement);
        }
        self.len -= 1;

        debug_assert_eq!(self.color(self.root), Color::Black);
        debug_assert_eq!(self.color(NIL), Color::Black);
        Some(self.release(target))
    }

    /// Whether the tree holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value) != NIL
    }

    /// The value that follows the node holding `value` in sorted order, or `None` if `value` is
    /// absent or that node is the last one. When `value` is stored more than once the neighbor can
    /// be another copy of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::rbt::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&3), Some(&5));
    /// assert_eq!(tree.successor(&8), None);
    /// assert_eq!(tree.predecessor(&3), Some(&1));
    /// assert_eq!(tree.predecessor(&1), None);
    /// ```
    pub fn successor(&self, value: &T) -> Option<&T> {
        let id = self.link(self.find(value))?;
        self.link(self.next_node(id)).map(|next| self.value(next))
    }

    /// The value that precedes the node holding `value` in sorted order, or `None` if `value` is
    /// absent or that node is the first one. When `value` is stored more than once the neighbor
    /// can be another copy of `value`.
    pub fn predecessor(&self, value: &T) -> Option<&T> {
        let id = self.link(self.find(value))?;
        self.link(self.prev_node(id)).map(|prev| self.value(prev))
    }

    fn find(&self, value: &T) -> NodeId {
        let mut current = self.root;
        while current != NIL {
            current = match value.cmp(self.value(current)) {
                Ordering::Less => self.nodes[current].left,
                Ordering::Equal => return current,
                Ordering::Greater => self.nodes[current].right,
            };
        }
        NIL
    }

    /// Restores the coloring after `node` was linked in as a red leaf. The only possible violation
    /// is a red `node` with a red parent, which is either pushed two levels up by recoloring or
    /// resolved with at most two rotations.
    fn insert_fixup(&mut self, mut node: NodeId) {
        while self.color(self.parent(node)) == Color::Red {
            let parent = self.parent(node);
            // A red parent is never the root so the grandparent is a real node.
            let grandparent = self.parent(parent);
            let side = if parent == self.nodes[grandparent].left {
                Side::Left
            } else {
                Side::Right
            };
            let uncle = self.child(grandparent, side.opposite());

            if self.color(uncle) == Color::Red {
                trace!("red uncle, recoloring grandparent {grandparent}");
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
            } else {
                if node == self.child(parent, side.opposite()) {
                    // Bent path: straighten it so `node` and its parent hang off the same side.
                    node = parent;
                    self.rotate(node, side);
                }
                let parent = self.parent(node);
                let grandparent = self.parent(parent);
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                self.rotate(grandparent, side.opposite());
            }
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }

    /// Restores the black-height after a black node was unlinked. `node` took the removed node's
    /// place and carries an extra black; the loop moves that extra black up the tree until it can
    /// be absorbed by a red node or discarded at the root.
    fn delete_fixup(&mut self, mut node: NodeId) {
        while node != self.root && self.color(node) == Color::Black {
            let parent = self.parent(node);
            let side = if node == self.nodes[parent].left {
                Side::Left
            } else {
                Side::Right
            };
            let mut sibling = self.child(parent, side.opposite());

            if self.color(sibling) == Color::Red {
                trace!("red sibling {sibling}, rotating it above parent {parent}");
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self.child(parent, side.opposite());
            }

            let near = self.child(sibling, side);
            let far = self.child(sibling, side.opposite());
            if self.color(near) == Color::Black && self.color(far) == Color::Black {
                trace!("black sibling {sibling} with black children, moving up");
                self.set_color(sibling, Color::Red);
                node = parent;
            } else {
                if self.color(far) == Color::Black {
                    trace!("red near nephew {near}, rotating it into the sibling's place");
                    self.set_color(near, Color::Black);
                    self.set_color(sibling, Color::Red);
                    self.rotate(sibling, side.opposite());
                    sibling = self.child(parent, side.opposite());
                }
                trace!("red far nephew of {sibling}, rotating at parent {parent}");
                let parent_color = self.color(parent);
                self.set_color(sibling, parent_color);
                self.set_color(parent, Color::Black);
                let far = self.child(sibling, side.opposite());
                self.set_color(far, Color::Black);
                self.rotate(parent, side);
                node = self.root;
            }
        }

        self.set_color(node, Color::Black);
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over the values of a [`Tree`], created by [`Tree::iter`]. It follows parent
/// links instead of keeping a stack.
pub struct Iter<'a, T> {
    tree: &'a Tree<T>,
    next: NodeId,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.tree.link(self.next)?;
        self.next = self.tree.next_node(id);
        self.remaining -= 1;
        Some(self.tree.value(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
impl<T: Ord> Tree<T> {
    /// Walks the whole tree asserting order, coloring, parent links and bookkeeping. Returns the
    /// black-height of the root.
    fn assert_red_black(&self) -> usize {
        assert_eq!(self.color(NIL), Color::Black);
        assert_eq!(self.color(self.root), Color::Black);
        if self.root != NIL {
            assert_eq!(self.parent(self.root), NIL);
        }

        let (count, black_height) = self.assert_subtree(self.root);
        assert_eq!(count, self.len);
        assert_eq!(self.nodes.len() - 1 - self.free.len(), self.len);
        black_height
    }

    /// Returns the number of nodes and the black-height of the subtree at `id`.
    fn assert_subtree(&self, id: NodeId) -> (usize, usize) {
        if id == NIL {
            return (0, 0);
        }
        let node = &self.nodes[id];
        for child in [node.left, node.right] {
            if child != NIL {
                assert_eq!(self.parent(child), id);
                if node.color == Color::Red {
                    assert_eq!(self.color(child), Color::Black, "red node with red child");
                }
            }
        }
        if node.left != NIL {
            assert!(self.value(node.left) <= self.value(id));
        }
        if node.right != NIL {
            assert!(self.value(node.right) >= self.value(id));
        }

        let (left_count, left_black) = self.assert_subtree(node.left);
        let (right_count, right_black) = self.assert_subtree(node.right);
        assert_eq!(left_black, right_black, "uneven black-height");
        (
            left_count + right_count + 1,
            left_black + usize::from(node.color == Color::Black),
        )
    }
}
