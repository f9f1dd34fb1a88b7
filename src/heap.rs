//! A binary max-heap stored in a `Vec`. The children of the element at index `i` live at
//! `2i + 1` and `2i + 2` and no child is greater than its parent.
//!
//! # Examples
//!
//! ```
//! use ordtree::heap::MaxHeap;
//! use ordtree::Error;
//!
//! let mut heap: MaxHeap<i32> = [3, 1, 4, 1, 5].into_iter().collect();
//!
//! assert_eq!(heap.peek(), Ok(&5));
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.pop(), Ok(4));
//!
//! heap.clear();
//! assert_eq!(heap.pop(), Err(Error::Empty));
//! ```

use std::fmt;

use log::trace;

use crate::display;
use crate::error::{Error, Result};

/// A priority queue that always hands out its largest element first.
#[derive(Clone, Debug)]
pub struct MaxHeap<T> {
    data: Vec<T>,
}

impl<T> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MaxHeap<T> {
    /// Creates a new, empty heap.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// The number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the heap has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes every element from the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the largest element without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the heap has no elements.
    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or(Error::Empty)
    }
}

impl<T: Ord> MaxHeap<T> {
    /// Adds `value` to the heap, sifting it up past every smaller ancestor.
    pub fn push(&mut self, value: T) {
        self.data.push(value);

        let mut i = self.data.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.data[parent] >= self.data[i] {
                break;
            }
            self.data.swap(parent, i);
            i = parent;
        }
    }

    /// Removes and returns the largest element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the heap has no elements.
    pub fn pop(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(Error::Empty);
        }
        let top = self.data.swap_remove(0);
        self.sift_down(0);
        Ok(top)
    }

    /// Moves the element at `i` down until neither of its children is greater than it.
    fn sift_down(&mut self, mut i: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            if left >= len {
                return;
            }

            let larger = if right < len && self.data[right] > self.data[left] {
                right
            } else {
                left
            };
            if self.data[i] >= self.data[larger] {
                return;
            }
            self.data.swap(i, larger);
            i = larger;
        }
    }
}

/// Heapifies the vector in place, sifting down every element that has children starting from
/// the last one.
impl<T: Ord> From<Vec<T>> for MaxHeap<T> {
    fn from(data: Vec<T>) -> Self {
        let mut heap = Self { data };
        trace!("building heap of {} elements", heap.len());
        for i in (0..heap.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }
}

impl<T: Ord> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Ord> Extend<T> for MaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Renders the heap level by level, the same way the trees are rendered.
impl<T: fmt::Display> fmt::Display for MaxHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.is_empty() {
            return writeln!(f, "Heap empty");
        }
        let len = self.data.len();
        let index = |i: usize| (i < len).then_some(i);
        display::level_order(
            f,
            0,
            |i| (index(2 * i + 1), index(2 * i + 2)),
            |f, i| write!(f, "{}", self.data[i]),
        )
    }
}
