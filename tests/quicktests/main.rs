//! Property tests over the public API of every tree. Each tree is driven with the same random
//! operations as a `BTreeMap` multiset model and must agree with it at every step.

use std::collections::BTreeMap;

use ordtree::{avl, bst, rbt};
use quickcheck::{Arbitrary, Gen};

mod avl_tree;
mod bst_tree;
mod rbt_tree;
mod scenarios;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the T into the data structure
    Insert(T),
    /// Remove one occurrence of the T from the data structure
    Remove(T),
    /// Compare iterators
    Iter,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::Iter,
            _ => unreachable!(),
        }
    }
}

/// The operations every tree in the crate shares, so one set of properties covers all of them.
pub trait SortedMultiset<T: Ord>: Default {
    fn insert(&mut self, value: T);
    fn remove(&mut self, value: &T) -> Option<T>;
    fn contains(&self, value: &T) -> bool;
    fn len(&self) -> usize;
    fn height(&self) -> isize;
    fn to_vec(&self) -> Vec<T>;
    fn clear(&mut self);
}

macro_rules! impl_sorted_multiset {
    ($($tree:ty),*) => {$(
        impl<T: Ord + Clone> SortedMultiset<T> for $tree {
            fn insert(&mut self, value: T) {
                <$tree>::insert(self, value)
            }
            fn remove(&mut self, value: &T) -> Option<T> {
                <$tree>::remove(self, value)
            }
            fn contains(&self, value: &T) -> bool {
                <$tree>::contains(self, value)
            }
            fn len(&self) -> usize {
                <$tree>::len(self)
            }
            fn height(&self) -> isize {
                <$tree>::height(self)
            }
            fn to_vec(&self) -> Vec<T> {
                self.iter().cloned().collect()
            }
            fn clear(&mut self) {
                <$tree>::clear(self)
            }
        }
    )*};
}

impl_sorted_multiset!(bst::Tree<T>, avl::Tree<T>, rbt::Tree<T>);

/// A sorted multiset that is trivially correct: each value mapped to how many times it's stored.
#[derive(Default)]
pub struct Model(BTreeMap<i8, usize>);

impl Model {
    pub fn insert(&mut self, x: i8) {
        *self.0.entry(x).or_default() += 1;
    }

    pub fn remove(&mut self, x: &i8) -> Option<i8> {
        let count = self.0.get_mut(x)?;
        *count -= 1;
        if *count == 0 {
            self.0.remove(x);
        }
        Some(*x)
    }

    pub fn contains(&self, x: &i8) -> bool {
        self.0.contains_key(x)
    }

    pub fn len(&self) -> usize {
        self.0.values().sum()
    }

    pub fn to_vec(&self) -> Vec<i8> {
        self.0
            .iter()
            .flat_map(|(x, count)| std::iter::repeat(*x).take(*count))
            .collect()
    }
}

/// Applies a set of operations to a tree and the model.
/// This way we can ensure that after a random smattering of inserts
/// and removes both hold the same values.
pub fn do_ops<S: SortedMultiset<i8>>(ops: &[Op<i8>], tree: &mut S, model: &mut Model) -> bool {
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(*x);
                model.insert(*x);
            }
            Op::Remove(x) => {
                if tree.remove(x) != model.remove(x) {
                    return false;
                }
            }
            Op::Iter => {
                if tree.to_vec() != model.to_vec() {
                    return false;
                }
            }
        }
        if tree.len() != model.len() {
            return false;
        }
    }
    true
}

/// Every value the model holds is found, every other value isn't, and iteration is sorted.
pub fn agrees_with_model<S: SortedMultiset<i8>>(tree: &S, model: &Model) -> bool {
    (i8::MIN..=i8::MAX).all(|x| tree.contains(&x) == model.contains(&x))
        && tree.to_vec() == model.to_vec()
        && tree.len() == model.len()
}

/// Deleting every inserted value, however many times it was inserted, leaves nothing behind.
pub fn deletes_everything<S: SortedMultiset<i8>>(xs: &[i8], deletes: &[i8]) -> bool {
    let mut tree = S::default();
    for x in xs {
        tree.insert(*x);
    }
    for delete in deletes {
        while tree.remove(delete).is_some() {}
    }

    let mut still_present = xs.to_vec();
    still_present.retain(|x| !deletes.contains(x));
    still_present.sort_unstable();

    deletes.iter().all(|x| !tree.contains(x)) && tree.to_vec() == still_present
}

/// `clear` empties the tree and clearing again changes nothing.
pub fn clear_is_idempotent<S: SortedMultiset<i8>>(xs: &[i8]) -> bool {
    let mut tree = S::default();
    for x in xs {
        tree.insert(*x);
    }

    tree.clear();
    let once = tree.len() == 0 && tree.height() == -1;
    tree.clear();
    once && tree.len() == 0 && tree.to_vec().is_empty()
}
