//! Fixed inputs whose outcome is known up front, run against every tree.

use ordtree::{avl, bst, rbt, Error};

/// Runs the body once per tree type, with `$tree` naming that type.
macro_rules! for_each_tree {
    ($tree:ident => $body:block) => {{
        {
            type $tree = bst::Tree<i32>;
            $body
        }
        {
            type $tree = avl::Tree<i32>;
            $body
        }
        {
            type $tree = rbt::Tree<i32>;
            $body
        }
    }};
}

#[test]
fn balanced_insertion_order_keeps_its_root() {
    for_each_tree!(T => {
        let tree: T = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

        assert_eq!(tree.root(), Some(&5));
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
        assert_eq!(tree.height(), 2);
    });
}

#[test]
fn ascending_insertion_heights() {
    let bst: bst::Tree<i32> = (1..=5).collect();
    let avl: avl::Tree<i32> = (1..=5).collect();
    let rbt: rbt::Tree<i32> = (1..=5).collect();

    assert_eq!(bst.height(), 4);
    assert_eq!(avl.height(), 2);
    assert_eq!(rbt.height(), 2);
}

#[test]
fn removing_root_with_two_children_promotes_successor() {
    for_each_tree!(T => {
        let mut tree: T = [10, 5, 15].into_iter().collect();

        assert_eq!(tree.remove(&10), Some(10));
        assert_eq!(tree.root(), Some(&15));
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [5, 15]);
        assert_eq!(tree.len(), 2);
    });
}

#[test]
fn removing_a_missing_value_changes_nothing() {
    for_each_tree!(T => {
        let mut tree: T = [10, 5, 15].into_iter().collect();

        assert_eq!(tree.remove(&7), None);
        assert_eq!(tree.len(), 3);
        assert!(!tree.contains(&7));
    });
}

#[test]
fn empty_tree_underflows() {
    for_each_tree!(T => {
        let mut tree = T::new();
        tree.insert(1);
        tree.remove(&1);

        assert_eq!(tree.min(), Err(Error::Empty));
        assert_eq!(tree.max(), Err(Error::Empty));
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.to_string(), "Tree empty\n");
    });
}
