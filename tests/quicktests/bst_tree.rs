use ordtree::bst::Tree;
use quickcheck_macros::quickcheck;

use crate::{agrees_with_model, clear_is_idempotent, deletes_everything, do_ops, Model, Op};

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Model::default();

    do_ops(&ops, &mut tree, &mut model) && agrees_with_model(&tree, &model)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    deletes_everything::<Tree<i8>>(&xs, &deletes)
}

#[quickcheck]
fn clear_twice(xs: Vec<i8>) -> bool {
    clear_is_idempotent::<Tree<i8>>(&xs)
}

#[quickcheck]
fn height_never_exceeds_len(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    tree.height() < xs.len() as isize
}
