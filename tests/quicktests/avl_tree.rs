use ordtree::avl::Tree;
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
fn height_is_logarithmic(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let bound = 1.44 * ((xs.len() + 2) as f64).log2() - 1.0;

    tree.height() as f64 <= bound
}

#[quickcheck]
fn height_stays_logarithmic_after_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    for x in &removes {
        tree.remove(x);
    }
    let bound = 1.44 * ((tree.len() + 2) as f64).log2() - 1.0;

    tree.height() as f64 <= bound
}
