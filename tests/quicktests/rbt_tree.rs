use ordtree::rbt::Tree;
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
fn height_stays_logarithmic_after_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    for x in &removes {
        tree.remove(x);
    }

    tree.height() as f64 <= 2.0 * ((tree.len() + 1) as f64).log2()
}

#[quickcheck]
fn neighbors_match_sorted_order(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort_unstable();
    sorted.dedup();

    sorted.windows(2).all(|pair| {
        // With duplicates stored the neighbor of a located node may be an equal value.
        let next = tree.successor(&pair[0]).copied();
        let prev = tree.predecessor(&pair[1]).copied();
        (next == Some(pair[1]) || next == Some(pair[0]))
            && (prev == Some(pair[0]) || prev == Some(pair[1]))
    })
}
