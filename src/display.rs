//! Level-order rendering shared by every container's `Display` impl.

use std::fmt;

/// Printed in place of a missing child of a node on the previous level.
pub(crate) const PLACEHOLDER: &str = "_";

/// Writes a breadth-first rendering of a binary structure, one line per level.
///
/// `children` yields the left and right child of a node and `label` writes a single node. Absent
/// children of present nodes are written as [`PLACEHOLDER`]. Rendering stops at the first level
/// holding no present node, so the output is bounded by the number of nodes rather than by the
/// height of the structure.
pub(crate) fn level_order<N, C, L>(
    f: &mut fmt::Formatter<'_>,
    root: N,
    mut children: C,
    mut label: L,
) -> fmt::Result
where
    N: Copy,
    C: FnMut(N) -> (Option<N>, Option<N>),
    L: FnMut(&mut fmt::Formatter<'_>, N) -> fmt::Result,
{
    let mut level = vec![Some(root)];
    while level.iter().any(Option::is_some) {
        let mut next = Vec::with_capacity(level.len() * 2);
        for (i, slot) in level.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match slot {
                Some(node) => {
                    label(f, *node)?;
                    let (left, right) = children(*node);
                    next.push(left);
                    next.push(right);
                }
                None => f.write_str(PLACEHOLDER)?,
            }
        }
        f.write_str("\n")?;
        level = next;
    }

    Ok(())
}
