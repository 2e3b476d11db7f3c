//! Minimum projective arrangement of a rooted tree
//!
//! Two equivalent O(n) methods are provided. The interval method places
//! every vertex's children on alternating sides, largest subtree first,
//! keeping track of interval limits. The displacement method computes
//! positions relative to the root in two recursive passes and shifts
//! them to absolute positions at the end. They return the same cost on
//! every tree.

use super::{sorted_rooted_adjacency_list, NodeSize};
use crate::basic_types::{Node, Position};
use crate::graphs::{Graph, RootedTree};
use crate::linarr::LinearArrangement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Place {
    LeftOf,
    RightOf,
    Root,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Minimum projective arrangement through the interval method
pub fn intervals(t: &RootedTree) -> (u64, LinearArrangement) {
    let n = t.num_nodes();
    if n <= 1 {
        return (0, LinearArrangement::identity(n));
    }
    let list = sorted_rooted_adjacency_list(t);
    let mut arr = LinearArrangement::zeroed(n);
    let cost = arrange::<true>(&list, t.root(), Place::Root, 0, n - 1, &mut arr);
    (cost, arr)
}

/// Cost of a minimum projective arrangement, skipping its construction
pub fn intervals_cost(t: &RootedTree) -> u64 {
    if t.num_nodes() <= 1 {
        return 0;
    }
    let list = sorted_rooted_adjacency_list(t);
    let mut arr = LinearArrangement::zeroed(0);
    arrange::<false>(&list, t.root(), Place::Root, 0, 0, &mut arr)
}

/// Arrangement and cost rooted at `root` of a pre-built sorted rooted
/// adjacency list over `n` vertices
pub(crate) fn arrange_list(
    list: &[Vec<NodeSize>],
    root: Node,
    n: usize,
) -> (u64, LinearArrangement) {
    let mut arr = LinearArrangement::zeroed(n);
    let cost = arrange::<true>(list, root, Place::Root, 0, n - 1, &mut arr);
    (cost, arr)
}

// Returns the sum of the lengths of the edges of the subtree of `r`,
// plus the part of the edge towards r's parent that runs over r's own
// interval [ini, fin].
pub(crate) fn arrange<const MAKE: bool>(
    list: &[Vec<NodeSize>],
    r: Node,
    r_place: Place,
    mut ini: Position,
    mut fin: Position,
    arr: &mut LinearArrangement,
) -> u64 {
    debug_assert!(!MAKE || ini <= fin);

    // first-largest subtree starts on the side of the parent
    let mut side = if r_place == Place::RightOf {
        Side::Right
    } else {
        Side::Left
    };

    let mut acc_left = 0u64;
    let mut acc_right = 0u64;
    let mut intervals_left = 0u64;
    let mut intervals_right = 0u64;

    // cost of the subtrees and the anchors below them
    let mut cost = 0u64;
    // lengths of the edges from r to its children, anchors excluded
    let mut d = 0u64;

    for &(vi, ni) in &list[r] {
        let (child_place, child_ini, child_fin) = match side {
            Side::Left => (
                Place::LeftOf,
                if MAKE { ini } else { 0 },
                if MAKE { ini + ni as usize - 1 } else { 0 },
            ),
            Side::Right => (
                Place::RightOf,
                if MAKE { fin + 1 - ni as usize } else { 0 },
                if MAKE { fin } else { 0 },
            ),
        };
        cost += arrange::<MAKE>(list, vi, child_place, child_ini, child_fin, arr);

        match side {
            Side::Left => {
                d += ni * intervals_left + 1;
                intervals_left += 1;
                acc_left += ni;
                if MAKE {
                    ini += ni as usize;
                }
            }
            Side::Right => {
                d += ni * intervals_right + 1;
                intervals_right += 1;
                acc_right += ni;
                if MAKE {
                    fin -= ni as usize;
                }
            }
        }
        side = side.flip();
    }

    if MAKE {
        debug_assert_eq!(ini, fin);
        arr.assign(r, ini);
    }

    cost += match r_place {
        Place::Root => 0,
        Place::LeftOf => acc_right,
        Place::RightOf => acc_left,
    };
    cost + d
}

/// Minimum projective arrangement through the displacement method
pub fn displacement(t: &RootedTree) -> (u64, LinearArrangement) {
    let n = t.num_nodes();
    if n <= 1 {
        return (0, LinearArrangement::identity(n));
    }
    let list = sorted_rooted_adjacency_list(t);
    let root = t.root();

    let mut rel_pos = vec![0i64; n];
    let mut left_sum = 0u64;
    let mut right_sum = 0u64;
    let mut cost = 0u64;

    let mut i = list[root].len();
    // SMALLEST to LARGEST
    for &(vi, ni) in list[root].iter().rev() {
        if i % 2 == 0 {
            cost += embed_branch(&list, vi, right_sum as i64, 1, &mut rel_pos);
            cost += right_sum;
            right_sum += ni;
        } else {
            cost += embed_branch(&list, vi, -(left_sum as i64), -1, &mut rel_pos);
            cost += left_sum;
            left_sum += ni;
        }
        cost += 1;
        i -= 1;
    }

    let mut arr = LinearArrangement::zeroed(n);
    let root_pos = left_sum as i64;
    rel_pos[root] = 0;
    for v in 0..n {
        let pos = root_pos + rel_pos[v];
        debug_assert!(pos >= 0);
        arr.assign(v, pos as usize);
    }
    (cost, arr)
}

// 'embed' of Hochberg and Stallmann, with the sign correction
fn embed_branch(
    list: &[Vec<NodeSize>],
    v: Node,
    mut base: i64,
    dir: i64,
    rel_pos: &mut [i64],
) -> u64 {
    let children = &list[v];
    let mut cost = 0u64;

    let mut before = 0u64;
    let mut after = 0u64;
    let mut under_anchor = 0u64;

    // every even-indexed child (1-based) ends up under the anchor
    for i in (1..children.len()).step_by(2) {
        under_anchor += children[i].1;
    }

    base += dir * (under_anchor as i64 + 1);
    cost += under_anchor;

    let mut i = children.len();
    // SMALLEST to LARGEST
    for &(vi, ni) in children.iter().rev() {
        if i % 2 == 0 {
            cost += embed_branch(list, vi, base - dir * before as i64, -dir, rel_pos);
            cost += before;
            before += ni;
        } else {
            cost += embed_branch(list, vi, base + dir * after as i64, dir, rel_pos);
            cost += after;
            after += ni;
        }
        cost += 1;
        i -= 1;
    }

    rel_pos[v] = base;
    cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::FreeTree;
    use crate::linarr::sum_edge_lengths;

    fn rooted(n: usize, edges: &[(usize, usize)], root: usize) -> RootedTree {
        let t = FreeTree::from_edges(n, edges).unwrap();
        RootedTree::from_free_tree(&t, root).unwrap()
    }

    #[test]
    fn star_rooted_at_center() {
        let rt = rooted(5, &[(0, 1), (0, 2), (0, 3), (0, 4)], 0);
        let (cost, arr) = intervals(&rt);
        assert_eq!(cost, 6);
        assert!(arr.is_arrangement());
        assert_eq!(sum_edge_lengths(&rt, Some(&arr)), 6);
    }

    #[test]
    fn path_rooted_anywhere() {
        for root in 0..4 {
            let rt = rooted(4, &[(0, 1), (1, 2), (2, 3)], root);
            let (cost, arr) = intervals(&rt);
            assert_eq!(cost, 3, "root {}", root);
            assert_eq!(sum_edge_lengths(&rt, Some(&arr)), 3);
        }
    }

    #[test]
    fn both_methods_agree() {
        let trees: Vec<(usize, Vec<(usize, usize)>)> = vec![
            (6, vec![(0, 1), (1, 2), (2, 3), (1, 4), (2, 5)]),
            (7, vec![(0, 1), (1, 2), (0, 3), (3, 4), (0, 5), (5, 6)]),
            (6, vec![(0, 1), (1, 2), (0, 3), (3, 4), (0, 5)]),
            (2, vec![(0, 1)]),
        ];
        for (n, edges) in trees {
            for root in 0..n {
                let rt = rooted(n, &edges, root);
                let (ci, ai) = intervals(&rt);
                let (cd, ad) = displacement(&rt);
                assert_eq!(ci, cd, "n {} root {}", n, root);
                assert_eq!(sum_edge_lengths(&rt, Some(&ai)), ci);
                assert_eq!(sum_edge_lengths(&rt, Some(&ad)), cd);
                assert!(ad.is_arrangement());
            }
        }
    }

    #[test]
    fn leaf_rooting_can_cost_more() {
        let edges = [(0, 1), (1, 2), (0, 3), (3, 4), (0, 5)];
        let at_center = intervals(&rooted(6, &edges, 0)).0;
        let at_leaf = intervals(&rooted(6, &edges, 5)).0;
        assert_eq!(at_center, 6);
        assert_eq!(at_leaf, 7);
    }
}
