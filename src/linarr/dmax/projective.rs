//! Maximum projective arrangement of a rooted tree
//!
//! Dual of the minimum interval method. Every vertex sits at the end of
//! its interval farthest from its parent; its children's intervals pack
//! the rest, the largest subtree adjacent to the vertex itself. The
//! length of the edge to the i-th child is then the sum of the i
//! largest subtree sizes, which the rearrangement inequality shows to
//! be optimal.

use crate::basic_types::{Node, Position};
use crate::graphs::{Graph, RootedTree};
use crate::linarr::dmin::{sorted_rooted_adjacency_list, NodeSize};
use crate::linarr::LinearArrangement;

// which end of [ini, fin] the parent lies beyond; Root has no parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParentSide {
    Left,
    Right,
    Root,
}

/// Maximum projective arrangement and its cost
pub fn maximize(t: &RootedTree) -> (u64, LinearArrangement) {
    let n = t.num_nodes();
    if n <= 1 {
        return (0, LinearArrangement::identity(n));
    }
    let list = sorted_rooted_adjacency_list(t);
    let mut arr = LinearArrangement::zeroed(n);
    let cost = arrange::<true>(&list, t.root(), ParentSide::Root, 0, n - 1, &mut arr);
    (cost, arr)
}

/// Cost of a maximum projective arrangement, skipping its construction
pub fn maximize_cost(t: &RootedTree) -> u64 {
    if t.num_nodes() <= 1 {
        return 0;
    }
    let list = sorted_rooted_adjacency_list(t);
    cost_of_list(&list, t.root())
}

/// Cost rooted at `root` of a pre-built sorted rooted adjacency list
pub(crate) fn cost_of_list(list: &[Vec<NodeSize>], root: Node) -> u64 {
    let mut total = 0u64;
    let mut stack = vec![root];
    while let Some(u) = stack.pop() {
        let mut prefix = 0u64;
        for &(v, s) in &list[u] {
            prefix += s;
            total += prefix;
            stack.push(v);
        }
    }
    total
}

fn arrange<const MAKE: bool>(
    list: &[Vec<NodeSize>],
    r: Node,
    parent_side: ParentSide,
    ini: Position,
    fin: Position,
    arr: &mut LinearArrangement,
) -> u64 {
    debug_assert!(!MAKE || ini <= fin);

    let mut cost = 0u64;
    let mut prefix = 0u64;

    match parent_side {
        // the parent (if any) lies beyond `fin`; r goes to `ini` and
        // its children fill towards the parent, largest first
        ParentSide::Right | ParentSide::Root => {
            if MAKE {
                arr.assign(r, ini);
            }
            let mut lo = ini;
            for &(v, s) in &list[r] {
                prefix += s;
                cost += prefix;
                if MAKE {
                    cost += arrange::<MAKE>(
                        list,
                        v,
                        ParentSide::Left,
                        lo + 1,
                        lo + s as usize,
                        arr,
                    );
                    lo += s as usize;
                } else {
                    cost += arrange::<MAKE>(list, v, ParentSide::Left, 0, 0, arr);
                }
            }
        }
        // mirrored: r at `fin`, children to its left
        ParentSide::Left => {
            if MAKE {
                arr.assign(r, fin);
            }
            let mut hi = fin;
            for &(v, s) in &list[r] {
                prefix += s;
                cost += prefix;
                if MAKE {
                    cost += arrange::<MAKE>(
                        list,
                        v,
                        ParentSide::Right,
                        hi - s as usize,
                        hi - 1,
                        arr,
                    );
                    hi -= s as usize;
                } else {
                    cost += arrange::<MAKE>(list, v, ParentSide::Right, 0, 0, arr);
                }
            }
        }
    }
    cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::FreeTree;
    use crate::linarr::{num_crossings, sum_edge_lengths, AlgorithmC};

    fn rooted(n: usize, edges: &[(usize, usize)], root: usize) -> RootedTree {
        let t = FreeTree::from_edges(n, edges).unwrap();
        RootedTree::from_free_tree(&t, root).unwrap()
    }

    #[test]
    fn star_rooted_at_center() {
        let rt = rooted(5, &[(0, 1), (0, 2), (0, 3), (0, 4)], 0);
        let (cost, arr) = maximize(&rt);
        assert_eq!(cost, 10);
        assert_eq!(sum_edge_lengths(&rt, Some(&arr)), 10);
    }

    #[test]
    fn path_rooted_at_end() {
        let rt = rooted(4, &[(0, 1), (1, 2), (2, 3)], 0);
        let (cost, arr) = maximize(&rt);
        assert_eq!(cost, 6);
        assert_eq!(sum_edge_lengths(&rt, Some(&arr)), 6);
        // projective arrangements never cross
        assert_eq!(num_crossings(&rt, Some(&arr), AlgorithmC::BruteForce), 0);
    }

    #[test]
    fn spider_rooted_at_a_leg() {
        // rooting at a leg's midpoint beats the hub
        let edges = [(0, 1), (1, 2), (0, 3), (3, 4), (0, 5), (5, 6)];
        assert_eq!(maximize(&rooted(7, &edges, 0)).0, 15);
        let (cost, arr) = maximize(&rooted(7, &edges, 1));
        assert_eq!(cost, 19);
        let rt = rooted(7, &edges, 1);
        assert_eq!(sum_edge_lengths(&rt, Some(&arr)), 19);
        assert_eq!(num_crossings(&rt, Some(&arr), AlgorithmC::Ladder), 0);
    }
}
