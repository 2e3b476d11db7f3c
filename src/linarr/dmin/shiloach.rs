//! Shiloach's minimum linear arrangement algorithm
//!
//! Divide and conquer at a centroidal vertex. Two candidate layouts are
//! compared at every level: recursing with the largest subtree split off
//! to one side, and the alternating placement of the 2p largest
//! subtrees around a central core, with p chosen by the threshold
//! formula on the subtree sizes. Anchors (`Left`/`Right`) record on
//! which side the parent of a split-off component lies.

use crate::basic_types::{Node, Position};
use crate::graphs::{FreeTree, Graph};
use crate::linarr::LinearArrangement;
use crate::properties::{centroid, subtree_sizes_from};
use crate::sorting::{counting_sort, SortOrder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    None,
    Left,
    Right,
}

type Ordering = Vec<(Node, u64)>;

/// Minimum arrangement of `t` and its cost
pub fn minimize(t: &FreeTree) -> (u64, LinearArrangement) {
    let n = t.num_nodes();
    if n <= 1 {
        return (0, LinearArrangement::identity(n));
    }
    let mut work = t.clone();
    let mut arr = LinearArrangement::zeroed(n);
    let cost = calculate_mla(&mut work, Anchor::None, 0, 0, n - 1, &mut arr);
    (cost, arr)
}

// p_alpha and the anchor sums s_0 (free) / s_1 (anchored) of the
// alternating layout
fn calculate_p_alpha(
    n: u64,
    anchored: bool,
    ord: &Ordering,
    s_0: &mut u64,
    s_1: &mut u64,
) -> u64 {
    let k = (ord.len() - 1) as u64;
    let n_0 = ord[0].1;

    if !anchored {
        let mut max_p = k / 2;
        if max_p == 0 {
            return 0;
        }

        let mut sum: u64 = (0..=2 * max_p as usize).map(|i| ord[i].1).sum();
        let mut n_star = n - sum;
        let mut tricky_formula = (n_0 + 2) / 2 + (n_star + 2) / 2;

        let mut n_p = ord[2 * max_p as usize].1;
        while max_p > 0 && n_p <= tricky_formula {
            sum -= ord[2 * max_p as usize].1 + ord[2 * max_p as usize - 1].1;
            max_p -= 1;
            n_star = n - sum;
            tricky_formula = (n_0 + 2) / 2 + (n_star + 2) / 2;
            if max_p > 0 {
                n_p = ord[2 * max_p as usize].1;
            }
        }
        if max_p == 0 {
            return 0;
        }
        *s_0 = max_p * (n_star + 1 + n_0);
        *s_1 = 0;
        for i in 1..max_p as usize {
            *s_0 += i as u64 * (ord[2 * i + 1].1 + ord[2 * i + 2].1);
        }
        max_p
    } else {
        let mut max_p = (k + 1) / 2;
        if max_p == 0 {
            return 0;
        }

        let mut sum: u64 = (0..=2 * max_p as usize - 1).map(|i| ord[i].1).sum();
        let mut n_star = n - sum;
        let mut tricky_formula = (n_0 + 2) / 2 + (n_star + 2) / 2;

        let mut n_p = ord[2 * max_p as usize - 1].1;
        while max_p > 0 && n_p <= tricky_formula {
            sum -= ord[2 * max_p as usize - 1].1;
            sum -= ord[2 * max_p as usize - 2].1;
            max_p -= 1;
            n_star = n - sum;
            tricky_formula = (n_0 + 2) / 2 + (n_star + 2) / 2;
            if max_p > 0 {
                n_p = ord[2 * max_p as usize - 1].1;
            }
        }
        if max_p == 0 {
            return 0;
        }
        *s_0 = 0;
        *s_1 = max_p * (n_star + 1 + n_0) - 1;
        for i in 1..max_p as usize {
            *s_1 += i as u64 * (ord[2 * i].1 + ord[2 * i + 1].1);
        }
        max_p
    }
}

// subtrees of the component of `v_star`, largest first
fn ordering_at(t: &FreeTree, v_star: Node) -> Ordering {
    let sizes = subtree_sizes_from(t, v_star);
    let mut ord: Ordering = t
        .neighbors(v_star)
        .iter()
        .map(|&u| (u, sizes[u]))
        .collect();
    counting_sort(&mut ord, t.num_nodes(), SortOrder::NonIncreasing, |p| {
        p.1 as usize
    });
    ord
}

fn calculate_mla(
    t: &mut FreeTree,
    alpha: Anchor,
    root_or_anchor: Node,
    mut start: Position,
    mut end: Position,
    mla: &mut LinearArrangement,
) -> u64 {
    let size_tree = t.num_nodes_component(root_or_anchor);
    debug_assert!(size_tree > 0);

    if size_tree == 1 {
        mla.assign(root_or_anchor, start);
        return 0;
    }

    let v_star = if alpha == Anchor::None {
        centroid(t, root_or_anchor).0
    } else {
        root_or_anchor
    };

    let ord = ordering_at(t, v_star);
    let (v_0, n_0) = ord[0];

    // recursion A: split off the largest subtree
    t.remove_edge(v_star, v_0).expect("edge exists");

    let (c_1, c_2);
    if alpha == Anchor::Left {
        c_2 = calculate_mla(t, Anchor::None, v_star, start, end - n_0 as usize, mla);
        c_1 = calculate_mla(
            t,
            Anchor::Left,
            v_0,
            end - n_0 as usize + 1,
            end,
            mla,
        );
    } else {
        c_1 = calculate_mla(
            t,
            Anchor::Right,
            v_0,
            start,
            start + n_0 as usize - 1,
            mla,
        );
        let new_alpha = if alpha == Anchor::None {
            Anchor::Left
        } else {
            Anchor::None
        };
        c_2 = calculate_mla(t, new_alpha, v_star, start + n_0 as usize, end, mla);
    }

    let mut cost = if alpha == Anchor::None {
        c_1 + c_2 + 1
    } else {
        c_1 + c_2 + size_tree - n_0
    };

    t.add_edge(v_star, v_0).expect("edge can be restored");

    // recursion B: alternate the 2p largest subtrees around the core
    let anchored = alpha != Anchor::None;
    let mut s_0 = 0u64;
    let mut s_1 = 0u64;
    let p_alpha = calculate_p_alpha(size_tree, anchored, &ord, &mut s_0, &mut s_1);

    if p_alpha > 0 {
        let num_separate = (2 * p_alpha - anchored as u64) as usize;
        let edges: Vec<(Node, Node)> =
            (1..=num_separate).map(|i| (v_star, ord[i].0)).collect();
        t.remove_edges(&edges).expect("edges exist");

        let mut cost_b = 0u64;
        let mut mla_b = mla.clone();

        // t1 : t3 : ... : core : ... : t4 : t2, mirrored for a left
        // anchor
        for i in 1..=num_separate {
            let (r, n_i) = ord[i];
            let at_start = (alpha == Anchor::Left && i % 2 == 0)
                || (alpha != Anchor::Left && i % 2 == 1);
            if at_start {
                cost_b += calculate_mla(
                    t,
                    Anchor::Right,
                    r,
                    start,
                    start + n_i as usize - 1,
                    &mut mla_b,
                );
                start += n_i as usize;
            } else {
                cost_b += calculate_mla(
                    t,
                    Anchor::Left,
                    r,
                    end - n_i as usize + 1,
                    end,
                    &mut mla_b,
                );
                end -= n_i as usize;
            }
        }

        cost_b += calculate_mla(t, Anchor::None, v_star, start, end, &mut mla_b);

        t.restore_edges(&edges);

        cost_b += if alpha == Anchor::None { s_0 } else { s_1 };

        if cost_b < cost {
            *mla = mla_b;
            cost = cost_b;
        }
    }

    cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linarr::sum_edge_lengths;

    #[test]
    fn known_minima() {
        let path = FreeTree::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let (cost, arr) = minimize(&path);
        assert_eq!(cost, 3);
        assert_eq!(sum_edge_lengths(&path, Some(&arr)), 3);

        let star =
            FreeTree::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
        let (cost, arr) = minimize(&star);
        assert_eq!(cost, 6);
        assert_eq!(sum_edge_lengths(&star, Some(&arr)), 6);

        // the caterpillar with hubs 1 and 2: the degree bound forces 7
        let cat =
            FreeTree::from_edges(6, &[(0, 1), (1, 2), (2, 3), (1, 4), (2, 5)]).unwrap();
        let (cost, arr) = minimize(&cat);
        assert_eq!(cost, 7);
        assert_eq!(sum_edge_lengths(&cat, Some(&arr)), 7);
        assert!(arr.is_arrangement());
    }
}
