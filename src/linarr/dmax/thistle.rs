//! Maximum D over arrangements with exactly one thistle vertex
//!
//! Candidate thistles are enumerated. Removing the thistle `c` splits
//! the tree into components, each of which is 2-colorable in exactly
//! two ways; a binary choice per component fixes every level value to
//! ± the degree, and the thistle's own level follows from the signs of
//! its neighbors. Given the levels, an arrangement is a split of the
//! other vertices around `c`: positive neighbors of `c` must precede
//! it, negative neighbors must follow it, and everything else is free.
//! D is the sum of the prefix sums of the level sequence, so each side
//! is best sorted by level non-increasingly and an exchange argument
//! confines the free vertices to a level threshold — only the
//! |free|+1 splits need evaluating. Runtime is exponential in the
//! maximum degree (one bit per component), near-linear in everything
//! else.

use crate::basic_types::Node;
use crate::graphs::{FreeTree, Graph};
use crate::linarr::LinearArrangement;

/// Maximum arrangement with exactly one thistle, and its cost
///
/// For `n ≤ 2` no arrangement has a thistle; the unconstrained optimum
/// is returned instead.
///
/// # Panics
/// If some vertex has degree 64 or larger.
pub fn maximize(t: &FreeTree) -> (u64, LinearArrangement) {
    let n = t.num_nodes();
    if n <= 2 {
        return ((n as u64).saturating_sub(1), LinearArrangement::identity(n));
    }

    let mut best: Option<(u64, LinearArrangement)> = None;

    for c in 0..n {
        let deg_c = t.degree(c);
        if deg_c < 2 {
            continue;
        }
        assert!(
            deg_c < 64,
            "max_sum_edge_lengths_1_thistle - degree too large to enumerate"
        );

        // component index (= index of the neighbor of c) and parity of
        // the distance to that neighbor, for every vertex but c
        let neighbors = t.neighbors(c).to_vec();
        let mut comp = vec![usize::MAX; n];
        let mut parity = vec![0u8; n];
        for (i, &u) in neighbors.iter().enumerate() {
            let mut stack = vec![u];
            comp[u] = i;
            parity[u] = 0;
            while let Some(v) = stack.pop() {
                for &w in t.neighbors(v) {
                    if w != c && comp[w] == usize::MAX {
                        comp[w] = i;
                        parity[w] = 1 - parity[v];
                        stack.push(w);
                    }
                }
            }
        }

        // first component's sign fixed: the mirror arrangement realizes
        // the complementary mask
        for mask in 0u64..(1u64 << (deg_c - 1)) {
            let mask = mask << 1;
            let sign_of = |v: Node| -> i64 {
                let flip = (mask >> comp[v]) & 1 == 1;
                let positive = (parity[v] == 0) != flip;
                if positive {
                    1
                } else {
                    -1
                }
            };

            let lambda: i64 = neighbors.iter().map(|&u| -sign_of(u)).sum();
            if lambda.unsigned_abs() == deg_c as u64 {
                continue;
            }

            let candidate = evaluate(t, c, lambda, &neighbors, &sign_of);
            if best.as_ref().map_or(true, |(b, _)| candidate.0 > *b) {
                best = Some(candidate);
            }
        }
    }

    best.expect("every tree on 3 or more vertices has a 1-thistle arrangement")
}

fn evaluate(
    t: &FreeTree,
    c: Node,
    lambda: i64,
    neighbors: &[Node],
    sign_of: &dyn Fn(Node) -> i64,
) -> (u64, LinearArrangement) {
    let n = t.num_nodes();
    let level = |v: Node| -> i64 {
        if v == c {
            lambda
        } else {
            sign_of(v) * t.degree(v) as i64
        }
    };
    let by_level_desc = |a: &Node, b: &Node| level(*b).cmp(&level(*a));

    // forced sides around the thistle, plus the free remainder
    let mut before: Vec<Node> = Vec::new();
    let mut after: Vec<Node> = Vec::new();
    let mut free: Vec<Node> = Vec::new();
    for v in 0..n {
        if v == c {
            continue;
        }
        if neighbors.contains(&v) {
            if sign_of(v) > 0 {
                before.push(v);
            } else {
                after.push(v);
            }
        } else {
            free.push(v);
        }
    }
    before.sort_by(by_level_desc);
    after.sort_by(by_level_desc);
    free.sort_by(by_level_desc);

    // try every threshold split of the free vertices; both sides stay
    // sorted non-increasingly
    let mut best: Option<(u64, Vec<Node>)> = None;
    for split in 0..=free.len() {
        let mut left = before.clone();
        left.extend_from_slice(&free[..split]);
        left.sort_by(by_level_desc);

        let mut right = after.clone();
        right.extend_from_slice(&free[split..]);
        right.sort_by(by_level_desc);

        let order: Vec<Node> = left
            .into_iter()
            .chain(std::iter::once(c))
            .chain(right)
            .collect();

        let mut cost = 0u64;
        let mut cut: i64 = 0;
        for (pos, &v) in order.iter().enumerate() {
            cut += level(v);
            if pos + 1 < n {
                debug_assert!(cut >= 0);
                cost += cut as u64;
            }
        }
        debug_assert_eq!(cut, 0);

        if best.as_ref().map_or(true, |(b, _)| cost > *b) {
            best = Some((cost, order));
        }
    }

    let (cost, order) = best.expect("at least the empty split exists");
    let mut arr = LinearArrangement::zeroed(n);
    for (pos, &v) in order.iter().enumerate() {
        arr.assign(v, pos);
    }
    (cost, arr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linarr::{level_signature_per_vertex, sum_edge_lengths};

    #[test]
    fn path_p3() {
        let t = FreeTree::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        let (cost, arr) = maximize(&t);
        assert_eq!(cost, 2);
        assert_eq!(sum_edge_lengths(&t, Some(&arr)), 2);
        // the middle vertex is the unique thistle
        let levels = level_signature_per_vertex(&t, Some(&arr));
        let thistles = (0..3)
            .filter(|&u| levels[u].unsigned_abs() != t.degree(u) as u64)
            .count();
        assert_eq!(thistles, 1);
    }

    #[test]
    fn arrangement_cost_is_consistent() {
        let t =
            FreeTree::from_edges(6, &[(0, 1), (1, 2), (2, 3), (1, 4), (2, 5)]).unwrap();
        let (cost, arr) = maximize(&t);
        assert!(arr.is_arrangement());
        assert_eq!(sum_edge_lengths(&t, Some(&arr)), cost);
        // exactly one thistle in the produced arrangement
        let levels = level_signature_per_vertex(&t, Some(&arr));
        let thistles = (0..6)
            .filter(|&u| levels[u].unsigned_abs() != t.degree(u) as u64)
            .count();
        assert_eq!(thistles, 1);
    }
}
