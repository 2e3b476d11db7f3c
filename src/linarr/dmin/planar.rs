//! Minimum planar arrangement of a free tree
//!
//! Every planar arrangement leaves its leftmost vertex uncovered, so the
//! planar minimum is the minimum over all roots of the projective
//! minimum. The per-root costs are evaluated with the O(n) re-rooting
//! sweep; the projective algorithm then runs once, at an optimal root,
//! to produce the arrangement.

use crate::graphs::{FreeTree, Graph, RootedTree};
use crate::linarr::root_sweep::{all_roots_values, Objective};
use crate::linarr::LinearArrangement;

/// Minimum planar arrangement and its cost
pub fn minimize(t: &FreeTree) -> (u64, LinearArrangement) {
    let n = t.num_nodes();
    if n <= 1 {
        return (0, LinearArrangement::identity(n));
    }

    let values = all_roots_values(t, Objective::Minimum);
    let best_root = (0..n).min_by_key(|&r| values[r]).unwrap();

    let rt = RootedTree::from_free_tree(t, best_root).expect("input is a tree");
    let (cost, arr) = super::projective::intervals(&rt);
    debug_assert_eq!(cost, values[best_root]);
    (cost, arr)
}

/// Cost of a minimum planar arrangement, skipping its construction
pub fn minimize_cost(t: &FreeTree) -> u64 {
    let n = t.num_nodes();
    if n <= 1 {
        return 0;
    }
    all_roots_values(t, Objective::Minimum)
        .into_iter()
        .min()
        .unwrap()
}

/// Minimum planar arrangement by rooting at a centroidal vertex
///
/// A centroidal root always attains the planar minimum, so this skips
/// the per-root sweep entirely: one centroid search, one projective
/// run on its sorted adjacency list.
pub fn minimize_centroid(t: &FreeTree) -> (u64, LinearArrangement) {
    let n = t.num_nodes();
    if n <= 1 {
        return (0, LinearArrangement::identity(n));
    }
    let (c, list) = super::sorted_adjacency_list_centroid(t);
    super::projective::arrange_list(&list, c, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linarr::{num_crossings, sum_edge_lengths, AlgorithmC};

    #[test]
    fn planar_minimum_of_small_trees() {
        // double star: centers 1 and 2
        let t = FreeTree::from_edges(5, &[(0, 1), (1, 2), (2, 3), (2, 4)]).unwrap();
        let (cost, arr) = minimize(&t);
        assert_eq!(cost, 5);
        assert_eq!(sum_edge_lengths(&t, Some(&arr)), 5);
        assert_eq!(num_crossings(&t, Some(&arr), AlgorithmC::BruteForce), 0);
    }

    #[test]
    fn planar_minimum_matches_projective_at_best_root() {
        let t =
            FreeTree::from_edges(6, &[(0, 1), (1, 2), (2, 3), (1, 4), (2, 5)]).unwrap();
        assert_eq!(minimize_cost(&t), 7);
    }

    #[test]
    fn centroid_rooting_attains_the_sweep_minimum() {
        let trees: Vec<(usize, Vec<(usize, usize)>)> = vec![
            (5, vec![(0, 1), (1, 2), (2, 3), (2, 4)]),
            (6, vec![(0, 1), (1, 2), (2, 3), (1, 4), (2, 5)]),
            (6, vec![(0, 1), (1, 2), (0, 3), (3, 4), (0, 5)]),
            (7, vec![(0, 1), (1, 2), (0, 3), (3, 4), (0, 5), (5, 6)]),
        ];
        for (n, edges) in trees {
            let t = FreeTree::from_edges(n, &edges).unwrap();
            let (cost, arr) = minimize_centroid(&t);
            assert_eq!(cost, minimize_cost(&t), "{:?}", edges);
            assert_eq!(sum_edge_lengths(&t, Some(&arr)), cost);
            assert_eq!(num_crossings(&t, Some(&arr), AlgorithmC::Ladder), 0);
        }
    }
}
