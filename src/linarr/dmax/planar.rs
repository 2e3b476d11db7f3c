//! Maximum planar arrangement of a free tree
//!
//! The planar maximum is the maximum over all roots of the projective
//! maximum. The per-root costs come from the same O(n) re-rooting sweep
//! as the planar minimum, with the dual rank weights; the projective
//! algorithm then runs once at an optimal root. Caterpillars short-cut
//! to the closed form n(n−1)/2.

use crate::graphs::{FreeTree, Graph, RootedTree, TreeType};
use crate::linarr::root_sweep::{all_roots_values, Objective};
use crate::linarr::LinearArrangement;

/// Maximum planar arrangement and its cost
pub fn maximize(t: &FreeTree) -> (u64, LinearArrangement) {
    let n = t.num_nodes();
    if n <= 1 {
        return (0, LinearArrangement::identity(n));
    }
    if n == 2 {
        return (1, LinearArrangement::identity(2));
    }

    let values = all_roots_values(t, Objective::Maximum);
    let best_root = (0..n).max_by_key(|&r| values[r]).unwrap();

    let rt = RootedTree::from_free_tree(t, best_root).expect("input is a tree");
    let (cost, arr) = super::projective::maximize(&rt);
    debug_assert_eq!(cost, values[best_root]);
    (cost, arr)
}

/// Cost of a maximum planar arrangement, skipping its construction
pub fn maximize_cost(t: &FreeTree) -> u64 {
    let n = t.num_nodes();
    if n <= 1 {
        return 0;
    }
    if t.is_tree_type_valid() && t.is_of_tree_type(TreeType::Caterpillar) {
        return (n as u64 * (n as u64 - 1)) / 2;
    }
    all_roots_values(t, Objective::Maximum)
        .into_iter()
        .max()
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linarr::{num_crossings, sum_edge_lengths, AlgorithmC};

    #[test]
    fn caterpillars_reach_the_closed_form() {
        let mut t =
            FreeTree::from_edges(6, &[(0, 1), (1, 2), (2, 3), (1, 4), (2, 5)]).unwrap();
        let (cost, arr) = maximize(&t);
        assert_eq!(cost, 15);
        assert_eq!(sum_edge_lengths(&t, Some(&arr)), 15);
        assert_eq!(num_crossings(&t, Some(&arr), AlgorithmC::StackBased), 0);

        t.calculate_tree_types();
        assert_eq!(maximize_cost(&t), 15);
    }

    #[test]
    fn spider_maximum() {
        let t = FreeTree::from_edges(
            7,
            &[(0, 1), (1, 2), (0, 3), (3, 4), (0, 5), (5, 6)],
        )
        .unwrap();
        let (cost, arr) = maximize(&t);
        assert_eq!(cost, 19);
        assert_eq!(sum_edge_lengths(&t, Some(&arr)), 19);
    }
}
