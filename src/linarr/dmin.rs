//! Minimization of the sum of edge lengths
//!
//! Four arrangement classes are covered: unconstrained (Shiloach's and
//! Fan Chung's algorithms), planar, projective and bipartite. All
//! minimizers return the optimal cost together with an arrangement
//! attaining it.

pub mod chung;
pub mod planar;
pub mod projective;
pub mod shiloach;

use super::LinearArrangement;
use crate::basic_types::Node;
use crate::graphs::{FreeTree, Graph, RootedTree};
use crate::sorting::{counting_sort, SortOrder};

/// Selector of an algorithm for the unconstrained minimum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmDmin {
    /// Shiloach's divide-at-the-centroid algorithm
    Shiloach,
    /// Fan Chung's algorithm
    Chung,
}

/// Minimum D over all arrangements of a free tree
///
/// # Panics
/// If `t` is not a complete tree.
pub fn min_sum_edge_lengths(
    t: &FreeTree,
    algorithm: AlgorithmDmin,
) -> (u64, LinearArrangement) {
    assert!(t.is_tree(), "min_sum_edge_lengths - input is not a tree");
    match algorithm {
        AlgorithmDmin::Shiloach => shiloach::minimize(t),
        AlgorithmDmin::Chung => chung::minimize(t),
    }
}

/// Minimum D over planar arrangements of a free tree
///
/// # Panics
/// If `t` is not a complete tree.
pub fn min_sum_edge_lengths_planar(t: &FreeTree) -> (u64, LinearArrangement) {
    assert!(
        t.is_tree(),
        "min_sum_edge_lengths_planar - input is not a tree"
    );
    planar::minimize(t)
}

/// Minimum D over projective arrangements of a rooted tree
///
/// # Panics
/// If `t` is not a complete rooted tree.
pub fn min_sum_edge_lengths_projective(t: &RootedTree) -> (u64, LinearArrangement) {
    assert!(
        t.is_rooted_tree(),
        "min_sum_edge_lengths_projective - input is not a rooted tree"
    );
    projective::intervals(t)
}

/// Minimum D over bipartite arrangements of a free tree
///
/// # Panics
/// If `t` is not a complete tree.
pub fn min_sum_edge_lengths_bipartite(t: &FreeTree) -> (u64, LinearArrangement) {
    assert!(
        t.is_tree(),
        "min_sum_edge_lengths_bipartite - input is not a tree"
    );
    super::bipartite::minimize(t)
}

/// `(child, size of the subtree hanging from the child)`
pub(crate) type NodeSize = (Node, u64);

/// Rooted adjacency list of `t`, every list sorted by subtree size
/// non-increasingly
///
/// Uses the tree's cached subtree sizes when valid, recomputing them
/// locally otherwise.
pub(crate) fn sorted_rooted_adjacency_list(t: &RootedTree) -> Vec<Vec<NodeSize>> {
    let n = t.num_nodes();
    let local;
    let sizes: &[u64] = if t.are_subtree_sizes_valid() {
        t.subtree_sizes()
    } else {
        let ft = t.to_free_tree();
        local = crate::properties::subtree_sizes_from(&ft, t.root());
        &local
    };

    let mut edges: Vec<(Node, NodeSize)> = Vec::with_capacity(n.saturating_sub(1));
    for u in 0..n {
        for &v in t.children(u) {
            edges.push((u, (v, sizes[v])));
        }
    }
    counting_sort(&mut edges, n, SortOrder::NonIncreasing, |e| e.1 .1 as usize);

    let mut list = vec![Vec::new(); n];
    for (u, ns) in edges {
        list[u].push(ns);
    }
    list
}

/// Rooted adjacency list of a free tree rooted at a centroidal vertex,
/// sorted by subtree size non-increasingly; returns the chosen root
pub(crate) fn sorted_adjacency_list_centroid(t: &FreeTree) -> (Node, Vec<Vec<NodeSize>>) {
    let n = t.num_nodes();
    let ((c, _), mut edge_sizes) = crate::properties::centroid_edge_sizes(t, 0);
    counting_sort(&mut edge_sizes, n, SortOrder::NonIncreasing, |e| {
        e.1 as usize
    });

    let mut list = vec![Vec::new(); n];
    for ((u, v), s) in edge_sizes {
        list[u].push((v, s));
    }
    (c, list)
}
