//! Maximization of the sum of edge lengths
//!
//! Polynomial algorithms cover the projective, planar and bipartite
//! classes and the 1-thistle relaxation; the unconstrained maximum is
//! solved exactly by a branch-and-bound search over arrangement
//! prefixes with aggressive pruning ([`bnb`]).

pub mod bnb;
pub mod planar;
pub mod projective;
pub mod thistle;

use super::LinearArrangement;
use crate::graphs::{FreeTree, Graph, RootedTree};

/// Maximum D over all arrangements of a free tree
///
/// Exact branch-and-bound search; exponential in the worst case, with
/// the polynomial bipartite solution as the starting incumbent.
///
/// # Panics
/// If `t` is not a complete tree.
pub fn max_sum_edge_lengths(t: &FreeTree) -> (u64, LinearArrangement) {
    assert!(t.is_tree(), "max_sum_edge_lengths - input is not a tree");
    bnb::maximize(t)
}

/// Maximum D over planar arrangements of a free tree
///
/// # Panics
/// If `t` is not a complete tree.
pub fn max_sum_edge_lengths_planar(t: &FreeTree) -> (u64, LinearArrangement) {
    assert!(
        t.is_tree(),
        "max_sum_edge_lengths_planar - input is not a tree"
    );
    planar::maximize(t)
}

/// Maximum D over projective arrangements of a rooted tree
///
/// # Panics
/// If `t` is not a complete rooted tree.
pub fn max_sum_edge_lengths_projective(t: &RootedTree) -> (u64, LinearArrangement) {
    assert!(
        t.is_rooted_tree(),
        "max_sum_edge_lengths_projective - input is not a rooted tree"
    );
    projective::maximize(t)
}

/// Maximum D over bipartite arrangements of a free tree
///
/// # Panics
/// If `t` is not a complete tree.
pub fn max_sum_edge_lengths_bipartite(t: &FreeTree) -> (u64, LinearArrangement) {
    assert!(
        t.is_tree(),
        "max_sum_edge_lengths_bipartite - input is not a tree"
    );
    super::bipartite::maximize(t)
}

/// Maximum D over arrangements with at most one thistle vertex
///
/// # Panics
/// If `t` is not a complete tree.
pub fn max_sum_edge_lengths_1_thistle(t: &FreeTree) -> (u64, LinearArrangement) {
    assert!(
        t.is_tree(),
        "max_sum_edge_lengths_1_thistle - input is not a tree"
    );
    thistle::maximize(t)
}
