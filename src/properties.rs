//! Structural properties of graphs and trees
//!
//! Centroids and centres, subtree sizes of free trees under a chosen
//! root, bipartite colorings, the maximal degree-≤2 paths the
//! branch-and-bound reasons about, and the closed-form first and second
//! moments of C and D under uniformly random arrangements.

mod branchless_paths;
mod centre;
mod centroid;
mod coloring;
mod moments;
mod subtree_sizes;

pub use branchless_paths::{branchless_paths, BranchlessPath, BranchlessPaths};
pub use centre::centre;
pub use centroid::{centroid, centroid_edge_sizes};
pub use coloring::{BipartiteColoring, BLUE, RED};
pub use moments::{
    exp_num_crossings, exp_sum_edge_lengths, size_q, var_num_crossings, var_sum_edge_lengths,
};
pub use subtree_sizes::subtree_sizes_from;
