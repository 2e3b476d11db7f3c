//! Optimal bipartite arrangements
//!
//! A bipartite arrangement places each color class of the (bipartite)
//! graph in one consecutive block. Mirroring swaps the two blocks
//! without changing D, so only blue-first arrangements need to be
//! searched; within each block the optimum is a matter of sorting the
//! class by degree, by the rearrangement inequality.

use crate::graphs::{FreeTree, Graph};
use crate::linarr::LinearArrangement;
use crate::properties::BipartiteColoring;

/// Minimum D over bipartite arrangements
pub(crate) fn minimize(t: &FreeTree) -> (u64, LinearArrangement) {
    optimum(t, false)
}

/// Maximum D over bipartite arrangements
pub(crate) fn maximize(t: &FreeTree) -> (u64, LinearArrangement) {
    optimum(t, true)
}

fn optimum(t: &FreeTree, maximize: bool) -> (u64, LinearArrangement) {
    let n = t.num_nodes();
    if n <= 1 {
        return (0, LinearArrangement::identity(n));
    }

    let coloring = BipartiteColoring::new(t).expect("trees are bipartite");
    let mut blues = coloring.class_of(crate::properties::BLUE);
    let mut reds = coloring.class_of(crate::properties::RED);

    // blue block first: D = Σ_red deg·pos − Σ_blue deg·pos. To
    // maximize, both classes push their high degrees away from the
    // block boundary (blues towards position 0, reds towards n−1); to
    // minimize, towards it.
    if maximize {
        blues.sort_by_key(|&u| std::cmp::Reverse(t.degree(u)));
        reds.sort_by_key(|&u| t.degree(u));
    } else {
        blues.sort_by_key(|&u| t.degree(u));
        reds.sort_by_key(|&u| std::cmp::Reverse(t.degree(u)));
    }

    let mut arr = LinearArrangement::zeroed(n);
    let mut cost: i64 = 0;
    for (p, &u) in blues.iter().enumerate() {
        arr.assign(u, p);
        cost -= (t.degree(u) * p) as i64;
    }
    let offset = blues.len();
    for (p, &u) in reds.iter().enumerate() {
        arr.assign(u, offset + p);
        cost += (t.degree(u) * (offset + p)) as i64;
    }

    debug_assert!(cost >= 0);
    (cost as u64, arr)
}
