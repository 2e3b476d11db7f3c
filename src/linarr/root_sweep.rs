//! Per-root evaluation of optimal projective costs in overall O(n)
//!
//! For every vertex `u` and every direction `u → x`, the size of the
//! part of the tree behind `x` is computed and the directions are sorted
//! non-increasingly. The optimal projective cost rooted at `r`
//! decomposes over vertices into terms that depend only on the *rank*,
//! within that sorted list, of the direction pointing towards `r` — so
//! moving the root across an edge changes exactly two terms, and a
//! breadth-first sweep evaluates every root in O(1) amortized each.

use crate::basic_types::Node;
use crate::graphs::{Bfs, FreeTree, Graph};
use crate::sorting::{counting_sort, SortOrder};

/// Which projective objective the sweep evaluates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Objective {
    Minimum,
    Maximum,
}

pub(crate) struct RootSweep {
    objective: Objective,
    // per vertex: direction sizes sorted non-increasingly
    sizes: Vec<Vec<u64>>,
    // per vertex, aligned with the *normalized* neighbor list: the rank
    // (1-based) of that direction in `sizes`
    rank: Vec<Vec<usize>>,
    // prefix sums of f_j * inner(j) and f_j * outer(j), 1-based j;
    // entry 0 is 0
    pre_inner: Vec<Vec<u64>>,
    pre_outer: Vec<Vec<u64>>,
}

impl RootSweep {
    pub(crate) fn new(t: &FreeTree, objective: Objective) -> Self {
        let n = t.num_nodes();

        // bidirectional subtree sizes from an arbitrary rooting
        let mut order = Vec::with_capacity(n);
        let mut parent = vec![usize::MAX; n];
        let mut bfs = Bfs::new(t);
        struct Tree<'p> {
            order: &'p mut Vec<Node>,
            parent: &'p mut Vec<Node>,
        }
        impl crate::graphs::BfsCallbacks<FreeTree> for Tree<'_> {
            fn process_current(&mut self, _: &Bfs<FreeTree>, u: Node) {
                self.order.push(u);
            }
            fn process_neighbor(&mut self, _: &Bfs<FreeTree>, s: Node, t: Node, _l: bool) {
                self.parent[t] = s;
            }
        }
        bfs.start_at(
            0,
            &mut Tree {
                order: &mut order,
                parent: &mut parent,
            },
        );

        let mut down = vec![1u64; n];
        for &u in order.iter().rev() {
            if parent[u] != usize::MAX {
                let p = parent[u];
                let d = down[u];
                down[p] += d;
            }
        }

        let mut sizes = vec![Vec::new(); n];
        let mut rank = vec![Vec::new(); n];
        let mut pre_inner = vec![Vec::new(); n];
        let mut pre_outer = vec![Vec::new(); n];

        for u in 0..n {
            let neighs = t.neighbors(u);
            let k = neighs.len();
            let mut dirs: Vec<(Node, u64)> = neighs
                .iter()
                .map(|&v| {
                    let s = if parent[v] == u {
                        down[v]
                    } else {
                        n as u64 - down[u]
                    };
                    (v, s)
                })
                .collect();
            counting_sort(&mut dirs, n, SortOrder::NonIncreasing, |p| p.1 as usize);

            let mut rk = vec![0usize; k];
            for (i, &(v, _)) in dirs.iter().enumerate() {
                let slot = neighs.binary_search(&v).expect("normalized adjacency");
                rk[slot] = i + 1;
            }

            // inner(j): weight of the j-th largest direction when the
            // root lies behind an earlier-ranked direction;
            // outer(j): its weight when the root lies behind it or
            // behind a later-ranked direction
            let (inner, outer): (fn(usize, usize) -> u64, fn(usize, usize) -> u64) =
                match objective {
                    Objective::Minimum => (|j, _k| (j / 2) as u64, |j, _k| ((j - 1) / 2) as u64),
                    Objective::Maximum => {
                        (|j, k| (k - j) as u64, |j, k| (k - j + 1) as u64)
                    }
                };

            let mut pi = vec![0u64; k + 1];
            let mut po = vec![0u64; k + 1];
            for (j, &(_, s)) in dirs.iter().enumerate() {
                let j1 = j + 1;
                pi[j1] = pi[j] + s * inner(j1, k);
                po[j1] = po[j] + s * outer(j1, k);
            }

            sizes[u] = dirs.into_iter().map(|(_, s)| s).collect();
            rank[u] = rk;
            pre_inner[u] = pi;
            pre_outer[u] = po;
        }

        Self {
            objective,
            sizes,
            rank,
            pre_inner,
            pre_outer,
        }
    }

    // contribution of vertex u when the direction towards the root has
    // rank p (p = 0 means u is the root itself)
    fn term(&self, u: Node, p: usize) -> u64 {
        let k = self.sizes[u].len();
        if p == 0 {
            self.pre_outer[u][k]
        } else {
            self.pre_inner[u][p - 1] + (self.pre_outer[u][k] - self.pre_outer[u][p])
        }
    }

    /// Rank of the direction `u → v` (1-based); `v` must be a neighbor
    pub(crate) fn rank_of(&self, t: &FreeTree, u: Node, v: Node) -> usize {
        let slot = t
            .neighbors(u)
            .binary_search(&v)
            .expect("v is a neighbor of u");
        self.rank[u][slot]
    }

    /// Optimal projective cost at every root
    pub(crate) fn all_roots(&self, t: &FreeTree) -> Vec<u64> {
        let n = t.num_nodes();
        // in the minimum every edge contributes a baseline unit on top
        // of the jump terms; the maximum weights carry it already
        let base = match self.objective {
            Objective::Minimum => t.num_edges() as u64,
            Objective::Maximum => 0,
        };

        // direct evaluation at root 0, then O(1) updates per edge
        let mut parent = vec![usize::MAX; n];
        let mut order = Vec::with_capacity(n);
        {
            let mut bfs = Bfs::new(t);
            struct P<'p> {
                parent: &'p mut Vec<Node>,
                order: &'p mut Vec<Node>,
            }
            impl crate::graphs::BfsCallbacks<FreeTree> for P<'_> {
                fn process_current(&mut self, _: &Bfs<FreeTree>, u: Node) {
                    self.order.push(u);
                }
                fn process_neighbor(&mut self, _: &Bfs<FreeTree>, s: Node, t: Node, _l: bool) {
                    self.parent[t] = s;
                }
            }
            bfs.start_at(
                0,
                &mut P {
                    parent: &mut parent,
                    order: &mut order,
                },
            );
        }

        let mut at_zero = base;
        for u in 0..n {
            let p = if u == 0 {
                0
            } else {
                self.rank_of(t, u, parent[u])
            };
            at_zero += self.term(u, p);
        }

        let mut values = vec![0u64; n];
        values[0] = at_zero;
        for &v in order.iter().skip(1) {
            let u = parent[v];
            let delta_u =
                self.term(u, self.rank_of(t, u, v)) as i64 - self.term(u, 0) as i64;
            let delta_v =
                self.term(v, 0) as i64 - self.term(v, self.rank_of(t, v, u)) as i64;
            values[v] = (values[u] as i64 + delta_u + delta_v) as u64;
        }
        values
    }
}

/// Optimal projective cost for every root of `t`
pub(crate) fn all_roots_values(t: &FreeTree, objective: Objective) -> Vec<u64> {
    RootSweep::new(t, objective).all_roots(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_values_vary_with_the_root() {
        // center 0 with two 2-chains and one leaf: rooting at the leaf
        // costs one more than rooting at the center
        let t = FreeTree::from_edges(6, &[(0, 1), (1, 2), (0, 3), (3, 4), (0, 5)]).unwrap();
        let vals = all_roots_values(&t, Objective::Minimum);
        assert_eq!(vals[0], 6);
        assert_eq!(vals[5], 7);
    }

    #[test]
    fn max_values_on_a_spider() {
        // hub 0 with three legs of length 2
        let t = FreeTree::from_edges(
            7,
            &[(0, 1), (1, 2), (0, 3), (3, 4), (0, 5), (5, 6)],
        )
        .unwrap();
        let vals = all_roots_values(&t, Objective::Maximum);
        assert_eq!(vals[0], 15);
        assert_eq!(vals[1], 19);
        assert_eq!(vals[2], 19);
    }

    #[test]
    fn min_values_on_paths_are_flat() {
        let t = FreeTree::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        let vals = all_roots_values(&t, Objective::Minimum);
        assert!(vals.iter().all(|&v| v == 4));
    }
}
