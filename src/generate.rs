//! Generation of trees and arrangements
//!
//! Uniformly random labelled trees through random parent codes (Prüfer
//! sequences), rooted trees by drawing a uniform root on top, and the
//! exhaustive enumerator of bipartite arrangements.
//!
//! The generators are generic over the random number generator; seed a
//! reproducible one for repeatable experiments:
//!
//! ```
//! use linarr::generate::random_free_tree;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(4312);
//! let t = random_free_tree(10, &mut rng);
//! use linarr::graphs::Graph;
//! assert_eq!(t.num_edges(), 9);
//! ```

use crate::basic_types::Node;
use crate::graphs::{FreeTree, Graph, RootedTree};
use crate::linarr::LinearArrangement;
use crate::properties::{BipartiteColoring, BLUE, RED};
use rand::Rng;

/// Uniformly random labelled free tree on `n` vertices
pub fn random_free_tree<R: Rng>(n: usize, rng: &mut R) -> FreeTree {
    let mut t = FreeTree::new(n);
    if n < 2 {
        return t;
    }
    if n == 2 {
        t.add_edge(0, 1).expect("the single edge is valid");
        return t;
    }

    // Prüfer decoding; the code is uniform over all labelled trees
    let code: Vec<Node> = (0..n - 2).map(|_| rng.gen_range(0..n)).collect();
    let mut degree = vec![1u64; n];
    for &c in &code {
        degree[c] += 1;
    }

    let mut leaves: std::collections::BinaryHeap<std::cmp::Reverse<Node>> = (0..n)
        .filter(|&u| degree[u] == 1)
        .map(std::cmp::Reverse)
        .collect();

    for &c in &code {
        let std::cmp::Reverse(leaf) = leaves.pop().expect("a leaf always remains");
        t.add_edge(leaf, c).expect("Prüfer decoding is acyclic");
        degree[c] -= 1;
        if degree[c] == 1 {
            leaves.push(std::cmp::Reverse(c));
        }
    }

    let std::cmp::Reverse(a) = leaves.pop().expect("two leaves remain");
    let std::cmp::Reverse(b) = leaves.pop().expect("two leaves remain");
    t.add_edge(a, b).expect("the last edge joins the two halves");
    t
}

/// Uniformly random labelled rooted tree on `n` vertices
pub fn random_rooted_tree<R: Rng>(n: usize, rng: &mut R) -> RootedTree {
    let t = random_free_tree(n, rng);
    if n == 0 {
        return RootedTree::new(0);
    }
    let root = rng.gen_range(0..n);
    RootedTree::from_free_tree(&t, root).expect("generated trees are complete")
}

/// Exhaustive enumeration of the bipartite arrangements of a tree
///
/// Yields every arrangement placing one color class as a prefix block:
/// first all blue-first arrangements, then all red-first ones, walking
/// both class orders with explicit next-permutation steps. The number
/// of arrangements is 2·|blue|!·|red|!, so keep the trees small.
pub struct AllBipartiteArrangements {
    blues: Vec<Node>,
    reds: Vec<Node>,
    red_first: bool,
    done: bool,
}

impl AllBipartiteArrangements {
    /// Enumerate the bipartite arrangements of `t`
    ///
    /// # Panics
    /// If `t` is not a complete tree.
    pub fn new(t: &FreeTree) -> Self {
        assert!(
            t.is_tree(),
            "AllBipartiteArrangements - input is not a tree"
        );
        let coloring = BipartiteColoring::new(t).expect("trees are bipartite");
        Self {
            blues: coloring.class_of(BLUE),
            reds: coloring.class_of(RED),
            red_first: false,
            done: t.num_nodes() == 0,
        }
    }

    fn current(&self) -> LinearArrangement {
        let n = self.blues.len() + self.reds.len();
        let mut arr = LinearArrangement::zeroed(n);
        let (first, second) = if self.red_first {
            (&self.reds, &self.blues)
        } else {
            (&self.blues, &self.reds)
        };
        for (p, &u) in first.iter().chain(second.iter()).enumerate() {
            arr.assign(u, p);
        }
        arr
    }

    fn advance(&mut self) {
        if next_permutation(&mut self.reds) {
            return;
        }
        if next_permutation(&mut self.blues) {
            return;
        }
        // both classes rolled over; switch the block order once
        if !self.red_first {
            self.red_first = true;
        } else {
            self.done = true;
        }
    }
}

impl Iterator for AllBipartiteArrangements {
    type Item = LinearArrangement;

    fn next(&mut self) -> Option<LinearArrangement> {
        if self.done {
            return None;
        }
        let arr = self.current();
        self.advance();
        Some(arr)
    }
}

// the classic in-place next lexicographic permutation; false when the
// range rolled over to sorted order
fn next_permutation(data: &mut [Node]) -> bool {
    if data.len() < 2 {
        return false;
    }
    let mut i = data.len() - 1;
    while i > 0 && data[i - 1] >= data[i] {
        i -= 1;
    }
    if i == 0 {
        data.reverse();
        return false;
    }
    let mut j = data.len() - 1;
    while data[j] <= data[i - 1] {
        j -= 1;
    }
    data.swap(i - 1, j);
    data[i..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn generated_trees_are_trees() {
        let mut rng = Pcg64::seed_from_u64(75676526);
        for n in [1usize, 2, 3, 7, 25] {
            let t = random_free_tree(n, &mut rng);
            assert!(t.is_tree(), "n = {}", n);
            assert_eq!(t.num_nodes(), n);
        }
        let rt = random_rooted_tree(9, &mut rng);
        assert!(rt.is_rooted_tree());
    }

    #[test]
    fn generation_is_reproducible() {
        let t1 = random_free_tree(12, &mut Pcg64::seed_from_u64(1822));
        let t2 = random_free_tree(12, &mut Pcg64::seed_from_u64(1822));
        assert_eq!(crate::graphs::Graph::edges(&t1), crate::graphs::Graph::edges(&t2));
    }

    #[test]
    fn bipartite_enumeration_of_p3() {
        // P3: blue {0, 2}, red {1} — 2·2·1 arrangements in each block
        // order
        let t = FreeTree::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        let all: Vec<_> = AllBipartiteArrangements::new(&t).collect();
        assert_eq!(all.len(), 4);
        for arr in &all {
            assert!(arr.is_arrangement());
        }
        // no duplicates
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn next_permutation_cycles() {
        let mut v = vec![0usize, 1, 2];
        let mut seen = vec![v.clone()];
        while next_permutation(&mut v) {
            seen.push(v.clone());
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(v, vec![0, 1, 2]);
    }
}
