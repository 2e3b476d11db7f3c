use super::sentinel;
use crate::basic_types::Node;
use crate::graphs::Graph;
use crate::linarr::{DirectView, LinearArrangement, View};

// Scratch of the quadratic algorithm, reusable across arrangements of
// the same graph.
struct Scratch {
    bool_neighs: Vec<bool>,
    // both matrices are (n-3) x (n-3), stored flat
    m: Vec<u64>,
    k: Vec<u64>,
}

impl Scratch {
    fn new(n: usize) -> Self {
        let side = n - 3;
        Self {
            bool_neighs: vec![false; n],
            m: vec![0; side * side],
            k: vec![0; side * side],
        }
    }
}

#[inline]
fn mark_neighbors<G: Graph>(g: &G, u: Node, bn: &mut [bool]) {
    for &v in g.out_neighbors(u).iter().chain(g.in_neighbors(u)) {
        bn[v] = true;
    }
}

fn compute<G: Graph, A: View>(g: &G, arr: A, s: &mut Scratch) -> u64 {
    let n = g.num_nodes();
    let side = n - 3;
    s.k.fill(0);
    // the vertex at the last position can stay marked after a sweep, so
    // a fresh run must clear the bitmap
    s.bool_neighs.fill(false);

    let idx = |i: usize, j: usize| i * side + j;

    // M[pu][i-3]: number of edges from the vertex at position pu+1 to
    // vertices at positions > i - 1
    for pu in 0..side {
        let u = arr.at(pu + 1);
        mark_neighbors(g, u, &mut s.bool_neighs);

        let mut k = g.degree(u) as u64;
        let p0 = arr.at(0);
        let p1 = arr.at(1);
        k -= (s.bool_neighs[p0] as u64) + (s.bool_neighs[p1] as u64);
        s.bool_neighs[p0] = false;
        s.bool_neighs[p1] = false;

        for i in 3..n {
            let w = arr.at(i - 1);
            k -= s.bool_neighs[w] as u64;
            s.m[idx(pu, i - 3)] = k;
            s.bool_neighs[w] = false;
        }
    }

    // K accumulates M along the columns, bottom row first
    s.k[idx(side - 1, side - 1)] = s.m[idx(side - 1, side - 1)];
    for ii in 1..side {
        let i = side - ii - 1;
        for j in i..side {
            s.k[idx(i, j)] = s.m[idx(i, j)] + s.k[idx(i + 1, j)];
        }
    }

    let mut crossings = 0u64;
    for pu in 0..side {
        let u = arr.at(pu);
        for &v in g.out_neighbors(u).iter().chain(g.in_neighbors(u)) {
            let pv = arr.pos(v);
            if pu < pv && 2 <= pv && pv < n - 1 {
                crossings += s.k[idx(pu, pv - 2)];
            }
        }
    }
    crossings
}

pub(crate) fn num_crossings<G: Graph, A: View>(g: &G, arr: A) -> u64 {
    let n = g.num_nodes();
    if n < 4 {
        return 0;
    }
    let mut scratch = Scratch::new(n);
    compute(g, arr, &mut scratch)
}

pub(crate) fn is_num_crossings_leq<G: Graph, A: View>(g: &G, arr: A, upper_bound: u64) -> u64 {
    let c = num_crossings(g, arr);
    if c <= upper_bound {
        c
    } else {
        sentinel(g)
    }
}

pub(crate) fn num_crossings_list<G: Graph>(g: &G, arrs: &[LinearArrangement]) -> Vec<u64> {
    let n = g.num_nodes();
    if n < 4 {
        return vec![0; arrs.len()];
    }
    let mut scratch = Scratch::new(n);
    arrs.iter()
        .map(|a| compute(g, DirectView(a), &mut scratch))
        .collect()
}
