use super::sentinel;
use crate::basic_types::Node;
use crate::graphs::Graph;
use crate::linarr::{DirectView, LinearArrangement, View};

struct Scratch {
    bool_neighs: Vec<bool>,
    // l1[p]: number of edges with one endpoint at position p and the
    // other at an already-swept position
    l1: Vec<u64>,
}

impl Scratch {
    fn new(n: usize) -> Self {
        Self {
            bool_neighs: vec![false; n],
            l1: vec![0; n],
        }
    }
}

#[inline]
fn mark_neighbors<G: Graph>(g: &G, u: Node, bn: &mut [bool], value: bool) {
    for &v in g.out_neighbors(u).iter().chain(g.in_neighbors(u)) {
        bn[v] = value;
    }
}

fn compute<G: Graph, A: View>(
    g: &G,
    arr: A,
    s: &mut Scratch,
    upper_bound: Option<u64>,
) -> Option<u64> {
    let n = g.num_nodes();
    s.l1.fill(0);

    let mut crossings = 0u64;
    for pu in 0..n - 2 {
        let u = arr.at(pu);
        mark_neighbors(g, u, &mut s.bool_neighs, true);

        // edges that started at an earlier position and end in (pu, pv)
        // cross every edge from u to pv
        let mut open = 0u64;
        for pv in pu + 1..n {
            let v = arr.at(pv);
            open += s.l1[pv];
            if s.bool_neighs[v] {
                crossings += open - s.l1[pv];
                s.l1[pv] += 1;
            }
        }

        mark_neighbors(g, u, &mut s.bool_neighs, false);
        s.l1[pu] = 0;

        if let Some(ub) = upper_bound {
            if crossings > ub {
                return None;
            }
        }
    }
    Some(crossings)
}

pub(crate) fn num_crossings<G: Graph, A: View>(g: &G, arr: A) -> u64 {
    let n = g.num_nodes();
    if n < 4 {
        return 0;
    }
    let mut scratch = Scratch::new(n);
    compute(g, arr, &mut scratch, None).unwrap()
}

pub(crate) fn is_num_crossings_leq<G: Graph, A: View>(g: &G, arr: A, upper_bound: u64) -> u64 {
    let n = g.num_nodes();
    if n < 4 {
        return 0;
    }
    let mut scratch = Scratch::new(n);
    match compute(g, arr, &mut scratch, Some(upper_bound)) {
        Some(c) => c,
        None => sentinel(g),
    }
}

pub(crate) fn num_crossings_list<G: Graph>(g: &G, arrs: &[LinearArrangement]) -> Vec<u64> {
    let n = g.num_nodes();
    if n < 4 {
        return vec![0; arrs.len()];
    }
    let mut scratch = Scratch::new(n);
    arrs.iter()
        .map(|a| compute(g, DirectView(a), &mut scratch, None).unwrap())
        .collect()
}
