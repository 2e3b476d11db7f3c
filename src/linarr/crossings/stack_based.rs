use super::sentinel;
use crate::basic_types::Position;
use crate::graphs::Graph;
use crate::linarr::View;

// Fenwick tree over positions, the order-statistics container of the
// sweep. Supports point updates and prefix sums in O(log n).
struct Fenwick {
    tree: Vec<i64>,
}

impl Fenwick {
    fn new(n: usize) -> Self {
        Self {
            tree: vec![0; n + 1],
        }
    }

    fn add(&mut self, pos: Position, delta: i64) {
        let mut i = pos + 1;
        while i < self.tree.len() {
            self.tree[i] += delta;
            i += i & i.wrapping_neg();
        }
    }

    // sum over positions 0..=pos
    fn prefix(&self, pos: Position) -> i64 {
        let mut i = pos + 1;
        let mut sum = 0;
        while i > 0 {
            sum += self.tree[i];
            i -= i & i.wrapping_neg();
        }
        sum
    }

    // sum over positions a..=b, empty ranges allowed
    fn range(&self, a: Position, b: Position) -> i64 {
        if a > b {
            return 0;
        }
        let low = if a == 0 { 0 } else { self.prefix(a - 1) };
        self.prefix(b) - low
    }
}

fn compute<G: Graph, A: View>(g: &G, arr: A, upper_bound: Option<u64>) -> Option<u64> {
    let n = g.num_nodes();
    let mut open = Fenwick::new(n);
    let mut closing: Vec<Position> = Vec::new();
    let mut crossings = 0u64;

    for p in 0..n {
        let u = arr.at(p);

        // edges ending at p leave the container first; they all share u,
        // so they must not be counted against each other
        closing.clear();
        let mut opening = 0i64;
        for &v in g.out_neighbors(u).iter().chain(g.in_neighbors(u)) {
            let pv = arr.pos(v);
            if pv < p {
                closing.push(pv);
            } else {
                opening += 1;
            }
        }
        for &q in &closing {
            open.add(q, -1);
        }

        // an open edge crosses the one from q to p iff it started
        // strictly inside (q, p)
        for &q in &closing {
            crossings += open.range(q + 1, p.wrapping_sub(1)) as u64;
        }
        if let Some(ub) = upper_bound {
            if crossings > ub {
                return None;
            }
        }

        if opening > 0 {
            open.add(p, opening);
        }
    }
    Some(crossings)
}

pub(crate) fn num_crossings<G: Graph, A: View>(g: &G, arr: A) -> u64 {
    if g.num_nodes() < 4 {
        return 0;
    }
    compute(g, arr, None).unwrap()
}

pub(crate) fn is_num_crossings_leq<G: Graph, A: View>(g: &G, arr: A, upper_bound: u64) -> u64 {
    if g.num_nodes() < 4 {
        return 0;
    }
    match compute(g, arr, Some(upper_bound)) {
        Some(c) => c,
        None => sentinel(g),
    }
}
