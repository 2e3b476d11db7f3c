use super::sentinel;
use crate::basic_types::Position;
use crate::graphs::Graph;
use crate::linarr::View;

#[inline]
fn cross(pu: Position, pv: Position, pc: Position, pd: Position) -> bool {
    let (a, b) = if pu < pv { (pu, pv) } else { (pv, pu) };
    let (c, d) = if pc < pd { (pc, pd) } else { (pd, pc) };
    (a < c && c < b && b < d) || (c < a && a < d && d < b)
}

pub(crate) fn num_crossings<G: Graph, A: View>(g: &G, arr: A) -> u64 {
    let edges = g.edges();
    let mut count = 0u64;
    for (i, &(u, v)) in edges.iter().enumerate() {
        for &(c, d) in &edges[i + 1..] {
            let independent = u != c && u != d && v != c && v != d;
            if independent && cross(arr.pos(u), arr.pos(v), arr.pos(c), arr.pos(d)) {
                count += 1;
            }
        }
    }
    count
}

pub(crate) fn is_num_crossings_leq<G: Graph, A: View>(g: &G, arr: A, upper_bound: u64) -> u64 {
    let edges = g.edges();
    let mut count = 0u64;
    for (i, &(u, v)) in edges.iter().enumerate() {
        for &(c, d) in &edges[i + 1..] {
            let independent = u != c && u != d && v != c && v != d;
            if independent && cross(arr.pos(u), arr.pos(v), arr.pos(c), arr.pos(d)) {
                count += 1;
                if count > upper_bound {
                    return sentinel(g);
                }
            }
        }
    }
    count
}
