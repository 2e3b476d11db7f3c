use super::{DirectView, IdentityView, LinearArrangement, View};
use crate::basic_types::{Edge, Node};
use crate::graphs::Graph;

/// Length of the edge `{u,v}` under `arr` (`None` = identity)
pub fn edge_length<G: Graph>(_g: &G, e: Edge, arr: Option<&LinearArrangement>) -> u64 {
    let (u, v) = e;
    match arr {
        None => abs_diff(u, v),
        Some(a) => abs_diff(a.position_of(u), a.position_of(v)),
    }
}

/// D: the sum over all edges of their length under `arr` (`None` = identity)
pub fn sum_edge_lengths<G: Graph>(g: &G, arr: Option<&LinearArrangement>) -> u64 {
    match arr {
        None => sum_lengths(g, IdentityView),
        Some(a) => sum_lengths(g, DirectView(a)),
    }
}

fn sum_lengths<G: Graph, A: View>(g: &G, arr: A) -> u64 {
    let mut total = 0u64;
    for u in 0..g.num_nodes() {
        for &v in g.out_neighbors(u) {
            if G::DIRECTED || u < v {
                total += abs_diff(arr.pos(u), arr.pos(v));
            }
        }
    }
    total
}

#[inline]
fn abs_diff(a: Node, b: Node) -> u64 {
    if a < b {
        (b - a) as u64
    } else {
        (a - b) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::UndirectedGraph;

    #[test]
    fn path_identity() {
        let g = UndirectedGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(sum_edge_lengths(&g, None), 3);
    }

    #[test]
    fn star_identity() {
        let g =
            UndirectedGraph::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
        assert_eq!(sum_edge_lengths(&g, None), 1 + 2 + 3 + 4);
        let arr = LinearArrangement::from_direct(vec![2, 0, 1, 3, 4]).unwrap();
        assert_eq!(sum_edge_lengths(&g, Some(&arr)), 2 + 1 + 1 + 2);
    }
}
