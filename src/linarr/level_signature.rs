use super::LinearArrangement;
use crate::basic_types::Node;
use crate::graphs::Graph;

/// Level value of every vertex: neighbors to its right minus neighbors
/// to its left under `arr` (`None` = identity)
pub fn level_signature_per_vertex<G: Graph>(
    g: &G,
    arr: Option<&LinearArrangement>,
) -> Vec<i64> {
    let n = g.num_nodes();
    let pos = |u: Node| match arr {
        None => u,
        Some(a) => a.position_of(u),
    };
    let mut levels = vec![0i64; n];
    for u in 0..n {
        let pu = pos(u);
        for &v in g.out_neighbors(u).iter().chain(g.in_neighbors(u)) {
            if pos(v) > pu {
                levels[u] += 1;
            } else {
                levels[u] -= 1;
            }
        }
    }
    levels
}

/// Level values indexed by position instead of by vertex
pub fn level_signature_per_position<G: Graph>(
    g: &G,
    arr: Option<&LinearArrangement>,
) -> Vec<i64> {
    let per_vertex = level_signature_per_vertex(g, arr);
    let n = g.num_nodes();
    let mut per_position = vec![0i64; n];
    for (u, &l) in per_vertex.iter().enumerate() {
        let p = match arr {
            None => u,
            Some(a) => a.position_of(u),
        };
        per_position[p] = l;
    }
    per_position
}

/// Is `u` a thistle vertex of `arr`, i.e. |level| ≠ degree?
pub fn is_thistle_vertex<G: Graph>(
    g: &G,
    arr: Option<&LinearArrangement>,
    u: Node,
) -> bool {
    let pu = match arr {
        None => u,
        Some(a) => a.position_of(u),
    };
    let mut level = 0i64;
    for &v in g.out_neighbors(u).iter().chain(g.in_neighbors(u)) {
        let pv = match arr {
            None => v,
            Some(a) => a.position_of(v),
        };
        if pv > pu {
            level += 1;
        } else {
            level -= 1;
        }
    }
    level.unsigned_abs() != g.degree(u) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::UndirectedGraph;

    #[test]
    fn path_levels() {
        let p4 = UndirectedGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(level_signature_per_vertex(&p4, None), vec![1, 0, 0, -1]);
        assert!(is_thistle_vertex(&p4, None, 1));
        assert!(!is_thistle_vertex(&p4, None, 0));

        let arr = LinearArrangement::from_direct(vec![0, 3, 1, 2]).unwrap();
        // order: 0, 2, 3, 1 — vertex 1 last, both neighbors left
        let levels = level_signature_per_vertex(&p4, Some(&arr));
        assert_eq!(levels[1], -2);
        assert_eq!(level_signature_per_position(&p4, Some(&arr))[3], -2);
    }
}
