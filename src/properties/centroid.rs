use crate::basic_types::{Edge, Node};
use crate::containers::QueueArray;
use crate::graphs::{Bfs, FreeTree, Graph, OnVisit};

/// Centroid of the component of `x`: the vertex (or adjacent pair)
/// minimizing the largest remaining subtree when removed
///
/// With two centroidal vertices the smaller index comes first.
pub fn centroid(t: &FreeTree, x: Node) -> (Node, Option<Node>) {
    let (c, _) = centroid_prune(t, x, false);
    c
}

/// Centroid of the component of `x`, plus every directed edge of the
/// component pointing away from the first centroidal vertex together
/// with the size of the subtree it leads to
///
/// The edge list is exactly what the sorted rooted adjacency lists of
/// the D-optimizers are built from.
pub fn centroid_edge_sizes(t: &FreeTree, x: Node) -> ((Node, Option<Node>), Vec<(Edge, u64)>) {
    centroid_prune(t, x, true)
}

fn centroid_prune(
    t: &FreeTree,
    x: Node,
    want_edges: bool,
) -> ((Node, Option<Node>), Vec<(Edge, u64)>) {
    let n = t.num_nodes();
    let size_cc = t.num_nodes_component(x);

    if size_cc == 1 {
        return ((x, None), Vec::new());
    }
    if size_cc == 2 {
        let other = t.neighbors(x)[0];
        let (a, b) = if x < other { (x, other) } else { (other, x) };
        return ((a, Some(b)), vec![((a, b), 1)]);
    }

    let half = size_cc / 2 + size_cc % 2;

    let mut weight = vec![1u64; n];
    let mut degree = vec![0u64; n];
    let mut edge_sizes = Vec::new();
    if want_edges {
        edge_sizes.reserve(size_cc as usize - 1);
    }

    let mut queue = QueueArray::new(size_cc as usize);
    {
        let mut bfs = Bfs::new(t);
        bfs.start_at(
            x,
            &mut OnVisit(|u| {
                degree[u] = t.degree(u) as u64;
                if t.degree(u) == 1 {
                    queue.push(u);
                }
            }),
        );
    }

    // prune leaves inward; whoever accumulates half the component is
    // centroidal
    let mut c1 = usize::MAX;
    let mut c2 = usize::MAX;
    while !queue.is_empty() {
        let u = queue.pop();

        if weight[u] >= half {
            if c1 == usize::MAX {
                c1 = u;
            } else {
                c2 = u;
            }
            continue;
        }

        degree[u] -= 1;
        debug_assert_eq!(degree[u], 0);

        for &v in t.neighbors(u) {
            if degree[v] == 0 {
                continue;
            }
            degree[v] -= 1;
            weight[v] += weight[u];
            if degree[v] == 1 {
                queue.push(v);
            }
            if want_edges {
                edge_sizes.push(((v, u), weight[u]));
            }
        }
    }

    if c2 != usize::MAX {
        if c1 > c2 {
            std::mem::swap(&mut c1, &mut c2);
        }
        if want_edges {
            edge_sizes.push(((c1, c2), weight[c2]));
        }
        ((c1, Some(c2)), edge_sizes)
    } else {
        ((c1, None), edge_sizes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_centroids() {
        let p5 = FreeTree::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        assert_eq!(centroid(&p5, 0), (2, None));

        let p4 = FreeTree::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(centroid(&p4, 3), (1, Some(2)));
    }

    #[test]
    fn star_centroid() {
        let star = FreeTree::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
        assert_eq!(centroid(&star, 3), (0, None));
    }

    #[test]
    fn edge_sizes_cover_component() {
        let t =
            FreeTree::from_edges(6, &[(0, 1), (1, 2), (2, 3), (1, 4), (2, 5)]).unwrap();
        let ((c1, c2), es) = centroid_edge_sizes(&t, 0);
        assert!(c1 == 1 || c1 == 2);
        let _ = c2;
        assert_eq!(es.len(), 5);
        let total: u64 = es
            .iter()
            .filter(|((a, _), _)| *a == c1)
            .map(|&(_, s)| s)
            .sum();
        // the subtrees hanging off the first centroid cover the rest
        assert_eq!(total, 5);
    }

    #[test]
    fn component_restricted() {
        let t = FreeTree::from_edges(6, &[(0, 1), (1, 2), (3, 4), (4, 5)]).unwrap();
        assert_eq!(centroid(&t, 5), (4, None));
        assert_eq!(centroid(&t, 0), (1, None));
    }
}
