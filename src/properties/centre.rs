use crate::basic_types::Node;
use crate::graphs::{FreeTree, Graph};

/// Centre of the component of `x`: the vertex (or adjacent pair) of
/// minimum eccentricity
///
/// Found as the middle of a longest path, itself obtained with the usual
/// double sweep. With two central vertices the smaller index comes
/// first.
pub fn centre(t: &FreeTree, x: Node) -> (Node, Option<Node>) {
    let far_a = farthest_with_parents(t, x).0;
    let (far_b, parent) = farthest_with_parents(t, far_a);

    // walk the diameter path back from far_b to far_a
    let mut path = vec![far_b];
    let mut u = far_b;
    while parent[u] != usize::MAX {
        u = parent[u];
        path.push(u);
    }

    let len = path.len();
    if len % 2 == 1 {
        (path[len / 2], None)
    } else {
        let a = path[len / 2 - 1];
        let b = path[len / 2];
        if a < b {
            (a, Some(b))
        } else {
            (b, Some(a))
        }
    }
}

fn farthest_with_parents(t: &FreeTree, from: Node) -> (Node, Vec<Node>) {
    let n = t.num_nodes();
    let mut parent = vec![usize::MAX; n];
    let mut dist = vec![0u64; n];
    let mut visited = vec![false; n];
    let mut queue = std::collections::VecDeque::new();

    visited[from] = true;
    queue.push_back(from);
    let mut far = from;
    while let Some(u) = queue.pop_front() {
        if dist[u] > dist[far] || (dist[u] == dist[far] && u < far) {
            far = u;
        }
        for &v in t.neighbors(u) {
            if !visited[v] {
                visited[v] = true;
                parent[v] = u;
                dist[v] = dist[u] + 1;
                queue.push_back(v);
            }
        }
    }
    (far, parent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_of_paths() {
        let p5 = FreeTree::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        assert_eq!(centre(&p5, 4), (2, None));
        let p4 = FreeTree::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(centre(&p4, 0), (1, Some(2)));
    }

    #[test]
    fn centre_differs_from_centroid() {
        // broom: long handle plus many leaves at one end
        let t = FreeTree::from_edges(
            7,
            &[(0, 1), (1, 2), (2, 3), (3, 4), (3, 5), (3, 6)],
        )
        .unwrap();
        // eccentricities put the centre on the handle
        assert_eq!(centre(&t, 0), (2, None));
    }
}
