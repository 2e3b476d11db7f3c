use crate::basic_types::Node;
use crate::graphs::{Bfs, FreeTree, Graph, OnVisit};

/// Sizes of all subtrees of `t` under the fictional root `root`
///
/// Entry `u` is the number of vertices of the subtree hanging from `u`
/// when the component of `root` is rooted there; vertices outside that
/// component stay 0.
pub fn subtree_sizes_from(t: &FreeTree, root: Node) -> Vec<u64> {
    let n = t.num_nodes();
    let mut order = Vec::with_capacity(n);
    let mut parent = vec![usize::MAX; n];

    let mut bfs = Bfs::new(t);
    bfs.start_at(root, &mut OnVisit(|u| order.push(u)));

    for &u in &order {
        for &v in t.neighbors(u) {
            if parent[u] != v && parent[v] == usize::MAX && v != root {
                parent[v] = u;
            }
        }
    }

    let mut sizes = vec![0u64; n];
    for &u in order.iter().rev() {
        sizes[u] += 1;
        if parent[u] != usize::MAX {
            sizes[parent[u]] += sizes[u];
        }
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_of_a_caterpillar() {
        // 0-1-2-3 with leaves 4 on 1, 5 on 2
        let t =
            FreeTree::from_edges(6, &[(0, 1), (1, 2), (2, 3), (1, 4), (2, 5)]).unwrap();
        let s = subtree_sizes_from(&t, 0);
        assert_eq!(s[0], 6);
        assert_eq!(s[1], 5);
        assert_eq!(s[2], 3);
        assert_eq!(s[3], 1);
        assert_eq!(s[4], 1);
        assert_eq!(s[5], 1);

        let s2 = subtree_sizes_from(&t, 2);
        assert_eq!(s2[2], 6);
        assert_eq!(s2[1], 3);
        assert_eq!(s2[0], 1);
    }

    #[test]
    fn forest_component_only() {
        let t = FreeTree::from_edges(5, &[(0, 1), (3, 4)]).unwrap();
        let s = subtree_sizes_from(&t, 0);
        assert_eq!(s[0], 2);
        assert_eq!(s[1], 1);
        assert_eq!(s[3], 0);
    }
}
