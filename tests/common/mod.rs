use linarr::graphs::{FreeTree, Graph};
use linarr::linarr::{sum_edge_lengths, LinearArrangement};

/// Run `f` on every arrangement of `n` vertices.
#[allow(dead_code)]
pub fn for_every_arrangement(n: usize, mut f: impl FnMut(&LinearArrangement)) {
    let mut perm: Vec<usize> = (0..n).collect();
    permute(&mut perm, 0, &mut |p| {
        let arr = LinearArrangement::from_direct(p.to_vec()).unwrap();
        f(&arr);
    });
}

fn permute(perm: &mut Vec<usize>, k: usize, f: &mut impl FnMut(&[usize])) {
    if k == perm.len() {
        f(perm);
        return;
    }
    for i in k..perm.len() {
        perm.swap(k, i);
        permute(perm, k + 1, f);
        perm.swap(k, i);
    }
}

/// Exact extrema of D by exhaustive search.
#[allow(dead_code)]
pub fn brute_force_extrema(t: &FreeTree) -> (u64, u64) {
    let mut min = u64::MAX;
    let mut max = 0;
    for_every_arrangement(t.num_nodes(), |arr| {
        let d = sum_edge_lengths(t, Some(arr));
        min = min.min(d);
        max = max.max(d);
    });
    (min, max)
}

/// A small family of structurally diverse trees.
#[allow(dead_code)]
pub fn tree_zoo() -> Vec<FreeTree> {
    let specs: Vec<(usize, Vec<(usize, usize)>)> = vec![
        (2, vec![(0, 1)]),
        (3, vec![(0, 1), (1, 2)]),
        (4, vec![(0, 1), (1, 2), (2, 3)]),
        (4, vec![(0, 1), (0, 2), (0, 3)]),
        (5, vec![(0, 1), (0, 2), (0, 3), (0, 4)]),
        (5, vec![(0, 1), (1, 2), (2, 3), (2, 4)]),
        (6, vec![(0, 1), (1, 2), (2, 3), (1, 4), (2, 5)]),
        (6, vec![(0, 1), (1, 2), (0, 3), (3, 4), (0, 5)]),
        (7, vec![(0, 1), (1, 2), (0, 3), (3, 4), (0, 5), (5, 6)]),
        (7, vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6)]),
    ];
    specs
        .into_iter()
        .map(|(n, edges)| FreeTree::from_edges(n, &edges).unwrap())
        .collect()
}
