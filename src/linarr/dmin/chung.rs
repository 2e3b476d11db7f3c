//! Fan Chung's minimum linear arrangement algorithm
//!
//! Like Shiloach's algorithm this divides at a centroidal vertex, but
//! the alternating layout is searched more exhaustively: for every
//! choice of the subtree glued to the core, the remaining 2p (or 2p+1)
//! largest subtrees are dealt out to the two flanks in the fixed
//! outside-in pattern, and the best choice wins. Anchored subproblems
//! are flipped at the end when their root landed on the wrong half.

use crate::basic_types::{Node, Position};
use crate::graphs::{Bfs, FreeTree, Graph, OnVisit};
use crate::linarr::LinearArrangement;
use crate::properties::{centroid, subtree_sizes_from};
use crate::sorting::{counting_sort, SortOrder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    None,
    Left,
    Right,
}

type Ordering = Vec<(Node, u64)>;

/// Minimum arrangement of `t` and its cost
pub fn minimize(t: &FreeTree) -> (u64, LinearArrangement) {
    let n = t.num_nodes();
    if n <= 1 {
        return (0, LinearArrangement::identity(n));
    }
    let mut work = t.clone();
    let mut arr = LinearArrangement::zeroed(n);
    let cost = calculate_mla(&mut work, Anchor::None, 0, 0, &mut arr);
    (cost, arr)
}

fn calculate_q(n: u64, ord: &Ordering) -> Option<usize> {
    let k = ord.len() - 1;
    let t_0 = ord[0].1;

    let mut q = k as i64 / 2;
    let mut sum: u64 = (0..=2 * q as usize).map(|i| ord[i].1).sum();

    let mut z = n - sum;
    let mut tricky_formula = (t_0 + 2) / 2 + (z + 2) / 2;
    let mut t_2q = ord[2 * q as usize].1;
    while q >= 0 && t_2q <= tricky_formula {
        z += ord[2 * q as usize].1;
        if q > 0 {
            z += ord[2 * q as usize - 1].1;
        }
        q -= 1;
        tricky_formula = (t_0 + 2) / 2 + (z + 2) / 2;
        if q >= 0 {
            t_2q = ord[2 * q as usize].1;
        }
    }
    if q < 0 {
        None
    } else {
        Some(q as usize)
    }
}

fn calculate_p(n: u64, ord: &Ordering) -> Option<usize> {
    if ord.len() < 2 {
        return None;
    }
    let k = ord.len() - 1;
    let t_0 = ord[0].1;

    let mut p = (k as i64 - 1) / 2;
    let mut sum: u64 = (0..=2 * p as usize + 1).map(|i| ord[i].1).sum();

    let mut y = n - sum;
    let mut tricky_formula = (t_0 + 2) / 2 + (y + 2) / 2;
    let mut t_2p_plus_1 = ord[2 * p as usize + 1].1;

    while p >= 0 && t_2p_plus_1 <= tricky_formula {
        y += ord[2 * p as usize + 1].1 + ord[2 * p as usize].1;
        p -= 1;
        tricky_formula = (t_0 + 2) / 2 + (y + 2) / 2;
        if p >= 0 {
            t_2p_plus_1 = ord[2 * p as usize + 1].1;
        }
    }
    if p < 0 {
        None
    } else {
        Some(p as usize)
    }
}

// deal the indices {0..=top} \ {skip} to the two flanks, outside in;
// slot 0 stays unused
fn flank_order(top: usize, skip: usize) -> Vec<usize> {
    let mut v = vec![usize::MAX; top + 1];
    let mut pos = v.len() - 1;
    let mut right_pos = pos;
    let mut left_pos = 1;

    let mut j = 0;
    while j <= top {
        if j == skip {
            j += 1;
            continue;
        }
        v[pos] = j;
        if pos > left_pos {
            right_pos -= 1;
            pos = left_pos;
        } else {
            left_pos += 1;
            pos = right_pos;
        }
        j += 1;
    }
    v
}

fn ordering_at(t: &FreeTree, u: Node) -> Ordering {
    let sizes = subtree_sizes_from(t, u);
    let mut ord: Ordering = t.neighbors(u).iter().map(|&v| (v, sizes[v])).collect();
    counting_sort(&mut ord, t.num_nodes(), SortOrder::NonIncreasing, |p| {
        p.1 as usize
    });
    ord
}

fn calculate_mla(
    t: &mut FreeTree,
    root: Anchor,
    one_node: Node,
    start: Position,
    mla: &mut LinearArrangement,
) -> u64 {
    let size_tree = t.num_nodes_component(one_node);
    debug_assert!(size_tree > 0);

    if size_tree == 1 {
        mla.assign(one_node, start);
        return 0;
    }

    // collected for the possible flip at the end
    let mut reachable = Vec::with_capacity(size_tree as usize);
    {
        let mut bfs = Bfs::new(&*t);
        bfs.start_at(one_node, &mut OnVisit(|u| reachable.push(u)));
    }

    let mut cost;

    if root == Anchor::None {
        let u = centroid(t, one_node).0;
        let ord = ordering_at(t, u);

        match calculate_q(size_tree, &ord) {
            None => {
                let (t_0, n_0) = ord[0];
                t.remove_edge(u, t_0).expect("edge exists");
                let c_1 = calculate_mla(t, Anchor::Right, t_0, start, mla);
                let c_2 =
                    calculate_mla(t, Anchor::Left, u, start + n_0 as usize, mla);
                cost = c_1 + c_2 + 1;
                t.add_edge(u, t_0).expect("edge can be restored");
            }
            Some(q) => {
                cost = u64::MAX;

                let edges: Vec<(Node, Node)> =
                    (0..=2 * q).map(|i| (u, ord[i].0)).collect();
                t.remove_edges(&edges).expect("edges exist");

                let size_rest: u64 =
                    ord.iter().skip(2 * q + 1).map(|&(_, s)| s).sum();

                for i in 0..=2 * q {
                    let deal = flank_order(2 * q, i);
                    t.add_edge(u, ord[i].0).expect("edge can be glued");

                    let mut c_i = 0u64;
                    let mut arr_aux = mla.clone();
                    let mut start_aux = start;

                    for &j in deal.iter().take(q + 1).skip(1) {
                        c_i += calculate_mla(
                            t,
                            Anchor::Right,
                            ord[j].0,
                            start_aux,
                            &mut arr_aux,
                        );
                        start_aux += ord[j].1 as usize;
                    }

                    c_i += calculate_mla(t, Anchor::None, u, start_aux, &mut arr_aux);
                    start_aux += ord[i].1 as usize + 1 + size_rest as usize;

                    for &j in deal.iter().take(2 * q + 1).skip(q + 1) {
                        c_i += calculate_mla(
                            t,
                            Anchor::Left,
                            ord[j].0,
                            start_aux,
                            &mut arr_aux,
                        );
                        start_aux += ord[j].1 as usize;
                    }

                    // anchors running over the trees closer to the core
                    c_i += size_tree * q as u64;
                    let mut subs = 0u64;
                    for j in 1..=q {
                        subs += (q - j + 1) as u64
                            * (ord[deal[j]].1 + ord[deal[2 * q - j + 1]].1);
                    }
                    c_i -= subs;
                    c_i += q as u64;

                    if c_i < cost {
                        cost = c_i;
                        *mla = arr_aux;
                    }
                    t.remove_edge(u, ord[i].0).expect("edge exists");
                }

                t.restore_edges(&edges);
            }
        }
    } else {
        let ord = ordering_at(t, one_node);

        match calculate_p(size_tree, &ord) {
            None => {
                let (t_0, n_0) = ord[0];
                debug_assert_ne!(one_node, t_0);
                t.remove_edge(one_node, t_0).expect("edge exists");
                let c_1 = calculate_mla(t, Anchor::Right, t_0, start, mla);
                let c_2 = calculate_mla(
                    t,
                    Anchor::None,
                    one_node,
                    start + n_0 as usize,
                    mla,
                );
                cost = c_1 + c_2 + size_tree - n_0;
                t.add_edge(one_node, t_0).expect("edge can be restored");
            }
            Some(p) => {
                cost = u64::MAX;

                let edges: Vec<(Node, Node)> =
                    (0..=2 * p + 1).map(|i| (one_node, ord[i].0)).collect();
                t.remove_edges(&edges).expect("edges exist");

                let size_rest: u64 =
                    ord.iter().skip(2 * p + 2).map(|&(_, s)| s).sum();

                for i in 0..=2 * p + 1 {
                    let deal = flank_order(2 * p + 1, i);
                    t.add_edge(one_node, ord[i].0).expect("edge can be glued");

                    let mut c_i = 0u64;
                    let mut arr_aux = mla.clone();
                    let mut start_aux = start;

                    for &j in deal.iter().take(p + 1).skip(1) {
                        c_i += calculate_mla(
                            t,
                            Anchor::Right,
                            ord[j].0,
                            start_aux,
                            &mut arr_aux,
                        );
                        start_aux += ord[j].1 as usize;
                    }

                    c_i += calculate_mla(
                        t,
                        Anchor::None,
                        one_node,
                        start_aux,
                        &mut arr_aux,
                    );
                    start_aux += ord[i].1 as usize + 1 + size_rest as usize;

                    for &j in deal.iter().take(2 * p + 2).skip(p + 1) {
                        c_i += calculate_mla(
                            t,
                            Anchor::Left,
                            ord[j].0,
                            start_aux,
                            &mut arr_aux,
                        );
                        start_aux += ord[j].1 as usize;
                    }

                    c_i += size_tree * (p as u64 + 1);
                    c_i -= (p as u64 + 1) * ord[*deal.last().unwrap()].1;

                    let mut subs = 0u64;
                    for j in 1..=p {
                        subs += (p - j + 1) as u64
                            * (ord[deal[j]].1 + ord[deal[2 * p - j + 1]].1);
                    }
                    c_i -= subs;
                    c_i += p as u64;

                    if c_i < cost {
                        cost = c_i;
                        *mla = arr_aux;
                    }
                    t.remove_edge(one_node, ord[i].0).expect("edge exists");
                }

                t.restore_edges(&edges);
            }
        }
    }

    // flip the block when the anchored root sits on the wrong half
    let rel = mla.position_of(one_node) - start;
    let must_flip = match root {
        Anchor::Right => 2 * rel < size_tree as usize - 1,
        Anchor::Left => 2 * rel > size_tree as usize - 1,
        Anchor::None => false,
    };
    if must_flip {
        for &w in &reachable {
            let flipped = start + size_tree as usize - 1 - (mla.position_of(w) - start);
            mla.assign(w, flipped);
        }
    }

    cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linarr::sum_edge_lengths;

    #[test]
    fn agrees_with_known_minima() {
        let cases: Vec<(usize, Vec<(usize, usize)>, u64)> = vec![
            (4, vec![(0, 1), (1, 2), (2, 3)], 3),
            (5, vec![(0, 1), (0, 2), (0, 3), (0, 4)], 6),
            (6, vec![(0, 1), (1, 2), (2, 3), (1, 4), (2, 5)], 7),
        ];
        for (n, edges, expected) in cases {
            let t = FreeTree::from_edges(n, &edges).unwrap();
            let (cost, arr) = minimize(&t);
            assert_eq!(cost, expected);
            assert_eq!(sum_edge_lengths(&t, Some(&arr)), cost);
            assert!(arr.is_arrangement());
        }
    }
}
