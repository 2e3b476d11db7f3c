use crate::basic_types::Node;
use crate::graphs::Graph;

/// |Q|: the number of unordered pairs of independent edges
pub fn size_q<G: Graph>(g: &G) -> u64 {
    let m = g.num_edges() as u64;
    let sum_sq: u64 = (0..g.num_nodes())
        .map(|u| {
            let k = g.degree(u) as u64;
            k * k
        })
        .sum();
    (m * (m + 1) - sum_sq) / 2
}

/// E[C] over uniformly random arrangements: |Q| / 3
pub fn exp_num_crossings<G: Graph>(g: &G) -> f64 {
    size_q(g) as f64 / 3.0
}

/// E[D] over uniformly random arrangements: m (n + 1) / 3
pub fn exp_sum_edge_lengths<G: Graph>(g: &G) -> f64 {
    let n = g.num_nodes() as f64;
    let m = g.num_edges() as f64;
    m * (n + 1.0) / 3.0
}

/// V[C] over uniformly random arrangements, general simple graphs
///
/// Evaluates the closed form over the subgraph statistics of `g`
/// (independent pairs, paths of 4 and 5 vertices, 4-cycles, paws,
/// triangle–edge pairs, and the degree-weighted sums Φ and Λ). The
/// graph is treated as undirected.
pub fn var_num_crossings<G: Graph>(g: &G) -> f64 {
    let n = g.num_nodes();
    let m = g.num_edges() as i128;
    if m <= 1 {
        return 0.0;
    }

    // sorted neighborhoods; sorted input lists are taken as they are
    let neighborhoods: Vec<Vec<Node>> = (0..n)
        .map(|u| {
            let mut list = g.out_neighbors(u).to_vec();
            if !g.is_normalized() {
                list.sort_unstable();
            }
            list
        })
        .collect();
    let deg = |u: Node| neighborhoods[u].len() as i128;
    let is_edge = |u: Node, v: Node| neighborhoods[u].binary_search(&v).is_ok();

    let mut sum_sq: i128 = 0;
    let mut sum_cu: i128 = 0;
    let mut psi: i128 = 0;
    let mut xi = vec![0i128; n];
    for s in 0..n {
        let ks = deg(s);
        sum_sq += ks * ks;
        sum_cu += ks * ks * ks;
        for &t in &neighborhoods[s] {
            let kt = deg(t);
            psi += ks * kt;
            xi[s] += kt;
        }
    }
    debug_assert_eq!(psi % 2, 0);
    psi /= 2;

    let q = (m * (m + 1) - sum_sq) / 2;
    let kg = (m + 1) * sum_sq - sum_cu - 2 * psi;
    let mut phi_1 = (m + 1) * psi;
    let mut phi_2: i128 = 0;
    let mut lambda_1: i128 = 0;
    let mut lambda_2: i128 = 0;
    let mut n_paths_5: i128 = 0;
    let mut n_cycles_4: i128 = 0;
    let mut paw: i128 = 0;
    let mut pair_c3_l2: i128 = 0;
    let mut mu: i128 = 0;

    // intersection size (and degree sum of the common vertices) of two
    // sorted neighborhoods
    let common = |a: &[Node], b: &[Node], with_degrees: bool| -> (i128, i128) {
        let mut i = 0;
        let mut j = 0;
        let mut cnt = 0i128;
        let mut degs = 0i128;
        while i < a.len() && j < b.len() {
            if a[i] == b[j] {
                cnt += 1;
                if with_degrees {
                    degs += deg(a[i]);
                }
                i += 1;
                j += 1;
            } else if a[i] < b[j] {
                i += 1;
            } else {
                j += 1;
            }
        }
        (cnt, degs)
    };

    for s in 0..n {
        for &t in &neighborhoods[s] {
            if t < s {
                continue;
            }
            let ks = deg(s);
            let kt = deg(t);
            let ns = &neighborhoods[s];
            let nt = &neighborhoods[t];

            for &u in ns.iter().filter(|&&u| u != t) {
                let ku = deg(u);
                let (common_ut, _) = common(&neighborhoods[u], nt, false);
                let ut = is_edge(u, t) as i128;
                n_paths_5 += (kt - 1 - ut) * (ku - 1 - ut) + 1 - common_ut;
            }
            for &u in nt.iter().filter(|&&u| u != s) {
                let ku = deg(u);
                let (common_us, _) = common(&neighborhoods[u], ns, false);
                let us = is_edge(u, s) as i128;
                n_paths_5 += (ks - 1 - us) * (ku - 1 - us) + 1 - common_us;
                n_cycles_4 += common_us;
            }
            n_cycles_4 -= kt - 1;

            let (common_st, deg_sum_st) = common(ns, nt, true);

            paw += deg_sum_st - 2 * common_st;
            pair_c3_l2 += common_st * (m - ks - kt + 3) - deg_sum_st;

            phi_1 -= ks * kt * (ks + kt);
            phi_2 += (ks + kt)
                * (sum_sq - (ks * (ks - 1) + kt * (kt - 1)) - xi[s] - xi[t]);

            mu += common_st;

            lambda_1 += (kt - 1) * (xi[s] - kt) + (ks - 1) * (xi[t] - ks);
            lambda_1 -= 2 * deg_sum_st;

            lambda_2 += (ks + kt) * ((ks - 1) * (kt - 1) - common_st);
        }
    }

    debug_assert_eq!(phi_2 % 2, 0);
    debug_assert_eq!(n_cycles_4 % 4, 0);
    debug_assert_eq!(n_paths_5 % 2, 0);
    debug_assert_eq!(pair_c3_l2 % 3, 0);

    lambda_2 += lambda_1;
    phi_2 /= 2;
    let n_paths_4 = m - sum_sq + psi - mu;
    n_cycles_4 /= 4;
    n_paths_5 /= 2;
    pair_c3_l2 /= 3;

    let f = |x: i128| x as f64;
    let m_f = m as f64;

    f(q) * (2.0 * m_f + 4.0) / 45.0
        + f(kg) / 90.0
        - f(n_paths_4) * (2.0 * m_f + 7.0) / 180.0
        - f(n_paths_5) / 180.0
        - f(n_cycles_4) / 15.0
        - f(lambda_1) / 60.0
        + f(lambda_2) / 180.0
        - f(phi_1) / 90.0
        + f(phi_2) / 180.0
        + f(paw) / 30.0
        + f(pair_c3_l2) / 30.0
}

/// V[D] over uniformly random arrangements
///
/// Assembled from the exact moments of the three kinds of edge pairs:
/// a single edge, two edges sharing an endpoint, two independent edges.
/// Each moment is an exact integer sum over position differences.
pub fn var_sum_edge_lengths<G: Graph>(g: &G) -> f64 {
    let n = g.num_nodes();
    if n < 2 || g.num_edges() == 0 {
        return 0.0;
    }
    let ni = n as i128;
    let m = g.num_edges() as i128;

    // single-edge moments over distinct position pairs
    // t1_sum = Σ_d d·#{pairs at distance d},  t2_sum the same with d²
    let mut t1_sum: i128 = 0;
    let mut t2_sum: i128 = 0;
    for d in 1..ni {
        let ways = 2 * (ni - d);
        t1_sum += d * ways;
        t2_sum += d * d * ways;
    }
    let pairs = ni * (ni - 1);
    let e_len = t1_sum as f64 / pairs as f64;
    let e_len_sq = t2_sum as f64 / pairs as f64;

    // shared-endpoint moment: Σ_x (S1(x)² − S2(x)) over positions 1..n,
    // S1/S2 the plain and squared distance sums from x
    let mut triples_sum: i128 = 0;
    {
        // prefix sums of squares for S2
        let sq_prefix: Vec<i128> = {
            let mut p = vec![0i128; n + 1];
            for d in 1..=ni {
                p[d as usize] = p[d as usize - 1] + d * d;
            }
            p
        };
        for x in 1..=ni {
            let left = x - 1;
            let right = ni - x;
            let s1 = left * x / 2 + right * (right + 1) / 2;
            let s2 = sq_prefix[left as usize] + sq_prefix[right as usize];
            triples_sum += s1 * s1 - s2;
        }
    }

    // independent-pair moment, from the square of the all-pairs sum
    let quad_sum = t1_sum * t1_sum - 2 * t2_sum - 4 * triples_sum;

    let num_shared: i128 = (0..n)
        .map(|u| {
            let k = g.degree(u) as i128;
            k * (k - 1) / 2
        })
        .sum();
    let num_indep = m * (m - 1) / 2 - num_shared;

    let var_single = e_len_sq - e_len * e_len;
    let mut variance = m as f64 * var_single;

    if num_shared > 0 {
        let t1 = triples_sum as f64 / (ni * (ni - 1) * (ni - 2)) as f64;
        variance += 2.0 * num_shared as f64 * (t1 - e_len * e_len);
    }
    if num_indep > 0 {
        let t0 = quad_sum as f64 / (ni * (ni - 1) * (ni - 2) * (ni - 3)) as f64;
        variance += 2.0 * num_indep as f64 * (t0 - e_len * e_len);
    }
    variance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::UndirectedGraph;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn q_of_small_graphs() {
        let p4 = UndirectedGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(size_q(&p4), 1);
        let star =
            UndirectedGraph::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
        assert_eq!(size_q(&star), 0);
    }

    #[test]
    fn moments_of_paths() {
        let p3 = UndirectedGraph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        // D over the 6 arrangements of P3 takes values {2,3,3,3,3,4}
        assert!(close(exp_sum_edge_lengths(&p3), 8.0 / 3.0));
        assert!(close(var_sum_edge_lengths(&p3), 2.0 / 9.0));
        // C is identically zero: both edges share a vertex
        assert!(close(exp_num_crossings(&p3), 0.0));
        assert!(close(var_num_crossings(&p3), 0.0));
    }

    #[test]
    fn variance_of_crossings_p4() {
        // one independent pair, crossing with probability 1/3
        let p4 = UndirectedGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        assert!(close(exp_num_crossings(&p4), 1.0 / 3.0));
        assert!(close(var_num_crossings(&p4), 2.0 / 9.0));
    }

    #[test]
    fn brute_force_check_var_d_p4() {
        // exhaustive: D over all 24 arrangements of P4
        let p4 = UndirectedGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let mut perm = vec![0usize; 4];
        let mut ds: Vec<f64> = Vec::new();
        fn rec(
            depth: usize,
            used: &mut [bool; 4],
            perm: &mut Vec<usize>,
            g: &UndirectedGraph,
            ds: &mut Vec<f64>,
        ) {
            if depth == 4 {
                let arr =
                    crate::linarr::LinearArrangement::from_direct(perm.clone()).unwrap();
                ds.push(crate::linarr::sum_edge_lengths(g, Some(&arr)) as f64);
                return;
            }
            for p in 0..4 {
                if !used[p] {
                    used[p] = true;
                    perm[depth] = p;
                    rec(depth + 1, used, perm, g, ds);
                    used[p] = false;
                }
            }
        }
        rec(0, &mut [false; 4], &mut perm, &p4, &mut ds);
        let mean = ds.iter().sum::<f64>() / ds.len() as f64;
        let var = ds.iter().map(|d| (d - mean) * (d - mean)).sum::<f64>() / ds.len() as f64;
        assert!(close(exp_sum_edge_lengths(&p4), mean));
        assert!(close(var_sum_edge_lengths(&p4), var));
    }
}
