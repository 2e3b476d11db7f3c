use linarr::graphs::{FreeTree, Graph, RootedTree};
use linarr::linarr::dmin::projective;
use linarr::linarr::{
    max_sum_edge_lengths, max_sum_edge_lengths_1_thistle, max_sum_edge_lengths_bipartite,
    max_sum_edge_lengths_planar, max_sum_edge_lengths_projective, min_sum_edge_lengths,
    min_sum_edge_lengths_bipartite, min_sum_edge_lengths_planar,
    min_sum_edge_lengths_projective, num_crossings, sum_edge_lengths, AlgorithmC,
    AlgorithmDmin,
};

mod common;

#[test]
fn optima_match_brute_force_on_the_zoo() {
    for t in common::tree_zoo() {
        let (bf_min, bf_max) = common::brute_force_extrema(&t);

        for algorithm in [AlgorithmDmin::Shiloach, AlgorithmDmin::Chung] {
            let (cost, arr) = min_sum_edge_lengths(&t, algorithm);
            assert_eq!(cost, bf_min, "{:?} on {:?}", algorithm, t.edges());
            assert_eq!(sum_edge_lengths(&t, Some(&arr)), cost);
            assert!(arr.is_arrangement());
        }

        let (cost, arr) = max_sum_edge_lengths(&t);
        assert_eq!(cost, bf_max, "maximum on {:?}", t.edges());
        assert_eq!(sum_edge_lengths(&t, Some(&arr)), cost);
    }
}

#[test]
fn planar_optima_realize_their_value_without_crossings() {
    for t in common::tree_zoo() {
        let (min_cost, min_arr) = min_sum_edge_lengths_planar(&t);
        assert_eq!(sum_edge_lengths(&t, Some(&min_arr)), min_cost);
        assert_eq!(
            num_crossings(&t, Some(&min_arr), AlgorithmC::StackBased),
            0
        );

        let (max_cost, max_arr) = max_sum_edge_lengths_planar(&t);
        assert_eq!(sum_edge_lengths(&t, Some(&max_arr)), max_cost);
        assert_eq!(
            num_crossings(&t, Some(&max_arr), AlgorithmC::StackBased),
            0
        );
    }
}

#[test]
fn constraint_chain_orders_the_optima() {
    for t in common::tree_zoo() {
        let unconstrained_min = min_sum_edge_lengths(&t, AlgorithmDmin::Shiloach).0;
        let planar_min = min_sum_edge_lengths_planar(&t).0;
        let bipartite_min = min_sum_edge_lengths_bipartite(&t).0;

        let unconstrained_max = max_sum_edge_lengths(&t).0;
        let planar_max = max_sum_edge_lengths_planar(&t).0;
        let bipartite_max = max_sum_edge_lengths_bipartite(&t).0;
        let thistle_max = max_sum_edge_lengths_1_thistle(&t).0;

        // smaller class, larger minimum / smaller maximum
        assert!(unconstrained_min <= planar_min);
        assert!(unconstrained_min <= bipartite_min);
        assert!(planar_max <= unconstrained_max);
        assert!(bipartite_max <= unconstrained_max);
        assert!(thistle_max <= unconstrained_max);

        // per-root projective bounds around the planar ones
        for root in 0..t.num_nodes() {
            let rt = RootedTree::from_free_tree(&t, root).unwrap();
            let projective_min = min_sum_edge_lengths_projective(&rt).0;
            let projective_max = max_sum_edge_lengths_projective(&rt).0;
            assert!(planar_min <= projective_min, "root {}", root);
            assert!(projective_max <= planar_max, "root {}", root);

            // any D sits between the extremes of its class
            let identity_d = sum_edge_lengths(&rt, None);
            assert!(unconstrained_min <= identity_d);
            assert!(identity_d <= unconstrained_max);
        }
    }
}

#[test]
fn interval_and_displacement_methods_agree_everywhere() {
    for t in common::tree_zoo() {
        for root in 0..t.num_nodes() {
            let rt = RootedTree::from_free_tree(&t, root).unwrap();
            let (a, arr_a) = projective::intervals(&rt);
            let (b, arr_b) = projective::displacement(&rt);
            assert_eq!(a, b, "root {} of {:?}", root, t.edges());
            assert_eq!(sum_edge_lengths(&rt, Some(&arr_a)), a);
            assert_eq!(sum_edge_lengths(&rt, Some(&arr_b)), b);
            assert_eq!(projective::intervals_cost(&rt), a);
        }
    }
}

#[test]
fn projective_optima_keep_the_root_uncovered() {
    use linarr::linarr::classify::is_root_covered;

    for t in common::tree_zoo() {
        for root in 0..t.num_nodes() {
            let rt = RootedTree::from_free_tree(&t, root).unwrap();
            let (_, min_arr) = min_sum_edge_lengths_projective(&rt);
            assert_eq!(num_crossings(&rt, Some(&min_arr), AlgorithmC::Ladder), 0);
            assert!(!is_root_covered(&rt, Some(&min_arr)));

            let (_, max_arr) = max_sum_edge_lengths_projective(&rt);
            assert_eq!(num_crossings(&rt, Some(&max_arr), AlgorithmC::Ladder), 0);
            assert!(!is_root_covered(&rt, Some(&max_arr)));
        }
    }
}

#[test]
fn projective_extrema_match_filtered_brute_force() {
    use linarr::linarr::classify::is_root_covered;

    for t in common::tree_zoo() {
        let n = t.num_nodes();
        if n > 6 {
            continue;
        }
        for root in 0..n {
            let rt = RootedTree::from_free_tree(&t, root).unwrap();
            let mut best_min = u64::MAX;
            let mut best_max = 0;
            common::for_every_arrangement(n, |arr| {
                let projective = num_crossings(&rt, Some(arr), AlgorithmC::BruteForce)
                    == 0
                    && !is_root_covered(&rt, Some(arr));
                if projective {
                    let d = sum_edge_lengths(&rt, Some(arr));
                    best_min = best_min.min(d);
                    best_max = best_max.max(d);
                }
            });
            assert_eq!(
                min_sum_edge_lengths_projective(&rt).0,
                best_min,
                "min at root {} of {:?}",
                root,
                t.edges()
            );
            assert_eq!(
                max_sum_edge_lengths_projective(&rt).0,
                best_max,
                "max at root {} of {:?}",
                root,
                t.edges()
            );
        }
    }
}

#[test]
fn one_thistle_maximum_matches_filtered_brute_force() {
    use linarr::linarr::level_signature_per_vertex;

    for t in common::tree_zoo() {
        let n = t.num_nodes();
        if n > 6 {
            continue;
        }
        let mut best: Option<u64> = None;
        common::for_every_arrangement(n, |arr| {
            let levels = level_signature_per_vertex(&t, Some(arr));
            let thistles = (0..n)
                .filter(|&u| levels[u].unsigned_abs() != t.degree(u) as u64)
                .count();
            if thistles == 1 {
                let d = sum_edge_lengths(&t, Some(arr));
                best = Some(best.map_or(d, |b| b.max(d)));
            }
        });
        // trees of 2 vertices admit no thistle at all
        let Some(expected) = best else {
            continue;
        };
        assert_eq!(
            max_sum_edge_lengths_1_thistle(&t).0,
            expected,
            "{:?}",
            t.edges()
        );
    }
}

#[test]
fn known_values_of_small_trees() {
    // P4: D over identity is 3, the maximum is 7
    let p4 = FreeTree::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
    assert_eq!(min_sum_edge_lengths(&p4, AlgorithmDmin::Shiloach).0, 3);
    assert_eq!(max_sum_edge_lengths(&p4).0, 7);
    assert_eq!(max_sum_edge_lengths_planar(&p4).0, 6);

    // the star K_{1,4}
    let star = FreeTree::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
    assert_eq!(min_sum_edge_lengths(&star, AlgorithmDmin::Chung).0, 6);
    let rt = RootedTree::from_free_tree(&star, 0).unwrap();
    assert_eq!(min_sum_edge_lengths_projective(&rt).0, 6);
    assert_eq!(max_sum_edge_lengths(&star).0, 10);

    // the 6-vertex caterpillar: degree sums force 7; the planar maximum
    // meets the caterpillar closed form n(n-1)/2, and hubs at both ends
    // push the unconstrained maximum to 19
    let cat = FreeTree::from_edges(6, &[(0, 1), (1, 2), (2, 3), (1, 4), (2, 5)]).unwrap();
    assert_eq!(min_sum_edge_lengths(&cat, AlgorithmDmin::Shiloach).0, 7);
    assert_eq!(min_sum_edge_lengths_planar(&cat).0, 7);
    assert_eq!(max_sum_edge_lengths_planar(&cat).0, 15);
    assert_eq!(max_sum_edge_lengths(&cat).0, 19);
    assert_eq!(max_sum_edge_lengths_bipartite(&cat).0, 19);
}
