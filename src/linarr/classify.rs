//! Classification of syntactic dependency structures
//!
//! Given a rooted tree and an arrangement, decides membership in the
//! classes projective, planar, well-nested with gap degree at most 1
//! (WG1) and 1-endpoint-crossing (EC1). Projectivity implies planarity,
//! which implies both WG1 and EC1; the classifier always reports every
//! implied class.

use super::{num_crossings, AlgorithmC, LinearArrangement};
use crate::basic_types::{Node, Position};
use crate::graphs::{Graph, RootedTree};
use crate::sorting::bit_sort;

/// The classes a rooted tree under an arrangement may belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntacticDependencyTreeClass {
    /// Planar and the root is not covered
    Projective,
    /// No two edges cross
    Planar,
    /// Well nested, every yield with at most one discontinuity
    WG1,
    /// Every edge's crossing edges share an endpoint
    EC1,
    /// None of the above could be established
    Unknown,
}

const NUM_CLASSES: usize = 5;

/// Answer of [`classify`]: a bitset over the classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeClassification {
    flags: [bool; NUM_CLASSES],
}

impl TreeClassification {
    fn new() -> Self {
        let mut flags = [false; NUM_CLASSES];
        flags[SyntacticDependencyTreeClass::Unknown as usize] = true;
        Self { flags }
    }

    fn set(&mut self, class: SyntacticDependencyTreeClass) {
        self.flags[class as usize] = true;
        if class == SyntacticDependencyTreeClass::Projective {
            self.flags[SyntacticDependencyTreeClass::Planar as usize] = true;
        }
        if self.flags[SyntacticDependencyTreeClass::Planar as usize] {
            self.flags[SyntacticDependencyTreeClass::EC1 as usize] = true;
            self.flags[SyntacticDependencyTreeClass::WG1 as usize] = true;
        }
        self.flags[SyntacticDependencyTreeClass::Unknown as usize] = false;
    }

    fn unset(&mut self, class: SyntacticDependencyTreeClass) {
        self.flags[class as usize] = false;
    }

    /// Does the structure belong to `class`?
    pub fn is(&self, class: SyntacticDependencyTreeClass) -> bool {
        self.flags[class as usize]
    }
}

/// Classify the structure of `t` under `arr` (`None` = identity)
///
/// `crossings` may pass a precomputed C to avoid recomputation.
///
/// # Panics
/// If `t` is not a complete rooted tree.
pub fn classify(
    t: &RootedTree,
    arr: Option<&LinearArrangement>,
    crossings: Option<u64>,
) -> TreeClassification {
    assert!(t.is_rooted_tree(), "classify - input is not a rooted tree");

    let n = t.num_nodes();
    let mut classes = TreeClassification::new();
    if n == 0 {
        return classes;
    }

    if n <= 2 {
        classes.set(SyntacticDependencyTreeClass::Projective);
        return classes;
    }

    if n == 3 {
        // C is trivially zero; only the root coverage matters
        if is_root_covered(t, arr) {
            classes.set(SyntacticDependencyTreeClass::Planar);
        } else {
            classes.set(SyntacticDependencyTreeClass::Projective);
        }
        return classes;
    }

    let c = crossings.unwrap_or_else(|| num_crossings(t, arr, AlgorithmC::Ladder));

    // the artificial vertex covers the root from the outside; EC1 is
    // decided on the extended tree
    let (ext, ext_arr) = extend_with_artificial_root(t, arr);

    if c == 0 {
        if is_root_covered(t, arr) {
            classes.set(SyntacticDependencyTreeClass::Planar);
        } else {
            classes.set(SyntacticDependencyTreeClass::Projective);
        }

        // crossings that involve only the artificial edge
        let ext_c = num_crossings(&ext, Some(&ext_arr), AlgorithmC::Ladder);
        if ext_c > 0 && !is_1ec(&ext, &ext_arr) {
            classes.unset(SyntacticDependencyTreeClass::EC1);
        }
        return classes;
    }

    if is_wg1(t, arr) {
        classes.set(SyntacticDependencyTreeClass::WG1);
    }
    if is_1ec(&ext, &ext_arr) {
        classes.set(SyntacticDependencyTreeClass::EC1);
    }
    classes
}

fn position_of(arr: Option<&LinearArrangement>, u: Node) -> Position {
    match arr {
        None => u,
        Some(a) => a.position_of(u),
    }
}

/// Is some edge of `t` strictly covering the root?
pub fn is_root_covered(t: &RootedTree, arr: Option<&LinearArrangement>) -> bool {
    let pr = position_of(arr, t.root());
    for (u, v) in t.edges() {
        let (a, b) = {
            let (pu, pv) = (position_of(arr, u), position_of(arr, v));
            if pu < pv {
                (pu, pv)
            } else {
                (pv, pu)
            }
        };
        if a < pr && pr < b {
            return true;
        }
    }
    false
}

fn extend_with_artificial_root(
    t: &RootedTree,
    arr: Option<&LinearArrangement>,
) -> (RootedTree, LinearArrangement) {
    let n = t.num_nodes();
    let mut ext = RootedTree::new(1);
    ext.set_root(0).expect("vertex 0 exists");
    ext.disjoint_union(t, true).expect("both roots are set");

    let mut ext_arr = LinearArrangement::zeroed(n + 1);
    ext_arr.assign(0, 0);
    for u in 0..n {
        ext_arr.assign(u + 1, position_of(arr, u) + 1);
    }
    (ext, ext_arr)
}

// yields[u]: sorted positions of the subtree of u
fn collect_yields(
    t: &RootedTree,
    arr: Option<&LinearArrangement>,
    u: Node,
    yields: &mut Vec<Vec<Position>>,
) {
    yields[u].push(position_of(arr, u));
    for &v in t.children(u) {
        collect_yields(t, arr, v, yields);
        let child_yield = yields[v].clone();
        yields[u].extend(child_yield);
    }
    let n = t.num_nodes();
    let mut y = std::mem::take(&mut yields[u]);
    bit_sort(&mut y, n);
    yields[u] = y;
}

fn is_wg1(t: &RootedTree, arr: Option<&LinearArrangement>) -> bool {
    let n = t.num_nodes();
    let mut yields = vec![Vec::new(); n];
    collect_yields(t, arr, t.root(), &mut yields);

    let max_discontinuities = yields
        .iter()
        .map(|y| y.windows(2).filter(|w| w[1] - w[0] > 1).count())
        .max()
        .unwrap_or(0);
    if max_discontinuities != 1 {
        return false;
    }

    // no two vertex-disjoint subtrees may have crossing yields
    for u in 0..n {
        for v in u + 1..n {
            if t.subtree_contains_node(u, v) || t.subtree_contains_node(v, u) {
                continue;
            }
            let yu = &yields[u];
            let yv = &yields[v];
            for i1 in 0..yu.len() {
                for i2 in i1 + 1..yu.len() {
                    let (a, b) = (yu[i1].min(yu[i2]), yu[i1].max(yu[i2]));
                    for j1 in 0..yv.len() {
                        for j2 in j1 + 1..yv.len() {
                            let (c, d) = (yv[j1].min(yv[j2]), yv[j1].max(yv[j2]));
                            let cross =
                                (a < c && c < b && b < d) || (c < a && a < d && d < b);
                            if cross {
                                return false;
                            }
                        }
                    }
                }
            }
        }
    }
    true
}

// 1-endpoint-crossing on the extended tree: all edges crossing any
// fixed edge must share a vertex
fn is_1ec(t: &RootedTree, arr: &LinearArrangement) -> bool {
    let mut one_ec = false;

    for (s, tt) in t.edges() {
        let (ps, pt) = {
            let (a, b) = (arr.position_of(s), arr.position_of(tt));
            if a < b {
                (a, b)
            } else {
                (b, a)
            }
        };

        // edges crossing {s,t}
        let mut crossing: Vec<(Node, Node)> = Vec::new();
        for pu in ps + 1..pt {
            let u = arr.node_at(pu);
            let mut incident: Vec<Node> = t.children(u).to_vec();
            if u != t.root() {
                incident.push(t.parent(u).expect("non-root has a parent"));
            }
            for v in incident {
                let pv = arr.position_of(v);
                if pv < ps || pt < pv {
                    crossing.push(if u < v { (u, v) } else { (v, u) });
                }
            }
        }

        if crossing.len() == 1 {
            one_ec = true;
        } else if crossing.len() >= 2 {
            let mut common: std::collections::BTreeSet<Node> = Default::default();
            for (i, &(ss, st)) in crossing.iter().enumerate() {
                for &(us, ut) in &crossing[i + 1..] {
                    let shared =
                        ss == us || ss == ut || st == us || st == ut;
                    if !shared {
                        return false;
                    }
                    if ss == us || ss == ut {
                        common.insert(ss);
                    }
                    if st == us || st == ut {
                        common.insert(st);
                    }
                }
            }
            if common.len() == 1 {
                one_ec = true;
            } else {
                // two or more shared vertices: outside the class
                return false;
            }
        }
    }

    one_ec
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::FreeTree;

    fn rooted(n: usize, edges: &[(usize, usize)], root: usize) -> RootedTree {
        let t = FreeTree::from_edges(n, edges).unwrap();
        RootedTree::from_free_tree(&t, root).unwrap()
    }

    #[test]
    fn path_identity_is_projective() {
        let t = rooted(4, &[(0, 1), (1, 2), (2, 3)], 0);
        let classes = classify(&t, None, None);
        assert!(classes.is(SyntacticDependencyTreeClass::Projective));
        assert!(classes.is(SyntacticDependencyTreeClass::Planar));
        assert!(classes.is(SyntacticDependencyTreeClass::WG1));
        assert!(classes.is(SyntacticDependencyTreeClass::EC1));
        assert!(!classes.is(SyntacticDependencyTreeClass::Unknown));
    }

    #[test]
    fn small_trees_and_root_coverage() {
        // both edges of P3 are incident to the center, so rooting there
        // leaves the root uncovered
        let center = rooted(3, &[(0, 1), (1, 2)], 1);
        let classes = classify(&center, None, None);
        assert!(classes.is(SyntacticDependencyTreeClass::Projective));

        // rooted at the leaf 0 and arranged 1 0 2, the root sits under
        // the edge {1, 2}: planar but not projective
        let leaf_root = rooted(3, &[(0, 1), (1, 2)], 0);
        let arr = LinearArrangement::from_inverse(vec![1, 0, 2]).unwrap();
        assert!(is_root_covered(&leaf_root, Some(&arr)));
        let classes = classify(&leaf_root, Some(&arr), None);
        assert!(classes.is(SyntacticDependencyTreeClass::Planar));
        assert!(!classes.is(SyntacticDependencyTreeClass::Projective));
    }

    #[test]
    fn crossing_arrangement_loses_planarity() {
        // star with two 2-chains: 0-1-2, 0-3-4, rooted at 0
        let t = rooted(5, &[(0, 1), (1, 2), (0, 3), (3, 4)], 0);
        // interleave the chains: 0 1 3 2 4 — edges (1,2) and (3,4) cross
        let arr = LinearArrangement::from_inverse(vec![0, 1, 3, 2, 4]).unwrap();
        let c = num_crossings(&t, Some(&arr), AlgorithmC::BruteForce);
        assert_eq!(c, 1);
        let classes = classify(&t, Some(&arr), Some(c));
        assert!(!classes.is(SyntacticDependencyTreeClass::Planar));
        assert!(!classes.is(SyntacticDependencyTreeClass::Projective));
        // a single crossing always leaves EC1; the two chains' yields
        // interleave, so well-nestedness is lost
        assert!(classes.is(SyntacticDependencyTreeClass::EC1));
        assert!(!classes.is(SyntacticDependencyTreeClass::WG1));
        assert!(!classes.is(SyntacticDependencyTreeClass::Unknown));
    }
}
