//! Branch and bound for the unconstrained maximum of D
//!
//! The search fills an arrangement position by position; candidates for
//! the next position are the *border* vertices (unassigned with an
//! assigned neighbor). Placing a vertex freezes its level value, moves
//! its edges across the partition E_s → E_ps → E_p, and extends the cut
//! signature; all of it is undone exactly on backtrack.
//!
//! Branches die by any of:
//! * an upper bound (current D plus a cut-signature bound over the
//!   multiset of unassigned degrees) below the incumbent,
//! * a level inversion in the prefix, or two adjacent vertices of equal
//!   level at consecutive positions,
//! * a second thistle on one branchless path, a thistle on an antenna,
//!   or an over-budget count of ±2 levels against a path's prediction,
//! * a placed vertex contradicting its predicted level value,
//! * a contradiction while propagating predicted level values along an
//!   antenna or a bridge.
//!
//! Predictions carry the origin that set them. Every propagation logs
//! what it touched into the frame's roll-back lists, which the
//! backtrack replays; the predictions themselves are recomputed by
//! later propagations.

use crate::basic_types::Node;
use crate::containers::MovableSet;
use crate::graphs::{FreeTree, Graph};
use crate::linarr::LinearArrangement;
use crate::properties::{branchless_paths, BipartiteColoring, BranchlessPaths, BLUE};

/// Which propagation rule set a predicted level value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LvOrigin {
    /// No prediction
    None,
    /// The vertex's own (frozen) level value
    Own,
    /// Propagated from the leaf of an antenna
    AntennaLeaf,
    /// Propagated from an internal vertex of an antenna
    AntennaInternal,
    /// Propagated from the hub of an antenna
    AntennaHub,
    /// Propagated from the first hub of a bridge
    BridgeHub1,
    /// Propagated from the second hub of a bridge
    BridgeHub2,
    /// Propagated from the lowest internal vertex, at level 0
    BridgeLowest0,
    /// Propagated from the lowest internal vertex, at level ±2
    BridgeLowestPm2,
    /// Propagated from an internal vertex left of the lowest
    BridgeInternalLeft,
    /// Propagated from an internal vertex right of the lowest
    BridgeInternalRight,
}

#[derive(Debug, Clone, Default)]
struct PathInfo {
    num_assigned: u64,
    num_thistles: u64,
    num_p2: u64,
    num_m2: u64,
    p2_to_assign: Option<u64>,
    m2_to_assign: Option<u64>,
}

// everything one recursion frame may have to take back
#[derive(Default)]
struct Frame {
    preds: Vec<Node>,
    budget_paths: Vec<usize>,
}

/// Maximum arrangement of `t` and its cost
pub(crate) fn maximize(t: &FreeTree) -> (u64, LinearArrangement) {
    let (best, mut arrs) = solve(t, false);
    (best, arrs.pop().expect("a maximum arrangement exists"))
}

/// All maximum arrangements found by the canonical search, with the cost
///
/// # Panics
/// If `t` is not a complete tree.
pub fn maximize_all(t: &FreeTree) -> (u64, Vec<LinearArrangement>) {
    assert!(t.is_tree(), "maximize_all - input is not a tree");
    solve(t, true)
}

fn solve(t: &FreeTree, collect_all: bool) -> (u64, Vec<LinearArrangement>) {
    let n = t.num_nodes();
    if n <= 2 {
        let arr = LinearArrangement::identity(n);
        return ((n as u64).saturating_sub(1), vec![arr]);
    }

    let mut solver = Solver::new(t, collect_all);
    for first in 0..n {
        solver.expand(first, 0, 0, 0);
    }
    debug_assert!(!solver.best_arrs.is_empty());
    (solver.best, solver.best_arrs)
}

struct Solver<'a> {
    t: &'a FreeTree,
    n: usize,
    // neighbor lists annotated with edge identifiers
    adj: Vec<Vec<(Node, usize)>>,
    colors: BipartiteColoring,
    paths: BranchlessPaths,

    arr: LinearArrangement,
    assigned: Vec<bool>,
    left_degree: Vec<u64>,
    right_degree: Vec<u64>,
    level: Vec<i64>,
    num_assigned_neighbors: Vec<usize>,
    num_unassigned_neighbors: Vec<usize>,
    border: MovableSet,
    e_p: MovableSet,
    e_ps: MovableSet,
    e_s: MovableSet,
    cut_values: Vec<u64>,
    num_assigned_blue: usize,
    num_assigned_red: usize,

    path_info: Vec<PathInfo>,
    predicted: Vec<Option<i64>>,
    origin: Vec<LvOrigin>,

    best: u64,
    best_arrs: Vec<LinearArrangement>,
    collect_all: bool,
}

impl<'a> Solver<'a> {
    fn new(t: &'a FreeTree, collect_all: bool) -> Self {
        let n = t.num_nodes();
        let m = t.num_edges();

        let mut adj = vec![Vec::new(); n];
        let mut edge_id = 0usize;
        for u in 0..n {
            for &v in t.neighbors(u) {
                if u < v {
                    adj[u].push((v, edge_id));
                    adj[v].push((u, edge_id));
                    edge_id += 1;
                }
            }
        }

        let mut e_s = MovableSet::new(m);
        for id in 0..m {
            e_s.insert(id);
        }

        let paths = branchless_paths(t);
        let path_info = vec![PathInfo::default(); paths.paths.len()];

        // the bipartite optimum is a valid arrangement, so its value
        // seeds the incumbent
        let seed = crate::linarr::bipartite::maximize(t).0;

        Self {
            t,
            n,
            adj,
            colors: BipartiteColoring::new(t).expect("trees are bipartite"),
            paths,
            arr: LinearArrangement::zeroed(n),
            assigned: vec![false; n],
            left_degree: vec![0; n],
            right_degree: vec![0; n],
            level: vec![0; n],
            num_assigned_neighbors: vec![0; n],
            num_unassigned_neighbors: (0..n).map(|u| t.degree(u)).collect(),
            border: MovableSet::new(n),
            e_p: MovableSet::new(m),
            e_ps: MovableSet::new(m),
            e_s,
            cut_values: vec![0; n],
            num_assigned_blue: 0,
            num_assigned_red: 0,
            path_info,
            predicted: vec![None; n],
            origin: vec![LvOrigin::None; n],
            best: seed,
            best_arrs: Vec::new(),
            collect_all,
        }
    }

    fn is_assigned(&self, u: Node) -> bool {
        self.assigned[u]
    }

    fn update_state(&mut self, u: Node, pos: usize, d_p: &mut u64, d_ps_m: &mut u64) {
        self.assigned[u] = true;
        self.arr.assign(u, pos);

        if self.colors.color(u) == BLUE {
            self.num_assigned_blue += 1;
        } else {
            self.num_assigned_red += 1;
        }

        let neighbors = std::mem::take(&mut self.adj[u]);
        for &(v, e) in &neighbors {
            self.num_unassigned_neighbors[v] -= 1;
            self.num_assigned_neighbors[v] += 1;
            debug_assert_eq!(
                self.num_unassigned_neighbors[v] + self.num_assigned_neighbors[v],
                self.t.degree(v)
            );

            if self.assigned[v] {
                let pv = self.arr.position_of(v);
                debug_assert!(pv < pos);
                let len = (pos - pv) as u64;
                *d_p += len;
                self.e_p.insert(e);
                self.e_ps.remove(e);
                *d_ps_m -= len;
            } else {
                self.right_degree[u] += 1;
                self.left_degree[v] += 1;
                self.e_ps.insert(e);
                self.e_s.remove(e);
                self.border.insert(v);
            }
        }
        self.adj[u] = neighbors;

        self.border.remove(u);
        *d_ps_m += self.e_ps.len() as u64;

        self.level[u] = self.right_degree[u] as i64 - self.left_degree[u] as i64;

        if self.t.degree(u) <= 2 {
            let idx = self.paths.path_of[u];
            let info = &mut self.path_info[idx];
            match self.level[u] {
                0 => info.num_thistles += 1,
                2 => info.num_p2 += 1,
                -2 => info.num_m2 += 1,
                _ => {}
            }
            info.num_assigned += 1;
        }

        self.cut_values[pos] = if pos > 0 {
            (self.cut_values[pos - 1] as i64 + self.level[u]) as u64
        } else {
            debug_assert!(self.level[u] >= 0);
            self.level[u] as u64
        };
    }

    fn recover_state(&mut self, pos: usize) {
        let u = self.arr.node_at(pos);

        if self.colors.color(u) == BLUE {
            self.num_assigned_blue -= 1;
        } else {
            self.num_assigned_red -= 1;
        }

        if self.t.degree(u) <= 2 {
            let idx = self.paths.path_of[u];
            let info = &mut self.path_info[idx];
            match self.level[u] {
                0 => info.num_thistles -= 1,
                2 => info.num_p2 -= 1,
                -2 => info.num_m2 -= 1,
                _ => {}
            }
            info.num_assigned -= 1;
        }

        self.level[u] = 0;
        self.right_degree[u] = 0;

        let neighbors = std::mem::take(&mut self.adj[u]);
        for &(v, e) in &neighbors {
            self.num_unassigned_neighbors[v] += 1;
            self.num_assigned_neighbors[v] -= 1;

            if self.assigned[v] {
                self.e_p.remove(e);
                self.e_ps.insert(e);
            } else {
                debug_assert!(self.left_degree[v] > 0);
                self.left_degree[v] -= 1;
                self.e_ps.remove(e);
                self.e_s.insert(e);
                if self.num_assigned_neighbors[v] == 0 {
                    self.border.remove(v);
                }
            }
        }
        self.adj[u] = neighbors;

        if self.num_assigned_neighbors[u] > 0 {
            self.border.insert(u);
        }
        self.assigned[u] = false;
    }

    // ---- predicted level values ----------------------------------------

    fn try_predict(
        &mut self,
        v: Node,
        value: i64,
        origin: LvOrigin,
        frame: &mut Frame,
    ) -> bool {
        debug_assert_ne!(origin, LvOrigin::None);
        match self.predicted[v] {
            None => {
                self.predicted[v] = Some(value);
                self.origin[v] = origin;
                frame.preds.push(v);
                true
            }
            Some(existing) => existing == value,
        }
    }

    fn set_budgets(&mut self, idx: usize, p2: u64, m2: u64, frame: &mut Frame) {
        let info = &mut self.path_info[idx];
        if info.p2_to_assign.is_none() {
            frame.budget_paths.push(idx);
        } else {
            debug_assert_eq!(info.p2_to_assign, Some(p2));
            debug_assert_eq!(info.m2_to_assign, Some(m2));
        }
        info.p2_to_assign = Some(p2);
        info.m2_to_assign = Some(m2);
    }

    fn propagate_antenna_from_leaf(&mut self, u: Node, frame: &mut Frame) -> bool {
        let idx = self.paths.path_of[u];
        let seq = self.paths.paths[idx].seq().to_vec();
        let len = seq.len();
        let sign_u = self.level[u];

        if !self.try_predict(u, self.level[u], LvOrigin::Own, frame) {
            return false;
        }

        let mut num_p2 = 0u64;
        let mut num_m2 = 0u64;
        let forwards = seq[0] == u;

        let mut sign = -sign_u;
        let inner: Vec<Node> = if forwards {
            seq[1..len - 1].to_vec()
        } else {
            seq[1..len - 1].iter().rev().copied().collect()
        };
        for v in inner {
            let prediction = 2 * sign;
            if !self.try_predict(v, prediction, LvOrigin::AntennaLeaf, frame) {
                return false;
            }
            num_p2 += (prediction == 2) as u64;
            num_m2 += (prediction == -2) as u64;
            sign = -sign;
        }

        let far = if forwards { seq[len - 1] } else { seq[0] };
        if self.t.degree(far) == 1
            && !self.try_predict(far, sign, LvOrigin::AntennaLeaf, frame)
        {
            return false;
        }

        self.set_budgets(idx, num_p2, num_m2, frame);
        true
    }

    fn propagate_antenna_from_internal(&mut self, u: Node, frame: &mut Frame) -> bool {
        let idx = self.paths.path_of[u];
        let seq = self.paths.paths[idx].seq().to_vec();
        let len = seq.len();
        let pu = self.paths.pos_in_path[u];
        let sign_u: i64 = if self.level[u] > 0 { 1 } else { -1 };

        if !self.try_predict(u, self.level[u], LvOrigin::Own, frame) {
            return false;
        }

        let mut num_p2 = (self.level[u] == 2) as u64;
        let mut num_m2 = (self.level[u] == -2) as u64;

        let first_is_leaf = self.t.degree(seq[0]) == 1;
        let last_is_leaf = self.t.degree(seq[len - 1]) == 1;

        let ini = usize::from(!first_is_leaf);
        let mut sign = if pu % 2 == ini % 2 { sign_u } else { -sign_u };
        for &v in seq.iter().take(pu).skip(ini) {
            let prediction = sign * self.t.degree(v) as i64;
            if !self.try_predict(v, prediction, LvOrigin::AntennaInternal, frame) {
                return false;
            }
            num_p2 += (prediction == 2) as u64;
            num_m2 += (prediction == -2) as u64;
            sign = -sign;
        }

        let fin = len - usize::from(!last_is_leaf);
        sign = -sign_u;
        for &v in seq.iter().take(fin).skip(pu + 1) {
            let prediction = sign * self.t.degree(v) as i64;
            if !self.try_predict(v, prediction, LvOrigin::AntennaInternal, frame) {
                return false;
            }
            num_p2 += (prediction == 2) as u64;
            num_m2 += (prediction == -2) as u64;
            sign = -sign;
        }

        self.set_budgets(idx, num_p2, num_m2, frame);
        true
    }

    fn propagate_antenna_from_hub(
        &mut self,
        h: Node,
        w: Node,
        frame: &mut Frame,
    ) -> bool {
        debug_assert!(self.is_assigned(h));
        debug_assert!(!self.is_assigned(w));

        let idx = self.paths.path_of[w];
        let seq = self.paths.paths[idx].seq().to_vec();
        let len = seq.len();

        if !self.try_predict(h, self.level[h], LvOrigin::Own, frame) {
            return false;
        }
        let first = -(self.t.degree(w) as i64);
        if !self.try_predict(w, first, LvOrigin::AntennaHub, frame) {
            return false;
        }

        let mut num_p2 = (first == 2) as u64;
        let mut num_m2 = (first == -2) as u64;

        if self.t.degree(seq[len - 1]) == 1 {
            // the leaf lies at the far end of the sequence
            debug_assert_eq!(self.paths.pos_in_path[w], 1);
            let mut sign = 1i64;
            for &v in seq.iter().skip(2) {
                let prediction = sign * self.t.degree(v) as i64;
                if !self.try_predict(v, prediction, LvOrigin::AntennaHub, frame) {
                    return false;
                }
                num_p2 += (prediction == 2) as u64;
                num_m2 += (prediction == -2) as u64;
                sign = -sign;
            }
        } else {
            let pw = self.paths.pos_in_path[w];
            let mut sign: i64 = if pw % 2 == 0 { -1 } else { 1 };
            for &v in seq.iter().take(len - 2) {
                let prediction = sign * self.t.degree(v) as i64;
                if !self.try_predict(v, prediction, LvOrigin::AntennaHub, frame) {
                    return false;
                }
                num_p2 += (prediction == 2) as u64;
                num_m2 += (prediction == -2) as u64;
                sign = -sign;
            }
        }

        self.set_budgets(idx, num_p2, num_m2, frame);
        true
    }

    fn bridge_check_lowest(
        &mut self,
        idx: usize,
        origin: LvOrigin,
        frame: &mut Frame,
    ) -> bool {
        let seq = self.paths.paths[idx].seq();
        let len = seq.len();
        let w = self.paths.paths[idx].lowest_lexicographic();
        let pw = self.paths.pos_in_path[w];
        let wm1 = seq[pw - 1];
        let wp1 = seq[pw + 1];

        let (Some(level_m1), Some(level_p1)) = (self.predicted[wm1], self.predicted[wp1])
        else {
            return true;
        };

        let prediction = if len == 3 {
            -2
        } else if seq[1] == w {
            if level_p1 == 2 {
                -2
            } else {
                0
            }
        } else if seq[len - 2] == w {
            if level_m1 == 2 {
                -2
            } else {
                0
            }
        } else if level_m1 == level_p1 {
            -level_p1
        } else {
            0
        };

        self.try_predict(w, prediction, origin, frame)
    }

    fn propagate_bridge_from_hub(
        &mut self,
        h: Node,
        idx: usize,
        frame: &mut Frame,
    ) -> bool {
        let seq = self.paths.paths[idx].seq().to_vec();
        let len = seq.len();
        if len < 3 {
            return true;
        }
        let w = self.paths.paths[idx].lowest_lexicographic();

        if !self.try_predict(h, self.level[h], LvOrigin::Own, frame) {
            return false;
        }

        let from_h1 = seq[0] == h;
        let origin = if from_h1 {
            LvOrigin::BridgeHub1
        } else {
            LvOrigin::BridgeHub2
        };

        let mut sign = -1i64;
        if from_h1 {
            let mut i = 1;
            while i < len - 1 {
                let v = seq[i];
                if self.is_assigned(v) || self.predicted[v].is_some() || v == w {
                    break;
                }
                if !self.try_predict(v, 2 * sign, origin, frame) {
                    return false;
                }
                sign = -sign;
                i += 1;
            }
        } else {
            let mut i = len - 2;
            while i > 0 {
                let v = seq[i];
                if self.is_assigned(v) || self.predicted[v].is_some() || v == w {
                    break;
                }
                if !self.try_predict(v, 2 * sign, origin, frame) {
                    return false;
                }
                sign = -sign;
                i -= 1;
            }
        }

        self.bridge_check_lowest(idx, origin, frame)
    }

    fn propagate_bridge_from_lowest_0(&mut self, u: Node, frame: &mut Frame) -> bool {
        let idx = self.paths.path_of[u];
        let seq = self.paths.paths[idx].seq().to_vec();
        let len = seq.len();
        let pw = self.paths.pos_in_path[u];

        if !self.try_predict(u, 0, LvOrigin::Own, frame) {
            return false;
        }
        if len == 3 {
            return true;
        }

        let wm1 = seq[pw - 1];
        let wp1 = seq[pw + 1];

        if let Some(pred_m1) = self.predicted[wm1] {
            let mut sign: i64 = if pred_m1 == 2 { -1 } else { 1 };
            for &v in seq.iter().take(len - 1).skip(pw + 1) {
                if !self.try_predict(v, 2 * sign, LvOrigin::BridgeLowest0, frame) {
                    return false;
                }
                sign = -sign;
            }
        } else if let Some(pred_p1) = self.predicted[wp1] {
            let mut sign: i64 = if pred_p1 == 2 { -1 } else { 1 };
            let mut i = pw - 1;
            while i > 0 {
                if !self.try_predict(seq[i], 2 * sign, LvOrigin::BridgeLowest0, frame) {
                    return false;
                }
                sign = -sign;
                i -= 1;
            }
        }
        true
    }

    fn propagate_bridge_from_lowest_pm2(&mut self, u: Node, frame: &mut Frame) -> bool {
        let idx = self.paths.path_of[u];
        let seq = self.paths.paths[idx].seq().to_vec();
        let len = seq.len();
        let pw = self.paths.pos_in_path[u];

        if !self.try_predict(u, self.level[u], LvOrigin::Own, frame) {
            return false;
        }

        let mut p = pw - 1;
        let mut sign = -1i64;
        while p > 0 && self.predicted[seq[p]].is_none() {
            if !self.try_predict(seq[p], 2 * sign, LvOrigin::BridgeLowestPm2, frame) {
                return false;
            }
            sign = -sign;
            p -= 1;
        }
        if seq[p] != seq[0] {
            if let Some(existing) = self.predicted[seq[p]] {
                if existing != 2 * sign {
                    return false;
                }
            }
        }

        let mut p = pw + 1;
        let mut sign = -1i64;
        while p < len - 1 && self.predicted[seq[p]].is_none() {
            if !self.try_predict(seq[p], 2 * sign, LvOrigin::BridgeLowestPm2, frame) {
                return false;
            }
            sign = -sign;
            p += 1;
        }
        if seq[p] != seq[len - 1] {
            if let Some(existing) = self.predicted[seq[p]] {
                if existing != 2 * sign {
                    return false;
                }
            }
        }
        true
    }

    fn propagate_bridge_from_internal(&mut self, u: Node, frame: &mut Frame) -> bool {
        let idx = self.paths.path_of[u];
        let seq = self.paths.paths[idx].seq().to_vec();
        let len = seq.len();
        let w = self.paths.paths[idx].lowest_lexicographic();
        let pw = self.paths.pos_in_path[w];
        let pu = self.paths.pos_in_path[u];

        let origin = if pu < pw {
            LvOrigin::BridgeInternalLeft
        } else {
            LvOrigin::BridgeInternalRight
        };

        if !self.try_predict(u, self.level[u], LvOrigin::Own, frame) {
            return false;
        }

        let mut sign = -1i64;
        let mut i = pu + 1;
        while i < len - 1 && seq[i] != w {
            if !self.try_predict(seq[i], 2 * sign, origin, frame) {
                return false;
            }
            sign = -sign;
            i += 1;
        }

        sign = -1;
        let mut i = pu - 1;
        while i > 0 && seq[i] != w {
            if !self.try_predict(seq[i], 2 * sign, origin, frame) {
                return false;
            }
            sign = -sign;
            i -= 1;
        }

        self.bridge_check_lowest(idx, origin, frame)
    }

    // prune checks and propagation for the vertex just placed; false
    // kills the branch
    fn check_and_propagate(&mut self, u: Node, pos: usize, frame: &mut Frame) -> bool {
        // the level sequence of a maximum arrangement is non-increasing
        // and never flat across an edge
        if pos > 0 {
            let prev = self.arr.node_at(pos - 1);
            if self.level[prev] < self.level[u] {
                return false;
            }
            if self.level[prev] == self.level[u] && self.t.has_edge(prev, u) {
                return false;
            }
        }

        if let Some(predicted) = self.predicted[u] {
            if predicted != self.level[u] {
                return false;
            }
        }

        let deg = self.t.degree(u);

        if deg <= 2 {
            let idx = self.paths.path_of[u];
            {
                let info = &self.path_info[idx];
                if info.num_thistles >= 2 {
                    return false;
                }
                if let Some(budget) = info.p2_to_assign {
                    if info.num_p2 > budget {
                        return false;
                    }
                }
                if let Some(budget) = info.m2_to_assign {
                    if info.num_m2 > budget {
                        return false;
                    }
                }
            }

            let antenna = self.paths.paths[idx].is_antenna(self.t);
            if antenna && deg == 2 && self.level[u] == 0 {
                // antennas of maximum arrangements carry no thistle
                return false;
            }
            if self.predicted[u].is_none() {
                if antenna {
                    if deg == 1 {
                        return self.propagate_antenna_from_leaf(u, frame);
                    }
                    if self.level[u].abs() == 2 {
                        return self.propagate_antenna_from_internal(u, frame);
                    }
                } else {
                    let lowest = self.paths.paths[idx].lowest_lexicographic();
                    if deg == 2 && self.level[u] == 2 {
                        if u == lowest {
                            return self.propagate_bridge_from_lowest_pm2(u, frame);
                        }
                        return self.propagate_bridge_from_internal(u, frame);
                    }
                    if deg == 2 && self.level[u] == 0 && u == lowest {
                        return self.propagate_bridge_from_lowest_0(u, frame);
                    }
                }
            }
            return true;
        }

        // hubs push predictions into their incident paths
        let neighbors: Vec<Node> = self.t.neighbors(u).to_vec();
        for w in neighbors {
            if self.t.degree(w) > 2 {
                continue;
            }
            let idx = self.paths.path_of[w];
            if self.paths.paths[idx].is_antenna(self.t) {
                if !self.is_assigned(w)
                    && self.predicted[w].is_none()
                    && !self.propagate_antenna_from_hub(u, w, frame)
                {
                    return false;
                }
            } else if !self.propagate_bridge_from_hub(u, idx, frame) {
                return false;
            }
        }
        true
    }

    // an upper bound on the final D of any completion of this prefix
    fn upper_bound(&self, pos: usize, d_p: u64, d_ps_m: u64) -> u64 {
        let remaining = self.n - (pos + 1);
        if remaining == 0 {
            return d_p;
        }

        // degrees of the unassigned vertices, largest first
        let mut degrees: Vec<u64> = (0..self.n)
            .filter(|&v| !self.assigned[v])
            .map(|v| self.t.degree(v) as u64)
            .collect();
        degrees.sort_unstable_by(|a, b| b.cmp(a));
        debug_assert_eq!(degrees.len(), remaining);

        let mut prefix = vec![0u64; remaining + 1];
        for (i, &d) in degrees.iter().enumerate() {
            prefix[i + 1] = prefix[i] + d;
        }

        // the cut after the k-th future placement can neither grow
        // faster than the placed degrees allow nor exceed the degrees
        // still unplaced
        let cut = self.cut_values[pos];
        let mut future = 0u64;
        for k in 1..=remaining {
            future += (cut + prefix[k]).min(prefix[remaining - k]);
        }

        d_p + d_ps_m + future
    }

    fn record(&mut self, d: u64) {
        if d > self.best {
            self.best = d;
            self.best_arrs.clear();
            self.best_arrs.push(self.arr.clone());
        } else if d == self.best && (self.collect_all || self.best_arrs.is_empty()) {
            self.best_arrs.push(self.arr.clone());
        }
    }

    fn expand(&mut self, u: Node, pos: usize, d_p: u64, d_ps_m: u64) {
        let mut d_p = d_p;
        let mut d_ps_m = d_ps_m;
        self.update_state(u, pos, &mut d_p, &mut d_ps_m);

        let mut frame = Frame::default();
        let alive = self.check_and_propagate(u, pos, &mut frame)
            && self.upper_bound(pos, d_p, d_ps_m) >= self.best;

        if alive {
            if pos + 1 == self.n {
                debug_assert_eq!(d_ps_m, 0);
                debug_assert_eq!(self.cut_values[pos], 0);
                self.record(d_p);
            } else {
                let candidates: Vec<Node> = self.border.iter().collect();
                for v in candidates {
                    self.expand(v, pos + 1, d_p, d_ps_m);
                }
            }
        }

        for v in frame.preds {
            self.predicted[v] = None;
            self.origin[v] = LvOrigin::None;
        }
        for idx in frame.budget_paths {
            self.path_info[idx].p2_to_assign = None;
            self.path_info[idx].m2_to_assign = None;
        }
        self.recover_state(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linarr::sum_edge_lengths;

    // reference: try every arrangement
    fn brute_force_max(t: &FreeTree) -> u64 {
        let n = t.num_nodes();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut best = 0;
        permute(&mut perm, 0, &mut |p| {
            let arr = LinearArrangement::from_direct(p.to_vec()).unwrap();
            best = best.max(sum_edge_lengths(t, Some(&arr)));
        });
        best
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

    #[test]
    fn agrees_with_brute_force_on_small_trees() {
        let cases: Vec<(usize, Vec<(usize, usize)>)> = vec![
            (2, vec![(0, 1)]),
            (3, vec![(0, 1), (1, 2)]),
            (4, vec![(0, 1), (1, 2), (2, 3)]),
            (4, vec![(0, 1), (0, 2), (0, 3)]),
            (5, vec![(0, 1), (0, 2), (0, 3), (0, 4)]),
            (5, vec![(0, 1), (1, 2), (2, 3), (2, 4)]),
            (6, vec![(0, 1), (1, 2), (2, 3), (1, 4), (2, 5)]),
            (7, vec![(0, 1), (1, 2), (0, 3), (3, 4), (0, 5), (5, 6)]),
        ];
        for (n, edges) in cases {
            let t = FreeTree::from_edges(n, &edges).unwrap();
            let expected = brute_force_max(&t);
            let (cost, arr) = maximize(&t);
            assert_eq!(cost, expected, "n {} edges {:?}", n, edges);
            assert_eq!(sum_edge_lengths(&t, Some(&arr)), cost);
            assert!(arr.is_arrangement());
        }
    }

    #[test]
    fn state_is_recovered_exactly() {
        let t = FreeTree::from_edges(5, &[(0, 1), (1, 2), (2, 3), (2, 4)]).unwrap();
        let mut solver = Solver::new(&t, false);
        let mut d_p = 0;
        let mut d_ps_m = 0;
        solver.update_state(2, 0, &mut d_p, &mut d_ps_m);
        solver.update_state(1, 1, &mut d_p, &mut d_ps_m);
        assert_eq!(solver.e_p.len(), 1);
        assert_eq!(solver.e_ps.len(), 3);
        assert!(solver.border.contains(0));
        solver.recover_state(1);
        solver.recover_state(0);
        assert_eq!(solver.e_p.len(), 0);
        assert_eq!(solver.e_ps.len(), 0);
        assert_eq!(solver.e_s.len(), 4);
        assert!(solver.border.is_empty());
        assert!(solver.level.iter().all(|&l| l == 0));
        assert!(solver.left_degree.iter().all(|&d| d == 0));
    }

    #[test]
    fn leaf_placement_predicts_the_whole_antenna() {
        // a path is a single antenna
        let t = FreeTree::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let mut solver = Solver::new(&t, false);
        let mut d_p = 0;
        let mut d_ps_m = 0;
        solver.update_state(0, 0, &mut d_p, &mut d_ps_m);
        let mut frame = Frame::default();
        assert!(solver.check_and_propagate(0, 0, &mut frame));
        // leaf at level +1 forces -2, +2 inside and -1 at the far leaf
        assert_eq!(solver.predicted[0], Some(1));
        assert_eq!(solver.origin[0], LvOrigin::Own);
        assert_eq!(solver.predicted[1], Some(-2));
        assert_eq!(solver.predicted[2], Some(2));
        assert_eq!(solver.predicted[3], Some(-1));
        assert_eq!(solver.origin[3], LvOrigin::AntennaLeaf);
        // and the roll-back clears exactly that
        for v in frame.preds {
            solver.predicted[v] = None;
            solver.origin[v] = LvOrigin::None;
        }
        assert!(solver.predicted.iter().all(|p| p.is_none()));
    }
}
