use crate::basic_types::Node;
use crate::graphs::{FreeTree, Graph};

/// A maximal path whose internal vertices all have degree 2
///
/// The endpoints are either leaves or hubs (degree ≥ 3). A path with at
/// least one leaf endpoint is an *antenna*; one with two hub endpoints
/// is a *bridge*.
#[derive(Debug, Clone)]
pub struct BranchlessPath {
    seq: Vec<Node>,
    lowest: Node,
}

impl BranchlessPath {
    /// Number of vertices on the path, endpoints included
    pub fn num_nodes(&self) -> usize {
        self.seq.len()
    }

    /// First endpoint
    pub fn h1(&self) -> Node {
        self.seq[0]
    }

    /// Second endpoint
    pub fn h2(&self) -> Node {
        *self.seq.last().unwrap()
    }

    /// Vertex at offset `i` along the path
    pub fn at(&self, i: usize) -> Node {
        self.seq[i]
    }

    /// The vertices of the path in order
    pub fn seq(&self) -> &[Node] {
        &self.seq
    }

    /// Lexicographically smallest internal vertex
    ///
    /// Only meaningful for paths with internal vertices
    /// (`num_nodes() >= 3`).
    pub fn lowest_lexicographic(&self) -> Node {
        self.lowest
    }

    /// Does the path end in at least one leaf?
    pub fn is_antenna(&self, t: &FreeTree) -> bool {
        t.degree(self.h1()) == 1 || t.degree(self.h2()) == 1
    }
}

/// All branchless paths of a tree, with per-vertex lookup tables
#[derive(Debug, Clone)]
pub struct BranchlessPaths {
    /// The paths
    pub paths: Vec<BranchlessPath>,
    /// Per vertex, the index of its path; meaningful only for vertices
    /// of degree ≤ 2
    pub path_of: Vec<usize>,
    /// Per vertex, its offset within its path; meaningful only for
    /// vertices of degree ≤ 2
    pub pos_in_path: Vec<usize>,
}

/// Decompose `t` into its maximal degree-≤2 paths
pub fn branchless_paths(t: &FreeTree) -> BranchlessPaths {
    let n = t.num_nodes();
    let mut result = BranchlessPaths {
        paths: Vec::new(),
        path_of: vec![usize::MAX; n],
        pos_in_path: vec![usize::MAX; n],
    };
    if n < 2 {
        return result;
    }

    let hubs: Vec<Node> = (0..n).filter(|&u| t.degree(u) >= 3).collect();

    if hubs.is_empty() {
        // the whole tree is one path; walk it from a leaf
        let start = (0..n).find(|&u| t.degree(u) == 1).expect("a path has leaves");
        let seq = walk(t, start, t.neighbors(start)[0]);
        push_path(&mut result, seq);
        return result;
    }

    for &h in &hubs {
        for &v in t.neighbors(h) {
            if t.degree(v) >= 3 {
                // hub-hub bridge with no internal vertices; claim it once
                if h < v {
                    push_path(&mut result, vec![h, v]);
                }
            } else if result.path_of[v] == usize::MAX {
                push_path(&mut result, walk(t, h, v));
            }
        }
    }
    result
}

// follow degree-2 vertices from `from` through `next` until a leaf or a
// hub ends the path
fn walk(t: &FreeTree, from: Node, next: Node) -> Vec<Node> {
    let mut seq = vec![from, next];
    let mut prev = from;
    let mut cur = next;
    while t.degree(cur) == 2 {
        let step = t.neighbors(cur)[0];
        let step = if step == prev {
            t.neighbors(cur)[1]
        } else {
            step
        };
        seq.push(step);
        prev = cur;
        cur = step;
    }
    seq
}

fn push_path(result: &mut BranchlessPaths, seq: Vec<Node>) {
    let idx = result.paths.len();
    let lowest = seq[1..seq.len() - 1].iter().copied().min().unwrap_or(usize::MAX);
    for (i, &u) in seq.iter().enumerate() {
        // hubs may sit on many paths; only degree-≤2 vertices get a
        // unique home
        if result.path_of[u] == usize::MAX {
            result.path_of[u] = idx;
            result.pos_in_path[u] = i;
        }
    }
    result.paths.push(BranchlessPath { seq, lowest });
}
