use crate::basic_types::Node;
use crate::graphs::Graph;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Proper 2-coloring of a bipartite graph
///
/// Computed by breadth-first layering, component by component; the first
/// vertex of every component is blue. Trees are always bipartite; for
/// general graphs construction fails on an odd cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct BipartiteColoring {
    color: Vec<u8>,
}

/// Color value of the blue class
pub const BLUE: u8 = 0;
/// Color value of the red class
pub const RED: u8 = 1;

impl BipartiteColoring {
    /// 2-color `g`; `None` if `g` has an odd cycle
    pub fn new<G: Graph>(g: &G) -> Option<Self> {
        let n = g.num_nodes();
        let mut color = vec![u8::MAX; n];
        let mut queue = std::collections::VecDeque::new();

        for start in 0..n {
            if color[start] != u8::MAX {
                continue;
            }
            color[start] = BLUE;
            queue.push_back(start);
            while let Some(u) = queue.pop_front() {
                for &v in g.out_neighbors(u).iter().chain(g.in_neighbors(u)) {
                    if color[v] == u8::MAX {
                        color[v] = 1 - color[u];
                        queue.push_back(v);
                    } else if color[v] == color[u] {
                        return None;
                    }
                }
            }
        }
        Some(Self { color })
    }

    /// Color of `u`, [`BLUE`] or [`RED`]
    pub fn color(&self, u: Node) -> u8 {
        self.color[u]
    }

    /// Is `u` in the blue class?
    pub fn is_blue(&self, u: Node) -> bool {
        self.color[u] == BLUE
    }

    /// Number of blue vertices
    pub fn num_blue(&self) -> usize {
        self.color.iter().filter(|&&c| c == BLUE).count()
    }

    /// Number of red vertices
    pub fn num_red(&self) -> usize {
        self.color.len() - self.num_blue()
    }

    /// All vertices of the given color, increasing
    pub fn class_of(&self, color: u8) -> Vec<Node> {
        self.color
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == color)
            .map(|(u, _)| u)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::{FreeTree, UndirectedGraph};

    #[test]
    fn tree_coloring_is_proper() {
        let t =
            FreeTree::from_edges(6, &[(0, 1), (1, 2), (2, 3), (1, 4), (2, 5)]).unwrap();
        let col = BipartiteColoring::new(&t).unwrap();
        for (u, v) in crate::graphs::Graph::edges(&t) {
            assert_ne!(col.color(u), col.color(v));
        }
        assert_eq!(col.num_blue() + col.num_red(), 6);
    }

    #[test]
    fn odd_cycle_rejected() {
        let g = UndirectedGraph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        assert!(BipartiteColoring::new(&g).is_none());
    }
}
