//! Streaming iteration over edges and pairs of independent edges
//!
//! Thin, allocation-free alternatives to [`Graph::edges`] and
//! [`Graph::get_q`] for the callers that only need one pass.

use crate::basic_types::{Edge, EdgePair, Node};
use crate::graphs::Graph;

/// Iterator over the edges of a graph
///
/// Undirected edges are yielded once, smaller endpoint first; directed
/// edges in their natural orientation.
pub struct EdgeIterator<'a, G: Graph> {
    graph: &'a G,
    u: Node,
    i: usize,
}

impl<'a, G: Graph> EdgeIterator<'a, G> {
    /// Iterate the edges of `graph`
    pub fn new(graph: &'a G) -> Self {
        Self { graph, u: 0, i: 0 }
    }
}

impl<G: Graph> Iterator for EdgeIterator<'_, G> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        while self.u < self.graph.num_nodes() {
            let outs = self.graph.out_neighbors(self.u);
            while self.i < outs.len() {
                let v = outs[self.i];
                self.i += 1;
                if G::DIRECTED || self.u < v {
                    return Some((self.u, v));
                }
            }
            self.u += 1;
            self.i = 0;
        }
        None
    }
}

/// Iterator over Q: all unordered pairs of independent edges
pub struct QIterator<'a, G: Graph> {
    edges: Vec<Edge>,
    i: usize,
    j: usize,
    _graph: &'a G,
}

impl<'a, G: Graph> QIterator<'a, G> {
    /// Iterate the independent edge pairs of `graph`
    pub fn new(graph: &'a G) -> Self {
        Self {
            edges: graph.edges(),
            i: 0,
            j: 1,
            _graph: graph,
        }
    }
}

impl<G: Graph> Iterator for QIterator<'_, G> {
    type Item = EdgePair;

    fn next(&mut self) -> Option<EdgePair> {
        while self.i < self.edges.len() {
            while self.j < self.edges.len() {
                let (a, b) = self.edges[self.i];
                let (c, d) = self.edges[self.j];
                self.j += 1;
                if a != c && a != d && b != c && b != d {
                    return Some(((a, b), (c, d)));
                }
            }
            self.i += 1;
            self.j = self.i + 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::UndirectedGraph;

    #[test]
    fn edges_and_q_of_a_path() {
        let g = UndirectedGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let edges: Vec<_> = EdgeIterator::new(&g).collect();
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3)]);
        let q: Vec<_> = QIterator::new(&g).collect();
        assert_eq!(q, vec![((0, 1), (2, 3))]);
        assert_eq!(q, g.get_q());
    }
}
