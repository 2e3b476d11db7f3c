use super::{insert_sorted, remove_from_list, shift_down, Graph, GraphError};
use crate::basic_types::{Edge, Node};

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Simple directed graph over the vertex set `{0, …, n−1}`
///
/// Both the out- and the in-neighbor list of every vertex are stored, so
/// reverse-edge traversals need no lookups. Normalization covers both
/// families of lists.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct DirectedGraph {
    out: Vec<Vec<Node>>,
    into: Vec<Vec<Node>>,
    num_edges: usize,
    normalized: bool,
}

impl DirectedGraph {
    /// New graph with `n` vertices and no edges
    pub fn new(n: usize) -> Self {
        Self {
            out: vec![Vec::new(); n],
            into: vec![Vec::new(); n],
            num_edges: 0,
            normalized: true,
        }
    }

    /// New graph with `n` vertices and the given edges
    pub fn from_edges(n: usize, edges: &[Edge]) -> Result<Self, GraphError> {
        let mut g = Self::new(n);
        g.add_edges(edges)?;
        Ok(g)
    }

    /// Out-degree of `u`
    pub fn out_degree(&self, u: Node) -> usize {
        self.out[u].len()
    }

    /// In-degree of `u`
    pub fn in_degree(&self, u: Node) -> usize {
        self.into[u].len()
    }

    fn check_nodes(&self, u: Node, v: Node) -> Result<(), GraphError> {
        if u >= self.num_nodes() || v >= self.num_nodes() {
            return Err(GraphError::NodeOutOfRange);
        }
        if u == v {
            return Err(GraphError::SelfLoop);
        }
        Ok(())
    }

    /// Add the edge `(u,v)`
    pub fn add_edge(&mut self, u: Node, v: Node) -> Result<(), GraphError> {
        self.check_nodes(u, v)?;
        if self.has_edge(u, v) {
            return Err(GraphError::EdgeExists);
        }
        if self.normalized {
            insert_sorted(&mut self.out[u], v);
            insert_sorted(&mut self.into[v], u);
        } else {
            self.out[u].push(v);
            self.into[v].push(u);
        }
        self.num_edges += 1;
        Ok(())
    }

    /// Add every edge of `edges`
    pub fn add_edges(&mut self, edges: &[Edge]) -> Result<(), GraphError> {
        for &(u, v) in edges {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    /// Add an edge without restoring any invariant
    pub fn add_edge_bulk(&mut self, u: Node, v: Node) -> Result<(), GraphError> {
        self.check_nodes(u, v)?;
        self.out[u].push(v);
        self.into[v].push(u);
        self.num_edges += 1;
        self.normalized = false;
        Ok(())
    }

    /// Restore the invariants after a batch of [`add_edge_bulk`](DirectedGraph::add_edge_bulk)
    pub fn finish_bulk_add(&mut self, normalize: bool, check: bool) {
        if normalize {
            self.normalize();
        } else if check {
            self.check_normalized();
        }
    }

    /// Remove the edge `(u,v)`
    pub fn remove_edge(&mut self, u: Node, v: Node) -> Result<(), GraphError> {
        self.check_nodes(u, v)?;
        let norm = self.normalized;
        if !remove_from_list(&mut self.out[u], v, norm) {
            return Err(GraphError::EdgeDoesNotExist);
        }
        let removed = remove_from_list(&mut self.into[v], u, norm);
        debug_assert!(removed);
        self.num_edges -= 1;
        Ok(())
    }

    /// Remove every edge of `edges`
    pub fn remove_edges(&mut self, edges: &[Edge]) -> Result<(), GraphError> {
        for &(u, v) in edges {
            self.remove_edge(u, v)?;
        }
        Ok(())
    }

    /// Remove an edge without restoring any invariant
    pub fn remove_edge_bulk(&mut self, u: Node, v: Node) -> Result<(), GraphError> {
        self.check_nodes(u, v)?;
        if !remove_from_list(&mut self.out[u], v, false) {
            return Err(GraphError::EdgeDoesNotExist);
        }
        remove_from_list(&mut self.into[v], u, false);
        self.num_edges -= 1;
        self.normalized = false;
        Ok(())
    }

    /// Restore the invariants after a batch of [`remove_edge_bulk`](DirectedGraph::remove_edge_bulk)
    pub fn finish_bulk_remove(&mut self, normalize: bool, check: bool) {
        self.finish_bulk_add(normalize, check);
    }

    /// Remove all edges incident to `u`, in either direction
    pub fn remove_edges_incident_to(&mut self, u: Node) -> Result<(), GraphError> {
        if u >= self.num_nodes() {
            return Err(GraphError::NodeOutOfRange);
        }
        let norm = self.normalized;
        let outs = std::mem::take(&mut self.out[u]);
        self.num_edges -= outs.len();
        for v in outs {
            remove_from_list(&mut self.into[v], u, norm);
        }
        let ins = std::mem::take(&mut self.into[u]);
        self.num_edges -= ins.len();
        for v in ins {
            remove_from_list(&mut self.out[v], u, norm);
        }
        Ok(())
    }

    /// Remove vertex `u`; larger indices are renumbered one down
    pub fn remove_node(&mut self, u: Node) -> Result<(), GraphError> {
        self.remove_edges_incident_to(u)?;
        self.out.remove(u);
        self.into.remove(u);
        for list in self.out.iter_mut().chain(self.into.iter_mut()) {
            shift_down(list, u);
        }
        Ok(())
    }

    /// Append `other`, its vertex indices shifted by `self.num_nodes()`
    pub fn disjoint_union(&mut self, other: &DirectedGraph) {
        let shift = self.num_nodes();
        for list in &other.out {
            self.out.push(list.iter().map(|&v| v + shift).collect());
        }
        for list in &other.into {
            self.into.push(list.iter().map(|&v| v + shift).collect());
        }
        self.num_edges += other.num_edges;
        self.normalized = self.normalized && other.normalized;
    }

    /// Sort every adjacency list increasingly
    pub fn normalize(&mut self) {
        for list in self.out.iter_mut().chain(self.into.iter_mut()) {
            list.sort_unstable();
        }
        self.normalized = true;
    }

    /// Test whether the lists happen to be sorted, updating the flag
    pub fn check_normalized(&mut self) -> bool {
        self.normalized = self
            .out
            .iter()
            .chain(self.into.iter())
            .all(|list| list.windows(2).all(|w| w[0] < w[1]));
        self.normalized
    }

    /// Forget the orientation of every edge
    pub fn to_undirected(&self) -> super::UndirectedGraph {
        let mut g = super::UndirectedGraph::new(self.num_nodes());
        for (u, list) in self.out.iter().enumerate() {
            for &v in list {
                // parallel antiparallel edges collapse
                let _ = g.add_edge(u, v);
            }
        }
        g
    }
}

impl Graph for DirectedGraph {
    const DIRECTED: bool = true;

    fn num_nodes(&self) -> usize {
        self.out.len()
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn out_neighbors(&self, u: Node) -> &[Node] {
        &self.out[u]
    }

    fn in_neighbors(&self, u: Node) -> &[Node] {
        &self.into[u]
    }

    fn degree(&self, u: Node) -> usize {
        self.out[u].len() + self.into[u].len()
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        let use_out = self.out[u].len() <= self.into[v].len();
        if self.normalized {
            if use_out {
                self.out[u].binary_search(&v).is_ok()
            } else {
                self.into[v].binary_search(&u).is_ok()
            }
        } else if use_out {
            self.out[u].contains(&v)
        } else {
            self.into[v].contains(&u)
        }
    }

    fn is_normalized(&self) -> bool {
        self.normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed_edges_are_oriented() {
        let mut g = DirectedGraph::new(3);
        g.add_edge(0, 1).unwrap();
        assert!(g.has_edge(0, 1));
        assert!(!g.has_edge(1, 0));
        assert_eq!(g.out_degree(0), 1);
        assert_eq!(g.in_degree(1), 1);
        assert_eq!(g.degree(1), 1);
        g.add_edge(1, 0).unwrap();
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.degree(0), 2);
    }

    #[test]
    fn incident_wipe() {
        let mut g = DirectedGraph::from_edges(4, &[(0, 1), (2, 1), (1, 3)]).unwrap();
        g.remove_edges_incident_to(1).unwrap();
        assert_eq!(g.num_edges(), 0);
        assert_eq!(g.in_degree(3), 0);
        assert_eq!(g.out_degree(0), 0);
    }
}
