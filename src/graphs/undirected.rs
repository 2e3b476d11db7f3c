use super::{insert_sorted, remove_from_list, shift_down, Graph, GraphError};
use crate::basic_types::{Edge, Node};

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Simple undirected graph over the vertex set `{0, …, n−1}`
///
/// Every undirected edge is stored once in each endpoint's adjacency list.
/// Single-edge mutations keep the lists normalized; the `*_bulk` variants
/// postpone that to [`finish_bulk_add`](UndirectedGraph::finish_bulk_add) /
/// [`finish_bulk_remove`](UndirectedGraph::finish_bulk_remove).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct UndirectedGraph {
    adj: Vec<Vec<Node>>,
    num_edges: usize,
    normalized: bool,
}

impl UndirectedGraph {
    /// New graph with `n` vertices and no edges
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
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

    /// Full neighborhood of `u`
    ///
    /// # Panics
    /// If `u` is out of range.
    pub fn neighbors(&self, u: Node) -> &[Node] {
        &self.adj[u]
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

    /// Add the edge `{u,v}`
    ///
    /// Keeps the adjacency lists normalized if they were.
    pub fn add_edge(&mut self, u: Node, v: Node) -> Result<(), GraphError> {
        self.check_nodes(u, v)?;
        if self.has_edge(u, v) {
            return Err(GraphError::EdgeExists);
        }
        if self.normalized {
            insert_sorted(&mut self.adj[u], v);
            insert_sorted(&mut self.adj[v], u);
        } else {
            self.adj[u].push(v);
            self.adj[v].push(u);
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
    ///
    /// Call [`finish_bulk_add`](UndirectedGraph::finish_bulk_add) once the
    /// batch is complete. Duplicate edges are not detected here.
    pub fn add_edge_bulk(&mut self, u: Node, v: Node) -> Result<(), GraphError> {
        self.check_nodes(u, v)?;
        self.adj[u].push(v);
        self.adj[v].push(u);
        self.num_edges += 1;
        self.normalized = false;
        Ok(())
    }

    /// Restore the invariants after a batch of [`add_edge_bulk`](UndirectedGraph::add_edge_bulk)
    ///
    /// With `normalize` the lists are sorted; otherwise `check` re-tests
    /// whether they happen to be sorted already.
    pub fn finish_bulk_add(&mut self, normalize: bool, check: bool) {
        if normalize {
            self.normalize();
        } else if check {
            self.check_normalized();
        }
    }

    /// Remove the edge `{u,v}`
    pub fn remove_edge(&mut self, u: Node, v: Node) -> Result<(), GraphError> {
        self.check_nodes(u, v)?;
        let norm = self.normalized;
        if !remove_from_list(&mut self.adj[u], v, norm) {
            return Err(GraphError::EdgeDoesNotExist);
        }
        let removed = remove_from_list(&mut self.adj[v], u, norm);
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
    ///
    /// Call [`finish_bulk_remove`](UndirectedGraph::finish_bulk_remove)
    /// once the batch is complete.
    pub fn remove_edge_bulk(&mut self, u: Node, v: Node) -> Result<(), GraphError> {
        self.check_nodes(u, v)?;
        if !remove_from_list(&mut self.adj[u], v, false) {
            return Err(GraphError::EdgeDoesNotExist);
        }
        remove_from_list(&mut self.adj[v], u, false);
        self.num_edges -= 1;
        self.normalized = false;
        Ok(())
    }

    /// Restore the invariants after a batch of [`remove_edge_bulk`](UndirectedGraph::remove_edge_bulk)
    pub fn finish_bulk_remove(&mut self, normalize: bool, check: bool) {
        self.finish_bulk_add(normalize, check);
    }

    /// Remove all edges incident to `u`
    pub fn remove_edges_incident_to(&mut self, u: Node) -> Result<(), GraphError> {
        if u >= self.num_nodes() {
            return Err(GraphError::NodeOutOfRange);
        }
        let neighs = std::mem::take(&mut self.adj[u]);
        self.num_edges -= neighs.len();
        for v in neighs {
            let norm = self.normalized;
            remove_from_list(&mut self.adj[v], u, norm);
        }
        Ok(())
    }

    /// Remove vertex `u` together with its incident edges
    ///
    /// Every vertex with a larger index is renumbered one down to close
    /// the gap.
    pub fn remove_node(&mut self, u: Node) -> Result<(), GraphError> {
        self.remove_edges_incident_to(u)?;
        self.adj.remove(u);
        for list in self.adj.iter_mut() {
            shift_down(list, u);
        }
        Ok(())
    }

    /// Append `other`, its vertex indices shifted by `self.num_nodes()`
    pub fn disjoint_union(&mut self, other: &UndirectedGraph) {
        let shift = self.num_nodes();
        for list in &other.adj {
            self.adj
                .push(list.iter().map(|&v| v + shift).collect());
        }
        self.num_edges += other.num_edges;
        self.normalized = self.normalized && other.normalized;
    }

    /// Sort every adjacency list increasingly
    pub fn normalize(&mut self) {
        for list in self.adj.iter_mut() {
            list.sort_unstable();
        }
        self.normalized = true;
    }

    /// Test whether the lists happen to be sorted, updating the flag
    pub fn check_normalized(&mut self) -> bool {
        self.normalized = self
            .adj
            .iter()
            .all(|list| list.windows(2).all(|w| w[0] < w[1]));
        self.normalized
    }
}

impl Graph for UndirectedGraph {
    const DIRECTED: bool = false;

    fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn out_neighbors(&self, u: Node) -> &[Node] {
        &self.adj[u]
    }

    fn in_neighbors(&self, _u: Node) -> &[Node] {
        &[]
    }

    fn degree(&self, u: Node) -> usize {
        self.adj[u].len()
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        // always probe the shorter list
        let (a, b) = if self.adj[u].len() <= self.adj[v].len() {
            (u, v)
        } else {
            (v, u)
        };
        if self.normalized {
            self.adj[a].binary_search(&b).is_ok()
        } else {
            self.adj[a].contains(&b)
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
    fn add_remove_roundtrip() {
        let mut g = UndirectedGraph::new(5);
        g.add_edge(0, 3).unwrap();
        g.add_edge(0, 1).unwrap();
        assert!(g.is_normalized());
        assert_eq!(g.neighbors(0), &[1, 3]);
        assert_eq!(g.num_edges(), 2);
        assert!(g.has_edge(3, 0));
        assert_eq!(g.add_edge(0, 1), Err(GraphError::EdgeExists));
        assert_eq!(g.add_edge(1, 1), Err(GraphError::SelfLoop));
        assert_eq!(g.add_edge(0, 7), Err(GraphError::NodeOutOfRange));
        g.remove_edge(0, 3).unwrap();
        assert_eq!(g.remove_edge(0, 3), Err(GraphError::EdgeDoesNotExist));
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn bulk_edits_restore_invariant() {
        let mut g = UndirectedGraph::new(4);
        g.add_edge_bulk(2, 0).unwrap();
        g.add_edge_bulk(2, 1).unwrap();
        g.add_edge_bulk(2, 3).unwrap();
        assert!(!g.is_normalized());
        g.finish_bulk_add(true, false);
        assert!(g.is_normalized());
        assert_eq!(g.neighbors(2), &[0, 1, 3]);
    }

    #[test]
    fn remove_node_renumbers() {
        let mut g = UndirectedGraph::new(4);
        g.add_edges(&[(0, 1), (1, 2), (2, 3)]).unwrap();
        g.remove_node(1).unwrap();
        assert_eq!(g.num_nodes(), 3);
        // former vertices 2, 3 are now 1, 2
        assert_eq!(g.num_edges(), 1);
        assert!(g.has_edge(1, 2));
        assert!(!g.has_edge(0, 1));
    }

    #[test]
    fn q_set_of_a_path() {
        let g = UndirectedGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let q = g.get_q();
        assert_eq!(q, vec![(((0, 1)), ((2, 3)))]);
    }

    #[test]
    fn disjoint_union_shifts() {
        let mut g = UndirectedGraph::from_edges(2, &[(0, 1)]).unwrap();
        let h = UndirectedGraph::from_edges(3, &[(0, 2)]).unwrap();
        g.disjoint_union(&h);
        assert_eq!(g.num_nodes(), 5);
        assert_eq!(g.num_edges(), 2);
        assert!(g.has_edge(2, 4));
    }
}
