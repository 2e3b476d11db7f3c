use super::{union_find, Bfs, DirectedGraph, FreeTree, Graph, GraphError, OnVisit};
use crate::basic_types::{Edge, Node};

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Orientation of a rooted tree's edges with respect to its root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directionality {
    /// Every edge points away from the root
    Arborescence,
    /// Every edge points towards the root
    AntiArborescence,
    /// Neither of the above
    Undefined,
}

/// Rooted tree: a directed graph plus a root and per-subtree bookkeeping
///
/// The edges of a well-formed rooted tree point away from the root
/// (arborescence); [`from_free_tree`](RootedTree::from_free_tree) and the
/// head-vector readers always build it that way. The array of subtree
/// sizes is computed on demand and invalidated by every mutation; its
/// validity is tracked by [`are_subtree_sizes_valid`](RootedTree::are_subtree_sizes_valid).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct RootedTree {
    g: DirectedGraph,
    root: Option<Node>,
    root_of: Vec<Node>,
    root_size: Vec<u64>,
    subtree_sizes: Vec<u64>,
    sizes_valid: bool,
}

impl RootedTree {
    /// New edgeless rooted tree with `n` vertices and no root assigned
    pub fn new(n: usize) -> Self {
        Self {
            g: DirectedGraph::new(n),
            root: None,
            root_of: (0..n).collect(),
            root_size: vec![1; n],
            subtree_sizes: vec![0; n],
            sizes_valid: false,
        }
    }

    /// Orient a free tree away from `root`
    pub fn from_free_tree(t: &FreeTree, root: Node) -> Result<Self, GraphError> {
        if root >= t.num_nodes() {
            return Err(GraphError::NodeOutOfRange);
        }
        if !t.is_tree() {
            return Err(GraphError::NotATree);
        }
        let mut edges = Vec::with_capacity(t.num_edges());
        let mut bfs = Bfs::new(t);
        struct Collect<'v>(&'v mut Vec<Edge>);
        impl super::BfsCallbacks<FreeTree> for Collect<'_> {
            fn process_neighbor(&mut self, _: &Bfs<FreeTree>, s: Node, t: Node, _ltr: bool) {
                self.0.push((s, t));
            }
        }
        bfs.start_at(root, &mut Collect(&mut edges));

        let mut rt = Self::new(t.num_nodes());
        rt.set_root(root)?;
        rt.add_edges(&edges)?;
        Ok(rt)
    }

    /// Assign the root
    pub fn set_root(&mut self, root: Node) -> Result<(), GraphError> {
        if root >= self.num_nodes() {
            return Err(GraphError::NodeOutOfRange);
        }
        self.root = Some(root);
        self.sizes_valid = false;
        Ok(())
    }

    /// Has a root been assigned?
    pub fn has_root(&self) -> bool {
        self.root.is_some()
    }

    /// The root
    ///
    /// # Panics
    /// If no root has been assigned.
    pub fn root(&self) -> Node {
        self.root.expect("RootedTree::root - no root assigned")
    }

    /// Children of `u`
    pub fn children(&self, u: Node) -> &[Node] {
        self.g.out_neighbors(u)
    }

    /// Parent of `u`, `None` for the root (and for orphaned vertices of a
    /// partially built tree)
    pub fn parent(&self, u: Node) -> Option<Node> {
        self.g.in_neighbors(u).first().copied()
    }

    /// Out-degree (number of children) of `u`
    pub fn out_degree(&self, u: Node) -> usize {
        self.g.out_degree(u)
    }

    /// Number of vertices in the component of `u`
    pub fn num_nodes_component(&self, u: Node) -> u64 {
        self.root_size[self.root_of[u]]
    }

    /// Representative vertex of the component of `u`
    pub fn component_representative(&self, u: Node) -> Node {
        self.root_of[u]
    }

    /// Is this a complete rooted tree (arborescence spanning all vertices)?
    pub fn is_rooted_tree(&self) -> bool {
        let n = self.num_nodes();
        if n == 0 {
            return true;
        }
        let Some(r) = self.root else {
            return false;
        };
        self.g.num_edges() == n - 1
            && self.root_size[self.root_of[r]] == n as u64
            && self.g.in_degree(r) == 0
            && (0..n).all(|u| u == r || self.g.in_degree(u) == 1)
    }

    /// Edge orientation with respect to the root
    pub fn directionality(&self) -> Directionality {
        let n = self.num_nodes();
        if n <= 1 || self.g.num_edges() == 0 {
            return Directionality::Arborescence;
        }
        let Some(r) = self.root else {
            return Directionality::Undefined;
        };
        if self.g.in_degree(r) == 0 && (0..n).all(|u| u == r || self.g.in_degree(u) <= 1) {
            Directionality::Arborescence
        } else if self.g.out_degree(r) == 0 && (0..n).all(|u| u == r || self.g.out_degree(u) <= 1)
        {
            Directionality::AntiArborescence
        } else {
            Directionality::Undefined
        }
    }

    fn invalidate(&mut self) {
        self.sizes_valid = false;
    }

    /// Add the directed edge `(u,v)`
    pub fn add_edge(&mut self, u: Node, v: Node) -> Result<(), GraphError> {
        if u < self.num_nodes()
            && v < self.num_nodes()
            && u != v
            && self.root_of[u] == self.root_of[v]
        {
            return Err(GraphError::WouldCreateCycle);
        }
        self.g.add_edge(u, v)?;
        union_find::after_add_edge(&self.g, u, v, &mut self.root_of, &mut self.root_size);
        self.invalidate();
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
        self.g.add_edge_bulk(u, v)
    }

    /// Restore all invariants after a batch of [`add_edge_bulk`](RootedTree::add_edge_bulk)
    pub fn finish_bulk_add(&mut self, normalize: bool, check: bool) {
        self.g.finish_bulk_add(normalize, check);
        union_find::after_edit_bulk(&self.g, &mut self.root_of, &mut self.root_size);
        self.invalidate();
    }

    /// Remove the directed edge `(u,v)`
    pub fn remove_edge(&mut self, u: Node, v: Node) -> Result<(), GraphError> {
        self.g.remove_edge(u, v)?;
        union_find::after_remove_edge(&self.g, u, v, &mut self.root_of, &mut self.root_size);
        self.invalidate();
        Ok(())
    }

    /// Remove every edge of `edges`
    ///
    /// The union-find is repaired once for the whole batch; a malformed
    /// batch is rejected before anything is touched.
    pub fn remove_edges(&mut self, edges: &[Edge]) -> Result<(), GraphError> {
        if edges.iter().any(|&(u, v)| !self.g.has_edge(u, v)) {
            return Err(GraphError::EdgeDoesNotExist);
        }
        for &(u, v) in edges {
            self.g.remove_edge(u, v)?;
        }
        union_find::after_remove_edges(&self.g, edges, &mut self.root_of, &mut self.root_size);
        self.invalidate();
        Ok(())
    }

    /// Remove all edges incident to `u`
    pub fn remove_edges_incident_to(&mut self, u: Node) -> Result<(), GraphError> {
        if u >= self.num_nodes() {
            return Err(GraphError::NodeOutOfRange);
        }
        union_find::before_remove_edges_incident_to(
            &self.g,
            u,
            &mut self.root_of,
            &mut self.root_size,
        );
        self.g.remove_edges_incident_to(u)?;
        self.invalidate();
        Ok(())
    }

    /// Append `other`, its vertex indices shifted by `self.num_nodes()`
    ///
    /// With `connect_roots`, an edge from this tree's root to `other`'s
    /// (shifted) root is added, keeping the union a single tree.
    pub fn disjoint_union(&mut self, other: &RootedTree, connect_roots: bool) -> Result<(), GraphError> {
        let shift = self.num_nodes();
        self.g.disjoint_union(&other.g);
        self.root_of
            .extend(other.root_of.iter().map(|&r| r + shift));
        self.root_size.extend(other.root_size.iter().copied());
        self.subtree_sizes.extend(other.subtree_sizes.iter().copied());
        if connect_roots {
            let (r1, r2) = match (self.root, other.root) {
                (Some(a), Some(b)) => (a, b + shift),
                _ => return Err(GraphError::NoRoot),
            };
            self.add_edge(r1, r2)?;
        }
        self.invalidate();
        Ok(())
    }

    /// Are the cached subtree sizes up to date?
    pub fn are_subtree_sizes_valid(&self) -> bool {
        self.sizes_valid
    }

    /// Recompute the size of every subtree
    pub fn calculate_subtree_sizes(&mut self) -> Result<(), GraphError> {
        let Some(r) = self.root else {
            return Err(GraphError::NoRoot);
        };
        self.subtree_sizes.fill(1);

        // children are fully accumulated before their parent by walking
        // the BFS discovery order backwards
        let mut order = Vec::with_capacity(self.num_nodes());
        let mut bfs = Bfs::new(&self.g);
        bfs.start_at(r, &mut OnVisit(|u| order.push(u)));
        for &u in order.iter().rev() {
            for &c in self.g.out_neighbors(u) {
                self.subtree_sizes[u] += self.subtree_sizes[c];
            }
        }
        self.sizes_valid = true;
        Ok(())
    }

    /// Size of the subtree rooted at `u`
    ///
    /// Only meaningful while [`are_subtree_sizes_valid`](RootedTree::are_subtree_sizes_valid)
    /// holds.
    pub fn num_nodes_subtree(&self, u: Node) -> u64 {
        self.subtree_sizes[u]
    }

    /// The whole subtree-size array
    pub fn subtree_sizes(&self) -> &[u64] {
        &self.subtree_sizes
    }

    /// Is `v` a vertex of the subtree rooted at `u`?
    pub fn subtree_contains_node(&self, u: Node, v: Node) -> bool {
        let mut w = v;
        loop {
            if w == u {
                return true;
            }
            match self.parent(w) {
                Some(p) => w = p,
                None => return false,
            }
        }
    }

    /// Edges of the subtree rooted at `u`, owned
    ///
    /// With `relabel`, vertices are renamed to `0, …, k−1` in discovery
    /// order (`u` becomes 0). Requires valid subtree sizes; this is the
    /// typed form of the original's twin preconditions.
    pub fn subtree_edges(&self, u: Node, relabel: bool) -> Result<Vec<Edge>, GraphError> {
        if u >= self.num_nodes() {
            return Err(GraphError::NodeOutOfRange);
        }
        if !self.sizes_valid {
            return Err(GraphError::InvalidSubtreeSizes);
        }
        let k = self.subtree_sizes[u] as usize;
        let mut edges = Vec::with_capacity(k.saturating_sub(1));
        let mut relabeling = vec![usize::MAX; self.num_nodes()];
        relabeling[u] = 0;
        let mut next_label = 1;

        let mut stack = vec![u];
        while let Some(s) = stack.pop() {
            for &c in self.g.out_neighbors(s) {
                if relabel {
                    relabeling[c] = next_label;
                    next_label += 1;
                    edges.push((relabeling[s], relabeling[c]));
                } else {
                    edges.push((s, c));
                }
                stack.push(c);
            }
        }
        Ok(edges)
    }

    /// Forget root and orientation
    pub fn to_free_tree(&self) -> FreeTree {
        let mut t = FreeTree::new(self.num_nodes());
        for (u, v) in self.g.edges() {
            // a well-formed rooted tree cannot make this fail
            let _ = t.add_edge(u, v);
        }
        t
    }

    /// Sort every adjacency list increasingly
    pub fn normalize(&mut self) {
        self.g.normalize();
    }
}

impl Graph for RootedTree {
    const DIRECTED: bool = true;

    fn num_nodes(&self) -> usize {
        self.g.num_nodes()
    }

    fn num_edges(&self) -> usize {
        self.g.num_edges()
    }

    fn out_neighbors(&self, u: Node) -> &[Node] {
        self.g.out_neighbors(u)
    }

    fn in_neighbors(&self, u: Node) -> &[Node] {
        self.g.in_neighbors(u)
    }

    fn degree(&self, u: Node) -> usize {
        self.g.degree(u)
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.g.has_edge(u, v)
    }

    fn is_normalized(&self) -> bool {
        self.g.is_normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RootedTree {
        // 0 -> {1, 2}, 2 -> {3, 4}
        let t = FreeTree::from_edges(5, &[(0, 1), (0, 2), (2, 3), (2, 4)]).unwrap();
        RootedTree::from_free_tree(&t, 0).unwrap()
    }

    #[test]
    fn orientation_and_sizes() {
        let mut rt = sample();
        assert!(rt.is_rooted_tree());
        assert_eq!(rt.directionality(), Directionality::Arborescence);
        assert_eq!(rt.parent(3), Some(2));
        assert_eq!(rt.parent(0), None);
        rt.calculate_subtree_sizes().unwrap();
        assert_eq!(rt.num_nodes_subtree(0), 5);
        assert_eq!(rt.num_nodes_subtree(2), 3);
        assert_eq!(rt.num_nodes_subtree(1), 1);
        assert!(rt.subtree_contains_node(2, 4));
        assert!(!rt.subtree_contains_node(1, 4));
    }

    #[test]
    fn sizes_invalidate_on_edit() {
        let mut rt = sample();
        rt.calculate_subtree_sizes().unwrap();
        assert!(rt.are_subtree_sizes_valid());
        rt.remove_edge(2, 4).unwrap();
        assert!(!rt.are_subtree_sizes_valid());
        assert_eq!(rt.subtree_edges(0, false), Err(GraphError::InvalidSubtreeSizes));
    }

    #[test]
    fn subtree_edges_relabeling() {
        let mut rt = sample();
        rt.calculate_subtree_sizes().unwrap();
        let plain = rt.subtree_edges(2, false).unwrap();
        assert_eq!(plain.len(), 2);
        assert!(plain.contains(&(2, 3)));
        assert!(plain.contains(&(2, 4)));
        let relabeled = rt.subtree_edges(2, true).unwrap();
        assert_eq!(relabeled.len(), 2);
        for &(a, b) in &relabeled {
            assert!(a < 3 && b < 3);
        }
        assert!(relabeled.iter().any(|&(a, _)| a == 0));
    }
}
