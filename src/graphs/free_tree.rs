use super::{union_find, Graph, GraphError, UndirectedGraph};
use crate::basic_types::{Edge, Node};

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Structural classes of free trees
///
/// A tree usually belongs to several classes at once; a path, for
/// instance, is linear, a caterpillar and (for small n) a star or bistar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum TreeType {
    /// No vertices
    Empty,
    /// One vertex
    Singleton,
    /// A path: maximum degree 2
    Linear,
    /// One center adjacent to all other vertices
    Star,
    /// A star with exactly one of its edges subdivided
    QuasiStar,
    /// Two adjacent centers, every other vertex a leaf
    Bistar,
    /// Removing all leaves yields a path
    Caterpillar,
    /// Exactly one vertex of degree at least 3
    Spider,
    /// Exactly two vertices of degree at least 3
    TwoLinear,
}

/// Free (unrooted) tree, or a forest while it is being built
///
/// Wraps an [`UndirectedGraph`] and keeps a union-find over the current
/// edge set, so component queries are O(1) at any point of an edit
/// sequence. Edges that would close a cycle are rejected.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct FreeTree {
    g: UndirectedGraph,
    root_of: Vec<Node>,
    root_size: Vec<u64>,
    tree_types: Vec<TreeType>,
    tree_types_valid: bool,
}

impl FreeTree {
    /// New forest with `n` vertices and no edges
    pub fn new(n: usize) -> Self {
        Self {
            g: UndirectedGraph::new(n),
            root_of: (0..n).collect(),
            root_size: vec![1; n],
            tree_types: Vec::new(),
            tree_types_valid: false,
        }
    }

    /// New tree with `n` vertices and the given edges
    pub fn from_edges(n: usize, edges: &[Edge]) -> Result<Self, GraphError> {
        let mut t = Self::new(n);
        t.add_edges(edges)?;
        Ok(t)
    }

    /// Full neighborhood of `u`
    pub fn neighbors(&self, u: Node) -> &[Node] {
        self.g.neighbors(u)
    }

    /// Does the forest span a single component with `n − 1` edges?
    pub fn is_tree(&self) -> bool {
        let n = self.num_nodes();
        n == 0 || self.g.num_edges() == n - 1 && self.root_size[self.root_of[0]] == n as u64
    }

    /// Number of vertices in the component of `u`
    pub fn num_nodes_component(&self, u: Node) -> u64 {
        self.root_size[self.root_of[u]]
    }

    /// Representative vertex of the component of `u`
    ///
    /// Two vertices are connected iff their representatives coincide.
    pub fn component_representative(&self, u: Node) -> Node {
        self.root_of[u]
    }

    /// Would adding `{u,v}` keep the forest acyclic?
    pub fn can_add_edge(&self, u: Node, v: Node) -> bool {
        u < self.num_nodes() && v < self.num_nodes() && self.root_of[u] != self.root_of[v]
    }

    fn invalidate(&mut self) {
        self.tree_types_valid = false;
    }

    /// Add the edge `{u,v}`
    ///
    /// Fails with [`GraphError::WouldCreateCycle`] if `u` and `v` are
    /// already connected.
    pub fn add_edge(&mut self, u: Node, v: Node) -> Result<(), GraphError> {
        if u < self.num_nodes() && v < self.num_nodes() && u != v && !self.can_add_edge(u, v) {
            return Err(GraphError::WouldCreateCycle);
        }
        self.g.add_edge(u, v)?;
        union_find::after_add_edge(&self.g, u, v, &mut self.root_of, &mut self.root_size);
        self.invalidate();
        Ok(())
    }

    /// Add every edge of `edges`, repairing the union-find once per batch
    pub fn add_edges(&mut self, edges: &[Edge]) -> Result<(), GraphError> {
        for &(u, v) in edges {
            if u < self.num_nodes() && v < self.num_nodes() && u != v && !self.can_add_edge(u, v) {
                return Err(GraphError::WouldCreateCycle);
            }
            self.g.add_edge(u, v)?;
            union_find::after_add_edge(&self.g, u, v, &mut self.root_of, &mut self.root_size);
        }
        self.invalidate();
        Ok(())
    }

    /// Put back a batch of previously removed edges
    ///
    /// The divide-and-conquer minimizers cut subtrees off and splice
    /// them back; this restores the whole batch with a single
    /// union-find repair pass instead of one per edge. The batch must
    /// be acyclic against the current forest.
    pub(crate) fn restore_edges(&mut self, edges: &[Edge]) {
        for &(u, v) in edges {
            debug_assert!(self.can_add_edge(u, v));
            self.g.add_edge(u, v).expect("restored edge is valid");
        }
        union_find::after_add_edges(&self.g, edges, &mut self.root_of, &mut self.root_size);
        self.invalidate();
    }

    /// Add an edge without restoring any invariant
    ///
    /// Cycle detection is *not* performed here; it happens wholesale in
    /// [`finish_bulk_add`](FreeTree::finish_bulk_add) through the
    /// union-find sweep (a cyclic edge set leaves `is_tree` false).
    pub fn add_edge_bulk(&mut self, u: Node, v: Node) -> Result<(), GraphError> {
        self.g.add_edge_bulk(u, v)?;
        Ok(())
    }

    /// Restore all invariants after a batch of [`add_edge_bulk`](FreeTree::add_edge_bulk)
    pub fn finish_bulk_add(&mut self, normalize: bool, check: bool) {
        self.g.finish_bulk_add(normalize, check);
        union_find::after_edit_bulk(&self.g, &mut self.root_of, &mut self.root_size);
        self.invalidate();
    }

    /// Remove the edge `{u,v}`
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

    /// Remove an edge without restoring any invariant
    pub fn remove_edge_bulk(&mut self, u: Node, v: Node) -> Result<(), GraphError> {
        self.g.remove_edge_bulk(u, v)
    }

    /// Restore all invariants after a batch of [`remove_edge_bulk`](FreeTree::remove_edge_bulk)
    pub fn finish_bulk_remove(&mut self, normalize: bool, check: bool) {
        self.finish_bulk_add(normalize, check);
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

    /// Remove vertex `u`; larger indices are renumbered one down
    pub fn remove_node(&mut self, u: Node) -> Result<(), GraphError> {
        self.g.remove_node(u)?;
        let n = self.num_nodes();
        self.root_of = (0..n).collect();
        self.root_size = vec![1; n];
        union_find::after_edit_bulk(&self.g, &mut self.root_of, &mut self.root_size);
        self.invalidate();
        Ok(())
    }

    /// Append `other`, its vertex indices shifted by `self.num_nodes()`
    pub fn disjoint_union(&mut self, other: &FreeTree) {
        let shift = self.num_nodes();
        self.g.disjoint_union(&other.g);
        self.root_of
            .extend(other.root_of.iter().map(|&r| r + shift));
        self.root_size.extend(other.root_size.iter().copied());
        self.invalidate();
    }

    /// Sort every adjacency list increasingly
    pub fn normalize(&mut self) {
        self.g.normalize();
    }

    /// Test whether the lists happen to be sorted, updating the flag
    pub fn check_normalized(&mut self) -> bool {
        self.g.check_normalized()
    }

    /// Are the cached tree types up to date?
    pub fn is_tree_type_valid(&self) -> bool {
        self.tree_types_valid
    }

    /// Recompute which structural classes this tree belongs to
    pub fn calculate_tree_types(&mut self) {
        self.tree_types = classify_tree(&self.g);
        self.tree_types_valid = true;
    }

    /// Is this tree of the given type?
    ///
    /// Only meaningful while [`is_tree_type_valid`](FreeTree::is_tree_type_valid)
    /// holds.
    pub fn is_of_tree_type(&self, tt: TreeType) -> bool {
        self.tree_types.contains(&tt)
    }

    /// The cached structural classes
    pub fn tree_types(&self) -> &[TreeType] {
        &self.tree_types
    }
}

impl Graph for FreeTree {
    const DIRECTED: bool = false;

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

fn classify_tree(g: &UndirectedGraph) -> Vec<TreeType> {
    let n = g.num_nodes();
    let mut types = Vec::new();
    if n == 0 {
        types.push(TreeType::Empty);
        return types;
    }
    if n == 1 {
        types.push(TreeType::Singleton);
        return types;
    }

    let deg: Vec<usize> = (0..n).map(|u| g.degree(u)).collect();
    let num_leaves = deg.iter().filter(|&&d| d == 1).count();
    let num_branching = deg.iter().filter(|&&d| d >= 3).count();
    let num_internal = n - num_leaves;

    if deg.iter().all(|&d| d <= 2) {
        types.push(TreeType::Linear);
    }
    if deg.iter().any(|&d| d == n - 1) {
        types.push(TreeType::Star);
    }
    if n >= 3
        && num_leaves == n - 2
        && deg.contains(&(n - 2))
        && deg.contains(&2)
    {
        types.push(TreeType::QuasiStar);
    }
    if num_internal == 2 {
        types.push(TreeType::Bistar);
    }
    if num_branching == 1 {
        types.push(TreeType::Spider);
    }
    if num_branching == 2 {
        types.push(TreeType::TwoLinear);
    }

    // a caterpillar prunes down to a path: every internal vertex may keep
    // at most two internal neighbors
    let is_caterpillar = (0..n).filter(|&u| deg[u] >= 2).all(|u| {
        g.neighbors(u).iter().filter(|&&v| deg[v] >= 2).count() <= 2
    });
    if is_caterpillar {
        types.push(TreeType::Caterpillar);
    }

    types
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_rejected() {
        let mut t = FreeTree::new(3);
        t.add_edge(0, 1).unwrap();
        t.add_edge(1, 2).unwrap();
        assert_eq!(t.add_edge(0, 2), Err(GraphError::WouldCreateCycle));
        assert!(t.is_tree());
    }

    #[test]
    fn components_track_edits() {
        let mut t = FreeTree::new(5);
        t.add_edges(&[(0, 1), (1, 2), (3, 4)]).unwrap();
        assert_eq!(t.num_nodes_component(2), 3);
        assert_eq!(t.num_nodes_component(4), 2);
        assert_ne!(
            t.component_representative(0),
            t.component_representative(3)
        );
        t.add_edge(2, 3).unwrap();
        assert!(t.is_tree());
        assert_eq!(t.num_nodes_component(0), 5);
        t.remove_edge(1, 2).unwrap();
        assert_eq!(t.num_nodes_component(0), 2);
        assert_eq!(t.num_nodes_component(4), 3);
    }

    #[test]
    fn incident_wipe_singles_out_center() {
        let mut t = FreeTree::from_edges(4, &[(0, 1), (0, 2), (0, 3)]).unwrap();
        t.remove_edges_incident_to(0).unwrap();
        assert_eq!(t.num_nodes_component(0), 1);
        for u in 1..4 {
            assert_eq!(t.num_nodes_component(u), 1);
        }
    }

    #[test]
    fn tree_type_detection() {
        let mut path = FreeTree::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        path.calculate_tree_types();
        assert!(path.is_of_tree_type(TreeType::Linear));
        assert!(path.is_of_tree_type(TreeType::Caterpillar));
        assert!(path.is_of_tree_type(TreeType::QuasiStar));
        assert!(path.is_of_tree_type(TreeType::Bistar));
        assert!(!path.is_of_tree_type(TreeType::Spider));

        let mut star = FreeTree::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
        star.calculate_tree_types();
        assert!(star.is_of_tree_type(TreeType::Star));
        assert!(star.is_of_tree_type(TreeType::Caterpillar));
        assert!(star.is_of_tree_type(TreeType::Spider));
        assert!(!star.is_of_tree_type(TreeType::Linear));

        let mut spider = FreeTree::from_edges(
            7,
            &[(0, 1), (1, 2), (0, 3), (3, 4), (0, 5), (5, 6)],
        )
        .unwrap();
        spider.calculate_tree_types();
        assert!(spider.is_of_tree_type(TreeType::Spider));
        assert!(!spider.is_of_tree_type(TreeType::Caterpillar));
    }
}
