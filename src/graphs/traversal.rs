use super::Graph;
use crate::basic_types::Node;
use crate::containers::QueueArray;

/// Control hooks of a [`Bfs`] traversal
///
/// Every method has a no-op default, so implementors override exactly the
/// hooks they need. The hooks receive the traversal itself to query
/// visited state; they cannot mutate the graph.
pub trait BfsCallbacks<G: Graph> {
    /// Stop the traversal right after processing `u`?
    fn terminate(&mut self, _bfs: &Bfs<G>, _u: Node) -> bool {
        false
    }

    /// Called once for every vertex popped from the queue
    fn process_current(&mut self, _bfs: &Bfs<G>, _u: Node) {}

    /// Called for the edge `{s,t}` as it is discovered
    ///
    /// `ltr` is the natural orientation: `true` when the edge is stored as
    /// `s → t`, `false` when it is an in-edge followed in reverse.
    fn process_neighbor(&mut self, _bfs: &Bfs<G>, _s: Node, _t: Node, _ltr: bool) {}

    /// Gate the push of `t` onto the queue
    fn admit(&mut self, _bfs: &Bfs<G>, _s: Node, _t: Node, _ltr: bool) -> bool {
        true
    }
}

/// Callback set that only hooks into [`process_current`](BfsCallbacks::process_current)
///
/// The single most common traversal shape in this crate: run over a
/// component and do something with every vertex.
pub struct OnVisit<F>(pub F);

impl<G: Graph, F: FnMut(Node)> BfsCallbacks<G> for OnVisit<F> {
    fn process_current(&mut self, _bfs: &Bfs<G>, u: Node) {
        (self.0)(u)
    }
}

/// Configurable breadth-first traversal
///
/// The visited bitset and the queue persist across calls to
/// [`start_at`](Bfs::start_at), so a caller can sweep a forest component
/// by component without reallocating — exactly what the union-find
/// maintenance does.
///
/// ```
/// use linarr::graphs::{Bfs, OnVisit, UndirectedGraph};
///
/// let g = UndirectedGraph::from_edges(4, &[(0, 1), (1, 2)]).unwrap();
/// let mut order = Vec::new();
/// let mut bfs = Bfs::new(&g);
/// bfs.start_at(0, &mut OnVisit(|u| order.push(u)));
/// assert_eq!(order, vec![0, 1, 2]);
/// assert!(!bfs.was_visited(3));
/// ```
pub struct Bfs<'a, G: Graph> {
    graph: &'a G,
    visited: Vec<bool>,
    queue: QueueArray<Node>,
    use_rev_edges: bool,
    process_visited_neighbors: bool,
}

impl<'a, G: Graph> Bfs<'a, G> {
    /// New traversal over `graph`, everything unvisited
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: vec![false; graph.num_nodes()],
            queue: QueueArray::new(graph.num_nodes()),
            use_rev_edges: false,
            process_visited_neighbors: false,
        }
    }

    /// Back to the default state: nothing visited, queue empty, options off
    pub fn reset(&mut self) {
        self.clear_visited();
        self.clear_queue();
        self.use_rev_edges = false;
        self.process_visited_neighbors = false;
    }

    /// In directed graphs, also follow in-edges
    pub fn set_use_rev_edges(&mut self, use_rev: bool) {
        self.use_rev_edges = use_rev;
    }

    /// Invoke the edge hook also for already-visited targets
    pub fn set_process_visited_neighbors(&mut self, process: bool) {
        self.process_visited_neighbors = process;
    }

    /// Mark every vertex unvisited
    pub fn clear_visited(&mut self) {
        self.visited.fill(false);
    }

    /// Drop all pending queue entries
    pub fn clear_queue(&mut self) {
        self.queue.reset();
    }

    /// Force the visited mark of `u`
    ///
    /// Marking a vertex visited beforehand fences the traversal off from
    /// it; the union-find updates use this to walk only one side of an
    /// edge.
    pub fn set_visited(&mut self, u: Node, visited: bool) {
        self.visited[u] = visited;
    }

    /// Has `u` been visited?
    pub fn was_visited(&self, u: Node) -> bool {
        self.visited[u]
    }

    /// Have all vertices been visited?
    pub fn all_visited(&self) -> bool {
        self.visited.iter().all(|&v| v)
    }

    /// The traversed graph
    pub fn graph(&self) -> &'a G {
        self.graph
    }

    /// Start (or continue) the traversal at `source`
    pub fn start_at<C: BfsCallbacks<G>>(&mut self, source: Node, callbacks: &mut C) {
        self.queue.push(source);
        self.visited[source] = true;
        self.traverse(callbacks);
    }

    /// Start the traversal at every vertex of `sources` at once
    pub fn start_at_all<C: BfsCallbacks<G>>(&mut self, sources: &[Node], callbacks: &mut C) {
        for &u in sources {
            self.queue.push(u);
            self.visited[u] = true;
        }
        self.traverse(callbacks);
    }

    fn traverse<C: BfsCallbacks<G>>(&mut self, callbacks: &mut C) {
        let graph = self.graph;
        while !self.queue.is_empty() {
            let s = self.queue.pop();

            callbacks.process_current(self, s);
            if callbacks.terminate(self, s) {
                break;
            }

            for &t in graph.out_neighbors(s) {
                self.deal_with_neighbor(s, t, true, callbacks);
            }
            if G::DIRECTED && self.use_rev_edges {
                for &t in graph.in_neighbors(s) {
                    self.deal_with_neighbor(s, t, false, callbacks);
                }
            }
        }
    }

    fn deal_with_neighbor<C: BfsCallbacks<G>>(
        &mut self,
        s: Node,
        t: Node,
        ltr: bool,
        callbacks: &mut C,
    ) {
        let t_visited = self.visited[t];
        if !t_visited || self.process_visited_neighbors {
            callbacks.process_neighbor(self, s, t, ltr);
        }
        if !t_visited && callbacks.admit(self, s, t, ltr) {
            // mark before pushing so the vertex cannot be enqueued twice
            self.visited[t] = true;
            self.queue.push(t);
        }
    }
}
