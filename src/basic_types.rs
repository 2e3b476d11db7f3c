//! Elementary types shared by the whole crate
//!
//! Vertices and positions are both plain `usize` indices in `[0,n)`.
//! Since mixing them up compiles fine but produces nonsense, the strongly
//! typed wrappers [`NodeT`] and [`PositionT`] exist for the places where the
//! two coordinate systems meet, most prominently
//! [`LinearArrangement`](crate::linarr::LinearArrangement).

use std::fmt;

/// A vertex of a graph, an index in `[0,n)`
pub type Node = usize;

/// A position of a linear arrangement, an index in `[0,n)`
pub type Position = usize;

/// An edge of a graph
///
/// For undirected graphs the pair is to be read as unordered; functions
/// returning edges of undirected graphs yield them with the smaller
/// endpoint first.
pub type Edge = (Node, Node);

/// A pair of edges, used for the set Q of independent edge pairs
pub type EdgePair = (Edge, Edge);

/// Strongly typed vertex index
///
/// Wrap a [`Node`] in this before using it to index a
/// [`LinearArrangement`](crate::linarr::LinearArrangement):
/// `arr[NodeT(u)]` is the position of `u`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeT(pub Node);

/// Strongly typed position index
///
/// `arr[PositionT(p)]` is the vertex placed at position `p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositionT(pub Position);

impl From<Node> for NodeT {
    fn from(u: Node) -> Self {
        NodeT(u)
    }
}

impl From<Position> for PositionT {
    fn from(p: Position) -> Self {
        PositionT(p)
    }
}

impl fmt::Display for NodeT {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PositionT {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
