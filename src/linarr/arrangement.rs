use crate::basic_types::{Node, NodeT, Position, PositionT};
use std::ops::Index;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// A linear arrangement: a bijection vertices → positions
///
/// Both directions of the bijection are stored and kept in sync, so
/// "where is vertex u" and "who sits at position p" are both O(1). The
/// strongly typed indices pick the direction:
///
/// ```
/// use linarr::basic_types::{NodeT, PositionT};
/// use linarr::linarr::LinearArrangement;
///
/// let arr = LinearArrangement::from_direct(vec![2, 0, 1]).unwrap();
/// assert_eq!(arr[NodeT(0)], 2);      // vertex 0 sits at position 2
/// assert_eq!(arr[PositionT(2)], 0);  // position 2 holds vertex 0
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct LinearArrangement {
    direct: Vec<Position>,
    inverse: Vec<Node>,
}

impl LinearArrangement {
    /// The identity arrangement of `n` vertices
    pub fn identity(n: usize) -> Self {
        Self {
            direct: (0..n).collect(),
            inverse: (0..n).collect(),
        }
    }

    /// Arrangement from the vertex → position map
    ///
    /// Returns `None` if `direct` is not a permutation of `0..n`.
    pub fn from_direct(direct: Vec<Position>) -> Option<Self> {
        let n = direct.len();
        let mut inverse = vec![usize::MAX; n];
        for (u, &p) in direct.iter().enumerate() {
            if p >= n || inverse[p] != usize::MAX {
                return None;
            }
            inverse[p] = u;
        }
        Some(Self { direct, inverse })
    }

    /// Arrangement from the position → vertex map
    ///
    /// Returns `None` if `inverse` is not a permutation of `0..n`.
    pub fn from_inverse(inverse: Vec<Node>) -> Option<Self> {
        let n = inverse.len();
        let mut direct = vec![usize::MAX; n];
        for (p, &u) in inverse.iter().enumerate() {
            if u >= n || direct[u] != usize::MAX {
                return None;
            }
            direct[u] = p;
        }
        Some(Self { direct, inverse })
    }

    /// All-zero arrangement of `n` vertices, to be filled by `assign`
    ///
    /// Not a bijection until every vertex has been assigned once.
    pub(crate) fn zeroed(n: usize) -> Self {
        Self {
            direct: vec![0; n],
            inverse: vec![0; n],
        }
    }

    /// Number of vertices (= positions)
    pub fn len(&self) -> usize {
        self.direct.len()
    }

    /// Is the arrangement empty?
    pub fn is_empty(&self) -> bool {
        self.direct.is_empty()
    }

    /// Put vertex `u` at position `p`, updating both maps
    ///
    /// Stale entries of previous assignments at other positions are not
    /// cleared; constructing code assigns each vertex exactly once.
    #[inline]
    pub fn assign(&mut self, u: Node, p: Position) {
        self.direct[u] = p;
        self.inverse[p] = u;
    }

    /// Position of vertex `u`
    #[inline]
    pub fn position_of(&self, u: Node) -> Position {
        self.direct[u]
    }

    /// Vertex at position `p`
    #[inline]
    pub fn node_at(&self, p: Position) -> Node {
        self.inverse[p]
    }

    /// The vertex → position map
    pub fn direct(&self) -> &[Position] {
        &self.direct
    }

    /// The position → vertex map
    pub fn inverse(&self) -> &[Node] {
        &self.inverse
    }

    /// Is this a valid bijection with both maps in sync?
    pub fn is_arrangement(&self) -> bool {
        let n = self.len();
        self.direct.iter().all(|&p| p < n)
            && (0..n).all(|u| self.inverse[self.direct[u]] == u)
            && {
                let mut seen = vec![false; n];
                self.direct.iter().all(|&p| !std::mem::replace(&mut seen[p], true))
            }
    }

    /// The left-right mirror of this arrangement
    pub fn mirrored(&self) -> Self {
        let n = self.len();
        let mut m = Self::zeroed(n);
        for u in 0..n {
            m.assign(u, n - 1 - self.direct[u]);
        }
        m
    }
}

impl Index<NodeT> for LinearArrangement {
    type Output = Position;

    fn index(&self, u: NodeT) -> &Position {
        &self.direct[u.0]
    }
}

impl Index<PositionT> for LinearArrangement {
    type Output = Node;

    fn index(&self, p: PositionT) -> &Node {
        &self.inverse[p.0]
    }
}

/// Read-only view of an arrangement the engines are generic over
///
/// The two implementors let the compiler specialize every engine for the
/// identity (no memory reads at all) and for an explicit arrangement,
/// the same dispatch the identity tag gives callers of the public API.
pub(crate) trait View: Copy {
    /// Position of vertex `u`
    fn pos(&self, u: Node) -> Position;
    /// Vertex at position `p`
    fn at(&self, p: Position) -> Node;
}

/// The identity arrangement, no storage
#[derive(Clone, Copy)]
pub(crate) struct IdentityView;

impl View for IdentityView {
    #[inline(always)]
    fn pos(&self, u: Node) -> Position {
        u
    }

    #[inline(always)]
    fn at(&self, p: Position) -> Node {
        p
    }
}

/// View of an explicit [`LinearArrangement`]
#[derive(Clone, Copy)]
pub(crate) struct DirectView<'a>(pub &'a LinearArrangement);

impl View for DirectView<'_> {
    #[inline(always)]
    fn pos(&self, u: Node) -> Position {
        self.0.position_of(u)
    }

    #[inline(always)]
    fn at(&self, p: Position) -> Node {
        self.0.node_at(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_maps_stay_in_sync() {
        let mut arr = LinearArrangement::zeroed(3);
        arr.assign(0, 2);
        arr.assign(1, 0);
        arr.assign(2, 1);
        assert!(arr.is_arrangement());
        assert_eq!(arr.position_of(1), 0);
        assert_eq!(arr.node_at(2), 0);
        assert_eq!(arr, LinearArrangement::from_direct(vec![2, 0, 1]).unwrap());
        assert_eq!(
            arr,
            LinearArrangement::from_inverse(vec![1, 2, 0]).unwrap()
        );
    }

    #[test]
    fn invalid_permutations_rejected() {
        assert!(LinearArrangement::from_direct(vec![0, 0, 1]).is_none());
        assert!(LinearArrangement::from_direct(vec![0, 3, 1]).is_none());
    }

    #[test]
    fn mirror() {
        let arr = LinearArrangement::identity(4).mirrored();
        assert_eq!(arr.direct(), &[3, 2, 1, 0]);
        assert!(arr.is_arrangement());
    }
}
