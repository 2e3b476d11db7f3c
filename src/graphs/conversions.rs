//! Head vectors and their conversions to and from trees
//!
//! A head vector encodes a rooted tree of `n` vertices as a length-`n`
//! list: entry `i` holds the 1-based index of the parent of vertex `i`,
//! or 0 if `i` is the root.

use super::{FreeTree, Graph, GraphError, RootedTree};
use crate::basic_types::Node;
use crate::io::HeadVectorError;
use crate::linarr::LinearArrangement;

/// Build a rooted tree from a head vector
///
/// Stops at the first malformed entry; use
/// [`scan_head_vector`](crate::io::scan_head_vector) to collect every
/// error of an input instead.
pub fn rooted_tree_from_head_vector(hv: &[u64]) -> Result<RootedTree, HeadVectorError> {
    let n = hv.len();
    let mut root = None;
    for (i, &h) in hv.iter().enumerate() {
        if h == 0 {
            if root.is_some() {
                return Err(HeadVectorError::WrongNumberOfRoots {
                    num_roots: hv.iter().filter(|&&x| x == 0).count() as u64,
                });
            }
            root = Some(i);
        } else if h > n as u64 {
            return Err(HeadVectorError::OutOfBounds {
                position: i,
                value: h,
            });
        } else if h as usize == i + 1 {
            return Err(HeadVectorError::SelfLoop { position: i });
        }
    }
    let Some(root) = root else {
        return Err(HeadVectorError::WrongNumberOfRoots { num_roots: 0 });
    };

    let mut t = RootedTree::new(n);
    t.set_root(root).expect("root is in range");
    for (i, &h) in hv.iter().enumerate() {
        if h == 0 {
            continue;
        }
        let parent = (h - 1) as Node;
        match t.add_edge(parent, i) {
            Ok(()) => {}
            Err(GraphError::WouldCreateCycle) => {
                return Err(HeadVectorError::GraphHasCycles)
            }
            Err(_) => unreachable!("entries were validated above"),
        }
    }
    Ok(t)
}

/// Build a free tree from a head vector; also returns the encoded root
pub fn free_tree_from_head_vector(hv: &[u64]) -> Result<(FreeTree, Node), HeadVectorError> {
    let rt = rooted_tree_from_head_vector(hv)?;
    Ok((rt.to_free_tree(), rt.root()))
}

/// Serialize a rooted tree into a head vector
///
/// With an arrangement, entry `p` of the result describes the vertex at
/// position `p` and parents are given by *their* positions; `None` uses
/// the identity. Inverse of [`rooted_tree_from_head_vector`] in the sense
/// that reading the result back (and undoing the arrangement) restores
/// the tree.
pub fn to_head_vector(t: &RootedTree, arr: Option<&LinearArrangement>) -> Vec<u64> {
    let n = t.num_nodes();
    let mut hv = vec![0u64; n];
    for u in 0..n {
        let p = match arr {
            None => u,
            Some(a) => a.position_of(u),
        };
        hv[p] = match t.parent(u) {
            None => 0,
            Some(parent) => {
                let pp = match arr {
                    None => parent,
                    Some(a) => a.position_of(parent),
                };
                (pp + 1) as u64
            }
        };
    }
    hv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::Graph;

    #[test]
    fn head_vector_roundtrip() {
        let hv = vec![2u64, 3, 0, 3, 3];
        let t = rooted_tree_from_head_vector(&hv).unwrap();
        assert!(t.is_rooted_tree());
        assert_eq!(t.root(), 2);
        assert_eq!(to_head_vector(&t, None), hv);
    }

    #[test]
    fn roundtrip_through_arrangement() {
        let hv = vec![0u64, 1, 1, 2];
        let t = rooted_tree_from_head_vector(&hv).unwrap();
        let arr = LinearArrangement::from_direct(vec![3, 1, 0, 2]).unwrap();
        let hv_arr = to_head_vector(&t, Some(&arr));
        let t2 = rooted_tree_from_head_vector(&hv_arr).unwrap();
        // undo the arrangement: vertex at position p of t2 is arr⁻¹(p)
        for u in 0..t.num_nodes() {
            let v = arr.position_of(u);
            assert_eq!(t.degree(u), t2.degree(v));
            match t.parent(u) {
                None => assert_eq!(t2.parent(v), None),
                Some(p) => assert_eq!(t2.parent(v), Some(arr.position_of(p))),
            }
        }
    }

    #[test]
    fn malformed_inputs() {
        assert!(matches!(
            rooted_tree_from_head_vector(&[1, 0]),
            Err(HeadVectorError::SelfLoop { position: 0 })
        ));
        assert!(matches!(
            rooted_tree_from_head_vector(&[0, 0]),
            Err(HeadVectorError::WrongNumberOfRoots { num_roots: 2 })
        ));
        assert!(matches!(
            rooted_tree_from_head_vector(&[0, 9]),
            Err(HeadVectorError::OutOfBounds {
                position: 1,
                value: 9
            })
        ));
        // 0 <- 1 <- 2 with an extra cycle 1 <-> 2 is not encodable; a
        // genuine cycle: 0 -> 1 -> 2 -> 0 plus root 3
        assert!(matches!(
            rooted_tree_from_head_vector(&[2, 3, 1, 0]),
            Err(HeadVectorError::GraphHasCycles)
        ));
    }
}
