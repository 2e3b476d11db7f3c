//! # Linear arrangements of graphs
//!
//! * build graphs and trees over the vertex set `{0, …, n−1}` with
//!   [`graphs::UndirectedGraph`], [`graphs::DirectedGraph`],
//!   [`graphs::FreeTree`] and [`graphs::RootedTree`]
//! * an arrangement ([`linarr::LinearArrangement`]) is a bijection of
//!   the vertices onto the positions of a line; `None` always means the
//!   identity arrangement and costs no allocation
//! * the two classic costs are the number of edge crossings C
//!   ([`linarr::num_crossings`], four interchangeable engines) and the
//!   sum of edge lengths D ([`linarr::sum_edge_lengths`])
//! * D can be minimized and maximized over the unconstrained, planar,
//!   projective and bipartite arrangement classes, see
//!   [`linarr::dmin`] and [`linarr::dmax`]
//! * [`linarr::classify`] decides the syntactic dependency structure
//!   classes (projective, planar, WG1, EC1)
//! * expectations and variances of C and D under uniformly random
//!   arrangements live in [`properties`]
//!
//! # Example 1
//!
//! Costs of the identity arrangement of a path:
//!
//! ```
//! use linarr::graphs::FreeTree;
//! use linarr::linarr::{num_crossings, sum_edge_lengths, AlgorithmC};
//!
//! let t = FreeTree::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
//! assert_eq!(sum_edge_lengths(&t, None), 3);
//! assert_eq!(num_crossings(&t, None, AlgorithmC::Ladder), 0);
//! ```
//!
//! # Example 2
//!
//! The extrema of D of a star:
//!
//! ```
//! use linarr::graphs::FreeTree;
//! use linarr::linarr::{max_sum_edge_lengths, min_sum_edge_lengths, AlgorithmDmin};
//!
//! let star = FreeTree::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
//!
//! // hub in the middle, leaves around it
//! let (dmin, arr) = min_sum_edge_lengths(&star, AlgorithmDmin::Shiloach);
//! assert_eq!(dmin, 6);
//! assert!(arr.is_arrangement());
//!
//! // hub at one end, leaves after it
//! let (dmax, _) = max_sum_edge_lengths(&star);
//! assert_eq!(dmax, 10);
//! ```
//!
//! # Example 3
//!
//! Reading a head vector and classifying the structure:
//!
//! ```
//! use linarr::graphs::rooted_tree_from_head_vector;
//! use linarr::linarr::{classify, SyntacticDependencyTreeClass};
//!
//! // 0 marks the root; parents are 1-indexed
//! let t = rooted_tree_from_head_vector(&[0, 1, 2, 3]).unwrap();
//! let classes = classify(&t, None, None);
//! assert!(classes.is(SyntacticDependencyTreeClass::Projective));
//! ```
//!
//! # Example 4: save and load
//!
//! * only works if the feature `"serde_support"` is enabled
//! * note: `"serde_support"` is enabled by default
//!
//! ```
//! use linarr::graphs::FreeTree;
//!
//! let t = FreeTree::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
//!
//! #[cfg(feature = "serde_support")]
//! {
//!     let json = serde_json::to_string(&t).unwrap();
//!     let back: FreeTree = serde_json::from_str(&json).unwrap();
//!     assert!(back.is_tree());
//! }
//! ```
//!
//! # Example 5: random trees
//!
//! The generators take any `Rng`; use a seedable one for reproducible
//! experiments:
//!
//! ```
//! use linarr::generate::random_rooted_tree;
//! use linarr::linarr::{min_sum_edge_lengths_projective, sum_edge_lengths};
//! use rand::SeedableRng;
//! use rand_pcg::Pcg64;
//!
//! let mut rng = Pcg64::seed_from_u64(26);
//! let t = random_rooted_tree(8, &mut rng);
//! let (value, arr) = min_sum_edge_lengths_projective(&t);
//! assert_eq!(sum_edge_lengths(&t, Some(&arr)), value);
//! ```
#![deny(missing_docs)]

pub mod basic_types;
pub mod containers;
pub mod dot;
pub mod generate;
pub mod graphs;
pub mod io;
pub mod iterators;
pub mod linarr;
pub mod properties;
pub mod sorting;
pub mod utilities;

pub use basic_types::{Edge, EdgePair, Node, NodeT, Position, PositionT};
pub use dot::Dot;
pub use graphs::{
    DirectedGraph, FreeTree, Graph, GraphError, RootedTree, TreeType, UndirectedGraph,
};
pub use linarr::LinearArrangement;

pub use rand;
