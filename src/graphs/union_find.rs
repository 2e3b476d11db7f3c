//! Incremental maintenance of the per-tree union-find
//!
//! The tree types store two arrays, `root_of` and `root_size`, describing
//! the connected components of their current edge set. The functions here
//! repair those arrays after every kind of edit, each with a breadth-first
//! walk restricted to the part of the forest that actually changed.

use super::{Bfs, Graph, OnVisit};
use crate::basic_types::{Edge, Node};

/// Repair after the edge `{u,v}` joined two components
///
/// The smaller component is re-rooted under the larger one; the walk is
/// fenced at the larger side so it only touches the vertices whose root
/// actually changed.
pub(crate) fn after_add_edge<G: Graph>(
    g: &G,
    u: Node,
    v: Node,
    root_of: &mut [Node],
    root_size: &mut [u64],
) {
    let root_u = root_of[u];
    let root_v = root_of[v];
    debug_assert_ne!(root_u, root_v);

    let size_u = root_size[root_u];
    let size_v = root_size[root_v];
    let new_size = size_u + size_v;

    let (parent, child, new_root) = if size_u < size_v {
        root_of[root_u] = root_v;
        root_of[u] = root_v;
        root_size[root_v] = new_size;
        (v, u, root_v)
    } else {
        root_of[root_v] = root_u;
        root_of[v] = root_u;
        root_size[root_u] = new_size;
        (u, v, root_u)
    };

    let mut bfs = Bfs::new(g);
    bfs.set_use_rev_edges(G::DIRECTED);
    bfs.set_visited(parent, true);
    bfs.start_at(child, &mut OnVisit(|w| root_of[w] = new_root));
}

/// Repair after a batch of edge additions
pub(crate) fn after_add_edges<G: Graph>(
    g: &G,
    edges: &[Edge],
    root_of: &mut [Node],
    root_size: &mut [u64],
) {
    let mut bfs = Bfs::new(g);
    bfs.set_use_rev_edges(G::DIRECTED);
    for &(u, v) in edges {
        for w in [u, v] {
            if bfs.was_visited(w) {
                continue;
            }
            let mut size = 0u64;
            bfs.start_at(
                w,
                &mut OnVisit(|x| {
                    root_of[x] = w;
                    size += 1;
                }),
            );
            root_size[w] = size;
        }
    }
}

/// Full repair sweep, for bulk edits and vertex removal
pub(crate) fn after_edit_bulk<G: Graph>(g: &G, root_of: &mut [Node], root_size: &mut [u64]) {
    let mut bfs = Bfs::new(g);
    bfs.set_use_rev_edges(G::DIRECTED);
    for u in 0..g.num_nodes() {
        if bfs.was_visited(u) {
            continue;
        }
        let mut size = 0u64;
        bfs.start_at(
            u,
            &mut OnVisit(|x| {
                root_of[x] = u;
                size += 1;
            }),
        );
        root_size[u] = size;
    }
}

/// Repair after the edge `{u,v}` split one component in two
///
/// Must run *after* the edge is gone from the adjacency lists.
pub(crate) fn after_remove_edge<G: Graph>(
    g: &G,
    u: Node,
    v: Node,
    root_of: &mut [Node],
    root_size: &mut [u64],
) {
    debug_assert_eq!(root_of[u], root_of[v]);
    let size_uv = root_size[root_of[u]];

    let mut bfs = Bfs::new(g);
    bfs.set_use_rev_edges(G::DIRECTED);

    let mut size_u = 0u64;
    bfs.start_at(
        u,
        &mut OnVisit(|w| {
            root_of[w] = u;
            size_u += 1;
        }),
    );
    root_of[u] = u;
    root_size[u] = size_u;

    // the walk from v cannot leak into u's side, it is all visited already
    bfs.start_at(v, &mut OnVisit(|w| root_of[w] = v));
    root_of[v] = v;
    root_size[v] = size_uv - size_u;
}

/// Repair after a batch of edge removals
pub(crate) fn after_remove_edges<G: Graph>(
    g: &G,
    edges: &[Edge],
    root_of: &mut [Node],
    root_size: &mut [u64],
) {
    let mut bfs = Bfs::new(g);
    bfs.set_use_rev_edges(G::DIRECTED);
    for &(u, v) in edges {
        for w in [u, v] {
            if bfs.was_visited(w) {
                continue;
            }
            let mut size = 0u64;
            bfs.start_at(
                w,
                &mut OnVisit(|x| {
                    root_of[x] = w;
                    size += 1;
                }),
            );
            root_size[w] = size;
        }
    }
}

/// Repair *before* all edges incident to `u` are removed
///
/// Each neighbor becomes the root of its own side; `u` is fenced off so
/// every walk stays within one future component. Afterwards `u` is a
/// singleton.
pub(crate) fn before_remove_edges_incident_to<G: Graph>(
    g: &G,
    u: Node,
    root_of: &mut [Node],
    root_size: &mut [u64],
) {
    let mut bfs = Bfs::new(g);
    bfs.set_use_rev_edges(G::DIRECTED);
    bfs.set_visited(u, true);

    let neighbors: Vec<Node> = g
        .out_neighbors(u)
        .iter()
        .chain(g.in_neighbors(u))
        .copied()
        .collect();
    for v in neighbors {
        if bfs.was_visited(v) {
            continue;
        }
        let mut size = 0u64;
        bfs.start_at(
            v,
            &mut OnVisit(|w| {
                root_of[w] = v;
                size += 1;
            }),
        );
        root_of[v] = v;
        root_size[v] = size;
    }

    root_of[u] = u;
    root_size[u] = 1;
}
