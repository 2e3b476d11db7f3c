//! Graphviz export
//!
//! Dot files can be used to visualize a graph. To render, use something
//! like
//! ```dot
//! twopi dotfile.dot -Tpdf > dotfile.pdf
//! circo dotfile.dot -Tpdf > dotfile.pdf
//! ```
//! You can also try some of the other [layouts](https://www.graphviz.org/).

use crate::graphs::{DirectedGraph, FreeTree, Graph, RootedTree, UndirectedGraph};
use std::io::Write;

/// Write a graph in graphviz format
pub trait Dot {
    /// Use a function to create labels depending on the index
    fn dot_from_indices<F, W, S1, S2>(
        &self,
        writer: &mut W,
        dot_options: S1,
        f: F,
    ) -> Result<(), std::io::Error>
    where
        S1: AsRef<str>,
        S2: AsRef<str>,
        W: Write,
        F: FnMut(usize) -> S2;

    /// Use the index as the label of each node
    fn dot_with_indices<S, W>(
        &self,
        dot_options: S,
        writer: &mut W,
    ) -> Result<(), std::io::Error>
    where
        S: AsRef<str>,
        W: Write,
    {
        self.dot_from_indices(writer, dot_options, |index| index.to_string())
    }

    /// Create a dot file with empty labels
    fn dot<S, W>(&self, dot_options: S, writer: &mut W) -> Result<(), std::io::Error>
    where
        S: AsRef<str>,
        W: Write,
    {
        self.dot_from_indices(writer, dot_options, |_| "")
    }

    /// The dot file as a `String`
    fn dot_string<S: AsRef<str>>(&self, dot_options: S) -> String {
        let mut buffer = Vec::new();
        self.dot_with_indices(dot_options, &mut buffer)
            .expect("writing to a Vec cannot fail");
        String::from_utf8(buffer).expect("dot output is valid utf8")
    }
}

fn write_graph<G, F, W, S1, S2>(
    g: &G,
    writer: &mut W,
    dot_options: S1,
    mut f: F,
    directed: bool,
) -> Result<(), std::io::Error>
where
    G: Graph,
    S1: AsRef<str>,
    S2: AsRef<str>,
    W: Write,
    F: FnMut(usize) -> S2,
{
    let (head, connector) = if directed {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };
    writeln!(writer, "{} {{", head)?;
    writeln!(writer, "\t{}", dot_options.as_ref())?;
    for u in 0..g.num_nodes() {
        writeln!(writer, "\t{} [label=\"{}\"];", u, f(u).as_ref())?;
    }
    for (u, v) in g.edges() {
        writeln!(writer, "\t{} {} {};", u, connector, v)?;
    }
    writeln!(writer, "}}")
}

impl Dot for UndirectedGraph {
    fn dot_from_indices<F, W, S1, S2>(
        &self,
        writer: &mut W,
        dot_options: S1,
        f: F,
    ) -> Result<(), std::io::Error>
    where
        S1: AsRef<str>,
        S2: AsRef<str>,
        W: Write,
        F: FnMut(usize) -> S2,
    {
        write_graph(self, writer, dot_options, f, false)
    }
}

impl Dot for FreeTree {
    fn dot_from_indices<F, W, S1, S2>(
        &self,
        writer: &mut W,
        dot_options: S1,
        f: F,
    ) -> Result<(), std::io::Error>
    where
        S1: AsRef<str>,
        S2: AsRef<str>,
        W: Write,
        F: FnMut(usize) -> S2,
    {
        write_graph(self, writer, dot_options, f, false)
    }
}

impl Dot for DirectedGraph {
    fn dot_from_indices<F, W, S1, S2>(
        &self,
        writer: &mut W,
        dot_options: S1,
        f: F,
    ) -> Result<(), std::io::Error>
    where
        S1: AsRef<str>,
        S2: AsRef<str>,
        W: Write,
        F: FnMut(usize) -> S2,
    {
        write_graph(self, writer, dot_options, f, true)
    }
}

impl Dot for RootedTree {
    fn dot_from_indices<F, W, S1, S2>(
        &self,
        writer: &mut W,
        dot_options: S1,
        f: F,
    ) -> Result<(), std::io::Error>
    where
        S1: AsRef<str>,
        S2: AsRef<str>,
        W: Write,
        F: FnMut(usize) -> S2,
    {
        write_graph(self, writer, dot_options, f, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_output_contains_edges() {
        let g = UndirectedGraph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        let s = g.dot_string("");
        assert!(s.starts_with("graph {"));
        assert!(s.contains("0 -- 1;"));
        assert!(s.contains("1 -- 2;"));

        let t = crate::graphs::FreeTree::from_edges(2, &[(0, 1)]).unwrap();
        let rt = crate::graphs::RootedTree::from_free_tree(&t, 1).unwrap();
        let s = rt.dot_string("");
        assert!(s.starts_with("digraph {"));
        assert!(s.contains("1 -> 0;"));
    }
}
