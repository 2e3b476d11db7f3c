//! Validation of head-vector input
//!
//! The conversions in [`graphs`](crate::graphs) stop at the first
//! malformed entry; the scanners here instead accumulate *every* error of
//! an input, with the position and the offending value, so a whole file
//! of head vectors can be diagnosed in one pass.

use crate::basic_types::Node;
use std::fmt;

/// One defect of a head vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadVectorError {
    /// A chunk of the input line is not a non-negative integer
    InvalidInteger {
        /// 0-based index of the chunk within the line
        position: usize,
        /// The offending chunk
        chunk: String,
    },
    /// A head index exceeds the number of vertices
    OutOfBounds {
        /// 0-based index of the entry
        position: usize,
        /// The offending value
        value: u64,
    },
    /// An entry names its own vertex as parent
    SelfLoop {
        /// 0-based index of the entry
        position: usize,
    },
    /// Not exactly one entry equal to 0
    WrongNumberOfRoots {
        /// How many roots the vector declares
        num_roots: u64,
    },
    /// The described graph contains a cycle
    GraphHasCycles,
    /// A vertex ends up with no incident edge
    IsolatedVertex {
        /// The isolated vertex
        node: Node,
    },
    /// The edge count does not match `n − 1`
    WrongNumberOfEdges {
        /// Number of vertices
        nodes: usize,
        /// Number of edges actually described
        edges: usize,
    },
}

impl fmt::Display for HeadVectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HeadVectorError::InvalidInteger { position, chunk } => write!(
                f,
                "value at position '{}' (value: '{}') is not a valid non-negative integer",
                position, chunk
            ),
            HeadVectorError::OutOfBounds { position, value } => write!(
                f,
                "head index at position '{}' (value: {}) is out of bounds",
                position, value
            ),
            HeadVectorError::SelfLoop { position } => {
                write!(f, "found a self-loop at position '{}'", position)
            }
            HeadVectorError::WrongNumberOfRoots { num_roots } => {
                write!(f, "wrong number of roots: {}", num_roots)
            }
            HeadVectorError::GraphHasCycles => {
                write!(f, "the graph described is not a tree, i.e., it has cycles")
            }
            HeadVectorError::IsolatedVertex { node } => {
                write!(f, "vertex '{}' is isolated", node)
            }
            HeadVectorError::WrongNumberOfEdges { nodes, edges } => write!(
                f,
                "wrong number of edges; number of vertices is '{}', number of edges is '{}', should be '{}'",
                nodes,
                edges,
                nodes.saturating_sub(1)
            ),
        }
    }
}

impl std::error::Error for HeadVectorError {}

/// Accumulated defects of a multi-line input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadVectorReport {
    /// Per line: 0-based line number and the defects found there
    pub errors: Vec<(usize, Vec<HeadVectorError>)>,
}

impl HeadVectorReport {
    /// Did every line scan clean?
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of defects across all lines
    pub fn num_errors(&self) -> usize {
        self.errors.iter().map(|(_, es)| es.len()).sum()
    }
}

/// Collect every defect of a head vector
pub fn scan_head_vector(hv: &[u64]) -> Vec<HeadVectorError> {
    let n = hv.len();
    let mut errors = Vec::new();

    let mut num_roots = 0u64;
    let mut can_make_graph = true;
    for (i, &h) in hv.iter().enumerate() {
        if h == 0 {
            num_roots += 1;
        } else if h > n as u64 {
            errors.push(HeadVectorError::OutOfBounds {
                position: i,
                value: h,
            });
            can_make_graph = false;
        } else if h as usize == i + 1 {
            errors.push(HeadVectorError::SelfLoop { position: i });
            can_make_graph = false;
        }
    }

    if num_roots != 1 {
        errors.push(HeadVectorError::WrongNumberOfRoots { num_roots });
    }

    if can_make_graph && n > 1 {
        // union-find over the well-formed entries
        let mut comp: Vec<Node> = (0..n).collect();
        fn find(comp: &mut [Node], mut u: Node) -> Node {
            while comp[u] != u {
                comp[u] = comp[comp[u]];
                u = comp[u];
            }
            u
        }

        let mut degree = vec![0usize; n];
        let mut edges = 0usize;
        let mut has_cycle = false;
        for (i, &h) in hv.iter().enumerate() {
            if h == 0 {
                continue;
            }
            let parent = (h - 1) as Node;
            degree[i] += 1;
            degree[parent] += 1;
            edges += 1;
            let (a, b) = (find(&mut comp, i), find(&mut comp, parent));
            if a == b {
                has_cycle = true;
            } else {
                comp[a] = b;
            }
        }

        if has_cycle {
            errors.push(HeadVectorError::GraphHasCycles);
        }
        for (u, &d) in degree.iter().enumerate() {
            if d == 0 {
                errors.push(HeadVectorError::IsolatedVertex { node: u });
            }
        }
        if edges != n - 1 {
            errors.push(HeadVectorError::WrongNumberOfEdges { nodes: n, edges });
        }
    }

    errors
}

/// Parse a whitespace-separated line into a head vector
///
/// Returns the parsed vector, or every chunk that failed to parse.
pub fn parse_head_vector(line: &str) -> Result<Vec<u64>, Vec<HeadVectorError>> {
    let mut hv = Vec::new();
    let mut errors = Vec::new();
    for (i, chunk) in line.split_whitespace().enumerate() {
        match chunk.parse::<u64>() {
            Ok(value) => hv.push(value),
            Err(_) => errors.push(HeadVectorError::InvalidInteger {
                position: i,
                chunk: chunk.to_string(),
            }),
        }
    }
    if errors.is_empty() {
        Ok(hv)
    } else {
        Err(errors)
    }
}

/// Collect every defect of a single input line
pub fn scan_head_vector_line(line: &str) -> Vec<HeadVectorError> {
    match parse_head_vector(line) {
        Ok(hv) => scan_head_vector(&hv),
        Err(errors) => errors,
    }
}

/// Scan many lines, accumulating a per-line report
///
/// Blank lines are skipped, mirroring the usual treebank layout of one
/// head vector per line.
pub fn scan_head_vectors<'a, I>(lines: I) -> HeadVectorReport
where
    I: IntoIterator<Item = &'a str>,
{
    let mut report = HeadVectorReport::default();
    for (lineno, line) in lines.into_iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let errors = scan_head_vector_line(line);
        if !errors.is_empty() {
            report.errors.push((lineno, errors));
        }
    }
    report
}
