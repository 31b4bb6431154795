//! CascadeGraph — compressed sparse graph engine for connectivity analysis.
//!
//! Loads a directed edge list (SNAP-style text, one `src dst` pair per line)
//! into a compressed-row adjacency structure and answers read-only traversal
//! queries: unweighted shortest path, bounded-depth reachability, DFS
//! preorder, degrees, neighbors, and a max-out-degree "critical node" lookup.
//!
//! The structure is built once per load and is immutable afterwards; every
//! query allocates its own scratch buffers, so shared references are safe to
//! query from multiple threads.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{parse_edge_list, EdgeList};
pub use graph::{depth_first_order, reachable_within_depth, shortest_path, Graph, SparseGraph};
pub use types::{GraphError, GraphResult, NodeId, COMMENT_MARKER, DEFAULT_EDGE_WEIGHT};
