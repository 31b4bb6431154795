//! The graph capability contract and its compressed-row implementation.

pub mod sparse;
pub mod traversal;

use std::path::Path;

use crate::types::{GraphResult, NodeId};

pub use sparse::SparseGraph;
pub use traversal::{depth_first_order, reachable_within_depth, shortest_path};

/// Capability set every graph representation must expose.
///
/// Callers stay representation-agnostic: an adjacency-list or dense-matrix
/// variant can be substituted without touching query code. All query methods
/// are total (an out-of-range node id yields an empty/zero result, never an
/// error) and return owned sequences, never views into internal storage.
pub trait Graph {
    /// Replace the current contents from an edge-list file. On failure the
    /// previous contents are retained.
    fn load(&mut self, path: &Path) -> GraphResult<()>;

    /// Unweighted shortest path from `start` to `goal`, both endpoints
    /// included. Empty if `start` is out of range or no path exists.
    fn shortest_path(&self, start: NodeId, goal: NodeId) -> Vec<NodeId>;

    /// All nodes reachable within `max_depth` hops, in BFS discovery order,
    /// `start` first. Empty if `start` is out of range.
    fn reachable_within_depth(&self, start: NodeId, max_depth: u32) -> Vec<NodeId>;

    /// Full depth-first preorder from `start`, ascending neighbor order.
    /// Empty if `start` is out of range.
    fn depth_first_order(&self, start: NodeId) -> Vec<NodeId>;

    /// Number of outgoing edges, 0 if out of range.
    fn out_degree(&self, node: NodeId) -> usize;

    /// Copy of the node's outgoing destinations, ascending; empty if out of
    /// range.
    fn neighbors(&self, node: NodeId) -> Vec<NodeId>;

    /// Number of nodes (max node id seen + 1).
    fn node_count(&self) -> usize;

    /// Number of edge records as read, duplicates and self-loops included.
    fn edge_count(&self) -> usize;
}
