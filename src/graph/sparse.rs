//! Compressed-row adjacency structure — the core data structure.

use std::mem;
use std::path::Path;

use log::{debug, info};

use crate::format;
use crate::graph::{traversal, Graph};
use crate::types::{GraphResult, NodeId, DEFAULT_EDGE_WEIGHT};

/// Directed multigraph over dense integer node ids in compressed-row form.
///
/// Three parallel arrays replace per-node adjacency containers:
/// `row_start[i]..row_start[i+1]` indexes node `i`'s outgoing destination
/// block in `column_index`, with each block in ascending destination order.
/// `edge_weight` runs parallel to `column_index` and holds `1` for
/// unweighted input; current queries do not read it.
///
/// Built exactly once per [`load`](SparseGraph::load) call and immutable
/// afterwards; queries allocate their own scratch buffers, so `&SparseGraph`
/// can be queried from any number of threads.
pub struct SparseGraph {
    row_start: Vec<usize>,
    column_index: Vec<NodeId>,
    edge_weight: Vec<u32>,
    node_count: usize,
    edge_count: usize,
}

impl SparseGraph {
    /// Create an empty graph (zero nodes, zero edges).
    pub fn new() -> Self {
        Self {
            row_start: vec![0],
            column_index: Vec::new(),
            edge_weight: Vec::new(),
            node_count: 0,
            edge_count: 0,
        }
    }

    /// Build directly from in-memory edge pairs. Node count is inferred from
    /// the largest endpoint id; duplicates and self-loops are preserved.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let edges: Vec<(NodeId, NodeId)> = edges.into_iter().collect();
        let max_node = edges.iter().map(|&(s, d)| s.max(d)).max();
        let mut graph = Self::new();
        graph.rebuild(edges, max_node);
        graph
    }

    /// Load an edge-list file, fully replacing the current contents.
    ///
    /// If the source cannot be opened or read, the error is returned and the
    /// previous contents are left untouched. Malformed lines are skipped by
    /// the parser and only show up in the log.
    pub fn load(&mut self, path: &Path) -> GraphResult<()> {
        let list = format::read_edge_list(path)?;
        if list.skipped > 0 {
            debug!("{}: skipped {} malformed lines", path.display(), list.skipped);
        }

        self.rebuild(list.edges, list.max_node);
        info!(
            "Loaded {}: {} nodes, {} edges, ~{} bytes CSR",
            path.display(),
            self.node_count,
            self.edge_count,
            self.estimated_memory_bytes()
        );
        Ok(())
    }

    /// Rebuild the three CSR arrays from a raw edge set.
    ///
    /// Two-pass construction: count out-degrees, exclusive prefix sum into
    /// `row_start`, then scatter destinations through per-node cursors. The
    /// edges are sorted by `(src, dst)` first so every destination block
    /// comes out ascending; deterministic traversal order depends on that.
    fn rebuild(&mut self, mut edges: Vec<(NodeId, NodeId)>, max_node: Option<NodeId>) {
        let node_count = max_node.map_or(0, |m| m as usize + 1);
        let edge_count = edges.len();

        edges.sort_unstable();

        let mut degree = vec![0usize; node_count];
        for &(src, _) in &edges {
            degree[src as usize] += 1;
        }

        let mut row_start = Vec::with_capacity(node_count + 1);
        let mut sum = 0usize;
        for &d in &degree {
            row_start.push(sum);
            sum += d;
        }
        row_start.push(sum);
        debug_assert_eq!(sum, edge_count);

        let mut column_index = vec![0 as NodeId; edge_count];
        let mut cursor = row_start[..node_count].to_vec();
        for &(src, dst) in &edges {
            let slot = &mut cursor[src as usize];
            column_index[*slot] = dst;
            *slot += 1;
        }

        self.row_start = row_start;
        self.column_index = column_index;
        self.edge_weight = vec![DEFAULT_EDGE_WEIGHT; edge_count];
        self.node_count = node_count;
        self.edge_count = edge_count;
    }

    /// Number of nodes (max node id seen + 1).
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of edge records as read.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether `node` names an existing node.
    pub fn contains(&self, node: NodeId) -> bool {
        (node as usize) < self.node_count
    }

    /// Borrowed view of a node's destination block. Crate-private: the
    /// public query surface only hands out owned copies.
    pub(crate) fn out_edges(&self, node: NodeId) -> &[NodeId] {
        if !self.contains(node) {
            return &[];
        }
        let idx = node as usize;
        &self.column_index[self.row_start[idx]..self.row_start[idx + 1]]
    }

    /// Number of outgoing edges, 0 if out of range.
    pub fn out_degree(&self, node: NodeId) -> usize {
        if !self.contains(node) {
            return 0;
        }
        let idx = node as usize;
        self.row_start[idx + 1] - self.row_start[idx]
    }

    /// Copy of the node's outgoing destinations in ascending order; empty if
    /// out of range.
    pub fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.out_edges(node).to_vec()
    }

    /// The node with maximum out-degree, smallest id on ties. `None` only
    /// for a graph with zero nodes. Duplicate edges count toward degree.
    pub fn most_critical_node(&self) -> Option<NodeId> {
        let mut best: Option<(NodeId, usize)> = None;
        for node in 0..self.node_count {
            let degree = self.row_start[node + 1] - self.row_start[node];
            // Strict > keeps the smallest id among equal maxima.
            let improves = best.map_or(true, |(_, best_degree)| degree > best_degree);
            if improves {
                best = Some((node as NodeId, degree));
            }
        }
        best.map(|(node, _)| node)
    }

    /// Approximate footprint of the three backing arrays, for capacity
    /// planning: element counts times element sizes, not allocator
    /// accounting.
    pub fn estimated_memory_bytes(&self) -> u64 {
        let rows = self.row_start.len() * mem::size_of::<usize>();
        let cols = self.column_index.len() * mem::size_of::<NodeId>();
        let weights = self.edge_weight.len() * mem::size_of::<u32>();
        (rows + cols + weights) as u64
    }
}

impl Default for SparseGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph for SparseGraph {
    fn load(&mut self, path: &Path) -> GraphResult<()> {
        SparseGraph::load(self, path)
    }

    fn shortest_path(&self, start: NodeId, goal: NodeId) -> Vec<NodeId> {
        traversal::shortest_path(self, start, goal)
    }

    fn reachable_within_depth(&self, start: NodeId, max_depth: u32) -> Vec<NodeId> {
        traversal::reachable_within_depth(self, start, max_depth)
    }

    fn depth_first_order(&self, start: NodeId) -> Vec<NodeId> {
        traversal::depth_first_order(self, start)
    }

    fn out_degree(&self, node: NodeId) -> usize {
        SparseGraph::out_degree(self, node)
    }

    fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        SparseGraph::neighbors(self, node)
    }

    fn node_count(&self) -> usize {
        SparseGraph::node_count(self)
    }

    fn edge_count(&self) -> usize {
        SparseGraph::edge_count(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let g = SparseGraph::new();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.neighbors(0), Vec::<NodeId>::new());
        assert_eq!(g.out_degree(0), 0);
        assert_eq!(g.most_critical_node(), None);
    }

    #[test]
    fn test_blocks_sorted_from_unsorted_input() {
        // Deliberately unsorted input; blocks must come out ascending.
        let g = SparseGraph::from_edges(vec![(0, 3), (0, 1), (0, 2), (1, 0)]);
        assert_eq!(g.neighbors(0), vec![1, 2, 3]);
        assert_eq!(g.neighbors(1), vec![0]);
    }

    #[test]
    fn test_isolated_middle_node() {
        // Node 1 is never a source; its row must be an empty block, not a gap.
        let g = SparseGraph::from_edges(vec![(0, 2), (2, 0)]);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.out_degree(1), 0);
        assert_eq!(g.neighbors(1), Vec::<NodeId>::new());
        assert_eq!(g.neighbors(2), vec![0]);
    }

    #[test]
    fn test_duplicates_and_self_loops_preserved() {
        let g = SparseGraph::from_edges(vec![(0, 1), (0, 1), (2, 2)]);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.neighbors(0), vec![1, 1]);
        assert_eq!(g.neighbors(2), vec![2]);
        assert_eq!(g.out_degree(0), 2);
    }

    #[test]
    fn test_node_only_referenced_as_destination() {
        let g = SparseGraph::from_edges(vec![(0, 9)]);
        assert_eq!(g.node_count(), 10);
        assert_eq!(g.out_degree(9), 0);
    }

    #[test]
    fn test_critical_node_tie_smallest_id() {
        // Nodes 2 and 7 both have out-degree 2.
        let g = SparseGraph::from_edges(vec![(2, 0), (2, 1), (7, 0), (7, 1), (3, 0)]);
        assert_eq!(g.most_critical_node(), Some(2));
    }

    #[test]
    fn test_critical_node_all_zero_degree() {
        // Node 5 only has incoming edges; source node 0 wins with degree 1.
        let g = SparseGraph::from_edges(vec![(0, 5)]);
        assert_eq!(g.most_critical_node(), Some(0));
    }

    #[test]
    fn test_memory_estimate_tracks_arrays() {
        let g = SparseGraph::from_edges(vec![(0, 1), (1, 2)]);
        let expected = (4 * mem::size_of::<usize>()      // row_start: 3 nodes + 1
            + 2 * mem::size_of::<NodeId>()               // column_index
            + 2 * mem::size_of::<u32>()) as u64; // edge_weight
        assert_eq!(g.estimated_memory_bytes(), expected);
    }
}
